pub mod chunks;
pub mod duration;
pub mod range;
