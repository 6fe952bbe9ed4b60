use super::duration::format_duration;
use crate::catalog::models::Lecture;
use crate::error::TimingError;
use serde::Serialize;

/// Consecutive lectures grouped until their running total reaches the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk<'a> {
    pub lectures: Vec<Lecture<'a>>,
    pub total_seconds: u64,
    pub total: String,
}

impl<'a> Chunk<'a> {
    fn close(lectures: Vec<Lecture<'a>>, total_seconds: u64) -> Self {
        Self {
            lectures,
            total_seconds,
            total: format_duration(total_seconds),
        }
    }
}

pub fn chunk_threshold_secs(minutes: u32) -> Result<u64, TimingError> {
    if minutes == 0 {
        return Err(TimingError::NonPositiveChunk);
    }
    Ok(u64::from(minutes) * 60)
}

/// Split lectures, in order, into chunks of at least `threshold_secs`.
///
/// A chunk closes as soon as its total reaches the threshold. Whatever is left
/// at the end becomes a final, shorter chunk.
pub fn split_into_chunks<'a>(lectures: &[Lecture<'a>], threshold_secs: u64) -> Vec<Chunk<'a>> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();
    let mut total = 0u64;

    for lecture in lectures {
        total = total.saturating_add(lecture.seconds);
        current.push(*lecture);

        if total >= threshold_secs {
            chunks.push(Chunk::close(std::mem::take(&mut current), total));
            total = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(Chunk::close(current, total));
    }

    chunks
}
