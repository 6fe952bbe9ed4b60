use super::duration::format_duration;
use crate::catalog::models::Lecture;
use crate::error::TimingError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeSummary {
    pub start: usize,
    pub end: usize,
    pub count: usize,
    pub total_seconds: u64,
    pub average_seconds: u64,
    pub total: String,
    pub average: String,
}

/// Check a 1-based inclusive `start..=end` against a list of `len` lectures.
pub fn validate_range(len: usize, start: usize, end: usize) -> Result<(), TimingError> {
    if start >= 1 && start <= end && end <= len {
        Ok(())
    } else {
        Err(TimingError::InvalidRange { start, end, len })
    }
}

/// Total and truncated average of lectures `start..=end` (1-based, inclusive).
///
/// Callers validate the range first; an invalid one summarizes to zeros.
pub fn summarize_range(lectures: &[Lecture<'_>], start: usize, end: usize) -> RangeSummary {
    let selected: &[Lecture<'_>] = match validate_range(lectures.len(), start, end) {
        Ok(()) => &lectures[start - 1..end],
        Err(e) => {
            tracing::debug!(error = %e, "Summarizing invalid range as empty");
            &[]
        }
    };

    let count = selected.len();
    let total_seconds: u64 = selected.iter().map(|l| l.seconds).sum();
    let average_seconds = if count == 0 {
        0
    } else {
        total_seconds / count as u64
    };

    RangeSummary {
        start,
        end,
        count,
        total_seconds,
        average_seconds,
        total: format_duration(total_seconds),
        average: format_duration(average_seconds),
    }
}
