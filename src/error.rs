//! Error type for timetable generation.

use thiserror::Error;

/// Failures that can occur before or during schedule generation. Engine
/// failures are not represented here: they are absorbed by the fallback
/// path and never surface as errors.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The top-level problem description could not be parsed.
    #[error("invalid problem description: {0}")]
    Parse(#[from] serde_json::Error),

    /// The fallback scheduler has courses to place but no teacher to
    /// rotate through.
    #[error("no teachers available to assign sessions to")]
    NoTeachers,
}
