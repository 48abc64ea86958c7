//! Weekly timetable generation for student batches.
//!
//! Builds a boolean decision-variable model over (course, batch, day,
//! slot, room, teacher) tuples, hands it to a [`SolvingEngine`] (an ILP
//! encoding over HiGHS ships as [`IlpEngine`]), and extracts the
//! resulting assignment into a keyed timetable. When no satisfying
//! assignment is available a deterministic fallback scheduler produces
//! a best-effort schedule instead.

pub mod data;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod grid;
pub mod model;
pub mod pipeline;
pub mod rules;
pub mod solver;

pub use data::{Metadata, ProblemInput, Session, SolverStatus, Teacher, Timetable, TimetableResult};
pub use error::ScheduleError;
pub use model::{ScheduleModel, build_model};
pub use pipeline::{generate, generate_from_json};
pub use rules::ScheduleRules;
pub use solver::{EngineOutcome, IlpEngine, SolvingEngine};
