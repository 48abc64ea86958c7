//! Control flow: model building, engine invocation, and the two error
//! layers around them.
//!
//! Engine infeasibility or failure degrades to the fallback scheduler
//! and still reports success; only a top-level parse failure (or the
//! fallback itself faulting) produces the error-shaped result. No path
//! panics or propagates a hard failure.

use crate::data::{ProblemInput, TimetableResult};
use crate::error::ScheduleError;
use crate::extract::extract_solution;
use crate::fallback::fallback_schedule;
use crate::model::build_model;
use crate::rules::ScheduleRules;
use crate::solver::{EngineOutcome, SolvingEngine};
use log::warn;

/// Generates a timetable for an already-parsed problem description.
pub fn generate(input: &ProblemInput, engine: &dyn SolvingEngine) -> TimetableResult {
    let rules = ScheduleRules::default();
    let model = build_model(input, &rules);

    let degraded = match engine.solve(&model) {
        EngineOutcome::Optimal(selected) | EngineOutcome::Feasible(selected) => {
            return extract_solution(&model, &selected, input, &rules);
        }
        EngineOutcome::Infeasible => {
            warn!("No satisfying assignment exists; using fallback scheduler.");
            fallback_schedule(input, &rules)
        }
        EngineOutcome::Error(e) => {
            warn!("Engine failed ({e}); using fallback scheduler.");
            fallback_schedule(input, &rules)
        }
    };

    degraded.unwrap_or_else(|e| TimetableResult::error(format!("Error in timetable generation: {e}")))
}

/// Parses a raw problem description and generates a timetable. Parse
/// failures yield the error envelope rather than propagating.
pub fn generate_from_json(raw: &str, engine: &dyn SolvingEngine) -> TimetableResult {
    match serde_json::from_str::<ProblemInput>(raw).map_err(ScheduleError::from) {
        Ok(input) => generate(&input, engine),
        Err(e) => TimetableResult::error(format!("Error in timetable generation: {e}")),
    }
}
