use crate::data::{Metadata, ProblemInput, Session, Timetable, TimetableResult};
use crate::grid;
use crate::model::ScheduleModel;
use crate::rules::ScheduleRules;
use log::info;

/// Walks a satisfying assignment and produces the exported timetable.
///
/// Every selected variable becomes one session under its day-slot key;
/// sessions that share a key overwrite earlier ones (the export is
/// deliberately lossy) while `total_slots` counts all of them.
pub fn extract_solution(
    model: &ScheduleModel,
    selected: &[usize],
    input: &ProblemInput,
    rules: &ScheduleRules,
) -> TimetableResult {
    let mut order: Vec<usize> = selected.to_vec();
    order.sort_unstable();

    let mut timetable = Timetable::new();
    for &idx in &order {
        let key = model.vars[idx];
        let course = &input.courses[key.course];
        let teacher = &input.teachers[key.teacher];
        let id = format!("slot_{}_{}_{}_{}", key.course, key.batch, key.day, key.slot);
        let session = Session::derive(
            id, key.course, course, teacher, key.batch, key.room, input, rules,
        );
        timetable.insert(grid::slot_key(key.day, key.slot), session);
    }

    let metadata = Metadata::solved(
        order.len() as u32,
        input.courses.len(),
        input.batches as usize,
    );
    info!(
        "Extracted {} sessions, utilization {:.1}%.",
        metadata.total_slots, metadata.utilization
    );
    TimetableResult::solved(
        "Timetable generated successfully using ILP optimization",
        timetable,
        metadata,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SessionType, SolverStatus, Teacher};
    use crate::model::VarKey;

    fn fixture() -> (ScheduleModel, ProblemInput) {
        let input = ProblemInput {
            courses: vec!["Calculus".to_string(), "Physics Lab".to_string()],
            teachers: vec![Teacher {
                name: Some("A".to_string()),
                subject: Some("calculus".to_string()),
            }],
            ..ProblemInput::default()
        };
        let vars = vec![
            VarKey {
                course: 0,
                batch: 0,
                day: 0,
                slot: 1,
                room: 2,
                teacher: 0,
            },
            VarKey {
                course: 1,
                batch: 0,
                day: 2,
                slot: 3,
                room: 6,
                teacher: 0,
            },
            // same day/slot as the first entry, different room
            VarKey {
                course: 1,
                batch: 0,
                day: 0,
                slot: 1,
                room: 7,
                teacher: 0,
            },
        ];
        let model = ScheduleModel {
            vars,
            constraints: Vec::new(),
        };
        (model, input)
    }

    #[test]
    fn sessions_carry_derived_attributes() {
        let (model, input) = fixture();
        let result = extract_solution(&model, &[0, 1], &input, &ScheduleRules::default());
        assert!(result.success);
        assert_eq!(
            result.message.as_deref(),
            Some("Timetable generated successfully using ILP optimization")
        );

        let lecture = &result.timetable["Monday-1"];
        assert_eq!(lecture.id, "slot_0_0_0_1");
        assert_eq!(lecture.subject, "Calculus");
        assert_eq!(lecture.faculty, "A");
        assert_eq!(lecture.room, "Room 103");
        assert_eq!(lecture.credits, 3);
        assert_eq!(lecture.session_type, SessionType::Lecture);

        let lab = &result.timetable["Wednesday-3"];
        assert_eq!(lab.room, "Lab 207");
        assert_eq!(lab.credits, 2);
        assert_eq!(lab.session_type, SessionType::Lab);
    }

    #[test]
    fn metadata_counts_every_selected_variable() {
        let (model, input) = fixture();
        let result = extract_solution(&model, &[0, 1], &input, &ScheduleRules::default());
        assert_eq!(result.metadata.total_slots, 2);
        assert_eq!(result.metadata.solver_status, SolverStatus::Optimal);
        // 2 courses x 1 batch x 48 grid cells
        assert!((result.metadata.utilization - 2.0 / 96.0 * 100.0).abs() < 1e-9);
    }

    // The export map is keyed by day-slot only, so a second session in
    // the same cell replaces the first while total_slots counts both.
    #[test]
    fn same_cell_sessions_overwrite_but_are_still_counted() {
        let (model, input) = fixture();
        let result = extract_solution(&model, &[0, 2], &input, &ScheduleRules::default());
        assert_eq!(result.metadata.total_slots, 2);
        assert_eq!(result.timetable.len(), 1);
        assert_eq!(result.timetable["Monday-1"].subject, "Physics Lab");
    }

    #[test]
    fn empty_selection_reports_zero_utilization_for_empty_input() {
        let model = ScheduleModel {
            vars: Vec::new(),
            constraints: Vec::new(),
        };
        let input = ProblemInput::default();
        let result = extract_solution(&model, &[], &input, &ScheduleRules::default());
        assert!(result.success);
        assert!(result.timetable.is_empty());
        assert_eq!(result.metadata.total_slots, 0);
        assert_eq!(result.metadata.utilization, 0.0);
    }
}
