use crate::data::{Metadata, ProblemInput, Session, Timetable, TimetableResult};
use crate::error::ScheduleError;
use crate::grid::{self, LUNCH_SLOT, NUM_DAYS, NUM_ROOMS, SLOTS_PER_DAY};
use crate::rules::ScheduleRules;
use log::info;

/// Constraint-unaware round-robin scheduler used when the engine reports
/// infeasibility or fails.
///
/// A single counter walks the week: each session lands at
/// `day = (counter / 8) % 6`, `slot = counter % 8` (the lunch slot is
/// bumped to the next one), `room = counter % 10`, with the teacher
/// rotated by course index. Sessions per course are 3 for even course
/// indices and 2 for odd ones, independent of credits. No conflict
/// checking happens; collisions are accepted as a degraded result.
pub fn fallback_schedule(
    input: &ProblemInput,
    rules: &ScheduleRules,
) -> Result<TimetableResult, ScheduleError> {
    if input.teachers.is_empty() && !input.courses.is_empty() && input.batches > 0 {
        return Err(ScheduleError::NoTeachers);
    }

    let mut timetable = Timetable::new();
    let mut total_slots = 0u32;
    let mut counter = 0usize;

    for (course_idx, course) in input.courses.iter().enumerate() {
        for batch in 0..input.batches as usize {
            let sessions = if course_idx % 2 == 0 { 3 } else { 2 };
            for session in 0..sessions {
                let day = (counter / SLOTS_PER_DAY) % NUM_DAYS;
                let mut slot = counter % SLOTS_PER_DAY;
                if slot == LUNCH_SLOT {
                    slot = LUNCH_SLOT + 1;
                }
                let room = counter % NUM_ROOMS;
                let teacher = &input.teachers[course_idx % input.teachers.len()];
                let id = format!("fallback_{course_idx}_{batch}_{session}");
                let entry =
                    Session::derive(id, course_idx, course, teacher, batch, room, input, rules);
                timetable.insert(grid::slot_key(day, slot), entry);
                total_slots += 1;
                counter += 1;
            }
        }
    }

    info!("Fallback scheduler placed {} sessions.", total_slots);
    Ok(TimetableResult::solved(
        "Timetable generated using fallback algorithm",
        timetable,
        Metadata::fallback(total_slots),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SolverStatus, Teacher};

    fn input(courses: &[&str], teachers: &[&str], batches: u32) -> ProblemInput {
        ProblemInput {
            courses: courses.iter().map(|c| c.to_string()).collect(),
            teachers: teachers
                .iter()
                .map(|t| Teacher {
                    name: Some(t.to_string()),
                    subject: None,
                })
                .collect(),
            batches,
            ..ProblemInput::default()
        }
    }

    #[test]
    fn counter_walks_days_slots_and_rooms() {
        let rules = ScheduleRules::default();
        let input = input(&["Calculus", "History"], &["A", "B"], 1);
        let result = fallback_schedule(&input, &rules).unwrap();
        // Calculus (even index): 3 sessions at counters 0..2
        assert_eq!(result.timetable["Monday-0"].subject, "Calculus");
        assert_eq!(result.timetable["Monday-0"].room, "Room 101");
        assert_eq!(result.timetable["Monday-0"].faculty, "A");
        assert_eq!(result.timetable["Monday-2"].id, "fallback_0_0_2");
        // History (odd index): 2 sessions at counters 3..4
        assert_eq!(result.timetable["Monday-3"].subject, "History");
        assert_eq!(result.timetable["Monday-3"].faculty, "B");
        assert_eq!(result.metadata.total_slots, 5);
    }

    #[test]
    fn lunch_slot_is_bumped_to_the_next_slot() {
        let rules = ScheduleRules::default();
        // 5 sessions: the fifth hits counter 4 (the lunch slot)
        let input = input(&["Calculus", "History"], &["A"], 1);
        let result = fallback_schedule(&input, &rules).unwrap();
        assert!(!result.timetable.contains_key("Monday-4"));
        // counter 4 lands on slot 5 with room 105
        assert_eq!(result.timetable["Monday-5"].room, "Room 105");
    }

    #[test]
    fn session_counts_ignore_credits() {
        let rules = ScheduleRules::default();
        // a lab at an even index still gets 3 sessions
        let input = input(&["Physics Lab"], &["A"], 1);
        let result = fallback_schedule(&input, &rules).unwrap();
        assert_eq!(result.metadata.total_slots, 3);
    }

    #[test]
    fn fallback_metadata_is_fixed() {
        let rules = ScheduleRules::default();
        let result = fallback_schedule(&input(&["Calculus"], &["A"], 1), &rules).unwrap();
        assert!(result.success);
        assert_eq!(result.metadata.solver_status, SolverStatus::Fallback);
        assert_eq!(result.metadata.utilization, 85.0);
        assert_eq!(result.metadata.conflicts, 0);
    }

    #[test]
    fn rerunning_identical_input_yields_identical_timetable() {
        let rules = ScheduleRules::default();
        let input = input(&["Calculus", "Physics Lab", "Thesis"], &["A", "B"], 2);
        let first = fallback_schedule(&input, &rules).unwrap();
        let second = fallback_schedule(&input, &rules).unwrap();
        assert_eq!(first.timetable, second.timetable);
        assert_eq!(first.metadata, second.metadata);
    }

    #[test]
    fn batch_counts_beyond_the_alphabet_still_schedule() {
        let rules = ScheduleRules::default();
        let input = input(&["Calculus"], &["A"], 192);
        let result = fallback_schedule(&input, &rules).unwrap();
        assert_eq!(result.metadata.total_slots, 3 * 192);
        assert!(
            result
                .timetable
                .values()
                .any(|s| s.batch == "Batch Ā")
        );
    }

    #[test]
    fn courses_without_teachers_is_an_error() {
        let rules = ScheduleRules::default();
        let err = fallback_schedule(&input(&["Calculus"], &[], 1), &rules).unwrap_err();
        assert!(matches!(err, ScheduleError::NoTeachers));
    }

    #[test]
    fn empty_course_list_succeeds_with_empty_timetable() {
        let rules = ScheduleRules::default();
        let result = fallback_schedule(&input(&[], &[], 1), &rules).unwrap();
        assert!(result.success);
        assert!(result.timetable.is_empty());
        assert_eq!(result.metadata.total_slots, 0);
    }
}
