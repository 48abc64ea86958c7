use crate::data::ProblemInput;
use crate::grid::{FIRST_LAB_ROOM, LUNCH_SLOT, NUM_DAYS, NUM_ROOMS, SLOTS_PER_DAY};
use crate::rules::ScheduleRules;
use itertools::iproduct;
use log::{info, trace};
use std::collections::BTreeMap;

/// Identity of one boolean decision variable: "this course session for
/// this batch occupies this day/slot/room taught by this teacher".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct VarKey {
    pub course: usize,
    pub batch: usize,
    pub day: usize,
    pub slot: usize,
    pub room: usize,
    pub teacher: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Eq,
    Le,
}

/// A unit-coefficient row: the sum of the listed variables relates to
/// the bound. An `Eq` row with no variables and a positive bound is
/// unsatisfiable and makes the whole model infeasible.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    pub vars: Vec<usize>,
    pub relation: Relation,
    pub bound: u32,
}

/// The engine-agnostic model: a sparse variable universe (structurally
/// forced-false tuples are never materialized) plus the hard-constraint
/// rows over variable indices.
#[derive(Debug, Clone)]
pub struct ScheduleModel {
    pub vars: Vec<VarKey>,
    pub constraints: Vec<LinearConstraint>,
}

/// Builds the decision-variable universe and hard constraints for one
/// problem description.
///
/// Tuples that a constraint forces false outright are filtered during
/// generation instead of emitted as rows: the lunch slot, lab courses
/// in lecture rooms, and incompatible teacher-subject pairs (the
/// compatibility rule never rejects, so that filter is present but
/// removes nothing).
pub fn build_model(input: &ProblemInput, rules: &ScheduleRules) -> ScheduleModel {
    let num_courses = input.courses.len();
    let num_batches = input.batches as usize;
    let num_teachers = input.teachers.len();

    info!(
        "Building model with {} courses, {} batches, and {} teachers...",
        num_courses, num_batches, num_teachers
    );

    let is_lab: Vec<bool> = input
        .courses
        .iter()
        .map(|c| rules.is_lab(c, &input.labs))
        .collect();
    let is_heavy: Vec<bool> = input.courses.iter().map(|c| rules.is_heavy(c)).collect();
    let sessions: Vec<u32> = input
        .courses
        .iter()
        .map(|c| rules.sessions_per_week(rules.credits(c, &input.labs)))
        .collect();

    // allowed[t][c]: an empty subject or course name skips the check
    let allowed: Vec<Vec<bool>> = input
        .teachers
        .iter()
        .map(|t| {
            let subject = t.subject.as_deref().unwrap_or("");
            input
                .courses
                .iter()
                .map(|c| {
                    subject.is_empty() || c.is_empty() || rules.is_subject_compatible(subject, c)
                })
                .collect()
        })
        .collect();

    let mut vars: Vec<VarKey> = Vec::new();
    let mut by_course_batch: BTreeMap<(usize, usize), Vec<usize>> = BTreeMap::new();
    let mut by_room: BTreeMap<(usize, usize, usize), Vec<usize>> = BTreeMap::new();
    let mut by_teacher: BTreeMap<(usize, usize, usize), Vec<usize>> = BTreeMap::new();
    let mut by_batch: BTreeMap<(usize, usize, usize), Vec<usize>> = BTreeMap::new();
    let mut heavy_at: BTreeMap<(usize, usize, usize), Vec<usize>> = BTreeMap::new();

    for (course, batch, day, slot, room, teacher) in iproduct!(
        0..num_courses,
        0..num_batches,
        0..NUM_DAYS,
        0..SLOTS_PER_DAY,
        0..NUM_ROOMS,
        0..num_teachers
    ) {
        if slot == LUNCH_SLOT {
            continue;
        }
        if is_lab[course] && room < FIRST_LAB_ROOM {
            continue;
        }
        if !allowed[teacher][course] {
            continue;
        }
        let idx = vars.len();
        vars.push(VarKey {
            course,
            batch,
            day,
            slot,
            room,
            teacher,
        });
        by_course_batch.entry((course, batch)).or_default().push(idx);
        by_room.entry((day, slot, room)).or_default().push(idx);
        by_teacher.entry((day, slot, teacher)).or_default().push(idx);
        by_batch.entry((day, slot, batch)).or_default().push(idx);
        if is_heavy[course] {
            heavy_at.entry((batch, day, slot)).or_default().push(idx);
        }
    }
    trace!(
        "Generated {} decision variables out of a theoretical maximum of {}.",
        vars.len(),
        num_courses * num_batches * NUM_DAYS * SLOTS_PER_DAY * NUM_ROOMS * num_teachers
    );

    let mut constraints = Vec::new();

    // session count per (course, batch); emitted even when the pair has
    // no surviving variables so the engine reports infeasibility
    for course in 0..num_courses {
        for batch in 0..num_batches {
            constraints.push(LinearConstraint {
                vars: by_course_batch.remove(&(course, batch)).unwrap_or_default(),
                relation: Relation::Eq,
                bound: sessions[course],
            });
        }
    }

    // room, teacher, and batch exclusivity per (day, slot)
    for group in [by_room, by_teacher, by_batch] {
        for (_, group_vars) in group {
            constraints.push(LinearConstraint {
                vars: group_vars,
                relation: Relation::Le,
                bound: 1,
            });
        }
    }

    // no two heavy-course sessions in adjacent slots for a batch
    for batch in 0..num_batches {
        for day in 0..NUM_DAYS {
            for slot in 0..SLOTS_PER_DAY - 1 {
                let mut pair: Vec<usize> = Vec::new();
                if let Some(first) = heavy_at.get(&(batch, day, slot)) {
                    pair.extend_from_slice(first);
                }
                if let Some(second) = heavy_at.get(&(batch, day, slot + 1)) {
                    pair.extend_from_slice(second);
                }
                if !pair.is_empty() {
                    constraints.push(LinearConstraint {
                        vars: pair,
                        relation: Relation::Le,
                        bound: 1,
                    });
                }
            }
        }
    }

    info!("Model has {} hard constraints.", constraints.len());
    ScheduleModel { vars, constraints }
}
