use crate::grid;
use crate::rules::ScheduleRules;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One teacher from the problem description. A missing name renders as
/// "Unknown Teacher"; a missing or empty subject disables the
/// compatibility check for this teacher.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Teacher {
    pub name: Option<String>,
    pub subject: Option<String>,
}

impl Teacher {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown Teacher")
    }
}

/// The complete input for one timetable generation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProblemInput {
    pub courses: Vec<String>,
    pub teachers: Vec<Teacher>,
    pub branches: u32,
    pub batches: u32,
    pub years: u32,
    pub labs: Vec<String>,
    pub degree: Option<String>,
}

impl Default for ProblemInput {
    fn default() -> Self {
        ProblemInput {
            courses: Vec::new(),
            teachers: Vec::new(),
            branches: 1,
            batches: 1,
            years: 4,
            labs: Vec::new(),
            degree: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Lab,
    Lecture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Program {
    Pg,
    Ug,
}

/// Week-parity tag. `Even` is in the vocabulary but the derivation
/// (course index mod 2) only ever yields `Both` or `Odd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
    Both,
    Odd,
    Even,
}

/// One scheduled occurrence of a course for a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub id: String,
    pub subject: String,
    pub faculty: String,
    pub room: String,
    pub department: String,
    pub credits: u32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub program: Program,
    pub batch: String,
    pub week: WeekParity,
}

impl Session {
    /// Builds a session with all derived attributes. Shared by the
    /// solution extractor and the fallback scheduler so both paths
    /// label rooms, departments, and parity identically.
    pub fn derive(
        id: String,
        course_idx: usize,
        course: &str,
        teacher: &Teacher,
        batch: usize,
        room: usize,
        input: &ProblemInput,
        rules: &ScheduleRules,
    ) -> Session {
        let degree = input.degree.as_deref().unwrap_or("");
        let department = degree.split_whitespace().next().unwrap_or("CSE").to_string();
        let program = if degree.contains("Master") {
            Program::Pg
        } else {
            Program::Ug
        };
        let session_type = if rules.is_lab(course, &input.labs) {
            SessionType::Lab
        } else {
            SessionType::Lecture
        };
        let week = if course_idx % 2 == 0 {
            WeekParity::Both
        } else {
            WeekParity::Odd
        };
        Session {
            id,
            subject: course.to_string(),
            faculty: teacher.display_name().to_string(),
            room: grid::room_label(room),
            department,
            credits: rules.credits(course, &input.labs),
            session_type,
            program,
            batch: grid::batch_label(batch),
            week,
        }
    }
}

/// Exported schedule, keyed `"<Day>-<slotIndex>"`. The key carries no
/// room or batch, so sessions sharing a day/slot overwrite each other
/// in this map even when they do not conflict; `total_slots` in the
/// metadata still counts every scheduled session.
pub type Timetable = BTreeMap<String, Session>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverStatus {
    Optimal,
    Feasible,
    Fallback,
    Error,
}

/// Summary fields attached to every result. `conflicts` is always 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub total_slots: u32,
    pub conflicts: u32,
    pub utilization: f64,
    pub solver_status: SolverStatus,
}

impl Metadata {
    /// Metadata for a certified assignment: utilization is the share of
    /// the course-batch slot grid actually used, capped at 100.
    pub fn solved(total_slots: u32, num_courses: usize, num_batches: usize) -> Metadata {
        let available = (num_courses * num_batches * grid::NUM_DAYS * grid::SLOTS_PER_DAY) as f64;
        let utilization = if available > 0.0 {
            (f64::from(total_slots) / available * 100.0).min(100.0)
        } else {
            0.0
        };
        Metadata {
            total_slots,
            conflicts: 0,
            utilization,
            solver_status: SolverStatus::Optimal,
        }
    }

    /// Metadata for the fallback path: utilization is the fixed constant
    /// 85, not computed from actual density.
    pub fn fallback(total_slots: u32) -> Metadata {
        Metadata {
            total_slots,
            conflicts: 0,
            utilization: 85.0,
            solver_status: SolverStatus::Fallback,
        }
    }

    pub fn error() -> Metadata {
        Metadata {
            total_slots: 0,
            conflicts: 0,
            utilization: 0.0,
            solver_status: SolverStatus::Error,
        }
    }
}

/// The result envelope. Successful generations carry `message`, failed
/// ones carry `error`; the absent field is omitted from the JSON.
#[derive(Debug, Clone, Serialize)]
pub struct TimetableResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timetable: Timetable,
    pub metadata: Metadata,
}

impl TimetableResult {
    pub fn solved(message: &str, timetable: Timetable, metadata: Metadata) -> TimetableResult {
        TimetableResult {
            success: true,
            message: Some(message.to_string()),
            error: None,
            timetable,
            metadata,
        }
    }

    pub fn error(error: String) -> TimetableResult {
        TimetableResult {
            success: false,
            message: None,
            error: Some(error),
            timetable: Timetable::new(),
            metadata: Metadata::error(),
        }
    }
}
