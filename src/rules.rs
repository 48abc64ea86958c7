//! Derived-attribute rules for courses and teachers.
//!
//! All keyword lists and credit values live in one table so tests can
//! substitute their own instead of patching string literals scattered
//! through the model builder.

/// Keyword and credit rules applied to course names and teacher subjects.
/// All matching lowercases the course/subject side first.
#[derive(Debug, Clone)]
pub struct ScheduleRules {
    pub lab_keyword: &'static str,
    pub project_keywords: &'static [&'static str],
    pub heavy_keywords: &'static [&'static str],
    pub lab_credits: u32,
    pub project_credits: u32,
    pub standard_credits: u32,
    pub min_sessions: u32,
    pub max_sessions: u32,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        ScheduleRules {
            lab_keyword: "lab",
            project_keywords: &["project", "thesis"],
            heavy_keywords: &[
                "mathematics",
                "physics",
                "advanced",
                "complex",
                "analysis",
                "theory",
            ],
            lab_credits: 2,
            project_credits: 4,
            standard_credits: 3,
            min_sessions: 2,
            max_sessions: 4,
        }
    }
}

impl ScheduleRules {
    /// A course is a lab if it appears in the explicit lab list or its
    /// name contains the lab keyword.
    pub fn is_lab(&self, course: &str, labs: &[String]) -> bool {
        labs.iter().any(|l| l == course) || course.to_lowercase().contains(self.lab_keyword)
    }

    pub fn credits(&self, course: &str, labs: &[String]) -> u32 {
        let lower = course.to_lowercase();
        if self.is_lab(course, labs) {
            self.lab_credits
        } else if self.project_keywords.iter().any(|k| lower.contains(k)) {
            self.project_credits
        } else {
            self.standard_credits
        }
    }

    /// Weekly session count: credits clamped to `[min_sessions, max_sessions]`.
    pub fn sessions_per_week(&self, credits: u32) -> u32 {
        credits.clamp(self.min_sessions, self.max_sessions)
    }

    pub fn is_heavy(&self, course: &str) -> bool {
        let lower = course.to_lowercase();
        self.heavy_keywords.iter().any(|k| lower.contains(k))
    }

    /// Token-overlap compatibility test between a teacher subject and a
    /// course name. Any substring match in either direction is compatible,
    /// and no overlap still defaults to compatible, so this never rejects
    /// a pairing.
    pub fn is_subject_compatible(&self, teacher_subject: &str, course_name: &str) -> bool {
        let subject = teacher_subject.to_lowercase();
        let course = course_name.to_lowercase();
        for t_kw in subject.split_whitespace() {
            for c_kw in course.split_whitespace() {
                if c_kw.contains(t_kw) || t_kw.contains(c_kw) {
                    return true;
                }
            }
        }
        true
    }
}
