//! Student records as listed by `/students`.

use crate::app_lib::text::{
    grade_label, includes_ignore_accents, level_to_grade, normalize_for_search,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Curriculum level, e.g. "L4".
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn grade(&self) -> String {
        grade_label(self.level.as_deref().and_then(level_to_grade))
    }

    /// Accent-insensitive match on name, email and group.
    pub fn matches(&self, query: &str) -> bool {
        includes_ignore_accents(&self.full_name(), query)
            || self
                .email
                .as_deref()
                .is_some_and(|email| includes_ignore_accents(email, query))
            || self
                .group_name
                .as_deref()
                .is_some_and(|group| includes_ignore_accents(group, query))
    }
}

/// Students matching `query`, sorted by last name then first name, ignoring accents.
pub fn filter_students(students: &[Student], query: &str) -> Vec<Student> {
    let mut matching: Vec<Student> = students
        .iter()
        .filter(|student| student.matches(query))
        .cloned()
        .collect();
    matching.sort_by_cached_key(|student| {
        (
            normalize_for_search(&student.last_name),
            normalize_for_search(&student.first_name),
        )
    });
    matching
}
