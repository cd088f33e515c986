//! Attribute filters over the question bank
//!
//! A filter holds up to four criteria: area, subject, course and tag. Every
//! supplied criterion must match (logical AND). Matching is a
//! case-insensitive substring test; for the list-valued attributes it is
//! enough that any single entry matches.
//!
//! # Examples
//!
//! ```
//! use questions::domain::{Question, QuestionFilter};
//!
//! let filter = QuestionFilter::new().area("math");
//! assert!(filter.matches(&Question::new("2+2=?", "Advanced Mathematics")));
//! assert!(!filter.matches(&Question::new("F=ma?", "Physics")));
//! ```

use super::Question;

/// AND-combined, case-insensitive substring criteria
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub area: Option<String>,
    pub subject: Option<String>,
    pub course: Option<String>,
    pub tag: Option<String>,
}

impl QuestionFilter {
    /// A filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build a filter from query-string pairs.
    ///
    /// Names follow the public HTTP contract: `area`, `assunto` (subject),
    /// `curso` (course) and `tag`. When a name repeats, the first value wins;
    /// unknown names are ignored.
    pub fn from_query_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filter = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_str() {
                "area" => &mut filter.area,
                "assunto" => &mut filter.subject,
                "curso" => &mut filter.course,
                "tag" => &mut filter.tag,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        filter
    }

    /// True when no criterion is applied
    pub fn is_empty(&self) -> bool {
        [&self.area, &self.subject, &self.course, &self.tag]
            .into_iter()
            .all(|c| active(c).is_none())
    }

    /// Evaluate this filter against a single question
    pub fn matches(&self, question: &Question) -> bool {
        if let Some(area) = active(&self.area) {
            if !contains_ignore_case(&question.area, &area) {
                return false;
            }
        }

        any_contains(&question.subjects, active(&self.subject))
            && any_contains(&question.related_courses, active(&self.course))
            && any_contains(&question.tags, active(&self.tag))
    }

    /// Keep the matching questions, preserving their order
    pub fn apply(&self, questions: Vec<Question>) -> Vec<Question> {
        questions.into_iter().filter(|q| self.matches(q)).collect()
    }
}

/// A criterion applies only when present and not blank; it is returned
/// lowercased for comparison.
fn active(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn any_contains(values: &[String], needle_lower: Option<String>) -> bool {
    match needle_lower {
        None => true,
        Some(needle) => values.iter().any(|v| contains_ignore_case(v, &needle)),
    }
}
