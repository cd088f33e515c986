//! Question entity

use super::{Difficulty, ExamSource};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Every field name the question document may contain, in canonical casing.
const FIELD_NAMES: &[&str] = &[
    // Question
    "id",
    "statement",
    "alternatives",
    "resolutionComment",
    "source",
    "area",
    "subjects",
    "relatedCourses",
    "tags",
    "difficulty",
    "officialSourceUrl",
    // Alternative
    "text",
    "isCorrect",
    // ExamSource
    "examType",
    "name",
    "year",
    "examCode",
    "officialArea",
];

/// One answer option of a multiple-choice question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Alternative {
    pub text: String,
    pub is_correct: bool,
}

impl Alternative {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Alternative {
            text: text.into(),
            is_correct,
        }
    }
}

/// A multiple-choice exam question
///
/// All fields default when absent from the input document, so a partial
/// payload still deserializes. A nil `id` means no id has been assigned yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub id: Uuid,
    pub statement: String,
    pub alternatives: Vec<Alternative>,
    pub resolution_comment: Option<String>,
    pub source: ExamSource,
    pub area: String,
    pub subjects: Vec<String>,
    pub related_courses: Vec<String>,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub official_source_url: Option<String>,
}

impl Question {
    /// Create an unsaved question with the given statement and area
    pub fn new(statement: impl Into<String>, area: impl Into<String>) -> Self {
        Question {
            statement: statement.into(),
            area: area.into(),
            ..Default::default()
        }
    }

    /// Whether an id has been assigned
    pub fn has_id(&self) -> bool {
        !self.id.is_nil()
    }

    /// Assign a fresh v4 id if none is set
    pub fn ensure_id(&mut self) {
        if !self.has_id() {
            self.id = Uuid::new_v4();
        }
    }

    /// Replace every field except `id` with the one from `other`
    pub fn replace_content(&mut self, other: Question) {
        let id = self.id;
        *self = Question { id, ..other };
    }

    /// Deserialize a question, matching field names case-insensitively
    pub fn from_value(mut value: Value) -> serde_json::Result<Self> {
        canonicalize_keys(&mut value);
        serde_json::from_value(value)
    }
}

/// Rewrite every object key that matches a known field name, ignoring
/// case, to its canonical spelling. Unknown keys are left untouched.
pub fn canonicalize_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let entries = std::mem::take(map);
            for (key, mut child) in entries {
                canonicalize_keys(&mut child);
                let key = FIELD_NAMES
                    .iter()
                    .find(|name| name.eq_ignore_ascii_case(&key))
                    .map(|name| name.to_string())
                    .unwrap_or(key);
                map.insert(key, child);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(canonicalize_keys),
        _ => {}
    }
}
