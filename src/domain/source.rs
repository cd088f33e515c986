//! Where a question was taken from

use super::variant::{by_index, VariantRepr};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of exam a question originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", try_from = "VariantRepr")]
pub enum ExamType {
    #[default]
    Unknown,
    /// National high school exam
    Enem,
    /// University entrance exam
    Vestibular,
    /// Civil service selection exam
    PublicTender,
    Olympiad,
    Other,
}

impl ExamType {
    /// All exam types in declaration order
    pub const ALL: [ExamType; 6] = [
        ExamType::Unknown,
        ExamType::Enem,
        ExamType::Vestibular,
        ExamType::PublicTender,
        ExamType::Olympiad,
        ExamType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Unknown => "unknown",
            ExamType::Enem => "enem",
            ExamType::Vestibular => "vestibular",
            ExamType::PublicTender => "publicTender",
            ExamType::Olympiad => "olympiad",
            ExamType::Other => "other",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid exam type: '{}'. Valid types are: unknown, enem, vestibular, \
                    publicTender, olympiad, other",
                    s
                )
            })
    }
}

impl TryFrom<VariantRepr> for ExamType {
    type Error = String;

    fn try_from(repr: VariantRepr) -> Result<Self, Self::Error> {
        match repr {
            VariantRepr::Name(name) => name.parse(),
            VariantRepr::Index(i) => by_index(&Self::ALL, i, "exam type"),
        }
    }
}

/// Exam metadata embedded in every question
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamSource {
    pub exam_type: ExamType,
    pub name: String,
    pub year: Option<i32>,
    pub exam_code: Option<String>,
    pub official_area: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_type_names_round_trip() {
        for exam_type in ExamType::ALL {
            assert_eq!(ExamType::from_str(exam_type.as_str()).unwrap(), exam_type);
        }
        assert_eq!(
            ExamType::from_str("PUBLICTENDER").unwrap(),
            ExamType::PublicTender
        );
    }

    #[test]
    fn test_exam_type_serialized_camel_case() {
        assert_eq!(
            serde_json::to_string(&ExamType::PublicTender).unwrap(),
            "\"publicTender\""
        );
    }

    #[test]
    fn test_source_defaults_when_fields_missing() {
        let source: ExamSource = serde_json::from_str(r#"{"name": "ENEM 2023"}"#).unwrap();
        assert_eq!(source.exam_type, ExamType::Unknown);
        assert_eq!(source.name, "ENEM 2023");
        assert_eq!(source.year, None);
    }

    #[test]
    fn test_source_accepts_numeric_exam_type() {
        let source: ExamSource =
            serde_json::from_str(r#"{"examType": 1, "name": "ENEM", "year": 2022}"#).unwrap();
        assert_eq!(source.exam_type, ExamType::Enem);
        assert_eq!(source.year, Some(2022));
    }
}
