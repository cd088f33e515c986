//! Question difficulty levels

use super::variant::{by_index, VariantRepr};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How hard a question is considered to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", try_from = "VariantRepr")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// All levels in declaration order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!(
                "Invalid difficulty: '{}'. Valid levels are: easy, medium, hard",
                s
            )),
        }
    }
}

impl TryFrom<VariantRepr> for Difficulty {
    type Error = String;

    fn try_from(repr: VariantRepr) -> Result<Self, Self::Error> {
        match repr {
            VariantRepr::Name(name) => name.parse(),
            VariantRepr::Index(i) => by_index(&Self::ALL, i, "difficulty"),
        }
    }
}
