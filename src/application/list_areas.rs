//! Area listing use case

use crate::domain::Question;
use std::collections::HashSet;

/// Distinct non-blank areas, deduplicated ignoring case, sorted ascending.
///
/// The first spelling seen for an area is the one returned. Sorting ignores
/// case, with an ordinal tiebreak so the result is deterministic.
pub fn collect_areas(questions: &[Question]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut areas: Vec<String> = questions
        .iter()
        .map(|q| q.area.as_str())
        .filter(|area| !area.trim().is_empty())
        .filter(|area| seen.insert(area.to_lowercase()))
        .map(str::to_string)
        .collect();

    areas.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
    areas
}
