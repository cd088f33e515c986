//! Wire representation shared by the closed enumerations

use serde::Deserialize;

/// An enum value as it may appear in a stored document: either its name
/// (any casing) or its declaration index.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VariantRepr {
    Name(String),
    Index(u64),
}

/// Look up a variant by declaration index.
pub fn by_index<T: Copy>(variants: &[T], index: u64, kind: &str) -> Result<T, String> {
    usize::try_from(index)
        .ok()
        .and_then(|i| variants.get(i).copied())
        .ok_or_else(|| format!("Invalid {} index: {}", kind, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repr_accepts_names_and_numbers() {
        let name: VariantRepr = serde_json::from_str("\"Hard\"").unwrap();
        assert!(matches!(name, VariantRepr::Name(n) if n == "Hard"));

        let index: VariantRepr = serde_json::from_str("2").unwrap();
        assert!(matches!(index, VariantRepr::Index(2)));
    }

    #[test]
    fn test_by_index_out_of_range() {
        assert_eq!(by_index(&['a', 'b'], 1, "letter"), Ok('b'));
        let err = by_index(&['a', 'b'], 7, "letter").unwrap_err();
        assert!(err.contains("Invalid letter index: 7"));
    }
}
