use serde::{Deserialize, Serialize};

/// Which characters the typing buffer accepts.
///
/// Newlines are always accepted; they arrive through their own event.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CharPolicy {
    /// Every delivered character is stored as-is.
    #[default]
    Unfiltered,
    /// Only codes 32..=125 (space through `}`).
    PrintableAscii,
}

impl CharPolicy {
    pub fn admits(self, c: char) -> bool {
        match self {
            CharPolicy::Unfiltered => true,
            CharPolicy::PrintableAscii => (' '..='}').contains(&c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_admits_everything() {
        for c in ['a', '~', 'é', '\t', '\u{7}', '日'] {
            assert!(CharPolicy::Unfiltered.admits(c));
        }
    }

    #[test]
    fn printable_ascii_bounds() {
        let p = CharPolicy::PrintableAscii;
        assert!(p.admits(' '));
        assert!(p.admits('a'));
        assert!(p.admits('}'));
        assert!(!p.admits('~'));
        assert!(!p.admits('\t'));
        assert!(!p.admits('é'));
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CharPolicy::PrintableAscii).unwrap(),
            "\"printable_ascii\""
        );
        assert_eq!(CharPolicy::Unfiltered.to_string(), "unfiltered");
    }
}
