use serde::{Deserialize, Serialize};
use std::fmt;

/// Markdown heading level, always within `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// All six levels in ascending order.
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel(1),
        HeadingLevel(2),
        HeadingLevel(3),
        HeadingLevel(4),
        HeadingLevel(5),
        HeadingLevel(6),
    ];

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&level)
            .then_some(HeadingLevel(level))
    }

    /// Level for a run of `count` leading `#` characters.
    pub fn from_hashes(count: usize) -> Option<Self> {
        u8::try_from(count).ok().and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position in [`HeadingLevel::ALL`].
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("Heading level must be 1-6, got {value}"))
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_one_through_six() {
        for n in 1..=6 {
            assert_eq!(HeadingLevel::new(n).map(HeadingLevel::get), Some(n));
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(HeadingLevel::new(0).is_none());
        assert!(HeadingLevel::new(7).is_none());
    }

    #[test]
    fn test_from_hashes_seven_is_not_a_level() {
        assert!(HeadingLevel::from_hashes(7).is_none());
        assert!(HeadingLevel::from_hashes(300).is_none());
        assert_eq!(HeadingLevel::from_hashes(3).map(HeadingLevel::get), Some(3));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, level) in HeadingLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
        }
    }

    #[test]
    fn test_serde_rejects_invalid_level() {
        let ok: HeadingLevel = serde_json::from_str("4").unwrap();
        assert_eq!(ok.get(), 4);
        assert!(serde_json::from_str::<HeadingLevel>("9").is_err());
    }
}
