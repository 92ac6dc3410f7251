//! Level to symbol mapping used when prefixing headings.
//!
//! A [`PrefixTable`] is always total (one symbol per level) and injective (no
//! symbol shared between levels), so a matched symbol identifies at most one
//! level. Tables come from [`PrefixTable::default`] or from a TOML document
//! via [`PrefixTable::from_toml_str`].

use crate::error::Error;
use crate::level::HeadingLevel;
use serde::{Deserialize, Serialize};

/// Built-in symbols: moon phases for levels 1-5, a star for level 6.
pub const DEFAULT_SYMBOLS: [&str; 6] = ["🌕", "🌖", "🌗", "🌘", "🌑", "⭐"];

/// Emoji presentation selector that may trail a symbol in documents.
pub const VARIATION_SELECTOR: char = '\u{FE0F}';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixTable {
    symbols: [String; 6],
}

impl PrefixTable {
    /// Builds a table from one symbol per level, ordered from level 1 to 6.
    pub fn new(symbols: [String; 6]) -> Result<Self, Error> {
        validate(&symbols)?;
        Ok(Self { symbols })
    }

    /// Parses a `[prefixes]` TOML document. Levels left out keep their
    /// default symbol.
    pub fn from_toml_str(source: &str) -> Result<Self, Error> {
        let config: PrefixConfig = toml::from_str(source)?;
        Self::new(config.prefixes.into_symbols())
    }

    pub fn symbol(&self, level: HeadingLevel) -> &str {
        &self.symbols[level.index()]
    }

    /// Level a symbol belongs to. A trailing variation selector is ignored
    /// when the bare form is what the table holds.
    pub fn level_of(&self, symbol: &str) -> Option<HeadingLevel> {
        self.position(symbol).or_else(|| {
            symbol
                .strip_suffix(VARIATION_SELECTOR)
                .and_then(|bare| self.position(bare))
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, &str)> {
        HeadingLevel::ALL
            .into_iter()
            .zip(self.symbols.iter().map(String::as_str))
    }

    fn position(&self, symbol: &str) -> Option<HeadingLevel> {
        self.iter()
            .find(|(_, candidate)| *candidate == symbol)
            .map(|(level, _)| level)
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.map(String::from),
        }
    }
}

fn validate(symbols: &[String; 6]) -> Result<(), Error> {
    for (level, symbol) in HeadingLevel::ALL.into_iter().zip(symbols) {
        if symbol.is_empty() {
            return Err(Error::EmptySymbol(level));
        }
        if symbol.chars().any(char::is_whitespace) {
            return Err(Error::WhitespaceInSymbol {
                level,
                symbol: symbol.clone(),
            });
        }
        if symbol.contains('#') {
            return Err(Error::HashInSymbol {
                level,
                symbol: symbol.clone(),
            });
        }
    }

    for (i, symbol) in symbols.iter().enumerate() {
        if let Some(j) = symbols[i + 1..].iter().position(|other| other == symbol) {
            return Err(Error::DuplicateSymbol {
                symbol: symbol.clone(),
                first: HeadingLevel::ALL[i],
                second: HeadingLevel::ALL[i + 1 + j],
            });
        }
    }

    Ok(())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PrefixConfig {
    #[serde(default)]
    prefixes: PrefixOverrides,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PrefixOverrides {
    h1: Option<String>,
    h2: Option<String>,
    h3: Option<String>,
    h4: Option<String>,
    h5: Option<String>,
    h6: Option<String>,
}

impl PrefixOverrides {
    fn into_symbols(self) -> [String; 6] {
        let overrides = [self.h1, self.h2, self.h3, self.h4, self.h5, self.h6];
        let mut symbols = DEFAULT_SYMBOLS.map(String::from);
        for (slot, value) in symbols.iter_mut().zip(overrides) {
            if let Some(value) = value {
                *slot = value;
            }
        }
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u8) -> HeadingLevel {
        HeadingLevel::new(n).unwrap()
    }

    #[test]
    fn test_default_table_symbols() {
        let table = PrefixTable::default();
        assert_eq!(table.symbol(level(1)), "🌕");
        assert_eq!(table.symbol(level(2)), "🌖");
        assert_eq!(table.symbol(level(6)), "⭐");
    }

    #[test]
    fn test_level_of_known_symbol() {
        let table = PrefixTable::default();
        assert_eq!(table.level_of("🌗"), Some(level(3)));
        assert_eq!(table.level_of("🔥"), None);
    }

    #[test]
    fn test_level_of_with_variation_selector() {
        let table = PrefixTable::default();
        assert_eq!(table.level_of("⭐\u{FE0F}"), Some(level(6)));
    }

    #[test]
    fn test_new_rejects_duplicate_symbol() {
        let symbols = ["A", "B", "C", "B", "E", "F"].map(String::from);
        match PrefixTable::new(symbols) {
            Err(Error::DuplicateSymbol {
                symbol,
                first,
                second,
            }) => {
                assert_eq!(symbol, "B");
                assert_eq!(first, level(2));
                assert_eq!(second, level(4));
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_empty_symbol() {
        let symbols = ["A", "B", "", "D", "E", "F"].map(String::from);
        assert!(matches!(
            PrefixTable::new(symbols),
            Err(Error::EmptySymbol(l)) if l == level(3)
        ));
    }

    #[test]
    fn test_new_rejects_whitespace_and_hash() {
        let spaced = ["A B", "B", "C", "D", "E", "F"].map(String::from);
        assert!(matches!(
            PrefixTable::new(spaced),
            Err(Error::WhitespaceInSymbol { .. })
        ));

        let hashed = ["A", "B", "C", "D", "E", "#F"].map(String::from);
        assert!(matches!(
            PrefixTable::new(hashed),
            Err(Error::HashInSymbol { .. })
        ));
    }

    #[test]
    fn test_from_toml_partial_override() {
        let table = PrefixTable::from_toml_str(
            r#"
            [prefixes]
            h1 = "🔥"
            h6 = "✨"
            "#,
        )
        .unwrap();

        assert_eq!(table.symbol(level(1)), "🔥");
        assert_eq!(table.symbol(level(2)), "🌖");
        assert_eq!(table.symbol(level(6)), "✨");
    }

    #[test]
    fn test_from_toml_empty_document_is_default() {
        let table = PrefixTable::from_toml_str("").unwrap();
        assert_eq!(table, PrefixTable::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_level() {
        let result = PrefixTable::from_toml_str("[prefixes]\nh7 = \"x\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_from_toml_rejects_collision_with_default() {
        // h3 reuses the level-1 default symbol
        let result = PrefixTable::from_toml_str("[prefixes]\nh3 = \"🌕\"\n");
        assert!(matches!(result, Err(Error::DuplicateSymbol { .. })));
    }

    #[test]
    fn test_iter_yields_levels_in_order() {
        let table = PrefixTable::default();
        let levels: Vec<u8> = table.iter().map(|(l, _)| l.get()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    }
}
