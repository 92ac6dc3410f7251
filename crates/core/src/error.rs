use crate::level::HeadingLevel;

/// Errors raised while building a prefix table or the heading matcher.
///
/// Transforms themselves never fail; everything here surfaces at construction
/// time.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Prefix symbol for level {0} is empty")]
    EmptySymbol(HeadingLevel),

    #[error("Prefix symbol {symbol:?} for level {level} contains whitespace")]
    WhitespaceInSymbol { level: HeadingLevel, symbol: String },

    #[error("Prefix symbol {symbol:?} for level {level} contains '#'")]
    HashInSymbol { level: HeadingLevel, symbol: String },

    #[error("Prefix symbol {symbol:?} is used by both level {first} and level {second}")]
    DuplicateSymbol {
        symbol: String,
        first: HeadingLevel,
        second: HeadingLevel,
    },

    #[error("Invalid prefix configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to compile heading pattern: {0}")]
    Pattern(#[from] regex::Error),
}
