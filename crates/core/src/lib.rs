//! Core library for headmoji
//!
//! This crate implements the **Functional Core** of the headmoji application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`headmoji_core`** (this crate): Pure text transformations with zero I/O
//! - **`headmoji`**: file and stdin I/O, configuration discovery, CLI and MCP
//!   hosts (the Imperative Shell)
//!
//! Every function here takes a document string and returns a new one. Nothing
//! is cached between calls, and a compiled [`HeadingPrefixer`] can be shared
//! freely by reference.
//!
//! # Module Organization
//!
//! - [`level`]: heading levels 1-6
//! - [`table`]: the level to symbol [`PrefixTable`] and its TOML form
//! - [`scan`]: line splitting and the code fence / front matter / comment
//!   state machine
//! - [`heading`]: recognising heading lines and rewriting their prefix
//! - [`transform`]: whole-document apply and remove
//!
//! # Example Usage
//!
//! ```rust
//! use headmoji_core::{HeadingPrefixer, PrefixTable};
//!
//! let prefixer = HeadingPrefixer::new(PrefixTable::default()).unwrap();
//!
//! let applied = prefixer.apply_prefixes("# Notes\n## Todo\n");
//! assert_eq!(applied, "# 🌕 Notes\n## 🌖 Todo\n");
//!
//! let removed = prefixer.remove_prefixes(&applied);
//! assert_eq!(removed, "# Notes\n## Todo\n");
//! ```

pub mod error;
pub mod heading;
pub mod level;
pub mod scan;
pub mod table;
pub mod transform;

pub use error::Error;
pub use level::HeadingLevel;
pub use table::PrefixTable;
pub use transform::{Direction, HeadingPrefixer, TransformOutput, TransformStats};
