//! Whole-document heading prefix rewriting.

use crate::error::Error;
use crate::heading::{HeadingLine, HeadingMatcher};
use crate::scan::{split_lines, Scanner};
use crate::table::PrefixTable;
use serde::{Deserialize, Serialize};

const BOM: char = '\u{FEFF}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Apply,
    Remove,
}

/// Per-heading outcome counts for one transform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStats {
    pub headings: usize,
    pub inserted: usize,
    pub replaced: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl TransformStats {
    /// Headings whose line was rewritten.
    pub fn modified(&self) -> usize {
        self.inserted + self.replaced + self.removed
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransformOutput {
    pub direction: Direction,
    pub content: String,
    pub changed: bool,
    pub stats: TransformStats,
}

/// Compiled transformer for one prefix table.
///
/// Construction validates nothing beyond what [`PrefixTable`] already
/// guarantees; it only compiles the heading pattern. Both operations are
/// total and never retain the input.
#[derive(Debug, Clone)]
pub struct HeadingPrefixer {
    table: PrefixTable,
    matcher: HeadingMatcher,
}

impl HeadingPrefixer {
    pub fn new(table: PrefixTable) -> Result<Self, Error> {
        let matcher = HeadingMatcher::new(&table)?;
        Ok(Self { table, matcher })
    }

    pub fn table(&self) -> &PrefixTable {
        &self.table
    }

    /// Gives every heading the symbol for its level, without doubling one
    /// that is already there.
    pub fn apply_prefixes(&self, document: &str) -> String {
        self.transform(document, Direction::Apply).content
    }

    /// Strips any known prefix symbol from every heading.
    pub fn remove_prefixes(&self, document: &str) -> String {
        self.transform(document, Direction::Remove).content
    }

    pub fn transform(&self, document: &str, direction: Direction) -> TransformOutput {
        let mut content = String::with_capacity(document.len());
        let mut stats = TransformStats::default();
        let mut scanner = Scanner::new();

        for (index, line) in split_lines(document).enumerate() {
            let body = if index == 0 {
                match line.body.strip_prefix(BOM) {
                    Some(rest) => {
                        content.push(BOM);
                        rest
                    }
                    None => line.body,
                }
            } else {
                line.body
            };

            let heading = if scanner.advance(body) {
                self.matcher.classify(body)
            } else {
                None
            };

            match heading {
                Some(heading) => {
                    stats.headings += 1;
                    let rewritten = match direction {
                        Direction::Apply => self.apply_line(&heading, &mut stats),
                        Direction::Remove => remove_line(&heading, &mut stats),
                    };
                    match rewritten {
                        Some(text) => content.push_str(&text),
                        None => content.push_str(body),
                    }
                }
                None => content.push_str(body),
            }

            content.push_str(line.terminator);
        }

        let changed = content != document;

        TransformOutput {
            direction,
            content,
            changed,
            stats,
        }
    }

    /// `None` means the line stays as it is.
    fn apply_line(&self, heading: &HeadingLine<'_>, stats: &mut TransformStats) -> Option<String> {
        let expected = self.table.symbol(heading.level);

        match heading.existing_prefix {
            Some(existing) if self.table.level_of(existing) == Some(heading.level) => {
                stats.unchanged += 1;
                None
            }
            Some(_) => {
                stats.replaced += 1;
                Some(heading.with_prefix(expected))
            }
            None => {
                stats.inserted += 1;
                Some(heading.with_prefix(expected))
            }
        }
    }
}

fn remove_line(heading: &HeadingLine<'_>, stats: &mut TransformStats) -> Option<String> {
    match heading.existing_prefix {
        Some(_) => {
            stats.removed += 1;
            Some(heading.without_prefix())
        }
        None => {
            stats.unchanged += 1;
            None
        }
    }
}
