use crate::error::Error;
use crate::level::HeadingLevel;
use crate::table::PrefixTable;
use regex::Regex;
use std::ops::Range;

/// A single line recognised as an ATX heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    pub level: HeadingLevel,
    /// Prefix symbol found before the title, including a trailing variation
    /// selector when the document has one.
    pub existing_prefix: Option<&'a str>,
    pub title: &'a str,
    line: &'a str,
    prefix_span: Option<Range<usize>>,
    title_start: usize,
}

impl HeadingLine<'_> {
    /// Line with `symbol` as its prefix. An existing prefix is swapped in
    /// place; otherwise `symbol` and one space go right before the title.
    pub fn with_prefix(&self, symbol: &str) -> String {
        match &self.prefix_span {
            Some(span) => [&self.line[..span.start], symbol, &self.line[span.end..]].concat(),
            None => [&self.line[..self.title_start], symbol, " ", self.title].concat(),
        }
    }

    /// Line without its prefix symbol and the single whitespace character
    /// that follows it. Everything else is kept as is.
    pub fn without_prefix(&self) -> String {
        let Some(span) = &self.prefix_span else {
            return self.line.to_string();
        };

        let rest = &self.line[span.end..];
        let rest = match rest.chars().next() {
            Some(c) if c.is_whitespace() => &rest[c.len_utf8()..],
            _ => rest,
        };

        [&self.line[..span.start], rest].concat()
    }
}

/// Recognises heading lines for a given prefix table.
#[derive(Debug, Clone)]
pub struct HeadingMatcher {
    pattern: Regex,
}

impl HeadingMatcher {
    pub fn new(table: &PrefixTable) -> Result<Self, Error> {
        // Longest first so a symbol that starts another one never shadows it.
        let mut symbols: Vec<&str> = table.iter().map(|(_, symbol)| symbol).collect();
        symbols.sort_by_key(|symbol| std::cmp::Reverse(symbol.len()));

        let alternation = symbols
            .into_iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        // A symbol only counts as a prefix when whitespace or the end of the
        // line follows it; `# ⭐Starred` has no prefix.
        let pattern = Regex::new(&format!(
            r"^(?P<hashes>#{{1,6}})\s+(?:(?P<prefix>(?:{alternation})\x{{FE0F}}?)(?:\s+|$))?(?P<title>.*)$"
        ))?;

        Ok(Self { pattern })
    }

    /// Classifies one line body (no terminator). Returns `None` for anything
    /// that is not a level 1-6 heading.
    pub fn classify<'a>(&self, line: &'a str) -> Option<HeadingLine<'a>> {
        let caps = self.pattern.captures(line)?;
        let level = HeadingLevel::from_hashes(caps.name("hashes")?.as_str().len())?;
        let prefix = caps.name("prefix");
        let title = caps.name("title")?;

        Some(HeadingLine {
            level,
            existing_prefix: prefix.map(|m| m.as_str()),
            title: title.as_str(),
            line,
            prefix_span: prefix.map(|m| m.range()),
            title_start: title.start(),
        })
    }
}
