//! Line splitting and block tracking.
//!
//! A `#` line only counts as a heading when it sits in ordinary text. The
//! [`Scanner`] follows the regions where that is not the case: fenced code,
//! YAML front matter, and multi-line HTML (`<!-- -->`) or Obsidian (`%% %%`)
//! comments.

/// One physical line split from its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub body: &'a str,
    /// `"\n"`, `"\r\n"`, or empty for a final line without a newline.
    pub terminator: &'a str,
}

/// Splits a document into lines, keeping each terminator so the document can
/// be rebuilt byte for byte.
pub fn split_lines(document: &str) -> impl Iterator<Item = Line<'_>> {
    document.split_inclusive('\n').map(|raw| {
        let body_len = if raw.ends_with("\r\n") {
            raw.len() - 2
        } else if raw.ends_with('\n') {
            raw.len() - 1
        } else {
            raw.len()
        };
        let (body, terminator) = raw.split_at(body_len);
        Line { body, terminator }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentKind {
    Html,
    Obsidian,
}

impl CommentKind {
    fn open(self) -> &'static str {
        match self {
            CommentKind::Html => "<!--",
            CommentKind::Obsidian => "%%",
        }
    }

    fn close(self) -> &'static str {
        match self {
            CommentKind::Html => "-->",
            CommentKind::Obsidian => "%%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Block {
    #[default]
    Text,
    FrontMatter,
    Fence {
        marker: char,
        len: usize,
    },
    Comment(CommentKind),
}

/// Per-document state machine fed one line body at a time.
#[derive(Debug, Default)]
pub struct Scanner {
    block: Block,
    lines_seen: usize,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the next line and returns whether it lies in ordinary text,
    /// i.e. whether it may be classified as a heading.
    pub fn advance(&mut self, body: &str) -> bool {
        let first_line = self.lines_seen == 0;
        self.lines_seen += 1;

        match self.block {
            Block::Text => {
                if first_line && body.trim_end() == "---" {
                    self.block = Block::FrontMatter;
                    return false;
                }
                if let Some((marker, len)) = fence_open(body) {
                    self.block = Block::Fence { marker, len };
                    return false;
                }
                if let Some(kind) = comment_open(body) {
                    self.block = Block::Comment(kind);
                }
                true
            }
            Block::FrontMatter => {
                let trimmed = body.trim_end();
                if trimmed == "---" || trimmed == "..." {
                    self.block = Block::Text;
                }
                false
            }
            Block::Fence { marker, len } => {
                if fence_close(body, marker, len) {
                    self.block = Block::Text;
                }
                false
            }
            Block::Comment(kind) => {
                if body.contains(kind.close()) {
                    self.block = Block::Text;
                }
                false
            }
        }
    }
}

/// Strips up to three leading spaces; more than that is indented code.
fn strip_indent(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(' ');
    (line.len() - rest.len() <= 3).then_some(rest)
}

fn marker_run(text: &str, marker: char) -> usize {
    text.chars().take_while(|c| *c == marker).count()
}

fn fence_open(line: &str) -> Option<(char, usize)> {
    let text = strip_indent(line)?;
    let marker = text.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = marker_run(text, marker);
    if len < 3 {
        return None;
    }
    // Markers are ASCII, so the run length is also its byte length.
    let info = &text[len..];
    if marker == '`' && info.contains('`') {
        return None;
    }
    Some((marker, len))
}

fn fence_close(line: &str, marker: char, open_len: usize) -> bool {
    let Some(text) = strip_indent(line) else {
        return false;
    };
    let len = marker_run(text, marker);
    len >= open_len && text[len..].trim().is_empty()
}

/// A multi-line comment only starts on a line that begins with its opener
/// (after up to three spaces) and does not close it again. An opener later in
/// the line, such as `` `<!--` `` in prose, starts nothing.
fn comment_open(line: &str) -> Option<CommentKind> {
    let text = strip_indent(line)?;
    [CommentKind::Html, CommentKind::Obsidian]
        .into_iter()
        .find(|kind| text.starts_with(kind.open()))
        .filter(|kind| !text[kind.open().len()..].contains(kind.close()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_flags(document: &str) -> Vec<bool> {
        let mut scanner = Scanner::new();
        split_lines(document)
            .map(|line| scanner.advance(line.body))
            .collect()
    }

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines: Vec<_> = split_lines("a\r\nb\nc").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!((lines[0].body, lines[0].terminator), ("a", "\r\n"));
        assert_eq!((lines[1].body, lines[1].terminator), ("b", "\n"));
        assert_eq!((lines[2].body, lines[2].terminator), ("c", ""));
    }

    #[test]
    fn test_split_lines_empty_document() {
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        let lines: Vec<_> = split_lines("a\n\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].body, "");
        assert_eq!(lines[1].terminator, "\n");
    }

    #[test]
    fn test_backtick_fence() {
        let flags = text_flags("# a\n```\n# b\n```\n# c\n");
        assert_eq!(flags, vec![true, false, false, false, true]);
    }

    #[test]
    fn test_tilde_fence_with_language() {
        let flags = text_flags("~~~python\n# comment\n~~~\n");
        assert_eq!(flags, vec![false, false, false]);
    }

    #[test]
    fn test_fence_needs_matching_marker_and_length() {
        // a shorter run or a different marker does not close the fence
        let flags = text_flags("````\n```\n~~~~\n# x\n````\n# y\n");
        assert_eq!(flags, vec![false, false, false, false, false, true]);
    }

    #[test]
    fn test_closing_fence_cannot_carry_info_string() {
        let flags = text_flags("```\n```rust\n# x\n```\n");
        assert_eq!(flags, vec![false, false, false, false]);
    }

    #[test]
    fn test_backtick_info_with_backtick_is_not_a_fence() {
        let flags = text_flags("``` a`b\n# x\n");
        assert_eq!(flags, vec![true, true]);
    }

    #[test]
    fn test_two_backticks_are_not_a_fence() {
        let flags = text_flags("``\n# x\n");
        assert_eq!(flags, vec![true, true]);
    }

    #[test]
    fn test_fence_indented_four_spaces_is_not_a_fence() {
        let flags = text_flags("    ```\n# x\n");
        assert_eq!(flags, vec![true, true]);
    }

    #[test]
    fn test_front_matter_only_on_first_line() {
        let flags = text_flags("---\n# yaml comment\ntitle: x\n---\n# Heading\n---\n# Other\n");
        assert_eq!(flags, vec![false, false, false, false, true, true, true]);
    }

    #[test]
    fn test_front_matter_closed_by_dots() {
        let flags = text_flags("---\n# c\n...\n# h\n");
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn test_html_comment_block() {
        let flags = text_flags("<!--\n# hidden\n-->\n# shown\n");
        assert_eq!(flags, vec![true, false, false, true]);
    }

    #[test]
    fn test_inline_html_comment_does_not_open_block() {
        let flags = text_flags("text <!-- note --> more\n# shown\n");
        assert_eq!(flags, vec![true, true]);
    }

    #[test]
    fn test_comment_ends_at_first_closer() {
        let flags = text_flags("<!--\n--> text <!--\n# shown\n-->\n# shown\n");
        assert_eq!(flags, vec![true, false, true, true, true]);
    }

    #[test]
    fn test_opener_inside_prose_does_not_open_block() {
        let flags = text_flags("# Intro\nWrite `<!--` to start a comment.\n## Usage\n## API\n");
        assert_eq!(flags, vec![true, true, true, true]);

        let flags = text_flags("Use 100%% of it\n# Shown\n");
        assert_eq!(flags, vec![true, true]);
    }

    #[test]
    fn test_heading_with_trailing_opener_does_not_open_block() {
        let flags = text_flags("# Notes <!--\n## Next\n");
        assert_eq!(flags, vec![true, true]);
    }

    #[test]
    fn test_indented_comment_opener() {
        let flags = text_flags("   <!-- draft\n# hidden\n-->\n    <!--\n# shown\n");
        assert_eq!(flags, vec![true, false, false, true, true]);
    }

    #[test]
    fn test_obsidian_comment_block() {
        let flags = text_flags("%%\n# hidden\n%%\n# shown\n%% inline %%\n# also shown\n");
        assert_eq!(flags, vec![true, false, false, true, true, true]);
    }

    #[test]
    fn test_fence_inside_comment_is_ignored() {
        let flags = text_flags("<!--\n```\n-->\n# shown\n");
        assert_eq!(flags, vec![true, false, false, true]);
    }
}
