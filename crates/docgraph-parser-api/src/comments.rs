//! Comment-block extraction for languages without a structured extractor.
//!
//! Two independent passes run over the same text:
//!
//! 1. every `/* ... */` block comment, in order of appearance
//! 2. every run of consecutive `//` or `#` lines, in order of appearance
//!
//! The results of the second pass follow all results of the first; they are
//! not merged by position.

use crate::errors::ExtractResult;
use crate::item::DocItem;
use crate::traits::DocExtractor;
use regex::Regex;
use std::sync::LazyLock;

static RE_BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*(.*?)\*/").unwrap());

const LINE_MARKERS: &[&str] = &["//", "#"];

/// Extracts `comment_block` items from arbitrary text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentExtractor;

impl CommentExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run both passes and return block comments followed by line-comment runs.
    pub fn scan(&self, source: &str) -> Vec<DocItem> {
        let mut items = block_comments(source);
        items.extend(line_comment_runs(source));
        items
    }
}

impl DocExtractor for CommentExtractor {
    fn language(&self) -> &str {
        "generic"
    }

    fn file_extensions(&self) -> &[&str] {
        &[".js", ".java", ".ts", ".cpp", ".c", ".h"]
    }

    fn try_extract(&self, source: &str) -> ExtractResult<Vec<DocItem>> {
        Ok(self.scan(source))
    }
}

fn block_comments(source: &str) -> Vec<DocItem> {
    RE_BLOCK_COMMENT
        .captures_iter(source)
        .filter_map(|caps| {
            let snippet = caps.get(1)?.as_str().trim();
            (!snippet.is_empty()).then(|| DocItem::comment_block(snippet))
        })
        .collect()
}

fn line_comment_runs(source: &str) -> Vec<DocItem> {
    let mut items = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for line in split_lines(source) {
        let stripped = line.trim();
        match strip_line_marker(stripped) {
            Some(text) => buffer.push(text.trim()),
            None => flush(&mut buffer, &mut items),
        }
    }
    flush(&mut buffer, &mut items);

    items
}

fn strip_line_marker(line: &str) -> Option<&str> {
    LINE_MARKERS
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
}

fn flush(buffer: &mut Vec<&str>, items: &mut Vec<DocItem>) {
    if buffer.is_empty() {
        return;
    }
    items.push(DocItem::comment_block(buffer.join("\n").trim()));
    buffer.clear();
}

/// Split into lines at every line boundary Python's `str.splitlines`
/// recognizes, without a trailing empty line.
fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&source[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            start += 1;
        }
    }
    if start < source.len() {
        lines.push(&source[start..]);
    }

    lines
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(items: &[DocItem]) -> Vec<&str> {
        items.iter().map(|i| i.body.as_str()).collect()
    }

    #[test]
    fn test_block_comment_then_line_run() {
        let source = "/* A */\n// first\n// second\n// third\nint x;\n";
        let items = CommentExtractor::new().scan(source);

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.title == "comment_block"));
        assert_eq!(bodies(&items), vec!["A", "first\nsecond\nthird"]);
    }

    #[test]
    fn test_passes_are_not_merged_by_position() {
        let source = "// early\nint a;\n/* late */\n";
        let items = CommentExtractor::new().scan(source);

        assert_eq!(bodies(&items), vec!["late", "early"]);
    }

    #[test]
    fn test_block_comment_spans_lines_and_is_non_greedy() {
        let source = "/*\n * one\n */ code /* two */";
        let items = CommentExtractor::new().scan(source);

        assert_eq!(bodies(&items), vec!["* one", "two"]);
    }

    #[test]
    fn test_empty_block_comment_is_skipped() {
        let items = CommentExtractor::new().scan("/*   */ /**/ x");
        assert!(items.is_empty());
    }

    #[test]
    fn test_hash_lines_join_a_run() {
        let source = "#include <stdio.h>\n  # indented\nint main;\n";
        let items = CommentExtractor::new().scan(source);

        assert_eq!(bodies(&items), vec!["include <stdio.h>\nindented"]);
    }

    #[test]
    fn test_run_flushed_at_end_of_input() {
        let items = CommentExtractor::new().scan("x = 1\n// trailing");
        assert_eq!(bodies(&items), vec!["trailing"]);
    }

    #[test]
    fn test_blank_line_splits_runs() {
        let items = CommentExtractor::new().scan("// a\n\n// b\n");
        assert_eq!(bodies(&items), vec!["a", "b"]);
    }

    #[test]
    fn test_bare_markers_produce_trimmed_run() {
        let items = CommentExtractor::new().scan("//\n// text\n//\n");
        assert_eq!(bodies(&items), vec!["text"]);
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let items = CommentExtractor::new().scan("// a\r\n// b\rcode\r// c");
        assert_eq!(bodies(&items), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("\n\n"), vec!["", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_on_unicode_boundaries() {
        assert_eq!(
            split_lines("a\x0bb\x0cc\x1cd\u{85}e\u{2028}f\u{2029}g"),
            vec!["a", "b", "c", "d", "e", "f", "g"]
        );
        assert_eq!(split_lines("a\r\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_form_feed_separates_line_comments() {
        let items = CommentExtractor::new().scan("// a\x0c// b\nint x;\x0c// c\n");
        assert_eq!(bodies(&items), vec!["a\nb", "c"]);
    }
}
