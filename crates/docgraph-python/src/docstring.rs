//! Decoding and cleaning of Python string literals used as docstrings.

const TAB_SIZE: usize = 8;

/// Decode the source text of one string literal (prefix and quotes included).
///
/// Returns `None` for literals that are not plain `str` constants (bytes,
/// f-strings, t-strings) or that are not properly quoted.
pub fn decode_literal(text: &str) -> Option<String> {
    let quote_pos = text.find(['"', '\''])?;
    let prefix = text[..quote_pos].to_ascii_lowercase();
    if prefix.contains(['b', 'f', 't']) {
        return None;
    }
    let raw = prefix.contains('r');

    let rest = &text[quote_pos..];
    let delim = if rest.starts_with("\"\"\"") || rest.starts_with("'''") {
        &rest[..3]
    } else {
        &rest[..1]
    };
    if rest.len() < delim.len() * 2 || !rest.ends_with(delim) {
        return None;
    }
    let inner = normalize_newlines(&rest[delim.len()..rest.len() - delim.len()]);

    Some(if raw { inner } else { unescape(&inner) })
}

/// Clean a docstring the way Python's `inspect.cleandoc` does.
///
/// Tabs are expanded, the first line is left-stripped, the common indentation
/// of the remaining non-blank lines is removed and leading/trailing empty
/// lines are dropped.
pub fn clean(doc: &str) -> String {
    let expanded = expand_tabs(doc);
    let mut lines: Vec<&str> = expanded.split('\n').collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start_matches(' ');
            (!content.is_empty()).then(|| line.len() - content.len())
        })
        .min();

    if let Some(first) = lines.first_mut() {
        *first = first.trim_start();
    }
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line.get(margin..).unwrap_or("");
        }
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();

    lines[leading..].join("\n")
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

// `\N{NAME}` needs the Unicode name table and is kept as written.
fn unescape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\\' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let Some(&next) = chars.get(i + 1) else {
            out.push('\\');
            break;
        };
        i += 2;
        match next {
            '\n' => {}
            '\\' | '\'' | '"' => out.push(next),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            '0'..='7' => {
                let digits: String = std::iter::once(next)
                    .chain(
                        chars[i..]
                            .iter()
                            .take(2)
                            .take_while(|c| c.is_digit(8))
                            .copied(),
                    )
                    .collect();
                i += digits.len() - 1;
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(c) => out.push(c),
                    None => {
                        out.push('\\');
                        out.push_str(&digits);
                    }
                }
            }
            'x' | 'u' | 'U' => {
                let width = match next {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let decoded = chars
                    .get(i..i + width)
                    .filter(|digits| digits.iter().all(|c| c.is_ascii_hexdigit()))
                    .and_then(|digits| {
                        let digits: String = digits.iter().collect();
                        u32::from_str_radix(&digits, 16).ok()
                    })
                    .and_then(char::from_u32);
                match decoded {
                    Some(c) => {
                        out.push(c);
                        i += width;
                    }
                    None => {
                        out.push('\\');
                        out.push(next);
                    }
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_quote_styles() {
        assert_eq!(decode_literal(r#""""Triple.""""#).as_deref(), Some("Triple."));
        assert_eq!(decode_literal("'''Single triple.'''").as_deref(), Some("Single triple."));
        assert_eq!(decode_literal("'plain'").as_deref(), Some("plain"));
        assert_eq!(decode_literal(r#""""#).as_deref(), Some(""));
        assert_eq!(decode_literal(r#""""""""#).as_deref(), Some(""));
    }

    #[test]
    fn test_decode_rejects_bytes_and_fstrings() {
        assert_eq!(decode_literal(r#"b"bytes""#), None);
        assert_eq!(decode_literal(r#"Rb"bytes""#), None);
        assert_eq!(decode_literal(r#"f"{x}""#), None);
        assert_eq!(decode_literal("'unterminated"), None);
    }

    #[test]
    fn test_decode_escapes() {
        assert_eq!(decode_literal(r#""a\tb\nc""#).as_deref(), Some("a\tb\nc"));
        assert_eq!(decode_literal(r#""\x41é\U0001F600""#).as_deref(), Some("Aé😀"));
        assert_eq!(decode_literal(r#""\101\0""#).as_deref(), Some("A\0"));
        assert_eq!(decode_literal(r#""\q\xZZ""#).as_deref(), Some("\\q\\xZZ"));
        assert_eq!(decode_literal("\"line\\\ncontinued\"").as_deref(), Some("linecontinued"));
    }

    #[test]
    fn test_named_unicode_escape_kept_verbatim() {
        assert_eq!(
            decode_literal(r#""\N{BULLET} x""#).as_deref(),
            Some("\\N{BULLET} x")
        );
    }

    #[test]
    fn test_raw_prefix_keeps_backslashes() {
        assert_eq!(decode_literal(r#"r"a\nb""#).as_deref(), Some("a\\nb"));
        assert_eq!(decode_literal(r#"U"a\nb""#).as_deref(), Some("a\nb"));
    }

    #[test]
    fn test_decode_normalizes_line_endings() {
        assert_eq!(decode_literal("\"\"\"a\r\nb\rc\"\"\"").as_deref(), Some("a\nb\nc"));
    }

    #[test]
    fn test_clean_removes_common_indent() {
        let doc = "Summary.\n\n    Details here.\n      Indented more.\n    ";
        assert_eq!(clean(doc), "Summary.\n\nDetails here.\n  Indented more.");
    }

    #[test]
    fn test_clean_strips_blank_edges() {
        assert_eq!(clean("\n    First.\n    Second.\n"), "First.\nSecond.");
        assert_eq!(clean("   "), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_clean_expands_tabs() {
        assert_eq!(clean("Head.\n\tbody\n\t  more"), "Head.\nbody\n  more");
        assert_eq!(expand_tabs("ab\tc"), "ab      c");
    }
}
