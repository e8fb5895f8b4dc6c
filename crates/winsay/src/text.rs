//! Newline normalization, word wrapping, and padding.
//!
//! Widths are measured in characters: one `char` occupies one column.

/// Number of columns `s` occupies.
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Normalize line endings: `\r\n` and lone `\r` both become `\n`.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Wrap `text` to at most `width` columns and pad every line to the
/// length of the longest one.
///
/// Explicit line breaks are kept, blank source lines survive as blank
/// (padded) lines, and words longer than `width` are split into chunks
/// rather than truncated. Whitespace-only input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let normalized = normalize_newlines(text);
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for source_line in normalized.split('\n') {
        let trimmed = source_line.trim();
        if trimmed.is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_words(trimmed, width, &mut lines);
    }

    pad_lines(lines)
}

fn wrap_words(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = display_width(word);

        if word_width > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(width).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_none() && chunk.len() < width {
                    current = piece;
                } else {
                    out.push(piece);
                }
            }
            current_width = display_width(&current);
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}

/// Right-pad every line with spaces to the width of the widest line.
pub fn pad_lines(lines: Vec<String>) -> Vec<String> {
    let max = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    lines
        .into_iter()
        .map(|line| {
            let pad = max - display_width(&line);
            let mut padded = line;
            padded.extend(std::iter::repeat_n(' ', pad));
            padded
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(lines: &[String]) -> Vec<&str> {
        lines.iter().map(|l| l.trim_end()).collect()
    }

    // ── normalize_newlines ─────────────────────────────────────────────

    #[test]
    fn test_normalize_leaves_lf() {
        assert_eq!(normalize_newlines("a\nb"), "a\nb");
    }

    #[test]
    fn test_normalize_crlf() {
        assert_eq!(normalize_newlines("a\r\nb"), "a\nb");
    }

    #[test]
    fn test_normalize_lone_cr() {
        assert_eq!(normalize_newlines("a\rb"), "a\nb");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["a\r\n\rb", "\r\r\n\n", "plain", "x\n\ry\r\n"] {
            let once = normalize_newlines(input);
            assert_eq!(normalize_newlines(&once), once);
        }
    }

    // ── wrap_text ──────────────────────────────────────────────────────

    #[test]
    fn test_wrap_at_width() {
        assert_eq!(wrap_text("hello world", 5), vec!["hello", "world"]);
    }

    #[test]
    fn test_short_message_single_line() {
        assert_eq!(wrap_text("hi", 40), vec!["hi"]);
    }

    #[test]
    fn test_words_join_with_single_space() {
        assert_eq!(
            wrap_text("one two three four", 10),
            vec!["one two   ", "three four"]
        );
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(wrap_text("  a \t  b   c  ", 40), vec!["a b c"]);
    }

    #[test]
    fn test_pads_to_longest() {
        let out = wrap_text("a bb ccc dddd", 5);
        assert!(out.len() >= 2);
        let max = out.iter().map(|l| l.len()).max().unwrap();
        assert!(out.iter().all(|l| l.len() == max));
    }

    #[test]
    fn test_long_word_is_chunked() {
        assert_eq!(wrap_text("abcdef", 4), vec!["abcd", "ef  "]);
    }

    #[test]
    fn test_long_word_exact_multiple() {
        assert_eq!(wrap_text("abcdefgh x", 4), vec!["abcd", "efgh", "x   "]);
    }

    #[test]
    fn test_long_word_tail_accepts_following_words() {
        assert_eq!(wrap_text("abcdef g", 4), vec!["abcd", "ef g"]);
    }

    #[test]
    fn test_long_word_flushes_current_line() {
        assert_eq!(strip(&wrap_text("hi abcdefgh", 5)), vec!["hi", "abcde", "fgh"]);
    }

    #[test]
    fn test_preserves_explicit_breaks() {
        assert_eq!(wrap_text("a\nb", 10), vec!["a", "b"]);
    }

    #[test]
    fn test_preserves_paragraph_breaks() {
        assert_eq!(wrap_text("first\n\nsecond", 10), vec!["first ", "      ", "second"]);
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(wrap_text("one\r\ntwo\rthree", 10), vec!["one  ", "two  ", "three"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(wrap_text("", 40).is_empty());
        assert!(wrap_text("   ", 40).is_empty());
        assert!(wrap_text("\r\n\n\t", 40).is_empty());
    }

    #[test]
    fn test_zero_width_coerced_to_one() {
        assert_eq!(wrap_text("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let out = wrap_text("héllo wörld", 5);
        assert_eq!(out, vec!["héllo", "wörld"]);
    }

    #[test]
    fn test_invariants_over_widths() {
        let message = "The quick brown fox jumps over the lazy dog\n\nsupercalifragilistic  end";
        let expected: String = message.split_whitespace().collect();
        for width in 1..=30 {
            let out = wrap_text(message, width);
            assert!(!out.is_empty());
            let len = display_width(&out[0]);
            for line in &out {
                assert!(display_width(line) <= width, "width {width}: {line:?}");
                assert_eq!(display_width(line), len);
            }
            let content: String = out.iter().flat_map(|l| l.split_whitespace()).collect();
            assert_eq!(content, expected, "width {width}");
        }
    }

    // ── pad_lines ──────────────────────────────────────────────────────

    #[test]
    fn test_pad_lines_uses_char_width() {
        let out = pad_lines(vec!["— ab".into(), "abcdef".into()]);
        assert_eq!(out, vec!["— ab  ", "abcdef"]);
    }

    #[test]
    fn test_pad_lines_empty() {
        assert!(pad_lines(Vec::new()).is_empty());
    }
}
