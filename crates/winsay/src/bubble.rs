//! Speech and thought bubbles around wrapped text.

use crate::text::{display_width, pad_lines};

/// Which frame to draw around the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Classic cowsay speech bubble: `< >` for one line, `/ \ | \ /` for more.
    #[default]
    Speech,
    /// Parenthesised thought bubble.
    Thought,
}

/// Frame `lines` in a bubble of the given style.
///
/// Lines are padded to the widest one first, so callers may append
/// unpadded lines (such as an attribution) after wrapping. An empty
/// input produces an empty bubble.
pub fn render(lines: &[String], style: Style) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }
    let lines = pad_lines(lines.to_vec());
    let width = display_width(&lines[0]);

    let (top, bottom) = match style {
        Style::Speech => (
            format!(" {}", "_".repeat(width + 2)),
            format!(" {}", "-".repeat(width + 2)),
        ),
        Style::Thought => (
            format!(" ({}) ", "_".repeat(width)),
            format!(" ({}) ", "-".repeat(width)),
        ),
    };

    let total = lines.len();
    let mut out = Vec::with_capacity(total + 2);
    out.push(top);
    for (index, line) in lines.iter().enumerate() {
        let (left, right) = sides(style, index, total);
        out.push(format!("{left} {line} {right}"));
    }
    out.push(bottom);
    out
}

/// Render a speech bubble.
pub fn render_speech(lines: &[String]) -> Vec<String> {
    render(lines, Style::Speech)
}

/// Render a thought bubble.
pub fn render_thought(lines: &[String]) -> Vec<String> {
    render(lines, Style::Thought)
}

fn sides(style: Style, index: usize, total: usize) -> (char, char) {
    match style {
        Style::Thought => ('(', ')'),
        Style::Speech if total == 1 => ('<', '>'),
        Style::Speech if index == 0 => ('/', '\\'),
        Style::Speech if index == total - 1 => ('\\', '/'),
        Style::Speech => ('|', '|'),
    }
}
