//! The cow.

use std::sync::LazyLock;

const COW: &str = r"
        \   ^__^
         \  (oo)\_______
            (__)\       )\/\
                ||----w |
                ||     ||
";

static DEDENTED: LazyLock<String> = LazyLock::new(|| dedent(COW));

/// The cow figure with its decorative indentation removed.
pub fn cow() -> &'static str {
    &DEDENTED
}

/// Strip the common leading-space prefix from every non-blank line and
/// drop leading and trailing blank lines. Blank lines inside the text are
/// kept as they are.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    let stripped: Vec<&str> = lines
        .iter()
        .map(|l| if l.trim().is_empty() { *l } else { &l[indent..] })
        .collect();

    let start = stripped.iter().position(|l| !l.trim().is_empty());
    let end = stripped.iter().rposition(|l| !l.trim().is_empty());
    match (start, end) {
        (Some(start), Some(end)) => stripped[start..=end].join("\n"),
        _ => String::new(),
    }
}
