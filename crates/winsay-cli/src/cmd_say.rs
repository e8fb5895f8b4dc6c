use std::io::Write;

use anyhow::{Context, Result};
use winsay::{
    Capabilities, Quote, QuoteProvider, StdinReader, WinsayError, cow, render, select_message,
    wrap_text,
};

use crate::args::{self, Options};

/// Run winsay with the given arguments (program name excluded).
///
/// Returns the process exit code: 0 on success, 1 when no message could
/// be produced. Errors are reported as a single `winsay: ...` line on
/// `err`; nothing is written to `out` in that case.
pub fn run<S, Q>(
    argv: &[String],
    caps: &mut Capabilities<S, Q>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> u8
where
    S: StdinReader,
    Q: QuoteProvider,
{
    match say(argv, caps, out) {
        Ok(()) => 0,
        Err(e) => {
            // Nowhere left to report a failed write to stderr.
            let _ = writeln!(err, "winsay: {}", e);
            1
        }
    }
}

fn say<S, Q>(argv: &[String], caps: &mut Capabilities<S, Q>, out: &mut impl Write) -> Result<()>
where
    S: StdinReader,
    Q: QuoteProvider,
{
    let parsed = args::parse_args(argv.iter().cloned());

    if parsed.help {
        writeln!(out, "{}", args::usage().trim_end()).context("failed to write usage")?;
        return Ok(());
    }

    let quote = select_message(&parsed.positional, caps)?;
    let lines = compose(&quote, &parsed.options)?;

    for line in &lines {
        writeln!(out, "{}", line).context("failed to write output")?;
    }
    out.flush().context("failed to write output")?;
    Ok(())
}

/// Everything printed for `quote`: the bubble, then the cow.
fn compose(quote: &Quote, options: &Options) -> std::result::Result<Vec<String>, WinsayError> {
    let mut lines = wrap_text(&quote.text, options.wrap);
    if lines.is_empty() {
        return Err(WinsayError::EmptyMessage);
    }
    if let Some(attribution) = quote.attribution() {
        lines.push(attribution);
    }

    let mut output = render(&lines, options.style());
    output.extend(cow().lines().map(str::to_string));
    Ok(output)
}
