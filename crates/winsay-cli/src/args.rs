use std::num::IntErrorKind;

use clap::{Arg, ArgAction, Command};
use winsay::Style;

pub const DEFAULT_WRAP: usize = 40;
pub const MIN_WRAP: usize = 5;

/// Rendering options taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Column width to wrap the message to.
    pub wrap: usize,
    /// Draw a thought bubble instead of a speech bubble.
    pub thought: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wrap: DEFAULT_WRAP,
            thought: false,
        }
    }
}

impl Options {
    pub fn style(&self) -> Style {
        if self.thought {
            Style::Thought
        } else {
            Style::Speech
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub options: Options,
    pub help: bool,
    /// Message fragments, in the order given.
    pub positional: Vec<String>,
}

/// Parse a `--wrap` value. Anything that is not an integer means the
/// default; small and negative values are raised to [`MIN_WRAP`] and
/// integers too large to represent saturate.
pub fn parse_wrap(value: &str) -> usize {
    let width = match value.trim().parse::<i64>() {
        Ok(n) => usize::try_from(n).unwrap_or(if n < 0 { 0 } else { usize::MAX }),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => usize::MAX,
            IntErrorKind::NegOverflow => 0,
            _ => return DEFAULT_WRAP,
        },
    };
    width.max(MIN_WRAP)
}

/// Split command-line tokens into options and message fragments.
///
/// Never fails: tokens that are not recognised flags, unknown flags
/// included, become part of the message.
pub fn parse_args<I, T>(tokens: I) -> ParsedArgs
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut parsed = ParsedArgs::default();
    let mut tokens = tokens.into_iter().map(Into::into);

    while let Some(token) = tokens.next() {
        if let Some(value) = token.strip_prefix("--wrap=") {
            parsed.options.wrap = parse_wrap(value);
            continue;
        }
        match token.as_str() {
            "--wrap" => {
                if let Some(value) = tokens.next() {
                    parsed.options.wrap = parse_wrap(&value);
                }
            }
            "--thought" => parsed.options.thought = true,
            "-h" | "--help" => parsed.help = true,
            _ => parsed.positional.push(token),
        }
    }

    parsed
}

fn command() -> Command {
    Command::new("winsay")
        .about("A cow that says things")
        .long_about(
            "A cow that says things.\n\n\
             The message is taken from the arguments, then from piped standard \
             input, then from a random line of the quotes.txt file next to the \
             executable.",
        )
        .arg(
            Arg::new("wrap")
                .long("wrap")
                .value_name("N")
                .default_value(DEFAULT_WRAP.to_string())
                .help(format!("Wrap text to N columns (minimum {MIN_WRAP})")),
        )
        .arg(
            Arg::new("thought")
                .long("thought")
                .action(ArgAction::SetTrue)
                .help("Draw a thought bubble instead of a speech bubble"),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .num_args(0..)
                .help("Message to say; words are joined with single spaces"),
        )
}

/// Usage text printed for `-h` / `--help`.
pub fn usage() -> String {
    command().render_long_help().to_string()
}
