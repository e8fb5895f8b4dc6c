//! Choosing what the cow says.
//!
//! The message comes from the first of these that yields text:
//! positional arguments, piped standard input, a random line of the
//! quotes file. Standard input is never read when it is a terminal, so
//! an interactive invocation without arguments does not block.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::error::{Result, WinsayError};
use crate::quote::{Quote, pick_quote};

/// Name of the quotes file shipped next to the executable.
pub const QUOTES_FILE_NAME: &str = "quotes.txt";

// ── Traits ───────────────────────────────────────────────────────────

/// Reads the whole of standard input.
pub trait StdinReader {
    fn read_all(&mut self) -> Result<String>;
}

/// Supplies a quote when no other message is available.
pub trait QuoteProvider {
    fn quote(&mut self) -> Result<Quote>;
}

// ── Process-backed implementations ───────────────────────────────────

/// The process's real standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessStdin;

impl StdinReader for ProcessStdin {
    fn read_all(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Random quotes from a file on disk.
#[derive(Debug, Clone)]
pub struct QuotesFile {
    path: PathBuf,
}

impl QuotesFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The quotes file in the same directory as the running executable.
    ///
    /// Falls back to `./quotes.txt` when the executable's location is
    /// unknown.
    pub fn bundled() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(QUOTES_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteProvider for QuotesFile {
    fn quote(&mut self) -> Result<Quote> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|_| WinsayError::QuotesUnavailable)?;
        pick_quote(&content, &mut rand::rng())
    }
}

// ── Capabilities ─────────────────────────────────────────────────────

/// The I/O the message selector is allowed to perform.
///
/// `is_tty` overrides terminal detection on standard input; `None` asks
/// the operating system.
pub struct Capabilities<S = ProcessStdin, Q = QuotesFile> {
    pub stdin: S,
    pub quotes: Q,
    pub is_tty: Option<bool>,
}

impl Capabilities {
    /// Real standard input and the bundled quotes file.
    pub fn system() -> Self {
        Self {
            stdin: ProcessStdin,
            quotes: QuotesFile::bundled(),
            is_tty: None,
        }
    }
}

impl<S, Q> Capabilities<S, Q> {
    pub fn new(stdin: S, quotes: Q) -> Self {
        Self {
            stdin,
            quotes,
            is_tty: None,
        }
    }

    pub fn with_tty(mut self, is_tty: bool) -> Self {
        self.is_tty = Some(is_tty);
        self
    }

    fn stdin_is_terminal(&self) -> bool {
        self.is_tty.unwrap_or_else(|| std::io::stdin().is_terminal())
    }
}

/// Pick the message to say.
///
/// Positional fragments are joined with single spaces. Failures of the
/// quote provider are returned as-is; there is no further fallback.
pub fn select_message<S, Q>(positional: &[String], caps: &mut Capabilities<S, Q>) -> Result<Quote>
where
    S: StdinReader,
    Q: QuoteProvider,
{
    let joined = positional.join(" ");
    let message = joined.trim();
    if !message.is_empty() {
        return Ok(Quote::new(message));
    }

    if !caps.stdin_is_terminal() {
        let input = caps.stdin.read_all()?;
        let input = input.trim();
        if !input.is_empty() {
            return Ok(Quote::new(input));
        }
    }

    caps.quotes.quote()
}
