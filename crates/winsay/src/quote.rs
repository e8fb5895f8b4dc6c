//! Quotes and the quotes file format.
//!
//! A quotes file holds one entry per line. An entry may name its speaker
//! after a `|`:
//!
//! ```text
//! Don't Panic.|The Hitchhiker's Guide
//! ```

use rand::Rng;

use crate::error::{Result, WinsayError};
use crate::text::normalize_newlines;

/// A message to say, optionally attributed to a speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub speaker: Option<String>,
}

impl Quote {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Parse one line of a quotes file.
    ///
    /// Format: `"text"` or `"text|speaker"`. Only the first `|` separates;
    /// an empty speaker is treated as absent.
    pub fn parse_line(line: &str) -> Self {
        match line.split_once('|') {
            Some((text, speaker)) => {
                let speaker = speaker.trim();
                Quote {
                    text: text.trim().to_string(),
                    speaker: (!speaker.is_empty()).then(|| speaker.to_string()),
                }
            }
            None => Quote::new(line.trim()),
        }
    }

    /// The attribution line shown under the message, if any.
    pub fn attribution(&self) -> Option<String> {
        self.speaker.as_ref().map(|s| format!("— {}", s))
    }
}

impl From<&str> for Quote {
    fn from(text: &str) -> Self {
        Quote::new(text)
    }
}

impl From<String> for Quote {
    fn from(text: String) -> Self {
        Quote::new(text)
    }
}

/// Candidate lines of a quotes file: trimmed, blanks dropped.
pub fn parse_quotes(content: &str) -> Vec<String> {
    normalize_newlines(content)
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Choose one quote uniformly at random from the file contents.
pub fn pick_quote<R: Rng + ?Sized>(content: &str, rng: &mut R) -> Result<Quote> {
    let lines = parse_quotes(content);
    if lines.is_empty() {
        return Err(WinsayError::QuotesUnavailable);
    }
    let i = rng.random_range(0..lines.len());
    Ok(Quote::parse_line(&lines[i]))
}
