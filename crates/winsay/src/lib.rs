//! Wrap a message, frame it in a speech or thought bubble, and put a cow
//! under it.
//!
//! The pieces compose as a pipeline: [`select_message`] decides what to
//! say, [`wrap_text`] fits it to a column width, [`render`] draws the
//! bubble, and [`cow`] supplies the figure.
//!
//! # Example
//!
//! ```
//! use winsay::{Style, cow, render, wrap_text};
//!
//! let lines = wrap_text("hello world", 5);
//! let bubble = render(&lines, Style::Speech);
//!
//! assert_eq!(bubble[0], " _______");
//! assert_eq!(bubble[1], "/ hello \\");
//! assert_eq!(bubble[2], "\\ world /");
//! assert!(cow().starts_with("\\   ^__^"));
//! ```

pub mod bubble;
pub mod cow;
mod error;
pub mod quote;
pub mod source;
pub mod text;

pub use bubble::{Style, render, render_speech, render_thought};
pub use cow::cow;
pub use error::{Result, WinsayError};
pub use quote::Quote;
pub use source::{
    Capabilities, ProcessStdin, QuoteProvider, QuotesFile, StdinReader, select_message,
};
pub use text::{normalize_newlines, wrap_text};
