use thiserror::Error;

pub type Result<T> = std::result::Result<T, WinsayError>;

#[derive(Debug, Error)]
pub enum WinsayError {
    #[error("quotes file missing or empty")]
    QuotesUnavailable,

    #[error("message is empty")]
    EmptyMessage,

    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),
}
