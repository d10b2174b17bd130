use thiserror::Error;

/// Errors produced while parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid color `{input}`: expected 3 or 6 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    #[error("invalid color `{input}`: `{ch}` is not a hex digit")]
    InvalidDigit { input: String, ch: char },
}
