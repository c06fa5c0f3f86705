//! Common helpers & error types.

use thiserror::Error;

pub mod shares;

pub type Result<T> = std::result::Result<T, CodecError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Not enough shares are present to invert the code. Retryable once
    /// more shares arrive; every other variant is caller misuse.
    #[error("too few shards given")]
    TooFewShares,

    #[error("no shares given")]
    NoShares,

    #[error("share count {0} is not even")]
    OddShareCount(usize),

    #[error("{count} shares exceed the codec limit of {max}")]
    TooManyShares { count: usize, max: usize },

    #[error("share {index} is {got} bytes, expected {expected}")]
    ShareSizeMismatch { index: usize, expected: usize, got: usize },

    #[error("required mask has {got} entries, expected {original} or {total}")]
    RequiredLength { got: usize, original: usize, total: usize },

    #[error("{codec}: chunk size {size} not supported: {reason}")]
    InvalidChunkSize { codec: &'static str, size: usize, reason: &'static str },

    #[error("{codec} backend: {msg}")]
    Backend { codec: &'static str, msg: String },

    #[error("unknown codec {0:?}")]
    UnknownCodec(String),

    #[error("codec registry already initialized")]
    RegistryInitialized,
}

impl CodecError {
    pub fn is_too_few_shares(&self) -> bool { matches!(self, CodecError::TooFewShares) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_structural() {
        let err = CodecError::TooFewShares;
        assert!(err.is_too_few_shares());
        assert_eq!(err, CodecError::TooFewShares);
        assert_eq!(err.to_string(), "too few shards given");
        assert!(!CodecError::NoShares.is_too_few_shares());
    }

    #[test]
    fn messages_carry_context() {
        let err = CodecError::ShareSizeMismatch { index: 3, expected: 64, got: 32 };
        assert_eq!(err.to_string(), "share 3 is 32 bytes, expected 64");
        let err = CodecError::RequiredLength { got: 5, original: 4, total: 8 };
        assert_eq!(err.to_string(), "required mask has 5 entries, expected 4 or 8");
    }
}
