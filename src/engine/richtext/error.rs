use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Wrapping produced more blocks than the configured ceiling.
    /// The layout was still completed with the blocks built so far.
    BlockLimitExceeded { limit: usize, text_len: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockLimitExceeded { limit, text_len } => write!(
                f,
                "Block limit of {limit} exceeded while wrapping text of {text_len} bytes"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
