use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreapError {
    #[error("index {index} is out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot exchange blocks at {i} and {j} in sequence of length {len}")]
    InvalidBlocks { i: usize, j: usize, len: usize },
    #[error("cannot rotate {start}..{end} by {k} in sequence of length {len}")]
    InvalidRotation {
        start: usize,
        end: usize,
        k: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, TreapError>;
