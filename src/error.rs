use thiserror::Error;

// Unified error type for utmatrix

#[derive(Error, Debug)]
pub enum UtError {
    #[error("invalid argument: size, dimension or start index out of bounds")]
    InvalidArgument,
    #[error("index out of range")]
    OutOfRange,
    #[error("operand sizes do not match")]
    SizeMismatch,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse element from token {0:?}")]
    Parse(String),
    #[error("input ended before every element was read")]
    UnexpectedEof,
}
