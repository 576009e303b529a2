use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("input contains no symbols")]
    EmptyInput,
    #[error("codeword ends at an internal node at bit {position}")]
    IncompleteCodeword { position: usize },
    #[error("invalid bit {bit:?} at position {position}")]
    InvalidBit { bit: char, position: usize },
    #[error("symbol {0} has no codeword")]
    UnknownSymbol(String),
    #[error("codeword {prefix:?} is a prefix of {codeword:?}")]
    PrefixViolation { prefix: String, codeword: String },
}
