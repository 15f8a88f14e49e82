//! Error types for the operator table generators.

use thiserror::Error;

/// Primary error type for table parsing and emission.
#[derive(Error, Debug)]
pub enum OpgenError {
    #[error("empty operator row")]
    EmptyRow,

    #[error("unknown operand type check: {0}")]
    UnknownOperandType(String),

    #[error("invalid operand count for {op}: {value}")]
    InvalidCount { op: String, value: String },

    #[error("operand count mismatch for {op}: declared {declared}, listed {listed}")]
    OperandCountMismatch {
        op: String,
        declared: i32,
        listed: usize,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for OpgenError.
pub type Result<T> = std::result::Result<T, OpgenError>;
