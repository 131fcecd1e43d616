//! Error types for xdis-core.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bitness other than 16, 32 or 64.
    #[error("invalid bitness: {0} (expected 16, 32 or 64)")]
    InvalidBitness(u32),

    /// Operand index past the instruction's operand count.
    #[error("operand index {index} out of range (instruction has {count} operands)")]
    OperandIndex { index: usize, count: usize },

    /// Operand exists but is not an immediate.
    #[error("operand {0} is not an immediate")]
    NotImmediate(usize),
}
