//! Decoding error types.

use thiserror::Error;

/// Error type for instruction decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended in the middle of an instruction.
    #[error("out of bytes at {address:#x}: need {needed} bytes, have {available}")]
    OutOfBytes {
        address: u64,
        needed: usize,
        available: usize,
    },

    /// The bytes do not encode a valid instruction.
    ///
    /// [`Decoder::decode`](crate::x86::Decoder::decode) reports this as a
    /// one-byte `Code::Invalid` instruction; only the [`Disassembler`]
    /// trait surfaces it as an error.
    ///
    /// [`Disassembler`]: crate::Disassembler
    #[error("invalid instruction at {address:#x}: {reason}")]
    Invalid { address: u64, reason: &'static str },

    /// `decode()` was called with no bytes left.
    #[error("no more bytes to decode")]
    NoMoreBytes,
}

impl DecodeError {
    /// Creates a new OutOfBytes error.
    pub fn out_of_bytes(address: u64, needed: usize, available: usize) -> Self {
        Self::OutOfBytes {
            address,
            needed,
            available,
        }
    }

    /// Creates a new Invalid error.
    pub fn invalid(address: u64, reason: &'static str) -> Self {
        Self::Invalid { address, reason }
    }

    /// Returns true for errors that mean "ran off the end of the buffer".
    pub fn is_out_of_bytes(&self) -> bool {
        matches!(self, Self::OutOfBytes { .. } | Self::NoMoreBytes)
    }
}
