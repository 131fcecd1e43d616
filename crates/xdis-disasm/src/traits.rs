//! Disassembler traits.

use crate::DecodeError;
use xdis_core::{Bitness, Instruction};

/// Result of decoding an instruction.
#[derive(Debug, Clone)]
pub struct DecodedInstruction {
    /// The decoded instruction.
    pub instruction: Instruction,
    /// Number of bytes consumed.
    pub size: usize,
}

/// Trait for one-shot instruction decoders.
pub trait Disassembler {
    /// Decode a single instruction starting at the given address.
    ///
    /// # Arguments
    /// * `bytes` - The raw bytes to decode
    /// * `address` - The virtual address of the first byte
    ///
    /// # Returns
    /// The decoded instruction and the number of bytes consumed. Invalid
    /// encodings are reported as [`DecodeError::Invalid`].
    fn decode_instruction(&self, bytes: &[u8], address: u64) -> Result<DecodedInstruction, DecodeError>;

    /// Returns the minimum instruction size.
    fn min_instruction_size(&self) -> usize;

    /// Returns the maximum instruction size.
    fn max_instruction_size(&self) -> usize;

    /// Returns whether instructions are fixed-width.
    fn is_fixed_width(&self) -> bool;

    /// Returns the processor mode this decoder targets.
    fn bitness(&self) -> Bitness;

    /// Decodes `bytes` from start to end, one entry per instruction.
    ///
    /// An invalid encoding yields an `Err` entry and decoding resumes at
    /// the next byte. An instruction cut off by the end of `bytes` yields
    /// a final out-of-bytes error.
    fn disassemble_block(&self, bytes: &[u8], start_address: u64) -> Vec<Result<Instruction, DecodeError>>;
}
