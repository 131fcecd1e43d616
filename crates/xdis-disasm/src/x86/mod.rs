//! x86/x64 decoding.
//!
//! Decoding runs in stages: legacy and REX prefixes ([`prefix`]), opcode
//! map selection including the VEX/EVEX/XOP escapes ([`map`]), template
//! lookup ([`tables`]), ModR/M and effective-address decoding ([`modrm`])
//! and finally operand materialization ([`operand`]). [`Decoder`] drives
//! the stages and owns the per-instruction state.

mod cursor;
mod decoder;
mod map;
mod modrm;
mod operand;
mod prefix;
pub(crate) mod tables;

pub use decoder::{decode, Decoder, DecoderIntoIter, DecoderIter, X86Disassembler};
pub use operand::ConstantOffsets;
