//! # xdis-disasm
//!
//! x86/x64 instruction decoder.
//!
//! Decodes legacy one/two/three-byte opcodes, REX, VEX, EVEX, XOP and
//! 3DNow! encodings in 16-, 32- and 64-bit mode into
//! [`xdis_core::Instruction`] values.
//!
//! ```
//! use xdis_core::{Bitness, Code, Register};
//! use xdis_disasm::{x86::Decoder, DecoderOptions};
//!
//! let mut decoder = Decoder::new(Bitness::Bits64, &[0x48, 0x01, 0xCE], DecoderOptions::NONE);
//! let insn = decoder.decode().unwrap();
//! assert_eq!(insn.code(), Code::Add_rm64_r64);
//! assert_eq!(insn.op_register(0), Register::RSI);
//! assert_eq!(insn.len(), 3);
//! ```

pub mod error;
pub mod options;
pub mod traits;
pub mod x86;

pub use error::DecodeError;
pub use options::DecoderOptions;
pub use traits::{DecodedInstruction, Disassembler};
pub use x86::{decode, ConstantOffsets, Decoder, X86Disassembler};
