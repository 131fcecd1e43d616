//! # xdis-core
//!
//! Core data model for the xdis x86/x64 decoder. This crate defines the
//! decoded [`Instruction`] value and the closed sets it is built from:
//! instruction codes, registers, operand kinds and memory-size tags.
//! It contains no decoding logic.

pub mod arch;
pub mod code;
pub mod error;
pub mod instruction;
pub mod memory_size;
pub mod operand;
pub mod register;

pub use arch::Bitness;
pub use code::Code;
pub use error::Error;
pub use instruction::{Instruction, OpKind, RoundingControl, MAX_OP_COUNT};
pub use memory_size::MemorySize;
pub use operand::{Immediate, MemoryRef, Operand};
pub use register::{Register, RegisterClass};
