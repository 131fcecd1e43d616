//! Property-based tests for the x86 decoder.
//!
//! These tests verify invariants that hold for arbitrary input:
//! - Decoding never panics
//! - Decoded length is within 1..=15 and the bytes available
//! - Decoding is deterministic
//! - Sequential decoding covers every byte exactly once
//! - Constant offsets stay inside the instruction

use proptest::prelude::*;

use xdis_core::Bitness;
use xdis_disasm::x86::Decoder;
use xdis_disasm::{DecoderOptions, Disassembler, X86Disassembler};

fn bitness() -> impl Strategy<Value = Bitness> {
    prop_oneof![Just(Bitness::Bits16), Just(Bitness::Bits32), Just(Bitness::Bits64)]
}

fn options() -> impl Strategy<Value = DecoderOptions> {
    prop_oneof![
        Just(DecoderOptions::NONE),
        Just(DecoderOptions::AMD),
        Just(DecoderOptions::NO_INVALID_CHECK),
        Just(DecoderOptions::AMD | DecoderOptions::NO_INVALID_CHECK),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// Decoding arbitrary bytes should never panic.
    #[test]
    fn decode_never_panics(
        bytes in prop::collection::vec(any::<u8>(), 0..32),
        bitness in bitness(),
        options in options(),
    ) {
        let disasm = X86Disassembler::with_options(bitness, options);
        let _ = disasm.decode_instruction(&bytes, 0x1000);
    }

    /// Decoded instructions are 1 to 15 bytes and never exceed the input.
    #[test]
    fn decoded_size_is_valid(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        bitness in bitness(),
        options in options(),
    ) {
        let mut decoder = Decoder::new(bitness, &bytes, options);
        if let Ok(insn) = decoder.decode() {
            prop_assert!(insn.len() >= 1, "Instruction size must be at least 1");
            prop_assert!(insn.len() <= 15, "Instruction size must be at most 15");
            prop_assert!(insn.len() <= bytes.len(), "Instruction size cannot exceed input length");
            prop_assert_eq!(decoder.position(), insn.len());
        } else {
            prop_assert_eq!(decoder.position(), 0, "A failed decode must not consume bytes");
        }
    }

    /// Decoding is deterministic: same input always produces same output.
    #[test]
    fn decode_is_deterministic(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        bitness in bitness(),
    ) {
        let first = Decoder::new(bitness, &bytes, DecoderOptions::NONE).decode();
        let second = Decoder::new(bitness, &bytes, DecoderOptions::NONE).decode();
        prop_assert_eq!(first, second);
    }

    /// Decoded instructions carry the address they were decoded at.
    #[test]
    fn decoded_address_matches(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        addr in 0x1000u64..0xFFFF_FFFF_FFFF_0000u64,
    ) {
        let disasm = X86Disassembler::new(Bitness::Bits64);
        if let Ok(decoded) = disasm.decode_instruction(&bytes, addr) {
            prop_assert_eq!(decoded.instruction.ip(), addr);
            prop_assert_eq!(decoded.size, decoded.instruction.len());
        }
    }

    /// Valid instructions have a non-empty mnemonic.
    #[test]
    fn decoded_has_mnemonic(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let disasm = X86Disassembler::new(Bitness::Bits64);
        if let Ok(decoded) = disasm.decode_instruction(&bytes, 0x1000) {
            prop_assert!(!decoded.instruction.is_invalid());
            prop_assert!(!decoded.instruction.mnemonic().is_empty());
        }
    }

    /// Sequential decoding covers all bytes (no gaps or overlaps) up to a
    /// truncated tail.
    #[test]
    fn sequential_decode_covers_all_bytes(
        bytes in prop::collection::vec(any::<u8>(), 16..128),
        bitness in bitness(),
    ) {
        let mut decoder = Decoder::new(bitness, &bytes, DecoderOptions::NONE);
        let mut covered = vec![false; bytes.len()];

        while decoder.can_decode() {
            let start = decoder.position();
            match decoder.decode() {
                Ok(insn) => {
                    prop_assert!(insn.len() > 0, "Decoded size must be positive");
                    for (i, covered_byte) in covered[start..start + insn.len()].iter_mut().enumerate() {
                        prop_assert!(!*covered_byte, "Byte {} covered twice", start + i);
                        *covered_byte = true;
                    }
                    prop_assert_eq!(decoder.position(), start + insn.len());
                }
                Err(err) => {
                    prop_assert!(err.is_out_of_bytes());
                    prop_assert_eq!(decoder.position(), start);
                    for covered_byte in &mut covered[start..] {
                        *covered_byte = true;
                    }
                    break;
                }
            }
        }

        for (i, &c) in covered.iter().enumerate() {
            prop_assert!(c, "Byte {} was not covered", i);
        }
    }

    /// Displacement and immediate offsets lie inside the instruction.
    #[test]
    fn constant_offsets_within_instruction(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        bitness in bitness(),
    ) {
        let mut decoder = Decoder::new(bitness, &bytes, DecoderOptions::NONE);
        if let Ok(insn) = decoder.decode() {
            let offsets = decoder.get_constant_offsets(&insn);
            if offsets.has_displacement() {
                prop_assert!(offsets.displacement_offset + offsets.displacement_size <= insn.len());
            }
            if offsets.has_immediate() {
                prop_assert!(offsets.immediate_offset + offsets.immediate_size <= insn.len());
            }
            if offsets.has_immediate2() {
                prop_assert!(offsets.immediate_offset2 + offsets.immediate_size2 <= insn.len());
            }
        }
    }
}
