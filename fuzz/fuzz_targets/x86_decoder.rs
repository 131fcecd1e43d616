#![no_main]

use libfuzzer_sys::fuzz_target;
use xdis_core::{Bitness, Instruction};
use xdis_disasm::x86::Decoder;
use xdis_disasm::{DecoderOptions, Disassembler, X86Disassembler};

fuzz_target!(|data: &[u8]| {
    // First byte picks the mode and options.
    let Some((&selector, code)) = data.split_first() else {
        return;
    };
    let bitness = match selector & 3 {
        0 => Bitness::Bits16,
        1 => Bitness::Bits32,
        _ => Bitness::Bits64,
    };
    let options = DecoderOptions::from_bits_truncate(u32::from(selector >> 2));

    let disasm = X86Disassembler::with_options(bitness, options);
    let _ = disasm.decode_instruction(code, 0x1000);

    let mut decoder = Decoder::new(bitness, code, options);
    decoder.set_ip(0x1000);
    let mut insn = Instruction::default();
    while decoder.can_decode() {
        let start = decoder.position();
        if decoder.decode_out(&mut insn).is_err() {
            assert_eq!(decoder.position(), start);
            break;
        }
        assert!((1..=15).contains(&insn.len()));
        assert_eq!(decoder.position(), start + insn.len());
        let offsets = decoder.get_constant_offsets(&insn);
        assert!(offsets.immediate_offset + offsets.immediate_size <= insn.len());
        let _ = insn.to_string();
    }
});
