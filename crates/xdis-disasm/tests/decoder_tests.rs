//! Decoder behaviour on hand-assembled instruction bytes.

use xdis_core::{Bitness, Code, MemorySize, OpKind, Register};
use xdis_disasm::x86::{decode, Decoder};
use xdis_disasm::{DecodeError, DecoderOptions, Disassembler, X86Disassembler};

fn hex(s: &str) -> Vec<u8> {
    s.split_whitespace()
        .map(|b| u8::from_str_radix(b, 16).unwrap())
        .collect()
}

fn decode_at(bitness: Bitness, bytes: &str) -> xdis_core::Instruction {
    decode(&hex(bytes), bitness, 0x1000, DecoderOptions::NONE).unwrap()
}

/// (bitness, bytes, code, length)
const FIXTURES: &[(Bitness, &str, Code, usize)] = &[
    (Bitness::Bits16, "C0 00 5A", Code::Rol_rm8_imm8, 3),
    (Bitness::Bits32, "C0 00 5A", Code::Rol_rm8_imm8, 3),
    (Bitness::Bits64, "D0 F8", Code::Sar_rm8_1, 2),
    (Bitness::Bits64, "C1 C1 5A", Code::Rol_rm32_imm8, 3),
    (Bitness::Bits64, "66 C1 C1 5A", Code::Rol_rm16_imm8, 4),
    (Bitness::Bits64, "48 C1 C1 5A", Code::Rol_rm64_imm8, 4),
    (Bitness::Bits64, "66 48 C1 C1 5A", Code::Rol_rm64_imm8, 5),
    (Bitness::Bits32, "C1 C1 5A", Code::Rol_rm32_imm8, 3),
    (Bitness::Bits32, "66 C1 C1 5A", Code::Rol_rm16_imm8, 4),
    (Bitness::Bits16, "C1 C1 5A", Code::Rol_rm16_imm8, 3),
    (Bitness::Bits16, "66 C1 C1 5A", Code::Rol_rm32_imm8, 4),
    (Bitness::Bits32, "40", Code::Inc_r32, 1),
    (Bitness::Bits16, "40", Code::Inc_r16, 1),
    (Bitness::Bits32, "48", Code::Dec_r32, 1),
    (Bitness::Bits32, "63 C8", Code::Arpl_rm16_r16, 2),
    (Bitness::Bits64, "48 63 C8", Code::Movsxd_r64_rm32, 3),
    (Bitness::Bits32, "C4 00", Code::Les_r32_m1632, 2),
    (Bitness::Bits16, "C4 00", Code::Les_r16_m1616, 2),
    (Bitness::Bits32, "C5 F8 77", Code::VEX_Vzeroupper, 3),
    (Bitness::Bits64, "C5 F8 77", Code::VEX_Vzeroupper, 3),
    (Bitness::Bits64, "C4 63 49 68 D3 C0", Code::VEX_Vfmaddps_xmm_xmm_xmmm128_xmm, 6),
    (Bitness::Bits64, "8F E8 78 C0 C1 05", Code::XOP_Vprotb_xmm_xmmm128_imm8, 6),
    (Bitness::Bits64, "0F 0F C1 9E", Code::D3NOW_Pfadd_mm_mmm64, 4),
    (Bitness::Bits64, "F3 90", Code::Pause, 2),
    (Bitness::Bits64, "41 90", Code::Xchg_r32_EAX, 2),
    (Bitness::Bits64, "F3 41 90", Code::Pause, 3),
    (Bitness::Bits64, "66 0F C7 F0", Code::Rdrand_r16, 4),
    (Bitness::Bits64, "48 0F C7 F8", Code::Rdseed_r64, 4),
    (Bitness::Bits64, "F3 0F C7 F8", Code::Rdpid_r64, 4),
    (Bitness::Bits64, "F2 0F 38 F0 C0", Code::Crc32_r32_rm8, 5),
    (Bitness::Bits64, "66 0F 38 F0 00", Code::Movbe_r16_m16, 5),
    (Bitness::Bits64, "66 0F 37", Code::Getsec, 3),
    (Bitness::Bits64, "F3 0F 01 C1", Code::Vmcall, 4),
    (Bitness::Bits64, "48 8D 04 88", Code::Lea_r64_m, 4),
    (Bitness::Bits32, "D7", Code::Xlat_m8, 1),
    (Bitness::Bits64, "CC", Code::Int3, 1),
];

#[test]
fn test_fixture_codes_and_lengths() {
    for &(bitness, bytes, code, len) in FIXTURES {
        let insn = decode_at(bitness, bytes);
        assert_eq!(insn.code(), code, "{:?} {}", bitness, bytes);
        assert_eq!(insn.len(), len, "{:?} {}", bitness, bytes);
    }
}

#[test]
fn test_bitness_default_addressing() {
    let insn = decode_at(Bitness::Bits16, "C0 00 5A");
    assert_eq!(insn.op_kind(0), OpKind::Memory);
    assert_eq!(insn.memory_segment(), Register::DS);
    assert_eq!(insn.memory_base(), Register::BX);
    assert_eq!(insn.memory_index(), Register::SI);
    assert_eq!(insn.memory_index_scale(), 1);
    assert_eq!(insn.memory_displacement64(), 0);
    assert_eq!(insn.memory_displ_size(), 0);
    assert_eq!(insn.memory_size(), MemorySize::UInt8);
    assert_eq!(insn.op_kind(1), OpKind::Immediate8);
    assert_eq!(insn.immediate8(), 0x5A);

    let insn = decode_at(Bitness::Bits32, "C0 00 5A");
    assert_eq!(insn.memory_base(), Register::EAX);
    assert_eq!(insn.memory_index(), Register::None);
    assert_eq!(insn.immediate8(), 0x5A);
}

#[test]
fn test_address_size_override() {
    let insn = decode_at(Bitness::Bits64, "67 8B 00");
    assert_eq!(insn.code(), Code::Mov_r32_rm32);
    assert_eq!(insn.memory_base(), Register::EAX);

    let insn = decode_at(Bitness::Bits16, "67 8B 00");
    assert_eq!(insn.memory_base(), Register::EAX);

    let insn = decode_at(Bitness::Bits32, "67 8B 00");
    assert_eq!(insn.memory_base(), Register::BX);
    assert_eq!(insn.memory_index(), Register::SI);
}

#[test]
fn test_gpr8_with_and_without_rex() {
    assert_eq!(decode_at(Bitness::Bits64, "D0 F8").op_register(0), Register::AL);
    assert_eq!(decode_at(Bitness::Bits64, "40 D0 F8").op_register(0), Register::AL);
    assert_eq!(decode_at(Bitness::Bits64, "D0 F7").op_register(0), Register::BH);
    assert_eq!(decode_at(Bitness::Bits64, "40 D0 F7").op_register(0), Register::DIL);
    assert_eq!(decode_at(Bitness::Bits64, "41 D0 F7").op_register(0), Register::R15L);

    let insn = decode_at(Bitness::Bits64, "D0 F8");
    assert_eq!(insn.op_kind(1), OpKind::Immediate8);
    assert_eq!(insn.immediate8(), 1);
}

#[test]
fn test_group2_width_table() {
    let cases = [
        ("C1 C1 5A", Register::ECX),
        ("66 C1 C1 5A", Register::CX),
        ("48 C1 C1 5A", Register::RCX),
        ("66 48 C1 C1 5A", Register::RCX),
        ("49 C1 C1 5A", Register::R9),
    ];
    for (bytes, reg) in cases {
        let insn = decode_at(Bitness::Bits64, bytes);
        assert_eq!(insn.op_register(0), reg, "{}", bytes);
        assert_eq!(insn.immediate8(), 0x5A, "{}", bytes);
    }
}

#[test]
fn test_fma4_register_sources() {
    // VEX.R -> reg, vvvv, rm, is4[7:4]
    let insn = decode_at(Bitness::Bits64, "C4 63 49 68 D3 C0");
    assert_eq!(insn.op_count(), 4);
    assert_eq!(insn.op_register(0), Register::XMM10);
    assert_eq!(insn.op_register(1), Register::XMM6);
    assert_eq!(insn.op_register(2), Register::XMM3);
    assert_eq!(insn.op_register(3), Register::XMM12);
    assert_eq!(insn.mnemonic(), "vfmaddps");
}

#[test]
fn test_rex_is_dropped_before_legacy_prefix() {
    let insn = decode_at(Bitness::Bits64, "48 66 01 C0");
    assert_eq!(insn.code(), Code::Add_rm16_r16);
    assert_eq!(insn.op_register(0), Register::AX);

    let insn = decode_at(Bitness::Bits64, "66 48 01 C0");
    assert_eq!(insn.code(), Code::Add_rm64_r64);
    assert_eq!(insn.op_register(0), Register::RAX);
}

#[test]
fn test_segment_override_precedence() {
    // In 64-bit mode FS/GS win over a later ES/CS/SS/DS.
    let insn = decode_at(Bitness::Bits64, "64 26 8B 00");
    assert_eq!(insn.memory_segment(), Register::FS);

    let insn = decode_at(Bitness::Bits32, "64 26 8B 00");
    assert_eq!(insn.memory_segment(), Register::ES);

    // SS is the default for rBP/rSP bases.
    let insn = decode_at(Bitness::Bits32, "8B 45 08");
    assert_eq!(insn.memory_segment(), Register::SS);
    assert_eq!(insn.memory_displacement64(), 8);
}

#[test]
fn test_rip_relative() {
    let insn = decode_at(Bitness::Bits64, "48 8B 05 10 00 00 00");
    assert_eq!(insn.memory_base(), Register::RIP);
    assert_eq!(insn.memory_displacement64(), 0x10);
    assert!(insn.is_ip_rel_memory_operand());
    assert_eq!(insn.ip_rel_memory_address(), 0x1017);

    let insn = decode_at(Bitness::Bits32, "8B 05 10 00 00 00");
    assert_eq!(insn.memory_base(), Register::None);
    assert_eq!(insn.memory_displacement64(), 0x10);
}

#[test]
fn test_invalid_in_64bit_mode() {
    for bytes in ["06", "27", "D4 0A", "CE", "9A 00 00 00 00 00 00", "C4 00", "82 C0 01"] {
        let insn = decode_at(Bitness::Bits64, bytes);
        assert!(insn.is_invalid(), "{}", bytes);
        assert_eq!(insn.len(), 1, "{}", bytes);
    }
}

#[test]
fn test_resynchronization_after_invalid() {
    let bytes = hex("06 07 55 C3");
    let mut decoder = Decoder::new(Bitness::Bits64, &bytes, DecoderOptions::NONE);
    decoder.set_ip(0x7000);

    let mut seen = Vec::new();
    while decoder.can_decode() {
        let ip = decoder.ip();
        let insn = decoder.decode().unwrap();
        assert_eq!(insn.ip(), ip);
        seen.push((insn.code(), insn.len()));
    }
    assert_eq!(
        seen,
        vec![
            (Code::Invalid, 1),
            (Code::Invalid, 1),
            (Code::Push_r64, 1),
            (Code::Retnq, 1),
        ]
    );
    assert_eq!(decoder.ip(), 0x7004);
    assert_eq!(decoder.decode().unwrap_err(), DecodeError::NoMoreBytes);
}

#[test]
fn test_truncated_tail_stops_iteration() {
    let bytes = hex("55 48 89 E5 E8 00 00");
    let decoder = Decoder::new(Bitness::Bits64, &bytes, DecoderOptions::NONE);
    let codes: Vec<Code> = decoder.into_iter().map(|insn| insn.code()).collect();
    assert_eq!(codes, vec![Code::Push_r64, Code::Mov_rm64_r64]);

    let mut decoder = Decoder::new(Bitness::Bits64, &bytes, DecoderOptions::NONE);
    decoder.set_position(4);
    assert!(decoder.decode().unwrap_err().is_out_of_bytes());
    assert_eq!(decoder.position(), 4);
}

#[test]
fn test_ip_wraps_to_bitness() {
    let bytes = hex("90 90");
    let mut decoder = Decoder::new(Bitness::Bits16, &bytes, DecoderOptions::NONE);
    decoder.set_ip(0xFFFF);
    assert_eq!(decoder.decode().unwrap().ip(), 0xFFFF);
    assert_eq!(decoder.ip(), 0);
}

#[test]
fn test_vex_gather() {
    // vpgatherdd xmm0, [rax+xmm1*4], xmm2
    let insn = decode_at(Bitness::Bits64, "C4 E2 69 90 04 88");
    assert_eq!(insn.code(), Code::VEX_Vpgatherdd_xmm_vm32x_xmm);
    assert_eq!(insn.op_register(0), Register::XMM0);
    assert_eq!(insn.memory_base(), Register::RAX);
    assert_eq!(insn.memory_index(), Register::XMM1);
    assert_eq!(insn.memory_index_scale(), 4);
    assert_eq!(insn.op_register(2), Register::XMM2);

    // Register form is not encodable.
    assert!(decode_at(Bitness::Bits64, "C4 E2 69 90 C1").is_invalid());
}

#[test]
fn test_evex_gather_needs_opmask() {
    let insn = decode_at(Bitness::Bits64, "62 F2 7D 49 90 04 88");
    assert_eq!(insn.code(), Code::EVEX_Vpgatherdd_zmm_k1_vm32z);
    assert_eq!(insn.op_register(0), Register::ZMM0);
    assert_eq!(insn.memory_index(), Register::ZMM1);
    assert_eq!(insn.op_mask(), Register::K1);

    assert!(decode_at(Bitness::Bits64, "62 F2 7D 48 90 04 88").is_invalid());
}

#[test]
fn test_evex_reserved_bits() {
    // P0[3:2] set
    assert!(decode_at(Bitness::Bits64, "62 FD 6C 48 58 CB").is_invalid());
    // P1[2] clear
    assert!(decode_at(Bitness::Bits64, "62 F1 68 48 58 CB").is_invalid());
}

#[test]
fn test_evex_in_32bit_mode() {
    // vaddps zmm1, zmm2, zmm3
    let insn = decode_at(Bitness::Bits32, "62 F1 6C 48 58 CB");
    assert_eq!(insn.code(), Code::EVEX_Vaddps_zmm_k1z_zmm_zmmm512b32_er);
    assert_eq!(insn.op_register(0), Register::ZMM1);

    // BOUND with a memory operand
    let insn = decode_at(Bitness::Bits32, "62 00");
    assert_eq!(insn.code(), Code::Bound_r32_m3232);
}

#[test]
fn test_no_invalid_check_decodes_structurally() {
    let bytes = hex("C5 F0 10 00");
    assert!(decode(&bytes, Bitness::Bits64, 0, DecoderOptions::NONE).unwrap().is_invalid());
    let insn = decode(&bytes, Bitness::Bits64, 0, DecoderOptions::NO_INVALID_CHECK).unwrap();
    assert_eq!(insn.code(), Code::VEX_Vmovups_xmm_xmmm128);
}

#[test]
fn test_disassembler_block() {
    let disasm = X86Disassembler::with_options(Bitness::Bits32, DecoderOptions::NONE);
    let bytes = hex("55 89 E5 0F 0B C3");
    let block = disasm.disassemble_block(&bytes, 0x401000);
    let codes: Vec<Code> = block.iter().map(|r| r.as_ref().unwrap().code()).collect();
    assert_eq!(codes, vec![Code::Push_r32, Code::Mov_rm32_r32, Code::Ud2, Code::Retnd]);
    assert_eq!(block[3].as_ref().unwrap().ip(), 0x401005);
}

#[test]
fn test_disassembler_block_ends_on_truncation() {
    let disasm = X86Disassembler::new(Bitness::Bits64);
    let block = disasm.disassemble_block(&hex("C3 06 E8 00 00"), 0x1000);
    assert_eq!(block.len(), 3);
    assert!(matches!(block[1], Err(DecodeError::Invalid { address: 0x1001, .. })));
    assert!(matches!(block[2], Err(DecodeError::OutOfBytes { address: 0x1002, .. })));
}

#[test]
fn test_sse_mask_moves_use_dword_or_qword_registers() {
    let insn = decode_at(Bitness::Bits16, "0F 50 C4");
    assert_eq!(insn.code(), Code::Movmskps_r32_xmm);
    assert_eq!(insn.op_register(0), Register::EAX);
    assert_eq!(insn.op_register(1), Register::XMM4);

    let insn = decode_at(Bitness::Bits64, "66 0F 50 F8");
    assert_eq!(insn.code(), Code::Movmskpd_r32_xmm);
    assert_eq!(insn.op_register(0), Register::EDI);

    let insn = decode_at(Bitness::Bits64, "48 0F 50 C0");
    assert_eq!(insn.code(), Code::Movmskps_r64_xmm);
    assert_eq!(insn.op_register(0), Register::RAX);

    // movnti has no word form
    assert!(decode_at(Bitness::Bits32, "66 0F C3 08").is_invalid());
    let insn = decode_at(Bitness::Bits32, "0F C3 08");
    assert_eq!(insn.code(), Code::Movnti_m32_r32);
    assert_eq!(insn.op_register(1), Register::ECX);
}

#[test]
fn test_word_extract_insert_with_rex_w() {
    let insn = decode_at(Bitness::Bits64, "48 0F C5 C6 21");
    assert_eq!(insn.code(), Code::Pextrw_r64_mm_imm8);
    assert_eq!(insn.op_register(0), Register::RAX);
    assert_eq!(insn.op_register(1), Register::MM6);
    assert_eq!(insn.immediate8(), 0x21);

    let insn = decode_at(Bitness::Bits64, "66 48 0F C5 C6 21");
    assert_eq!(insn.code(), Code::Pextrw_r64_xmm_imm8);
    assert_eq!(insn.op_register(1), Register::XMM6);

    let insn = decode_at(Bitness::Bits64, "48 0F D7 C0");
    assert_eq!(insn.code(), Code::Pmovmskb_r64_mm);
    assert_eq!(insn.op_register(0), Register::RAX);

    let insn = decode_at(Bitness::Bits64, "48 0F C4 C1 05");
    assert_eq!(insn.code(), Code::Pinsrw_mm_r64m16_imm8);
    assert_eq!(insn.op_register(1), Register::RCX);

    // memory form reads a word regardless of W
    let insn = decode_at(Bitness::Bits64, "66 48 0F C4 00 05");
    assert_eq!(insn.code(), Code::Pinsrw_xmm_r64m16_imm8);
    assert_eq!(insn.memory_size(), MemorySize::UInt16);

    let insn = decode_at(Bitness::Bits32, "0F D7 C0");
    assert_eq!(insn.code(), Code::Pmovmskb_r32_mm);
    assert_eq!(insn.op_register(0), Register::EAX);
}

#[test]
fn test_rep_prefixes_on_no_rep_opcodes_are_invalid() {
    for bytes in ["F3 0F 38 F0 00", "F3 0F 38 F1 00", "41 F2 0F C7 FE", "F2 0F C7 F0", "F3 0F C7 F0"] {
        let insn = decode_at(Bitness::Bits64, bytes);
        assert!(insn.is_invalid(), "{}", bytes);
    }
}

#[test]
fn test_both_rep_prefixes_reach_the_instruction() {
    let insn = decode_at(Bitness::Bits64, "F3 F2 A4");
    assert_eq!(insn.code(), Code::Movsb_m8_m8);
    assert!(insn.has_repe_prefix());
    assert!(insn.has_repne_prefix());

    let insn = decode_at(Bitness::Bits64, "F2 F0 01 08");
    assert!(insn.has_xacquire_prefix());
    assert!(insn.has_lock_prefix());
    assert!(!insn.has_repne_prefix());

    let insn = decode_at(Bitness::Bits64, "F3 F0 01 08");
    assert!(insn.has_xrelease_prefix());
    assert!(!insn.has_repe_prefix());

    // pause consumes F3
    let insn = decode_at(Bitness::Bits64, "F3 41 90");
    assert!(!insn.has_repe_prefix());
}

#[test]
fn test_simd_memory_element_types() {
    let cases: &[(Bitness, &str, Code, MemorySize)] = &[
        (Bitness::Bits64, "0F FC 00", Code::Paddb_mm_mmm64, MemorySize::Packed64_Int8),
        (Bitness::Bits64, "66 0F FC 00", Code::Paddb_xmm_xmmm128, MemorySize::Packed128_Int8),
        (Bitness::Bits64, "66 0F 6F 00", Code::Movdqa_xmm_xmmm128, MemorySize::Packed128_Int32),
        (Bitness::Bits64, "0F 16 00", Code::Movhps_xmm_m64, MemorySize::Packed64_Float32),
        (Bitness::Bits64, "F3 0F 2A 00", Code::Cvtsi2ss_xmm_rm32, MemorySize::Int32),
        (Bitness::Bits64, "F3 48 0F 2A 00", Code::Cvtsi2ss_xmm_rm64, MemorySize::Int64),
        (Bitness::Bits64, "0F 0F 00 9E", Code::D3NOW_Pfadd_mm_mmm64, MemorySize::Packed64_Float32),
        (Bitness::Bits64, "C4 E3 7D 18 00 01", Code::VEX_Vinsertf128_ymm_ymm_xmmm128_imm8, MemorySize::Float128),
        (Bitness::Bits64, "C4 E3 7D 38 00 01", Code::VEX_Vinserti128_ymm_ymm_xmmm128_imm8, MemorySize::Int128),
    ];
    for &(bitness, bytes, code, size) in cases {
        let insn = decode_at(bitness, bytes);
        assert_eq!(insn.code(), code, "{}", bytes);
        assert_eq!(insn.memory_size(), size, "{}", bytes);
    }
}

#[test]
fn test_sib_scale_kept_without_index() {
    // lea eax, [rax] encoded with SIB.scale=3 and index=100b
    let insn = decode_at(Bitness::Bits64, "8D 04 E0");
    assert_eq!(insn.memory_base(), Register::RAX);
    assert_eq!(insn.memory_index(), Register::None);
    assert_eq!(insn.memory_index_scale(), 8);

    // no SIB byte at all
    let insn = decode_at(Bitness::Bits64, "8D 00");
    assert_eq!(insn.memory_index_scale(), 1);
}

#[test]
fn test_display_and_mnemonic() {
    let insn = decode_at(Bitness::Bits64, "48 01 CE");
    assert_eq!(insn.mnemonic(), "add");
    assert!(insn.to_string().starts_with("add"));
    assert_eq!(decode_at(Bitness::Bits64, "C3").mnemonic(), "ret");
}

/// (bytes, code, prefix + opcode + ModRM/SIB bytes, displacement size, immediate sizes)
const LAYOUTS: &[(&str, Code, usize, usize, [usize; 2])] = &[
    ("C7 44 24 08 78 56 34 12", Code::Mov_rm32_imm32, 3, 1, [4, 0]),
    ("48 A1 88 77 66 55 44 33 22 11", Code::Mov_RAX_moffs64, 2, 8, [0, 0]),
    ("E8 00 00 00 00", Code::Call_rel32_64, 1, 0, [4, 0]),
    ("C8 10 00 01", Code::Enterq_imm16_imm8, 1, 0, [2, 1]),
    ("69 C1 78 56 34 12", Code::Imul_r32_rm32_imm32, 2, 0, [4, 0]),
    ("48 8B 05 10 00 00 00", Code::Mov_r64_rm64, 3, 4, [0, 0]),
];

#[test]
fn test_length_is_sum_of_parts() {
    for &(bytes, code, head, displ, [imm, imm2]) in LAYOUTS {
        let data = hex(bytes);
        let mut decoder = Decoder::new(Bitness::Bits64, &data, DecoderOptions::NONE);
        let insn = decoder.decode().unwrap();
        assert_eq!(insn.code(), code, "{}", bytes);
        assert_eq!(insn.len(), head + displ + imm + imm2, "{}", bytes);

        let offsets = decoder.get_constant_offsets(&insn);
        assert_eq!(offsets.displacement_size, displ, "{}", bytes);
        assert_eq!(offsets.immediate_size, imm, "{}", bytes);
        assert_eq!(offsets.immediate_size2, imm2, "{}", bytes);
        if offsets.has_displacement() {
            assert_eq!(offsets.displacement_offset, head, "{}", bytes);
        }
        if offsets.has_immediate() {
            assert_eq!(offsets.immediate_offset, head + displ, "{}", bytes);
        }
        if offsets.has_immediate2() {
            assert_eq!(offsets.immediate_offset2, head + displ + imm, "{}", bytes);
        }
    }
}

#[test]
fn test_decoder_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Decoder<'static>>();
    assert_send::<X86Disassembler>();
}
