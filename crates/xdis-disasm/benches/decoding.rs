//! Benchmarks for decoding throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use xdis_core::{Bitness, Instruction};
use xdis_disasm::x86::Decoder;
use xdis_disasm::{DecoderOptions, Disassembler, X86Disassembler};

/// A small function with a realistic mix of moves, arithmetic, control
/// flow and memory operands.
const X86_64_CODE: &[u8] = &[
    // Function prologue
    0x55, // push rbp
    0x48, 0x89, 0xe5, // mov rbp, rsp
    0x48, 0x83, 0xec, 0x20, // sub rsp, 0x20
    // Some arithmetic
    0x48, 0x89, 0x7d, 0xf8, // mov [rbp-8], rdi
    0x48, 0x8b, 0x45, 0xf8, // mov rax, [rbp-8]
    0x48, 0x83, 0xc0, 0x01, // add rax, 1
    0x48, 0x89, 0x45, 0xf0, // mov [rbp-16], rax
    // Conditional
    0x48, 0x83, 0x7d, 0xf0, 0x0a, // cmp qword [rbp-16], 10
    0x7e, 0x07, // jle .L1
    0xb8, 0x01, 0x00, 0x00, 0x00, // mov eax, 1
    0xeb, 0x05, // jmp .L2
    // .L1:
    0xb8, 0x00, 0x00, 0x00, 0x00, // mov eax, 0
    // .L2: epilogue
    0x48, 0x83, 0xc4, 0x20, // add rsp, 0x20
    0x5d, // pop rbp
    0xc3, // ret
];

/// Vector code: VEX, EVEX and XOP encodings.
const VECTOR_CODE: &[u8] = &[
    0xc5, 0xf8, 0x10, 0x00, // vmovups xmm0, [rax]
    0xc4, 0x63, 0x49, 0x68, 0xd3, 0xc0, // vfmaddps xmm10, xmm6, xmm3, xmm12
    0x62, 0xf1, 0x6c, 0xc9, 0x58, 0xcb, // vaddps zmm1{k1}{z}, zmm2, zmm3
    0x62, 0xf1, 0x6c, 0x58, 0x58, 0x48, 0x10, // vaddps zmm1, zmm2, [rax+0x40]{1to16}
    0x62, 0xf2, 0x7d, 0x49, 0x90, 0x04, 0x88, // vpgatherdd zmm0{k1}, [rax+zmm1*4]
    0x8f, 0xe8, 0x78, 0xc0, 0xc1, 0x05, // vprotb xmm0, xmm1, 5
    0xc5, 0xf8, 0x77, // vzeroupper
];

fn repeat_to(pattern: &[u8], size: usize) -> Vec<u8> {
    pattern.iter().copied().cycle().take(size).collect()
}

fn bench_decoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("x86_decoder");

    group.bench_function("single_instruction", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(Bitness::Bits64, black_box(&X86_64_CODE[..4]), DecoderOptions::NONE);
            decoder.decode()
        })
    });

    group.bench_function("small_function", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new(Bitness::Bits64, black_box(X86_64_CODE), DecoderOptions::NONE);
            let mut insn = Instruction::default();
            while decoder.can_decode() {
                let _ = decoder.decode_out(&mut insn);
            }
        })
    });

    for size in [1024, 4096, 16384, 65536] {
        for (name, pattern) in [("scalar", X86_64_CODE), ("vector", VECTOR_CODE)] {
            let code = repeat_to(pattern, size);
            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &code, |b, code| {
                b.iter(|| {
                    let decoder = Decoder::new(Bitness::Bits64, black_box(code), DecoderOptions::NONE);
                    decoder.into_iter().count()
                })
            });
        }
    }

    group.finish();
}

fn bench_disassembler_trait(c: &mut Criterion) {
    let disasm = X86Disassembler::new(Bitness::Bits64);

    c.bench_function("disassemble_block", |b| {
        b.iter(|| disasm.disassemble_block(black_box(X86_64_CODE), 0x1000))
    });
}

criterion_group!(benches, bench_decoder, bench_disassembler_trait);
criterion_main!(benches);
