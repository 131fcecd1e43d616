//! Decoder configuration.

use bitflags::bitflags;

bitflags! {
    /// Decoder behaviour switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DecoderOptions: u32 {
        /// Intel decoding rules.
        const NONE = 0;
        /// AMD decoding rules: in 64-bit mode a `66` prefix without REX.W
        /// selects the 16-bit form of near branches (`retnw`, `jmp rel16`
        /// targets), and `lock mov cr0` in 16/32-bit mode selects CR8.
        const AMD = 1 << 0;
        /// Skip the structural checks that turn otherwise decodable bytes
        /// into `Invalid` (misplaced LOCK, non-zero unused `vvvv`, EVEX
        /// `z`/`b`/opmask misuse).
        const NO_INVALID_CHECK = 1 << 1;
    }
}
