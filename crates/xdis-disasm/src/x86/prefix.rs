//! x86 prefix parsing.
//!
//! Legacy prefixes and REX are scanned by [`Prefixes::scan`]. VEX, EVEX and
//! XOP escapes are not prefixes in the legacy sense; their payload bytes
//! are decoded into a [`VexPrefix`] by the opcode map resolver.

use super::cursor::ByteCursor;
use crate::error::DecodeError;
use xdis_core::{Bitness, Register};

/// The F2/F3 prefix that was seen last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepPrefix {
    /// `F3`: REP/REPE/REPZ
    Repe,
    /// `F2`: REPNE/REPNZ
    Repne,
}

/// Prefix that can select between instructions sharing an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandatoryPrefix {
    #[default]
    None,
    P66,
    PF3,
    PF2,
}

impl MandatoryPrefix {
    /// Decodes the 2-bit `pp` field of VEX/EVEX/XOP.
    pub fn from_pp(pp: u8) -> Self {
        match pp & 3 {
            0 => Self::None,
            1 => Self::P66,
            2 => Self::PF3,
            _ => Self::PF2,
        }
    }
}

/// Legacy prefixes that can appear before an instruction.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prefixes {
    /// LOCK prefix (0xF0)
    pub lock: bool,
    /// `F3` seen
    pub repe: bool,
    /// `F2` seen
    pub repne: bool,
    /// Last of F2/F3, the mandatory-prefix candidate
    pub last_rep: Option<RepPrefix>,
    /// Segment override
    pub segment: Option<Register>,
    /// Set once FS/GS has been seen in 64-bit mode.
    segment_locked: bool,
    /// Operand size override (0x66)
    pub operand_size: bool,
    /// Address size override (0x67)
    pub address_size: bool,
    /// REX prefix, only when it was the last prefix byte
    pub rex: Option<Rex>,
    /// Prefix bytes consumed, REX included
    pub len: usize,
}

/// REX prefix fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rex {
    /// REX.W - 64-bit operand size
    pub w: bool,
    /// REX.R - extends ModR/M reg field
    pub r: bool,
    /// REX.X - extends SIB index field
    pub x: bool,
    /// REX.B - extends ModR/M r/m, SIB base, or opcode reg
    pub b: bool,
}

impl Rex {
    /// Parse a REX byte.
    pub fn from_byte(byte: u8) -> Self {
        Self {
            w: byte & 0x08 != 0,
            r: byte & 0x04 != 0,
            x: byte & 0x02 != 0,
            b: byte & 0x01 != 0,
        }
    }
}

impl Prefixes {
    /// Consumes legacy prefixes and REX from the cursor.
    ///
    /// Stops at the first non-prefix byte without consuming it. Running
    /// out of window is not an error here; the opcode read that follows
    /// reports it.
    pub fn scan(cursor: &mut ByteCursor<'_>, bitness: Bitness) -> Result<Self, DecodeError> {
        let mut prefixes = Self::default();

        while let Some(byte) = cursor.peek_u8() {
            match byte {
                0xF0 => prefixes.lock = true,
                0xF2 => {
                    prefixes.repne = true;
                    prefixes.last_rep = Some(RepPrefix::Repne);
                }
                0xF3 => {
                    prefixes.repe = true;
                    prefixes.last_rep = Some(RepPrefix::Repe);
                }
                0x26 => prefixes.set_segment(Register::ES, bitness),
                0x2E => prefixes.set_segment(Register::CS, bitness),
                0x36 => prefixes.set_segment(Register::SS, bitness),
                0x3E => prefixes.set_segment(Register::DS, bitness),
                0x64 => prefixes.set_segment(Register::FS, bitness),
                0x65 => prefixes.set_segment(Register::GS, bitness),
                0x66 => prefixes.operand_size = true,
                0x67 => prefixes.address_size = true,
                0x40..=0x4F if bitness.is_64() => {
                    cursor.read_u8()?;
                    prefixes.rex = Some(Rex::from_byte(byte));
                    prefixes.len += 1;
                    continue;
                }
                _ => break,
            }
            cursor.read_u8()?;
            prefixes.len += 1;
            // A REX prefix followed by a legacy prefix is ignored.
            prefixes.rex = None;
        }

        Ok(prefixes)
    }

    fn set_segment(&mut self, seg: Register, bitness: Bitness) {
        if !bitness.is_64() {
            self.segment = Some(seg);
            return;
        }
        match seg {
            Register::FS | Register::GS => {
                self.segment = Some(seg);
                self.segment_locked = true;
            }
            _ if !self.segment_locked => self.segment = Some(seg),
            _ => {}
        }
    }

    /// Candidate mandatory prefix: the last F2/F3, else 66.
    pub fn mandatory(&self) -> MandatoryPrefix {
        match self.last_rep {
            Some(RepPrefix::Repne) => MandatoryPrefix::PF2,
            Some(RepPrefix::Repe) => MandatoryPrefix::PF3,
            None if self.operand_size => MandatoryPrefix::P66,
            None => MandatoryPrefix::None,
        }
    }

    /// True if either F2 or F3 was seen.
    pub fn has_rep(&self) -> bool {
        self.repe || self.repne
    }

    /// REX.W, false without REX.
    pub fn rex_w(&self) -> bool {
        self.rex.map(|r| r.w).unwrap_or(false)
    }
}

/// VEX, EVEX or XOP payload.
///
/// Extension bits are stored already un-inverted: `true` means "add 8"
/// (or 16 for `r2`/`v2`). Outside 64-bit mode `r`, `x`, `b`, `r2` and
/// `v2` are always false and `vvvv` is masked to 3 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VexPrefix {
    pub r: bool,
    pub x: bool,
    pub b: bool,
    /// EVEX.R' - bit 4 of ModR/M.reg
    pub r2: bool,
    /// EVEX.V' - bit 4 of vvvv and of a VSIB index
    pub v2: bool,
    pub w: bool,
    /// Extra register operand, 0..15
    pub vvvv: u8,
    /// VEX.L, or EVEX.L'L
    pub l: u8,
    pub pp: MandatoryPrefix,
    /// Opcode map number (mmmmm / mm)
    pub map: u8,
    /// EVEX opmask register number
    pub aaa: u8,
    /// EVEX.z
    pub z: bool,
    /// EVEX.b
    pub bcst: bool,
}

impl VexPrefix {
    /// Parse a 2-byte VEX prefix (0xC5 RvvvvLpp).
    pub fn from_vex2(byte1: u8, bitness: Bitness) -> Self {
        let is64 = bitness.is_64();
        Self {
            r: is64 && byte1 & 0x80 == 0,
            vvvv: vvvv(byte1, is64),
            l: (byte1 >> 2) & 1,
            pp: MandatoryPrefix::from_pp(byte1),
            map: 1,
            ..Self::default()
        }
    }

    /// Parse a 3-byte VEX (0xC4) or XOP (0x8F) prefix: RXBmmmmm WvvvvLpp.
    pub fn from_vex3(byte1: u8, byte2: u8, bitness: Bitness) -> Self {
        let is64 = bitness.is_64();
        Self {
            r: is64 && byte1 & 0x80 == 0,
            x: is64 && byte1 & 0x40 == 0,
            b: is64 && byte1 & 0x20 == 0,
            w: byte2 & 0x80 != 0,
            vvvv: vvvv(byte2, is64),
            l: (byte2 >> 2) & 1,
            pp: MandatoryPrefix::from_pp(byte2),
            map: byte1 & 0x1F,
            ..Self::default()
        }
    }

    /// Parse the three EVEX payload bytes:
    /// P0 = RXBR'00mm, P1 = Wvvvv1pp, P2 = zL'LbV'aaa.
    pub fn from_evex(p0: u8, p1: u8, p2: u8, bitness: Bitness) -> Result<Self, &'static str> {
        if p0 & 0x0C != 0 {
            return Err("EVEX reserved bits set");
        }
        if p1 & 0x04 == 0 {
            return Err("EVEX fixed bit clear");
        }
        if p0 & 0x03 == 0 {
            return Err("EVEX map 0");
        }
        let is64 = bitness.is_64();
        Ok(Self {
            r: is64 && p0 & 0x80 == 0,
            x: is64 && p0 & 0x40 == 0,
            b: is64 && p0 & 0x20 == 0,
            r2: is64 && p0 & 0x10 == 0,
            v2: is64 && p2 & 0x08 == 0,
            w: p1 & 0x80 != 0,
            vvvv: vvvv(p1, is64),
            l: (p2 >> 5) & 3,
            pp: MandatoryPrefix::from_pp(p1),
            map: p0 & 0x03,
            aaa: p2 & 0x07,
            z: p2 & 0x80 != 0,
            bcst: p2 & 0x10 != 0,
        })
    }

    /// Full vvvv register number including EVEX.V'.
    pub fn vvvv_full(&self) -> u8 {
        self.vvvv | ((self.v2 as u8) << 4)
    }
}

fn vvvv(byte: u8, is64: bool) -> u8 {
    let v = (!byte >> 3) & 0x0F;
    if is64 {
        v
    } else {
        v & 0x07
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(bytes: &[u8], bitness: Bitness) -> Prefixes {
        let mut cursor = ByteCursor::new(bytes);
        cursor.begin(0);
        Prefixes::scan(&mut cursor, bitness).unwrap()
    }

    #[test]
    fn test_last_segment_wins() {
        let p = scan(&[0x26, 0x2E, 0x01], Bitness::Bits32);
        assert_eq!(p.segment, Some(Register::CS));
        assert_eq!(p.len, 2);
    }

    #[test]
    fn test_fs_gs_stick_in_64bit_mode() {
        let p = scan(&[0x64, 0x26, 0x01], Bitness::Bits64);
        assert_eq!(p.segment, Some(Register::FS));
        let p = scan(&[0x65, 0x64, 0x01], Bitness::Bits64);
        assert_eq!(p.segment, Some(Register::FS));
        let p = scan(&[0x64, 0x26, 0x01], Bitness::Bits32);
        assert_eq!(p.segment, Some(Register::ES));
    }

    #[test]
    fn test_rex_must_be_last() {
        let p = scan(&[0x48, 0x66, 0x01], Bitness::Bits64);
        assert!(p.rex.is_none());
        assert!(p.operand_size);

        let p = scan(&[0x4F, 0x48, 0x01], Bitness::Bits64);
        assert_eq!(p.rex, Some(Rex::from_byte(0x48)));
        assert_eq!(p.len, 2);
    }

    #[test]
    fn test_rex_is_inc_dec_outside_64bit_mode() {
        let p = scan(&[0x48, 0x01], Bitness::Bits32);
        assert!(p.rex.is_none());
        assert_eq!(p.len, 0);
    }

    #[test]
    fn test_mandatory_candidate() {
        assert_eq!(scan(&[0x66, 0x0F], Bitness::Bits64).mandatory(), MandatoryPrefix::P66);
        assert_eq!(scan(&[0x66, 0xF3, 0x0F], Bitness::Bits64).mandatory(), MandatoryPrefix::PF3);
        assert_eq!(scan(&[0xF3, 0xF2, 0x0F], Bitness::Bits64).mandatory(), MandatoryPrefix::PF2);
        assert_eq!(scan(&[0x0F], Bitness::Bits64).mandatory(), MandatoryPrefix::None);
    }

    #[test]
    fn test_both_rep_prefixes_are_kept() {
        let p = scan(&[0xF3, 0xF2, 0xA4], Bitness::Bits64);
        assert!(p.repe && p.repne);
        assert_eq!(p.last_rep, Some(RepPrefix::Repne));
        assert!(p.has_rep());

        let p = scan(&[0x66, 0xA4], Bitness::Bits64);
        assert!(!p.has_rep());
    }

    #[test]
    fn test_vex3_fields() {
        // C4 63 49: R=0 X=1 B=1 map=3, W=0 vvvv=~1001 L=0 pp=01
        let v = VexPrefix::from_vex3(0x63, 0x49, Bitness::Bits64);
        assert!(v.r && !v.x && !v.b && !v.w);
        assert_eq!(v.map, 3);
        assert_eq!(v.vvvv, 6);
        assert_eq!(v.pp, MandatoryPrefix::P66);

        let v = VexPrefix::from_vex3(0x63, 0x49, Bitness::Bits32);
        assert!(!v.r);
    }

    #[test]
    fn test_evex_reserved_bits() {
        assert!(VexPrefix::from_evex(0xF1, 0x7C, 0x48, Bitness::Bits64).is_ok());
        assert!(VexPrefix::from_evex(0xF5, 0x7C, 0x48, Bitness::Bits64).is_err());
        assert!(VexPrefix::from_evex(0xF1, 0x78, 0x48, Bitness::Bits64).is_err());
        assert!(VexPrefix::from_evex(0xF0, 0x7C, 0x48, Bitness::Bits64).is_err());
    }
}
