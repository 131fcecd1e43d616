//! Processor mode identification.

use crate::Error;

/// Processor bitness the decoder runs in.
///
/// The bitness fixes the default operand and address sizes, whether REX
/// bytes exist, and the width at which the instruction pointer wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bitness {
    /// 16-bit real/protected mode.
    Bits16,
    /// 32-bit protected mode.
    Bits32,
    /// 64-bit long mode.
    #[default]
    Bits64,
}

impl Bitness {
    /// Parses a bit count (16, 32 or 64).
    pub fn from_bits(bits: u32) -> Result<Self, Error> {
        match bits {
            16 => Ok(Self::Bits16),
            32 => Ok(Self::Bits32),
            64 => Ok(Self::Bits64),
            other => Err(Error::InvalidBitness(other)),
        }
    }

    /// Returns the bit count.
    pub fn bits(&self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Returns true in 64-bit mode.
    pub fn is_64(&self) -> bool {
        matches!(self, Self::Bits64)
    }

    /// Mask applied to instruction-pointer arithmetic.
    pub fn ip_mask(&self) -> u64 {
        match self {
            Self::Bits16 => 0xFFFF,
            Self::Bits32 => 0xFFFF_FFFF,
            Self::Bits64 => u64::MAX,
        }
    }
}

impl std::fmt::Display for Bitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        assert_eq!(Bitness::from_bits(16).unwrap(), Bitness::Bits16);
        assert_eq!(Bitness::from_bits(64).unwrap().bits(), 64);
        assert!(matches!(Bitness::from_bits(8), Err(Error::InvalidBitness(8))));
    }

    #[test]
    fn test_ip_mask() {
        assert_eq!(Bitness::Bits16.ip_mask(), 0xFFFF);
        assert_eq!(Bitness::Bits32.ip_mask(), 0xFFFF_FFFF);
        assert_eq!(Bitness::Bits64.ip_mask(), u64::MAX);
    }
}
