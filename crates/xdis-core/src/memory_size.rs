//! Memory operand width/shape tags.

macro_rules! memory_sizes {
    ($($variant:ident = ($size:expr, $elem:expr),)*) => {
        /// Semantic width and element shape of a memory operand.
        ///
        /// Templates of the same mnemonic that differ only in operand
        /// shape differ in this tag (`UInt8` vs `Int8`, `Packed128_Float32`
        /// vs `Broadcast128_Float32`, ...).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[allow(non_camel_case_types, missing_docs)]
        pub enum MemorySize {
            #[default]
            Unknown,
            $($variant,)*
        }

        impl MemorySize {
            /// Size of the memory access in bytes (element size for broadcasts).
            pub fn size(&self) -> usize {
                match self {
                    Self::Unknown => 0,
                    $(Self::$variant => $size,)*
                }
            }

            /// Size of one element in bytes; equal to `size()` for scalars.
            pub fn element_size(&self) -> usize {
                match self {
                    Self::Unknown => 0,
                    $(Self::$variant => $elem,)*
                }
            }

            /// Variant name.
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::Unknown => "Unknown",
                    $(Self::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

memory_sizes! {
    UInt8 = (1, 1),
    UInt16 = (2, 2),
    UInt32 = (4, 4),
    UInt64 = (8, 8),
    UInt128 = (16, 16),
    UInt256 = (32, 32),
    UInt512 = (64, 64),
    Int8 = (1, 1),
    Int16 = (2, 2),
    Int32 = (4, 4),
    Int64 = (8, 8),
    Int128 = (16, 16),
    WordOffset = (2, 2),
    DwordOffset = (4, 4),
    QwordOffset = (8, 8),
    SegPtr16 = (4, 4),
    SegPtr32 = (6, 6),
    SegPtr64 = (10, 10),
    Fword6 = (6, 6),
    Fword10 = (10, 10),
    Tbyte10 = (10, 10),
    Float16 = (2, 2),
    Float32 = (4, 4),
    Float64 = (8, 8),
    Float80 = (10, 10),
    Float128 = (16, 16),
    Bcd = (10, 10),
    FpuEnv14 = (14, 14),
    FpuEnv28 = (28, 28),
    FpuState94 = (94, 94),
    FpuState108 = (108, 108),
    Fxsave_512Byte = (512, 512),
    Fxsave64_512Byte = (512, 512),
    Xsave = (0, 0),
    Xsave64 = (0, 0),
    Bound16_WordWord = (4, 2),
    Bound32_DwordDword = (8, 4),

    Packed16_UInt8 = (2, 1),
    Packed16_Int8 = (2, 1),
    Packed32_UInt8 = (4, 1),
    Packed32_Int8 = (4, 1),
    Packed32_UInt16 = (4, 2),
    Packed32_Int16 = (4, 2),

    Packed64_UInt8 = (8, 1),
    Packed64_Int8 = (8, 1),
    Packed64_UInt16 = (8, 2),
    Packed64_Int16 = (8, 2),
    Packed64_UInt32 = (8, 4),
    Packed64_Int32 = (8, 4),
    Packed64_Float16 = (8, 2),
    Packed64_Float32 = (8, 4),

    Packed128_UInt8 = (16, 1),
    Packed128_Int8 = (16, 1),
    Packed128_UInt16 = (16, 2),
    Packed128_Int16 = (16, 2),
    Packed128_UInt32 = (16, 4),
    Packed128_Int32 = (16, 4),
    Packed128_UInt64 = (16, 8),
    Packed128_Int64 = (16, 8),
    Packed128_Float16 = (16, 2),
    Packed128_Float32 = (16, 4),
    Packed128_Float64 = (16, 8),

    Packed256_UInt8 = (32, 1),
    Packed256_Int8 = (32, 1),
    Packed256_UInt16 = (32, 2),
    Packed256_Int16 = (32, 2),
    Packed256_UInt32 = (32, 4),
    Packed256_Int32 = (32, 4),
    Packed256_UInt64 = (32, 8),
    Packed256_Int64 = (32, 8),
    Packed256_Float16 = (32, 2),
    Packed256_Float32 = (32, 4),
    Packed256_Float64 = (32, 8),

    Packed512_UInt8 = (64, 1),
    Packed512_Int8 = (64, 1),
    Packed512_UInt16 = (64, 2),
    Packed512_Int16 = (64, 2),
    Packed512_UInt32 = (64, 4),
    Packed512_Int32 = (64, 4),
    Packed512_UInt64 = (64, 8),
    Packed512_Int64 = (64, 8),
    Packed512_Float16 = (64, 2),
    Packed512_Float32 = (64, 4),
    Packed512_Float64 = (64, 8),

    Broadcast64_UInt32 = (4, 4),
    Broadcast64_Int32 = (4, 4),
    Broadcast64_Float32 = (4, 4),
    Broadcast128_UInt32 = (4, 4),
    Broadcast128_Int32 = (4, 4),
    Broadcast128_UInt64 = (8, 8),
    Broadcast128_Int64 = (8, 8),
    Broadcast128_Float32 = (4, 4),
    Broadcast128_Float64 = (8, 8),
    Broadcast256_UInt32 = (4, 4),
    Broadcast256_Int32 = (4, 4),
    Broadcast256_UInt64 = (8, 8),
    Broadcast256_Int64 = (8, 8),
    Broadcast256_Float32 = (4, 4),
    Broadcast256_Float64 = (8, 8),
    Broadcast512_UInt32 = (4, 4),
    Broadcast512_Int32 = (4, 4),
    Broadcast512_UInt64 = (8, 8),
    Broadcast512_Int64 = (8, 8),
    Broadcast512_Float32 = (4, 4),
    Broadcast512_Float64 = (8, 8),
}

impl MemorySize {
    /// Returns true for the EVEX embedded-broadcast tags.
    pub fn is_broadcast(&self) -> bool {
        self.as_str().starts_with("Broadcast")
    }

    /// Returns true for packed (multi-element) tags.
    pub fn is_packed(&self) -> bool {
        self.as_str().starts_with("Packed")
    }

    /// Maps a packed tag to the broadcast tag used when EVEX.b is set.
    pub fn broadcast_of(&self) -> Option<MemorySize> {
        use MemorySize::*;
        let tag = match self {
            Packed64_UInt32 => Broadcast64_UInt32,
            Packed64_Int32 => Broadcast64_Int32,
            Packed64_Float32 => Broadcast64_Float32,
            Packed128_UInt32 => Broadcast128_UInt32,
            Packed128_Int32 => Broadcast128_Int32,
            Packed128_UInt64 => Broadcast128_UInt64,
            Packed128_Int64 => Broadcast128_Int64,
            Packed128_Float32 => Broadcast128_Float32,
            Packed128_Float64 => Broadcast128_Float64,
            Packed256_UInt32 => Broadcast256_UInt32,
            Packed256_Int32 => Broadcast256_Int32,
            Packed256_UInt64 => Broadcast256_UInt64,
            Packed256_Int64 => Broadcast256_Int64,
            Packed256_Float32 => Broadcast256_Float32,
            Packed256_Float64 => Broadcast256_Float64,
            Packed512_UInt32 => Broadcast512_UInt32,
            Packed512_Int32 => Broadcast512_Int32,
            Packed512_UInt64 => Broadcast512_UInt64,
            Packed512_Int64 => Broadcast512_Int64,
            Packed512_Float32 => Broadcast512_Float32,
            Packed512_Float64 => Broadcast512_Float64,
            _ => return None,
        };
        Some(tag)
    }
}

impl std::fmt::Display for MemorySize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(MemorySize::UInt8.size(), 1);
        assert_eq!(MemorySize::Packed128_Float32.size(), 16);
        assert_eq!(MemorySize::Packed128_Float32.element_size(), 4);
        assert_eq!(MemorySize::SegPtr32.size(), 6);
        assert_eq!(MemorySize::Unknown.size(), 0);
    }

    #[test]
    fn test_broadcast() {
        assert_eq!(
            MemorySize::Packed512_Float32.broadcast_of(),
            Some(MemorySize::Broadcast512_Float32)
        );
        assert_eq!(MemorySize::UInt32.broadcast_of(), None);
        assert!(MemorySize::Broadcast256_Int64.is_broadcast());
        assert_eq!(MemorySize::Broadcast256_Int64.size(), 8);
        assert!(!MemorySize::Packed256_Int64.is_broadcast());
    }
}
