/// Byte order used to encode and decode multi-byte values.
///
/// Every wide value is treated as two halves of the next-narrower width. The byte order decides
/// which half comes first in the buffer; applying that rule recursively down to single bytes
/// yields the usual most-significant-byte-first (big) or least-significant-byte-first (little)
/// layout.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

macro_rules! join_split {
    ($join:ident, $split:ident, $wide:ty, $half:ty, $bits:expr) => {
        /// Combines two halves, given in the order they appear in the buffer, into one value.
        #[inline(always)]
        pub const fn $join(self, first: $half, second: $half) -> $wide {
            let (hi, lo) = match self {
                Self::Big => (first, second),
                Self::Little => (second, first),
            };
            ((hi as $wide) << $bits) | lo as $wide
        }

        /// Splits a value into two halves, returned in the order they must appear in the buffer.
        #[inline(always)]
        pub const fn $split(self, value: $wide) -> ($half, $half) {
            let hi = (value >> $bits) as $half;
            let lo = value as $half;
            match self {
                Self::Big => (hi, lo),
                Self::Little => (lo, hi),
            }
        }
    };
}

impl Endianness {
    /// The byte order of the target platform.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Self = Self::Big;

    /// The byte order of the target platform.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Self = Self::Little;

    /// Returns `true` for [`Endianness::Big`].
    pub const fn is_big(self) -> bool {
        matches!(self, Self::Big)
    }

    /// Returns `true` for [`Endianness::Little`].
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }

    join_split!(join_u16, split_u16, u16, u8, 8);
    join_split!(join_u32, split_u32, u32, u16, 16);
    join_split!(join_u64, split_u64, u64, u32, 32);
}

impl core::fmt::Display for Endianness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Big => f.write_str("big-endian"),
            Self::Little => f.write_str("little-endian"),
        }
    }
}
