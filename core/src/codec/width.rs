//! codec/width.rs
//! Checked encoded widths.
//!
//! `Width` is the validated counterpart of the raw byte counts taken by
//! `read_uint_n` / `write_uint_n`. Raw counts come straight off the wire (a
//! length nibble, a packet-number length field), so conversion goes through
//! `TryFromPrimitive` and rejects anything outside 1..=8.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Encoded width of an unsigned integer, in bytes.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive, IntoPrimitive)]
pub enum Width {
    U8  = 1,
    U16 = 2,
    U24 = 3,
    U32 = 4,
    U40 = 5,
    U48 = 6,
    U56 = 7,
    U64 = 8,
}

impl Width {
    pub const ALL: [Width; 8] = [
        Width::U8,
        Width::U16,
        Width::U24,
        Width::U32,
        Width::U40,
        Width::U48,
        Width::U56,
        Width::U64,
    ];

    /// Number of bytes on the wire.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn bits(self) -> u32 {
        (self as u32) * 8
    }

    /// Largest value that survives encoding at this width unchanged.
    #[inline]
    pub const fn max_value(self) -> u64 {
        match self {
            Width::U64 => u64::MAX,
            w => (1u64 << w.bits()) - 1,
        }
    }

    /// True if `value` encodes at this width without truncation.
    #[inline]
    pub const fn fits(self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// Smallest width that holds `value` without truncation.
    pub const fn for_value(value: u64) -> Width {
        let significant = (u64::BITS - value.leading_zeros()).div_ceil(8);
        match significant {
            0 | 1 => Width::U8,
            2 => Width::U16,
            3 => Width::U24,
            4 => Width::U32,
            5 => Width::U40,
            6 => Width::U48,
            7 => Width::U56,
            _ => Width::U64,
        }
    }
}
