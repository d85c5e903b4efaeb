//! Byte swapping for fixed-width unsigned integers.
//!
//! Every width has a single entry point ([`swap_8`], [`swap_16`], [`swap_32`]
//! and [`swap_64`]). Which implementation backs it is decided when the crate
//! is built:
//! - by default, the compiler's byte-reverse (`swap_bytes`), which lowers to a
//!   single instruction where the target has one,
//! - with the `portable-swap` feature, the compositional definitions in
//!   [`portable`].
//!
//! Both produce identical results for every input.

#[cfg(not(feature = "portable-swap"))]
use intrinsic as selected;
#[cfg(feature = "portable-swap")]
use portable as selected;

/// Reverse the bytes of an 8-bit value. This is the identity.
#[inline]
pub const fn swap_8(value: u8) -> u8 {
    selected::swap_8(value)
}

/// Reverse the bytes of a 16-bit value.
///
/// ```
/// assert_eq!(swap_endian::swap_16(0x1122), 0x2211);
/// ```
#[inline]
pub const fn swap_16(value: u16) -> u16 {
    selected::swap_16(value)
}

/// Reverse the bytes of a 32-bit value.
///
/// ```
/// assert_eq!(swap_endian::swap_32(0x11223344), 0x44332211);
/// ```
#[inline]
pub const fn swap_32(value: u32) -> u32 {
    selected::swap_32(value)
}

/// Reverse the bytes of a 64-bit value.
///
/// ```
/// assert_eq!(swap_endian::swap_64(0x1122334455667788), 0x8877665544332211);
/// ```
#[inline]
pub const fn swap_64(value: u64) -> u64 {
    selected::swap_64(value)
}

#[cfg(not(feature = "portable-swap"))]
mod intrinsic {
    #[inline(always)]
    pub const fn swap_8(value: u8) -> u8 {
        value
    }

    #[inline(always)]
    pub const fn swap_16(value: u16) -> u16 {
        value.swap_bytes()
    }

    #[inline(always)]
    pub const fn swap_32(value: u32) -> u32 {
        value.swap_bytes()
    }

    #[inline(always)]
    pub const fn swap_64(value: u64) -> u64 {
        value.swap_bytes()
    }
}

/// Byte swaps built from shifts and masks only.
///
/// Each width is composed from two swaps of half the width: reverse each half,
/// then exchange the positions of the halves.
pub mod portable {
    /// A single byte has no order to reverse.
    #[inline]
    pub const fn swap_8(value: u8) -> u8 {
        value
    }

    /// Exchange the high and the low byte.
    #[inline]
    pub const fn swap_16(value: u16) -> u16 {
        let low = value & 0xFF;
        let high = (value >> 8) & 0xFF;
        (low << 8) | high
    }

    /// Swap both 16-bit halves, then exchange them.
    #[inline]
    pub const fn swap_32(value: u32) -> u32 {
        let low = (value & 0xFFFF) as u16;
        let high = ((value >> 16) & 0xFFFF) as u16;
        ((swap_16(low) as u32) << 16) | swap_16(high) as u32
    }

    /// Swap both 32-bit halves, then exchange them.
    #[inline]
    pub const fn swap_64(value: u64) -> u64 {
        let low = (value & 0xFFFF_FFFF) as u32;
        let high = ((value >> 32) & 0xFFFF_FFFF) as u32;
        ((swap_32(low) as u64) << 32) | swap_32(high) as u64
    }
}
