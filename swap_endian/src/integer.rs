//! Fixed-width unsigned integers.

use num::{PrimInt, Unsigned};

use crate::swap::{swap_8, swap_16, swap_32, swap_64};

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer of exactly 8, 16, 32 or 64 bits.
///
/// This trait is sealed and only implemented for [`u8`], [`u16`], [`u32`] and
/// [`u64`].
pub trait FixedWidth: PrimInt + Unsigned + sealed::Sealed {
    /// The value's bytes, as an array of exactly [`Self::BYTES`] elements.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy + core::fmt::Debug + Eq;

    /// The width in bytes.
    const BYTES: usize;

    /// Reverse the order of the bytes.
    fn swap_endian(self) -> Self;

    /// Reverse the order of the 16-bit words, keeping the bytes within each
    /// word in place.
    fn swap_words(self) -> Self;

    fn to_be_bytes(self) -> Self::Bytes;
    fn to_le_bytes(self) -> Self::Bytes;
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

const fn swap_words_64(value: u64) -> u64 {
    const LOW_BYTES: u64 = 0x00FF_00FF_00FF_00FF;
    let reversed = swap_64(value);
    ((reversed & LOW_BYTES) << 8) | ((reversed >> 8) & LOW_BYTES)
}

macro_rules! impl_fixed_width {
    ($type:ty, $bytes:expr, $swap:path, $swap_words:expr) => {
        impl sealed::Sealed for $type {}

        impl FixedWidth for $type {
            type Bytes = [u8; $bytes];

            const BYTES: usize = $bytes;

            #[inline]
            fn swap_endian(self) -> Self {
                $swap(self)
            }

            #[inline]
            fn swap_words(self) -> Self {
                $swap_words(self)
            }

            #[inline]
            fn to_be_bytes(self) -> Self::Bytes {
                <$type>::to_be_bytes(self)
            }

            #[inline]
            fn to_le_bytes(self) -> Self::Bytes {
                <$type>::to_le_bytes(self)
            }

            #[inline]
            fn from_be_bytes(bytes: Self::Bytes) -> Self {
                <$type>::from_be_bytes(bytes)
            }

            #[inline]
            fn from_le_bytes(bytes: Self::Bytes) -> Self {
                <$type>::from_le_bytes(bytes)
            }
        }
    };
}

impl_fixed_width!(u8, 1, swap_8, |value: u8| value);
impl_fixed_width!(u16, 2, swap_16, |value: u16| value);
impl_fixed_width!(u32, 4, swap_32, |value: u32| value.rotate_left(16));
impl_fixed_width!(u64, 8, swap_64, swap_words_64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_endian_forwards_to_engine() {
        assert_eq!(0x11_u8.swap_endian(), 0x11);
        assert_eq!(0x1122_u16.swap_endian(), 0x2211);
        assert_eq!(0x11223344_u32.swap_endian(), 0x44332211);
        assert_eq!(0x1122334455667788_u64.swap_endian(), 0x8877665544332211);
    }

    #[test]
    fn swap_words_narrow() {
        assert_eq!(FixedWidth::swap_words(0xAB_u8), 0xAB);
        assert_eq!(FixedWidth::swap_words(0xABCD_u16), 0xABCD);
    }

    #[test]
    fn swap_words_u32() {
        assert_eq!(FixedWidth::swap_words(0x0001_0203_u32), 0x0203_0001);
    }

    #[test]
    fn swap_words_u64() {
        assert_eq!(FixedWidth::swap_words(0x0001_0203_0405_0607_u64), 0x0607_0405_0203_0001);
    }

    #[test]
    fn swap_words_is_involution() {
        let value = 0xDEAD_BEEF_FEED_DEAF_u64;
        assert_eq!(FixedWidth::swap_words(FixedWidth::swap_words(value)), value);
    }

    #[test]
    fn byte_width() {
        assert_eq!(<u8 as FixedWidth>::BYTES, 1);
        assert_eq!(<u16 as FixedWidth>::BYTES, 2);
        assert_eq!(<u32 as FixedWidth>::BYTES, 4);
        assert_eq!(<u64 as FixedWidth>::BYTES, 8);
    }
}
