//! Conversion between the host byte order and wire or file byte orders.
//!
//! A value "in byte order X" is an integer whose in-memory bytes, on this
//! host, are the bytes of the original value laid out in order X. Converting
//! to big endian and writing the result to memory therefore produces the big
//! endian encoding.

use crate::byte_order::{ByteOrder, Layout};
use crate::error::Error;
use crate::integer::FixedWidth;
use crate::target::{BUILD_TIME, HOST_LAYOUT};

/// Lay out `value` in the `written` order and read the bytes back in the
/// `read` order.
///
/// Orders that are equal or exact reversals of each other are handled with a
/// byte swap, the remaining pairs also exchange 16-bit words.
///
/// ```
/// use swap_endian::ByteOrder;
/// use swap_endian::convert::reinterpret;
///
/// assert_eq!(reinterpret(0x11223344_u32, ByteOrder::Big, ByteOrder::Little), Ok(0x44332211));
/// assert_eq!(reinterpret(0x11223344_u32, ByteOrder::Big, ByteOrder::BigWord), Ok(0x33441122));
/// ```
pub fn reinterpret<T: FixedWidth>(value: T, written: ByteOrder, read: ByteOrder) -> Result<T, Error> {
    let (Some(written_layout), Some(read_layout)) = (written.layout(), read.layout()) else {
        return Err(Error::UnknownByteOrder);
    };
    if written == read {
        Ok(value)
    } else if written.reversed() == read {
        Ok(value.swap_endian())
    } else {
        Ok(written_layout.reorder(value, read_layout))
    }
}

/// Convert a host value to the `target` order.
pub fn to_order<T: FixedWidth>(value: T, target: ByteOrder) -> Result<T, Error> {
    reinterpret(value, target, BUILD_TIME)
}

/// Convert a value in the `source` order to the host order.
pub fn from_order<T: FixedWidth>(value: T, source: ByteOrder) -> Result<T, Error> {
    reinterpret(value, BUILD_TIME, source)
}

macro_rules! impl_host_conversion {
    ($to:ident, $from:ident, $layout:expr, $name:literal) => {
        #[doc = concat!("Convert a host value to ", $name, " byte order.")]
        #[inline]
        pub fn $to<T: FixedWidth>(value: T) -> T {
            $layout.reorder(value, HOST_LAYOUT)
        }

        #[doc = concat!("Convert a value in ", $name, " byte order to the host order.")]
        #[inline]
        pub fn $from<T: FixedWidth>(value: T) -> T {
            HOST_LAYOUT.reorder(value, $layout)
        }
    };
}

impl_host_conversion!(to_big_endian, from_big_endian, Layout::BIG, "big endian");
impl_host_conversion!(to_little_endian, from_little_endian, Layout::LITTLE, "little endian");
impl_host_conversion!(to_network, from_network, Layout::BIG, "network");

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const KNOWN: [ByteOrder; 4] = [ByteOrder::Big, ByteOrder::Little, ByteOrder::BigWord, ByteOrder::LittleWord];

    #[test]
    fn reinterpret_unknown() {
        assert_eq!(reinterpret(1_u32, ByteOrder::Unknown, ByteOrder::Big), Err(Error::UnknownByteOrder));
        assert_eq!(reinterpret(1_u32, ByteOrder::Big, ByteOrder::Unknown), Err(Error::UnknownByteOrder));
        assert_eq!(reinterpret(1_u32, ByteOrder::Unknown, ByteOrder::Unknown), Err(Error::UnknownByteOrder));
    }

    #[test]
    fn fast_path_agrees_with_layout() {
        let value = 0x0123_4567_89AB_CDEF_u64;
        for written in KNOWN {
            for read in KNOWN {
                let expected: u64 = read.decode(written.encode(value).unwrap()).unwrap();
                assert_eq!(reinterpret(value, written, read), Ok(expected), "{written} -> {read}");
            }
        }
    }

    #[rstest]
    #[case(ByteOrder::Big, ByteOrder::BigWord, 0x3344_1122)]
    #[case(ByteOrder::Big, ByteOrder::LittleWord, 0x2211_4433)]
    #[case(ByteOrder::Little, ByteOrder::BigWord, 0x2211_4433)]
    #[case(ByteOrder::BigWord, ByteOrder::LittleWord, 0x4433_2211)]
    fn reinterpret_u32(#[case] written: ByteOrder, #[case] read: ByteOrder, #[case] expected: u32) {
        assert_eq!(reinterpret(0x1122_3344_u32, written, read), Ok(expected));
    }

    #[test]
    fn reinterpret_is_reversible() {
        let value = 0xDEAD_BEEF_u32;
        for written in KNOWN {
            for read in KNOWN {
                let there = reinterpret(value, written, read).unwrap();
                assert_eq!(reinterpret(there, read, written), Ok(value));
            }
        }
    }

    #[test]
    fn to_big_endian_writes_big_endian() {
        let converted = to_big_endian(0x1122_3344_u32);
        let mut memory = [0u8; 4];
        BUILD_TIME.write(converted, &mut memory).unwrap();
        assert_eq!(memory, [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn to_little_endian_writes_little_endian() {
        let converted = to_little_endian(0x1122_3344_5566_7788_u64);
        let mut memory = [0u8; 8];
        BUILD_TIME.write(converted, &mut memory).unwrap();
        assert_eq!(memory, [0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]);
    }

    #[test]
    fn host_shortcuts_match_reinterpret() {
        let value = 0x0123_4567_89AB_CDEF_u64;
        assert_eq!(Ok(to_big_endian(value)), reinterpret(value, ByteOrder::Big, BUILD_TIME));
        assert_eq!(Ok(from_big_endian(value)), reinterpret(value, BUILD_TIME, ByteOrder::Big));
        assert_eq!(Ok(to_little_endian(value)), reinterpret(value, ByteOrder::Little, BUILD_TIME));
        assert_eq!(Ok(from_little_endian(value)), reinterpret(value, BUILD_TIME, ByteOrder::Little));
        assert_eq!(Ok(to_network(value)), reinterpret(value, ByteOrder::NETWORK, BUILD_TIME));
    }

    #[test]
    fn host_conversions_invert() {
        let value = 0xCAFE_u16;
        assert_eq!(from_big_endian(to_big_endian(value)), value);
        assert_eq!(from_little_endian(to_little_endian(value)), value);
        assert_eq!(from_network(to_network(value)), value);
        assert_eq!(to_network(value), to_big_endian(value));
    }

    #[test]
    fn to_order_matches_shortcuts() {
        let value = 0x1234_5678_u32;
        assert_eq!(to_order(value, ByteOrder::Big), Ok(to_big_endian(value)));
        assert_eq!(from_order(value, ByteOrder::Little), Ok(from_little_endian(value)));
        assert_eq!(to_order(value, BUILD_TIME), Ok(value));
        assert_eq!(to_order(value, ByteOrder::Unknown), Err(Error::UnknownByteOrder));
    }

    #[test]
    fn bytes_are_never_swapped() {
        for order in KNOWN {
            assert_eq!(to_order(0xA5_u8, order), Ok(0xA5));
        }
    }
}
