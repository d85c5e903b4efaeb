//! Run-time byte order detection.

use crate::byte_order::ByteOrder;

/// The bytes stored at ascending addresses before reading them back as a
/// native [`u32`].
pub const PROBE: [u8; 4] = [0x00, 0x01, 0x02, 0x03];

/// Detect the byte order of the running machine.
///
/// The bytes of [`PROBE`] are placed in memory in address order and read back
/// as a single native [`u32`]. The resulting value reveals how the machine maps
/// addresses to significance.
///
/// Returns [`ByteOrder::Unknown`] if the layout matches none of the known
/// orders. Callers must handle that case explicitly.
pub fn classify() -> ByteOrder {
    classify_with(|bytes| u32::from_ne_bytes(core::hint::black_box(bytes)))
}

/// Classify using a custom read path.
///
/// `read` receives [`PROBE`] and must return the integer a machine would read
/// from that memory. This allows checking the classification for layouts the
/// running machine doesn't have:
///
/// ```
/// use swap_endian::{ByteOrder, classify_with};
///
/// let pdp11 = |bytes: [u8; 4]| ByteOrder::LittleWord.decode::<u32>(bytes).unwrap();
/// assert_eq!(classify_with(pdp11), ByteOrder::LittleWord);
/// ```
pub fn classify_with(read: impl FnOnce([u8; 4]) -> u32) -> ByteOrder {
    ByteOrder::from_probe(read(PROBE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_deterministic() {
        let first = classify();
        for _ in 0..16 {
            assert_eq!(classify(), first);
        }
    }

    #[test]
    fn classify_matches_target_endian() {
        let expected = if cfg!(target_endian = "little") { ByteOrder::Little } else { ByteOrder::Big };
        assert_eq!(classify(), expected);
    }

    #[test]
    fn classify_with_known_layouts() {
        for order in [ByteOrder::Big, ByteOrder::Little, ByteOrder::BigWord, ByteOrder::LittleWord] {
            let read = |bytes: [u8; 4]| order.decode::<u32>(bytes).unwrap();
            assert_eq!(classify_with(read), order);
        }
    }

    #[test]
    fn classify_with_corrupted_read() {
        assert_eq!(classify_with(|_| 0), ByteOrder::Unknown);
        assert_eq!(classify_with(|bytes| u32::from_be_bytes(bytes) << 1), ByteOrder::Unknown);
        // Byte layout 00 02 01 03 matches no historical machine.
        assert_eq!(classify_with(|bytes| u32::from_be_bytes([bytes[0], bytes[2], bytes[1], bytes[3]])), ByteOrder::Unknown);
    }
}
