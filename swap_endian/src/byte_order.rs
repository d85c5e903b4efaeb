//! The byte orders and their memory layouts.

use core::str::FromStr;

use crate::error::Error;
use crate::integer::FixedWidth;

/// The order in which the bytes of a multi-byte integer are stored at
/// ascending memory addresses.
///
/// The word-swapped orders split a value into 16-bit words. The bytes within a
/// word follow the named order, while the words themselves are stored in the
/// opposite order. For the 32-bit value `0x00010203`:
///
/// | order          | bytes         |
/// |----------------|---------------|
/// | [`Big`]        | `00 01 02 03` |
/// | [`Little`]     | `03 02 01 00` |
/// | [`BigWord`]    | `02 03 00 01` |
/// | [`LittleWord`] | `01 00 03 02` |
///
/// [`Big`]: ByteOrder::Big
/// [`Little`]: ByteOrder::Little
/// [`BigWord`]: ByteOrder::BigWord
/// [`LittleWord`]: ByteOrder::LittleWord
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteOrder {
    /// None of the known layouts. Treat this as an error, never as a default.
    #[default]
    Unknown,
    /// Most significant byte at the lowest address.
    Big,
    /// Least significant byte at the lowest address.
    Little,
    /// Middle-endian, Honeywell 316 style.
    BigWord,
    /// Middle-endian, PDP-11 style.
    LittleWord,
}

impl ByteOrder {
    /// Network byte order.
    pub const NETWORK: ByteOrder = ByteOrder::Big;

    /// Classify the value read back from [`PROBE`](crate::PROBE) when stored in
    /// memory.
    pub const fn from_probe(value: u32) -> ByteOrder {
        match value {
            0x00010203 => ByteOrder::Big,
            0x03020100 => ByteOrder::Little,
            0x02030001 => ByteOrder::BigWord,
            0x01000302 => ByteOrder::LittleWord,
            _ => ByteOrder::Unknown,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, ByteOrder::Unknown)
    }

    pub const fn is_word_swapped(self) -> bool {
        matches!(self, ByteOrder::BigWord | ByteOrder::LittleWord)
    }

    /// The order whose layout is the exact byte reversal of this one.
    pub const fn reversed(self) -> ByteOrder {
        match self {
            ByteOrder::Unknown => ByteOrder::Unknown,
            ByteOrder::Big => ByteOrder::Little,
            ByteOrder::Little => ByteOrder::Big,
            ByteOrder::BigWord => ByteOrder::LittleWord,
            ByteOrder::LittleWord => ByteOrder::BigWord,
        }
    }

    /// Lay out `value` in memory in this byte order.
    ///
    /// ```
    /// use swap_endian::ByteOrder;
    ///
    /// assert_eq!(ByteOrder::BigWord.encode(0x00010203_u32), Ok([0x02, 0x03, 0x00, 0x01]));
    /// ```
    pub fn encode<T: FixedWidth>(self, value: T) -> Result<T::Bytes, Error> {
        match self {
            ByteOrder::Unknown => Err(Error::UnknownByteOrder),
            ByteOrder::Big => Ok(value.to_be_bytes()),
            ByteOrder::Little => Ok(value.to_le_bytes()),
            ByteOrder::BigWord => Ok(value.swap_words().to_be_bytes()),
            ByteOrder::LittleWord => Ok(value.swap_words().to_le_bytes()),
        }
    }

    /// Read back a value laid out in memory in this byte order.
    pub fn decode<T: FixedWidth>(self, bytes: T::Bytes) -> Result<T, Error> {
        match self {
            ByteOrder::Unknown => Err(Error::UnknownByteOrder),
            ByteOrder::Big => Ok(T::from_be_bytes(bytes)),
            ByteOrder::Little => Ok(T::from_le_bytes(bytes)),
            ByteOrder::BigWord => Ok(T::from_be_bytes(bytes).swap_words()),
            ByteOrder::LittleWord => Ok(T::from_le_bytes(bytes).swap_words()),
        }
    }

    /// Decode a value from the front of `bytes`.
    pub fn read<T: FixedWidth>(self, bytes: &[u8]) -> Result<T, Error> {
        let mut buffer = T::Bytes::default();
        let src = bytes.get(..T::BYTES).ok_or(Error::UnexpectedEof)?;
        buffer.as_mut().copy_from_slice(src);
        self.decode(buffer)
    }

    /// Encode a value into the front of `bytes`.
    pub fn write<T: FixedWidth>(self, value: T, bytes: &mut [u8]) -> Result<(), Error> {
        let encoded = self.encode(value)?;
        let dst = bytes.get_mut(..T::BYTES).ok_or(Error::UnexpectedEof)?;
        dst.copy_from_slice(encoded.as_ref());
        Ok(())
    }

    /// Read a value from a stream.
    #[cfg(feature = "std")]
    pub fn read_from<T: FixedWidth>(self, mut reader: impl std::io::Read) -> Result<T, Error> {
        if !self.is_known() {
            return Err(Error::UnknownByteOrder);
        }
        let mut buffer = T::Bytes::default();
        reader.read_exact(buffer.as_mut())?;
        self.decode(buffer)
    }

    /// Write a value to a stream.
    #[cfg(feature = "std")]
    pub fn write_to<T: FixedWidth>(self, value: T, mut writer: impl std::io::Write) -> Result<(), Error> {
        let encoded = self.encode(value)?;
        writer.write_all(encoded.as_ref())?;
        Ok(())
    }
}

/// The shape of a known byte order: the byte order inside a 16-bit word and
/// whether the words are stored reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    big_bytes: bool,
    word_swapped: bool,
}

impl Layout {
    pub(crate) const BIG: Layout = Layout { big_bytes: true, word_swapped: false };
    pub(crate) const LITTLE: Layout = Layout { big_bytes: false, word_swapped: false };
    pub(crate) const BIG_WORD: Layout = Layout { big_bytes: true, word_swapped: true };
    pub(crate) const LITTLE_WORD: Layout = Layout { big_bytes: false, word_swapped: true };

    /// Lay out `value` in `self` and read the bytes back in `read`.
    #[inline]
    pub(crate) fn reorder<T: FixedWidth>(self, value: T, read: Layout) -> T {
        let value = if self.word_swapped { value.swap_words() } else { value };
        let value = if self.big_bytes != read.big_bytes { value.swap_endian() } else { value };
        if read.word_swapped { value.swap_words() } else { value }
    }
}

impl ByteOrder {
    pub(crate) const fn layout(self) -> Option<Layout> {
        match self {
            ByteOrder::Unknown => None,
            ByteOrder::Big => Some(Layout::BIG),
            ByteOrder::Little => Some(Layout::LITTLE),
            ByteOrder::BigWord => Some(Layout::BIG_WORD),
            ByteOrder::LittleWord => Some(Layout::LITTLE_WORD),
        }
    }
}

impl core::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteOrder::Unknown => write!(f, "unknown endian"),
            ByteOrder::Big => write!(f, "big endian"),
            ByteOrder::Little => write!(f, "little endian"),
            ByteOrder::BigWord => write!(f, "big endian, word-swapped"),
            ByteOrder::LittleWord => write!(f, "little endian, word-swapped"),
        }
    }
}

impl FromStr for ByteOrder {
    type Err = Error;

    /// Parse `big`, `little`, `big-word` (or `honeywell`) and `little-word`
    /// (or `pdp`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::platform::parse_override(s).map(ByteOrder::from).ok_or(Error::InvalidName)
    }
}

impl From<crate::platform::TargetOrder> for ByteOrder {
    fn from(value: crate::platform::TargetOrder) -> Self {
        use crate::platform::TargetOrder;
        match value {
            TargetOrder::Big => ByteOrder::Big,
            TargetOrder::Little => ByteOrder::Little,
            TargetOrder::BigWord => ByteOrder::BigWord,
            TargetOrder::LittleWord => ByteOrder::LittleWord,
        }
    }
}
