//! Errors reported by byte order lookups, layouts and conversions.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    /// A concrete byte order was required but [`ByteOrder::Unknown`](crate::ByteOrder::Unknown) was found.
    UnknownByteOrder,
    /// The buffer or stream is shorter than the value being read or written.
    UnexpectedEof,
    /// A string did not name a byte order.
    InvalidName,
    /// Any other failure of the underlying reader or writer.
    #[cfg(feature = "std")]
    IO(std::io::ErrorKind),
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownByteOrder => write!(f, "the byte order is unknown, refusing to guess"),
            Error::UnexpectedEof => write!(f, "end of buffer reached, cannot read/write the whole value"),
            Error::InvalidName => write!(f, "not the name of a byte order"),
            #[cfg(feature = "std")]
            Error::IO(kind) => write!(f, "{kind}"),
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        match value.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
            kind => Error::IO(kind),
        }
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::UnexpectedEof => std::io::ErrorKind::UnexpectedEof.into(),
            Error::IO(kind) => kind.into(),
            other => std::io::Error::new(std::io::ErrorKind::InvalidInput, other),
        }
    }
}
