//! The host byte order, as resolved when the crate was built.
//!
//! The build script looks up the target architecture in
//! [`platform`](crate::platform) (or takes the `SWAP_ENDIAN_BYTE_ORDER`
//! environment variable as an override) and fails the build if the byte order
//! cannot be determined.

use crate::byte_order::{ByteOrder, Layout};
use crate::error::Error;

#[cfg(swap_endian_order = "big")]
pub const BUILD_TIME: ByteOrder = ByteOrder::Big;
#[cfg(swap_endian_order = "big")]
pub(crate) const HOST_LAYOUT: Layout = Layout::BIG;

#[cfg(swap_endian_order = "little")]
pub const BUILD_TIME: ByteOrder = ByteOrder::Little;
#[cfg(swap_endian_order = "little")]
pub(crate) const HOST_LAYOUT: Layout = Layout::LITTLE;

#[cfg(swap_endian_order = "big_word")]
pub const BUILD_TIME: ByteOrder = ByteOrder::BigWord;
#[cfg(swap_endian_order = "big_word")]
pub(crate) const HOST_LAYOUT: Layout = Layout::BIG_WORD;

#[cfg(swap_endian_order = "little_word")]
pub const BUILD_TIME: ByteOrder = ByteOrder::LittleWord;
#[cfg(swap_endian_order = "little_word")]
pub(crate) const HOST_LAYOUT: Layout = Layout::LITTLE_WORD;

#[cfg(not(any(
    swap_endian_order = "big",
    swap_endian_order = "little",
    swap_endian_order = "big_word",
    swap_endian_order = "little_word"
)))]
compile_error!("the build script did not resolve a byte order; set SWAP_ENDIAN_BYTE_ORDER");

/// Whether [`BUILD_TIME`] was set explicitly rather than derived from the
/// target.
pub const IS_OVERRIDDEN: bool = cfg!(swap_endian_override);

/// The byte order to use for the host.
///
/// Without the `runtime-detect` feature this is [`BUILD_TIME`]. With it, the
/// run-time classifier is consulted once and its answer is reused; an
/// unrecognized layout is reported as [`Error::UnknownByteOrder`].
pub fn resolve() -> Result<ByteOrder, Error> {
    #[cfg(not(feature = "runtime-detect"))]
    {
        tracing::debug!(byte_order = %BUILD_TIME, overridden = IS_OVERRIDDEN, "using build-time byte order");
        Ok(BUILD_TIME)
    }

    #[cfg(feature = "runtime-detect")]
    {
        cache::get_or_classify()
    }
}

#[cfg(feature = "runtime-detect")]
mod cache {
    use core::sync::atomic::{AtomicU8, Ordering};

    use crate::byte_order::ByteOrder;
    use crate::classify::classify;
    use crate::error::Error;

    const UNRESOLVED: u8 = u8::MAX;

    static RESOLVED: AtomicU8 = AtomicU8::new(UNRESOLVED);

    const fn to_tag(order: ByteOrder) -> u8 {
        match order {
            ByteOrder::Unknown => 0,
            ByteOrder::Big => 1,
            ByteOrder::Little => 2,
            ByteOrder::BigWord => 3,
            ByteOrder::LittleWord => 4,
        }
    }

    const fn from_tag(tag: u8) -> Option<ByteOrder> {
        match tag {
            0 => Some(ByteOrder::Unknown),
            1 => Some(ByteOrder::Big),
            2 => Some(ByteOrder::Little),
            3 => Some(ByteOrder::BigWord),
            4 => Some(ByteOrder::LittleWord),
            _ => None,
        }
    }

    pub fn get_or_classify() -> Result<ByteOrder, Error> {
        // Racing threads all store the same value.
        let order = match from_tag(RESOLVED.load(Ordering::Relaxed)) {
            Some(order) => order,
            None => {
                let order = classify();
                RESOLVED.store(to_tag(order), Ordering::Relaxed);
                tracing::debug!(byte_order = %order, "classified host byte order");
                order
            }
        };
        if order.is_known() {
            Ok(order)
        } else {
            tracing::warn!("host byte order matches none of the known layouts");
            Err(Error::UnknownByteOrder)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(swap_endian_override))]
    use crate::classify::classify;

    #[test]
    fn build_time_is_known() {
        assert!(BUILD_TIME.is_known());
        assert_eq!(BUILD_TIME.layout(), Some(HOST_LAYOUT));
    }

    #[cfg(not(swap_endian_override))]
    #[test]
    fn build_time_agrees_with_classifier() {
        assert_eq!(BUILD_TIME, classify());
    }

    #[cfg(not(swap_endian_override))]
    #[test]
    fn resolve_agrees_with_build_time() {
        assert_eq!(resolve(), Ok(BUILD_TIME));
    }
}
