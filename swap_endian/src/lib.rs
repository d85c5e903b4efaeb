//! # swap_endian
//!
//! Byte order detection and byte swapping for fixed-width integers.
//!
//! ## Finding the host byte order
//!
//! The host byte order is resolved when the crate is built, from the target
//! architecture, and is available as [`BUILD_TIME`]. Targets whose byte order
//! cannot be determined fail to build unless the `SWAP_ENDIAN_BYTE_ORDER`
//! environment variable names one explicitly (`big`, `little`, `big-word` or
//! `little-word`).
//!
//! The run-time classifier, [`classify`], inspects how the machine actually
//! lays out a 32-bit integer in memory. It recognizes big and little endian as
//! well as the two word-swapped ("middle-endian") layouts of the Honeywell 316
//! and the PDP-11, and returns [`ByteOrder::Unknown`] for anything else:
//!
//! ```
//! use swap_endian::{ByteOrder, classify};
//!
//! match classify() {
//!     ByteOrder::Unknown => panic!("refusing to guess the byte order"),
//!     order => println!("running on a {order} machine"),
//! }
//! ```
//!
//! [`resolve`] gives the order to use in practice, and reports an unknown
//! order as an error.
//!
//! ## Swapping bytes
//!
//! [`swap_8`], [`swap_16`], [`swap_32`] and [`swap_64`] reverse the bytes of a
//! value. Generic code can use [`FixedWidth::swap_endian`] instead.
//!
//! ```
//! use swap_endian::{swap_16, swap_64};
//!
//! assert_eq!(swap_16(0x1122), 0x2211);
//! assert_eq!(swap_64(0x1122334455667788), 0x8877665544332211);
//! ```
//!
//! ## Converting to and from wire byte orders
//!
//! ```
//! use swap_endian::convert::{from_big_endian, to_big_endian};
//!
//! let wire = to_big_endian(0xCAFE_u16);
//! assert_eq!(wire.to_ne_bytes(), [0xCA, 0xFE]);
//! assert_eq!(from_big_endian(wire), 0xCAFE);
//! ```
//!
//! [`ByteOrder::encode`], [`ByteOrder::decode`], [`ByteOrder::read`] and
//! [`ByteOrder::write`] work with explicit byte arrays and slices in any of the
//! known orders.
//!
//! ## Features
//!
//! - `std` (default): [`std::io`] adapters on [`ByteOrder`].
//! - `portable-swap`: implement the swaps with shifts and masks instead of the
//!   compiler's byte-reverse.
//! - `runtime-detect`: [`resolve`] uses the cached run-time classifier instead
//!   of [`BUILD_TIME`].

// Disable the [`std`] standard crate when the "std" feature is not enabled.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod byte_order;
pub mod classify;
pub mod convert;
pub mod error;
pub mod integer;
pub mod platform;
pub mod swap;
pub mod target;

pub use byte_order::ByteOrder;
pub use classify::{PROBE, classify, classify_with};
pub use error::Error;
pub use integer::FixedWidth;
pub use swap::{swap_8, swap_16, swap_32, swap_64};
pub use target::{BUILD_TIME, resolve};
