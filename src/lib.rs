//! `dpd32` is a pure Rust, no-std, bit-exact codec for IEEE
//! 754-2008 densely packed decimal (DPD) and the `decimal32`
//! interchange format.
//!
//! # Features
//!
//! The crate converts between four representations of decimal
//! numbers:
//!
//! - a decimal integer in [0, 999],
//! - its 12-bit binary coded decimal (BCD) expansion,
//! - its 10-bit DPD declet,
//! - the 32-bit `decimal32` encoding of a decimal literal.
//!
//! ```
//! use dpd32::{decimal_to_dpd, dpd_to_decimal, encode_decimal32, Decimal32};
//!
//! let declet = decimal_to_dpd(999)?;
//! assert_eq!(dpd_to_decimal(&declet)?, 999);
//!
//! let bytes = encode_decimal32("-7.50")?;
//! assert_eq!(bytes, [0xa2, 0x30, 0x03, 0xd0]);
//! assert_eq!(Decimal32::from_be_bytes(bytes).to_string(), "-0000750e-2");
//! # Ok::<(), dpd32::Error>(())
//! ```
//!
//! Coefficients wider than seven digits are truncated, not
//! rounded. See [`Decimal32::parse_with_conditions`] to find out
//! when that happens.
//!
//! # Cargo Features
//!
//! - `dpd-tables`: Use lookup tables for densely packed decimal
//! conversions.
//!
//! - `rand`: Enable [`rand`] support.
//!
//! - `quiz`: Enable the BCD/DPD question generator. Implies
//! `rand`.
//!
//! - `std`: Include [`std`] support in optional dependencies.
//!
//! - `slow-tests`: Enable exhaustive tests that take minutes to
//! run.
//!
//! [`rand`]: https://crates.io/crates/rand
//! [`std`]: https://doc.rust-lang.org/std/

#![allow(clippy::unusual_byte_groupings)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(test), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::string_slice)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

extern crate alloc;

pub mod bcd;
pub mod bits;
mod ctx;
pub mod dec32;
#[cfg(test)]
mod dectest;
pub mod dpd;
mod error;
#[cfg(feature = "quiz")]
#[cfg_attr(docsrs, doc(cfg(feature = "quiz")))]
pub mod quiz;

pub use bcd::{bcd_to_decimal, decimal_to_bcd};
pub use bits::{Bit, Declet};
pub use ctx::Condition;
pub use dec32::{decode_decimal32, encode_decimal32, Decimal32, Parts};
pub use dpd::{bcd_to_dpd, decimal_to_dpd, dpd_to_bcd, dpd_to_decimal, Pattern};
pub use error::{Error, ParseError, Result};

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{
        bcd_to_decimal, bcd_to_dpd, decimal_to_bcd, decimal_to_dpd, decode_decimal32,
        dpd_to_bcd, dpd_to_decimal, encode_decimal32, Bit, Decimal32, Declet,
    };
}
