//! Densely packed decimal conversion routines.
//!
//! A declet packs three decimal digits (a 12-bit BCD) into ten
//! bits. The conversion is defined by the boolean equations in
//! IEEE 754-2008 §3.5.2.

use core::fmt;

use crate::{
    bcd,
    bits::{self, Bit, Declet},
    error::{Error, Result},
};

mod logic;
#[cfg(any(feature = "dpd-tables", test))]
mod tables;

/// Which digits of a 3-digit group are large (8 or 9).
///
/// The DPD encoding branches on this: small digits keep three
/// bits, large digits keep only their unit bit.
#[repr(u16)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Pattern {
    /// All digits are small.
    AllSmall = 0x000,
    /// The right digit is large.
    RightLarge = 0x008,
    /// The middle digit is large.
    MiddleLarge = 0x080,
    /// The left digit is large.
    LeftLarge = 0x800,
    /// The right digit is small.
    RightSmall = 0x880,
    /// The middle digit is small.
    MiddleSmall = 0x808,
    /// The left digit is small.
    LeftSmall = 0x088,
    /// All digits are large.
    AllLarge = 0x888,
}

impl Pattern {
    /// Classifies a 3-digit BCD.
    ///
    /// The top bit of each nibble (`a`, `e`, `i`) tells whether
    /// the digit is large.
    pub fn of_bcd(bcd: &[Bit; 12]) -> Self {
        Self::of_bcd_word(bits::to_word(bcd) as u16)
    }

    /// Classifies a declet.
    pub fn of_declet(dpd: &Declet) -> Self {
        Self::of_dpd_word(bits::to_word(dpd) as u16)
    }

    /// Reports which digits, left to right, are large.
    pub const fn large_digits(self) -> [bool; 3] {
        let mask = self as u16;
        [mask & 0x800 != 0, mask & 0x080 != 0, mask & 0x008 != 0]
    }

    pub(crate) const fn of_bcd_word(bcd: u16) -> Self {
        match bcd & 0x888 {
            0x000 => Self::AllSmall,
            0x008 => Self::RightLarge,
            0x080 => Self::MiddleLarge,
            0x800 => Self::LeftLarge,
            0x880 => Self::RightSmall,
            0x808 => Self::MiddleSmall,
            0x088 => Self::LeftSmall,
            _ => Self::AllLarge,
        }
    }

    pub(crate) const fn of_dpd_word(dpd: u16) -> Self {
        // Match bit `v`.
        if dpd & 0x8 == 0 {
            return Self::AllSmall;
        }

        // Match bits `vwx`.
        match dpd & 0xe {
            0x8 => return Self::RightLarge,
            0xa => return Self::MiddleLarge,
            0xc => return Self::LeftLarge,
            _ => {}
        }

        // Match bits `st`.
        match dpd & 0x60 {
            0x00 => Self::RightSmall,
            0x20 => Self::MiddleSmall,
            0x40 => Self::LeftSmall,
            _ => Self::AllLarge,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AllSmall => "all digits are small",
            Self::RightLarge => "the right digit is large",
            Self::MiddleLarge => "the middle digit is large",
            Self::LeftLarge => "the left digit is large",
            Self::RightSmall => "the right digit is small",
            Self::MiddleSmall => "the middle digit is small",
            Self::LeftSmall => "the left digit is small",
            Self::AllLarge => "all digits are large",
        };
        f.write_str(s)
    }
}

/// Packs a 12-bit BCD word into a 10-bit DPD word.
#[cfg(feature = "dpd-tables")]
#[allow(clippy::indexing_slicing)]
pub(crate) const fn pack(bcd: u16) -> u16 {
    tables::BCD_TO_DPD[(bcd & 0xfff) as usize]
}

/// Packs a 12-bit BCD word into a 10-bit DPD word.
#[cfg(not(feature = "dpd-tables"))]
pub(crate) const fn pack(bcd: u16) -> u16 {
    logic::pack(bcd & 0xfff)
}

/// Unpacks a 10-bit DPD word into a 12-bit BCD word.
#[cfg(feature = "dpd-tables")]
#[allow(clippy::indexing_slicing)]
pub(crate) const fn unpack(dpd: u16) -> u16 {
    tables::DPD_TO_BCD[(dpd & 0x3ff) as usize]
}

/// Unpacks a 10-bit DPD word into a 12-bit BCD word.
#[cfg(not(feature = "dpd-tables"))]
pub(crate) const fn unpack(dpd: u16) -> u16 {
    logic::unpack(dpd & 0x3ff)
}

/// Converts a binary number in [0, 999] to a DPD word.
pub(crate) const fn from_bin(bin: u16) -> u16 {
    pack(bcd::from_bin(bin))
}

/// Converts a DPD word to a binary number in [0, 999].
pub(crate) const fn to_bin(dpd: u16) -> Result<u16> {
    let bcd = unpack(dpd);
    match bcd::first_invalid_digit(bcd) {
        Some(digit) => Err(Error::invalid_digit(digit)),
        None => Ok(bcd::to_bin(bcd)),
    }
}

/// Compresses a 12-bit BCD into a declet.
///
/// Nibbles larger than 9 are not rejected; they are packed by
/// the same equations as valid digits.
///
/// # Errors
///
/// Returns [`Error::Length`] if `bcd` is not exactly 12 bits.
pub fn bcd_to_dpd(bcd: &[Bit]) -> Result<Declet> {
    if bcd.len() != 12 {
        return Err(Error::length("BCD group", "12", bcd.len()));
    }
    let word = bits::to_word(bcd) as u16;
    Ok(bits::from_word(u32::from(pack(word))))
}

/// Expands a declet into a 12-bit BCD.
///
/// Every declet, including the non-canonical ones, expands to
/// three valid digits.
///
/// # Errors
///
/// Returns [`Error::Length`] if `dpd` is not exactly 10 bits.
pub fn dpd_to_bcd(dpd: &[Bit]) -> Result<[Bit; 12]> {
    if dpd.len() != 10 {
        return Err(Error::length("DPD declet", "10", dpd.len()));
    }
    let word = bits::to_word(dpd) as u16;
    Ok(bits::from_word(u32::from(unpack(word))))
}

/// Converts an integer in [0, 999] to a declet.
///
/// ```
/// use dpd32::{bits::Bits, decimal_to_dpd};
///
/// assert_eq!(Bits(&decimal_to_dpd(907)?).to_string(), "1110001101");
/// # Ok::<(), dpd32::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Range`] if `decimal` is not in [0, 999].
pub fn decimal_to_dpd(decimal: i32) -> Result<Declet> {
    let bcd = bcd::decimal_to_bcd(decimal)?;
    bcd_to_dpd(&bcd)
}

/// Converts a declet to an integer in [0, 999].
///
/// # Errors
///
/// Returns [`Error::Length`] if `dpd` is not exactly 10 bits.
pub fn dpd_to_decimal(dpd: &[Bit]) -> Result<u16> {
    if dpd.len() != 10 {
        return Err(Error::length("DPD declet", "10", dpd.len()));
    }
    to_bin(bits::to_word(dpd) as u16)
}
