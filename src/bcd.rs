//! Binary coded decimal conversion routines.
//!
//! A BCD is a sequence of 4-bit groups, each holding one decimal
//! digit, most significant digit first.

use crate::{
    bits::{self, Bit},
    error::{Error, Result},
};

/// The largest integer that fits in a 3-digit group.
pub const MAX_GROUP: u16 = 999;

/// The longest BCD [`bcd_to_decimal`] accepts: 19 digits always
/// fit in a `u64`.
const MAX_BITS: usize = 19 * 4;

/// Converts `decimal` to a 12-bit BCD.
///
/// The number is zero padded to three digits and each digit is
/// expanded to four bits.
///
/// ```
/// use dpd32::{bits::Bits, decimal_to_bcd};
///
/// assert_eq!(Bits(&decimal_to_bcd(907)?).to_string(), "100100000111");
/// assert!(decimal_to_bcd(1000).is_err());
/// # Ok::<(), dpd32::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Range`] if `decimal` is not in [0, 999].
pub fn decimal_to_bcd(decimal: i32) -> Result<[Bit; 12]> {
    let bin = u16::try_from(decimal)
        .ok()
        .filter(|&n| n <= MAX_GROUP)
        .ok_or(Error::range(
            "decimal",
            i64::from(decimal),
            0,
            i64::from(MAX_GROUP),
        ))?;
    Ok(bits::from_word(u32::from(from_bin(bin))))
}

/// Converts a BCD of any number of digits to an integer.
///
/// # Errors
///
/// Returns [`Error::Length`] if the length of `bcd` is not
/// a multiple of four or is longer than 19 digits, and
/// [`Error::InvalidDigit`] if any group is larger than 9.
pub fn bcd_to_decimal(bcd: &[Bit]) -> Result<u64> {
    if bcd.len() % 4 != 0 || bcd.len() > MAX_BITS {
        return Err(Error::length(
            "BCD",
            "a multiple of 4 and at most 76",
            bcd.len(),
        ));
    }
    bcd.chunks_exact(4).try_fold(0u64, |acc, nibble| {
        // A nibble is at most 15, so the cast cannot truncate.
        let digit = bits::to_word(nibble) as u8;
        if digit > 9 {
            return Err(Error::invalid_digit(digit));
        }
        Ok(acc * 10 + u64::from(digit))
    })
}

/// Creates a 12-bit BCD from a binary number in [0, 999].
pub(crate) const fn from_bin(bin: u16) -> u16 {
    debug_assert!(bin <= MAX_GROUP);

    ((bin / 100) << 8) | (((bin / 10) % 10) << 4) | (bin % 10)
}

/// Converts the 12-bit BCD to a binary number.
///
/// Every nibble must be in [0, 9].
pub(crate) const fn to_bin(bcd: u16) -> u16 {
    debug_assert!(first_invalid_digit(bcd).is_none());

    ((bcd >> 8) & 0xf) * 100 + ((bcd >> 4) & 0xf) * 10 + (bcd & 0xf)
}

/// Returns the leftmost nibble of the 12-bit BCD that is larger
/// than 9, if any.
pub(crate) const fn first_invalid_digit(bcd: u16) -> Option<u8> {
    let mut s = 12;
    while s > 0 {
        s -= 4;
        let digit = ((bcd >> s) & 0xf) as u8;
        if digit > 9 {
            return Some(digit);
        }
    }
    None
}
