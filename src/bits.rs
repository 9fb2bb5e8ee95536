//! Bit primitives shared by the BCD, DPD, and decimal32 codecs.
//!
//! Bit sequences are always most significant bit first.

use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "rand")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::error::{Error, Result};

/// A single binary digit.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bit {
    /// The bit is clear.
    #[default]
    Zero = 0,
    /// The bit is set.
    One = 1,
}

impl Bit {
    /// Creates a `Bit` from a `bool`.
    pub const fn from_bool(b: bool) -> Self {
        if b {
            Self::One
        } else {
            Self::Zero
        }
    }

    /// Reports whether the bit is set.
    pub const fn is_set(self) -> bool {
        matches!(self, Self::One)
    }

    /// Returns `'0'` or `'1'`.
    pub const fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }
}

impl From<bool> for Bit {
    #[inline]
    fn from(b: bool) -> Self {
        Self::from_bool(b)
    }
}

impl From<Bit> for bool {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit.is_set()
    }
}

impl From<Bit> for u8 {
    #[inline]
    fn from(bit: Bit) -> Self {
        bit as u8
    }
}

impl TryFrom<u8> for Bit {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self> {
        match v {
            0 => Ok(Self::Zero),
            1 => Ok(Self::One),
            _ => Err(Error::range("bit", i64::from(v), 0, 1)),
        }
    }
}

impl TryFrom<char> for Bit {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            found => Err(Error::InvalidBit { found }),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl Distribution<Bit> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bit {
        Bit::from_bool(rng.gen())
    }
}

/// A 10-bit densely packed decimal unit.
pub type Declet = [Bit; 10];

/// Parses a string of `0` and `1` characters.
///
/// # Errors
///
/// Returns [`Error::InvalidBit`] for any other character,
/// separators included.
pub fn parse_bits(s: &str) -> Result<Vec<Bit>> {
    s.chars().map(Bit::try_from).collect()
}

/// Like [`parse_bits`], but underscores and ASCII whitespace
/// are treated as group separators and skipped, so
/// `"0010 0101"` is eight bits.
///
/// # Errors
///
/// Returns [`Error::InvalidBit`] for any other character.
pub fn parse_grouped_bits(s: &str) -> Result<Vec<Bit>> {
    s.chars()
        .filter(|c| *c != '_' && !c.is_ascii_whitespace())
        .map(Bit::try_from)
        .collect()
}

/// Displays a bit sequence as a string of `0` and `1`.
///
/// ```
/// use dpd32::{bits::Bits, decimal_to_bcd};
///
/// let bcd = decimal_to_bcd(42)?;
/// assert_eq!(Bits(&bcd).to_string(), "000001000010");
/// # Ok::<(), dpd32::Error>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Bits<'a>(pub &'a [Bit]);

impl fmt::Display for Bits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0 {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

/// Packs up to 32 bits into the low bits of a `u32`.
pub(crate) fn to_word(bits: &[Bit]) -> u32 {
    debug_assert!(bits.len() <= 32);

    bits.iter()
        .fold(0, |word, &bit| (word << 1) | u32::from(u8::from(bit)))
}

/// Unpacks the low `N` bits of `word`.
#[allow(clippy::indexing_slicing)]
pub(crate) const fn from_word<const N: usize>(word: u32) -> [Bit; N] {
    debug_assert!(N <= 32);

    let mut bits = [Bit::Zero; N];
    let mut i = 0;
    while i < N {
        let shift = (N - 1 - i) as u32;
        bits[i] = Bit::from_bool((word >> shift) & 1 != 0);
        i += 1;
    }
    bits
}
