//! The IEEE 754-2008 `decimal32` interchange format with a
//! densely packed decimal coefficient.

use alloc::string::{String, ToString};
use core::{fmt, mem::size_of, str::FromStr};

#[cfg(feature = "rand")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{
    bits::{self, Bit},
    ctx::Condition,
    dpd,
    error::{Error, Result},
};

mod parse;

/// A 32-bit decimal floating point number.
///
/// (–1)^sign * coefficient * 10^exp
///
/// Equality is bitwise: `1` and `1.0` have different encodings
/// and compare unequal.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Decimal32(
    /// # Layout
    ///
    /// ## Bits
    ///
    /// 0: sign
    /// 1-5: combination
    /// 6-11: exponent continuation
    /// 12-31: coefficient continuation (two declets)
    u32,
);
const _: () = assert!(size_of::<Decimal32>() == 32 / 8);

// Internal stuff.
impl Decimal32 {
    const SIGN_SHIFT: u32 = 32 - 1;

    const COMB_SHIFT: u32 = 32 - 1 - 5;
    const COMB_MASK: u32 = 0x1f;

    const ECON_BITS: u32 = 6;
    const ECON_SHIFT: u32 = 32 - 1 - 5 - 6;
    const ECON_MASK: u32 = (1 << Self::ECON_BITS) - 1;

    const DECLET_BITS: u32 = 10;
    const DECLET_MASK: u32 = (1 << Self::DECLET_BITS) - 1;

    /// Returns the five-bit combination field.
    const fn comb(self) -> Comb {
        Comb(((self.0 >> Self::COMB_SHIFT) & Self::COMB_MASK) as u8)
    }

    /// Returns the exponent continuation field.
    const fn econ(self) -> u16 {
        ((self.0 >> Self::ECON_SHIFT) & Self::ECON_MASK) as u16
    }

    /// Returns the high and low declets of the coefficient
    /// continuation field.
    const fn declets(self) -> (u16, u16) {
        let hi = (self.0 >> Self::DECLET_BITS) & Self::DECLET_MASK;
        let lo = self.0 & Self::DECLET_MASK;
        (hi as u16, lo as u16)
    }

    /// Assembles the fields of a finite number.
    ///
    /// `biased` must be in [0, LIMIT] and `hi` and `lo` in
    /// [0, 999].
    #[allow(clippy::cast_lossless)]
    const fn from_fields(sign: bool, biased: u16, msd: Msd, hi: u16, lo: u16) -> Self {
        debug_assert!(biased <= Self::LIMIT);
        debug_assert!(hi <= 999 && lo <= 999);

        // The top two bits of the 8-bit biased exponent go into
        // the combination field. Since `biased <= 191` they are
        // in [0, 2].
        let msb = (biased >> Self::ECON_BITS) as u8;
        let comb = Comb::new(msb, msd);
        let econ = biased as u32 & Self::ECON_MASK;
        let coeff = ((dpd::from_bin(hi) as u32) << Self::DECLET_BITS) | dpd::from_bin(lo) as u32;

        let mut bits = 0;
        bits |= (sign as u32) << Self::SIGN_SHIFT;
        bits |= (comb.0 as u32) << Self::COMB_SHIFT;
        bits |= econ << Self::ECON_SHIFT;
        bits |= coeff;
        Self(bits)
    }

    /// Encodes a biased exponent and coefficient.
    fn from_biased(sign: bool, biased: i64, coeff: u32) -> Result<Self> {
        let biased = u16::try_from(biased)
            .ok()
            .filter(|&b| b <= Self::LIMIT)
            .ok_or(Error::range(
                "biased exponent",
                biased,
                0,
                i64::from(Self::LIMIT),
            ))?;
        if coeff > Self::MAX_COEFF {
            return Err(Error::range(
                "coefficient",
                i64::from(coeff),
                0,
                i64::from(Self::MAX_COEFF),
            ));
        }

        // `coeff <= MAX_COEFF`, so every part fits.
        let msd = Msd::new((coeff / 1_000_000) as u8)?;
        let hi = ((coeff / 1000) % 1000) as u16;
        let lo = (coeff % 1000) as u16;
        Ok(Self::from_fields(sign, biased, msd, hi, lo))
    }
}

// Public stuff.
impl Decimal32 {
    /// The bias added to the exponent in order to store it
    /// unsigned.
    pub const BIAS: i32 = 101;

    /// The maximum value of the biased exponent.
    pub const LIMIT: u16 = 191;

    /// The number of base 10 significant digits.
    pub const DIGITS: u32 = 7;

    /// The largest allowed coefficient.
    pub const MAX_COEFF: u32 = 10u32.pow(Self::DIGITS) - 1;

    /// The smallest allowed exponent.
    pub const MIN_EXP: i32 = -Self::BIAS;

    /// The largest allowed exponent.
    #[allow(clippy::cast_lossless)]
    pub const MAX_EXP: i32 = Self::LIMIT as i32 - Self::BIAS;

    /// Creates a `Decimal32` from its encoding.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the encoding.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Creates a `Decimal32` from its big-endian encoding.
    pub const fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Returns the big-endian encoding.
    pub const fn to_be_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Creates a `Decimal32` from 32 bits, most significant
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Length`] if `bits` is not exactly 32
    /// bits.
    pub fn from_bit_slice(bits: &[Bit]) -> Result<Self> {
        if bits.len() != 32 {
            return Err(Error::length("decimal32", "32", bits.len()));
        }
        Ok(Self(bits::to_word(bits)))
    }

    /// Creates a `Decimal32` from a string of exactly 32 `0`
    /// and `1` characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Length`] if `s` is not 32 characters
    /// long and [`Error::InvalidBit`] if it contains any other
    /// character.
    pub fn from_bit_str(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != 32 {
            return Err(Error::length("decimal32", "32", len));
        }
        Self::from_bit_slice(&bits::parse_bits(s)?)
    }

    /// Returns the encoding as 32 bits, most significant first.
    pub const fn to_bit_array(self) -> [Bit; 32] {
        bits::from_word(self.0)
    }

    /// Creates a `Decimal32` from a sign, an unbiased exponent,
    /// and a coefficient.
    ///
    /// The result is always exact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Range`] if `exp` is not in
    /// [[`MIN_EXP`][Self::MIN_EXP], [`MAX_EXP`][Self::MAX_EXP]]
    /// or `coeff` is larger than
    /// [`MAX_COEFF`][Self::MAX_COEFF].
    pub fn from_parts(sign: bool, exp: i32, coeff: u32) -> Result<Self> {
        Self::from_biased(sign, i64::from(exp) + i64::from(Self::BIAS), coeff)
    }

    /// Parses a decimal literal.
    ///
    /// The literal is `[+-]digits[.digits][(e|E)[+-]digits]`.
    /// Coefficients longer than [`DIGITS`][Self::DIGITS]
    /// significant digits are truncated and the exponent is
    /// adjusted to match.
    ///
    /// ```
    /// use dpd32::Decimal32;
    ///
    /// let d = Decimal32::parse("12345678")?;
    /// assert_eq!(d.to_string(), "1234567e1");
    /// # Ok::<(), dpd32::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the literal is malformed and
    /// [`Error::Range`] if the biased exponent is not in
    /// [0, [`LIMIT`][Self::LIMIT]].
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_with_conditions(s).map(|(d, _)| d)
    }

    /// Like [`parse`][Self::parse], but also reports whether
    /// digits were discarded.
    ///
    /// ```
    /// use dpd32::{Condition, Decimal32};
    ///
    /// let (_, cond) = Decimal32::parse_with_conditions("12345678")?;
    /// assert_eq!(cond, Condition::ROUNDED | Condition::INEXACT);
    /// # Ok::<(), dpd32::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`parse`][Self::parse].
    pub fn parse_with_conditions(s: &str) -> Result<(Self, Condition)> {
        let lit = parse::parse(s)?;
        let biased = lit.exp.saturating_add(i64::from(Self::BIAS));
        let d = Self::from_biased(lit.sign, biased, lit.coeff)?;
        Ok((d, lit.conditions))
    }

    /// Reports whether the sign bit is set.
    pub const fn is_sign_negative(self) -> bool {
        (self.0 >> Self::SIGN_SHIFT) != 0
    }

    /// Reports whether the combination field is `1111x`, which
    /// IEEE 754-2008 reserves for infinities and NaNs.
    ///
    /// Special values are not interpreted: decoding one yields
    /// whatever the finite layout says.
    pub const fn is_special(self) -> bool {
        self.comb().is_special()
    }

    /// Returns the biased exponent.
    ///
    /// The result is in [0, 255]. It only exceeds
    /// [`LIMIT`][Self::LIMIT] for special values.
    #[allow(clippy::cast_lossless)]
    pub const fn biased_exp(self) -> u16 {
        let (msb, _) = self.comb().split();
        ((msb as u16) << Self::ECON_BITS) | self.econ()
    }

    /// Returns the unbiased exponent.
    #[allow(clippy::cast_lossless)]
    pub const fn exponent(self) -> i32 {
        self.biased_exp() as i32 - Self::BIAS
    }

    /// Returns the most significant digit of the coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigit`] if the combination field
    /// encodes a digit larger than 9.
    pub const fn msd(self) -> Result<u8> {
        let (_, msd) = self.comb().split();
        match Msd::new(msd) {
            Ok(msd) => Ok(msd.digit()),
            Err(err) => Err(err),
        }
    }

    /// Returns the coefficient.
    ///
    /// # Errors
    ///
    /// See [`to_parts`][Self::to_parts].
    pub fn coefficient(self) -> Result<u32> {
        self.to_parts().map(|p| p.coefficient())
    }

    /// Decodes the sign, coefficient digits, and unbiased
    /// exponent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDigit`] if the MSD or a declet
    /// decodes to a digit larger than 9.
    pub fn to_parts(self) -> Result<Parts> {
        let msd = self.msd()?;
        let (hi, lo) = self.declets();
        let hi = dpd::to_bin(hi)?;
        let lo = dpd::to_bin(lo)?;

        let d = |n: u16, p: u16| ((n / p) % 10) as u8;
        Ok(Parts {
            sign: self.is_sign_negative(),
            digits: [
                msd,
                d(hi, 100),
                d(hi, 10),
                d(hi, 1),
                d(lo, 100),
                d(lo, 10),
                d(lo, 1),
            ],
            exponent: self.exponent(),
        })
    }
}

impl FromStr for Decimal32 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Decimal32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self.to_parts().map_err(|_| fmt::Error)?;
        fmt::Display::fmt(&parts, f)
    }
}

impl fmt::Debug for Decimal32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal32({:#010x})", self.0)
    }
}

impl fmt::Binary for Decimal32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Decimal32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Decimal32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl Distribution<Decimal32> for Standard {
    /// Samples a finite `Decimal32` with canonical declets.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Decimal32 {
        let msd = match rng.gen_range(0..=9) {
            d @ 0..=7 => Msd::Small(d),
            d => Msd::Large(d),
        };
        Decimal32::from_fields(
            rng.gen(),
            rng.gen_range(0..=Decimal32::LIMIT),
            msd,
            rng.gen_range(0..=999),
            rng.gen_range(0..=999),
        )
    }
}

/// The decoded fields of a [`Decimal32`].
///
/// Its [`Display`][fmt::Display] is `sign ‖ coefficient ‖ "e" ‖
/// exponent`: the sign is `-` or nothing, the coefficient is
/// always seven digits, and nothing is normalized.
///
/// ```
/// use dpd32::Decimal32;
///
/// let parts = Decimal32::parse("-7.50")?.to_parts()?;
/// assert_eq!(parts.to_string(), "-0000750e-2");
/// # Ok::<(), dpd32::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Parts {
    /// Whether the number is negative.
    pub sign: bool,
    /// The coefficient digits, most significant first.
    pub digits: [u8; 7],
    /// The unbiased exponent.
    pub exponent: i32,
}

impl Parts {
    /// Returns the coefficient as an integer.
    pub fn coefficient(&self) -> u32 {
        self.digits
            .iter()
            .fold(0, |acc, &d| acc * 10 + u32::from(d))
    }
}

impl fmt::Display for Parts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign {
            f.write_str("-")?;
        }
        for d in self.digits {
            write!(f, "{d}")?;
        }
        write!(f, "e{}", self.exponent)
    }
}

/// The most significant digit, classified by how the
/// combination field stores it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Msd {
    /// [0, 7]: three bits, stored as `0cde`.
    Small(u8),
    /// 8 or 9: one bit, stored as `100e`.
    Large(u8),
}

impl Msd {
    const fn new(digit: u8) -> Result<Self> {
        match digit {
            0..=7 => Ok(Self::Small(digit)),
            8 | 9 => Ok(Self::Large(digit)),
            _ => Err(Error::invalid_digit(digit)),
        }
    }

    const fn digit(self) -> u8 {
        match self {
            Self::Small(d) | Self::Large(d) => d,
        }
    }
}

/// The combination field.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Comb(
    /// ```text
    /// | Field     | Exp | Coeff   |
    /// | --------- | --- | ------- |
    /// | a b c d e | a b | 0 c d e |
    /// | 1 1 c d e | c d | 1 0 0 e |
    /// ```
    u8,
);

impl Comb {
    const AB: u8 = 0b11000; // ab...
    const CD: u8 = 0b00110; // ..cd.
    const E_: u8 = 0b00001; // ....e

    /// Builds the field from the two exponent MSBs and the MSD.
    const fn new(msb: u8, msd: Msd) -> Self {
        debug_assert!(msb <= 2);

        match msd {
            // (e0 e1)(msd1 msd2 msd3)
            Msd::Small(d) => Self((msb << 3) | d),
            // (1 1)(e0 e1)(msd3)
            Msd::Large(d) => Self(Self::AB | (msb << 1) | (d & Self::E_)),
        }
    }

    /// Returns the two exponent MSBs and the MSD.
    const fn split(self) -> (u8, u8) {
        match self.0 & Self::AB {
            // If bits `ab` are both set, then the MSBs are
            // encoded in bits `cd`. Otherwise, the MSBs are
            // encoded in `ab`.
            Self::AB => ((self.0 & Self::CD) >> 1, 0x8 | (self.0 & Self::E_)),
            ab => (ab >> 3, self.0 & (Self::CD | Self::E_)),
        }
    }

    const fn is_special(self) -> bool {
        self.0 & 0x1e == 0x1e
    }
}

/// Encodes a decimal literal as a big-endian `decimal32`.
///
/// ```
/// use dpd32::encode_decimal32;
///
/// assert_eq!(encode_decimal32("1")?, [0x22, 0x50, 0x00, 0x01]);
/// # Ok::<(), dpd32::Error>(())
/// ```
///
/// # Errors
///
/// See [`Decimal32::parse`].
pub fn encode_decimal32(text: &str) -> Result<[u8; 4]> {
    Ok(Decimal32::parse(text)?.to_be_bytes())
}

/// Decodes a string of 32 `0` and `1` characters to
/// `sign ‖ coefficient ‖ "e" ‖ exponent`.
///
/// ```
/// use dpd32::decode_decimal32;
///
/// let text = decode_decimal32("00100010001000101000111001010110")?;
/// assert_eq!(text, "0123456e-3");
/// # Ok::<(), dpd32::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::Length`] if `bits` is not 32 characters
/// long, [`Error::InvalidBit`] if it contains a character other
/// than `0` or `1`, and [`Error::InvalidDigit`] if a digit
/// decodes larger than 9.
pub fn decode_decimal32(bits: &str) -> Result<String> {
    let parts = Decimal32::from_bit_str(bits)?.to_parts()?;
    Ok(parts.to_string())
}
