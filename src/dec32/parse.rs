//! Decimal literal parsing.

use super::Decimal32;
use crate::{ctx::Condition, error::ParseError};

/// A decimal literal reduced to at most [`Decimal32::DIGITS`]
/// significant digits.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(super) struct Literal {
    pub sign: bool,
    pub coeff: u32,
    /// The unbiased exponent. Saturates instead of overflowing,
    /// which is always out of range.
    pub exp: i64,
    pub conditions: Condition,
}

/// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
///
/// At least one coefficient digit is required on either side of
/// the decimal point.
pub(super) fn parse(s: &str) -> Result<Literal, ParseError> {
    let mut s = s.as_bytes();
    if s.is_empty() {
        return Err(ParseError::empty());
    }

    let mut sign = false;
    if let Some((c @ (b'-' | b'+'), rest)) = s.split_first() {
        sign = *c == b'-';
        s = rest;
    }

    let (int, rest) = split_digits(s);
    let (frac, rest) = match rest.split_first() {
        Some((b'.', rest)) => split_digits(rest),
        _ => (&[][..], rest),
    };
    if int.is_empty() && frac.is_empty() {
        return Err(ParseError::invalid("expected digit"));
    }

    let exp = match rest.split_first() {
        None => 0,
        Some((b'e' | b'E', rest)) => parse_exp(rest)?,
        Some(_) => return Err(ParseError::invalid("unexpected character")),
    };

    // If the literal included a decimal point the exponent is
    // reduced by the count of digits following it.
    let mut exp = exp.saturating_sub(to_i64(frac.len()));

    let mut coeff = 0u32;
    let mut digits = 0;
    let mut dropped = 0;
    let mut nonzero = false;
    for &c in int.iter().chain(frac) {
        let d = c - b'0';
        if digits == 0 && d == 0 {
            // Leading zero.
            continue;
        }
        if digits < Decimal32::DIGITS {
            coeff = coeff * 10 + u32::from(d);
            digits += 1;
        } else {
            dropped += 1;
            nonzero |= d != 0;
        }
    }
    // Truncated digits scale the coefficient down, so the
    // exponent goes up by one per digit.
    exp = exp.saturating_add(to_i64(dropped));

    Ok(Literal {
        sign,
        coeff,
        exp,
        conditions: Condition::truncation(dropped, nonzero),
    })
}

/// Parses an optionally signed integer exponent, which must run
/// to the end of the input.
fn parse_exp(s: &[u8]) -> Result<i64, ParseError> {
    let (neg, s) = match s.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, s),
    };
    let (digits, rest) = split_digits(s);
    if digits.is_empty() {
        return Err(ParseError::invalid("expected exponent digits"));
    }
    if !rest.is_empty() {
        return Err(ParseError::invalid("unexpected character after exponent"));
    }
    let mag = digits.iter().fold(0i64, |acc, &c| {
        acc.saturating_mul(10).saturating_add(i64::from(c - b'0'))
    });
    Ok(if neg { -mag } else { mag })
}

/// Splits `s` after its leading ASCII digits.
fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let n = s.iter().take_while(|c| c.is_ascii_digit()).count();
    s.split_at(n)
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
