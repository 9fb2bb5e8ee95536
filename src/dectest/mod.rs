//! A runner for `.dectest` vector files.
//!
//! Each non-comment line is `id operation input -> result`. A
//! result starting with `?` names the expected error variant.

use std::fmt;

use anyhow::{anyhow, bail, Context, Result};

use crate::{
    bits::{parse_bits, Bits},
    dec32::Decimal32,
    dpd::{decimal_to_dpd, dpd_to_decimal},
    error::Error,
};

pub fn parse(s: &str) -> Result<Vec<Case<'_>>> {
    let mut cases = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("--") {
            continue;
        }

        let (lhs, want) = line
            .split_once(" -> ")
            .with_context(|| format!("#{i}: missing `->`: `{line}`"))?;
        let mut fields = lhs.split_whitespace();
        let (Some(name), Some(op), Some(input), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            bail!("#{i}: expected `id operation input`: `{lhs}`");
        };
        let case = Case {
            name,
            op: Op::parse(op).with_context(|| format!("#{i}: unknown op: `{op}`"))?,
            input,
            want: want.trim(),
        };
        cases.push(case);
    }
    assert!(!cases.is_empty());
    Ok(cases)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Case<'a> {
    pub name: &'a str,
    pub op: Op,
    pub input: &'a str,
    pub want: &'a str,
}

impl Case<'_> {
    pub fn run(&self) -> Result<()> {
        let got = match self.op {
            Op::Encode => Decimal32::parse(self.input).map(|d| format!("#{d:08X}")),
            Op::Decode => {
                let hex = self
                    .input
                    .strip_prefix('#')
                    .with_context(|| format!("expected `#` before `{}`", self.input))?;
                let bits = u32::from_str_radix(hex, 16)?;
                Decimal32::from_bits(bits).to_parts().map(|p| p.to_string())
            }
            Op::Pack => {
                let n: i32 = self.input.parse()?;
                decimal_to_dpd(n).map(|dpd| Bits(&dpd).to_string())
            }
            Op::Unpack => parse_bits(self.input)
                .and_then(|dpd| dpd_to_decimal(&dpd))
                .map(|n| n.to_string()),
        };
        let got = match got {
            Ok(s) => s,
            Err(err) => format!("?{}", error_name(&err)),
        };
        if got != self.want {
            Err(anyhow!("got {got}, expected {}", self.want))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Case<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} -> {}", self.name, self.op, self.input, self.want)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Op {
    Encode,
    Decode,
    Pack,
    Unpack,
}

impl Op {
    fn parse(s: &str) -> Result<Self> {
        let op = match s {
            "encode" => Self::Encode,
            "decode" => Self::Decode,
            "pack" => Self::Pack,
            "unpack" => Self::Unpack,
            _ => bail!("unknown op `{s}`"),
        };
        Ok(op)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
            Self::Pack => "pack",
            Self::Unpack => "unpack",
        };
        f.write_str(s)
    }
}

fn error_name(err: &Error) -> &'static str {
    match err {
        Error::Range { .. } => "Range",
        Error::Length { .. } => "Length",
        Error::InvalidDigit { .. } => "InvalidDigit",
        Error::InvalidBit { .. } => "InvalidBit",
        Error::Parse(_) => "Parse",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DECIMAL32: &str = include_str!("../../testdata/decimal32.dectest");

    #[test]
    fn test_decimal32_vectors() {
        let cases = parse(DECIMAL32).unwrap();
        let mut failures = 0;
        for case in &cases {
            if let Err(err) = case.run() {
                println!("FAIL {case}: {err:#}");
                failures += 1;
            }
        }
        assert_eq!(failures, 0, "{failures} of {} cases failed", cases.len());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("d32enc001 encode 1 #22500001").is_err());
        assert!(parse("d32enc001 encode -> #22500001").is_err());
        assert!(parse("d32enc001 frobnicate 1 -> #22500001").is_err());
    }
}
