//! BCD/DPD practice question generation.
//!
//! Each question is a decimal number in [0, 999] together with
//! its BCD and DPD encodings. The caller supplies the random
//! number generator, so a seeded generator reproduces the same
//! questions.

use alloc::vec::Vec;

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    bcd::{self, MAX_GROUP},
    bits::{Bit, Declet},
    dpd::{self, Pattern},
    error::{Error, Result},
};

/// Configures [`generate`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct QuizConfig {
    /// The number of questions to generate.
    pub questions: usize,
    /// The smallest decimal to draw.
    pub min: u16,
    /// The largest decimal to draw, inclusive.
    pub max: u16,
}

impl QuizConfig {
    /// Creates a configuration for `questions` questions over
    /// the full [0, 999] range.
    pub const fn new(questions: usize) -> Self {
        Self {
            questions,
            min: 0,
            max: MAX_GROUP,
        }
    }

    /// Restricts the decimals to [`min`, `max`].
    pub const fn with_range(self, min: u16, max: u16) -> Self {
        Self { min, max, ..self }
    }

    /// Checks that the range is non-empty and within [0, 999].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Range`] if `max` is larger than 999 or
    /// `min` is larger than `max`.
    pub fn validate(&self) -> Result<()> {
        if self.max > MAX_GROUP {
            return Err(Error::range(
                "quiz maximum",
                i64::from(self.max),
                0,
                i64::from(MAX_GROUP),
            ));
        }
        if self.min > self.max {
            return Err(Error::range(
                "quiz minimum",
                i64::from(self.min),
                0,
                i64::from(self.max),
            ));
        }
        Ok(())
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self::new(10)
    }
}

/// A decimal number and its encodings.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Question {
    /// The decimal number.
    pub decimal: u16,
    /// Its 12-bit BCD.
    pub bcd: [Bit; 12],
    /// Its DPD declet.
    pub dpd: Declet,
    /// Which digits are large.
    pub pattern: Pattern,
}

impl Question {
    /// Encodes `decimal`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Range`] if `decimal` is larger than 999.
    pub fn new(decimal: u16) -> Result<Self> {
        let bcd = bcd::decimal_to_bcd(i32::from(decimal))?;
        let dpd = dpd::bcd_to_dpd(&bcd)?;
        Ok(Self {
            decimal,
            bcd,
            dpd,
            pattern: Pattern::of_bcd(&bcd),
        })
    }

    /// Reports whether `answer` is this question's BCD.
    pub fn check_bcd(&self, answer: &[Bit]) -> bool {
        answer == self.bcd
    }

    /// Reports whether `answer` is this question's DPD.
    pub fn check_dpd(&self, answer: &[Bit]) -> bool {
        answer == self.dpd
    }
}

/// Generates `config.questions` questions with decimals drawn
/// uniformly from the configured range.
///
/// # Errors
///
/// Returns an error if `config` is invalid.
pub fn generate<R>(rng: &mut R, config: &QuizConfig) -> Result<Vec<Question>>
where
    R: Rng + ?Sized,
{
    config.validate()?;

    let questions = (0..config.questions)
        .map(|_| {
            let q = Question::new(rng.gen_range(config.min..=config.max))?;
            trace!(decimal = q.decimal, pattern = %q.pattern, "generated question");
            Ok(q)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        count = questions.len(),
        min = config.min,
        max = config.max,
        "generated quiz questions"
    );
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::bits::parse_grouped_bits;

    #[test]
    fn test_question() {
        let q = Question::new(907).unwrap();
        assert_eq!(q.pattern, Pattern::LeftLarge);
        assert!(q.check_bcd(&parse_grouped_bits("1001 0000 0111").unwrap()));
        assert!(q.check_dpd(&parse_grouped_bits("111 000 1 101").unwrap()));
        assert!(!q.check_dpd(&parse_grouped_bits("111 000 1 100").unwrap()));
        assert!(!q.check_dpd(&q.bcd));

        assert!(matches!(Question::new(1000), Err(Error::Range { .. })));
    }

    #[test]
    fn test_generate() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        let config = QuizConfig::new(50).with_range(800, 999);
        let mut rng = StdRng::seed_from_u64(42);
        let questions = generate(&mut rng, &config).unwrap();
        assert_eq!(questions.len(), 50);
        for (i, q) in questions.iter().enumerate() {
            assert!((800..=999).contains(&q.decimal), "#{i}");
            assert_eq!(dpd::dpd_to_decimal(&q.dpd), Ok(q.decimal), "#{i}");
            assert_eq!(bcd::bcd_to_decimal(&q.bcd), Ok(u64::from(q.decimal)), "#{i}");
            // The left digit is always large.
            assert!(q.pattern.large_digits()[0], "#{i}");
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let config = QuizConfig::default();
        let a = generate(&mut StdRng::seed_from_u64(7), &config).unwrap();
        let b = generate(&mut StdRng::seed_from_u64(7), &config).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn test_generate_single_value() {
        let config = QuizConfig::new(3).with_range(5, 5);
        let questions = generate(&mut StdRng::seed_from_u64(0), &config).unwrap();
        assert!(questions.iter().all(|q| q.decimal == 5));
    }

    #[test]
    fn test_validate() {
        let mut rng = StdRng::seed_from_u64(0);
        let tests = [
            (QuizConfig::new(1).with_range(0, 1000), "quiz maximum"),
            (QuizConfig::new(1).with_range(10, 9), "quiz minimum"),
        ];
        for (i, (config, what)) in tests.into_iter().enumerate() {
            let got = generate(&mut rng, &config);
            assert!(matches!(got, Err(Error::Range { what: w, .. }) if w == what), "#{i}");
        }
        assert_eq!(QuizConfig::new(0).validate(), Ok(()));
    }
}
