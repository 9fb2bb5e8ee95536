use bitflags::bitflags;

/// An exceptional condition raised while converting a decimal
/// literal.
///
/// Conditions are informational. The conversion still
/// succeeds.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Condition(u32);

bitflags! {
    impl Condition: u32 {
        /// Occurs when the result of a conversion is not exact,
        /// i.e. a non-zero digit was discarded.
        const INEXACT = 0x20;
        /// Occurs when digits were discarded from the
        /// coefficient, even if they were all zero.
        ///
        /// decimal32 keeps seven significant digits. Extra
        /// digits are truncated, never rounded.
        const ROUNDED = 0x400;
    }
}

impl Condition {
    /// Returns the conditions raised by discarding `dropped`
    /// digits. `nonzero` reports whether any of them was not
    /// zero.
    pub(crate) const fn truncation(dropped: usize, nonzero: bool) -> Self {
        match (dropped, nonzero) {
            (0, _) => Self::empty(),
            (_, false) => Self::ROUNDED,
            (_, true) => Self::ROUNDED.union(Self::INEXACT),
        }
    }
}
