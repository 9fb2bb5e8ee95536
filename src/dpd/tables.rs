use super::logic;

/// Maps 12-bit BCDs to 10-bit DPDs.
///
/// Covers every 12-bit pattern, including those with nibbles
/// larger than 9.
#[allow(clippy::indexing_slicing)]
pub(super) const BCD_TO_DPD: [u16; 1 << 12] = {
    let mut t = [0u16; 1 << 12];
    let mut i = 0;
    while i < t.len() {
        t[i] = logic::pack(i as u16);
        i += 1;
    }
    t
};

/// Maps 10-bit DPDs to 12-bit BCDs.
#[allow(clippy::indexing_slicing)]
pub(super) const DPD_TO_BCD: [u16; 1 << 10] = {
    let mut t = [0u16; 1 << 10];
    let mut i = 0;
    while i < t.len() {
        t[i] = logic::unpack(i as u16);
        i += 1;
    }
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        for (bcd, &dpd) in BCD_TO_DPD.iter().enumerate() {
            assert_eq!(dpd, logic::pack(bcd as u16), "{bcd:03x}");
        }
        for (dpd, &bcd) in DPD_TO_BCD.iter().enumerate() {
            assert_eq!(bcd, logic::unpack(dpd as u16), "{dpd:010b}");
        }
    }
}
