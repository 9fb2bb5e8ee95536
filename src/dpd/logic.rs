//! The IEEE 754-2008 boolean equations for densely packed
//! decimal.
//!
//! These are the authoritative definition of the encoding. The
//! lookup tables are generated from them.

/// Reports whether bit `n` of `word` is set.
const fn bit(word: u16, n: u32) -> bool {
    (word >> n) & 1 != 0
}

/// Packs `bits`, most significant first, into the low bits of
/// a `u16`.
#[allow(clippy::cast_lossless, clippy::indexing_slicing)]
const fn word(bits: &[bool]) -> u16 {
    let mut w = 0;
    let mut i = 0;
    while i < bits.len() {
        w = (w << 1) | bits[i] as u16;
        i += 1;
    }
    w
}

/// Packs a 12-bit BCD into a 10-bit DPD.
///
/// Only the lower 12 bits of `bcd` are used. Invalid BCD digits
/// are not rejected; they go through the same equations.
pub(crate) const fn pack(bcd: u16) -> u16 {
    // (abcd)(efgh)(ijkm) becomes (pqr)(stu)(v)(wxy)
    let a = bit(bcd, 11);
    let b = bit(bcd, 10);
    let c = bit(bcd, 9);
    let d = bit(bcd, 8);
    let e = bit(bcd, 7);
    let f = bit(bcd, 6);
    let g = bit(bcd, 5);
    let h = bit(bcd, 4);
    let i = bit(bcd, 3);
    let j = bit(bcd, 2);
    let k = bit(bcd, 1);
    let m = bit(bcd, 0);

    let p = b || (a && j) || (a && f && i);
    let q = c || (a && k) || (a && g && i);
    let r = d;
    let s = (f && (!a || !i)) || (!a && e && j) || (e && i);
    let t = g || (!a && e && k) || (a && i);
    let u = h;
    let v = a || e || i;
    let w = a || (e && i) || (!e && j);
    let x = e || (a && i) || (!a && k);
    let y = m;

    word(&[p, q, r, s, t, u, v, w, x, y])
}

/// Unpacks a 10-bit DPD into a 12-bit BCD.
///
/// Only the lower 10 bits of `dpd` are used. All 1024 inputs
/// produce three digits in [0, 9], including the 24
/// non-canonical declets.
pub(crate) const fn unpack(dpd: u16) -> u16 {
    // (pqr)(stu)(v)(wxy) becomes (abcd)(efgh)(ijkm)
    let p = bit(dpd, 9);
    let q = bit(dpd, 8);
    let r = bit(dpd, 7);
    let s = bit(dpd, 6);
    let t = bit(dpd, 5);
    let u = bit(dpd, 4);
    let v = bit(dpd, 3);
    let w = bit(dpd, 2);
    let x = bit(dpd, 1);
    let y = bit(dpd, 0);

    let a = v && w && (!s || t || !x);
    let b = p && (!v || !w || (s && !t && x));
    let c = q && (!v || !w || (s && !t && x));
    let d = r;
    let e = v && ((!w && x) || (!t && x) || (s && x));
    let f = (s && (!v || !x)) || (p && !s && t && v && w && x);
    let g = (t && (!v || !x)) || (q && !s && t && w);
    let h = u;
    let i = v && ((!w && !x) || (w && x && (s || t)));
    let j = (!v && w) || (s && v && !w && x) || (p && w && (!x || (!s && !t)));
    let k = (!v && x) || (t && !w && x) || (q && v && w && (!x || (!s && !t)));
    let m = y;

    word(&[a, b, c, d, e, f, g, h, i, j, k, m])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bcd;

    /// Packs a BCD by following the declet table in IEEE
    /// 754-2008 table 3.3, one row per combination of large
    /// digits.
    fn table_pack(bcd: u16) -> u16 {
        let digit = |s: u16| (bcd >> s) & 0xf;
        let (d1, d2, d3) = (digit(8), digit(4), digit(0));

        let lo = |d: u16| d & 0x7;
        let mid = |d: u16| (d >> 1) & 0x3;
        let lsb = |d: u16| d & 0x1;

        // | d1 d2 d3 | pqr stu v wxy |
        let (pqr, stu, wxy) = match (d1 > 7, d2 > 7, d3 > 7) {
            (false, false, false) => (lo(d1), lo(d2), lo(d3)),
            (false, false, true) => (lo(d1), lo(d2), lsb(d3)),
            (false, true, false) => (lo(d1), mid(d3) << 1 | lsb(d2), 0b010 | lsb(d3)),
            (true, false, false) => (mid(d3) << 1 | lsb(d1), lo(d2), 0b100 | lsb(d3)),
            (true, true, false) => (mid(d3) << 1 | lsb(d1), lsb(d2), 0b110 | lsb(d3)),
            (true, false, true) => (mid(d2) << 1 | lsb(d1), 0b010 | lsb(d2), 0b110 | lsb(d3)),
            (false, true, true) => (lo(d1), 0b100 | lsb(d2), 0b110 | lsb(d3)),
            (true, true, true) => (lsb(d1), 0b110 | lsb(d2), 0b110 | lsb(d3)),
        };
        let v = u16::from(d1 > 7 || d2 > 7 || d3 > 7);
        (pqr << 7) | (stu << 4) | (v << 3) | wxy
    }

    #[test]
    fn test_pack_unpack() {
        let tests = [
            (0, 0b000_000_0_000),
            (5, 0b000_000_0_101),
            (8, 0b000_000_1_000),
            (9, 0b000_000_1_001),
            (55, 0b000_101_0_101),
            (79, 0b000_111_1_001),
            (80, 0b000_000_1_010),
            (99, 0b000_101_1_111),
            (100, 0b001_000_0_000),
            (555, 0b101_101_0_101),
            (888, 0b000_110_1_110),
            (907, 0b111_000_1_101),
            (999, 0b001_111_1_111),
        ];
        for (i, (bin, dpd)) in tests.into_iter().enumerate() {
            let bcd = bcd::from_bin(bin);
            let got = pack(bcd);
            assert_eq!(got, dpd, "#{i} ({bin}): {got:010b} != {dpd:010b}");
            let got = unpack(dpd);
            assert_eq!(got, bcd, "#{i} ({bin}): {got:012b} != {bcd:012b}");
        }
    }

    #[test]
    fn test_pack_unpack_exhaustive() {
        for bin in 0..=999 {
            let bcd = bcd::from_bin(bin);
            let dpd = pack(bcd);
            assert!(dpd < 1 << 10, "#{bin}: {dpd:#x}");
            assert_eq!(unpack(dpd), bcd, "#{bin}: dpd={dpd:010b}");
        }
    }

    #[test]
    fn test_unpack_all_declets() {
        let mut non_canonical = 0;
        for dpd in 0..1 << 10 {
            let bcd = unpack(dpd);
            assert_eq!(bcd::first_invalid_digit(bcd), None, "{dpd:010b}");
            if pack(bcd) != dpd {
                non_canonical += 1;
                // Non-canonical declets have `vwx = 111`,
                // `st = 11`, and a non-zero `pq`.
                assert_eq!(dpd & 0x6e, 0x6e, "{dpd:010b}");
                assert_ne!(dpd & 0x300, 0, "{dpd:010b}");
            }
        }
        assert_eq!(non_canonical, 24);
    }

    #[test]
    fn test_matches_declet_table() {
        for bin in 0..=999 {
            let bcd = bcd::from_bin(bin);
            assert_eq!(pack(bcd), table_pack(bcd), "#{bin}");
        }
    }
}
