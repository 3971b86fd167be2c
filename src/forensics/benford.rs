//! Leading-digit reference distribution
//!
//! In many naturally occurring datasets the first significant digit `d`
//! appears with frequency `log10(1 + 1/d)`. The table is built once per
//! process and shared read-only.

use once_cell::sync::Lazy;

/// Expected frequency of leading digits 1..=9, indexed by `digit - 1`
pub static BENFORD_EXPECTED: Lazy<[f64; 9]> = Lazy::new(|| {
    let mut table = [0.0; 9];
    for (i, slot) in table.iter_mut().enumerate() {
        let digit = (i + 1) as f64;
        *slot = (1.0 + 1.0 / digit).log10();
    }
    table
});

/// Expected frequency of `digit`, or `None` outside 1..=9
pub fn expected_frequency(digit: u8) -> Option<f64> {
    match digit {
        1..=9 => Some(BENFORD_EXPECTED[usize::from(digit) - 1]),
        _ => None,
    }
}

/// First significant digit of `value`.
///
/// Returns `None` for zero, negative and non-finite values, which have no
/// defined leading digit. The digit is read from the shortest round-trip
/// scientific representation, which is the value normalised into [1, 10)
/// without the drift repeated multiplication by 10 accumulates (`0.001`
/// yields 1, not 9).
pub fn leading_digit(value: f64) -> Option<u8> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    let scientific = format!("{:e}", value);
    scientific
        .bytes()
        .next()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .filter(|&digit| digit != 0)
}
