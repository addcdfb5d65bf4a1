//! LRC (Longitudinal Redundancy Check) for ASCII framing
//!
//! Two's complement of the 8-bit sum of the frame bytes. It is computed
//! over the binary message before ASCII hex encoding.
//!
//! Being a plain sum, an LRC is blind to errors that keep the sum
//! unchanged: reordered bytes, or two bytes altered by opposite amounts.
//! A single altered byte always changes it.

/// Compute the LRC of `data`.
///
/// Empty input yields `0`.
pub fn compute(data: &[u8]) -> u8 {
    let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    (!sum).wrapping_add(1)
}

/// Check `data` against an expected LRC
pub fn check(data: &[u8], expected: u8) -> bool {
    compute(data) == expected
}
