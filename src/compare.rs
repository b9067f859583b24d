//! Raw byte-sequence ordering used by every operator.

/// Compares two byte sequences lexicographically.
///
/// At the first differing position the result is the difference of the two
/// bytes read as **signed** 8-bit values, so `0xFF` (-1) sorts before `0x00`.
/// When one sequence is a prefix of the other the result is the length
/// difference. Stored comparison results of existing deployments depend on
/// this exact ordering.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    for (&lhs, &rhs) in a.iter().zip(b) {
        if lhs != rhs {
            return i32::from(lhs as i8) - i32::from(rhs as i8);
        }
    }
    // Saturates; only the sign of a length difference matters to callers.
    (a.len() as i64 - b.len() as i64).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
