use crate::types::Sequence;

/// Returns whether or not a wrapping number is greater than another
/// sequence_greater_than(2,1) will return true
/// sequence_greater_than(1,2) will return false
/// sequence_greater_than(1,1) will return false
/// sequence_greater_than(0,65535) will return true
pub fn sequence_greater_than(s1: Sequence, s2: Sequence) -> bool {
    wrapping_diff(s2, s1) > 0
}

/// Returns whether or not a wrapping number is less than another
pub fn sequence_less_than(s1: Sequence, s2: Sequence) -> bool {
    sequence_greater_than(s2, s1)
}

/// The newer of two wrapping numbers
pub fn sequence_max(s1: Sequence, s2: Sequence) -> Sequence {
    if sequence_greater_than(s2, s1) {
        s2
    } else {
        s1
    }
}

/// Signed distance travelled going from `a` to `b`, taking the shorter way
/// around the ring.
///
/// # Examples
/// ```
/// # use replicast_shared::wrapping_diff;
/// assert_eq!(wrapping_diff(1, 2), 1);
/// assert_eq!(wrapping_diff(2, 1), -1);
/// assert_eq!(wrapping_diff(65535, 0), 1);
/// assert_eq!(wrapping_diff(0, 65535), -1);
/// ```
pub fn wrapping_diff(a: Sequence, b: Sequence) -> i16 {
    b.wrapping_sub(a) as i16
}
