//! The midpoint rule shared by [`flat::search`][crate::flat::search] and
//! [`rebuild::Tree`][crate::rebuild::Tree].

/// Returns the "upper middle" index of the inclusive range `[lo, hi]`, that is
/// `(lo + hi + 1) / 2`. For an odd number of elements this is the exact middle;
/// for an even number it is the higher of the two middle indices.
///
/// The caller must ensure `lo <= hi`.
///
/// # Examples
///
/// ```
/// use midpoint_bst::midpoint::upper_mid;
///
/// assert_eq!(upper_mid(0, 3), 2);
/// assert_eq!(upper_mid(0, 4), 2);
/// assert_eq!(upper_mid(7, 7), 7);
/// ```
pub fn upper_mid(lo: usize, hi: usize) -> usize {
    debug_assert!(lo <= hi, "empty range [{}, {}]", lo, hi);
    // Same value as `(lo + hi + 1) / 2` without overflowing near `usize::MAX`.
    lo + (hi - lo + 1) / 2
}
