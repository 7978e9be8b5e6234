//! An iterative binary search over a sorted slice that remembers where it looked.
//!
//! # Examples
//!
//! ```
//! use midpoint_bst::flat;
//!
//! let xs = [15, 23, 29, 33, 37, 41, 44, 49, 52, 54];
//!
//! let probe = flat::search(&xs, &54);
//! assert_eq!(probe.index, Some(9));
//! assert_eq!(probe.path, vec![5, 8, 9]);
//!
//! // Misses still say where they looked.
//! let probe = flat::search(&xs, &16);
//! assert_eq!(probe.index, None);
//! assert_eq!(probe.path, vec![5, 2, 1, 0]);
//! assert_eq!(probe.path_taken(&xs).to_string(), "Path taken: 41 29 23 15");
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::midpoint::upper_mid;

/// The result of [`search`]: where the target was found (if anywhere) and
/// every index that was probed on the way, in order.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Probe {
    /// Index of the target, or `None` if the range was exhausted first.
    pub index: Option<usize>,
    /// Every probed index in visitation order. On success the last entry is
    /// `index`.
    pub path: Vec<usize>,
}

impl Probe {
    /// Whether the target was found.
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    /// Looks the probed indices up in `sorted` (which must be the slice the
    /// probe came from) so the path can be shown as values.
    pub fn path_taken<'a, T>(&'a self, sorted: &'a [T]) -> PathTaken<'a, T> {
        PathTaken {
            path: &self.path,
            sorted,
        }
    }
}

/// The values visited by a [`Probe`]. Its `Display` impl prints them as
/// `Path taken: a b c`.
pub struct PathTaken<'a, T> {
    path: &'a [usize],
    sorted: &'a [T],
}

impl<'a, T> PathTaken<'a, T> {
    /// Iterates over the probed values in visitation order. Indices that fall outside the slice
    /// given to [`Probe::path_taken`] are skipped.
    pub fn values(&self) -> impl Iterator<Item = &'a T> + 'a {
        let (path, sorted) = (self.path, self.sorted);
        path.iter().filter_map(move |&i| sorted.get(i))
    }
}

impl<T> fmt::Display for PathTaken<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Path taken:")?;
        for value in self.values() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

/// Searches the ascending `sorted` slice for `target`, probing the upper
/// middle of the remaining range each time (see
/// [`upper_mid`][crate::midpoint::upper_mid]).
///
/// `sorted` is not checked; an unsorted slice gives a meaningless answer rather
/// than an error.
pub fn search<T>(sorted: &[T], target: &T) -> Probe
where
    T: Ord,
{
    let mut path = Vec::new();
    if sorted.is_empty() {
        return Probe { index: None, path };
    }

    let (mut lo, mut hi) = (0, sorted.len() - 1);
    while lo <= hi {
        let mid = upper_mid(lo, hi);
        path.push(mid);
        tracing::trace!(lo, hi, mid, "probe");

        match sorted[mid].cmp(target) {
            Ordering::Equal => {
                return Probe {
                    index: Some(mid),
                    path,
                }
            }
            Ordering::Less => lo = mid + 1,
            // `mid == 0` means the range below is empty.
            Ordering::Greater if mid == 0 => break,
            Ordering::Greater => hi = mid - 1,
        }
    }

    Probe { index: None, path }
}
