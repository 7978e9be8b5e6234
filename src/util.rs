/// Where a key sits relative to a sorted list, found with a lower-bound search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slot {
    /// An equal key is already stored at this index.
    Occupied(usize),
    /// The key isn't stored. Inserting it at this index keeps the list sorted.
    Vacant(usize),
}

/// Locates `key` in the ascending `sorted` slice. The index returned is the first position whose
/// element is not less than `key` (the lower bound).
pub(crate) fn lower_bound<K>(sorted: &[K], key: &K) -> Slot
where
    K: Ord,
{
    let i = sorted.partition_point(|x| x < key);
    match sorted.get(i) {
        Some(x) if x == key => Slot::Occupied(i),
        _ => Slot::Vacant(i),
    }
}
