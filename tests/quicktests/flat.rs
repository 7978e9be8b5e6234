use midpoint_bst::flat;
use midpoint_bst::midpoint::upper_mid;
use quickcheck_macros::quickcheck;

/// Sorts and dedups the input so it meets `flat::search`'s precondition.
fn sorted(mut xs: Vec<i16>) -> Vec<i16> {
    xs.sort_unstable();
    xs.dedup();
    xs
}

#[quickcheck]
fn agrees_with_std(xs: Vec<i16>, target: i16) -> bool {
    let xs = sorted(xs);
    let probe = flat::search(&xs, &target);

    probe.index == xs.binary_search(&target).ok()
}

#[quickcheck]
fn path_ends_at_match(xs: Vec<i16>, target: i16) -> bool {
    let xs = sorted(xs);
    let probe = flat::search(&xs, &target);

    match probe.index {
        Some(i) => probe.path.last() == Some(&i) && xs[i] == target,
        None => probe.path.iter().all(|&i| xs[i] != target),
    }
}

/// Replays the bounds from the probed values and checks each probe is the upper middle of them.
#[quickcheck]
fn probes_follow_upper_mid(xs: Vec<i16>, target: i16) -> bool {
    let xs = sorted(xs);
    let probe = flat::search(&xs, &target);
    if xs.is_empty() {
        return probe.path.is_empty();
    }

    let (mut lo, mut hi) = (0, xs.len() - 1);
    for &mid in &probe.path {
        if mid != upper_mid(lo, hi) {
            return false;
        }
        if xs[mid] < target {
            lo = mid + 1;
        } else if xs[mid] > target && mid > 0 {
            hi = mid - 1;
        }
    }
    true
}

#[quickcheck]
fn path_is_logarithmic(xs: Vec<i16>, target: i16) -> bool {
    let xs = sorted(xs);
    let probe = flat::search(&xs, &target);
    let bound = (usize::BITS - xs.len().leading_zeros()) as usize;

    probe.path.len() <= bound
}
