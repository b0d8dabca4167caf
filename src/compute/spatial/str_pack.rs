//! Sort-Tile-Recursive (STR) packing.
//!
//! Given `n` items with envelopes and a node capacity `M`, STR produces
//! `ceil(n / M)` groups whose envelopes overlap little:
//!
//! 1. sort all items by envelope-centre x;
//! 2. cut them into `S = ceil(sqrt(ceil(n / M)))` vertical slices of `S * M`
//!    items each;
//! 3. sort every slice by envelope-centre y and cut it into runs of `M`.
//!
//! The index applies this once to the region entries (producing leaves) and
//! then again to each level's node envelopes until a single root remains.
//! Sorting uses `f64::total_cmp`, so packing is deterministic for a given
//! input order even with duplicate centres.

use tzlocate_types::envelope::Envelope;

/// Smallest capacity for which each packing level strictly shrinks.
pub const MIN_NODE_CAPACITY: usize = 2;

/// Partition `items` into groups of at most `capacity` using STR.
///
/// Every input item lands in exactly one group. Groups are never empty.
pub fn pack<T, F>(mut items: Vec<T>, capacity: usize, envelope_of: F) -> Vec<Vec<T>>
where
    F: Fn(&T) -> Envelope,
{
    let capacity = capacity.max(MIN_NODE_CAPACITY);
    let len = items.len();
    if len == 0 {
        return Vec::new();
    }
    if len <= capacity {
        return vec![items];
    }

    let group_count = len.div_ceil(capacity);
    let slice_count = (group_count as f64).sqrt().ceil() as usize;
    let slice_len = slice_count * capacity;

    items.sort_by(|a, b| envelope_of(a).center().x.total_cmp(&envelope_of(b).center().x));

    let mut groups = Vec::with_capacity(group_count);
    let mut remaining = items.into_iter();
    loop {
        let mut slice: Vec<T> = remaining.by_ref().take(slice_len).collect();
        if slice.is_empty() {
            break;
        }
        slice.sort_by(|a, b| envelope_of(a).center().y.total_cmp(&envelope_of(b).center().y));

        let mut run = slice.into_iter();
        loop {
            let group: Vec<T> = run.by_ref().take(capacity).collect();
            if group.is_empty() {
                break;
            }
            groups.push(group);
        }
    }

    groups
}
