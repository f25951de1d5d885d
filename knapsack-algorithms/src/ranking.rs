use knapsack_challenges::knapsack::Instance;
use std::cmp::Ordering;

/// Item indices sorted by descending value-to-weight ratio.
///
/// Ratios are compared exactly by cross-multiplication. Zero-weight items rank
/// ahead of every positive-weight item regardless of value. The sort is stable,
/// so items with equal ratios keep their original index order.
pub fn rank_by_ratio(instance: &Instance) -> Vec<usize> {
    let mut items: Vec<usize> = (0..instance.num_items()).collect();
    items.sort_by(|&a, &b| {
        compare_ratio(
            (instance.values[b], instance.weights[b]),
            (instance.values[a], instance.weights[a]),
        )
    });
    items
}

/// Compares `va / wa` with `vb / wb`, treating a zero weight as an infinite ratio.
fn compare_ratio((va, wa): (u64, u64), (vb, wb): (u64, u64)) -> Ordering {
    match (wa, wb) {
        (0, 0) => Ordering::Equal,
        (0, _) => Ordering::Greater,
        (_, 0) => Ordering::Less,
        _ => (va as u128 * wb as u128).cmp(&(vb as u128 * wa as u128)),
    }
}
