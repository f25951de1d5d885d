#![allow(dead_code)]

use knapsack_challenges::knapsack::Instance;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Best achievable value over every subset of items.
pub fn brute_force_optimum(instance: &Instance) -> u64 {
    let n = instance.num_items();
    let mut best = 0;
    for mask in 0u32..(1 << n) {
        let items: Vec<usize> = (0..n).filter(|&i| mask & (1 << i) != 0).collect();
        if instance.total_weight_of(&items) <= instance.capacity {
            best = best.max(instance.total_value_of(&items));
        }
    }
    best
}

/// Small random instances, including zero weights and values, that the brute
/// force oracle can handle.
pub fn random_instances(seed: u64, count: usize) -> Vec<Instance> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let n = rng.gen_range(0..=12usize);
            let weights: Vec<u64> = (0..n).map(|_| rng.gen_range(0..=20)).collect();
            let values: Vec<u64> = (0..n).map(|_| rng.gen_range(0..=30)).collect();
            let capacity = rng.gen_range(0..=weights.iter().sum::<u64>() + 5);
            Instance::new(weights, values, capacity).unwrap()
        })
        .collect()
}

pub fn scenario_a() -> Instance {
    Instance::new(vec![2, 3, 4, 5], vec![3, 4, 5, 6], 10).unwrap()
}

pub fn scenario_b() -> Instance {
    Instance::new(vec![10, 20, 30], vec![60, 100, 120], 50).unwrap()
}

pub fn scenario_c() -> Instance {
    Instance::new(vec![1, 2, 3], vec![10, 20, 30], 0).unwrap()
}

pub fn scenario_d() -> Instance {
    Instance::new(vec![5], vec![10], 5).unwrap()
}
