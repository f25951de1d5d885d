use super::Instance;
use anyhow::{anyhow, Result};
use knapsack_utils::derive_seed;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GenerationSettings {
    pub min_items: usize,
    pub max_items: usize,
    pub min_weight: u64,
    pub max_weight: u64,
    pub min_value: u64,
    pub max_value: u64,
    /// Capacity as a fraction of the total weight of all items.
    pub capacity_factor: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            min_items: 10,
            max_items: 50,
            min_weight: 1,
            max_weight: 100,
            min_value: 1,
            max_value: 100,
            capacity_factor: 0.5,
        }
    }
}

impl GenerationSettings {
    pub fn validate(&self) -> Result<()> {
        if self.min_items > self.max_items {
            return Err(anyhow!(
                "min_items ({}) is greater than max_items ({})",
                self.min_items,
                self.max_items
            ));
        }
        if self.min_weight == 0 {
            return Err(anyhow!("min_weight must be at least 1"));
        }
        if self.min_weight > self.max_weight {
            return Err(anyhow!(
                "min_weight ({}) is greater than max_weight ({})",
                self.min_weight,
                self.max_weight
            ));
        }
        if self.min_value > self.max_value {
            return Err(anyhow!(
                "min_value ({}) is greater than max_value ({})",
                self.min_value,
                self.max_value
            ));
        }
        if !(0.0..=1.0).contains(&self.capacity_factor) {
            return Err(anyhow!(
                "capacity_factor ({}) must be within [0, 1]",
                self.capacity_factor
            ));
        }
        Ok(())
    }
}

impl Instance {
    pub fn generate_instance(seed: &[u8; 32], settings: &GenerationSettings) -> Result<Self> {
        settings.validate()?;
        let mut rng = SmallRng::from_seed(seed.clone());

        let num_items = rng.gen_range(settings.min_items..=settings.max_items);
        let weights: Vec<u64> = (0..num_items)
            .map(|_| rng.gen_range(settings.min_weight..=settings.max_weight))
            .collect();
        let values: Vec<u64> = (0..num_items)
            .map(|_| rng.gen_range(settings.min_value..=settings.max_value))
            .collect();

        let total_weight = weights
            .iter()
            .try_fold(0u64, |acc, &w| acc.checked_add(w))
            .ok_or_else(|| anyhow!("Sum of generated weights overflows u64"))?;
        let capacity = (settings.capacity_factor * total_weight as f64).floor() as u64;

        Instance::new(weights, values, capacity)
    }
}

/// Generates `count` instances whose seeds are derived from `seed`, so the same
/// arguments always produce the same dataset.
pub fn generate_dataset(
    seed: &str,
    count: usize,
    settings: &GenerationSettings,
) -> Result<Vec<Instance>> {
    (0..count as u64)
        .map(|i| Instance::generate_instance(&derive_seed(seed, i), settings))
        .collect()
}
