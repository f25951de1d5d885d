//! Seeded genetic algorithm over 0/1 selections.
//!
//! Each generation picks parents by tournament, recombines them with a single
//! crossover point and flips genes at `mutation_rate`. The fittest
//! `elite_size` individuals survive unchanged. Overweight individuals score
//! zero. The best feasible selection seen in any generation is returned.

use crate::{Solver, SolverKind};
use anyhow::{anyhow, Result};
use knapsack_challenges::knapsack::{Instance, Solution};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GeneticSettings {
    pub population_size: usize,
    pub generations: usize,
    /// Probability of flipping each gene of each offspring.
    pub mutation_rate: f64,
    pub elite_size: usize,
    pub tournament_size: usize,
    pub seed: u64,
}

impl Default for GeneticSettings {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            mutation_rate: 0.1,
            elite_size: 10,
            tournament_size: 5,
            seed: 0,
        }
    }
}

impl GeneticSettings {
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(anyhow!("population_size must be at least 1"));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(anyhow!(
                "tournament_size ({}) must be within [1, population_size ({})]",
                self.tournament_size,
                self.population_size
            ));
        }
        if self.elite_size > self.population_size {
            return Err(anyhow!(
                "elite_size ({}) is greater than population_size ({})",
                self.elite_size,
                self.population_size
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(anyhow!(
                "mutation_rate ({}) must be within [0, 1]",
                self.mutation_rate
            ));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct Genetic {
    pub settings: GeneticSettings,
}

impl Solver for Genetic {
    fn kind(&self) -> SolverKind {
        SolverKind::Genetic
    }

    fn solve(&self, instance: &Instance) -> Result<Solution> {
        solve(instance, &self.settings)
    }
}

/// Checks `settings` and the stricter input this solver needs: every weight,
/// every value and the capacity must be positive.
pub fn validate(instance: &Instance, settings: &GeneticSettings) -> Result<()> {
    settings.validate()?;
    instance.validate()?;
    if let Some(i) = instance.weights.iter().position(|&w| w == 0) {
        return Err(anyhow!("Weight of item {} must be positive", i));
    }
    if let Some(i) = instance.values.iter().position(|&v| v == 0) {
        return Err(anyhow!("Value of item {} must be positive", i));
    }
    if instance.capacity == 0 {
        return Err(anyhow!("Capacity must be positive"));
    }
    Ok(())
}

#[derive(Clone)]
struct Individual {
    genes: Vec<u8>,
    fitness: u64,
    weight: u64,
}

impl Individual {
    fn new(instance: &Instance, genes: Vec<u8>) -> Self {
        let mut value = 0;
        let mut weight = 0;
        for (i, &gene) in genes.iter().enumerate() {
            if gene == 1 {
                value += instance.values[i];
                weight += instance.weights[i];
            }
        }
        let fitness = if weight <= instance.capacity { value } else { 0 };
        Self {
            genes,
            fitness,
            weight,
        }
    }
}

pub fn solve(instance: &Instance, settings: &GeneticSettings) -> Result<Solution> {
    validate(instance, settings)?;
    let num_items = instance.num_items();
    let population_size = settings.population_size;
    let mut rng = SmallRng::seed_from_u64(settings.seed);

    let mut population: Vec<Individual> = (0..population_size)
        .map(|_| {
            let genes = (0..num_items).map(|_| rng.gen_range(0..=1u8)).collect();
            Individual::new(instance, genes)
        })
        .collect();
    let mut best = Solution::empty(instance);
    let mut contestants: Vec<usize> = (0..population_size).collect();

    for _ in 0..settings.generations {
        keep_best(instance, &population, &mut best);

        let parents: Vec<&[u8]> = (0..population_size)
            .map(|_| {
                let winner = tournament(
                    &population,
                    &mut contestants,
                    settings.tournament_size,
                    &mut rng,
                );
                population[winner].genes.as_slice()
            })
            .collect();
        let mut offspring = crossover(&parents, &mut rng);
        for genes in offspring.iter_mut() {
            for gene in genes.iter_mut() {
                if rng.gen::<f64>() < settings.mutation_rate {
                    *gene = 1 - *gene;
                }
            }
        }

        // stable, so equally fit individuals keep their population order
        let mut ranked: Vec<usize> = (0..population_size).collect();
        ranked.sort_by_key(|&i| Reverse(population[i].fitness));
        let mut next: Vec<Individual> = ranked[..settings.elite_size]
            .iter()
            .map(|&i| population[i].clone())
            .collect();
        next.extend(
            offspring
                .into_iter()
                .take(population_size - settings.elite_size)
                .map(|genes| Individual::new(instance, genes)),
        );
        population = next;
    }
    keep_best(instance, &population, &mut best);

    Ok(best)
}

fn keep_best(instance: &Instance, population: &[Individual], best: &mut Solution) {
    for individual in population {
        if individual.weight <= instance.capacity && individual.fitness > best.total_value {
            let selected_items = (0..individual.genes.len())
                .filter(|&i| individual.genes[i] == 1)
                .collect();
            *best = Solution::from_items(instance, selected_items);
        }
    }
}

/// Index of the fittest of `size` distinct individuals drawn at random. Ties go
/// to the first drawn.
fn tournament(
    population: &[Individual],
    contestants: &mut [usize],
    size: usize,
    rng: &mut SmallRng,
) -> usize {
    for j in 0..size {
        let k = rng.gen_range(j..contestants.len());
        contestants.swap(j, k);
    }
    let mut winner = contestants[0];
    for &i in &contestants[1..size] {
        if population[i].fitness > population[winner].fitness {
            winner = i;
        }
    }
    winner
}

/// Single-point crossover of consecutive parent pairs. An unpaired last parent,
/// or genomes too short to split, are copied through.
fn crossover(parents: &[&[u8]], rng: &mut SmallRng) -> Vec<Vec<u8>> {
    let mut offspring = Vec::with_capacity(parents.len());
    for pair in parents.chunks(2) {
        match pair {
            [a, b] if a.len() >= 2 => {
                let point = rng.gen_range(1..a.len());
                offspring.push([&a[..point], &b[point..]].concat());
                offspring.push([&b[..point], &a[point..]].concat());
            }
            _ => offspring.extend(pair.iter().map(|genes| genes.to_vec())),
        }
    }
    offspring
}
