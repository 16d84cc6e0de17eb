// Natural selection in a haploid two-allele population. Each generation
// every individual leaves a Poisson-distributed number of offspring with
// mean equal to its allele's relative fitness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Poisson};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub allele1: u64,
    pub allele2: u64,
}

impl Generation {
    pub fn total(&self) -> u64 {
        self.allele1 + self.allele2
    }

    /// Frequency of allele 1; 0 for an extinct population.
    pub fn freq1(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.allele1 as f64 / self.total() as f64
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct HaploidSelection {
    pub initial_population: u64,
    pub initial_freq1: f64,
    pub fitness1: f64,
    pub fitness2: f64,
}

impl HaploidSelection {
    /// Runs the simulation for `generations` generations and records the
    /// allele counts of every generation, the initial one included.
    pub fn simulate<R: Rng>(&self, generations: usize, rng: &mut R) -> Vec<Generation> {
        let mut current = Generation {
            allele1: (self.initial_population as f64 * self.initial_freq1) as u64,
            allele2: 0,
        };
        current.allele2 = self.initial_population - current.allele1;

        let mut populations = vec![current];
        for _ in 0..generations {
            current = Generation {
                allele1: Self::poisson_offspring(current.allele1, self.fitness1, rng),
                allele2: Self::poisson_offspring(current.allele2, self.fitness2, rng),
            };
            populations.push(current);
        }
        populations
    }

    /// Independent replicate runs, seeded per replicate so results are
    /// reproducible, executed in parallel.
    pub fn simulate_replicates(
        &self,
        generations: usize,
        replicates: usize,
        seed: u64,
    ) -> Vec<Vec<Generation>> {
        (0..replicates)
            .into_par_iter()
            .map(|replicate| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(replicate as u64));
                self.simulate(generations, &mut rng)
            })
            .collect()
    }

    fn poisson_offspring<R: Rng>(count: u64, fitness: f64, rng: &mut R) -> u64 {
        if count == 0 {
            return 0;
        }
        // A non-positive fitness means no offspring at all.
        let Ok(poisson) = Poisson::new(fitness) else {
            return 0;
        };
        (0..count).map(|_| poisson.sample(rng) as u64).sum()
    }
}
