use std::time::Duration;

use charge_field::prelude::Charge;
use criterion::{Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

fn rand_in(rng: &mut StdRng, lo: f64, hi: f64) -> f64 {
    let t = rng.next_u32() as f64 / (u32::MAX as f64 + 1.0);
    lo + (hi - lo) * t
}

/// `n` charges with `q` in [-3, 3] scattered over `(-extent, extent)²`.
pub fn random_charges(n: usize, extent: f64, seed: u64) -> Vec<Charge> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Charge::new(
                rand_in(&mut rng, -3.0, 3.0),
                rand_in(&mut rng, -extent, extent),
                rand_in(&mut rng, -extent, extent),
            )
        })
        .collect()
}
