//! Seeded randomness for jittered tile placement

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Random source passed explicitly into synthesis
///
/// A seed of zero requests a generator seeded from the wall clock; any other
/// seed is fully deterministic.
pub struct JitterSource {
    rng: StdRng,
    seed: u64,
}

impl JitterSource {
    /// Create a random source following the seed policy
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { time_seed() } else { seed };
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed actually used, resolved from the clock when zero was requested
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw `base + U(-var, var)`
    ///
    /// A zero `var` returns `base` exactly but still consumes one draw, so the
    /// sequence of later draws does not depend on which parameters are jittered.
    pub fn uniform_jitter(&mut self, base: f32, var: f32) -> f32 {
        base + self.rng.random::<f32>().mul_add(2.0 * var, -var)
    }

    /// Underlying generator, for consumers that need raw samples
    pub const fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64);
    // Zero would be re-read as "use the clock"
    nanos.max(1)
}
