use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// The single source of randomness for the recruitment pipeline.
/// Every operation that rolls dice borrows it explicitly, so a full run is
/// replayable given the same seed and call order.
#[derive(Debug)]
pub struct SimRng {
    inner: StdRng,
}

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        SimRng {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform in [0, 1)
    pub fn roll(&mut self) -> f32 {
        self.inner.random::<f32>()
    }

    pub fn chance(&mut self, probability: f32) -> bool {
        if probability >= 1.0 {
            return true;
        }
        if probability <= 0.0 {
            return false;
        }
        self.roll() < probability
    }

    /// Inclusive integer range. Returns `min` when the range is empty.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.inner.random_range(min..=max)
    }

    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.roll() * (max - min)
    }

    /// Symmetric jitter in [-amplitude, amplitude]
    pub fn jitter(&mut self, amplitude: f32) -> f32 {
        self.range_f32(-amplitude, amplitude)
    }

    /// Normal sample via Box-Muller.
    pub fn gaussian(&mut self, mean: f32, std_dev: f32) -> f32 {
        let u1 = 1.0 - self.inner.random::<f64>();
        let u2 = self.inner.random::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();

        mean + std_dev * z as f32
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.range_i32(0, items.len() as i32 - 1) as usize;
        items.get(idx)
    }

    /// Identifier with a random hex suffix, e.g. `neg-3fa2c91b`.
    pub fn next_id(&mut self, prefix: &str) -> String {
        format!("{}-{:08x}", prefix, self.inner.random::<u32>())
    }

    /// Weighted draw shared by every probabilistic branch in the core.
    /// Negative weights count as zero; `None` when nothing carries weight.
    pub fn weighted_choice<T: Copy>(&mut self, options: &[(T, f32)]) -> Option<T> {
        let total: f32 = options.iter().map(|(_, w)| w.max(0.0)).sum();
        if total <= 0.0 {
            return None;
        }

        let mut target = self.roll() * total;
        for (option, weight) in options {
            let weight = weight.max(0.0);
            if weight <= 0.0 {
                continue;
            }
            if target < weight {
                return Some(*option);
            }
            target -= weight;
        }

        // float drift on the last bucket
        options
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|(option, _)| *option)
    }
}

pub fn round_to_half(value: f32) -> f32 {
    (value * 2.0).round() / 2.0
}
