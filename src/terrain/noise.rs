use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::models::grid::SamplePoint;

/// Configuration for a single coherent noise layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Random seed for reproducible generation
    pub seed: u32,

    /// Spatial frequency multiplier over the unit square.
    /// Higher values give finer detail.
    pub octaves: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self { seed: 0, octaves: 1 }
    }
}

impl NoiseConfig {
    pub fn new(seed: u32, octaves: u32) -> Self {
        Self { seed, octaves }
    }
}

/// Anything that can be sampled as 2D noise over the unit square.
pub trait NoiseSampler {
    /// Value at `point`, approximately in `[-1, 1]`
    fn sample(&self, point: SamplePoint) -> f64;
}

impl<T: NoiseSampler + ?Sized> NoiseSampler for Box<T> {
    fn sample(&self, point: SamplePoint) -> f64 {
        (**self).sample(point)
    }
}

/// Perlin noise scaled by an octave count
pub struct OctaveNoise {
    perlin: Perlin,
    config: NoiseConfig,
}

impl OctaveNoise {
    pub fn new(config: NoiseConfig) -> Self {
        Self {
            perlin: Perlin::new(config.seed),
            config,
        }
    }
}

impl NoiseSampler for OctaveNoise {
    fn sample(&self, point: SamplePoint) -> f64 {
        let scale = self.config.octaves as f64;
        self.perlin.get([point.row * scale, point.col * scale])
    }
}
