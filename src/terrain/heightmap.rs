//! Fractal sum of octave noise layers into a raw elevation.

use serde::{Deserialize, Serialize};

use super::noise::{NoiseConfig, NoiseSampler, OctaveNoise};
use crate::models::grid::SamplePoint;

/// Multiplier applied to the weighted layer sum
pub const AMPLITUDE: f64 = 20.0;

/// One noise layer in the sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub octaves: u32,
    pub weight: f64,
}

impl LayerConfig {
    pub fn new(octaves: u32, weight: f64) -> Self {
        Self { octaves, weight }
    }
}

/// Height combination parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightConfig {
    pub amplitude: f64,

    /// Layers in summation order, coarsest first
    pub layers: Vec<LayerConfig>,
}

impl Default for HeightConfig {
    fn default() -> Self {
        Self {
            amplitude: AMPLITUDE,
            layers: vec![
                LayerConfig::new(3, 1.0),
                LayerConfig::new(6, 0.5),
                LayerConfig::new(12, 0.25),
                LayerConfig::new(24, 0.125),
            ],
        }
    }
}

impl HeightConfig {
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Noise configuration for each layer. Layer `i` is seeded with `seed + i`.
    pub fn noise_configs(&self, seed: u32) -> Vec<NoiseConfig> {
        self.layers
            .iter()
            .zip(0u32..)
            .map(|(layer, i)| NoiseConfig::new(seed.wrapping_add(i), layer.octaves))
            .collect()
    }
}

/// Long-lived set of noise samplers, built once per run and shared by reference.
pub struct HeightGenerator<S = OctaveNoise> {
    amplitude: f64,
    layers: Vec<(S, f64)>,
}

impl HeightGenerator<OctaveNoise> {
    pub fn new(config: &HeightConfig, seed: u32) -> Self {
        let samplers = config
            .noise_configs(seed)
            .into_iter()
            .map(OctaveNoise::new)
            .collect();
        Self::from_samplers(config, samplers)
    }
}

impl<S: NoiseSampler> HeightGenerator<S> {
    /// Pair pre-built samplers with the weights in `config`.
    ///
    /// Samplers beyond the configured layer count are ignored.
    pub fn from_samplers(config: &HeightConfig, samplers: Vec<S>) -> Self {
        let layers = samplers
            .into_iter()
            .zip(config.layers.iter().map(|l| l.weight))
            .collect();

        Self {
            amplitude: config.amplitude,
            layers,
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Raw, unclamped elevation at `point`
    pub fn elevation(&self, point: SamplePoint) -> f64 {
        let sum: f64 = self
            .layers
            .iter()
            .map(|(sampler, weight)| weight * sampler.sample(point))
            .sum();
        sum * self.amplitude
    }
}
