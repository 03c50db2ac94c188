//! Bloom post-processing configuration.
//!
//! The blur kernel radius and the tone-map constants live here instead of
//! being baked into shader text, so both blur passes always read the same
//! values.

use serde::{Deserialize, Serialize};

/// Separable-blur and tone-map constants for the bloom pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Taps on each side of the center tap (valid range: 1-128).
    pub radius: u32,
    /// Exponential soft-clamp steepness (valid range: 0.001-1.0).
    pub steepness: f32,
    /// Asymptote of the soft-clamp (valid range: 0.1-4.0).
    pub max: f32,
    /// Brightness above which pixels wash out to white (valid range: 0.0-1.0).
    pub threshold: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            radius: 50,
            steepness: 0.08,
            max: 1.0,
            threshold: 0.5,
        }
    }
}
