//! Planet Configuration and Builder
//!
//! This module provides configuration types for deterministic planet generation.
//! Every constant the pipeline depends on lives here as a named field with a
//! documented default.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PlanetError, Result};

/// Largest subdivision level accepted by [`PlanetConfigBuilder`]
///
/// Level 10 already produces `20 * 4^10` (about 21 million) triangles.
pub const MAX_SUBDIVISIONS: u32 = 10;

/// Largest octave count accepted for either noise field
pub const MAX_OCTAVES: usize = 30;

/// Parameters for one fractal noise field
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseParams {
    /// Frequency of the first octave (lower = larger features)
    pub frequency: f64,
    /// Number of octaves layered together
    pub octaves: usize,
    /// Frequency multiplier per octave
    pub lacunarity: f64,
    /// Amplitude decay per octave (controls roughness)
    pub persistence: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            frequency: 1.0,
            octaves: 6,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl NoiseParams {
    /// Defaults for the ridged multifractal field
    ///
    /// Ridged octaves keep full amplitude (persistence 1.0); the spectral
    /// weighting alone makes higher octaves fade.
    pub fn ridged() -> Self {
        Self {
            persistence: 1.0,
            ..Self::default()
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(PlanetError::InvalidConfig(format!(
                "{} octaves must be in 1..={} (got {})",
                name, MAX_OCTAVES, self.octaves
            )));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(PlanetError::InvalidConfig(format!(
                "{} frequency must be positive (got {})",
                name, self.frequency
            )));
        }
        if !(self.lacunarity.is_finite() && self.persistence.is_finite()) {
            return Err(PlanetError::InvalidConfig(format!(
                "{} lacunarity and persistence must be finite",
                name
            )));
        }
        Ok(())
    }
}

/// Configuration for deterministic planet generation
///
/// The same configuration always produces a bit-identical mesh.
///
/// # Example
///
/// ```rust
/// use procedural_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .seed(42)
///     .subdivisions(4)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.subdivisions, 4);
/// assert_eq!(config.displacement_scale, 0.075);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetConfig {
    /// Seed for the base noise field; the ridged field uses `seed + 1`
    pub seed: u32,

    /// Number of icosphere subdivision passes
    ///
    /// Triangle count is `20 * 4^subdivisions`.
    pub subdivisions: u32,

    /// Radial displacement applied per unit of (clamped) elevation
    pub displacement_scale: f32,

    /// Constant added to the ridged noise before it scales the base noise
    ///
    /// Keeps the ridged field from fully cancelling the base shape where it
    /// approaches zero.
    pub ridge_bias: f32,

    /// Share midpoints between adjacent triangles during subdivision
    ///
    /// Off by default: every triangle creates its own midpoints.
    pub weld_midpoints: bool,

    /// Base (Perlin fBm) noise parameters
    pub base_noise: NoiseParams,

    /// Ridged multifractal noise parameters
    pub ridge_noise: NoiseParams,
}

impl PlanetConfig {
    /// Seed used for the ridged noise field
    #[inline]
    pub fn ridge_seed(&self) -> u32 {
        self.seed.wrapping_add(1)
    }

    /// Number of triangles the mesh will contain
    #[inline]
    pub fn triangle_count(&self) -> usize {
        20 * 4usize.pow(self.subdivisions)
    }
}

impl Default for PlanetConfig {
    fn default() -> Self {
        let builder = PlanetConfigBuilder::new();
        Self {
            seed: rand::random(),
            subdivisions: builder.subdivisions,
            displacement_scale: builder.displacement_scale,
            ridge_bias: builder.ridge_bias,
            weld_midpoints: builder.weld_midpoints,
            base_noise: builder.base_noise,
            ridge_noise: builder.ridge_noise,
        }
    }
}

/// Builder for creating PlanetConfig with validation
///
/// # Example
///
/// ```rust
/// use procedural_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .seed(12345)
///     .subdivisions(6)
///     .unwrap()
///     .displacement_scale(0.1)
///     .unwrap()
///     .weld_midpoints(true)
///     .build()
///     .unwrap();
///
/// assert!(config.weld_midpoints);
/// ```
#[derive(Debug, Clone)]
pub struct PlanetConfigBuilder {
    seed: Option<u32>,
    subdivisions: u32,
    displacement_scale: f32,
    ridge_bias: f32,
    weld_midpoints: bool,
    base_noise: NoiseParams,
    ridge_noise: NoiseParams,
}

impl PlanetConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - subdivisions: 8
    /// - displacement_scale: 0.075
    /// - ridge_bias: 0.2
    /// - weld_midpoints: false
    /// - base_noise: 6 octaves, frequency 1, lacunarity 2, persistence 0.5
    /// - ridge_noise: as base_noise but with persistence 1.0
    pub fn new() -> Self {
        Self {
            seed: None,
            subdivisions: 8,
            displacement_scale: 0.075,
            ridge_bias: 0.2,
            weld_midpoints: false,
            base_noise: NoiseParams::default(),
            ridge_noise: NoiseParams::ridged(),
        }
    }

    /// Set the noise seed
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of subdivision passes
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if subdivisions > 10
    pub fn subdivisions(mut self, subdivisions: u32) -> Result<Self> {
        if subdivisions > MAX_SUBDIVISIONS {
            return Err(PlanetError::InvalidConfig(format!(
                "subdivisions must be <= {} (got {})",
                MAX_SUBDIVISIONS, subdivisions
            )));
        }
        self.subdivisions = subdivisions;
        Ok(self)
    }

    /// Set the radial displacement scale
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the scale is negative or not finite
    pub fn displacement_scale(mut self, scale: f32) -> Result<Self> {
        if !(scale.is_finite() && scale >= 0.0) {
            return Err(PlanetError::InvalidConfig(format!(
                "displacement scale must be finite and >= 0 (got {})",
                scale
            )));
        }
        self.displacement_scale = scale;
        Ok(self)
    }

    /// Set the ridged noise bias
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the bias is not finite
    pub fn ridge_bias(mut self, bias: f32) -> Result<Self> {
        if !bias.is_finite() {
            return Err(PlanetError::InvalidConfig(format!(
                "ridge bias must be finite (got {})",
                bias
            )));
        }
        self.ridge_bias = bias;
        Ok(self)
    }

    /// Share subdivision midpoints between adjacent triangles
    pub fn weld_midpoints(mut self, weld: bool) -> Self {
        self.weld_midpoints = weld;
        self
    }

    /// Set the base noise parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if octaves are outside 1..=30 or frequency is not positive
    pub fn base_noise(mut self, params: NoiseParams) -> Result<Self> {
        params.validate("base noise")?;
        self.base_noise = params;
        Ok(self)
    }

    /// Set the ridged noise parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if octaves are outside 1..=30 or frequency is not positive
    pub fn ridge_noise(mut self, params: NoiseParams) -> Result<Self> {
        params.validate("ridge noise")?;
        self.ridge_noise = params;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    pub fn build(self) -> Result<PlanetConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);

        Ok(PlanetConfig {
            seed,
            subdivisions: self.subdivisions,
            displacement_scale: self.displacement_scale,
            ridge_bias: self.ridge_bias,
            weld_midpoints: self.weld_midpoints,
            base_noise: self.base_noise,
            ridge_noise: self.ridge_noise,
        })
    }
}

impl Default for PlanetConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
