//! Noise fields sampled by the terrain displacer

use glam::Vec3;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin, RidgedMulti};

use crate::config::{NoiseParams, PlanetConfig};

/// Scalar field over 3D space, roughly in `[-1, 1]`
///
/// Must be deterministic: the same point always yields the same value.
/// Every `noise::NoiseFn<f64, 3>` is a `NoiseSource`.
pub trait NoiseSource {
    /// Sample the field at `point`
    fn sample(&self, point: Vec3) -> f32;
}

impl<N> NoiseSource for N
where
    N: NoiseFn<f64, 3>,
{
    #[inline]
    fn sample(&self, point: Vec3) -> f32 {
        self.get([point.x as f64, point.y as f64, point.z as f64]) as f32
    }
}

/// The two fields that shape the planet: Perlin fBm for the continents and a
/// ridged multifractal for mountain ranges and basins
#[derive(Clone, Debug)]
pub struct TerrainNoise {
    /// Continental base shape
    pub base: Fbm<Perlin>,
    /// Ridged mountain field
    pub ridges: RidgedMulti<Perlin>,
}

impl TerrainNoise {
    /// Build both fields with explicit seeds and parameters
    pub fn new(base_seed: u32, base: &NoiseParams, ridge_seed: u32, ridges: &NoiseParams) -> Self {
        Self {
            base: Fbm::<Perlin>::new(base_seed)
                .set_octaves(base.octaves)
                .set_frequency(base.frequency)
                .set_lacunarity(base.lacunarity)
                .set_persistence(base.persistence),
            ridges: RidgedMulti::<Perlin>::new(ridge_seed)
                .set_octaves(ridges.octaves)
                .set_frequency(ridges.frequency)
                .set_lacunarity(ridges.lacunarity)
                .set_persistence(ridges.persistence),
        }
    }

    /// Build both fields from a planet configuration
    pub fn from_config(config: &PlanetConfig) -> Self {
        Self::new(
            config.seed,
            &config.base_noise,
            config.ridge_seed(),
            &config.ridge_noise,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanetConfigBuilder;

    fn sample_points() -> Vec<Vec3> {
        vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.577, 0.577, 0.577),
            Vec3::new(-0.5, 0.5, 0.707),
            Vec3::new(0.3, -0.8, 0.52),
        ]
    }

    #[test]
    fn test_constant_noise_source() {
        let constant = noise::Constant::new(0.25);
        assert_eq!(constant.sample(Vec3::new(3.0, -2.0, 1.0)), 0.25);
    }

    #[test]
    fn test_determinism() {
        let config = PlanetConfigBuilder::new().seed(42).build().unwrap();
        let a = TerrainNoise::from_config(&config);
        let b = TerrainNoise::from_config(&config);

        for p in sample_points() {
            assert_eq!(a.base.sample(p), b.base.sample(p));
            assert_eq!(a.ridges.sample(p), b.ridges.sample(p));
        }
    }

    #[test]
    fn test_different_seeds() {
        let a = TerrainNoise::from_config(&PlanetConfigBuilder::new().seed(42).build().unwrap());
        let b = TerrainNoise::from_config(&PlanetConfigBuilder::new().seed(999).build().unwrap());

        let differs = sample_points()
            .into_iter()
            .any(|p| a.base.sample(p) != b.base.sample(p));
        assert!(differs, "Different seeds should produce different fields");
    }

    #[test]
    fn test_default_fields_match_library_generators() {
        let config = PlanetConfigBuilder::new().seed(42).build().unwrap();
        let terrain = TerrainNoise::from_config(&config);

        let base = Fbm::<Perlin>::new(42)
            .set_octaves(6)
            .set_frequency(1.0)
            .set_lacunarity(2.0)
            .set_persistence(0.5);
        let ridges = RidgedMulti::<Perlin>::new(43).set_lacunarity(2.0);

        for p in sample_points() {
            assert_eq!(terrain.base.sample(p), base.sample(p));
            assert_eq!(terrain.ridges.sample(p), ridges.sample(p));
        }
    }

    #[test]
    fn test_values_roughly_in_range() {
        let noise = TerrainNoise::from_config(&PlanetConfigBuilder::new().seed(7).build().unwrap());
        for p in sample_points() {
            let base = noise.base.sample(p);
            let ridges = noise.ridges.sample(p);
            assert!(base.is_finite() && base.abs() <= 1.5, "base {} out of range", base);
            assert!(ridges.is_finite() && ridges.abs() <= 1.5, "ridges {} out of range", ridges);
        }
    }
}
