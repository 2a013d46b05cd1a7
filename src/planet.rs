//! ProceduralPlanet pipeline entry point

use crate::config::PlanetConfig;
use crate::error::Result;
use crate::geometry::IcosphereBuilder;
use crate::mesh::{assemble, ColorGradient, ColorMapper, MeshData};
use crate::terrain::{NoiseSource, TerrainDisplacer, TerrainNoise};

/// Summary of a generated planet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetStats {
    /// Number of triangles in the mesh
    pub triangle_count: usize,
    /// Number of vertices in the mesh (three per triangle)
    pub vertex_count: usize,
    /// Number of distinct vertices created during subdivision
    pub pool_vertex_count: usize,
    /// Lowest unclamped elevation
    pub min_elevation: f32,
    /// Highest unclamped elevation
    pub max_elevation: f32,
    /// Fraction of vertices below sea level
    pub submerged_fraction: f32,
    /// Size of the vertex buffer in bytes
    pub buffer_bytes: usize,
}

/// A generated planet mesh
///
/// Runs the whole pipeline: icosphere subdivision, noise displacement,
/// gradient coloring and vertex interleaving.
///
/// # Examples
///
/// ```
/// use procedural_planet::*;
///
/// let config = PlanetConfigBuilder::new()
///     .seed(42)
///     .subdivisions(3)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let planet = ProceduralPlanet::generate(config).unwrap();
/// assert_eq!(planet.mesh().triangle_count(), 1280);
/// assert_eq!(planet.mesh().as_floats().len(), 1280 * 3 * 9);
/// ```
#[derive(Debug, Clone)]
pub struct ProceduralPlanet {
    /// Configuration used to generate this planet
    config: PlanetConfig,

    /// Interleaved vertex buffer
    mesh: MeshData,

    /// Generation summary
    stats: PlanetStats,
}

impl ProceduralPlanet {
    /// Generate a planet with Perlin/ridged terrain and the default terrain gradient
    pub fn generate(config: PlanetConfig) -> Result<Self> {
        let noise = TerrainNoise::from_config(&config);
        Self::generate_with_noise(config, &noise.base, &noise.ridges, &ColorGradient::terrain())
    }

    /// Generate a planet with custom noise fields and color mapping
    ///
    /// # Example
    ///
    /// ```
    /// use procedural_planet::*;
    ///
    /// let config = PlanetConfigBuilder::new()
    ///     .seed(1)
    ///     .subdivisions(1)
    ///     .unwrap()
    ///     .build()
    ///     .unwrap();
    /// let flat = procedural_planet::noise::Constant::new(0.0);
    ///
    /// let planet =
    ///     ProceduralPlanet::generate_with_noise(config, &flat, &flat, &ColorGradient::terrain())
    ///         .unwrap();
    /// assert_eq!(planet.stats().max_elevation, 0.0);
    /// ```
    pub fn generate_with_noise<A, B, C>(
        config: PlanetConfig,
        base: &A,
        ridges: &B,
        color_mapper: &C,
    ) -> Result<Self>
    where
        A: NoiseSource + ?Sized,
        B: NoiseSource + ?Sized,
        C: ColorMapper + ?Sized,
    {
        let icosphere = IcosphereBuilder::new()
            .welded(config.weld_midpoints)
            .build_indexed(config.subdivisions)?;
        let pool_vertex_count = icosphere.pool.len();
        log::debug!(
            "subdivided icosphere: {} pool vertices, {} triangles",
            pool_vertex_count,
            icosphere.triangles.len()
        );

        let flat = icosphere.flatten()?;
        drop(icosphere);

        let displaced = TerrainDisplacer::from_config(&config).displace(flat, base, ridges);
        let (min_elevation, max_elevation) = displaced.elevation_range().unwrap_or((0.0, 0.0));
        log::debug!(
            "displaced terrain: elevation {:.3}..{:.3}",
            min_elevation,
            max_elevation
        );

        let mesh = assemble(&displaced, color_mapper);

        let stats = PlanetStats {
            triangle_count: mesh.triangle_count(),
            vertex_count: mesh.vertex_count(),
            pool_vertex_count,
            min_elevation,
            max_elevation,
            submerged_fraction: displaced.submerged_fraction(),
            buffer_bytes: mesh.byte_len(),
        };

        log::info!(
            "generated planet (seed {}, {} subdivisions): {} triangles, {} bytes",
            config.seed,
            config.subdivisions,
            stats.triangle_count,
            stats.buffer_bytes
        );

        Ok(Self { config, mesh, stats })
    }

    /// Get the configuration used to generate this planet
    #[inline]
    pub fn config(&self) -> &PlanetConfig {
        &self.config
    }

    /// Get the interleaved vertex buffer
    #[inline]
    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    /// Take ownership of the vertex buffer, e.g. to hand it to a renderer
    #[inline]
    pub fn into_mesh(self) -> MeshData {
        self.mesh
    }

    /// Get the generation summary
    #[inline]
    pub fn stats(&self) -> &PlanetStats {
        &self.stats
    }
}
