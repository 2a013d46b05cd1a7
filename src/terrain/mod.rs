//! Terrain displacement
//!
//! Samples two coherent noise fields at every flat-mesh corner, pushes the
//! corner outward by the clamped elevation and computes one flat normal per
//! triangle.

mod noise_source;

pub use noise_source::{NoiseSource, TerrainNoise};

use glam::Vec3;

use crate::config::PlanetConfig;
use crate::geometry::FlatMesh;

/// Flat normal of triangle `(v0, v1, v2)` by the right-hand rule
///
/// Counter-clockwise winding seen from outside yields an outward normal.
/// Degenerate triangles yield the zero vector.
///
/// # Example
///
/// ```rust
/// use procedural_planet::{triangle_normal, Vec3};
///
/// let n = triangle_normal(Vec3::ZERO, Vec3::X, Vec3::Y);
/// assert_eq!(n, Vec3::Z);
/// ```
#[inline]
pub fn triangle_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}

/// Flat mesh after displacement
///
/// `positions` and `elevations` hold one entry per corner; `normals` holds one
/// entry per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplacedMesh {
    /// Displaced corner positions, three per triangle
    pub positions: Vec<Vec3>,
    /// Unclamped elevation per corner, used for coloring
    pub elevations: Vec<f32>,
    /// Flat normal per triangle
    pub normals: Vec<Vec3>,
}

impl DisplacedMesh {
    /// Number of corners
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.normals.len()
    }

    /// Lowest and highest unclamped elevation, `None` for an empty mesh
    pub fn elevation_range(&self) -> Option<(f32, f32)> {
        self.elevations.iter().fold(None, |range, &e| match range {
            None => Some((e, e)),
            Some((lo, hi)) => Some((lo.min(e), hi.max(e))),
        })
    }

    /// Fraction of corners whose elevation is below sea level (zero)
    pub fn submerged_fraction(&self) -> f32 {
        if self.elevations.is_empty() {
            return 0.0;
        }
        let below = self.elevations.iter().filter(|&&e| e < 0.0).count();
        below as f32 / self.elevations.len() as f32
    }
}

/// Displaces flat meshes by combined base and ridged noise
///
/// For each corner `p`:
/// - `elevation = base(p) * (ridges(p) + ridge_bias)`
/// - `p' = p * (1 + max(0, elevation) * displacement_scale)`
///
/// Negative elevation leaves the corner on the sphere (sea level) but is
/// still reported so water depth can be shaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainDisplacer {
    /// Radial growth per unit of positive elevation
    pub displacement_scale: f32,
    /// Constant added to the ridged sample
    pub ridge_bias: f32,
}

impl Default for TerrainDisplacer {
    fn default() -> Self {
        Self {
            displacement_scale: 0.075,
            ridge_bias: 0.2,
        }
    }
}

impl TerrainDisplacer {
    /// Create a displacer with explicit parameters
    pub fn new(displacement_scale: f32, ridge_bias: f32) -> Self {
        Self {
            displacement_scale,
            ridge_bias,
        }
    }

    /// Create a displacer from a planet configuration
    pub fn from_config(config: &PlanetConfig) -> Self {
        Self::new(config.displacement_scale, config.ridge_bias)
    }

    /// Elevation at a single point
    #[inline]
    pub fn elevation<A, B>(&self, point: Vec3, base: &A, ridges: &B) -> f32
    where
        A: NoiseSource + ?Sized,
        B: NoiseSource + ?Sized,
    {
        base.sample(point) * (ridges.sample(point) + self.ridge_bias)
    }

    /// Displace every corner of `mesh` and compute per-triangle normals
    ///
    /// Triangles are processed independently; corners shared by position but
    /// not by index are displaced separately.
    pub fn displace<A, B>(&self, mesh: FlatMesh, base: &A, ridges: &B) -> DisplacedMesh
    where
        A: NoiseSource + ?Sized,
        B: NoiseSource + ?Sized,
    {
        let mut positions = mesh.positions;
        let mut elevations = Vec::with_capacity(positions.len());
        let mut normals = Vec::with_capacity(positions.len() / 3);

        for triangle in positions.chunks_exact_mut(3) {
            for corner in triangle.iter_mut() {
                let elevation = self.elevation(*corner, base, ridges);
                let clamped = elevation.max(0.0);
                *corner *= 1.0 + clamped * self.displacement_scale;
                elevations.push(elevation);
            }
            normals.push(triangle_normal(triangle[0], triangle[1], triangle[2]));
        }

        // A trailing partial triangle cannot be shaded
        let whole = normals.len() * 3;
        if positions.len() != whole {
            log::warn!(
                "dropping {} trailing positions that do not form a triangle",
                positions.len() - whole
            );
            positions.truncate(whole);
        }

        DisplacedMesh {
            positions,
            elevations,
            normals,
        }
    }
}
