//! Unit-sphere vertex pool
//!
//! Vertices are projected onto the unit sphere as they are inserted and are
//! never modified afterwards; the pool only grows.

use glam::Vec3;

use crate::error::{PlanetError, Result};

/// Ordered, growable collection of unit-length vertices
///
/// Insertion order is index order. [`VertexPool::midpoint`] always appends a
/// fresh vertex; callers that want shared midpoints must cache the returned
/// index themselves.
#[derive(Debug, Clone, Default)]
pub struct VertexPool {
    vertices: Vec<Vec3>,
}

impl VertexPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pool with room for `capacity` vertices
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Normalize `point` onto the unit sphere and append it
    ///
    /// # Errors
    ///
    /// Returns `DegenerateVertex` if `point` is zero-length or not finite.
    pub fn append(&mut self, point: Vec3) -> Result<usize> {
        let unit = point.try_normalize().ok_or(PlanetError::DegenerateVertex)?;
        self.vertices.push(unit);
        Ok(self.vertices.len() - 1)
    }

    /// Append the normalized average of vertices `i` and `j`
    ///
    /// # Errors
    ///
    /// Returns `VertexIndexOutOfRange` if either index is not in the pool, or
    /// `DegenerateVertex` if the two vertices are antipodal.
    pub fn midpoint(&mut self, i: usize, j: usize) -> Result<usize> {
        let a = self.get(i)?;
        let b = self.get(j)?;
        self.append((a + b) * 0.5)
    }

    /// Look up the vertex at `index`
    ///
    /// # Errors
    ///
    /// Returns `VertexIndexOutOfRange` if `index` is not in the pool.
    pub fn get(&self, index: usize) -> Result<Vec3> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(PlanetError::VertexIndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    /// Number of vertices in the pool
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the pool is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in insertion order
    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }
}
