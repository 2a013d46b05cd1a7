//! Icosphere Construction
//!
//! Builds a unit icosphere by recursively splitting each face of a regular
//! icosahedron into four and projecting the new midpoints onto the sphere.
//!
//! # Algorithm
//!
//! 1. Insert the 12 icosahedron vertices `(±1, ±φ, 0)`, `(0, ±1, ±φ)`, `(±φ, 0, ±1)`
//! 2. Start from the fixed 20-face index list (counter-clockwise seen from outside)
//! 3. Each pass replaces `(v0, v1, v2)` with `(v0, a, c)`, `(v1, b, a)`, `(v2, c, b)`, `(a, b, c)`
//!    where `a`, `b`, `c` are the midpoints of the three edges
//! 4. Resolve indices into a flat position list, three entries per triangle
//!
//! Unless welding is enabled, every triangle creates its own midpoints, so the
//! vertex pool holds `12 + 3 * Σ 20·4^k` entries and neighbouring triangles do
//! not share vertices.

use std::collections::HashMap;

use glam::Vec3;

use super::pool::VertexPool;
use crate::error::Result;

/// Three vertex indices into a [`VertexPool`], wound counter-clockwise seen from outside
pub type Triangle = [usize; 3];

/// Face list of the base icosahedron
pub const ICOSAHEDRON_FACES: [Triangle; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

/// The 12 (unnormalized) icosahedron corners, in the order [`ICOSAHEDRON_FACES`] indexes them
pub fn icosahedron_vertices() -> [Vec3; 12] {
    // Golden ratio
    let t = (1.0 + 5f32.sqrt()) * 0.5;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Index-based icosphere: the vertex pool plus the triangles referencing it
#[derive(Debug, Clone)]
pub struct IndexedIcosphere {
    /// Unit-sphere vertices
    pub pool: VertexPool,
    /// Triangles indexing into `pool`
    pub triangles: Vec<Triangle>,
}

impl IndexedIcosphere {
    /// Copy each triangle's corners into a flat position list
    pub fn flatten(&self) -> Result<FlatMesh> {
        let mut positions = Vec::with_capacity(self.triangles.len() * 3);
        for triangle in &self.triangles {
            for &index in triangle {
                positions.push(self.pool.get(index)?);
            }
        }
        Ok(FlatMesh { positions })
    }
}

/// Triangle soup: three consecutive positions form one triangle
///
/// Each triangle owns independent copies of its corners.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatMesh {
    /// Corner positions, `3 * triangle_count` entries
    pub positions: Vec<Vec3>,
}

impl FlatMesh {
    /// Number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of positions
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over triangles as `[v0, v1, v2]` slices
    pub fn triangles(&self) -> impl Iterator<Item = &[Vec3]> {
        self.positions.chunks_exact(3)
    }
}

/// Builds subdivided icospheres
#[derive(Debug, Clone, Copy, Default)]
pub struct IcosphereBuilder {
    weld: bool,
}

impl IcosphereBuilder {
    /// Builder that creates fresh midpoints for every triangle
    pub fn new() -> Self {
        Self::default()
    }

    /// Share midpoints between triangles that have a common edge
    ///
    /// Welding changes the pool size but not the triangle count.
    pub fn welded(mut self, weld: bool) -> Self {
        self.weld = weld;
        self
    }

    /// Build the icosphere and resolve it into a flat triangle list
    ///
    /// Produces `20 * 4^subdivisions` triangles with every corner on the unit sphere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use procedural_planet::IcosphereBuilder;
    ///
    /// let mesh = IcosphereBuilder::new().build(1).unwrap();
    /// assert_eq!(mesh.triangle_count(), 80);
    /// assert_eq!(mesh.vertex_count(), 240);
    /// ```
    pub fn build(&self, subdivisions: u32) -> Result<FlatMesh> {
        self.build_indexed(subdivisions)?.flatten()
    }

    /// Build the icosphere, keeping the shared vertex pool and index list
    pub fn build_indexed(&self, subdivisions: u32) -> Result<IndexedIcosphere> {
        let mut pool = VertexPool::with_capacity(self.pool_capacity(subdivisions));
        for corner in icosahedron_vertices() {
            pool.append(corner)?;
        }

        let mut triangles = ICOSAHEDRON_FACES.to_vec();
        for _ in 0..subdivisions {
            triangles = self.subdivide(&mut pool, &triangles)?;
        }

        Ok(IndexedIcosphere { pool, triangles })
    }

    /// Split every triangle into four
    fn subdivide(&self, pool: &mut VertexPool, triangles: &[Triangle]) -> Result<Vec<Triangle>> {
        let mut next = Vec::with_capacity(triangles.len() * 4);
        let mut edge_midpoints = self.weld.then(HashMap::new);

        for &[v0, v1, v2] in triangles {
            let a = self.midpoint(pool, &mut edge_midpoints, v0, v1)?;
            let b = self.midpoint(pool, &mut edge_midpoints, v1, v2)?;
            let c = self.midpoint(pool, &mut edge_midpoints, v2, v0)?;

            next.push([v0, a, c]);
            next.push([v1, b, a]);
            next.push([v2, c, b]);
            next.push([a, b, c]);
        }

        Ok(next)
    }

    /// Midpoint of edge `(i, j)`, reusing the cached one when welding
    fn midpoint(
        &self,
        pool: &mut VertexPool,
        edge_midpoints: &mut Option<HashMap<(usize, usize), usize>>,
        i: usize,
        j: usize,
    ) -> Result<usize> {
        let Some(edge_midpoints) = edge_midpoints else {
            return pool.midpoint(i, j);
        };
        let key = if i < j { (i, j) } else { (j, i) };
        if let Some(&index) = edge_midpoints.get(&key) {
            return Ok(index);
        }
        let index = pool.midpoint(i, j)?;
        edge_midpoints.insert(key, index);
        Ok(index)
    }

    /// Final pool size for `subdivisions` passes
    fn pool_capacity(&self, subdivisions: u32) -> usize {
        if self.weld {
            10 * 4usize.pow(subdivisions) + 2
        } else {
            // Each pass adds three midpoints per existing triangle
            12 + (0..subdivisions).map(|k| 60 * 4usize.pow(k)).sum::<usize>()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_base_icosahedron() {
        let mesh = IcosphereBuilder::new().build(0).unwrap();
        assert_eq!(mesh.triangle_count(), 20);
        assert_eq!(mesh.vertex_count(), 60);

        let indexed = IcosphereBuilder::new().build_indexed(0).unwrap();
        assert_eq!(indexed.pool.len(), 12);
        assert_eq!(indexed.triangles, ICOSAHEDRON_FACES.to_vec());
    }

    #[test]
    fn test_triangle_count_quadruples() {
        let mut previous = None;
        for n in 0..=4 {
            let mesh = IcosphereBuilder::new().build(n).unwrap();
            assert_eq!(mesh.triangle_count(), 20 * 4usize.pow(n));
            assert_eq!(mesh.vertex_count(), 3 * mesh.triangle_count());
            if let Some(prev) = previous {
                assert_eq!(mesh.triangle_count(), prev * 4);
            }
            previous = Some(mesh.triangle_count());
        }
    }

    #[test]
    fn test_positions_on_unit_sphere() {
        for n in 0..=3 {
            let mesh = IcosphereBuilder::new().build(n).unwrap();
            for p in &mesh.positions {
                assert!(
                    (p.length() - 1.0).abs() < EPSILON,
                    "Position {:?} has length {} at subdivision {}",
                    p,
                    p.length(),
                    n
                );
            }
        }
    }

    #[test]
    fn test_unwelded_pool_size() {
        let indexed = IcosphereBuilder::new().build_indexed(1).unwrap();
        assert_eq!(indexed.pool.len(), 12 + 60);

        let indexed = IcosphereBuilder::new().build_indexed(2).unwrap();
        assert_eq!(indexed.pool.len(), 12 + 60 + 240);
    }

    #[test]
    fn test_welded_pool_size() {
        for n in 0..=4 {
            let indexed = IcosphereBuilder::new().welded(true).build_indexed(n).unwrap();
            assert_eq!(indexed.pool.len(), 10 * 4usize.pow(n) + 2);
            assert_eq!(indexed.triangles.len(), 20 * 4usize.pow(n));
        }
    }

    #[test]
    fn test_welding_does_not_move_vertices() {
        let plain = IcosphereBuilder::new().build(2).unwrap();
        let welded = IcosphereBuilder::new().welded(true).build(2).unwrap();

        assert_eq!(plain.vertex_count(), welded.vertex_count());
        for (a, b) in plain.positions.iter().zip(&welded.positions) {
            assert!((*a - *b).length() < EPSILON);
        }
    }

    #[test]
    fn test_faces_wound_outward() {
        for n in 0..=2 {
            let mesh = IcosphereBuilder::new().build(n).unwrap();
            for tri in mesh.triangles() {
                let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
                let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
                assert!(normal.dot(centroid) > 0.0, "Triangle {:?} faces inward", tri);
            }
        }
    }

    #[test]
    fn test_golden_ratio_corners() {
        let t = (1.0 + 5f32.sqrt()) / 2.0;
        let corners = icosahedron_vertices();
        assert_eq!(corners[0], Vec3::new(-1.0, t, 0.0));
        assert_eq!(corners[9], Vec3::new(t, 0.0, 1.0));
        // t² = t + 1
        assert!((t * t - (t + 1.0)).abs() < EPSILON);
        for corner in corners {
            assert!((corner.length_squared() - (1.0 + t * t)).abs() < EPSILON);
        }
    }

    #[test]
    fn test_unwelded_midpoints_not_shared() {
        let indexed = IcosphereBuilder::new().build_indexed(1).unwrap();
        let mut seen = std::collections::HashSet::new();
        for triangle in &indexed.triangles {
            for &index in triangle {
                if index >= 12 {
                    seen.insert(index);
                }
            }
        }
        // Each parent triangle owns three midpoints, each used by three children
        assert_eq!(seen.len(), 60);
        let per_index = indexed
            .triangles
            .iter()
            .flatten()
            .filter(|&&index| index >= 12)
            .count();
        assert_eq!(per_index, 60 * 3);
    }

    #[test]
    fn test_icosahedron_edges_equal_length() {
        let indexed = IcosphereBuilder::new().build_indexed(0).unwrap();
        let edge = |i: usize, j: usize| {
            (indexed.pool.get(i).unwrap() - indexed.pool.get(j).unwrap()).length()
        };
        let expected = edge(0, 11);
        for &[a, b, c] in &indexed.triangles {
            for len in [edge(a, b), edge(b, c), edge(c, a)] {
                assert!((len - expected).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_every_edge_shared_by_two_faces() {
        let mut edges: HashMap<(usize, usize), usize> = HashMap::new();
        for &[a, b, c] in ICOSAHEDRON_FACES.iter() {
            for (i, j) in [(a, b), (b, c), (c, a)] {
                *edges.entry((i.min(j), i.max(j))).or_insert(0) += 1;
            }
        }
        assert_eq!(edges.len(), 30);
        assert!(edges.values().all(|&count| count == 2));
    }
}
