//! GPU-ready mesh assembly
//!
//! Interleaves displaced positions, gradient colors and flat normals into a
//! single vertex buffer with a fixed layout:
//!
//! | attribute | float offset | components |
//! |---|---|---|
//! | position | 0 | 3 |
//! | color | 3 | 3 |
//! | normal | 6 | 3 |
//!
//! Stride is 9 floats (36 bytes). Any renderer can upload [`MeshData::as_bytes`]
//! directly and bind the attributes from [`VERTEX_LAYOUT`].

mod colors;

pub use colors::{Color, ColorGradient, ColorMapper, GradientStop};

use bytemuck::{Pod, Zeroable};

use crate::terrain::DisplacedMesh;

/// Number of `f32` values per vertex
pub const FLOATS_PER_VERTEX: usize = 9;

/// One interleaved vertex: position, RGB color, normal
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct VertexAttributeRecord {
    /// Displaced position
    pub position: [f32; 3],
    /// RGB color in `[0, 1]`
    pub color: [f32; 3],
    /// Flat normal of the owning triangle
    pub normal: [f32; 3],
}

/// A single attribute inside [`VertexAttributeRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute name as used by shaders
    pub name: &'static str,
    /// Shader input location
    pub location: u32,
    /// Offset from the start of the vertex, in floats
    pub offset: usize,
    /// Number of `f32` components
    pub components: usize,
}

impl VertexAttribute {
    /// Offset from the start of the vertex, in bytes
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.offset * std::mem::size_of::<f32>()
    }
}

/// Description of the interleaved vertex buffer layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    /// Distance between consecutive vertices, in floats
    pub stride: usize,
    /// Attributes in memory order
    pub attributes: [VertexAttribute; 3],
}

impl AttributeLayout {
    /// Distance between consecutive vertices, in bytes
    #[inline]
    pub fn byte_stride(&self) -> usize {
        self.stride * std::mem::size_of::<f32>()
    }
}

/// Layout of [`VertexAttributeRecord`]
pub const VERTEX_LAYOUT: AttributeLayout = AttributeLayout {
    stride: FLOATS_PER_VERTEX,
    attributes: [
        VertexAttribute {
            name: "position",
            location: 0,
            offset: 0,
            components: 3,
        },
        VertexAttribute {
            name: "color",
            location: 1,
            offset: 3,
            components: 3,
        },
        VertexAttribute {
            name: "normal",
            location: 2,
            offset: 6,
            components: 3,
        },
    ],
};

/// Engine-agnostic mesh data output
///
/// Non-indexed triangle list: every three consecutive vertices form one
/// triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Interleaved vertices
    pub vertices: Vec<VertexAttributeRecord>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The buffer as flat floats, `vertex_count * 9` entries
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The buffer as raw bytes for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Size of the buffer in bytes
    pub fn byte_len(&self) -> usize {
        std::mem::size_of_val(self.vertices.as_slice())
    }
}

/// Interleave a displaced mesh into a vertex buffer
///
/// Each corner gets the color of its unclamped elevation and the normal of
/// its triangle. Color channels are clamped to `[0, 1]`; alpha is dropped.
///
/// If `positions`, `elevations` and `normals` disagree on the triangle count,
/// only the triangles all three cover are emitted and a warning is logged.
pub fn assemble<C>(mesh: &DisplacedMesh, color_mapper: &C) -> MeshData
where
    C: ColorMapper + ?Sized,
{
    let triangles = (mesh.positions.len() / 3)
        .min(mesh.elevations.len() / 3)
        .min(mesh.normals.len());
    if mesh.positions.len() != triangles * 3
        || mesh.elevations.len() != triangles * 3
        || mesh.normals.len() != triangles
    {
        log::warn!(
            "mismatched mesh attributes ({} positions, {} elevations, {} normals); emitting {} triangles",
            mesh.positions.len(),
            mesh.elevations.len(),
            mesh.normals.len(),
            triangles
        );
    }

    let mut vertices = Vec::with_capacity(triangles * 3);

    let corners = mesh.positions.chunks_exact(3).zip(mesh.elevations.chunks_exact(3));
    for ((positions, elevations), normal) in corners.zip(&mesh.normals) {
        for (position, &elevation) in positions.iter().zip(elevations) {
            let [r, g, b, _] = color_mapper.color_at(elevation);
            vertices.push(VertexAttributeRecord {
                position: position.to_array(),
                color: [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)],
                normal: normal.to_array(),
            });
        }
    }

    MeshData { vertices }
}
