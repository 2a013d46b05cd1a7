//! Procedural icosphere planet generation
//!
//! Builds a subdivided icosphere, displaces it with coherent noise into
//! terrain, colors it by elevation and interleaves everything into a vertex
//! buffer ready for GPU upload. Engine-agnostic: the output is plain floats.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use procedural_planet::*;
//!
//! // Generate a planet
//! let config = PlanetConfigBuilder::new()
//!     .seed(42)
//!     .subdivisions(6).unwrap()
//!     .build().unwrap();
//!
//! let planet = ProceduralPlanet::generate(config).unwrap();
//!
//! // Upload planet.mesh().as_bytes() with VERTEX_LAYOUT
//! println!("Generated {} triangles", planet.mesh().triangle_count());
//! ```
//!
//! # Pipeline
//!
//! 1. [`IcosphereBuilder`] subdivides an icosahedron over a [`VertexPool`]
//! 2. The triangles are flattened into a [`FlatMesh`] (no shared corners)
//! 3. [`TerrainDisplacer`] pushes corners outward and computes flat normals
//! 4. [`ColorGradient`] turns elevation into color
//! 5. [`assemble`] interleaves position, color and normal (9 floats per vertex)
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration and gradients

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod terrain;
pub mod mesh;
pub mod planet;
pub mod shader;

// Re-export core types for convenience
pub use error::{PlanetError, Result};
pub use config::{NoiseParams, PlanetConfig, PlanetConfigBuilder};
pub use geometry::{FlatMesh, IcosphereBuilder, IndexedIcosphere, Triangle, VertexPool};
pub use terrain::{triangle_normal, DisplacedMesh, NoiseSource, TerrainDisplacer, TerrainNoise};
pub use mesh::{
    assemble, AttributeLayout, Color, ColorGradient, ColorMapper, GradientStop, MeshData,
    VertexAttribute, VertexAttributeRecord, FLOATS_PER_VERTEX, VERTEX_LAYOUT,
};
pub use planet::{PlanetStats, ProceduralPlanet};
pub use shader::ShaderSources;

// Re-export glam::Vec3 and the noise crate for convenience
pub use glam::Vec3;
pub use noise;
