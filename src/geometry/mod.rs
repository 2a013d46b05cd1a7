//! Icosphere geometry
//!
//! Vertex pool and recursive icosahedron subdivision.

mod icosphere;
mod pool;

pub use icosphere::{
    icosahedron_vertices, FlatMesh, IcosphereBuilder, IndexedIcosphere, Triangle,
    ICOSAHEDRON_FACES,
};
pub use pool::VertexPool;
