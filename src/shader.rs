//! Shader source loading
//!
//! The crate does not compile shaders; it only reads the vertex and fragment
//! sources a renderer needs to pair with [`VERTEX_LAYOUT`](crate::VERTEX_LAYOUT).

use std::fs;
use std::path::Path;

use crate::error::{PlanetError, Result};

/// Vertex and fragment shader sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex stage source
    pub vertex: String,
    /// Fragment stage source
    pub fragment: String,
}

impl ShaderSources {
    /// Read both stages from disk
    ///
    /// # Errors
    ///
    /// Returns `ShaderSource` naming the first file that could not be read.
    pub fn load(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Result<Self> {
        let vertex = read_source(vertex_path.as_ref())?;
        let fragment = read_source(fragment_path.as_ref())?;
        log::debug!(
            "loaded shader sources ({} + {} bytes)",
            vertex.len(),
            fragment.len()
        );
        Ok(Self { vertex, fragment })
    }

    /// Wrap sources that are already in memory
    pub fn from_strings(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PlanetError::ShaderSource {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sources() {
        let dir = tempfile::tempdir().unwrap();
        let vert = dir.path().join("planet.vert");
        let frag = dir.path().join("planet.frag");
        fs::write(&vert, "void main() { gl_Position = vec4(0.0); }").unwrap();
        fs::write(&frag, "void main() {}").unwrap();

        let sources = ShaderSources::load(&vert, &frag).unwrap();
        assert!(sources.vertex.contains("gl_Position"));
        assert_eq!(sources.fragment, "void main() {}");
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let vert = dir.path().join("planet.vert");
        let missing = dir.path().join("missing.frag");
        fs::write(&vert, "void main() {}").unwrap();

        let err = ShaderSources::load(&vert, &missing).unwrap_err();
        assert!(err.to_string().contains("missing.frag"));
        match err {
            PlanetError::ShaderSource { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_vertex_reported_first() {
        let dir = tempfile::tempdir().unwrap();
        let vert = dir.path().join("absent.vert");
        let frag = dir.path().join("absent.frag");

        match ShaderSources::load(&vert, &frag).unwrap_err() {
            PlanetError::ShaderSource { path, .. } => assert_eq!(path, vert),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_strings() {
        let sources = ShaderSources::from_strings("v", String::from("f"));
        assert_eq!(sources.vertex, "v");
        assert_eq!(sources.fragment, "f");
    }
}
