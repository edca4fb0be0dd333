// src/config.rs

use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// Options for mesh construction.
///
/// ```toml
/// flip_y = true
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshOptions {
    /// Mirror Y before triangulating, for render targets whose Y axis points down.
    pub flip_y: bool,
}

impl MeshOptions {
    pub fn flipped() -> Self {
        Self { flip_y: true }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| GeometryError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml() {
        assert_eq!(MeshOptions::from_toml_str("flip_y = true").unwrap(), MeshOptions::flipped());
        assert_eq!(MeshOptions::from_toml_str("").unwrap(), MeshOptions::default());
    }

    #[test]
    fn rejects_bad_values() {
        let err = MeshOptions::from_toml_str("flip_y = 3").unwrap_err();
        assert!(matches!(err, GeometryError::Config(_)));
    }
}
