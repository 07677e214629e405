//! Application configuration model.
//!
//! Mirrors the layout of `coursely.toml`. Every section is optional; missing
//! sections take their defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogConfig;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct RootConfig {
    #[serde(default)]
    pub editor: EditorSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Edit session behavior.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSettings {
    /// Write major/minor text into the profile while the user types,
    /// before the edit is committed.
    ///
    /// Off by default: typed programs stay in the session until commit.
    #[serde(default)]
    pub optimistic_program_patch: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageSettings {
    /// Override for the key-value store file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert!(!config.editor.optimistic_program_patch);
        assert_eq!(config.catalog.majors.len(), 2);
    }

    #[test]
    fn test_parse_full_document() {
        let doc = r#"
[editor]
optimistic_program_patch = true

[storage]
path = "/tmp/coursely/store.json"

[catalog]
pathways = ["Arts", "Economics"]

[[catalog.majors]]
name = "Physics"
tracks = ["Astrophysics"]

[[catalog.minors]]
name = "Music"
"#;
        let config: RootConfig = toml::from_str(doc).unwrap();
        assert!(config.editor.optimistic_program_patch);
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/coursely/store.json")));
        assert_eq!(config.catalog.majors[0].tracks, vec!["Astrophysics".to_string()]);
        assert!(config.catalog.minors[0].tracks.is_empty());
        assert_eq!(config.catalog.pathways.len(), 2);
    }

    #[test]
    fn test_partial_catalog_keeps_builtin_lists() {
        let doc = r#"
[catalog]
pathways = ["Economics"]
"#;
        let config: RootConfig = toml::from_str(doc).unwrap();
        let builtin = CatalogConfig::default();
        assert_eq!(config.catalog.pathways, vec!["Economics".to_string()]);
        assert_eq!(config.catalog.majors, builtin.majors);
        assert_eq!(config.catalog.minors, builtin.minors);
    }
}
