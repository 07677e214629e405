//! Program catalog lookup service.

use std::collections::HashMap;

use crate::catalog::{CatalogConfig, Program, ProgramKind};
use crate::error::{CourselyError, Result};

/// Read-only lookup over the program catalog.
///
/// Lookups never fail: unknown programs simply have no tracks.
pub trait ProgramCatalog: Send + Sync {
    /// Names of all majors, in catalog order.
    fn list_major_names(&self) -> Vec<String>;

    /// Names of all minors, in catalog order.
    fn list_minor_names(&self) -> Vec<String>;

    /// Names of all HASS pathways, in catalog order.
    fn list_pathway_names(&self) -> Vec<String>;

    /// Tracks offered by `program_name`, or an empty list if it is not in the catalog.
    fn tracks_for(&self, program_name: &str, kind: ProgramKind) -> Vec<String>;

    /// Names of all programs of `kind`.
    fn names_for(&self, kind: ProgramKind) -> Vec<String> {
        match kind {
            ProgramKind::Major => self.list_major_names(),
            ProgramKind::Minor => self.list_minor_names(),
        }
    }
}

/// In-process catalog built from static configuration.
#[derive(Debug, Clone)]
pub struct StaticProgramCatalog {
    majors: Vec<Program>,
    minors: Vec<Program>,
    pathways: Vec<String>,
}

impl StaticProgramCatalog {
    /// Builds a catalog, rejecting names that appear more than once across
    /// the major, minor and pathway lists.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let mut seen: HashMap<&str, &'static str> = HashMap::new();
        let entries = config
            .majors
            .iter()
            .map(|p| (p.name.as_str(), "major"))
            .chain(config.minors.iter().map(|p| (p.name.as_str(), "minor")))
            .chain(config.pathways.iter().map(|p| (p.as_str(), "pathway")));

        for (name, list) in entries {
            if name.trim().is_empty() {
                return Err(CourselyError::config(format!(
                    "catalog {list} entry has an empty name"
                )));
            }
            if let Some(previous) = seen.insert(name, list) {
                return Err(CourselyError::config(format!(
                    "catalog entry '{name}' appears in both the {previous} and {list} lists"
                )));
            }
        }

        tracing::debug!(
            majors = config.majors.len(),
            minors = config.minors.len(),
            pathways = config.pathways.len(),
            "Program catalog loaded"
        );

        Ok(Self {
            majors: config.majors,
            minors: config.minors,
            pathways: config.pathways,
        })
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        let config = CatalogConfig::default();
        Self {
            majors: config.majors,
            minors: config.minors,
            pathways: config.pathways,
        }
    }

    fn programs(&self, kind: ProgramKind) -> &[Program] {
        match kind {
            ProgramKind::Major => &self.majors,
            ProgramKind::Minor => &self.minors,
        }
    }
}

impl ProgramCatalog for StaticProgramCatalog {
    fn list_major_names(&self) -> Vec<String> {
        self.majors.iter().map(|p| p.name.clone()).collect()
    }

    fn list_minor_names(&self) -> Vec<String> {
        self.minors.iter().map(|p| p.name.clone()).collect()
    }

    fn list_pathway_names(&self) -> Vec<String> {
        self.pathways.clone()
    }

    fn tracks_for(&self, program_name: &str, kind: ProgramKind) -> Vec<String> {
        self.programs(kind)
            .iter()
            .find(|p| p.name == program_name)
            .map(|p| p.tracks.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lists() {
        let catalog = StaticProgramCatalog::builtin();
        assert_eq!(
            catalog.list_major_names(),
            vec!["Computer Science".to_string(), "Mathematics".to_string()]
        );
        assert_eq!(catalog.list_minor_names(), vec!["Business Administration".to_string()]);
        assert_eq!(catalog.list_pathway_names(), vec!["Arts".to_string()]);
    }

    #[test]
    fn test_tracks_for_known_program() {
        let catalog = StaticProgramCatalog::builtin();
        assert_eq!(
            catalog.tracks_for("Computer Science", ProgramKind::Major),
            vec!["AI/Machine Learning".to_string()]
        );
        assert_eq!(
            catalog.tracks_for("Business Administration", ProgramKind::Minor),
            vec!["Entrepreneurship".to_string()]
        );
    }

    #[test]
    fn test_tracks_for_unknown_program_is_empty() {
        let catalog = StaticProgramCatalog::builtin();
        assert!(catalog.tracks_for("Unknown Program", ProgramKind::Major).is_empty());
        // A major looked up as a minor is unknown too
        assert!(catalog.tracks_for("Computer Science", ProgramKind::Minor).is_empty());
    }

    #[test]
    fn test_program_without_tracks() {
        let catalog = StaticProgramCatalog::new(CatalogConfig {
            majors: vec![Program::new("Physics", &[])],
            minors: vec![],
            pathways: vec![],
        })
        .unwrap();
        assert!(catalog.tracks_for("Physics", ProgramKind::Major).is_empty());
    }

    #[test]
    fn test_rejects_overlapping_lists() {
        let config = CatalogConfig {
            majors: vec![Program::new("Economics", &[])],
            minors: vec![Program::new("Economics", &[])],
            pathways: vec![],
        };
        let err = StaticProgramCatalog::new(config).unwrap_err();
        assert!(matches!(err, CourselyError::Config(ref msg) if msg.contains("Economics")));
    }

    #[test]
    fn test_rejects_blank_names() {
        let config = CatalogConfig {
            majors: vec![],
            minors: vec![],
            pathways: vec!["  ".to_string()],
        };
        assert!(StaticProgramCatalog::new(config).is_err());
    }

    #[test]
    fn test_names_for_kind() {
        let catalog = StaticProgramCatalog::builtin();
        assert_eq!(catalog.names_for(ProgramKind::Minor), catalog.list_minor_names());
    }
}
