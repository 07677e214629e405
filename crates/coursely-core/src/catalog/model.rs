//! Catalog domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which program list a lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProgramKind {
    Major,
    Minor,
}

/// A major or minor offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    /// Concentrations offered within the program, in display order.
    #[serde(default)]
    pub tracks: Vec<String>,
}

impl Program {
    pub fn new(name: impl Into<String>, tracks: &[&str]) -> Self {
        Self {
            name: name.into(),
            tracks: tracks.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Static catalog data as supplied by the host at startup.
///
/// Deserialized from the `[catalog]` table of the configuration file:
///
/// ```toml
/// [catalog]
/// pathways = ["Arts"]
///
/// [[catalog.majors]]
/// name = "Computer Science"
/// tracks = ["AI/Machine Learning"]
/// ```
///
/// Lists left out of the table keep their built-in entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub majors: Vec<Program>,
    pub minors: Vec<Program>,
    pub pathways: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            majors: vec![
                Program::new("Computer Science", &["AI/Machine Learning"]),
                Program::new("Mathematics", &["Applied Mathematics"]),
            ],
            minors: vec![Program::new("Business Administration", &["Entrepreneurship"])],
            pathways: vec!["Arts".to_string()],
        }
    }
}
