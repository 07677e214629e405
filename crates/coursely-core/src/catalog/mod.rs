//! Program catalog: the read-only list of majors, minors and HASS pathways.
//!
//! The catalog is populated once at startup (from configuration or the
//! built-in dataset) and shared immutably afterwards.

pub mod model;
pub mod service;

pub use model::{CatalogConfig, Program, ProgramKind};
pub use service::{ProgramCatalog, StaticProgramCatalog};
