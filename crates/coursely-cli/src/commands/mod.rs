pub mod edit;
pub mod pending;
pub mod search;
pub mod show;
pub mod tracks;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ValueEnum;
use coursely_application::ProfileEditor;
use coursely_core::catalog::StaticProgramCatalog;
use coursely_infrastructure::{ConfigService, JsonFileStore};

/// Catalog list selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListKind {
    Major,
    Minor,
    Pathway,
}

/// Pending feature selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PendingArg {
    EditProfile,
    AvatarEdit,
    MajorProgress,
    MinorProgress,
    PathwayProgress,
    TrackSelection,
}

/// Builds an editor from the config file and the store it points at.
pub fn open_editor(config: Option<PathBuf>, store: Option<PathBuf>) -> Result<ProfileEditor> {
    let config_service = match config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    };
    let mut root = config_service
        .load()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    if store.is_some() {
        root.storage.path = store;
    }

    let store_path = ConfigService::store_path(&root)?;
    tracing::debug!(store = %store_path.display(), "Opening profile store");

    let catalog = StaticProgramCatalog::new(root.catalog).context("Invalid program catalog")?;
    Ok(ProfileEditor::new(
        Arc::new(JsonFileStore::new(store_path)),
        Arc::new(catalog),
        root.editor,
    ))
}
