//! Placeholder actions that the profile page offers but does not implement yet.

use serde::{Deserialize, Serialize};

use crate::catalog::ProgramKind;
use crate::error::{CourselyError, Result};

/// Always fails with [`CourselyError::NotImplemented`] for `action`.
pub fn not_implemented<T>(action: impl Into<String>) -> Result<T> {
    let action = action.into();
    tracing::info!(action = %action, "Pending feature requested");
    Err(CourselyError::not_implemented(action))
}

/// Actions reachable from the profile page that have no implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PendingFeature {
    EditProfile,
    AvatarEdit,
    MajorProgress { program: String },
    MinorProgress,
    PathwayProgress,
    TrackSelection { program: String, kind: ProgramKind },
}

impl PendingFeature {
    /// Human-readable description of the action.
    pub fn action(&self) -> String {
        match self {
            PendingFeature::EditProfile => "Edit profile".to_string(),
            PendingFeature::AvatarEdit => "Edit profile picture".to_string(),
            PendingFeature::MajorProgress { program } => format!("Major progress for {program}"),
            PendingFeature::MinorProgress => "Minor progress tracking".to_string(),
            PendingFeature::PathwayProgress => "Pathway progress tracking".to_string(),
            PendingFeature::TrackSelection { program, kind } => {
                format!("Track selection for {program} ({kind})")
            }
        }
    }

    /// Requests the feature. Never succeeds.
    pub fn invoke(&self) -> Result<()> {
        not_implemented(self.action())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_always_fails() {
        let err = not_implemented::<()>("Avatar upload").unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(err.to_string(), "Not implemented yet: Avatar upload");
    }

    #[test]
    fn test_track_selection_action() {
        let feature = PendingFeature::TrackSelection {
            program: "Mathematics".to_string(),
            kind: ProgramKind::Major,
        };
        assert_eq!(feature.action(), "Track selection for Mathematics (major)");
        assert_eq!(
            feature.invoke().unwrap_err(),
            CourselyError::not_implemented("Track selection for Mathematics (major)")
        );
    }

    #[test]
    fn test_major_progress_names_program() {
        let feature = PendingFeature::MajorProgress {
            program: "Computer Science".to_string(),
        };
        assert_eq!(feature.action(), "Major progress for Computer Science");
    }
}
