use anyhow::Result;
use coursely_application::ProfileEditor;
use coursely_core::catalog::ProgramKind;
use coursely_core::feature::PendingFeature;

use super::PendingArg;

pub fn run(
    editor: &ProfileEditor,
    feature: PendingArg,
    program: Option<String>,
    minor: bool,
) -> Result<()> {
    let feature = feature_for(editor, feature, program, minor);

    if let Err(e) = editor.request_feature(&feature) {
        println!("{e}");
    }
    Ok(())
}

/// Resolves the command-line choice, defaulting the program to the current
/// major, or minor with `minor` set.
fn feature_for(
    editor: &ProfileEditor,
    feature: PendingArg,
    program: Option<String>,
    minor: bool,
) -> PendingFeature {
    let kind = if minor {
        ProgramKind::Minor
    } else {
        ProgramKind::Major
    };
    let profile = editor.profile();
    let program = program
        .or_else(|| match kind {
            ProgramKind::Major => Some(profile.major.clone()),
            ProgramKind::Minor => profile.minor.clone(),
        })
        .unwrap_or_default();

    match feature {
        PendingArg::EditProfile => PendingFeature::EditProfile,
        PendingArg::AvatarEdit => PendingFeature::AvatarEdit,
        PendingArg::MajorProgress => PendingFeature::MajorProgress { program },
        PendingArg::MinorProgress => PendingFeature::MinorProgress,
        PendingArg::PathwayProgress => PendingFeature::PathwayProgress,
        PendingArg::TrackSelection => PendingFeature::TrackSelection { program, kind },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursely_core::catalog::StaticProgramCatalog;
    use coursely_core::config::EditorSettings;
    use coursely_infrastructure::MemoryStore;
    use std::sync::Arc;

    fn editor() -> ProfileEditor {
        ProfileEditor::new(
            Arc::new(MemoryStore::new()),
            Arc::new(StaticProgramCatalog::builtin()),
            EditorSettings::default(),
        )
    }

    #[test]
    fn test_track_selection_for_minor() {
        let feature = feature_for(&editor(), PendingArg::TrackSelection, None, true);
        assert_eq!(
            feature,
            PendingFeature::TrackSelection {
                program: "Business Administration".to_string(),
                kind: ProgramKind::Minor,
            }
        );
        assert_eq!(
            feature.action(),
            "Track selection for Business Administration (minor)"
        );
    }

    #[test]
    fn test_track_selection_defaults_to_major() {
        let feature = feature_for(&editor(), PendingArg::TrackSelection, None, false);
        assert_eq!(
            feature,
            PendingFeature::TrackSelection {
                program: "Computer Science".to_string(),
                kind: ProgramKind::Major,
            }
        );
    }

    #[test]
    fn test_explicit_program_wins() {
        let feature = feature_for(
            &editor(),
            PendingArg::TrackSelection,
            Some("Mathematics".to_string()),
            false,
        );
        assert_eq!(feature.action(), "Track selection for Mathematics (major)");
    }
}
