//! Property-based tests for the profile editor.

use std::sync::Arc;

use coursely_application::{ProfileEditor, ProfileStore};
use coursely_core::academic::AcademicProfile;
use coursely_core::catalog::StaticProgramCatalog;
use coursely_core::config::EditorSettings;
use coursely_core::field::FieldId;
use coursely_core::user::ProfilePatch;
use coursely_infrastructure::MemoryStore;
use proptest::prelude::*;

fn editor() -> ProfileEditor {
    ProfileEditor::new(
        Arc::new(MemoryStore::new()),
        Arc::new(StaticProgramCatalog::builtin()),
        EditorSettings::default(),
    )
}

fn commit_gpa(editor: &mut ProfileEditor, input: &str) -> bool {
    editor.begin_edit(FieldId::Gpa);
    editor.on_primary_input(input).unwrap();
    editor.commit().is_ok()
}

proptest! {
    #[test]
    fn test_in_range_gpa_is_accepted(gpa in 0.0..=4.0f64) {
        let mut editor = editor();
        prop_assert!(commit_gpa(&mut editor, &gpa.to_string()));
        prop_assert_eq!(editor.profile().gpa, gpa);
    }

    #[test]
    fn test_above_range_gpa_is_rejected(gpa in 4.0001..1000.0f64) {
        let mut editor = editor();
        prop_assert!(!commit_gpa(&mut editor, &gpa.to_string()));
        prop_assert_eq!(editor.profile().gpa, 3.75);
    }

    #[test]
    fn test_below_range_gpa_is_rejected(gpa in -1000.0..-0.0001f64) {
        let mut editor = editor();
        prop_assert!(!commit_gpa(&mut editor, &gpa.to_string()));
        prop_assert_eq!(editor.profile().gpa, 3.75);
    }

    #[test]
    fn test_second_major_candidates_never_offer_major(query in "[a-zA-Z ]{0,4}") {
        let mut editor = editor();
        editor.begin_edit(FieldId::SecondMajor);
        editor.on_secondary_input(&query).unwrap();

        let major = editor.profile().major.clone();
        let session = editor.session().unwrap();
        prop_assert!(session.secondary_candidates().iter().all(|c| *c != major));
    }

    #[test]
    fn test_saved_profile_is_reloaded(name in "\\PC{1,24}", hundredths in 0u32..=400) {
        let gpa = f64::from(hundredths) / 100.0;
        let memory = MemoryStore::new();
        let academic = AcademicProfile::default();

        let mut store = ProfileStore::initialize(Arc::new(memory.clone()), &academic);
        let saved = store
            .set(&ProfilePatch::new().full_name(name).gpa(gpa))
            .unwrap();

        let reloaded = ProfileStore::initialize(Arc::new(memory), &academic);
        prop_assert_eq!(reloaded.get(), &saved);
    }
}
