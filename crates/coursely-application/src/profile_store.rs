//! Profile store: the single live `UserProfile` with write-through persistence.

use std::sync::Arc;

use coursely_core::academic::AcademicProfile;
use coursely_core::error::{CourselyError, Result};
use coursely_core::field::FieldId;
use coursely_core::storage::{PROFILE_KEY, PersistenceAdapter};
use coursely_core::user::{ProfilePatch, UserProfile, is_valid_gpa};
use coursely_infrastructure::dto::{decode_profile, encode_profile};

use crate::edit_session::validation::GPA_RANGE_MESSAGE;

/// Owns the canonical [`UserProfile`].
///
/// Every accepted mutation is encoded and saved under [`PROFILE_KEY`] before
/// `set` returns. Nothing else writes that key.
pub struct ProfileStore {
    adapter: Arc<dyn PersistenceAdapter>,
    profile: UserProfile,
}

impl ProfileStore {
    /// Loads the persisted profile, falling back to the default seeded from
    /// `academic` when the key is absent or its payload cannot be decoded.
    ///
    /// Never fails.
    pub fn initialize(adapter: Arc<dyn PersistenceAdapter>, academic: &AcademicProfile) -> Self {
        let profile = match adapter.load(PROFILE_KEY) {
            Some(payload) => match decode_profile(&payload) {
                Ok(profile) => {
                    tracing::debug!("Loaded persisted profile");
                    profile
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Persisted profile is unreadable, using default profile");
                    UserProfile::seeded_from(academic)
                }
            },
            None => {
                tracing::debug!("No persisted profile, using default profile");
                UserProfile::seeded_from(academic)
            }
        };

        Self { adapter, profile }
    }

    /// Current profile.
    pub fn get(&self) -> &UserProfile {
        &self.profile
    }

    /// Merges `patch` into the profile, persists it and returns the new value.
    ///
    /// A patch carrying a GPA outside `[0.0, 4.0]` is rejected and the
    /// profile is left untouched.
    pub fn set(&mut self, patch: &ProfilePatch) -> Result<UserProfile> {
        if let Some(gpa) = patch.gpa {
            if !is_valid_gpa(gpa) {
                return Err(CourselyError::validation(FieldId::Gpa, GPA_RANGE_MESSAGE));
            }
        }

        self.profile = patch.apply(&self.profile);
        self.persist();
        Ok(self.profile.clone())
    }

    fn persist(&self) {
        match encode_profile(&self.profile) {
            Ok(encoded) => self.adapter.save(PROFILE_KEY, &encoded),
            Err(e) => tracing::warn!(error = %e, "Failed to encode profile, not persisted"),
        }
    }
}
