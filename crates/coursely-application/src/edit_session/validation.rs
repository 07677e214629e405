//! Commit-time validation rules, one per editable field.

use coursely_core::error::{CourselyError, Result};
use coursely_core::field::FieldId;
use coursely_core::user::{UserProfile, is_valid_gpa};

pub const GPA_RANGE_MESSAGE: &str = "GPA must be a number between 0.0 and 4.0";
pub const DUPLICATE_MAJOR_MESSAGE: &str = "Second major cannot be the same as your primary major.";
pub const DUPLICATE_MINOR_MESSAGE: &str = "Second minor cannot be the same as your primary minor.";
pub const EMPTY_PATHWAY_MESSAGE: &str = "Please select a HASS pathway.";

/// What a successful commit writes.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitAction {
    SetGpa(f64),
    SetSecondMajor(Option<String>),
    SetSecondMinor(Option<String>),
    SetHassPathway(String),
    /// Mirror the profile's major into the academic profile.
    SyncMajor,
    /// Mirror the profile's minor into the academic profile.
    SyncMinor,
}

/// Checks `temp_value` against the rule for `field`.
///
/// `profile` supplies the primary major and minor the second-program rules
/// compare against.
pub fn validate(field: FieldId, temp_value: &str, profile: &UserProfile) -> Result<CommitAction> {
    match field {
        FieldId::Gpa => temp_value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|gpa| is_valid_gpa(*gpa))
            .map(CommitAction::SetGpa)
            .ok_or_else(|| CourselyError::validation(field, GPA_RANGE_MESSAGE)),
        FieldId::SecondMajor => {
            if !temp_value.is_empty() && temp_value == profile.major {
                return Err(CourselyError::validation(field, DUPLICATE_MAJOR_MESSAGE));
            }
            Ok(CommitAction::SetSecondMajor(non_empty(temp_value)))
        }
        FieldId::SecondMinor => {
            if !temp_value.is_empty() && Some(temp_value) == profile.minor.as_deref() {
                return Err(CourselyError::validation(field, DUPLICATE_MINOR_MESSAGE));
            }
            Ok(CommitAction::SetSecondMinor(non_empty(temp_value)))
        }
        FieldId::HassPathway => {
            let pathway = temp_value.trim();
            if pathway.is_empty() {
                return Err(CourselyError::validation(field, EMPTY_PATHWAY_MESSAGE));
            }
            Ok(CommitAction::SetHassPathway(pathway.to_string()))
        }
        FieldId::Major => Ok(CommitAction::SyncMajor),
        FieldId::Minor => Ok(CommitAction::SyncMinor),
    }
}

/// `None` for an empty string.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
