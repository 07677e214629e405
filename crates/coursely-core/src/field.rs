//! Editable profile fields.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::catalog::ProgramKind;

/// A field of the student profile that can be opened in an edit session.
///
/// Parses from and displays as its camelCase name (`secondMajor`, `hassPathway`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldId {
    Major,
    SecondMajor,
    Minor,
    SecondMinor,
    HassPathway,
    Gpa,
}

impl FieldId {
    /// Program list this field draws its candidates from, if any.
    pub fn program_kind(self) -> Option<ProgramKind> {
        match self {
            FieldId::Major | FieldId::SecondMajor => Some(ProgramKind::Major),
            FieldId::Minor | FieldId::SecondMinor => Some(ProgramKind::Minor),
            FieldId::HassPathway | FieldId::Gpa => None,
        }
    }

    /// Whether typing into this field writes through to the profile's primary program.
    pub fn is_primary_program(self) -> bool {
        matches!(self, FieldId::Major | FieldId::Minor)
    }

    /// Whether a committed value lands in the persisted user profile.
    ///
    /// Second programs and the HASS pathway live in the academic profile,
    /// which is held in memory only.
    pub fn is_persisted(self) -> bool {
        matches!(self, FieldId::Major | FieldId::Minor | FieldId::Gpa)
    }
}
