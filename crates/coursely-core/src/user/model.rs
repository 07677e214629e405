//! UserProfile domain model.
//!
//! The canonical identity and record fields of a student.

use serde::{Deserialize, Serialize};

use crate::academic::AcademicProfile;

/// Lowest GPA a profile can hold.
pub const GPA_MIN: f64 = 0.0;
/// Highest GPA a profile can hold.
pub const GPA_MAX: f64 = 4.0;

/// Returns true when `gpa` is a finite value inside `[GPA_MIN, GPA_MAX]`.
pub fn is_valid_gpa(gpa: f64) -> bool {
    gpa.is_finite() && (GPA_MIN..=GPA_MAX).contains(&gpa)
}

/// Student profile domain model.
///
/// Owned exclusively by the profile store; everything else works on copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub full_name: String,
    pub student_id: String,
    pub expected_graduation: String,
    /// Primary major
    pub major: String,
    /// Concentration within the primary major
    pub track: Option<String>,
    pub minor: Option<String>,
    /// Always within `[0.0, 4.0]`
    pub gpa: f64,
    pub email: String,
    /// Profile picture URI
    pub profile_picture: Option<String>,
}

impl UserProfile {
    /// The fallback profile, with program fields taken from `academic`.
    pub fn seeded_from(academic: &AcademicProfile) -> Self {
        Self {
            full_name: "Alex Johnson".to_string(),
            student_id: "662012345".to_string(),
            expected_graduation: "May 2027".to_string(),
            major: academic.major.clone(),
            track: academic.track.clone(),
            minor: academic.minor.clone(),
            gpa: 3.75,
            email: "johna@rpi.edu".to_string(),
            profile_picture: None,
        }
    }

    /// Initials shown in place of a missing profile picture.
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::seeded_from(&AcademicProfile::default())
    }
}

/// A partial update to a [`UserProfile`].
///
/// `None` leaves a field untouched. Optional profile fields take
/// `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub student_id: Option<String>,
    pub expected_graduation: Option<String>,
    pub major: Option<String>,
    pub track: Option<Option<String>>,
    pub minor: Option<Option<String>>,
    pub gpa: Option<f64>,
    pub email: Option<String>,
    pub profile_picture: Option<Option<String>>,
}

impl ProfilePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    pub fn major(mut self, value: impl Into<String>) -> Self {
        self.major = Some(value.into());
        self
    }

    pub fn track(mut self, value: Option<String>) -> Self {
        self.track = Some(value);
        self
    }

    pub fn minor(mut self, value: Option<String>) -> Self {
        self.minor = Some(value);
        self
    }

    pub fn gpa(mut self, value: f64) -> Self {
        self.gpa = Some(value);
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn profile_picture(mut self, value: Option<String>) -> Self {
        self.profile_picture = Some(value);
        self
    }

    /// True when the patch touches no field.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the patch over `base`, returning the new profile.
    pub fn apply(&self, base: &UserProfile) -> UserProfile {
        let mut next = base.clone();
        if let Some(v) = &self.full_name {
            next.full_name = v.clone();
        }
        if let Some(v) = &self.student_id {
            next.student_id = v.clone();
        }
        if let Some(v) = &self.expected_graduation {
            next.expected_graduation = v.clone();
        }
        if let Some(v) = &self.major {
            next.major = v.clone();
        }
        if let Some(v) = &self.track {
            next.track = v.clone();
        }
        if let Some(v) = &self.minor {
            next.minor = v.clone();
        }
        if let Some(v) = self.gpa {
            next.gpa = v;
        }
        if let Some(v) = &self.email {
            next.email = v.clone();
        }
        if let Some(v) = &self.profile_picture {
            next.profile_picture = v.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_seeded_from_academic_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.full_name, "Alex Johnson");
        assert_eq!(profile.major, "Computer Science");
        assert_eq!(profile.track.as_deref(), Some("AI/Machine Learning"));
        assert_eq!(profile.minor.as_deref(), Some("Business Administration"));
        assert_eq!(profile.gpa, 3.75);
        assert!(profile.profile_picture.is_none());
    }

    #[test]
    fn test_initials() {
        let profile = UserProfile::default();
        assert_eq!(profile.initials(), "AJ");

        let mut spaced = profile.clone();
        spaced.full_name = "  Ada   King Lovelace ".to_string();
        assert_eq!(spaced.initials(), "AKL");
    }

    #[test]
    fn test_patch_merges_only_set_fields() {
        let base = UserProfile::default();
        let next = ProfilePatch::new().gpa(3.2).minor(None).apply(&base);

        assert_eq!(next.gpa, 3.2);
        assert!(next.minor.is_none());
        assert_eq!(next.major, base.major);
        assert_eq!(next.email, base.email);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = UserProfile::default();
        let patch = ProfilePatch::new();
        assert!(patch.is_empty());
        assert_eq!(patch.apply(&base), base);
    }

    #[test]
    fn test_gpa_bounds() {
        assert!(is_valid_gpa(0.0));
        assert!(is_valid_gpa(4.0));
        assert!(!is_valid_gpa(-0.01));
        assert!(!is_valid_gpa(4.01));
        assert!(!is_valid_gpa(f64::NAN));
        assert!(!is_valid_gpa(f64::INFINITY));
    }
}
