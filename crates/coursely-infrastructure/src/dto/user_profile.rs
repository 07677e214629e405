//! UserProfile DTO stored under `user_profile_v1`.

use serde::{Deserialize, Serialize};

use coursely_core::error::{CourselyError, Result};
use coursely_core::storage::PROFILE_KEY;
use coursely_core::user::{UserProfile, is_valid_gpa};

/// User profile record V1.
///
/// JSON with camelCase keys. Optional fields are omitted when unset; unknown
/// keys are ignored on read, missing required keys fail the decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileV1 {
    pub full_name: String,
    pub student_id: String,
    pub expected_graduation: String,
    pub major: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<String>,
    pub gpa: f64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Type alias for the latest UserProfile version.
pub type UserProfileDTO = UserProfileV1;

// ============================================================================
// Domain model conversions
// ============================================================================

/// Convert domain model to UserProfileV1 DTO for persistence.
impl From<&UserProfile> for UserProfileV1 {
    fn from(profile: &UserProfile) -> Self {
        UserProfileV1 {
            full_name: profile.full_name.clone(),
            student_id: profile.student_id.clone(),
            expected_graduation: profile.expected_graduation.clone(),
            major: profile.major.clone(),
            track: profile.track.clone(),
            minor: profile.minor.clone(),
            gpa: profile.gpa,
            email: profile.email.clone(),
            profile_picture: profile.profile_picture.clone(),
        }
    }
}

/// Convert UserProfileV1 DTO to domain model, enforcing the GPA range.
impl TryFrom<UserProfileV1> for UserProfile {
    type Error = CourselyError;

    fn try_from(dto: UserProfileV1) -> Result<Self> {
        if !is_valid_gpa(dto.gpa) {
            return Err(CourselyError::storage_read(
                PROFILE_KEY,
                format!("gpa {} is outside 0.0..=4.0", dto.gpa),
            ));
        }
        Ok(UserProfile {
            full_name: dto.full_name,
            student_id: dto.student_id,
            expected_graduation: dto.expected_graduation,
            major: dto.major,
            track: dto.track,
            minor: dto.minor,
            gpa: dto.gpa,
            email: dto.email,
            profile_picture: dto.profile_picture,
        })
    }
}

/// Serializes `profile` into its persisted form.
pub fn encode_profile(profile: &UserProfile) -> Result<String> {
    Ok(serde_json::to_string(&UserProfileDTO::from(profile))?)
}

/// Parses a persisted profile.
///
/// Any failure is reported as [`CourselyError::StorageRead`].
pub fn decode_profile(payload: &str) -> Result<UserProfile> {
    let dto: UserProfileDTO = serde_json::from_str(payload)
        .map_err(|e| CourselyError::storage_read(PROFILE_KEY, e.to_string()))?;
    UserProfile::try_from(dto)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uses_camel_case_and_omits_unset_optionals() {
        let profile = UserProfile {
            profile_picture: None,
            ..UserProfile::default()
        };
        let json: serde_json::Value = serde_json::from_str(&encode_profile(&profile).unwrap()).unwrap();

        assert_eq!(json["fullName"], "Alex Johnson");
        assert_eq!(json["expectedGraduation"], "May 2027");
        assert_eq!(json["gpa"], 3.75);
        assert!(json.get("profilePicture").is_none());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let payload = r#"{
            "fullName": "Sam Lee", "studentId": "1", "expectedGraduation": "Dec 2026",
            "major": "Mathematics", "gpa": 3.1, "email": "sam@rpi.edu",
            "favoriteColor": "green"
        }"#;
        let profile = decode_profile(payload).unwrap();
        assert_eq!(profile.full_name, "Sam Lee");
        assert!(profile.minor.is_none());
        assert!(profile.track.is_none());
    }

    #[test]
    fn test_decode_missing_required_field_fails() {
        let payload = r#"{"fullName": "Sam Lee", "gpa": 3.1}"#;
        let err = decode_profile(payload).unwrap_err();
        assert!(err.is_storage_read());
    }

    #[test]
    fn test_decode_truncated_payload_fails() {
        let encoded = encode_profile(&UserProfile::default()).unwrap();
        let truncated = &encoded[..encoded.len() / 2];
        assert!(decode_profile(truncated).unwrap_err().is_storage_read());
    }

    #[test]
    fn test_decode_out_of_range_gpa_fails() {
        let mut dto = UserProfileDTO::from(&UserProfile::default());
        dto.gpa = 5.0;
        let payload = serde_json::to_string(&dto).unwrap();
        assert!(decode_profile(&payload).unwrap_err().is_storage_read());
    }

    #[test]
    fn test_encode_decode_preserves_profile() {
        let profile = UserProfile {
            minor: None,
            profile_picture: Some("https://example.edu/me.png".to_string()),
            ..UserProfile::default()
        };
        let decoded = decode_profile(&encode_profile(&profile).unwrap()).unwrap();
        assert_eq!(decoded, profile);
    }
}
