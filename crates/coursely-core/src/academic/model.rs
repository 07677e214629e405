use serde::{Deserialize, Serialize};

/// Majors, minors, their tracks and the HASS pathway a student has chosen.
///
/// Invariants: a second major never equals the major, a second minor never
/// equals the minor, and `hass_pathway` is non-empty once committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicProfile {
    pub major: String,
    pub second_major: Option<String>,
    pub track: Option<String>,
    pub second_major_track: Option<String>,
    pub minor: Option<String>,
    pub second_minor: Option<String>,
    pub minor_track: Option<String>,
    pub second_minor_track: Option<String>,
    pub hass_pathway: String,
}

impl AcademicProfile {
    /// Replaces the major, dropping a second major that would now duplicate it.
    ///
    /// Returns true when the second major was cleared.
    pub fn set_major(&mut self, major: String) -> bool {
        let collided = self.second_major.as_deref() == Some(major.as_str());
        if collided {
            self.second_major = None;
            self.second_major_track = None;
        }
        self.major = major;
        collided
    }

    /// Replaces the minor, dropping a second minor that would now duplicate it.
    ///
    /// Returns true when the second minor was cleared.
    pub fn set_minor(&mut self, minor: Option<String>) -> bool {
        let collided = minor.is_some() && self.second_minor == minor;
        if collided {
            self.second_minor = None;
            self.second_minor_track = None;
        }
        self.minor = minor;
        collided
    }
}

impl Default for AcademicProfile {
    fn default() -> Self {
        Self {
            major: "Computer Science".to_string(),
            second_major: Some("Mathematics".to_string()),
            track: Some("AI/Machine Learning".to_string()),
            second_major_track: Some("Applied Mathematics".to_string()),
            minor: Some("Business Administration".to_string()),
            second_minor: None,
            minor_track: Some("Entrepreneurship".to_string()),
            second_minor_track: None,
            hass_pathway: "Arts".to_string(),
        }
    }
}
