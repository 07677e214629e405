//! Persisted data transfer objects.

pub mod user_profile;

pub use user_profile::{UserProfileDTO, UserProfileV1, decode_profile, encode_profile};
