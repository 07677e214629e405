//! User domain module.
//!
//! - `model`: the canonical student profile and partial updates to it
//!
//! ```ignore
//! use coursely_core::user::{UserProfile, ProfilePatch};
//! ```

mod model;

pub use model::{GPA_MAX, GPA_MIN, ProfilePatch, UserProfile, is_valid_gpa};
