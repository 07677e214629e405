//! Academic program selection.
//!
//! Kept loosely in sync with the major and minor of the
//! [`UserProfile`](crate::user::UserProfile).

mod model;

pub use model::AcademicProfile;
