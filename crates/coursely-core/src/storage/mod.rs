//! Client-side key-value persistence boundary.

mod adapter;

pub use adapter::{PROFILE_KEY, PersistenceAdapter};
