pub mod academic;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feature;
pub mod field;
pub mod search;
pub mod storage;
pub mod user;

// Re-export common error type
pub use error::CourselyError;
pub use field::FieldId;
