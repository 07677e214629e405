//! Type-ahead matching over catalog name lists.

mod filter;

pub use filter::{filter, filter_excluding};
