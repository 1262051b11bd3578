//! Shared value types.

pub mod slug;

pub use slug::slugify;
