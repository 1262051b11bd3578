//! Core traits defined in `booster-core` and implemented by other crates.

pub mod storage;

pub use storage::{ByteStream, ObjectMeta, ObjectStore};
