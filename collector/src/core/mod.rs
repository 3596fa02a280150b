//! Deterministic, pure logic shared by the collector.
//!
//! Nothing in here touches the filesystem or the clock. Functions take
//! in-memory records and return values suitable for direct assertion.

pub mod render;
pub mod summary;
pub mod types;
pub mod validate;
