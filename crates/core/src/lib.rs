//! Domain types and pure logic for the VibeShift music-video generator.
//!
//! Nothing in this crate performs I/O. Provider clients, persistence and
//! the HTTP surface live in sibling crates and build on these types.

pub mod asset;
pub mod error;
pub mod scene;
pub mod status;
pub mod timeline;
pub mod types;
