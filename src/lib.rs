//! Analytics Event Gateway Library
//!
//! This library crate defines the modules that make up the ingestion gateway.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of two loosely coupled subsystems joined by a single
//! hand-off queue:
//!
//! - **`ingest`**: The HTTP intake surface. Decodes flat, abbreviated-key
//!   analytics payloads and queues them for background processing, replying to
//!   the client before transformation happens.
//! - **`transform`**: The background consumer. Receives flat records one at a
//!   time in arrival order, remaps them into the structured, descriptive-key
//!   shape, and emits each result as one log line.

pub mod ingest;
pub mod transform;
