//! Event Transformation Module
//!
//! Consumes flat event records handed off by the HTTP layer and turns each one
//! into the structured, descriptive-key shape that is written to the log.
//!
//! ## Workflow
//! 1. **Hand-off**: handlers push decoded records into the bounded `EventQueue`.
//! 2. **Consume**: a single `TransformWorker` task receives records in arrival order.
//! 3. **Map**: scalar fields are renamed and the positional slots folded into key maps.
//! 4. **Emit**: the structured record is serialized and written as one log line.
//!
//! ## Submodules
//! - **`queue`**: the bounded single-consumer hand-off between handlers and worker.
//! - **`worker`**: the long-lived receive-process loop.
//! - **`mapper`**: the pure flat-to-structured mapping.
//! - **`types`**: the structured output shape.

pub mod mapper;
pub mod queue;
pub mod types;
pub mod worker;
