//! Ingestion Module
//!
//! The HTTP intake surface of the gateway. Accepts flat, abbreviated-key
//! analytics payloads over POST and hands each decoded record to the transform
//! queue without waiting for the outcome.
//!
//! ## Workflow
//! 1. **Receive**: `POST /submit` with a flat JSON body.
//! 2. **Decode**: type-level JSON decoding only; absent fields become empty strings.
//! 3. **Hand-off**: the record is queued for the transform worker.
//! 4. **Reply**: `200 "Request received"` as soon as the record is queued.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers and the router for the Axum web server.
//! - **`types`**: the flat wire shape and its positional slot views.

pub mod handlers;
pub mod types;
