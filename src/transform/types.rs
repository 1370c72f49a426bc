//! Structured Output Types
//!
//! The descriptive-key shape produced for the log sink. Declaration order of
//! the scalar fields matches the serialized order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The value/type pair stored under each attribute or trait key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotValue {
    pub value: String,
    #[serde(rename = "type")]
    pub slot_type: String,
}

/// The structured event record emitted to the log sink.
///
/// The attribute map holds up to two entries and the trait map up to three,
/// bounded by the slot counts of the flat wire format. `BTreeMap` keeps the
/// serialized key order stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredEvent {
    pub event: String,
    pub event_type: String,
    pub app_id: String,
    pub user_id: String,
    pub message_id: String,
    pub page_title: String,
    pub page_url: String,
    pub browser_language: String,
    pub screen_size: String,
    pub attributes: BTreeMap<String, SlotValue>,
    pub traits: BTreeMap<String, SlotValue>,
}
