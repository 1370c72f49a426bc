//! Flat-to-Structured Mapping
//!
//! Pure, deterministic remapping of one flat wire record into the structured
//! output shape. No IO, no state.

use super::types::{SlotValue, StructuredEvent};
use crate::ingest::types::{EventSlot, FlatEvent};

use std::collections::BTreeMap;

/// Maps one flat record into its structured counterpart.
///
/// Scalar fields are renamed one-to-one. The attribute and trait maps are
/// folded from the positional slots in order, so a later slot silently
/// overwrites an earlier one carrying the same key. Empty keys are kept
/// as-is; an all-empty payload yields a single `""` entry per map.
pub fn transform_event(flat: FlatEvent) -> StructuredEvent {
    let attributes = collect_slots(flat.attribute_slots());
    let traits = collect_slots(flat.trait_slots());

    StructuredEvent {
        event: flat.ev,
        event_type: flat.et,
        app_id: flat.id,
        user_id: flat.uid,
        message_id: flat.mid,
        page_title: flat.t,
        page_url: flat.p,
        browser_language: flat.l,
        screen_size: flat.sc,
        attributes,
        traits,
    }
}

/// Folds ordered slots into a key-based map, last write wins.
fn collect_slots<const N: usize>(slots: [EventSlot; N]) -> BTreeMap<String, SlotValue> {
    let mut map = BTreeMap::new();

    for slot in slots {
        map.insert(
            slot.key,
            SlotValue {
                value: slot.value,
                slot_type: slot.slot_type,
            },
        );
    }

    map
}
