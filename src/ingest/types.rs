//! Flat Wire Types
//!
//! Defines the abbreviated-key shape accepted on the wire, exactly as clients
//! send it. Field names double as the JSON keys, so the struct is the protocol.

use serde::{Deserialize, Serialize};

/// One positional (key, value, type) triple from the flat wire format.
///
/// The wire carries exactly two attribute slots and exactly three user-trait
/// slots. Slots are consumed in positional order when the structured maps are
/// built; a later slot overwrites an earlier one that carries the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSlot {
    pub key: String,
    pub value: String,
    pub slot_type: String,
}

/// The abbreviated-key analytics payload accepted on the wire.
///
/// Every field is optional and decodes to an empty string when absent.
/// Unknown keys are ignored. Field contents are not validated — emptiness,
/// format, and key uniqueness across slots are all the client's business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlatEvent {
    pub ev: String,
    pub et: String,
    pub id: String,
    pub uid: String,
    pub mid: String,
    pub t: String,
    pub p: String,
    pub l: String,
    pub sc: String,
    pub atrk1: String,
    pub atrv1: String,
    pub atrt1: String,
    pub atrk2: String,
    pub atrv2: String,
    pub atrt2: String,
    pub uatrk1: String,
    pub uatrv1: String,
    pub uatrt1: String,
    pub uatrk2: String,
    pub uatrv2: String,
    pub uatrt2: String,
    pub uatrk3: String,
    pub uatrv3: String,
    pub uatrt3: String,
}

impl FlatEvent {
    /// The two event attribute slots, in positional order.
    pub fn attribute_slots(&self) -> [EventSlot; 2] {
        [
            EventSlot {
                key: self.atrk1.clone(),
                value: self.atrv1.clone(),
                slot_type: self.atrt1.clone(),
            },
            EventSlot {
                key: self.atrk2.clone(),
                value: self.atrv2.clone(),
                slot_type: self.atrt2.clone(),
            },
        ]
    }

    /// The three user trait slots, in positional order.
    pub fn trait_slots(&self) -> [EventSlot; 3] {
        [
            EventSlot {
                key: self.uatrk1.clone(),
                value: self.uatrv1.clone(),
                slot_type: self.uatrt1.clone(),
            },
            EventSlot {
                key: self.uatrk2.clone(),
                value: self.uatrv2.clone(),
                slot_type: self.uatrt2.clone(),
            },
            EventSlot {
                key: self.uatrk3.clone(),
                value: self.uatrv3.clone(),
                slot_type: self.uatrt3.clone(),
            },
        ]
    }
}
