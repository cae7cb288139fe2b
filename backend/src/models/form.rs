//! Form snapshot
//!
//! Everything the engine reads from the form at one instant: the cost
//! inputs, the room selection and the enabled add-ons.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::catalog::RoomSelection;
use crate::models::inputs::CostInputs;

/// Read-only view of the form at one instant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub inputs: CostInputs,

    #[serde(default)]
    pub room: RoomSelection,

    /// Ids of enabled add-on fees, ordered for stable output
    #[serde(default)]
    pub add_ons: BTreeSet<String>,
}

impl FormSnapshot {
    pub fn new(inputs: CostInputs) -> Self {
        Self {
            inputs,
            ..Default::default()
        }
    }

    pub fn with_room(mut self, room: RoomSelection) -> Self {
        self.room = room;
        self
    }

    pub fn with_add_on(mut self, id: impl Into<String>) -> Self {
        self.add_ons.insert(id.into());
        self
    }
}
