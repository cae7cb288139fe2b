//! Observable form store
//!
//! Each form field is a named cell. Writing a cell emits a `FormChange` to
//! every subscriber, together with a fresh snapshot of the whole form.
//! Writes that leave the value unchanged emit nothing.
//!
//! Notification is synchronous: every listener has run before the setter
//! returns.

use std::collections::BTreeSet;
use std::fmt;

use crate::models::catalog::RoomSelection;
use crate::models::form::FormSnapshot;
use crate::models::inputs::{CostInputs, FieldId, RawFields};

/// Handle returned by `subscribe`, used to unsubscribe
pub type SubscriptionId = u64;

/// A single change to the form
#[derive(Debug, Clone, PartialEq)]
pub enum FormChange {
    /// A field was set (`Some`) or removed (`None`)
    Field {
        field: FieldId,
        value: Option<String>,
    },

    /// The room selection changed
    Room(RoomSelection),

    /// An add-on was toggled
    AddOn { id: String, enabled: bool },
}

type FormListener = Box<dyn FnMut(&FormChange, &FormSnapshot)>;

/// Observable cells for every form input
#[derive(Default)]
pub struct FormStore {
    fields: RawFields,
    room: RoomSelection,
    add_ons: BTreeSet<String>,
    listeners: Vec<(SubscriptionId, FormListener)>,
    next_id: SubscriptionId,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with raw field values (no emission)
    pub fn with_fields(fields: RawFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &RawFields {
        &self.fields
    }

    pub fn room(&self) -> &RoomSelection {
        &self.room
    }

    pub fn enabled_add_ons(&self) -> &BTreeSet<String> {
        &self.add_ons
    }

    /// Set a field's raw text; returns whether anything changed
    pub fn set_field(&mut self, field: FieldId, raw: impl Into<String>) -> bool {
        let raw = raw.into();
        if self.fields.get(field) == Some(raw.as_str()) {
            return false;
        }
        self.fields.set(field, raw.clone());
        self.emit(FormChange::Field {
            field,
            value: Some(raw),
        });
        true
    }

    /// Remove a field entirely; returns whether it was present
    pub fn clear_field(&mut self, field: FieldId) -> bool {
        if self.fields.remove(field).is_none() {
            return false;
        }
        self.emit(FormChange::Field { field, value: None });
        true
    }

    /// Change the room selection; returns whether anything changed
    pub fn select_room(&mut self, room: RoomSelection) -> bool {
        if self.room == room {
            return false;
        }
        self.room = room.clone();
        self.emit(FormChange::Room(room));
        true
    }

    /// Enable or disable an add-on; returns whether anything changed
    pub fn toggle_add_on(&mut self, id: impl Into<String>, enabled: bool) -> bool {
        let id = id.into();
        let changed = if enabled {
            self.add_ons.insert(id.clone())
        } else {
            self.add_ons.remove(&id)
        };
        if changed {
            self.emit(FormChange::AddOn { id, enabled });
        }
        changed
    }

    /// Coerced view of the current form
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            inputs: CostInputs::from_raw(&self.fields),
            room: self.room.clone(),
            add_ons: self.add_ons.clone(),
        }
    }

    /// Register a listener for every future change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&FormChange, &FormSnapshot) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, change: FormChange) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        tracing::trace!(?change, listeners = self.listeners.len(), "form changed");
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change, &snapshot);
        }
    }
}

impl fmt::Debug for FormStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormStore")
            .field("fields", &self.fields)
            .field("room", &self.room)
            .field("add_ons", &self.add_ons)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
