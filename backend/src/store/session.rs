//! Comparison session
//!
//! Binds a `FormStore` to a `CostComparisonEngine`. The session computes
//! once at construction and then recomputes on every change the store
//! emits, handing each fresh result to its result listeners.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::engine::comparison::CostComparisonEngine;
use crate::models::catalog::RoomSelection;
use crate::models::comparison::CostComparisonResult;
use crate::models::form::FormSnapshot;
use crate::models::inputs::FieldId;
use crate::store::form::{FormStore, SubscriptionId};

type ResultListener = Box<dyn FnMut(&CostComparisonResult)>;

struct SessionState {
    engine: CostComparisonEngine,
    latest: CostComparisonResult,
    recomputations: u64,
    listeners: Vec<(SubscriptionId, ResultListener)>,
    next_id: SubscriptionId,
}

impl SessionState {
    fn recompute(&mut self, snapshot: &FormSnapshot) {
        let Self {
            engine,
            latest,
            recomputations,
            listeners,
            ..
        } = self;

        *latest = engine.compare_snapshot(snapshot);
        *recomputations += 1;
        for (_, listener) in listeners.iter_mut() {
            listener(latest);
        }
    }
}

/// Live comparison over an observable form
///
/// # Example
/// ```
/// use care_cost_core::{ComparisonSession, CostComparisonEngine, FieldId, RoomSelection};
///
/// let mut session = ComparisonSession::new(CostComparisonEngine::reference());
/// session.set_field(FieldId::Housing, "20000");
/// session.set_field(FieldId::Electricity, "800");
/// session.select_room(RoomSelection::Tier("economy".into()));
///
/// assert_eq!(session.latest().total_current(), 20800.0);
/// assert_eq!(session.latest().total_future(), 35300.0);
/// ```
pub struct ComparisonSession {
    store: FormStore,
    state: Rc<RefCell<SessionState>>,
    form_subscription: SubscriptionId,
}

impl ComparisonSession {
    /// Session over an empty form
    pub fn new(engine: CostComparisonEngine) -> Self {
        Self::with_store(engine, FormStore::new())
    }

    /// Session over an existing store; computes the initial result at once
    pub fn with_store(engine: CostComparisonEngine, mut store: FormStore) -> Self {
        let latest = engine.compare_snapshot(&store.snapshot());
        let state = Rc::new(RefCell::new(SessionState {
            engine,
            latest,
            recomputations: 1,
            listeners: Vec::new(),
            next_id: 0,
        }));

        let shared = Rc::clone(&state);
        let form_subscription = store.subscribe(move |_, snapshot| {
            shared.borrow_mut().recompute(snapshot);
        });

        Self {
            store,
            state,
            form_subscription,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// Mutable access to the store; changes made through it still recompute
    pub fn store_mut(&mut self) -> &mut FormStore {
        &mut self.store
    }

    pub fn set_field(&mut self, field: FieldId, raw: impl Into<String>) -> bool {
        self.store.set_field(field, raw)
    }

    pub fn clear_field(&mut self, field: FieldId) -> bool {
        self.store.clear_field(field)
    }

    pub fn select_room(&mut self, room: RoomSelection) -> bool {
        self.store.select_room(room)
    }

    pub fn toggle_add_on(&mut self, id: impl Into<String>, enabled: bool) -> bool {
        self.store.toggle_add_on(id, enabled)
    }

    /// Most recent result
    pub fn latest(&self) -> CostComparisonResult {
        self.state.borrow().latest.clone()
    }

    /// Number of computations so far, including the initial one
    pub fn recomputations(&self) -> u64 {
        self.state.borrow().recomputations
    }

    /// Register a listener for every future result
    pub fn subscribe_results<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CostComparisonResult) + 'static,
    {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe_results(&mut self, id: SubscriptionId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.listeners.len();
        state.listeners.retain(|(listener_id, _)| *listener_id != id);
        state.listeners.len() != before
    }

    /// Detach from the engine and hand back the store
    pub fn into_store(mut self) -> FormStore {
        self.store.unsubscribe(self.form_subscription);
        self.store
    }
}

impl fmt::Debug for ComparisonSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ComparisonSession")
            .field("store", &self.store)
            .field("latest", &state.latest)
            .field("recomputations", &state.recomputations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_computation_happens_once() {
        let session = ComparisonSession::new(CostComparisonEngine::reference());
        assert_eq!(session.recomputations(), 1);
        assert_eq!(session.latest().total_current(), 0.0);
    }

    #[test]
    fn test_only_real_changes_recompute() {
        let mut session = ComparisonSession::new(CostComparisonEngine::reference());
        session.set_field(FieldId::Cleaning, "1500");
        session.set_field(FieldId::Cleaning, "1500");
        session.toggle_add_on("partner", true);
        session.toggle_add_on("partner", true);
        assert_eq!(session.recomputations(), 3);
    }

    #[test]
    fn test_into_store_detaches() {
        let mut session = ComparisonSession::new(CostComparisonEngine::reference());
        session.set_field(FieldId::Housing, "1");
        let store = session.into_store();
        assert_eq!(store.listener_count(), 0);
        assert_eq!(store.fields().get(FieldId::Housing), Some("1"));
    }
}
