//! Reactive form store
//!
//! - `form`: observable cells for every form input
//! - `session`: recomputes the comparison on every form change

pub mod form;
pub mod session;

pub use form::{FormChange, FormStore, SubscriptionId};
pub use session::ComparisonSession;
