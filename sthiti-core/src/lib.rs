//! sthiti-core: Presence Accounting for sthiti
//!
//! Shared data model and the debounced presence accumulator. Everything in
//! this crate is synchronous and single-owner: the accumulator is driven by
//! whichever loop consumes observations and needs no locking of its own.

pub mod error;
pub mod presence;
pub mod types;

pub use error::{Error, Result};
pub use presence::{PresenceAccumulator, PresenceState, DEFAULT_DEBOUNCE_SECS};
pub use types::{Frame, Observation};
