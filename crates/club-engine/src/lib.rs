//! # club-engine
//!
//! The data-shaping core of clubhouse:
//! - [`roster`]: merge a team roster with the sparse attendance records of a
//!   session into one editable row per member
//! - [`sync`]: persist the edited rows as independent create-or-update calls,
//!   reporting success and failure per member
//! - [`composer`]: keep a session's ordered exercise program and its total time
//!
//! The engine talks to the outside world only through the traits in [`store`].
//! [`memory::MemoryStore`] implements all of them in-process.

pub mod composer;
pub mod memory;
pub mod roster;
pub mod store;
pub mod sync;

pub use composer::SessionComposer;
pub use roster::{RosterView, load_roster, reconcile};
pub use sync::{BatchSync, SyncOptions};
