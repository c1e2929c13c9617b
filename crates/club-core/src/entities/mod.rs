//! Entity structs for the clubhouse domain.
//!
//! Each entity mirrors one resource of the club backend. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod attendance;
mod catalog;
mod composition;
mod member;
mod session;

pub use attendance::{AttendanceFields, AttendanceRecord, NewAttendance, ReconciledRow};
pub use catalog::CatalogItem;
pub use composition::{CompositionEntry, NewCompositionEntry};
pub use member::Member;
pub use session::TrainingSession;
