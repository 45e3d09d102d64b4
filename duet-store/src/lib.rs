//! duet-store: in-memory event and goal-settings stores, plus CSV import.
//!
//! These are the planner's collaborators, not the planning core: simple CRUD
//! containers whose read views feed `duet-core`.

pub mod events;
pub mod import;
pub mod settings;

pub use events::{EventStore, StoredEvent};
pub use import::{read_events_csv, write_events_csv};
pub use settings::GoalSettings;
