//! Computer catalog subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     dataset.rs (reference records)
//!     → Dataset (Arc<[Computer]>, immutable)
//!     → shared via AppState to all handlers
//!
//! Per request:
//!     &[Computer]
//!     → query.rs (sort_by_field / filter)
//!     → Vec<&Computer> view
//!     → serialized by the HTTP layer
//! ```
//!
//! # Design Decisions
//! - The dataset is never copied or mutated; queries return borrowed views
//! - Field names from the wire resolve through the closed `Field` enum
//! - Unknown filter fields match nothing; unknown sort fields are an error

pub mod dataset;
pub mod query;
pub mod record;

pub use dataset::Dataset;
pub use query::{filter, sort, sort_by_field, CatalogError, DEFAULT_SORT_FIELD};
pub use record::{Computer, Field};
