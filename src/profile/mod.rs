//! Reference profiles: records and their persistence
//!
//! # Components
//! - `record.rs`: ProfileRecord (key, mean, variance) and ReferenceProfile
//! - `store.rs`: Two-column-statistics CSV file (`key,M,S`)

pub mod record;
pub mod store;

pub use record::{ProfileRecord, ReferenceProfile};
pub use store::ProfileStore;
