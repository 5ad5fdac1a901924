//! # Sistema Acadêmico scheduling core
//!
//! Weekly class slots, the no-overlap rule that governs them, and the
//! weekday-then-time ordering used for timetables.
//!
//! - **models**: slots, weekdays and wall-clock times
//! - **validation**: the single overlap check every write path goes through
//! - **ordering**: display ordering and weekly grouping
//! - **store**: the record store boundary
//! - **manager**: validate-then-write orchestration over a store

pub mod errors;
pub mod manager;
pub mod models;
pub mod ordering;
pub mod store;
pub mod validation;
