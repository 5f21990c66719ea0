//! Condition-monitoring diagnosis engine for motor-driven pump trains.
//!
//! Pure logic: no I/O, no shared state. Each classifier reduces raw
//! measurements to a discrete status, and [`decision`] cross-references those
//! statuses into an ordered list of maintenance recommendations.

pub mod classify;
pub mod context;
pub mod decision;
pub mod diagnosis;
pub mod error;
pub mod measurement;
pub mod recommendation;
pub mod units;
