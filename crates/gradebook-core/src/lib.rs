//! gradebook-core — the in-memory student/grade collection and its statistics.
//!
//! This crate defines the data model, the owning roster, derived class-wide
//! statistics, the summary report, and the error taxonomy. It performs no I/O
//! and knows nothing about the console; the `gradebook` binary drives it
//! through the operations defined here.

pub mod error;
pub mod model;
pub mod report;
pub mod roster;
pub mod statistics;
