//! scorecard-core
//!
//! Pure domain types for the quality scorecard. No I/O. This is the shared
//! vocabulary of the scoring engine and the report layer.

pub mod error;
pub mod models;
