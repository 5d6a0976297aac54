//! scorecard-report
//!
//! Assembles the provider scorecard and care-gap dashboard tables from typed
//! records by running them through the scoring engine. Also owns report
//! configuration and the explicit dataset cache hosts use between refreshes.

pub mod cache;
pub mod care_gaps;
pub mod config;
pub mod error;
pub mod rollup;
pub mod scorecard;
