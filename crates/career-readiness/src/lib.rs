//! Career-readiness assessment for the Support Operations Coordinator track.
//!
//! The crate owns the question catalog, the rule book that maps answers to
//! points, the scoring engine and result synthesizer, the session reducer
//! used while a quiz is in progress, and the snapshot store that hands a
//! finished session to the results view.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
