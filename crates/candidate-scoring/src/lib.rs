//! Applicant scoring engine and the ambient plumbing shared by the host service.
//!
//! The [`scoring`] module is pure: it maps an applicant record and a rubric to a
//! [`scoring::ScoreResult`] without touching the clock, the filesystem, or the network.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
