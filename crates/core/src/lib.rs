//! Domain logic for the SmartPlanning scheduling service.
//!
//! This crate has zero internal dependencies: pure calendar-date and
//! payload rules shared by the repository layer, the API server, and any
//! future CLI tooling.

pub mod dates;
pub mod error;
pub mod payload;
pub mod types;
