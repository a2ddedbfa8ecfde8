//! Calendar primitives shared across the cadence workspace.
//!
//! This crate holds the pieces the recurrence generators are built from:
//! proleptic Gregorian month/weekday helpers and the core error layer.
//! It performs no I/O and keeps no state.

pub mod calendar;
pub mod error;
