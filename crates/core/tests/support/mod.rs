//! Shared test helpers for `uoacal-core` integration tests.
//!
//! Lightweight in-memory doubles for the three ports so service tests can
//! focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod identity;
pub mod store;
pub mod timetable;
