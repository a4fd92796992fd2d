//! # better-uoa-cal Domain
//!
//! Business domain types for the timetable bridge.
//!
//! This crate contains:
//! - Token, timetable and calendar types
//! - Domain error types and Result definitions
//! - Configuration structures with production defaults
//! - Request/response shapes of the public RPC surface
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::title::calendar_title;
