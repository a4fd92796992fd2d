//! # better-uoa-cal API
//!
//! HTTP application layer - routes and main entry point.
//!
//! This crate contains:
//! - RPC handlers (`getRefreshToken`, `createCalendar`)
//! - The calendar file endpoint and health check
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `common`, `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Serves everything through one `axum` router

pub mod commands;
pub mod context;
pub mod error;
pub mod router;
pub mod utils;

// Re-export for convenience
pub use context::AppContext;
pub use error::ApiError;
pub use router::build_router;
