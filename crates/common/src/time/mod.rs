//! Calendar arithmetic for the weekly timetable fetch.
//!
//! - **[`weeks`]**: Mondays of a calendar year and the upstream date format
//!
//! ## Usage
//!
//! ```rust
//! use uoacal_common::time::{format_week_start, mondays_in_year};
//!
//! let mondays = mondays_in_year(2025);
//! assert_eq!(format_week_start(mondays[0]), "30-Dec-2024");
//! ```

pub mod weeks;

pub use weeks::{format_week_start, mondays_in_year, WEEK_START_FORMAT};
