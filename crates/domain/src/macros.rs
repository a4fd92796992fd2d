//! Macro for implementing Display and FromStr for domain enums
//!
//! Generates both conversions from a single variant-to-string table so the
//! wire spelling of a stage or method tag lives in one place. Parsing is
//! case-insensitive.
//!
//! # Example
//!
//! ```rust
//! use uoacal_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum FetchState {
//!     Pending,
//!     Done,
//! }
//!
//! impl_domain_status_conversions!(FetchState {
//!     Pending => "pending",
//!     Done => "done",
//! });
//!
//! assert_eq!(FetchState::Done.to_string(), "done");
//! assert_eq!("PENDING".parse::<FetchState>(), Ok(FetchState::Pending));
//! ```

/// Implements Display and FromStr traits for unit-variant enums
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase string
///   representations
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => ::std::result::Result::Ok(Self::$variant),)+
                    _ => ::std::result::Result::Err(::std::format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
