//! Pure string helpers

pub mod title;
