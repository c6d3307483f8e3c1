//! Utility modules.

pub mod date;
