//! Shared validation helpers.

pub mod bounds;
