//! Configuration for construction bounds and text framing.

pub mod options;
pub use options::{FormatOptions, Limits};
