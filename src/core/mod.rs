//! Core traits shared by the vector and matrix containers.

pub mod traits;
pub use traits::{Element, InnerProduct, MatShape, MatVec};
