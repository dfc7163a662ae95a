//! A minimal set of array operations which are sufficient to build and analyse hypergraphs.
pub mod traits;
pub mod vec;

pub use traits::*;
