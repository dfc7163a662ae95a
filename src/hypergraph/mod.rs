//! Weighted hypergraphs stored as a pointer array into a flat array of hyperedge members.
mod iterator;
mod object;

pub use iterator::*;
pub use object::*;
