//! Collection types backing the percolation engine.

mod union_find;

pub use union_find::{DisjointSet, WeightedUnionFind};
