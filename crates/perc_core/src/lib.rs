//! # perc_core: Foundation for Percolation Experiments
//!
//! ## Foundation Layer Role
//!
//! perc_core is the bottom layer of the workspace, providing:
//! - Disjoint-set forest with near-constant-time connectivity
//!   (`collections::union_find`)
//! - Numerically stable descriptive statistics (`stats`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other workspace crates and
//! no runtime external dependencies. It can be built with stable Rust.
//!
//! ## Usage Examples
//!
//! ```rust
//! use perc_core::collections::{DisjointSet, WeightedUnionFind};
//! use perc_core::stats;
//!
//! // Connectivity over a fixed universe of labels
//! let mut forest = WeightedUnionFind::new(4);
//! forest.union(0, 1);
//! forest.union(1, 2);
//! assert!(forest.connected(0, 2));
//!
//! // Summary statistics over recorded observations
//! let observations = [0.59, 0.61, 0.58, 0.60];
//! let mean = stats::mean(&observations).unwrap();
//! assert!((mean - 0.595).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod collections;
pub mod stats;
