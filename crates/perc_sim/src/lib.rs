//! # perc_sim: Percolation Engine
//!
//! ## Engine Layer Role
//!
//! perc_sim sits between the foundation crate (`perc_core`) and the service
//! layer, providing:
//! - The percolation grid with backwash-free fullness queries (`grid`)
//! - The Monte Carlo threshold estimator (`mc`)
//! - A seeded RNG wrapper for reproducible trials (`rng`)
//!
//! ## The Percolation Model
//!
//! An n×n grid of sites starts fully blocked. Sites are opened one at a
//! time; the system *percolates* once a path of edge-adjacent open sites
//! connects the top row to the bottom row. Repeating the experiment with
//! random open orders estimates the percolation threshold, the fraction of
//! open sites at the moment of percolation (≈ 0.5927 for large n).
//!
//! ## Usage Examples
//!
//! ```rust
//! use perc_sim::grid::Percolation;
//!
//! let mut grid = Percolation::new(3).unwrap();
//! grid.open(1, 2).unwrap();
//! grid.open(2, 2).unwrap();
//! assert!(!grid.percolates());
//!
//! grid.open(3, 2).unwrap();
//! assert!(grid.percolates());
//! assert!(grid.is_full(3, 2).unwrap());
//! ```
//!
//! Estimating the threshold over repeated trials:
//!
//! ```rust
//! use perc_sim::mc::{EstimatorConfig, ThresholdEstimator};
//!
//! let config = EstimatorConfig::builder()
//!     .side(20)
//!     .trials(30)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let estimate = ThresholdEstimator::new(config).run();
//! assert!(estimate.mean() > 0.4 && estimate.mean() < 0.8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialisation support for [`mc::ThresholdEstimate`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod grid;
pub mod mc;
pub mod rng;
