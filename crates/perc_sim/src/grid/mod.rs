//! Percolation grid with backwash-free fullness queries.
//!
//! This module models an n×n grid of sites, each open or blocked, and
//! answers connectivity queries while sites are opened one at a time.
//!
//! # The Backwash Problem
//!
//! The textbook construction links every top-row site to a virtual top node
//! and every bottom-row site to a virtual bottom node, then reports
//! percolation as `connected(top, bottom)`. That design answers `is_full`
//! wrongly: once the system percolates, any open site connected to the
//! bottom appears connected to the top *through the virtual bottom node*,
//! even with no open path to the top row.
//!
//! # Per-Root Anchor Tracking
//!
//! No virtual nodes exist here. Instead, each component carries an
//! [`Anchors`] bitmask (touches-top, touches-bottom) stored at its current
//! forest root. Opening a site ORs the neighbouring components' anchors
//! together, merges the components, and writes the combined mask to the root
//! of the merged component. Fullness is then a pure top-side fact and the
//! system percolates exactly when one component's mask spans both rows.

mod anchors;
mod error;
mod percolation;

pub use anchors::Anchors;
pub use error::GridError;
pub use percolation::Percolation;
