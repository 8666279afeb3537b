//! Random number generation for percolation trials.

mod prng;

pub use prng::SimRng;
