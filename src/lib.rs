//! Dense 2D cellular automaton grid with synchronous Moore-neighborhood
//! updates.
//!
//! [`Grid`] owns a fixed-size boolean lattice. [`Grid::update()`] applies a
//! caller-supplied transition rule to every cell's [`Neighborhood`] — the
//! ordered 3x3 snapshot of the *previous* generation around that cell — and
//! swaps the next generation in wholesale, so no cell ever observes a
//! same-pass neighbor value. Coordinates outside the lattice always read as
//! dead.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

mod error;
mod grid;
mod neighborhood;

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use neighborhood::{Neighbor, Neighborhood, NEIGHBORS};

#[cfg(test)]
mod tests;
