//! Grid composition: cells, sizing, and the composed [`Grid`] drawable.
//!
//! Callers import layout types from here; placement lives in the private
//! `core` module and sizing arithmetic in [`grid`].

mod cell;
mod core;
pub mod grid;

pub use self::cell::Cell;
pub use self::core::{Composition, Grid, GridComposer, PlacedCell, compose};
pub use self::grid::{GridDims, GridSpec};
