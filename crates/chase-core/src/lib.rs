//! **chase-core**: core types for grid pursuit.
//!
//! Geometry primitives ([`Point`], [`Range`]) and the terrain [`Grid`] that
//! the search engine in `chase-paths` reads.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::{BLOCKED, Cell, Grid, OPEN};
