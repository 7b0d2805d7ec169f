//! A* pathfinding over 8-connected terrain grids.
//!
//! The engine ([`astar_path`]) works through a small trait hierarchy so any
//! grid-like map can be searched; [`chase_core::Grid`] implements all of it.
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | bounds and successor enumeration |
//! | [`WeightedPather`] : [`Pather`] | per-cell entry cost, `None` = impassable |
//! | [`AstarPather`] : [`WeightedPather`] | heuristic, Euclidean by default |
//!
//! Searches never write to the map. Scores, predecessors and the open and
//! closed sets are scratch owned by each call.

mod astar;
mod distance;
mod frontier;
mod neighbors;
mod path;
mod traits;

pub use astar::{astar_path, search};
pub use distance::{chebyshev, euclidean};
pub use neighbors::{SUCCESSOR_OFFSETS, successors};
pub use path::Path;
pub use traits::{AstarPather, Pather, WeightedPather};
