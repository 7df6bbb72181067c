//! **gridstar-core** — grid geometry and occupancy types.
//!
//! This crate provides the [`Point`] coordinate and the [`GridMap`]
//! passable/wall grid consumed by the `gridstar-paths` search engine.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{FLOOR_CHAR, GridError, GridMap, WALL_CHAR};
