//! A* shortest-path search on occupancy grids.
//!
//! [`PathFinder`] searches a [`GridMap`](gridstar_core::GridMap) with
//! 4-directional unit-cost moves and the [`manhattan`] heuristic, returning
//! an optimal [`Path`] or `None` when the goal cannot be reached.
//!
//! ```
//! use gridstar_core::{GridMap, Point};
//! use gridstar_paths::PathFinder;
//!
//! let mut map = GridMap::new(10, 7);
//! for y in 1..=5 {
//!     map.set_wall(Point::new(4, y), true);
//! }
//! map.set_wall(Point::new(4, 3), false);
//!
//! let path = PathFinder::new()
//!     .find_path(&map, Point::new(1, 3), Point::new(8, 3))
//!     .unwrap();
//! assert_eq!(path.len(), 8);
//! assert!(path.contains(Point::new(4, 3)));
//! ```
//!
//! Each search owns its state and releases it on return; nothing carries
//! over between queries.

mod astar;
mod distance;
mod node;
mod path;

pub use astar::{PathFinder, find_path};
pub use distance::manhattan;
pub use node::{SearchNode, UNVISITED};
pub use path::{Path, Search, SearchStats};
#[cfg(feature = "serde")]
pub use path::PathError;
