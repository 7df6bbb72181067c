use gridstar_core::Point;

/// A path found by [`PathFinder`](crate::PathFinder).
///
/// Holds every cell from start to goal, both included, and the total cost.
/// With unit step costs the cost equals the number of steps, so
/// `len() == cost() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PathRepr"))]
pub struct Path {
    points: Vec<Point>,
    cost: i32,
}

/// Unchecked wire form of [`Path`]; validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PathRepr {
    points: Vec<Point>,
    cost: i32,
}

/// Why a deserialized path was rejected.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path has no cells.
    Empty,
    /// The cell count does not equal `cost + 1`.
    CostMismatch { len: usize, cost: i32 },
    /// Two consecutive cells are not one orthogonal step apart.
    Disconnected { from: Point, to: Point },
}

#[cfg(feature = "serde")]
impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "path: no cells"),
            Self::CostMismatch { len, cost } => {
                write!(f, "path: {len} cells do not match cost {cost}")
            }
            Self::Disconnected { from, to } => {
                write!(f, "path: {from} -> {to} is not a unit step")
            }
        }
    }
}

#[cfg(feature = "serde")]
impl std::error::Error for PathError {}

#[cfg(feature = "serde")]
impl TryFrom<PathRepr> for Path {
    type Error = PathError;

    fn try_from(repr: PathRepr) -> Result<Self, Self::Error> {
        let PathRepr { points, cost } = repr;
        if points.is_empty() {
            return Err(PathError::Empty);
        }
        if usize::try_from(cost).ok().and_then(|c| c.checked_add(1)) != Some(points.len()) {
            return Err(PathError::CostMismatch {
                len: points.len(),
                cost,
            });
        }
        if let Some(w) = points.windows(2).find(|w| !w[0].is_adjacent_4(w[1])) {
            return Err(PathError::Disconnected {
                from: w[0],
                to: w[1],
            });
        }
        Ok(Self { points, cost })
    }
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, cost: i32) -> Self {
        debug_assert!(!points.is_empty());
        debug_assert_eq!(points.len(), cost as usize + 1);
        Self { points, cost }
    }

    /// The cells of the path, start first.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consume the path, returning its cells.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Total cost: the goal's final `g`.
    pub fn cost(&self) -> i32 {
        self.cost
    }

    /// Number of cells, including both endpoints.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn goal(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn steps(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.points
    }
}

/// Counters describing the work done by one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells closed (expanded). Never exceeds the grid's cell count.
    pub expanded: usize,
    /// Entries pushed onto the frontier, including superseded ones.
    pub pushed: u64,
    /// Popped entries discarded because their cell was already closed.
    pub stale: u64,
    /// Largest frontier size reached.
    pub max_frontier: usize,
}

/// Outcome of [`PathFinder::search`](crate::PathFinder::search).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    /// The path, or `None` if the goal cannot be reached.
    pub path: Option<Path>,
    pub stats: SearchStats,
}

impl Search {
    pub(crate) fn miss(stats: SearchStats) -> Self {
        Self { path: None, stats }
    }

    /// Whether a path was found.
    pub fn found(&self) -> bool {
        self.path.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accessors() {
        let pts = vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        let path = Path::new(pts.clone(), 2);
        assert_eq!(path.len(), 3);
        assert_eq!(path.cost(), 2);
        assert_eq!(path.start(), Point::new(0, 0));
        assert_eq!(path.goal(), Point::new(1, 1));
        assert!(path.contains(Point::new(1, 0)));
        assert!(!path.contains(Point::new(0, 1)));
        let steps: Vec<_> = path.steps().collect();
        assert_eq!(
            steps,
            vec![
                (Point::new(0, 0), Point::new(1, 0)),
                (Point::new(1, 0), Point::new(1, 1)),
            ]
        );
        assert_eq!(Vec::from(path), pts);
    }

    #[test]
    fn single_cell_path_has_no_steps() {
        let path = Path::new(vec![Point::new(4, 4)], 0);
        assert_eq!(path.start(), path.goal());
        assert_eq!(path.steps().count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let path = Path::new(vec![Point::new(1, 3), Point::new(2, 3)], 1);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(path, back);
    }

    #[test]
    fn path_rejects_invalid_input() {
        let err = serde_json::from_str::<Path>(r#"{"points":[],"cost":5}"#).unwrap_err();
        assert!(err.to_string().contains("no cells"), "{err}");

        let err = serde_json::from_str::<Path>(
            r#"{"points":[{"x":0,"y":0},{"x":1,"y":0}],"cost":5}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("do not match cost"), "{err}");

        let err = serde_json::from_str::<Path>(r#"{"points":[{"x":0,"y":0}],"cost":-1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("do not match cost"), "{err}");

        let err = serde_json::from_str::<Path>(
            r#"{"points":[{"x":0,"y":0},{"x":2,"y":0}],"cost":1}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not a unit step"), "{err}");
    }

    #[test]
    fn single_cell_path_deserializes() {
        let path: Path = serde_json::from_str(r#"{"points":[{"x":4,"y":4}],"cost":0}"#).unwrap();
        assert_eq!(path.start(), path.goal());
    }

    #[test]
    fn stats_round_trip() {
        let stats = SearchStats {
            expanded: 12,
            pushed: 20,
            stale: 2,
            max_frontier: 7,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
