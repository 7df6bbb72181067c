//! The [`GridMap`] type: a fixed-size 2D occupancy grid.
//!
//! Every cell is either passable or a wall. Coordinates outside the grid are
//! always reported as walls, so neighbour probing never needs its own bounds
//! check.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by validated grid construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not positive, or the cell count overflows.
    InvalidDimensions { width: i32, height: i32 },
    /// A wall was placed outside the grid.
    OutOfBounds { pos: Point, width: i32, height: i32 },
    /// ASCII input had no rows.
    Empty,
    /// ASCII rows have different widths.
    InconsistentRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// ASCII input contains a character that is neither a wall nor a floor.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "grid: invalid dimensions {width}x{height}")
            }
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "grid: {pos} is outside the {width}x{height} grid")
            }
            Self::Empty => write!(f, "grid: empty map"),
            Self::InconsistentRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

// ---------------------------------------------------------------------------
// GridMap
// ---------------------------------------------------------------------------

/// Character used for walls in ASCII maps.
pub const WALL_CHAR: char = '#';
/// Character used for passable cells in ASCII maps. A space is also accepted
/// when parsing.
pub const FLOOR_CHAR: char = '.';

/// A `width` x `height` grid of passable/wall cells, stored row-major.
///
/// The size is fixed at construction. Walls can be toggled with
/// [`set_wall`](GridMap::set_wall) before searching; the grid is only read
/// during a search, so it can be shared by reference between concurrent
/// searches as long as nobody mutates it meanwhile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl GridMap {
    /// Create a fully passable grid.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not positive. Use
    /// [`try_new`](GridMap::try_new) to get an error instead.
    pub fn new(width: i32, height: i32) -> Self {
        match Self::try_new(width, height) {
            Ok(map) => map,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a fully passable grid, validating the dimensions.
    pub fn try_new(width: i32, height: i32) -> Result<Self, GridError> {
        let invalid = GridError::InvalidDimensions { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid);
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(invalid)?;
        Ok(Self {
            width,
            height,
            walls: vec![false; len],
        })
    }

    /// Parse an ASCII map: `#` is a wall, `.` or a space is passable.
    ///
    /// Rows are separated by newlines and must all have the same width.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s.lines().collect();
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let expected = first.chars().count();
        if expected == 0 {
            return Err(GridError::Empty);
        }
        let width = i32::try_from(expected).map_err(|_| GridError::InvalidDimensions {
            width: i32::MAX,
            height: rows.len().try_into().unwrap_or(i32::MAX),
        })?;
        let height = i32::try_from(rows.len()).map_err(|_| GridError::InvalidDimensions {
            width,
            height: i32::MAX,
        })?;

        let mut map = Self::try_new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != expected {
                return Err(GridError::InconsistentRows {
                    row: y,
                    expected,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                // Both indices fit in i32: they are bounded by width/height.
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    WALL_CHAR => map.set_wall(pos, true),
                    FLOOR_CHAR | ' ' => {}
                    ch => return Err(GridError::InvalidChar { ch, pos }),
                }
            }
        }
        Ok(map)
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size as a `Point` (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of cells (`width * height`). Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Whether `0 <= p.x < width` and `0 <= p.y < height`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Flat row-major index `y * width + x`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Inverse of [`index`](GridMap::index).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `idx` is not a valid cell index.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        debug_assert!(idx < self.len());
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Place (`true`) or remove (`false`) a wall.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid. Placing walls off the map is a
    /// caller bug; use [`try_set_wall`](GridMap::try_set_wall) when the
    /// coordinate comes from untrusted input.
    pub fn set_wall(&mut self, p: Point, wall: bool) {
        if let Err(e) = self.try_set_wall(p, wall) {
            panic!("{e}");
        }
    }

    /// Place or remove a wall, returning an error if `p` is out of bounds.
    pub fn try_set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        let idx = self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            width: self.width,
            height: self.height,
        })?;
        self.walls[idx] = wall;
        Ok(())
    }

    /// Whether `p` is a wall. Out-of-bounds coordinates are always walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        match self.index(p) {
            Some(idx) => self.walls[idx],
            None => true,
        }
    }

    /// Wall bit of the cell at flat index `idx`, as returned by
    /// [`index`](GridMap::index).
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn is_wall_at(&self, idx: usize) -> bool {
        self.walls[idx]
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|idx| !self.walls[idx])
    }

    /// Iterate over wall cells in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.walls
            .iter()
            .enumerate()
            .filter(|&(_, &wall)| wall)
            .map(|(idx, _)| self.point(idx))
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }
}

impl FromStr for GridMap {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s)
    }
}

/// Writes the grid as ASCII rows, the format accepted by
/// [`from_ascii`](GridMap::from_ascii).
impl fmt::Display for GridMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.walls.chunks(self.width as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &wall in row {
                let ch = if wall { WALL_CHAR } else { FLOOR_CHAR };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
