//! The terrain [`Grid`]: a fixed-size 2D array of [`Cell`]s.
//!
//! Each cell stores the cost of *entering* it. Any negative cost marks the
//! cell impassable; [`BLOCKED`] is the canonical value. The grid holds no
//! search state, so any number of searches may borrow it at once.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Canonical impassable cost.
pub const BLOCKED: i32 = -1;

/// Default entry cost of open terrain.
pub const OPEN: i32 = 1;

/// A single terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub cost: i32,
}

impl Cell {
    /// Create a new cell.
    pub const fn new(pos: Point, cost: i32) -> Self {
        Self { pos, cost }
    }

    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_passable(self) -> bool {
        self.cost >= 0
    }
}

/// A fixed-size 2D grid of [`Cell`]s, stored row-major.
///
/// Dimensions are set at construction and never change; only entry costs
/// may be flipped afterwards (obstacles, agents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid where every cell costs [`OPEN`].
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Self::from_fn(width, height, |_| OPEN)
    }

    /// Create a grid whose cost at each point is given by `cost`.
    pub fn from_fn(
        width: i32,
        height: i32,
        mut cost: impl FnMut(Point) -> i32,
    ) -> Result<Self, GridError> {
        let bounds = Self::checked_bounds(width, height)?;
        let cells = bounds.iter().map(|p| Cell::new(p, cost(p))).collect();
        Ok(Self { cells, bounds })
    }

    /// Create a grid from a row-major cost buffer of exactly
    /// `width * height` entries.
    pub fn from_costs(width: i32, height: i32, costs: Vec<i32>) -> Result<Self, GridError> {
        let bounds = Self::checked_bounds(width, height)?;
        if costs.len() != bounds.len() {
            return Err(GridError::SizeMismatch {
                expected: bounds.len(),
                got: costs.len(),
            });
        }
        let cells = bounds
            .iter()
            .zip(costs)
            .map(|(p, c)| Cell::new(p, c))
            .collect();
        Ok(Self { cells, bounds })
    }

    /// Parse an ASCII map: `.` is open terrain, `#` is blocked and the
    /// digits `0`-`9` are entry costs. All rows must have the same width.
    pub fn parse(map: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = map.lines().map(|l| l.trim_end_matches('\r')).collect();
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as i32;
        let bounds = Self::checked_bounds(width, height)?;

        let mut costs = Vec::with_capacity(bounds.len());
        for (y, row) in rows.iter().enumerate() {
            let n = row.chars().count();
            if n != width as usize {
                return Err(GridError::SizeMismatch {
                    expected: width as usize,
                    got: n,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let cost = match ch {
                    '.' => OPEN,
                    '#' => BLOCKED,
                    '0'..='9' => ch as i32 - '0' as i32,
                    _ => {
                        return Err(GridError::InvalidRune {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                costs.push(cost);
            }
        }
        Self::from_costs(width, height, costs)
    }

    fn checked_bounds(width: i32, height: i32) -> Result<Range, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::DegenerateGrid { width, height });
        }
        Ok(Range::new(0, 0, width, height))
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: degenerate grids are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or [`GridError::OutOfBounds`].
    #[inline]
    pub fn check(&self, p: Point) -> Result<usize, GridError> {
        self.bounds.index_of(p).ok_or(GridError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&Cell> {
        self.bounds.index_of(p).map(|i| &self.cells[i])
    }

    /// Entry cost of `p`, or `None` if out of bounds.
    #[inline]
    pub fn cost(&self, p: Point) -> Option<i32> {
        self.at(p).map(|c| c.cost)
    }

    /// Whether `p` is in bounds and can be entered.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| c.is_passable())
    }

    /// Set the entry cost of `p`.
    pub fn set_cost(&mut self, p: Point, cost: i32) -> Result<(), GridError> {
        let i = self.check(p)?;
        self.cells[i].cost = cost;
        Ok(())
    }

    /// Mark `p` impassable.
    pub fn block(&mut self, p: Point) -> Result<(), GridError> {
        self.set_cost(p, BLOCKED)
    }

    /// Reset `p` to open terrain.
    pub fn clear(&mut self, p: Point) -> Result<(), GridError> {
        self.set_cost(p, OPEN)
    }

    /// Count the impassable cells.
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_passable()).count()
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Row-major costs, the inverse of [`from_costs`](Grid::from_costs).
    pub fn costs(&self) -> Vec<i32> {
        self.cells.iter().map(|c| c.cost).collect()
    }

    /// The map glyph used by [`parse`](Grid::parse) and `Display`.
    pub fn glyph(cost: i32) -> char {
        match cost {
            c if c < 0 => '#',
            1 => '.',
            c => char::from_digit(c.clamp(0, 9) as u32, 10).unwrap_or('9'),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width() as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", Self::glyph(c.cost))?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    costs: Vec<i32>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            width: self.width(),
            height: self.height(),
            costs: self.costs(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Grid::from_costs(repr.width, repr.height, repr.costs).map_err(serde::de::Error::custom)
    }
}
