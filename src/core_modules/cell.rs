// THEORY:
// A `Cell` is the atom of the whole system: one unit square on the quiz grid,
// addressed by its column (`x`) and row (`y`). Like the pixel and chunk types it
// descends from, it is a "dumb" data container with no lifecycle of its own; it
// only ever exists as a member of a `Shape`.
//
// Key architectural principles:
// 1.  **Row-Major Ordering**: `Ord` compares `y` first, then `x`. Any ordered set
//     of cells therefore iterates top-to-bottom, left-to-right, which is exactly
//     the order the rasteriser and the "area by rows" explanation want.
// 2.  **Bounded Neighbourhood**: Grid coordinates are unsigned, so stepping off
//     the top or left edge is unrepresentable. `neighbor` returns `None` there,
//     and `neighbor_within` additionally rejects the right and bottom edges.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One of the four edge-sharing directions on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Up/Down faces are horizontal edges; Left/Right faces are vertical edges.
    pub fn is_horizontal_face(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A single unit square on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `direction`, or `None` if it would have a negative coordinate.
    pub fn neighbor(self, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.offset();
        let nx = self.x as i64 + dx;
        let ny = self.y as i64 + dy;
        if nx < 0 || ny < 0 || nx > u32::MAX as i64 || ny > u32::MAX as i64 {
            return None;
        }
        Some(Cell::new(nx as u32, ny as u32))
    }

    /// The adjacent cell in `direction`, if it lies inside a `grid_width` x `grid_height` grid.
    pub fn neighbor_within(self, direction: Direction, grid_width: u32, grid_height: u32) -> Option<Cell> {
        self.neighbor(direction)
            .filter(|n| n.is_within(grid_width, grid_height))
    }

    /// All in-bounds 4-neighbours.
    pub fn neighbors_within(self, grid_width: u32, grid_height: u32) -> impl Iterator<Item = Cell> {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor_within(d, grid_width, grid_height))
    }

    pub fn is_within(self, grid_width: u32, grid_height: u32) -> bool {
        self.x < grid_width && self.y < grid_height
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Cell::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_off_top_left_is_none() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.neighbor(Direction::Up), None);
        assert_eq!(origin.neighbor(Direction::Left), None);
        assert_eq!(origin.neighbor(Direction::Right), Some(Cell::new(1, 0)));
        assert_eq!(origin.neighbor(Direction::Down), Some(Cell::new(0, 1)));
    }

    #[test]
    fn neighbors_within_respects_grid_edges() {
        let corner = Cell::new(2, 1);
        let mut found: Vec<Cell> = corner.neighbors_within(3, 2).collect();
        found.sort();
        assert_eq!(found, vec![Cell::new(2, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(0, 1), Cell::new(2, 0), Cell::new(1, 0)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(1, 0), Cell::new(2, 0), Cell::new(0, 1)]);
    }
}
