// THEORY:
// A `Shape` is the single, spatially coherent region a question is about. It plays
// the same role for the quiz that a detected blob plays for a vision system: a set
// of grid coordinates plus the handful of derived properties (bounding box,
// connectivity) every later stage wants.
//
// Key architectural principles:
// 1.  **Immutable Once Built**: All construction goes through `Shape::new`, which
//     rejects out-of-bounds cells. Deserialisation applies the same check. After
//     that the cell set is only ever read.
// 2.  **Set Semantics**: Cells are stored in a `BTreeSet`, so duplicates collapse
//     on insertion and iteration is row-major (see `Cell`'s ordering).
// 3.  **Connectivity Check**: `is_connected` performs the same 4-neighbour
//     breadth-first region growing a blob detector uses to gather a blob; here it
//     is a validity check for generated shapes rather than a detector.

use crate::core_modules::cell::Cell;
use crate::core_modules::error::ShapeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of unique grid cells, all inside a `grid_width` x `grid_height` grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShapeRepr")]
pub struct Shape {
    grid_width: u32,
    grid_height: u32,
    cells: BTreeSet<Cell>,
}

/// Wire form of a `Shape`. Converting it re-applies the grid bounds check.
#[derive(Deserialize)]
struct ShapeRepr {
    grid_width: u32,
    grid_height: u32,
    cells: Vec<Cell>,
}

impl TryFrom<ShapeRepr> for Shape {
    type Error = ShapeError;

    fn try_from(repr: ShapeRepr) -> Result<Self, Self::Error> {
        let (width, height) = (repr.grid_width, repr.grid_height);
        match repr.cells.iter().find(|c| !c.is_within(width, height)) {
            Some(cell) => Err(ShapeError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                width,
                height,
            }),
            None => Ok(Self {
                grid_width: width,
                grid_height: height,
                cells: repr.cells.into_iter().collect(),
            }),
        }
    }
}

impl Shape {
    /// Builds a shape, or returns `None` if any cell lies outside the grid.
    pub fn new<I>(grid_width: u32, grid_height: u32, cells: I) -> Option<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let cells: BTreeSet<Cell> = cells.into_iter().collect();
        if cells.iter().any(|c| !c.is_within(grid_width, grid_height)) {
            return None;
        }
        Some(Self {
            grid_width,
            grid_height,
            cells,
        })
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    pub fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Top-left and bottom-right corners (inclusive) of the enclosing box.
    pub fn bounding_box(&self) -> Option<(Cell, Cell)> {
        let first = self.cells.iter().next()?;
        let mut min = *first;
        let mut max = *first;
        for cell in &self.cells {
            min.x = min.x.min(cell.x);
            min.y = min.y.min(cell.y);
            max.x = max.x.max(cell.x);
            max.y = max.y.max(cell.y);
        }
        Some((min, max))
    }

    /// True if the shape fills its bounding box exactly.
    pub fn is_rectangle(&self) -> bool {
        match self.bounding_box() {
            Some((min, max)) => {
                let w = (max.x - min.x + 1) as usize;
                let h = (max.y - min.y + 1) as usize;
                w * h == self.cells.len()
            }
            None => false,
        }
    }

    /// Breadth-first reachability from an arbitrary cell. An empty shape is not connected.
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.cells.iter().next() else {
            return false;
        };

        let mut visited: BTreeSet<Cell> = BTreeSet::new();
        let mut queue: Vec<Cell> = vec![start];
        visited.insert(start);

        while let Some(current) = queue.pop() {
            for next in current.neighbors_within(self.grid_width, self.grid_height) {
                if self.cells.contains(&next) && visited.insert(next) {
                    queue.push(next);
                }
            }
        }

        visited.len() == self.cells.len()
    }
}
