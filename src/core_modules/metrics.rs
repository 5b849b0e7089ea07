// THEORY:
// `Metrics` is the answer key for a question. It is computed once, when the shape is
// generated, and travels with the shape so that answer checking and the worked-step
// explanation never have to look at the geometry again.
//
// Key architectural principles:
// 1.  **Exposed-Edge Counting**: The perimeter is not derived from a formula. Every
//     cell contributes each of its four faces whose neighbour is outside the shape
//     (the grid boundary counts as outside). Faces shared by two shape cells are
//     never counted, so concave shapes and shapes with holes come out right.
// 2.  **Breakdowns for Teaching**: Alongside the totals, the exposed faces are split
//     into horizontal (top/bottom) and vertical (left/right) tallies, and cells are
//     tallied per row. These only exist to drive explanations.
// 3.  **Pure Function**: `compute_metrics` reads the shape and nothing else.

use crate::core_modules::shape::Shape;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Derived, read-only measurements of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Number of cells in the shape.
    pub area: usize,
    /// Number of unit edges between a shape cell and a non-shape cell or the grid boundary.
    pub perimeter: usize,
    /// Cell count per row index. Rows without cells are absent.
    pub row_counts: BTreeMap<u32, usize>,
    /// Exposed top and bottom faces.
    pub horizontal_edges: usize,
    /// Exposed left and right faces.
    pub vertical_edges: usize,
}

pub mod metrics {
    use super::*;
    use crate::core_modules::cell::Direction;

    pub fn compute_metrics(shape: &Shape) -> Metrics {
        let mut row_counts: BTreeMap<u32, usize> = BTreeMap::new();
        let mut horizontal_edges = 0;
        let mut vertical_edges = 0;

        for &cell in shape.cells() {
            *row_counts.entry(cell.y).or_insert(0) += 1;

            for direction in Direction::ALL {
                // Off-grid (including negative) neighbours are never in the shape.
                let covered = cell
                    .neighbor(direction)
                    .is_some_and(|n| shape.contains(n));
                if covered {
                    continue;
                }
                if direction.is_horizontal_face() {
                    horizontal_edges += 1;
                } else {
                    vertical_edges += 1;
                }
            }
        }

        Metrics {
            area: shape.len(),
            perimeter: horizontal_edges + vertical_edges,
            row_counts,
            horizontal_edges,
            vertical_edges,
        }
    }
}
