// THEORY:
// The shape generator is the engine of the quiz. It turns a requested pattern kind
// and a grid size into a random, connected set of cells that a student is then asked
// to measure.
//
// Key architectural principles & algorithm steps:
// 1.  **Placed Constructors**: Every patterned kind (rectangle, L, T, staircase) has a
//     deterministic `*_at` constructor that takes an origin and explicit dimensions
//     and returns `None` if the result would not fit the grid. The random generators
//     only choose parameters; the geometry lives in one place.
// 2.  **Clamp, Then Draw**: Random parameters are clamped against the grid before
//     they are drawn, so a valid combination always exists once a grid passes the
//     kind's minimum size check.
// 3.  **Region Growing**: The blob generator grows a region outward from a random
//     seed cell through its 4 direct neighbours, each claimed with a fixed
//     probability. Connectivity holds by construction. When the frontier runs dry
//     it is reseeded from the whole region; growth is best effort and may end short
//     of its target.
// 4.  **Bounded Retry**: `generate_shape` validates every candidate (non-empty,
//     inside the grid, 4-connected) and retries with fresh parameters a fixed number
//     of times before reporting failure. It never loops forever.

use crate::core_modules::cell::Cell;
use crate::core_modules::config::{DEFAULT_GROWTH_PROBABILITY, QuizConfig};
use crate::core_modules::error::GenerationError;
use crate::core_modules::shape::Shape;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The pattern a generated shape follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    LShape,
    TShape,
    Staircase,
    Blob,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Rectangle,
        ShapeKind::LShape,
        ShapeKind::TShape,
        ShapeKind::Staircase,
        ShapeKind::Blob,
    ];

    /// Smallest grid (width, height) this kind can be generated in.
    pub fn min_grid(self) -> (u32, u32) {
        match self {
            ShapeKind::Rectangle | ShapeKind::Blob => (2, 1),
            ShapeKind::LShape => (3, 3),
            ShapeKind::TShape => (3, 2),
            ShapeKind::Staircase => (2, 2),
        }
    }

    /// Rectangles and blobs only need two cells' worth of grid, in either orientation.
    pub fn fits(self, grid_width: u32, grid_height: u32) -> bool {
        match self {
            ShapeKind::Rectangle | ShapeKind::Blob => {
                grid_width >= 1 && grid_height >= 1 && grid_width as u64 * grid_height as u64 >= 2
            }
            _ => {
                let (min_w, min_h) = self.min_grid();
                grid_width >= min_w && grid_height >= min_h
            }
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::LShape => "L-shape",
            ShapeKind::TShape => "T-shape",
            ShapeKind::Staircase => "staircase",
            ShapeKind::Blob => "blob",
        };
        f.write_str(name)
    }
}

pub mod shape_generator {
    use super::*;
    use log::{debug, warn};
    use rand::Rng;
    use std::collections::BTreeSet;

    /// Produces a random, connected shape of `kind` inside a `grid_width` x `grid_height` grid.
    pub fn generate_shape<R: Rng + ?Sized>(
        kind: ShapeKind,
        grid_width: u32,
        grid_height: u32,
        rng: &mut R,
        config: &QuizConfig,
    ) -> Result<Shape, GenerationError> {
        if !kind.fits(grid_width, grid_height) {
            let (min_width, min_height) = kind.min_grid();
            return Err(GenerationError::GridTooSmall {
                kind,
                width: grid_width,
                height: grid_height,
                min_width,
                min_height,
            });
        }

        for attempt in 1..=config.max_attempts {
            let candidate = match kind {
                ShapeKind::Rectangle => random_rectangle(grid_width, grid_height, rng),
                ShapeKind::LShape => random_l_shape(grid_width, grid_height, rng),
                ShapeKind::TShape => random_t_shape(grid_width, grid_height, rng),
                ShapeKind::Staircase => random_staircase(grid_width, grid_height, rng),
                ShapeKind::Blob => grow_blob(grid_width, grid_height, rng, config),
            };

            match candidate {
                Some(shape) if !shape.is_empty() && shape.is_connected() => {
                    debug!(
                        "generated {kind} with {} cells in {grid_width}x{grid_height} grid (attempt {attempt})",
                        shape.len()
                    );
                    return Ok(shape);
                }
                _ => debug!(
                    "rejected {kind} candidate {attempt}/{} in {grid_width}x{grid_height} grid",
                    config.max_attempts
                ),
            }
        }

        warn!(
            "giving up on {kind} in {grid_width}x{grid_height} grid after {} attempts",
            config.max_attempts
        );
        Err(GenerationError::AttemptsExhausted {
            kind,
            width: grid_width,
            height: grid_height,
            attempts: config.max_attempts,
        })
    }

    // --- Placed constructors ---

    /// All cells of the `width` x `height` box whose top-left corner is `origin`.
    pub fn rectangle_at(grid_width: u32, grid_height: u32, origin: Cell, width: u32, height: u32) -> Option<Shape> {
        if width == 0 || height == 0 || !fits_box(grid_width, grid_height, origin, width, height) {
            return None;
        }
        let mut cells = Vec::with_capacity(box_area(width, height) as usize);
        fill_box(&mut cells, origin.x, origin.y, width, height);
        Shape::new(grid_width, grid_height, cells)
    }

    /// A vertical bar `thickness x arm_height` on the left joined to a horizontal bar
    /// `arm_width x thickness` along its bottom; the two share the corner block.
    pub fn l_shape_at(
        grid_width: u32,
        grid_height: u32,
        origin: Cell,
        thickness: u32,
        arm_width: u32,
        arm_height: u32,
    ) -> Option<Shape> {
        if thickness == 0 || arm_width < thickness || arm_height < thickness {
            return None;
        }
        if !fits_box(grid_width, grid_height, origin, arm_width, arm_height) {
            return None;
        }
        let mut cells = Vec::new();
        fill_box(&mut cells, origin.x, origin.y, thickness, arm_height);
        fill_box(&mut cells, origin.x, origin.y + arm_height - thickness, arm_width, thickness);
        Shape::new(grid_width, grid_height, cells)
    }

    /// A cap bar `cap_width x thickness` with a stem `thickness x stem_height` hanging
    /// from its horizontal centre.
    pub fn t_shape_at(
        grid_width: u32,
        grid_height: u32,
        origin: Cell,
        thickness: u32,
        cap_width: u32,
        stem_height: u32,
    ) -> Option<Shape> {
        if thickness == 0 || cap_width < thickness {
            return None;
        }
        if !fits_box(grid_width, grid_height, origin, cap_width, thickness + stem_height) {
            return None;
        }
        let stem_x = origin.x + (cap_width - thickness) / 2;
        let mut cells = Vec::new();
        fill_box(&mut cells, origin.x, origin.y, cap_width, thickness);
        fill_box(&mut cells, stem_x, origin.y + thickness, thickness, stem_height);
        Shape::new(grid_width, grid_height, cells)
    }

    /// `steps` bars of width `thickness`, the k-th (0-based) being `(k + 1) * thickness`
    /// tall, standing side by side on a shared bottom row.
    pub fn staircase_at(grid_width: u32, grid_height: u32, origin: Cell, steps: u32, thickness: u32) -> Option<Shape> {
        if steps == 0 || thickness == 0 {
            return None;
        }
        let side = steps.checked_mul(thickness)?;
        if !fits_box(grid_width, grid_height, origin, side, side) {
            return None;
        }
        let baseline = origin.y + side;
        let mut cells = Vec::new();
        for k in 0..steps {
            let bar_height = (k + 1) * thickness;
            fill_box(&mut cells, origin.x + k * thickness, baseline - bar_height, thickness, bar_height);
        }
        Shape::new(grid_width, grid_height, cells)
    }

    // --- Random generators ---

    /// Redraws a single-cell box; the caller's retry loop covers the (tiny) chance
    /// that every redraw comes up 1x1.
    fn random_rectangle<R: Rng + ?Sized>(grid_width: u32, grid_height: u32, rng: &mut R) -> Option<Shape> {
        for _ in 0..RECTANGLE_REDRAWS {
            let width = rng.gen_range(1..=grid_width);
            let height = rng.gen_range(1..=grid_height);
            if box_area(width, height) < 2 {
                continue;
            }
            let origin = random_origin(grid_width, grid_height, width, height, rng)?;
            return rectangle_at(grid_width, grid_height, origin, width, height);
        }
        None
    }

    fn random_l_shape<R: Rng + ?Sized>(grid_width: u32, grid_height: u32, rng: &mut R) -> Option<Shape> {
        let max_arm_width = grid_width.checked_sub(1)?;
        let max_arm_height = grid_height.checked_sub(1)?;
        // Each arm must be longer than the bar is thick or the L collapses into a rectangle.
        let thickness = rng
            .gen_range(1u32..=2)
            .min(max_arm_width.saturating_sub(1))
            .min(max_arm_height.saturating_sub(1));
        if thickness == 0 {
            return None;
        }
        let arm_width = rng.gen_range((thickness + 1).max(2)..=max_arm_width);
        let arm_height = rng.gen_range((thickness + 1).max(2)..=max_arm_height);
        let origin = random_origin(grid_width, grid_height, arm_width, arm_height, rng)?;
        l_shape_at(grid_width, grid_height, origin, thickness, arm_width, arm_height)
    }

    fn random_t_shape<R: Rng + ?Sized>(grid_width: u32, grid_height: u32, rng: &mut R) -> Option<Shape> {
        let thickness = rng
            .gen_range(1u32..=2)
            .min(grid_width.saturating_sub(2))
            .min(grid_height.saturating_sub(1));
        if thickness == 0 {
            return None;
        }
        let cap_width = rng.gen_range(thickness + 2..=grid_width);
        let stem_height = rng.gen_range(1..=grid_height - thickness);
        let origin = random_origin(grid_width, grid_height, cap_width, thickness + stem_height, rng)?;
        t_shape_at(grid_width, grid_height, origin, thickness, cap_width, stem_height)
    }

    fn random_staircase<R: Rng + ?Sized>(grid_width: u32, grid_height: u32, rng: &mut R) -> Option<Shape> {
        let limit = grid_width.min(grid_height);
        let mut steps: u32 = rng.gen_range(2..=4);
        let mut thickness: u32 = rng.gen_range(1..=2);
        while steps * thickness > limit {
            if thickness > 1 {
                thickness -= 1;
            } else {
                steps -= 1;
            }
        }
        if steps < 2 {
            return None;
        }
        let side = steps * thickness;
        let origin = random_origin(grid_width, grid_height, side, side, rng)?;
        staircase_at(grid_width, grid_height, origin, steps, thickness)
    }

    /// How a blob's growth went: the size it aimed for and how often it reseeded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BlobGrowth {
        pub target: usize,
        pub reseeds: u32,
    }

    /// Randomised connected-region growth. Returns whatever region was grown if growth stalls.
    pub fn grow_blob<R: Rng + ?Sized>(
        grid_width: u32,
        grid_height: u32,
        rng: &mut R,
        config: &QuizConfig,
    ) -> Option<Shape> {
        grow_blob_traced(grid_width, grid_height, rng, config).map(|(shape, _)| shape)
    }

    /// `grow_blob`, also reporting the target size and the number of frontier reseeds.
    pub fn grow_blob_traced<R: Rng + ?Sized>(
        grid_width: u32,
        grid_height: u32,
        rng: &mut R,
        config: &QuizConfig,
    ) -> Option<(Shape, BlobGrowth)> {
        let grid_area = grid_width as usize * grid_height as usize;
        if grid_area < 2 {
            return None;
        }
        let upper = config.blob_max_cells.min(grid_area - 1).max(1);
        let lower = config.blob_min_cells.clamp(1, upper);
        let target = rng.gen_range(lower..=upper);
        let growth_probability = if (0.0..=1.0).contains(&config.growth_probability) {
            config.growth_probability
        } else {
            DEFAULT_GROWTH_PROBABILITY
        };

        let start = Cell::new(rng.gen_range(0..grid_width), rng.gen_range(0..grid_height));
        let mut region: BTreeSet<Cell> = BTreeSet::from([start]);
        let mut frontier: Vec<Cell> = vec![start];
        let mut reseeds = 0;

        while region.len() < target {
            if frontier.is_empty() {
                let can_grow = region.iter().any(|cell| {
                    cell.neighbors_within(grid_width, grid_height)
                        .any(|n| !region.contains(&n))
                });
                if !can_grow || reseeds >= config.max_blob_reseeds {
                    debug!(
                        "blob growth stalled at {} of {target} cells after {reseeds} reseeds",
                        region.len()
                    );
                    break;
                }
                reseeds += 1;
                frontier.extend(region.iter().copied());
            }

            let index = rng.gen_range(0..frontier.len());
            let current = frontier.swap_remove(index);
            for next in current.neighbors_within(grid_width, grid_height) {
                if region.len() >= target {
                    break;
                }
                if !region.contains(&next) && rng.gen_bool(growth_probability) {
                    region.insert(next);
                    frontier.push(next);
                }
            }
        }

        Shape::new(grid_width, grid_height, region).map(|shape| (shape, BlobGrowth { target, reseeds }))
    }

    // --- Helpers ---

    const RECTANGLE_REDRAWS: u32 = 16;

    pub(super) fn box_area(width: u32, height: u32) -> u64 {
        width as u64 * height as u64
    }

    fn fits_box(grid_width: u32, grid_height: u32, origin: Cell, width: u32, height: u32) -> bool {
        origin.x as u64 + width as u64 <= grid_width as u64 && origin.y as u64 + height as u64 <= grid_height as u64
    }

    fn fill_box(cells: &mut Vec<Cell>, x0: u32, y0: u32, width: u32, height: u32) {
        for y in y0..y0 + height {
            for x in x0..x0 + width {
                cells.push(Cell::new(x, y));
            }
        }
    }

    fn random_origin<R: Rng + ?Sized>(
        grid_width: u32,
        grid_height: u32,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Option<Cell> {
        let max_x = grid_width.checked_sub(width)?;
        let max_y = grid_height.checked_sub(height)?;
        Some(Cell::new(rng.gen_range(0..=max_x), rng.gen_range(0..=max_y)))
    }
}

#[cfg(test)]
mod tests {
    use super::shape_generator::*;
    use super::*;
    use crate::core_modules::metrics::metrics::compute_metrics;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn cell_list(shape: &Shape) -> Vec<(u32, u32)> {
        shape.cells().iter().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn rectangle_at_origin_matches_worked_example() {
        let shape = rectangle_at(5, 5, Cell::new(0, 0), 3, 2).unwrap();
        let mut expected = vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)];
        expected.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(cell_list(&shape), expected);

        let metrics = compute_metrics(&shape);
        assert_eq!(metrics.area, 6);
        assert_eq!(metrics.perimeter, 10);
    }

    #[test]
    fn l_shape_at_origin_matches_worked_example() {
        let shape = l_shape_at(5, 5, Cell::new(0, 0), 1, 3, 3).unwrap();
        assert_eq!(cell_list(&shape), vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);

        let metrics = compute_metrics(&shape);
        assert_eq!(metrics.area, 5);
        assert_eq!(metrics.perimeter, 12);
    }

    #[test]
    fn t_shape_stem_hangs_from_cap_centre() {
        let shape = t_shape_at(5, 5, Cell::new(0, 0), 1, 3, 2).unwrap();
        assert_eq!(cell_list(&shape), vec![(0, 0), (1, 0), (2, 0), (1, 1), (1, 2)]);
        assert_eq!(compute_metrics(&shape).perimeter, 12);
    }

    #[test]
    fn staircase_bars_share_baseline() {
        let shape = staircase_at(4, 4, Cell::new(0, 0), 3, 1).unwrap();
        assert_eq!(
            cell_list(&shape),
            vec![(2, 0), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
        let metrics = compute_metrics(&shape);
        assert_eq!(metrics.area, 6);
        // A staircase has the same perimeter as its bounding square.
        assert_eq!(metrics.perimeter, 12);
    }

    #[test]
    fn thick_staircase_scales_each_step() {
        let shape = staircase_at(4, 4, Cell::new(0, 0), 2, 2).unwrap();
        assert_eq!(shape.len(), 4 + 8);
        assert_eq!(compute_metrics(&shape).perimeter, 16);
    }

    #[test]
    fn placed_constructors_reject_overflowing_boxes() {
        assert!(rectangle_at(3, 3, Cell::new(2, 0), 2, 1).is_none());
        assert!(l_shape_at(3, 3, Cell::new(1, 1), 1, 3, 2).is_none());
        assert!(t_shape_at(3, 3, Cell::new(0, 1), 1, 3, 2).is_none());
        assert!(staircase_at(3, 3, Cell::new(0, 0), 4, 1).is_none());
        assert!(rectangle_at(3, 3, Cell::new(0, 0), 0, 2).is_none());
    }

    #[test]
    fn every_kind_stays_connected_and_in_bounds() {
        let config = QuizConfig::default();
        for seed in 0..150u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for kind in ShapeKind::ALL {
                for (w, h) in [(3, 3), (4, 6), (8, 8), (10, 5)] {
                    let shape = generate_shape(kind, w, h, &mut rng, &config)
                        .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
                    assert!(!shape.is_empty());
                    assert!(shape.is_connected(), "seed {seed}: {kind} not connected");
                    assert!(shape.cells().iter().all(|c| c.is_within(w, h)));
                    let metrics = compute_metrics(&shape);
                    assert!(metrics.perimeter > 0 && metrics.perimeter % 2 == 0);
                }
            }
        }
    }

    #[test]
    fn patterned_kinds_are_never_plain_rectangles() {
        let config = QuizConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            for kind in [ShapeKind::LShape, ShapeKind::TShape, ShapeKind::Staircase] {
                let shape = generate_shape(kind, 7, 7, &mut rng, &config).unwrap();
                assert!(!shape.is_rectangle(), "{kind} degenerated to a rectangle");
            }
        }
    }

    #[test]
    fn rectangles_always_cover_at_least_two_cells() {
        let config = QuizConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let tall = generate_shape(ShapeKind::Rectangle, 1, 4, &mut rng, &config).unwrap();
            assert!(tall.len() >= 2 && tall.is_rectangle());
            let any = generate_shape(ShapeKind::Rectangle, 5, 3, &mut rng, &config).unwrap();
            assert!(any.len() >= 2 && any.is_rectangle());
        }
    }

    #[test]
    fn blob_respects_size_range() {
        let config = QuizConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let (blob, growth) = grow_blob_traced(8, 8, &mut rng, &config).unwrap();
            assert!((6..=14).contains(&growth.target));
            assert!(blob.len() <= 14);
            assert!(blob.is_connected());
            if growth.reseeds < config.max_blob_reseeds {
                assert_eq!(blob.len(), growth.target);
                assert!(blob.len() >= 6);
            }
        }
        // A 2x2 grid caps the blob at grid_area - 1 cells.
        for _ in 0..50 {
            let blob = grow_blob(2, 2, &mut rng, &config).unwrap();
            assert!(blob.len() <= 3);
        }
    }

    #[test]
    fn certain_growth_always_reaches_target() {
        let config = QuizConfig {
            growth_probability: 1.0,
            ..QuizConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..200 {
            let blob = grow_blob(6, 6, &mut rng, &config).unwrap();
            assert!((6..=14).contains(&blob.len()), "got {}", blob.len());
        }
    }

    #[test]
    fn sparse_growth_keeps_going_after_reseeding() {
        let config = QuizConfig {
            growth_probability: 0.1,
            max_blob_reseeds: 10_000,
            ..QuizConfig::default()
        };
        let mut total_reseeds = 0;
        for seed in 0..100u64 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (blob, growth) = grow_blob_traced(8, 8, &mut rng, &config).unwrap();
            assert!(blob.len() >= 6, "seed {seed}: stopped at {} cells", blob.len());
            assert_eq!(blob.len(), growth.target);
            assert!(blob.is_connected());
            total_reseeds += growth.reseeds;
        }
        // At p = 0.1 a lone seed cell empties its frontier most of the time.
        assert!(total_reseeds > 0);
    }

    #[test]
    fn stalled_growth_returns_partial_region() {
        let config = QuizConfig {
            growth_probability: 0.0,
            max_blob_reseeds: 3,
            ..QuizConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let (blob, growth) = grow_blob_traced(5, 5, &mut rng, &config).unwrap();
        assert_eq!(blob.len(), 1);
        assert_eq!(growth.reseeds, 3);
    }

    #[test]
    fn box_area_does_not_overflow_on_huge_grids() {
        assert_eq!(box_area(100_000, 100_000), 10_000_000_000);
        assert_eq!(box_area(u32::MAX, 2), 2 * u32::MAX as u64);
        let far = Cell::new(u32::MAX - 2, u32::MAX - 1);
        let corner = rectangle_at(u32::MAX, u32::MAX, far, 2, 1).unwrap();
        assert_eq!(corner.len(), 2);
    }

    #[test]
    fn rectangle_sizes_are_redrawn_not_forced() {
        let config = QuizConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut two_by_one = 0;
        let mut three_by_one = 0;
        for _ in 0..4000 {
            let shape = generate_shape(ShapeKind::Rectangle, 3, 3, &mut rng, &config).unwrap();
            let (min, max) = shape.bounding_box().unwrap();
            match (max.x - min.x + 1, max.y - min.y + 1) {
                (2, 1) => two_by_one += 1,
                (3, 1) => three_by_one += 1,
                _ => {}
            }
        }
        // Every size other than 1x1 is equally likely: about 500 of 4000 each.
        assert!((two_by_one as i32 - three_by_one as i32).abs() < 200, "{two_by_one} vs {three_by_one}");
    }

    #[test]
    fn same_seed_same_shape() {
        let config = QuizConfig::default();
        for kind in ShapeKind::ALL {
            let a = generate_shape(kind, 7, 7, &mut ChaCha8Rng::seed_from_u64(42), &config).unwrap();
            let b = generate_shape(kind, 7, 7, &mut ChaCha8Rng::seed_from_u64(42), &config).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn grid_below_minimum_is_reported() {
        let config = QuizConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = generate_shape(ShapeKind::LShape, 2, 5, &mut rng, &config).unwrap_err();
        assert_eq!(
            err,
            GenerationError::GridTooSmall {
                kind: ShapeKind::LShape,
                width: 2,
                height: 5,
                min_width: 3,
                min_height: 3,
            }
        );
        assert!(generate_shape(ShapeKind::Rectangle, 1, 1, &mut rng, &config).is_err());
        assert!(generate_shape(ShapeKind::Blob, 0, 4, &mut rng, &config).is_err());
        assert!(generate_shape(ShapeKind::TShape, 3, 1, &mut rng, &config).is_err());
        assert!(generate_shape(ShapeKind::Staircase, 2, 2, &mut rng, &config).is_ok());
    }

    #[test]
    fn zero_attempt_budget_exhausts_immediately() {
        let config = QuizConfig {
            max_attempts: 0,
            ..QuizConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let err = generate_shape(ShapeKind::Rectangle, 4, 4, &mut rng, &config).unwrap_err();
        assert!(matches!(err, GenerationError::AttemptsExhausted { attempts: 0, .. }));
    }
}
