// THEORY:
// Adaptive difficulty is a single bounded counter. A correct answer moves it up one
// level, a wrong answer moves it down one, and it never leaves `[min, max]`. Each
// level maps to a `LevelProfile` describing the grid size and which shape kinds and
// query types are in play, so harder levels bring larger grids and trickier shapes
// rather than just bigger numbers.

use crate::core_modules::question::QueryType;
use crate::core_modules::shape_generator::ShapeKind;
use log::info;

/// What a question at a given level may contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelProfile {
    pub level: u8,
    pub grid_width: u32,
    pub grid_height: u32,
    pub kinds: Vec<ShapeKind>,
    pub queries: Vec<QueryType>,
}

impl LevelProfile {
    /// Levels above 5 reuse the level-5 profile.
    pub fn for_level(level: u8) -> Self {
        use QueryType::*;
        use ShapeKind::*;

        let (grid, kinds, queries): (u32, Vec<ShapeKind>, Vec<QueryType>) = match level {
            0 | 1 => (4, vec![Rectangle], vec![Area]),
            2 => (5, vec![Rectangle, LShape], vec![Area, Perimeter]),
            3 => (6, vec![Rectangle, LShape, TShape], vec![Area, Perimeter, Both]),
            4 => (7, vec![Rectangle, LShape, TShape, Staircase], vec![Area, Perimeter, Both]),
            _ => (8, ShapeKind::ALL.to_vec(), vec![Area, Perimeter, Both]),
        };

        Self {
            level,
            grid_width: grid,
            grid_height: grid,
            kinds,
            queries,
        }
    }
}

/// Bounded up/down difficulty counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyTracker {
    level: u8,
    min: u8,
    max: u8,
}

impl DifficultyTracker {
    pub fn new(start: u8, min: u8, max: u8) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            level: start.clamp(min, max),
            min,
            max,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn profile(&self) -> LevelProfile {
        LevelProfile::for_level(self.level)
    }

    /// Applies one answer and returns the new level.
    pub fn record(&mut self, correct: bool) -> u8 {
        let before = self.level;
        self.level = if correct {
            self.level.saturating_add(1).min(self.max)
        } else {
            self.level.saturating_sub(1).max(self.min)
        };
        if self.level != before {
            info!("difficulty level {} -> {}", before, self.level);
        }
        self.level
    }
}
