// THEORY:
// The `quiz` module is the top-level API of the crate. It wires the layers together
// into the loop a quiz widget runs: draw a question at the current difficulty, take
// the student's typed answer, check it, explain it, and move the difficulty.
//
// The engine owns the only mutable state in the system: the random number generator,
// the difficulty counter and a question sequence number. Questions themselves are
// immutable values handed out to the caller and handed back on submission.

use crate::core_modules::answer::parse_answer;
use crate::core_modules::config::QuizConfig;
use crate::core_modules::difficulty::{DifficultyTracker, LevelProfile};
use crate::core_modules::error::QuizError;
use crate::core_modules::explanation::explain;
use crate::core_modules::question::{QueryType, Question, Verdict};
use crate::core_modules::shape_generator::{ShapeKind, shape_generator::generate_shape};
use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

// Re-export the pieces a UI layer needs alongside the engine.
pub use crate::core_modules::answer::{Answer, TolerancePolicy};
pub use crate::core_modules::grid_raster::{GridRaster, RenderStyle};
pub use crate::core_modules::utils::image_helper::image_helper::save_png;

/// Everything the UI shows after an answer is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub explanation: Vec<String>,
    pub level_before: u8,
    pub level_after: u8,
}

/// Generates questions and grades answers with adaptive difficulty.
pub struct QuizEngine {
    config: QuizConfig,
    rng: ChaCha8Rng,
    difficulty: DifficultyTracker,
    next_id: u64,
}

impl QuizEngine {
    pub fn new(config: QuizConfig) -> Result<Self, QuizError> {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// A reproducible engine: the same seed and answers yield the same questions.
    pub fn with_seed(config: QuizConfig, seed: u64) -> Result<Self, QuizError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(config: QuizConfig, rng: ChaCha8Rng) -> Result<Self, QuizError> {
        config.validate()?;
        let difficulty = DifficultyTracker::new(config.start_level, config.min_level, config.max_level);
        Ok(Self {
            config,
            rng,
            difficulty,
            next_id: 1,
        })
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn level(&self) -> u8 {
        self.difficulty.level()
    }

    pub fn profile(&self) -> LevelProfile {
        self.difficulty.profile()
    }

    /// Draws a fresh question at the current level.
    pub fn next_question(&mut self) -> Result<Question, QuizError> {
        let profile = self.difficulty.profile();
        let kind = *profile
            .kinds
            .choose(&mut self.rng)
            .unwrap_or(&ShapeKind::Rectangle);
        let query = *profile
            .queries
            .choose(&mut self.rng)
            .unwrap_or(&QueryType::Area);
        self.question_of(kind, query, profile.grid_width, profile.grid_height)
    }

    /// Draws a question of a specific kind and query, bypassing the level profile's choice.
    pub fn question_of(
        &mut self,
        kind: ShapeKind,
        query: QueryType,
        grid_width: u32,
        grid_height: u32,
    ) -> Result<Question, QuizError> {
        let shape = generate_shape(kind, grid_width, grid_height, &mut self.rng, &self.config)?;
        let id = self.next_id;
        self.next_id += 1;
        let question = Question::new(id, kind, shape, query, self.difficulty.level());
        debug!(
            "question {} at level {}: {kind} {:?}, area {} perimeter {}",
            question.id, question.level, question.query, question.metrics.area, question.metrics.perimeter
        );
        Ok(question)
    }

    /// Grades `raw_answer` against `question`. Malformed input is returned as an error
    /// and leaves the difficulty untouched.
    pub fn submit(&mut self, question: &Question, raw_answer: &str) -> Result<Feedback, QuizError> {
        let answer = parse_answer(raw_answer, question.query)?;
        let verdict = question.check(&answer);
        let level_before = self.difficulty.level();
        let level_after = self.difficulty.record(verdict.correct);
        Ok(Feedback {
            explanation: explain(question),
            verdict,
            level_before,
            level_after,
        })
    }
}
