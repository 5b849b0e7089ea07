// THEORY:
// This file is the main entry point for the `polyomino_quiz` library crate.
// It exposes the `QuizEngine` and its associated data structures (`QuizConfig`,
// `Question`, `Feedback`, etc.) as the high-level interface, while the grid
// geometry itself (shape generation, metrics, rasterisation) lives in
// `core_modules` and stays usable on its own by any UI layer that only needs
// "given a grid and a kind, produce a shape; given a shape, produce metrics."

pub mod core_modules;
pub mod quiz;

pub use core_modules::cell::Cell;
pub use core_modules::config::QuizConfig;
pub use core_modules::error::{AnswerError, ConfigError, GenerationError, QuizError, ShapeError};
pub use core_modules::metrics::{Metrics, metrics::compute_metrics};
pub use core_modules::question::{QueryType, Question};
pub use core_modules::shape::Shape;
pub use core_modules::shape_generator::{ShapeKind, shape_generator::generate_shape};
pub use quiz::{Feedback, QuizEngine};
