use crate::core_modules::shape_generator::ShapeKind;

/// Failures of the shape generators. Both are reported instead of handing back
/// a degenerate shape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("{kind} needs at least a {min_width}x{min_height} grid, got {width}x{height}")]
    GridTooSmall {
        kind: ShapeKind,
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    #[error("no valid {kind} found in a {width}x{height} grid after {attempts} attempts")]
    AttemptsExhausted {
        kind: ShapeKind,
        width: u32,
        height: u32,
        attempts: u32,
    },
}

/// A shape read from outside the generators that breaks the grid bounds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("cell ({x}, {y}) lies outside the {width}x{height} grid")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },
}

/// Validation failures for a typed answer. These stay local to the answer field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnswerError {
    #[error("answer is empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("expected {expected} number(s), got {got}")]
    WrongCount { expected: usize, got: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
