// THEORY:
// A `Question` is one quiz round, frozen. It pairs a generated shape with the query
// being asked and the answer key computed at generation time. Nothing about it
// changes after construction; moving on simply means building the next one. This
// replaces any notion of global per-session flags with a value passed through the
// render -> answer -> feedback pipeline.

use crate::core_modules::answer::{Answer, TolerancePolicy};
use crate::core_modules::grid_raster::GridRaster;
use crate::core_modules::metrics::{Metrics, metrics::compute_metrics};
use crate::core_modules::shape::Shape;
use crate::core_modules::shape_generator::ShapeKind;
use serde::{Deserialize, Serialize};

/// What the student is asked to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Area,
    Perimeter,
    Both,
}

impl QueryType {
    pub const ALL: [QueryType; 3] = [QueryType::Area, QueryType::Perimeter, QueryType::Both];

    pub fn answer_count(self) -> usize {
        match self {
            QueryType::Area | QueryType::Perimeter => 1,
            QueryType::Both => 2,
        }
    }

    /// Expected values in answer order (area first).
    pub fn expected(self, metrics: &Metrics) -> Vec<usize> {
        match self {
            QueryType::Area => vec![metrics.area],
            QueryType::Perimeter => vec![metrics.perimeter],
            QueryType::Both => vec![metrics.area, metrics.perimeter],
        }
    }
}

/// The outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub expected: Vec<usize>,
    pub given: Vec<f64>,
}

/// One immutable quiz round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "QuestionRepr")]
pub struct Question {
    /// Sequence number within the engine that produced it.
    pub id: u64,
    pub kind: ShapeKind,
    pub shape: Shape,
    pub metrics: Metrics,
    pub query: QueryType,
    /// Difficulty level the question was drawn at.
    pub level: u8,
    pub tolerance: TolerancePolicy,
}

/// Wire form of a `Question`. Any `metrics` in the input are ignored and recomputed
/// from the shape, so the answer key always matches the grid.
#[derive(Deserialize)]
struct QuestionRepr {
    id: u64,
    kind: ShapeKind,
    shape: Shape,
    query: QueryType,
    level: u8,
    tolerance: TolerancePolicy,
}

impl From<QuestionRepr> for Question {
    fn from(repr: QuestionRepr) -> Self {
        let mut question = Question::new(repr.id, repr.kind, repr.shape, repr.query, repr.level);
        question.tolerance = repr.tolerance;
        question
    }
}

impl Question {
    pub fn new(id: u64, kind: ShapeKind, shape: Shape, query: QueryType, level: u8) -> Self {
        let metrics = compute_metrics(&shape);
        Self {
            id,
            kind,
            shape,
            metrics,
            query,
            level,
            tolerance: TolerancePolicy::Exact,
        }
    }

    pub fn prompt(&self) -> String {
        let unit = "Each square is 1 unit long.";
        match self.query {
            QueryType::Area => format!("What is the area of the shaded shape, in square units? {unit}"),
            QueryType::Perimeter => format!("What is the perimeter of the shaded shape, in units? {unit}"),
            QueryType::Both => format!(
                "Find the area (square units) and then the perimeter (units) of the shaded shape, separated by a comma. {unit}"
            ),
        }
    }

    pub fn expected(&self) -> Vec<usize> {
        self.query.expected(&self.metrics)
    }

    pub fn check(&self, answer: &Answer) -> Verdict {
        let expected = self.expected();
        let correct = answer.values.len() == expected.len()
            && expected
                .iter()
                .zip(&answer.values)
                .all(|(&e, &g)| self.tolerance.accepts(e as f64, g));
        Verdict {
            correct,
            expected,
            given: answer.values.clone(),
        }
    }

    pub fn raster(&self) -> GridRaster {
        GridRaster::from_shape(&self.shape)
    }
}
