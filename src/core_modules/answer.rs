// THEORY:
// The answer field is typed: free text is parsed into numbers exactly once, here, and
// everything downstream works with an `Answer`. Malformed input is an `AnswerError`
// the UI shows next to the field; it never reaches the checker or the difficulty
// tracker.

use crate::core_modules::error::AnswerError;
use crate::core_modules::question::QueryType;
use serde::{Deserialize, Serialize};

/// How close a typed number must be to the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TolerancePolicy {
    /// Integer answers: must match exactly.
    Exact,
    /// Decimal answers: `|given - expected| <= eps`.
    Absolute(f64),
}

impl TolerancePolicy {
    pub fn accepts(self, expected: f64, given: f64) -> bool {
        match self {
            TolerancePolicy::Exact => given == expected,
            TolerancePolicy::Absolute(eps) => (given - expected).abs() <= eps.abs(),
        }
    }
}

/// Parsed numeric answer, in the order the query asks for (area before perimeter).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub values: Vec<f64>,
}

/// Parses `text` into as many numbers as `query` expects. Numbers may be separated
/// by commas, semicolons or whitespace.
pub fn parse_answer(text: &str, query: QueryType) -> Result<Answer, AnswerError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(AnswerError::Empty);
    }

    let expected = query.answer_count();
    if tokens.len() != expected {
        return Err(AnswerError::WrongCount {
            expected,
            got: tokens.len(),
        });
    }

    let values = tokens
        .into_iter()
        .map(|t| match t.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(AnswerError::NotANumber(t.to_string())),
        })
        .collect::<Result<Vec<f64>, AnswerError>>()?;

    Ok(Answer { values })
}
