// THEORY:
// Explanations are the worked steps shown after an answer. They are built entirely
// from the cached `Metrics` (plus the bounding box, for the rectangle shortcut), so
// they always agree with the answer key.
//
// Area is explained by counting row by row and adding the rows up. Perimeter is
// explained by counting the exposed horizontal edges (tops and bottoms) and the
// exposed vertical edges (left and right sides) separately, then adding the two.
// When the shape is a rectangle, the formula version is appended.

use crate::core_modules::question::{QueryType, Question};

/// The worked steps for the question's query, one line per step.
pub fn explain(question: &Question) -> Vec<String> {
    match question.query {
        QueryType::Area => explain_area(question),
        QueryType::Perimeter => explain_perimeter(question),
        QueryType::Both => {
            let mut steps = explain_area(question);
            steps.extend(explain_perimeter(question));
            steps
        }
    }
}

pub fn explain_area(question: &Question) -> Vec<String> {
    let metrics = &question.metrics;
    let mut steps = vec!["Area: count the shaded squares one row at a time.".to_string()];

    for (n, count) in metrics.row_counts.values().enumerate() {
        steps.push(format!("Row {}: {} {}", n + 1, count, plural(*count, "square")));
    }

    let terms: Vec<String> = metrics.row_counts.values().map(|c| c.to_string()).collect();
    steps.push(format!(
        "{} = {} square units",
        terms.join(" + "),
        metrics.area
    ));

    if let Some((w, h)) = rectangle_sides(question) {
        steps.push(format!("Shortcut for a rectangle: {w} x {h} = {}", metrics.area));
    }
    steps
}

pub fn explain_perimeter(question: &Question) -> Vec<String> {
    let metrics = &question.metrics;
    let mut steps = vec![
        "Perimeter: count every edge of a shaded square that touches an unshaded square or the outside."
            .to_string(),
        format!(
            "Horizontal edges (tops and bottoms): {}",
            metrics.horizontal_edges
        ),
        format!(
            "Vertical edges (left and right sides): {}",
            metrics.vertical_edges
        ),
        format!(
            "{} + {} = {} units",
            metrics.horizontal_edges, metrics.vertical_edges, metrics.perimeter
        ),
    ];

    if let Some((w, h)) = rectangle_sides(question) {
        steps.push(format!(
            "Shortcut for a rectangle: 2 x ({w} + {h}) = {}",
            metrics.perimeter
        ));
    }
    steps
}

fn rectangle_sides(question: &Question) -> Option<(u32, u32)> {
    if !question.shape.is_rectangle() {
        return None;
    }
    let (min, max) = question.shape.bounding_box()?;
    Some((max.x - min.x + 1, max.y - min.y + 1))
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
