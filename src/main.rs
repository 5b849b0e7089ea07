// This file is an example of how to use the `polyomino_quiz` library.
// It plays a short session against itself, answering every question correctly so the
// difficulty climbs, and optionally saves the last grid as a PNG.
//
// Usage: polyomino_quiz [rounds] [output.png]
// Set POLYQUIZ_CONFIG to a JSON config file to override the defaults, and RUST_LOG
// (e.g. `RUST_LOG=debug`) to see generator logs.

use anyhow::Context;
use polyomino_quiz::quiz::save_png;
use polyomino_quiz::{QuizConfig, QuizEngine};
use std::env;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let rounds: usize = match args.get(1) {
        Some(raw) => raw.parse().with_context(|| format!("invalid round count '{raw}'"))?,
        None => 5,
    };
    let png_path = args.get(2);

    let config = match env::var("POLYQUIZ_CONFIG") {
        Ok(path) => QuizConfig::from_file(&path).with_context(|| format!("loading config from {path}"))?,
        Err(_) => QuizConfig::default(),
    };

    println!("Polyomino Quiz - Example Runner");
    let mut engine = QuizEngine::new(config)?;
    let mut last = None;

    for round in 1..=rounds {
        let question = engine.next_question()?;
        println!("\n--- Round {round} (level {}, {}) ---", question.level, question.kind);
        print!("{}", question.raster().to_ascii());
        println!("{}", question.prompt());

        let answer = question
            .expected()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let feedback = engine.submit(&question, &answer)?;
        println!("> {answer}  ({})", if feedback.verdict.correct { "correct" } else { "wrong" });
        for step in &feedback.explanation {
            println!("  {step}");
        }
        last = Some(question);
    }

    if let (Some(path), Some(question)) = (png_path, last) {
        let image = question.raster().render(&engine.config().render);
        save_png(path, &image).with_context(|| format!("saving {path}"))?;
        println!("\nSaved last grid to {path}");
    }

    Ok(())
}
