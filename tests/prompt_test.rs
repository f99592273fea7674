//! Tests for the line-oriented front end.

mod common;

use std::io::Cursor;

use common::ScriptedSolver;
use wordlebot::{NOT_SOLVED_MESSAGE, Phase, SOLVED_MESSAGE, SessionConfig, run_prompt};

async fn play(solver: &ScriptedSolver, config: SessionConfig, input: &str) -> (Phase, String) {
    let mut output = Vec::new();
    let phase = run_prompt(solver, config, Cursor::new(input.to_string()), &mut output)
        .await
        .expect("Prompt failed");
    (phase, String::from_utf8(output).expect("UTF-8 output"))
}

#[tokio::test]
async fn test_prompt_plays_until_solved() {
    let solver = ScriptedSolver::new([Ok("serai"), Ok("clout"), Ok("done!")]);
    let (phase, output) = play(&solver, SessionConfig::default(), "gxyxx\nGGGGG\n").await;

    assert_eq!(phase, Phase::Solved);
    assert!(output.contains("Guess #1: SERAI"));
    assert!(output.contains("Guess #2: CLOUT"));
    assert!(output.contains("Guess #1: SERAI gxyxx"));
    assert!(output.contains(SOLVED_MESSAGE));
    assert_eq!(solver.requests()[2].len(), 2);
}

#[tokio::test]
async fn test_prompt_reprompts_on_bad_clue() {
    let solver = ScriptedSolver::new([Ok("serai"), Ok("clout")]);
    let (phase, output) = play(&solver, SessionConfig::default(), "abcde\ngg\nggggg\n").await;

    assert_eq!(phase, Phase::Solved);
    assert!(output.contains("Invalid clue character 'a' at position 0"));
    assert!(output.contains("Expected 5 marks but got 2"));
    assert_eq!(solver.request_count(), 2);
}

#[tokio::test]
async fn test_prompt_reports_exhaustion() {
    let config = SessionConfig::new(5, 2).unwrap();
    let solver = ScriptedSolver::always("serai", 2);
    let (phase, output) = play(&solver, config, "xxxxx\nxxxxx\n").await;

    assert_eq!(phase, Phase::Failed);
    assert!(output.contains(NOT_SOLVED_MESSAGE));
    assert_eq!(solver.request_count(), 2);
}

#[tokio::test]
async fn test_prompt_reports_load_failure() {
    let solver = ScriptedSolver::new([Err("API call failed")]);
    let (phase, output) = play(&solver, SessionConfig::default(), "").await;

    assert_eq!(phase, Phase::Loading);
    assert!(output.contains("Error: API call failed"));
}

#[tokio::test]
async fn test_prompt_stops_at_end_of_input() {
    let solver = ScriptedSolver::always("serai", 2);
    let (phase, _output) = play(&solver, SessionConfig::default(), "xxxxx\n").await;

    assert_eq!(phase, Phase::AwaitingInput);
    assert_eq!(solver.request_count(), 2);
}

#[tokio::test]
async fn test_prompt_shows_round_error_and_retries() {
    let solver = ScriptedSolver::new([Ok("serai"), Err("Internal Server Error"), Ok("clout")]);
    let (phase, output) = play(&solver, SessionConfig::default(), "xxxxx\nxxxxx\n").await;

    assert_eq!(phase, Phase::AwaitingInput);
    assert!(output.contains("Error: Internal Server Error"));
    assert!(output.contains("Guess #2: CLOUT"));
}
