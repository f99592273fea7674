//! Line-oriented front end: read clue strings from a reader, print to a writer.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info, instrument, warn};

use crate::clue::{self, ClueString};
use crate::config::SessionConfig;
use crate::session::{Phase, SessionController};
use crate::solver::Solver;

/// Plays one session, reading a clue per round from `input`.
///
/// Each round prints the candidate word and waits for a line such as
/// `gxyxx`. Returns the phase the session ended in; end of input leaves the
/// session where it was.
#[instrument(skip_all)]
pub async fn run_prompt<S, R, W>(
    solver: &S,
    config: SessionConfig,
    mut input: R,
    mut output: W,
) -> Result<Phase>
where
    S: Solver + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut controller = SessionController::new(config);

    writeln!(output, "Loading first guess...")?;
    controller.start(solver).await?;

    if controller.phase() == Phase::Loading {
        let message = controller.state().error().unwrap_or("Failed to load first guess");
        writeln!(output, "Error: {}", message)?;
        return Ok(Phase::Loading);
    }

    let mut line = String::new();
    while controller.phase() == Phase::AwaitingInput {
        let state = controller.state();
        if let Some(error) = state.error() {
            writeln!(output, "Error: {}", error)?;
        }
        writeln!(
            output,
            "Guess #{}: {}",
            state.guess_number(),
            state.candidate().to_uppercase()
        )?;
        write!(output, "Clue (x = absent, y = misplaced, g = correct)> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed");
            writeln!(output)?;
            return Ok(controller.phase());
        }

        let clue: ClueString = match line.trim().parse() {
            Ok(clue) => clue,
            Err(e) => {
                debug!(error = %e, "Rejected clue text");
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        if let Err(e) = controller.set_marks(&clue::decode(&clue)) {
            debug!(error = %e, "Rejected clue length");
            writeln!(output, "{}", e)?;
            continue;
        }

        if let Err(e) = controller.submit(solver).await {
            warn!(error = %e, "Submit rejected");
        }
    }

    for (index, record) in controller.state().history().iter().enumerate() {
        writeln!(
            output,
            "Guess #{}: {} {}",
            index + 1,
            record.word().to_uppercase(),
            record.clue()
        )?;
    }

    match controller.phase() {
        Phase::Solved => {
            let message = controller.state().success().unwrap_or_default();
            writeln!(output, "{}", message)?;
        }
        _ => {
            let message = controller.state().error().unwrap_or_default();
            writeln!(output, "{}", message)?;
        }
    }

    Ok(controller.phase())
}
