//! Line-oriented front ends for the quiz and the country report.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use quiz_core::model::QuizSummary;
use quiz_core::{CountryFilter, CountryReport};
use services::QuizService;

/// Play one round over `input`/`output`.
///
/// Returns the summary once the round finishes, or `None` if input ran out first.
///
/// # Errors
///
/// Returns an error if reading or writing fails or the service rejects a command.
pub fn run_terminal_quiz<R: BufRead, W: Write>(
    service: &mut QuizService,
    mut input: R,
    output: &mut W,
) -> Result<Option<QuizSummary>> {
    let mut view = service.start()?;
    if let Some(message) = service.bank().load_failure() {
        writeln!(output, "{message}")?;
    }

    let mut line = String::new();
    while view.can_answer {
        let (asked, cap) = view.progress;
        writeln!(output, "[{asked}/{cap}] {}", view.question_text)?;
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            log::info!("input closed before the quiz finished");
            return Ok(None);
        }

        let outcome = service.submit_answer(&line)?;
        view = service.view();
        writeln!(output, "{}", outcome.verdict.message())?;
        writeln!(output, "{}", view.score_text)?;
    }

    writeln!(output, "{}", view.question_text)?;
    Ok(service.session().summary().copied())
}

/// Play one round for the `quiz` command.
///
/// With `json` the transcript goes to `transcript` and `output` receives only
/// the summary, so it stays parseable.
///
/// # Errors
///
/// Returns an error if the round fails or the summary cannot be written.
pub fn play_round<R: BufRead, W: Write, T: Write>(
    service: &mut QuizService,
    input: R,
    output: &mut W,
    transcript: &mut T,
    json: bool,
) -> Result<()> {
    if !json {
        run_terminal_quiz(service, input, output)?;
        return Ok(());
    }

    if let Some(summary) = run_terminal_quiz(service, input, transcript)? {
        serde_json::to_writer_pretty(&mut *output, &summary).context("serialize quiz summary")?;
        writeln!(output)?;
    }
    Ok(())
}

pub fn write_country_report<W: Write>(
    filter: &CountryFilter,
    report: &CountryReport,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Part A: {}", filter.initial_heading())?;
    for name in &report.by_initial {
        writeln!(output, "{name}")?;
    }
    writeln!(output)?;
    writeln!(output, "Part B: {}", filter.vowel_heading())?;
    for name in &report.by_vowel_count {
        writeln!(output, "{name}")?;
    }
    Ok(())
}
