//! Command execution against a scoreboard
//!
//! Scripts and interactive sessions share one loop: every line is parsed,
//! applied, and `summary` lines are rendered to the output.

use std::io::{BufRead, Write};

use crate::cli::error::{CliError, CliResult};
use crate::cli::render::{render_summary, RenderOptions};
use crate::cli::script::{parse_line, ScoreboardCommand};
use crate::scoreboard::{Match, Scoreboard};

/// Result of applying a single command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The board was changed
    Applied,
    /// The current summary
    Summary(Vec<Match>),
}

/// Options for running a sequence of commands
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Report failures and continue instead of stopping at the first one
    pub keep_going: bool,
    /// How summaries are rendered
    pub render: RenderOptions,
    /// Echo each applied command (interactive use)
    pub echo: bool,
}

/// A command that failed during a run
#[derive(Debug)]
pub struct LineFailure {
    /// Line number, starting at 1
    pub line: usize,
    /// The trimmed line as written
    pub text: String,
    /// Why it failed
    pub error: CliError,
}

/// What happened during a run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Commands that were applied successfully
    pub applied: usize,
    /// Commands that failed, in script order
    pub failures: Vec<LineFailure>,
}

impl RunReport {
    /// Whether every command was applied
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// One-line outcome for the session journal
    pub fn completion_reason(&self) -> String {
        match self.failures.len() {
            0 => "finished".to_string(),
            1 => "finished with 1 rejected command".to_string(),
            n => format!("finished with {} rejected commands", n),
        }
    }
}

/// Apply one command.
pub fn execute<S: Scoreboard + ?Sized>(
    scoreboard: &S,
    command: &ScoreboardCommand,
) -> CliResult<CommandOutcome> {
    match command {
        ScoreboardCommand::Start {
            home_team,
            away_team,
        } => scoreboard.start_match(home_team, away_team)?,
        ScoreboardCommand::Update {
            home_team,
            away_team,
            home_score,
            away_score,
        } => scoreboard.update_score(home_team, away_team, *home_score, *away_score)?,
        ScoreboardCommand::Finish {
            home_team,
            away_team,
        } => scoreboard.finish_match(home_team, away_team)?,
        ScoreboardCommand::Summary => return Ok(CommandOutcome::Summary(scoreboard.summary())),
    }
    Ok(CommandOutcome::Applied)
}

/// Run every line of `input`.
///
/// Without `keep_going` the first failure is returned as an error carrying
/// its line number. With it, each failure is written to `out` as
/// `line N: message` and collected in the report.
pub fn run_lines<S, R, W>(
    scoreboard: &S,
    input: R,
    out: &mut W,
    opts: &RunOptions,
) -> CliResult<RunReport>
where
    S: Scoreboard + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut report = RunReport::default();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;

        let result = parse_line(line_no, &line).and_then(|command| match command {
            Some(command) => execute(scoreboard, &command).map(|outcome| Some((command, outcome))),
            None => Ok(None),
        });

        match result {
            Ok(None) => {}
            Ok(Some((_, CommandOutcome::Summary(summary)))) => {
                writeln!(out, "{}", render_summary(&summary, &opts.render)?)?;
            }
            Ok(Some((command, CommandOutcome::Applied))) => {
                report.applied += 1;
                if opts.echo {
                    writeln!(out, "ok: {}", command)?;
                }
            }
            Err(error) => {
                let error = error.at_line(line_no);
                if !opts.keep_going {
                    return Err(error);
                }
                writeln!(out, "{}", error)?;
                report.failures.push(LineFailure {
                    line: line_no,
                    text: line.trim().to_string(),
                    error,
                });
            }
        }
    }

    Ok(report)
}

/// Run a script held in memory.
pub fn run_script<S, W>(
    scoreboard: &S,
    script: &str,
    out: &mut W,
    opts: &RunOptions,
) -> CliResult<RunReport>
where
    S: Scoreboard + ?Sized,
    W: Write,
{
    run_lines(scoreboard, script.as_bytes(), out, opts)
}
