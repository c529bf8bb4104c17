//! Scoreboard command language.
//!
//! One command per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! start Mexico Canada
//! start "Costa Rica" "South Korea"
//! update Mexico Canada 0 5
//! finish Mexico Canada
//! summary
//! ```

use std::fmt;

use crate::cli::error::{CliError, CliResult};
use crate::scoreboard::audit::{AWAY_TEAM, AWAY_TEAM_SCORE, HOME_TEAM, HOME_TEAM_SCORE};
use crate::scoreboard::ScoreboardAudit;

/// A parsed scoreboard command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardCommand {
    /// Put a match on the board
    Start {
        /// Home team name
        home_team: String,
        /// Away team name
        away_team: String,
    },
    /// Record an absolute score
    Update {
        /// Home team name
        home_team: String,
        /// Away team name
        away_team: String,
        /// Home goals so far
        home_score: u32,
        /// Away goals so far
        away_score: u32,
    },
    /// Take a match off the board
    Finish {
        /// Home team name
        home_team: String,
        /// Away team name
        away_team: String,
    },
    /// Print the live matches
    Summary,
}

impl fmt::Display for ScoreboardCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreboardCommand::Start {
                home_team,
                away_team,
            } => write!(f, "start {} {}", quote(home_team), quote(away_team)),
            ScoreboardCommand::Update {
                home_team,
                away_team,
                home_score,
                away_score,
            } => write!(
                f,
                "update {} {} {} {}",
                quote(home_team),
                quote(away_team),
                home_score,
                away_score
            ),
            ScoreboardCommand::Finish {
                home_team,
                away_team,
            } => write!(f, "finish {} {}", quote(home_team), quote(away_team)),
            ScoreboardCommand::Summary => write!(f, "summary"),
        }
    }
}

fn quote(name: &str) -> String {
    if name.is_empty() || name.chars().any(char::is_whitespace) || name.starts_with('#') {
        format!("\"{}\"", name)
    } else {
        name.to_string()
    }
}

/// Split a line into tokens, honouring double quotes and `#` comments.
pub fn tokenize(line_no: usize, line: &str) -> CliResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '#' {
            break;
        } else if c == '"' {
            chars.next();
            let mut token = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                token.push(c);
            }
            if !closed {
                return Err(CliError::parse(line_no, "unterminated quote"));
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
            tokens.push(token);
        }
    }

    Ok(tokens)
}

/// Parse one line. Blank and comment-only lines yield `None`.
///
/// Missing team names and malformed scores are reported with the
/// scoreboard's own input messages.
pub fn parse_line(line_no: usize, line: &str) -> CliResult<Option<ScoreboardCommand>> {
    let tokens = tokenize(line_no, line)?;
    let Some((verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let audit = ScoreboardAudit::new();
    let arg = |i: usize| args.get(i).map(String::as_str);

    let (command, arity) = match verb.to_ascii_lowercase().as_str() {
        "start" => (
            ScoreboardCommand::Start {
                home_team: audit.check_present(HOME_TEAM, arg(0))?.to_string(),
                away_team: audit.check_present(AWAY_TEAM, arg(1))?.to_string(),
            },
            2,
        ),
        "update" => {
            let home_team = audit.check_present(HOME_TEAM, arg(0))?.to_string();
            let away_team = audit.check_present(AWAY_TEAM, arg(1))?.to_string();
            let home_score = audit.check_present(HOME_TEAM_SCORE, arg(2))?;
            let away_score = audit.check_present(AWAY_TEAM_SCORE, arg(3))?;
            (
                ScoreboardCommand::Update {
                    home_team,
                    away_team,
                    home_score: audit.parse_score(HOME_TEAM_SCORE, home_score)?,
                    away_score: audit.parse_score(AWAY_TEAM_SCORE, away_score)?,
                },
                4,
            )
        }
        "finish" => (
            ScoreboardCommand::Finish {
                home_team: audit.check_present(HOME_TEAM, arg(0))?.to_string(),
                away_team: audit.check_present(AWAY_TEAM, arg(1))?.to_string(),
            },
            2,
        ),
        "summary" => (ScoreboardCommand::Summary, 0),
        other => {
            return Err(CliError::parse(
                line_no,
                format!("unknown command '{}' (expected start, update, finish or summary)", other),
            ))
        }
    };

    if let Some(extra) = args.get(arity) {
        return Err(CliError::parse(
            line_no,
            format!("unexpected argument '{}'", extra),
        ));
    }

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> CliResult<Option<ScoreboardCommand>> {
        parse_line(1, line)
    }

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   \t").unwrap(), None);
        assert_eq!(parse("# kick-off times are local").unwrap(), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse("start Mexico Canada").unwrap(),
            Some(ScoreboardCommand::Start {
                home_team: "Mexico".into(),
                away_team: "Canada".into()
            })
        );
        assert_eq!(
            parse("UPDATE Spain Brazil 10 2  # rout").unwrap(),
            Some(ScoreboardCommand::Update {
                home_team: "Spain".into(),
                away_team: "Brazil".into(),
                home_score: 10,
                away_score: 2
            })
        );
        assert_eq!(
            parse("finish Germany France").unwrap(),
            Some(ScoreboardCommand::Finish {
                home_team: "Germany".into(),
                away_team: "France".into()
            })
        );
        assert_eq!(parse("summary").unwrap(), Some(ScoreboardCommand::Summary));
    }

    #[test]
    fn test_quoted_team_names() {
        assert_eq!(
            parse(r#"start "Costa Rica" "South Korea""#).unwrap(),
            Some(ScoreboardCommand::Start {
                home_team: "Costa Rica".into(),
                away_team: "South Korea".into()
            })
        );

        // A quoted blank name reaches the scoreboard, which rejects it
        assert_eq!(
            parse(r#"start "   " Canada"#).unwrap(),
            Some(ScoreboardCommand::Start {
                home_team: "   ".into(),
                away_team: "Canada".into()
            })
        );
    }

    #[test]
    fn test_missing_values_use_null_messages() {
        let err = parse("start").unwrap_err();
        assert_eq!(err.to_string(), "An input value is null: Home Team");

        let err = parse("finish Mexico").unwrap_err();
        assert_eq!(err.to_string(), "An input value is null: Away Team");

        let err = parse("update Mexico Canada 1").unwrap_err();
        assert_eq!(err.to_string(), "An input value is null: Away Team");
    }

    #[test]
    fn test_invalid_scores() {
        let err = parse("update Mexico Canada -1 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "An input value is not a valid score: Home Team Score"
        );
        assert!(err.scoreboard_error().unwrap().is_input());
    }

    #[test]
    fn test_syntax_errors() {
        let err = parse_line(7, "kickoff Mexico Canada").unwrap_err();
        assert!(err.to_string().starts_with("line 7: unknown command 'kickoff'"));

        let err = parse_line(3, "start Mexico Canada Brazil").unwrap_err();
        assert_eq!(err.to_string(), "line 3: unexpected argument 'Brazil'");

        let err = parse_line(5, "start \"Costa Rica Canada").unwrap_err();
        assert_eq!(err.to_string(), "line 5: unterminated quote");
    }

    #[test]
    fn test_display_round_trips() {
        let command = ScoreboardCommand::Update {
            home_team: "Costa Rica".into(),
            away_team: "Japan".into(),
            home_score: 1,
            away_score: 0,
        };
        assert_eq!(command.to_string(), r#"update "Costa Rica" Japan 1 0"#);
        assert_eq!(parse(&command.to_string()).unwrap(), Some(command));
    }
}
