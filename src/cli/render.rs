//! Summary rendering and console messages

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};

use crate::cli::error::CliResult;
use crate::config::{DisplayConfig, OutputFormat};
use crate::scoreboard::Match;

/// How summaries are printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Table or JSON
    pub format: OutputFormat,
    /// Colour titles and notices
    pub color: bool,
    /// Heading printed above text summaries
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: false,
            title: None,
        }
    }
}

impl RenderOptions {
    /// Options taken from the `[display]` section
    pub fn from_display(display: &DisplayConfig, title: Option<&str>) -> Self {
        Self {
            format: display.format,
            color: display.color,
            title: title.map(str::to_string),
        }
    }
}

/// Render a summary as a numbered table or as JSON.
pub fn render_summary(summary: &[Match], opts: &RenderOptions) -> CliResult<String> {
    match opts.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
        OutputFormat::Text => Ok(render_text(summary, opts)),
    }
}

fn render_text(summary: &[Match], opts: &RenderOptions) -> String {
    let mut out = String::new();

    if let Some(title) = &opts.title {
        if opts.color {
            out.push_str(&title.cyan().bold().to_string());
        } else {
            out.push_str(title);
        }
        out.push('\n');
    }

    if summary.is_empty() {
        let empty = "No live matches";
        if opts.color {
            out.push_str(&empty.yellow().to_string());
        } else {
            out.push_str(empty);
        }
        return out;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(vec!["#", "Home", "Score", "Away", "Started"]);

    for (rank, row) in summary.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            row.home_team.clone(),
            format!("{} - {}", row.home_score, row.away_score),
            row.away_team.clone(),
            row.match_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Center);
    }

    out.push_str(&table.to_string());
    out
}

/// Print an error with hints for the most common mistakes.
pub fn display_error_with_suggestions<E: std::fmt::Display>(error: &E, context: &str) {
    eprintln!("{} {}", "Error:".red().bold(), context);
    eprintln!("   {}", error.to_string().red());

    let error_str = error.to_string().to_lowercase();
    if error_str.contains("has not been started") {
        eprintln!("{}", "Suggestions:".blue());
        eprintln!("   • Start the match first with 'start <home> <away>'");
        eprintln!("   • Check the home/away order; it is part of the match key");
    } else if error_str.contains("has already started") {
        eprintln!("{}", "Suggestions:".blue());
        eprintln!("   • Finish the running match before starting it again");
    } else if error_str.contains("inconsistent") || error_str.contains("already recorded") {
        eprintln!("{}", "Suggestions:".blue());
        eprintln!("   • Scores are absolute totals, not increments");
        eprintln!("   • Run 'summary' to see the recorded score");
    } else if error_str.contains("no such file or directory") {
        eprintln!("{}", "Suggestions:".blue());
        eprintln!("   • Check that the file path is correct");
    }
}
