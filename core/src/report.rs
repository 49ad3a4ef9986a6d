//! Rendering of validation reports for the console.
//!
//! Renderers take the structured report and produce a string; they never
//! see schemas and never decide pass/fail.

use crate::error::ContractError;
use crate::validation::ValidationReport;

pub const PASSED: &str = "Passed";
pub const FAILED: &str = "Failed";
/// Shown in the mismatch column when a pair has none.
pub const NO_MISMATCHES: &str = "-";

/// Turns a report into printable text.
pub trait Render {
    fn render(&self, report: &ValidationReport) -> Result<String, ContractError>;
}

/// Bordered text table, one row per compared pair.
///
/// Multi-line cells (several mismatches) grow the row downward. With
/// `color` set, the status cell is wrapped in ANSI green or red.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableRenderer {
    pub color: bool,
}

impl TableRenderer {
    pub fn colored() -> Self {
        Self { color: true }
    }

    fn status_label(&self, pass: bool) -> String {
        match (pass, self.color) {
            (true, true) => format!("\u{1b}[32m{PASSED}\u{1b}[0m"),
            (false, true) => format!("\u{1b}[31m{FAILED}\u{1b}[0m"),
            (true, false) => PASSED.to_string(),
            (false, false) => FAILED.to_string(),
        }
    }
}

/// Pretty-printed JSON of the whole report.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Render for TableRenderer {
    fn render(&self, report: &ValidationReport) -> Result<String, ContractError> {
        let (left, right) = report.mode.column_labels();
        let header = [left, right, "Status", "Score", "Mismatches"].map(String::from);

        let rows: Vec<[String; 5]> = report
            .rows
            .iter()
            .map(|row| {
                let mismatches = if row.outcome.mismatches.is_empty() {
                    NO_MISMATCHES.to_string()
                } else {
                    row.outcome.messages().join("\n")
                };
                [
                    row.left.clone(),
                    row.right.clone(),
                    self.status_label(row.outcome.pass),
                    format!("{:.2}", row.outcome.score),
                    mismatches,
                ]
            })
            .collect();

        Ok(draw_table(&header, &rows))
    }
}

impl Render for JsonRenderer {
    fn render(&self, report: &ValidationReport) -> Result<String, ContractError> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

fn draw_table(header: &[String; 5], rows: &[[String; 5]]) -> String {
    let mut widths = [0usize; 5];
    for cells in std::iter::once(header).chain(rows) {
        for (width, cell) in widths.iter_mut().zip(cells) {
            let longest = cell.lines().map(visible_width).max().unwrap_or(0);
            *width = (*width).max(longest);
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    push_row(&mut out, header, &widths);
    out.push_str(&border);
    out.push('\n');
    for cells in rows {
        push_row(&mut out, cells, &widths);
        out.push_str(&border);
        out.push('\n');
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let columns: Vec<Vec<&str>> = cells.iter().map(|c| c.lines().collect()).collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for i in 0..height {
        out.push('|');
        for (column, width) in columns.iter().zip(widths) {
            let text = column.get(i).copied().unwrap_or("");
            let pad = width - visible_width(text);
            out.push(' ');
            out.push_str(text);
            out.push_str(&" ".repeat(pad + 1));
            out.push('|');
        }
        out.push('\n');
    }
}

/// Display width of `text`, not counting ANSI escape sequences.
fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (false, _) => width += 1,
            (true, 'm') => in_escape = false,
            (true, _) => {}
        }
    }
    width
}
