//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CheckResult, GateReport, Task};
use crate::core::services::GateObserver;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Print JSON to stdout
fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Symbol shown in front of a check result
#[must_use]
pub fn check_symbol(result: &CheckResult) -> &'static str {
    if result.passed {
        "✅"
    } else if result.criticality.is_critical() {
        "❌"
    } else {
        "⚠️"
    }
}

/// One progress line for a finished check (without color)
#[must_use]
pub fn check_line(result: &CheckResult) -> String {
    let symbol = check_symbol(result);
    match result.detail.as_deref() {
        Some(detail) if !detail.contains('\n') => format!("{symbol} {}: {detail}", result.label),
        _ => format!("{symbol} {}", result.label),
    }
}

/// Gate progress printed to the terminal as checks finish
#[derive(Debug, Clone, Copy)]
pub struct ConsoleObserver {
    mode: OutputMode,
}

impl ConsoleObserver {
    /// Observer for `mode`; JSON mode prints nothing until the report is done
    #[must_use]
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl GateObserver for ConsoleObserver {
    fn check_finished(&mut self, result: &CheckResult) {
        if self.mode == OutputMode::Json {
            return;
        }

        let line = check_line(result);
        if result.passed {
            println!("{line}");
        } else if result.criticality.is_critical() {
            println!("{}", line.red());
        } else {
            println!("{}", line.yellow());
        }

        // Multi-line details (e.g. secret matches, tool output) go underneath
        if let Some(detail) = result.detail.as_deref().filter(|d| d.contains('\n')) {
            for detail_line in detail.lines() {
                println!("   {}", detail_line.dimmed());
            }
        }
    }

    fn gate_finished(&mut self, report: &GateReport) {
        if self.mode == OutputMode::Json {
            print_json(report);
            return;
        }

        let summary = format!("Overall Status: {}", report.overall_status);
        if report.passed() {
            println!("\n{}\n", summary.green().bold());
        } else {
            println!("\n{}\n", summary.red().bold());
        }
    }
}

/// Print a gate banner (human mode only)
pub fn print_banner(title: &str, mode: OutputMode) {
    if mode == OutputMode::Human {
        println!("{}", "=".repeat(60));
        println!("{}", title.cyan().bold());
        println!("{}", "=".repeat(60));
    }
}

/// Print the closing verdict of a gate, listing failed critical checks
pub fn print_verdict(report: &GateReport, pass_message: &str, fail_message: &str, mode: OutputMode) {
    if mode == OutputMode::Json {
        return;
    }

    if report.passed() {
        println!("{}", pass_message.green().bold());
        return;
    }

    println!("{}", fail_message.red().bold());
    let failed: Vec<&CheckResult> = report.blocking().collect();
    if !failed.is_empty() {
        println!("\nFailed checks:");
        for check in failed {
            println!("  - {}", check.name);
        }
    }
}

/// Result of a task status query
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Status that was queried
    pub status: String,
    /// Matching tasks
    pub tasks: Vec<Task>,
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        let summary = format!("Found {} tasks in '{}' status", self.tasks.len(), self.status);
        println!("\n{}\n", summary.green().bold());

        if !self.tasks.is_empty() {
            print!("{}", task_table(&self.tasks));
        }
    }
}

/// Format tasks as a plain-text table (Title, Status, Last Edited)
#[must_use]
pub fn task_table(tasks: &[Task]) -> String {
    const HEADERS: [&str; 3] = ["Title", "Status", "Last Edited"];

    let rows: Vec<[&str; 3]> = tasks
        .iter()
        .map(|t| [t.title.as_str(), t.status.as_str(), t.last_edited_date()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 3]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("{}\n", padded.join(" │ ").trim_end())
    };

    let mut table = format_row(HEADERS);
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    table.push_str(&rule.join("─┼─"));
    table.push('\n');
    for row in rows {
        table.push_str(&format_row(row));
    }
    table
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human if self.success => println!("✅ {}", self.message),
            OutputMode::Human => println!("❌ {}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
