//! Report rendering and logging.

use std::fmt::Write;

use colored::*;
use log::{error, info, warn};

use crate::report::{Finding, Report, Severity};
use crate::utils::sanitize::sanitize_for_display;

/// Renders a report as a grouped checklist.
///
/// Sections with no findings are omitted.
pub fn render_plain(report: &Report, site_name: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{}",
        format!("SEO Health Check Results - {site_name}").bold()
    );
    let _ = writeln!(output, "Score: {}/100", colored_score(report.score()));

    for (severity, heading) in [
        (Severity::Passed, "Passed checks"),
        (Severity::Warning, "Warnings"),
        (Severity::Error, "Errors"),
    ] {
        append_section(&mut output, heading, report.findings(severity));
    }
    output
}

/// Renders a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Logs a one-line summary, then each warning at warn level and each error
/// at error level.
pub fn log_summary(report: &Report, site_name: &str) {
    info!(
        "SEO score for {}: {}/100 ({} passed, {} warnings, {} errors)",
        site_name,
        report.score(),
        report.passed().len(),
        report.warnings().len(),
        report.errors().len()
    );
    for finding in report.warnings() {
        warn!(
            "[{}] {}",
            finding.check,
            sanitize_for_display(&finding.message)
        );
    }
    for finding in report.errors() {
        error!(
            "[{}] {}",
            finding.check,
            sanitize_for_display(&finding.message)
        );
    }
}

fn append_section(output: &mut String, heading: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    let _ = writeln!(output, "\n{heading}:");
    for finding in findings {
        let _ = writeln!(
            output,
            "  {} {}",
            marker(finding.severity),
            sanitize_for_display(&finding.message)
        );
    }
}

fn marker(severity: Severity) -> ColoredString {
    match severity {
        Severity::Passed => "✓".green(),
        Severity::Warning => "⚠".yellow(),
        Severity::Error => "✗".red(),
    }
}

fn colored_score(score: u8) -> ColoredString {
    let text = score.to_string();
    match score {
        90..=100 => text.green().bold(),
        50..=89 => text.yellow().bold(),
        _ => text.red().bold(),
    }
}
