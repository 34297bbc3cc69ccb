//! Audit findings, reports, and scoring.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::audit::Check;
use crate::config::EXIT_CODE_SCORE_BELOW_THRESHOLD;

/// Category of a single audit result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check succeeded; counts fully towards the score
    Passed,
    /// Advisory deviation; counts half
    Warning,
    /// Content defect; counts nothing
    Error,
}

impl Severity {
    /// Contribution of one finding to the score, in half points.
    fn half_points(self) -> usize {
        match self {
            Severity::Passed => 2,
            Severity::Warning => 1,
            Severity::Error => 0,
        }
    }
}

/// One categorized audit result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Rule that produced the finding
    pub check: Check,
    /// Passed, warning, or error
    pub severity: Severity,
    /// Human-readable description, e.g. `Missing required meta tag: robots`
    pub message: String,
}

impl Finding {
    /// A passed finding.
    pub fn passed(check: Check, message: impl Into<String>) -> Self {
        Self::new(check, Severity::Passed, message)
    }

    /// A warning finding.
    pub fn warning(check: Check, message: impl Into<String>) -> Self {
        Self::new(check, Severity::Warning, message)
    }

    /// An error finding.
    pub fn error(check: Check, message: impl Into<String>) -> Self {
        Self::new(check, Severity::Error, message)
    }

    /// A finding of any severity.
    pub fn new(check: Check, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            check,
            severity,
            message: message.into(),
        }
    }
}

/// Result of one audit run.
///
/// Findings keep the order in which checks produced them. The score is
/// derived once, when the report is built, and the report cannot be changed
/// afterwards; auditing again yields a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    score: u8,
    passed: Vec<Finding>,
    warnings: Vec<Finding>,
    errors: Vec<Finding>,
}

impl Report {
    /// Groups findings by severity and computes the score.
    pub fn from_findings(findings: impl IntoIterator<Item = Finding>) -> Self {
        let mut passed = Vec::new();
        let mut warnings = Vec::new();
        let mut errors = Vec::new();
        for finding in findings {
            match finding.severity {
                Severity::Passed => passed.push(finding),
                Severity::Warning => warnings.push(finding),
                Severity::Error => errors.push(finding),
            }
        }
        let score = compute_score(passed.len(), warnings.len(), errors.len());
        Self {
            score,
            passed,
            warnings,
            errors,
        }
    }

    /// Weighted pass rate in `0..=100`.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Passed findings, in check order.
    pub fn passed(&self) -> &[Finding] {
        &self.passed
    }

    /// Warnings, in check order.
    pub fn warnings(&self) -> &[Finding] {
        &self.warnings
    }

    /// Errors, in check order.
    pub fn errors(&self) -> &[Finding] {
        &self.errors
    }

    /// Findings of one severity, in check order.
    pub fn findings(&self, severity: Severity) -> &[Finding] {
        match severity {
            Severity::Passed => &self.passed,
            Severity::Warning => &self.warnings,
            Severity::Error => &self.errors,
        }
    }

    /// Number of findings across all severities.
    pub fn total(&self) -> usize {
        self.passed.len() + self.warnings.len() + self.errors.len()
    }

    /// Findings produced by one check, across all severities.
    pub fn findings_for(&self, check: Check) -> impl Iterator<Item = &Finding> {
        self.passed
            .iter()
            .chain(&self.warnings)
            .chain(&self.errors)
            .filter(move |finding| finding.check == check)
    }
}

/// Computes `round((passed + warnings / 2) / total * 100)`, rounding halves up.
///
/// A report without any finding scores 0.
pub fn compute_score(passed: usize, warnings: usize, errors: usize) -> u8 {
    let total = passed + warnings + errors;
    if total == 0 {
        return 0;
    }
    let half_points =
        passed * Severity::Passed.half_points() + warnings * Severity::Warning.half_points();
    // 100 * half_points / (2 * total), rounded half up in integer arithmetic
    let score = (100 * half_points + total) / (2 * total);
    u8::try_from(score).unwrap_or(100)
}

/// Maps a report to a process exit code under an optional score threshold.
///
/// Returns 0 when no threshold is set or the score reaches it.
pub fn exit_code_for(report: &Report, fail_under: Option<u8>) -> i32 {
    match fail_under {
        Some(threshold) if report.score() < threshold => EXIT_CODE_SCORE_BELOW_THRESHOLD,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn findings(passed: usize, warnings: usize, errors: usize) -> Vec<Finding> {
        let mut out = Vec::new();
        out.extend((0..passed).map(|i| Finding::passed(Check::Title, format!("p{i}"))));
        out.extend((0..warnings).map(|i| Finding::warning(Check::Links, format!("w{i}"))));
        out.extend((0..errors).map(|i| Finding::error(Check::Headings, format!("e{i}"))));
        out
    }

    #[test]
    fn test_score_boundaries() {
        assert_eq!(compute_score(7, 0, 0), 100);
        assert_eq!(compute_score(0, 0, 4), 0);
        assert_eq!(compute_score(3, 0, 3), 50);
        assert_eq!(compute_score(0, 5, 0), 50);
    }

    #[test]
    fn test_score_empty_is_zero() {
        assert_eq!(compute_score(0, 0, 0), 0);
        assert_eq!(Report::from_findings(Vec::new()).score(), 0);
    }

    #[test]
    fn test_score_rounding() {
        // 2.5 / 3 = 83.33
        assert_eq!(compute_score(2, 1, 0), 83);
        // 1 / 3 = 33.33
        assert_eq!(compute_score(1, 0, 2), 33);
        // 2 / 3 = 66.67
        assert_eq!(compute_score(2, 0, 1), 67);
        // 1.5 / 8 = 18.75
        assert_eq!(compute_score(1, 1, 6), 19);
        // 0.5 / 8 = 6.25
        assert_eq!(compute_score(0, 1, 7), 6);
        // 0.5 / 40 = 1.25, 1 / 40 = 2.5 rounds up
        assert_eq!(compute_score(0, 1, 39), 1);
        assert_eq!(compute_score(1, 0, 39), 3);
    }

    #[test]
    fn test_report_groups_by_severity_preserving_order() {
        let input = vec![
            Finding::warning(Check::Title, "w-title"),
            Finding::passed(Check::MetaTags, "p-meta"),
            Finding::error(Check::MetaTags, "e-meta"),
            Finding::passed(Check::Images, "p-images"),
            Finding::warning(Check::Links, "w-links"),
        ];
        let report = Report::from_findings(input);

        let messages = |items: &[Finding]| -> Vec<String> {
            items.iter().map(|f| f.message.clone()).collect()
        };
        assert_eq!(messages(report.passed()), vec!["p-meta", "p-images"]);
        assert_eq!(messages(report.warnings()), vec!["w-title", "w-links"]);
        assert_eq!(messages(report.errors()), vec!["e-meta"]);
        assert_eq!(report.total(), 5);
        // (2 + 1) / 5
        assert_eq!(report.score(), 60);
    }

    #[test]
    fn test_findings_by_severity_accessor() {
        let report = Report::from_findings(findings(2, 1, 3));
        for severity in Severity::iter() {
            assert!(report
                .findings(severity)
                .iter()
                .all(|finding| finding.severity == severity));
        }
        assert_eq!(report.findings(Severity::Error).len(), 3);
        assert_eq!(report.findings_for(Check::Links).count(), 1);
    }

    #[test]
    fn test_report_serializes_lowercase_severity() {
        let report = Report::from_findings(vec![Finding::passed(Check::Title, "ok")]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["score"], 100);
        assert_eq!(json["passed"][0]["severity"], "passed");
        assert_eq!(json["passed"][0]["check"], "title");
        assert_eq!(json["passed"][0]["message"], "ok");
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_exit_code_policy() {
        let report = Report::from_findings(findings(3, 0, 1));
        assert_eq!(report.score(), 75);
        assert_eq!(exit_code_for(&report, None), 0);
        assert_eq!(exit_code_for(&report, Some(75)), 0);
        assert_eq!(exit_code_for(&report, Some(76)), 2);
        assert_eq!(exit_code_for(&report, Some(0)), 0);
    }
}
