//! Core types for audit findings and results.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Severity level for audit findings.
///
/// The derived order is threshold order: `Info < Warning < Error`, so
/// `severity >= Severity::Warning` reads as "warning or worse". Report
/// output uses the opposite rank (errors first); see [`compare_findings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational suggestion, does not fail an audit gate.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Rank used for report ordering: errors sort before warnings,
    /// warnings before infos.
    #[must_use]
    fn report_rank(self) -> u8 {
        match self {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Info => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single audit finding emitted by a rule.
///
/// Findings are immutable values: construct with [`Finding::new`] and read
/// the public fields. `path` points into the evaluated tree using the `$` /
/// `.children[N]` syntax and is built by rules while walking, so it is a
/// stable identifier suitable for exact-match assertions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Namespaced rule code (e.g. `A11Y_NAME_MISSING`). Stable, never
    /// locale-dependent.
    pub code: String,
    /// Location of the finding: `$` for the root, `.children[N]` per
    /// descent.
    pub path: String,
    /// Human-actionable message. Starts with a capital letter, ends with a
    /// period, and names the action to take.
    pub message: String,
    /// Severity of this finding.
    pub severity: Severity,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
            message: message.into(),
            severity,
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.path, self.severity, self.code, self.message
        )
    }
}

/// Total order over findings: severity (errors first), then code, then
/// path, then message, each compared lexically.
///
/// This ordering is what makes engine output deterministic and diff-stable
/// regardless of rule execution order.
#[must_use]
pub fn compare_findings(a: &Finding, b: &Finding) -> Ordering {
    a.severity
        .report_rank()
        .cmp(&b.severity.report_rank())
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| a.path.cmp(&b.path))
        .then_with(|| a.message.cmp(&b.message))
}

/// Sorts findings in place using [`compare_findings`].
///
/// The sort is stable and idempotent: sorting an already sorted slice
/// leaves it unchanged.
pub fn sort_findings(findings: &mut [Finding]) {
    findings.sort_by(compare_findings);
}

/// Result of running an audit.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// All findings, sorted per [`compare_findings`].
    pub findings: Vec<Finding>,
    /// Number of tree nodes visited.
    pub nodes_checked: usize,
}

impl AuditReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no findings were produced.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns true if there are any error-level findings.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Error)
    }

    /// Checks if any findings meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_findings_at(&self, severity: Severity) -> bool {
        self.findings.iter().any(|f| f.severity >= severity)
    }

    /// Returns findings filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }

    /// Counts findings by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for finding in &self.findings {
            match finding.severity {
                Severity::Error => counts.0 += 1,
                Severity::Warning => counts.1 += 1,
                Severity::Info => counts.2 += 1,
            }
        }
        counts
    }

    /// Formats the report for terminal or test-failure output.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let mut output = String::new();
        for finding in &self.findings {
            let _ = writeln!(output, "{finding}");
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            output,
            "\nFound {errors} error(s), {warnings} warning(s), {infos} info(s) in {} node(s)",
            self.nodes_checked
        );

        output
    }
}
