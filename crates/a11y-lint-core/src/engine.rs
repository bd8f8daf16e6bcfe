//! Engine orchestrating rule execution over a semantic tree.

use crate::finding::{sort_findings, AuditReport, Finding, Severity};
use crate::policy::BlessPolicy;
use crate::rule::{Rule, RuleBox};
use crate::tree::SemanticNode;

use tracing::{debug, info};

/// Code of the synthetic finding emitted when there is nothing to evaluate.
pub const NO_SUBJECT_CODE: &str = "A11Y_ENGINE_NO_SUBJECT";

/// Outcome of a [`Engine::bless`] call.
#[derive(Debug, Clone)]
pub struct BlessOutcome {
    /// True when the subject passed the audit.
    pub passed: bool,
    /// The full audit report backing the decision.
    pub report: AuditReport,
}

/// Builder for configuring an [`Engine`].
#[derive(Default)]
pub struct EngineBuilder {
    rules: Vec<RuleBox>,
}

impl EngineBuilder {
    /// Creates a new builder with no rules registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Registers a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Registers several boxed rules at once.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Builds the engine.
    #[must_use]
    pub fn build(self) -> Engine {
        Engine { rules: self.rules }
    }
}

/// The audit engine: a registry of rules plus the merge/sort/decide logic.
///
/// Evaluation is synchronous and single-pass per rule; rules run
/// sequentially and independently, and the merged findings are re-sorted
/// globally, so registration order never affects observable output.
pub struct Engine {
    rules: Vec<RuleBox>,
}

impl Engine {
    /// Creates a new builder for configuring an engine.
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs every registered rule against the subject and returns the
    /// merged, sorted findings.
    ///
    /// A missing subject (`None`, e.g. an upstream adapter produced
    /// nothing) yields a report with a single synthetic error finding
    /// rather than an error return, keeping the result contract uniform.
    #[must_use]
    pub fn validate(&self, subject: Option<&SemanticNode>) -> AuditReport {
        let Some(tree) = subject else {
            return AuditReport {
                findings: vec![no_subject_finding()],
                nodes_checked: 0,
            };
        };

        info!(rules = self.rules.len(), "starting audit");

        let mut findings: Vec<Finding> = Vec::new();
        for rule in &self.rules {
            let rule_findings = rule.check(tree);
            debug!(
                rule = rule.name(),
                count = rule_findings.len(),
                "rule evaluated"
            );
            findings.extend(rule_findings);
        }

        sort_findings(&mut findings);

        let report = AuditReport {
            findings,
            nodes_checked: tree.node_count(),
        };

        info!(
            findings = report.findings.len(),
            nodes = report.nodes_checked,
            "audit complete"
        );

        report
    }

    /// Validates the subject and decides pass/fail.
    ///
    /// Currently any finding fails the subject. The `policy` argument is
    /// part of the call contract (callers can already thread one through)
    /// but is not yet consulted by the decision: allow/deny code lists and
    /// the severity threshold are declared on [`BlessPolicy`] without
    /// agreed gating semantics.
    #[must_use]
    pub fn bless(
        &self,
        subject: Option<&SemanticNode>,
        policy: Option<&BlessPolicy>,
    ) -> BlessOutcome {
        let _ = policy;
        let report = self.validate(subject);
        BlessOutcome {
            passed: report.is_clean(),
            report,
        }
    }
}

fn no_subject_finding() -> Finding {
    Finding::new(
        NO_SUBJECT_CODE,
        "$",
        "No subject to evaluate. Provide a semantic tree before calling validate or bless.",
        Severity::Error,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmitRule {
        code: &'static str,
        severity: Severity,
    }

    impl Rule for EmitRule {
        fn name(&self) -> &'static str {
            "emit-rule"
        }

        fn check(&self, _root: &SemanticNode) -> Vec<Finding> {
            vec![Finding::new(
                self.code,
                "$",
                "Add something to fix this.",
                self.severity,
            )]
        }
    }

    struct SilentRule;

    impl Rule for SilentRule {
        fn name(&self) -> &'static str {
            "silent-rule"
        }

        fn check(&self, _root: &SemanticNode) -> Vec<Finding> {
            Vec::new()
        }
    }

    fn tree() -> SemanticNode {
        SemanticNode::builder("main")
            .child(SemanticNode::builder("p").build().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn missing_subject_yields_synthetic_finding() {
        let engine = Engine::builder().rule(SilentRule).build();
        let report = engine.validate(None);

        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].code, NO_SUBJECT_CODE);
        assert_eq!(report.findings[0].severity, Severity::Error);
        assert_eq!(report.findings[0].path, "$");
        assert_eq!(report.nodes_checked, 0);
    }

    #[test]
    fn merges_and_sorts_across_rules() {
        let engine = Engine::builder()
            .rule(EmitRule {
                code: "B_CODE",
                severity: Severity::Info,
            })
            .rule(EmitRule {
                code: "A_CODE",
                severity: Severity::Error,
            })
            .build();

        let subject = tree();
        let report = engine.validate(Some(&subject));

        assert_eq!(report.findings.len(), 2);
        assert_eq!(report.findings[0].code, "A_CODE");
        assert_eq!(report.findings[1].code, "B_CODE");
        assert_eq!(report.nodes_checked, 2);
    }

    #[test]
    fn registration_order_does_not_change_output() {
        let forward = Engine::builder()
            .rule(EmitRule {
                code: "A_CODE",
                severity: Severity::Error,
            })
            .rule(EmitRule {
                code: "B_CODE",
                severity: Severity::Warning,
            })
            .build();
        let reversed = Engine::builder()
            .rule(EmitRule {
                code: "B_CODE",
                severity: Severity::Warning,
            })
            .rule(EmitRule {
                code: "A_CODE",
                severity: Severity::Error,
            })
            .build();

        let subject = tree();
        assert_eq!(
            forward.validate(Some(&subject)).findings,
            reversed.validate(Some(&subject)).findings
        );
    }

    #[test]
    fn bless_passes_only_clean_subjects() {
        let subject = tree();

        let clean = Engine::builder().rule(SilentRule).build();
        assert!(clean.bless(Some(&subject), None).passed);

        let dirty = Engine::builder()
            .rule(EmitRule {
                code: "A_CODE",
                severity: Severity::Info,
            })
            .build();
        // Even info-level findings fail the subject today.
        assert!(!dirty.bless(Some(&subject), None).passed);
    }

    #[test]
    fn bless_without_subject_fails() {
        let engine = Engine::builder().rule(SilentRule).build();
        let outcome = engine.bless(None, None);
        assert!(!outcome.passed);
        assert_eq!(outcome.report.findings[0].code, NO_SUBJECT_CODE);
    }
}
