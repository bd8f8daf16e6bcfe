//! Rule trait for defining accessibility rules.

use crate::finding::Finding;
use crate::tree::SemanticNode;

/// An accessibility rule evaluated against a semantic tree.
///
/// Rules are pure functions over an immutable tree: they never mutate the
/// input, never perform I/O, and return an empty vector on success. The
/// engine owns merging and sorting, so a rule's internal emission order
/// never affects observable output.
///
/// # Example
///
/// ```ignore
/// use a11y_lint_core::{Finding, Rule, SemanticNode, Severity};
///
/// pub struct NoMarquee;
///
/// impl Rule for NoMarquee {
///     fn name(&self) -> &'static str { "no-marquee" }
///
///     fn check(&self, root: &SemanticNode) -> Vec<Finding> {
///         let mut findings = Vec::new();
///         root.walk(|node, path| {
///             if node.kind() == "marquee" {
///                 findings.push(Finding::new(
///                     "A11Y_SEMANTIC_MARQUEE",
///                     path,
///                     "Remove the marquee element.",
///                     Severity::Error,
///                 ));
///             }
///         });
///         findings
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "name-required").
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Evaluates the tree and returns any findings, in no particular order.
    fn check(&self, root: &SemanticNode) -> Vec<Finding>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, _root: &SemanticNode) -> Vec<Finding> {
            vec![Finding::new(
                "TEST_CODE",
                "$",
                "Use this only in tests.",
                Severity::Info,
            )]
        }
    }

    #[test]
    fn rule_trait_surface() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.description(), "A test rule");

        let tree = SemanticNode::builder("div").build().unwrap();
        assert_eq!(rule.check(&tree).len(), 1);
    }
}
