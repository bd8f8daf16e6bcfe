//! Screen-reader visibility rule: hidden content, hidden interactives,
//! aria-hidden focusables, and empty visually-hidden text.

use crate::focus::{is_focusable, is_interactive};
use a11y_lint_core::{Finding, Rule, SemanticNode, Severity};

/// Rule name for screen-reader-visibility.
pub const NAME: &str = "screen-reader-visibility";

/// Content hidden from screen readers without an aria-hidden signal.
pub const CONTENT_HIDDEN: &str = "A11Y_SR_CONTENT_HIDDEN";
/// Interactive element hidden from users.
pub const INTERACTIVE_HIDDEN: &str = "A11Y_SR_INTERACTIVE_HIDDEN";
/// Focusable element marked aria-hidden.
pub const ARIA_HIDDEN_FOCUSABLE: &str = "A11Y_SR_ARIA_HIDDEN_FOCUSABLE";
/// Visually hidden content with no meaningful text.
pub const ONLY_NO_TEXT: &str = "A11Y_SR_ONLY_NO_TEXT";

fn is_hidden(node: &SemanticNode) -> bool {
    node.bool_prop("hidden") == Some(true)
        || node.string_prop("display") == Some("none")
        || node.string_prop("visibility") == Some("hidden")
}

fn is_aria_hidden(node: &SemanticNode) -> bool {
    node.flag("aria-hidden")
}

fn has_sr_only_class(node: &SemanticNode) -> bool {
    let class = node
        .string_prop("class")
        .or_else(|| node.string_prop("className"))
        .unwrap_or("");
    class
        .split_whitespace()
        .any(|value| value == "sr-only" || value == "visually-hidden")
}

/// Own name, or any direct child with a name.
fn has_meaningful_text(node: &SemanticNode) -> bool {
    node.name().is_some() || node.children().iter().any(|child| child.name().is_some())
}

/// Checks what assistive technology can and cannot see: unintentionally
/// hidden content, hidden interactive elements, aria-hidden focus targets,
/// and empty visually-hidden text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenReaderVisibility;

impl ScreenReaderVisibility {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ScreenReaderVisibility {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Checks hidden content, aria-hidden focus targets, and sr-only text"
    }

    fn check(&self, root: &SemanticNode) -> Vec<Finding> {
        let mut findings = Vec::new();

        root.walk(|node, path| {
            let hidden = is_hidden(node);
            let aria_hidden = is_aria_hidden(node);
            let interactive = is_interactive(node);

            if hidden && !aria_hidden {
                findings.push(Finding::new(
                    CONTENT_HIDDEN,
                    path,
                    "Content is hidden from screen readers via display/visibility. Avoid hiding meaningful content or use aria-hidden intentionally.",
                    Severity::Error,
                ));
            }

            if interactive && hidden {
                findings.push(Finding::new(
                    INTERACTIVE_HIDDEN,
                    path,
                    "Interactive elements should not be hidden from users.",
                    Severity::Error,
                ));
            }

            if aria_hidden && is_focusable(node) {
                findings.push(Finding::new(
                    ARIA_HIDDEN_FOCUSABLE,
                    path,
                    "Focusable elements must not be aria-hidden.",
                    Severity::Error,
                ));
            }

            if has_sr_only_class(node) && !has_meaningful_text(node) {
                findings.push(Finding::new(
                    ONLY_NO_TEXT,
                    path,
                    "Visually hidden content should include meaningful text.",
                    Severity::Warning,
                ));
            }
        });

        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(root: &SemanticNode) -> Vec<Finding> {
        ScreenReaderVisibility::new().check(root)
    }

    fn codes(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn hidden_without_aria_hidden_is_flagged() {
        let root = SemanticNode::builder("div")
            .prop("display", "none")
            .build()
            .unwrap();

        assert_eq!(codes(&check(&root)), vec![CONTENT_HIDDEN]);
    }

    #[test]
    fn hidden_with_aria_hidden_is_intentional() {
        let root = SemanticNode::builder("div")
            .prop("hidden", true)
            .prop("aria-hidden", true)
            .build()
            .unwrap();

        assert!(check(&root).is_empty());
    }

    #[test]
    fn visibility_hidden_counts_as_hidden() {
        let root = SemanticNode::builder("div")
            .prop("visibility", "hidden")
            .build()
            .unwrap();

        assert_eq!(codes(&check(&root)), vec![CONTENT_HIDDEN]);
    }

    #[test]
    fn hidden_interactive_is_flagged() {
        let root = SemanticNode::builder("button")
            .prop("hidden", true)
            .prop("aria-hidden", true)
            .build()
            .unwrap();

        // aria-hidden on a focusable button is its own problem too.
        let findings = check(&root);
        let found = codes(&findings);
        assert!(found.contains(&INTERACTIVE_HIDDEN));
        assert!(found.contains(&ARIA_HIDDEN_FOCUSABLE));
    }

    #[test]
    fn aria_hidden_focusable_is_a_trap() {
        let root = SemanticNode::builder("div")
            .prop("aria-hidden", "true")
            .prop("tabIndex", 0)
            .build()
            .unwrap();

        assert_eq!(codes(&check(&root)), vec![ARIA_HIDDEN_FOCUSABLE]);
    }

    #[test]
    fn aria_hidden_on_non_focusable_content_is_fine() {
        let root = SemanticNode::builder("div")
            .prop("aria-hidden", true)
            .build()
            .unwrap();

        assert!(check(&root).is_empty());
    }

    #[test]
    fn disabled_aria_hidden_interactive_is_not_focusable() {
        let root = SemanticNode::builder("button")
            .prop("aria-hidden", true)
            .prop("disabled", true)
            .build()
            .unwrap();

        assert!(!codes(&check(&root)).contains(&ARIA_HIDDEN_FOCUSABLE));
    }

    #[test]
    fn sr_only_without_text_warns() {
        let root = SemanticNode::builder("span")
            .prop("class", "sr-only")
            .build()
            .unwrap();

        let findings = check(&root);
        assert_eq!(codes(&findings), vec![ONLY_NO_TEXT]);
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn sr_only_with_own_or_child_text_is_fine() {
        let named = SemanticNode::builder("span")
            .prop("class", "visually-hidden")
            .name("Skip to content")
            .build()
            .unwrap();
        assert!(check(&named).is_empty());

        let child_named = SemanticNode::builder("span")
            .prop("className", "sr-only banner")
            .child(
                SemanticNode::builder("span")
                    .name("Main navigation")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert!(check(&child_named).is_empty());
    }

    #[test]
    fn unrelated_classes_do_not_trigger_the_sr_only_check() {
        let root = SemanticNode::builder("span")
            .prop("class", "badge badge-primary")
            .build()
            .unwrap();

        assert!(check(&root).is_empty());
    }
}
