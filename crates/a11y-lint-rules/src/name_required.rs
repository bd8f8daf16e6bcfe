//! Rule requiring accessible names on interactive elements.

use a11y_lint_core::{Finding, Rule, SemanticNode, Severity};

/// Rule name for name-required.
pub const NAME: &str = "name-required";

/// Finding code for a missing accessible name.
pub const MISSING_NAME: &str = "A11Y_NAME_MISSING";

/// Element kinds that must carry an accessible name.
const NAMED_KINDS: &[&str] = &["button", "link", "textbox", "checkbox", "radio"];

/// Requires a non-empty accessible name on interactive elements.
///
/// Keys off the element kind only; explicit roles are the ARIA rule's
/// concern. The check does not trim: a whitespace-only name counts as
/// present here, and rejecting such names is the tree model's
/// responsibility at construction time.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRequired;

impl NameRequired {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NameRequired {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires accessible names on interactive elements"
    }

    fn check(&self, root: &SemanticNode) -> Vec<Finding> {
        let mut findings = Vec::new();

        root.walk(|node, path| {
            if !NAMED_KINDS.contains(&node.kind()) {
                return;
            }
            let missing = node.name().map_or(true, str::is_empty);
            if missing {
                findings.push(Finding::new(
                    MISSING_NAME,
                    path,
                    format!("Interactive element '{}' must have a name.", node.kind()),
                    Severity::Error,
                ));
            }
        });

        findings
    }
}
