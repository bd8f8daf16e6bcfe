//! # a11y-lint
//!
//! Accessibility linter for semantic trees.
//!
//! This is the main facade crate: it re-exports the core engine and the
//! built-in rules, and wires them together behind a few conveniences.
//!
//! ## Quick Start
//!
//! ```ignore
//! use a11y_lint::SemanticNode;
//!
//! let tree = SemanticNode::builder("main")
//!     .child(SemanticNode::builder("h1").name("Welcome").build()?)
//!     .build()?;
//!
//! let report = a11y_lint::audit(&tree);
//! if !report.is_clean() {
//!     eprintln!("{}", report.format_report());
//! }
//! ```
//!
//! ## Programmatic Usage
//!
//! Register a custom rule set through the engine builder:
//!
//! ```ignore
//! use a11y_lint::{Engine, rules};
//!
//! let engine = Engine::builder()
//!     .rules(rules::minimal_rules())
//!     .rule(MyProjectRule)
//!     .build();
//! let report = engine.validate(Some(&tree));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use a11y_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use a11y_lint_rules::*;
}

fn standard_engine() -> Engine {
    Engine::builder()
        .rules(a11y_lint_rules::standard_rules())
        .build()
}

/// Audits a tree with every built-in rule and returns the sorted findings.
#[must_use]
pub fn audit(tree: &SemanticNode) -> AuditReport {
    standard_engine().validate(Some(tree))
}

/// Like [`audit`], but accepts a possibly-missing subject: `None` yields a
/// report with the single synthetic no-subject finding.
#[must_use]
pub fn audit_subject(subject: Option<&SemanticNode>) -> AuditReport {
    standard_engine().validate(subject)
}

/// Audits the subject and decides pass/fail with every built-in rule.
///
/// Today any finding fails the subject; `policy` is carried through but
/// not consulted (see [`Engine::bless`]).
#[must_use]
pub fn bless(subject: Option<&SemanticNode>, policy: Option<&BlessPolicy>) -> BlessOutcome {
    standard_engine().bless(subject, policy)
}
