//! # a11y-lint-core
//!
//! Core framework for accessibility linting over semantic trees.
//!
//! This crate provides the foundational traits and types for building
//! accessibility audits. It includes:
//!
//! - [`SemanticNode`] for the immutable, validated tree rules traverse
//! - [`Finding`] for audit findings with a deterministic total order
//! - [`Rule`] trait for evaluators: `tree -> Vec<Finding>`
//! - [`Engine`] for running registered rules, merging and sorting findings,
//!   and deciding pass/fail
//!
//! ## Example
//!
//! ```ignore
//! use a11y_lint_core::{Engine, SemanticNode};
//!
//! let tree = SemanticNode::builder("main").build()?;
//! let engine = Engine::builder().rule(MyRule).build();
//! let report = engine.validate(Some(&tree));
//! println!("{}", report.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod finding;
mod policy;
mod rule;
mod tree;

pub use engine::{BlessOutcome, Engine, EngineBuilder, NO_SUBJECT_CODE};
pub use finding::{compare_findings, sort_findings, AuditReport, Finding, Severity};
pub use policy::{BlessPolicy, PolicyError, PolicyProfile};
pub use rule::{Rule, RuleBox};
pub use tree::{is_valid_role, NodeBuilder, PropValue, SemanticNode, TreeError, ARIA_ROLES};
