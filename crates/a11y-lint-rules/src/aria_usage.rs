//! ARIA usage rule: required properties, role conflicts, id references,
//! and live regions.

use a11y_lint_core::{Finding, PropValue, Rule, SemanticNode, Severity};
use std::collections::BTreeSet;

/// Rule name for aria-usage.
pub const NAME: &str = "aria-usage";

/// A role is missing one of its required ARIA properties.
pub const REQUIRED_ATTRIBUTE_MISSING: &str = "A11Y_ARIA_REQUIRED_ATTRIBUTE_MISSING";
/// An ARIA property carries a value outside its allowed set.
pub const INVALID_ATTRIBUTE_VALUE: &str = "A11Y_ARIA_INVALID_ATTRIBUTE_VALUE";
/// A role merely restates the element's native semantics.
pub const REDUNDANT_ROLE: &str = "A11Y_ARIA_REDUNDANT_ROLE";
/// A role contradicts the element's native semantics.
pub const CONFLICTING_ROLE: &str = "A11Y_ARIA_CONFLICTING_ROLE";
/// An aria-labelledby/aria-describedby reference points at a missing id.
pub const RELATIONSHIP_MISSING_TARGET: &str = "A11Y_ARIA_RELATIONSHIP_MISSING_TARGET";
/// An aria-live value is not off/polite/assertive.
pub const LIVE_INVALID: &str = "A11Y_ARIA_LIVE_INVALID";

/// ARIA properties a role must carry.
fn required_attrs(role: &str) -> &'static [&'static str] {
    match role {
        "checkbox" | "radio" | "switch" => &["aria-checked"],
        "slider" | "progressbar" => &["aria-valuenow", "aria-valuemin", "aria-valuemax"],
        "combobox" | "listbox" => &["aria-expanded"],
        _ => &[],
    }
}

/// Allowed values for a role's ARIA property, when constrained.
fn allowed_values(role: &str, attr: &str) -> Option<&'static [&'static str]> {
    match (role, attr) {
        ("checkbox", "aria-checked") => Some(&["true", "false", "mixed"]),
        ("radio" | "switch", "aria-checked") => Some(&["true", "false"]),
        ("combobox" | "listbox", "aria-expanded") => Some(&["true", "false"]),
        _ => None,
    }
}

/// Roles that restate what the element kind already conveys.
fn redundant_roles(kind: &str) -> &'static [&'static str] {
    match kind {
        "button" => &["button"],
        "a" => &["link"],
        "input" => &[
            "textbox",
            "checkbox",
            "radio",
            "switch",
            "combobox",
            "searchbox",
        ],
        "textarea" => &["textbox"],
        "select" => &["listbox", "combobox"],
        _ => &[],
    }
}

/// Roles that contradict the element kind's native semantics.
fn conflicting_roles(kind: &str) -> &'static [&'static str] {
    match kind {
        "button" => &["link"],
        "a" => &["button"],
        _ => &[],
    }
}

const LIVE_REGION_VALUES: &[&str] = &["off", "polite", "assertive"];

/// Booleans become `"true"`/`"false"`; strings are trimmed and lowercased;
/// anything else reads as absent.
fn normalize_booleanish(value: &PropValue) -> Option<String> {
    match value {
        PropValue::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        PropValue::String(s) => Some(s.trim().to_lowercase()),
        _ => None,
    }
}

/// Validates ARIA usage:
///
/// - roles carry their required properties with in-range values
/// - roles neither restate nor contradict native semantics
/// - `aria-labelledby`/`aria-describedby` references resolve to real ids
/// - `aria-live` values are valid
#[derive(Debug, Clone, Copy, Default)]
pub struct AriaUsage;

impl AriaUsage {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for AriaUsage {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Validates ARIA roles, required properties, id references, and live regions"
    }

    fn check(&self, root: &SemanticNode) -> Vec<Finding> {
        let mut findings = Vec::new();
        let ids = collect_ids(root);

        root.walk(|node, path| {
            if let Some(role) = node.role() {
                check_required_attributes(node, role, path, &mut findings);
                check_attribute_values(node, role, path, &mut findings);
                check_redundant_role(node, role, path, &mut findings);
                check_conflicting_role(node, role, path, &mut findings);
            }

            // Relationship and live-region checks apply with or without an
            // explicit role.
            check_relationships(node, path, &ids, &mut findings);
            check_live_region(node, path, &mut findings);
        });

        findings
    }
}

fn collect_ids(root: &SemanticNode) -> BTreeSet<String> {
    let mut ids = BTreeSet::new();
    root.walk(|node, _| {
        if let Some(id) = node.string_prop("id") {
            if !id.is_empty() {
                ids.insert(id.to_string());
            }
        }
    });
    ids
}

fn check_required_attributes(
    node: &SemanticNode,
    role: &str,
    path: &str,
    findings: &mut Vec<Finding>,
) {
    for attr in required_attrs(role) {
        if !node.has_prop(attr) {
            findings.push(Finding::new(
                REQUIRED_ATTRIBUTE_MISSING,
                path,
                format!("Role '{role}' requires {attr}."),
                Severity::Error,
            ));
        }
    }
}

fn check_attribute_values(
    node: &SemanticNode,
    role: &str,
    path: &str,
    findings: &mut Vec<Finding>,
) {
    for attr in required_attrs(role) {
        let Some(allowed) = allowed_values(role, attr) else {
            continue;
        };
        let Some(value) = node.prop(attr) else {
            continue;
        };
        let Some(normalized) = normalize_booleanish(value) else {
            continue;
        };
        if !allowed.contains(&normalized.as_str()) {
            findings.push(Finding::new(
                INVALID_ATTRIBUTE_VALUE,
                path,
                format!(
                    "Attribute {attr} on role '{role}' must be one of: {}.",
                    allowed.join(", ")
                ),
                Severity::Error,
            ));
        }
    }
}

fn check_redundant_role(
    node: &SemanticNode,
    role: &str,
    path: &str,
    findings: &mut Vec<Finding>,
) {
    if redundant_roles(node.kind()).contains(&role) {
        findings.push(Finding::new(
            REDUNDANT_ROLE,
            path,
            format!(
                "Role '{role}' is redundant on <{}>. Remove the role attribute.",
                node.kind()
            ),
            Severity::Warning,
        ));
    }
}

fn check_conflicting_role(
    node: &SemanticNode,
    role: &str,
    path: &str,
    findings: &mut Vec<Finding>,
) {
    if conflicting_roles(node.kind()).contains(&role) {
        findings.push(Finding::new(
            CONFLICTING_ROLE,
            path,
            format!(
                "Role '{role}' conflicts with native <{}> semantics. Remove the role or change the element.",
                node.kind()
            ),
            Severity::Error,
        ));
    }
}

fn check_relationships(
    node: &SemanticNode,
    path: &str,
    ids: &BTreeSet<String>,
    findings: &mut Vec<Finding>,
) {
    for key in ["aria-labelledby", "aria-describedby"] {
        let Some(value) = node.string_prop(key) else {
            continue;
        };
        for id in value.split_whitespace() {
            if !ids.contains(id) {
                findings.push(Finding::new(
                    RELATIONSHIP_MISSING_TARGET,
                    path,
                    format!(
                        "ARIA relationship {key} references missing id '{id}'. Ensure the referenced id exists."
                    ),
                    Severity::Error,
                ));
            }
        }
    }
}

fn check_live_region(node: &SemanticNode, path: &str, findings: &mut Vec<Finding>) {
    let raw = node.prop("aria-live").or_else(|| node.prop("ariaLive"));
    let Some(value) = raw.and_then(normalize_booleanish) else {
        return;
    };
    if value.is_empty() {
        return;
    }
    if !LIVE_REGION_VALUES.contains(&value.as_str()) {
        findings.push(Finding::new(
            LIVE_INVALID,
            path,
            "Aria-live must be off, polite, or assertive.",
            Severity::Error,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(root: &SemanticNode) -> Vec<Finding> {
        AriaUsage::new().check(root)
    }

    fn codes(findings: &[Finding]) -> Vec<&str> {
        findings.iter().map(|f| f.code.as_str()).collect()
    }

    #[test]
    fn checkbox_role_requires_aria_checked() {
        let root = SemanticNode::builder("div").role("checkbox").build().unwrap();
        let findings = check(&root);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, REQUIRED_ATTRIBUTE_MISSING);
        assert_eq!(findings[0].message, "Role 'checkbox' requires aria-checked.");
    }

    #[test]
    fn slider_requires_all_three_value_attributes() {
        let root = SemanticNode::builder("div")
            .role("slider")
            .prop("aria-valuenow", 3)
            .build()
            .unwrap();
        let findings = check(&root);

        let missing: Vec<&Finding> = findings
            .iter()
            .filter(|f| f.code == REQUIRED_ATTRIBUTE_MISSING)
            .collect();
        assert_eq!(missing.len(), 2);
        assert!(missing
            .iter()
            .any(|f| f.message.contains("aria-valuemin")));
        assert!(missing
            .iter()
            .any(|f| f.message.contains("aria-valuemax")));
    }

    #[test]
    fn out_of_range_value_enumerates_the_allowed_set() {
        let root = SemanticNode::builder("div")
            .role("checkbox")
            .prop("aria-checked", "maybe")
            .build()
            .unwrap();
        let findings = check(&root);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, INVALID_ATTRIBUTE_VALUE);
        assert!(findings[0].message.contains("one of: true, false, mixed"));
    }

    #[test]
    fn boolean_values_normalize_before_validation() {
        let root = SemanticNode::builder("div")
            .role("combobox")
            .prop("aria-expanded", false)
            .build()
            .unwrap();
        assert!(check(&root).is_empty());
    }

    #[test]
    fn mixed_is_valid_for_checkbox_but_not_radio() {
        let checkbox = SemanticNode::builder("div")
            .role("checkbox")
            .prop("aria-checked", "mixed")
            .build()
            .unwrap();
        assert!(check(&checkbox).is_empty());

        let radio = SemanticNode::builder("div")
            .role("radio")
            .prop("aria-checked", "mixed")
            .build()
            .unwrap();
        assert_eq!(codes(&check(&radio)), vec![INVALID_ATTRIBUTE_VALUE]);
    }

    #[test]
    fn redundant_role_is_a_warning() {
        let root = SemanticNode::builder("button").role("button").build().unwrap();
        let findings = check(&root);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, REDUNDANT_ROLE);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].message.contains("redundant on <button>"));
    }

    #[test]
    fn conflicting_role_is_an_error() {
        let root = SemanticNode::builder("button").role("link").build().unwrap();
        let findings = check(&root);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, CONFLICTING_ROLE);
        assert_eq!(findings[0].severity, Severity::Error);
    }

    #[test]
    fn labelledby_reference_must_resolve_anywhere_in_the_tree() {
        let target = SemanticNode::builder("span")
            .prop("id", "title")
            .build()
            .unwrap();
        let deep = SemanticNode::builder("div")
            .prop("aria-labelledby", "title ghost")
            .build()
            .unwrap();
        let nested = SemanticNode::builder("section")
            .child(SemanticNode::builder("div").child(deep).build().unwrap())
            .build()
            .unwrap();
        let root = SemanticNode::builder("main")
            .child(target)
            .child(nested)
            .build()
            .unwrap();

        let findings = check(&root);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].code, RELATIONSHIP_MISSING_TARGET);
        assert_eq!(findings[0].path, "$.children[1].children[0].children[0]");
        assert!(findings[0].message.contains("missing id 'ghost'"));
    }

    #[test]
    fn one_finding_per_missing_id() {
        let root = SemanticNode::builder("div")
            .prop("aria-describedby", "a b c")
            .build()
            .unwrap();

        let findings = check(&root);
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.code == RELATIONSHIP_MISSING_TARGET));
    }

    #[test]
    fn relationship_checks_do_not_need_a_role() {
        // Node has no explicit role at all; the reference is still checked.
        let root = SemanticNode::builder("p")
            .prop("aria-labelledby", "nowhere")
            .build()
            .unwrap();

        assert_eq!(codes(&check(&root)), vec![RELATIONSHIP_MISSING_TARGET]);
    }

    #[test]
    fn live_region_values_are_constrained() {
        let polite = SemanticNode::builder("div")
            .prop("aria-live", "Polite ")
            .build()
            .unwrap();
        assert!(check(&polite).is_empty());

        let loud = SemanticNode::builder("div")
            .prop("aria-live", "loud")
            .build()
            .unwrap();
        assert_eq!(codes(&check(&loud)), vec![LIVE_INVALID]);

        // A boolean normalizes to "true", which is not a live-region value.
        let boolean = SemanticNode::builder("div")
            .prop("aria-live", true)
            .build()
            .unwrap();
        assert_eq!(codes(&check(&boolean)), vec![LIVE_INVALID]);
    }

    #[test]
    fn aria_live_camel_case_alias_is_read() {
        let root = SemanticNode::builder("div")
            .prop("ariaLive", "shouting")
            .build()
            .unwrap();
        assert_eq!(codes(&check(&root)), vec![LIVE_INVALID]);
    }
}
