//! Shared interactivity and focusability predicates.
//!
//! Used by the keyboard and screen-reader rules, which must agree on what
//! counts as interactive and focusable.

use a11y_lint_core::SemanticNode;

/// Roles (or kinds standing in for roles) that make a node interactive.
pub const INTERACTIVE_ROLES: &[&str] = &[
    "button",
    "link",
    "textbox",
    "checkbox",
    "radio",
    "combobox",
    "searchbox",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "option",
    "switch",
    "slider",
    "tab",
];

/// True when the node's explicit role (falling back to its kind) is in the
/// interactive set.
#[must_use]
pub fn is_interactive(node: &SemanticNode) -> bool {
    INTERACTIVE_ROLES.contains(&node.role_or_kind())
}

/// Disabled via `disabled` or `aria-disabled` (boolean or `"true"`).
#[must_use]
pub fn is_disabled(node: &SemanticNode) -> bool {
    node.flag("disabled") || node.flag("aria-disabled")
}

/// Whether the node can receive keyboard focus.
///
/// Disabled nodes never are. Otherwise an explicit tab index decides
/// (`>= 0` focusable), then an explicit `focusable` flag, then the
/// interactive default.
#[must_use]
pub fn is_focusable(node: &SemanticNode) -> bool {
    if is_disabled(node) {
        return false;
    }

    if let Some(tab_index) = node.tab_index() {
        return tab_index >= 0;
    }

    match node.bool_prop("focusable") {
        Some(explicit) => explicit,
        None => is_interactive(node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: &str) -> SemanticNode {
        SemanticNode::builder(kind).build().unwrap()
    }

    #[test]
    fn interactive_by_kind_or_role() {
        assert!(is_interactive(&node("button")));
        assert!(!is_interactive(&node("div")));

        let custom = SemanticNode::builder("div").role("button").build().unwrap();
        assert!(is_interactive(&custom));
    }

    #[test]
    fn explicit_role_overrides_kind() {
        // A button demoted to a presentational role is not interactive.
        let demoted = SemanticNode::builder("button")
            .role("presentation")
            .build()
            .unwrap();
        assert!(!is_interactive(&demoted));
    }

    #[test]
    fn disabled_nodes_are_never_focusable() {
        let disabled = SemanticNode::builder("button")
            .prop("disabled", true)
            .prop("tabIndex", 0)
            .build()
            .unwrap();
        assert!(!is_focusable(&disabled));

        let aria_disabled = SemanticNode::builder("button")
            .prop("aria-disabled", "true")
            .build()
            .unwrap();
        assert!(!is_focusable(&aria_disabled));
    }

    #[test]
    fn tab_index_decides_before_flags() {
        let negative = SemanticNode::builder("button")
            .prop("tabIndex", -1)
            .prop("focusable", true)
            .build()
            .unwrap();
        assert!(!is_focusable(&negative));

        let positive_div = SemanticNode::builder("div")
            .prop("tabIndex", 0)
            .build()
            .unwrap();
        assert!(is_focusable(&positive_div));
    }

    #[test]
    fn focusable_flag_decides_before_interactive_default() {
        let opt_out = SemanticNode::builder("button")
            .prop("focusable", false)
            .build()
            .unwrap();
        assert!(!is_focusable(&opt_out));

        let opt_in = SemanticNode::builder("div")
            .prop("focusable", true)
            .build()
            .unwrap();
        assert!(is_focusable(&opt_in));

        assert!(is_focusable(&node("button")));
        assert!(!is_focusable(&node("div")));
    }
}
