//! Keyboard accessibility rule: focusability, activation keys, modal
//! escape, focus order, and keyboard traps.

use crate::focus::{is_focusable, is_interactive};
use a11y_lint_core::{Finding, PropValue, Rule, SemanticNode, Severity};
use std::collections::BTreeSet;

/// Rule name for keyboard-accessible.
pub const NAME: &str = "keyboard-accessible";

/// Interactive element with a negative tab index.
pub const NEGATIVE_TABINDEX: &str = "A11Y_KEYBOARD_NEGATIVE_TABINDEX";
/// Interactive element that cannot receive focus.
pub const NOT_FOCUSABLE: &str = "A11Y_KEYBOARD_NOT_FOCUSABLE";
/// Custom interactive element without an explicit tab index.
pub const MISSING_TABINDEX: &str = "A11Y_KEYBOARD_MISSING_TABINDEX";
/// Element missing its required activation keys.
pub const MISSING_KEYBOARD_HANDLER: &str = "A11Y_KEYBOARD_MISSING_KEYBOARD_HANDLER";
/// Modal dialog without an Escape exit.
pub const MISSING_ESCAPE_HANDLER: &str = "A11Y_KEYBOARD_MISSING_ESCAPE_HANDLER";
/// Composite widget without arrow-key navigation.
pub const MISSING_ARROW_KEY_SUPPORT: &str = "A11Y_KEYBOARD_MISSING_ARROW_KEY_SUPPORT";
/// Positive tab indices decreasing in document order.
pub const TABINDEX_OUT_OF_ORDER: &str = "A11Y_KEYBOARD_TABINDEX_OUT_OF_ORDER";
/// Keyboard trap without an Escape exit.
pub const TRAP: &str = "A11Y_KEYBOARD_TRAP";
/// Focusable element with its focus indicator turned off.
pub const MISSING_FOCUS_INDICATOR: &str = "A11Y_KEYBOARD_MISSING_FOCUS_INDICATOR";

/// Element kinds browsers make focusable and key-operable by default.
const NATIVE_INTERACTIVE_KINDS: &[&str] = &[
    "a",
    "button",
    "input",
    "select",
    "textarea",
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

/// Composite widget roles expected to support arrow-key navigation.
const WIDGET_ROLES: &[&str] = &[
    "listbox",
    "menu",
    "menubar",
    "tablist",
    "radiogroup",
    "tree",
    "treegrid",
    "grid",
    "toolbar",
    "slider",
    "spinbutton",
];

/// Activation keys a role must handle.
fn required_keys(role: &str) -> Option<&'static [&'static str]> {
    match role {
        "button" | "tab" | "menuitem" | "menuitemcheckbox" | "menuitemradio" | "option" => {
            Some(&["enter", "space"])
        }
        "link" => Some(&["enter"]),
        "checkbox" | "radio" | "switch" => Some(&["space"]),
        _ => None,
    }
}

fn is_native_interactive(node: &SemanticNode) -> bool {
    NATIVE_INTERACTIVE_KINDS.contains(&node.kind())
}

fn is_custom_interactive(node: &SemanticNode) -> bool {
    is_interactive(node) && !is_native_interactive(node)
}

/// Lowercases a declared handler key; `" "` and `"spacebar"` normalize to
/// `"space"`.
fn normalize_key(key: &str) -> String {
    if key == " " {
        return "space".to_string();
    }
    let normalized = key.trim().to_lowercase();
    if normalized == "spacebar" {
        "space".to_string()
    } else {
        normalized
    }
}

/// Declared keyboard handlers from `keyboardHandlers`/`keyHandlers`: a
/// list of strings, or one comma-separated string.
fn keyboard_handlers(node: &SemanticNode) -> BTreeSet<String> {
    let raw = node
        .prop("keyboardHandlers")
        .or_else(|| node.prop("keyHandlers"));

    let mut keys: Vec<String> = Vec::new();
    match raw {
        Some(PropValue::List(items)) => {
            keys.extend(items.iter().filter_map(PropValue::as_str).map(normalize_key));
        }
        Some(PropValue::String(s)) => {
            keys.extend(s.split(',').map(normalize_key));
        }
        _ => {}
    }

    keys.into_iter().filter(|k| !k.is_empty()).collect()
}

/// One entry in the synthesized tab order.
#[derive(Debug, Clone)]
pub struct FocusTarget<'a> {
    /// Path of the focusable node.
    pub path: String,
    /// Effective tab index (explicit value, or 0 by default).
    pub tab_index: i32,
    /// The focusable node itself.
    pub node: &'a SemanticNode,
}

fn collect_focusable(root: &SemanticNode) -> Vec<FocusTarget<'_>> {
    let mut targets = Vec::new();
    root.walk(|node, path| {
        if is_focusable(node) {
            targets.push(FocusTarget {
                path: path.to_string(),
                tab_index: node.tab_index().unwrap_or(0),
                node,
            });
        }
    });
    targets
}

/// Synthesizes the sequential keyboard navigation order.
///
/// Mirrors browser tabbing: positive tab indices first, ascending, with
/// document order breaking ties; then every zero-tab-index focusable in
/// plain document order.
#[must_use]
pub fn simulate_tab_navigation(root: &SemanticNode) -> Vec<FocusTarget<'_>> {
    let (mut positive, rest): (Vec<_>, Vec<_>) = collect_focusable(root)
        .into_iter()
        .partition(|t| t.tab_index > 0);

    // Stable sort: document order is the tie-break.
    positive.sort_by_key(|t| t.tab_index);

    positive.into_iter().chain(rest).collect()
}

/// Flags positive tab indices that decrease in document order. Browsers
/// still tab by value, but the authoring is illogical.
#[must_use]
pub fn validate_focus_order(root: &SemanticNode) -> Vec<Finding> {
    let focusables = collect_focusable(root);
    let positive: Vec<&FocusTarget> =
        focusables.iter().filter(|t| t.tab_index > 0).collect();

    let mut findings = Vec::new();
    for pair in positive.windows(2) {
        if pair[1].tab_index < pair[0].tab_index {
            findings.push(Finding::new(
                TABINDEX_OUT_OF_ORDER,
                &pair[1].path,
                "Positive tabindex values must increase in document order for logical tabbing.",
                Severity::Warning,
            ));
        }
    }
    findings
}

/// Flags keyboard/focus traps that provide no Escape exit.
#[must_use]
pub fn validate_keyboard_traps(root: &SemanticNode) -> Vec<Finding> {
    let mut findings = Vec::new();

    root.walk(|node, path| {
        let has_trap = node.bool_prop("keyboardTrap") == Some(true)
            || node.bool_prop("focusTrap") == Some(true);
        if !has_trap {
            return;
        }

        let handlers = keyboard_handlers(node);
        if !handlers.contains("escape") && node.bool_prop("escapeCloses") != Some(true) {
            findings.push(Finding::new(
                TRAP,
                path,
                "Focusable element traps keyboard focus without an Escape exit. Add an Escape handler.",
                Severity::Error,
            ));
        }
    });

    findings
}

fn validate_focusable(root: &SemanticNode, findings: &mut Vec<Finding>) {
    root.walk(|node, path| {
        if !is_interactive(node) {
            return;
        }

        let tab_index = node.tab_index();

        if let Some(index) = tab_index {
            if index < 0 {
                findings.push(Finding::new(
                    NEGATIVE_TABINDEX,
                    path,
                    "Interactive element has tabindex < 0 and is not reachable by Tab. Use tabindex=0 or remove the negative value.",
                    Severity::Error,
                ));
            }
        }

        if !is_focusable(node) {
            findings.push(Finding::new(
                NOT_FOCUSABLE,
                path,
                "Interactive element must be focusable for keyboard access.",
                Severity::Error,
            ));
        }

        // Browsers grant native elements default focusability; custom
        // widgets must opt in explicitly.
        if !is_native_interactive(node) && tab_index.is_none() {
            findings.push(Finding::new(
                MISSING_TABINDEX,
                path,
                "Custom interactive element must define tabindex to be keyboard focusable.",
                Severity::Error,
            ));
        }
    });
}

fn validate_focus_indicators(root: &SemanticNode, findings: &mut Vec<Finding>) {
    root.walk(|node, path| {
        if is_focusable(node) && node.bool_prop("focusVisible") == Some(false) {
            findings.push(Finding::new(
                MISSING_FOCUS_INDICATOR,
                path,
                "Focusable element should provide a visible focus indicator.",
                Severity::Warning,
            ));
        }
    });
}

/// Handler checks for one node. Native elements that declare no handlers
/// are assumed to ship default key handling, so those checks stay quiet
/// for them.
fn check_node_handlers(node: &SemanticNode, path: &str, findings: &mut Vec<Finding>) {
    let role = node.role_or_kind();
    let handlers = keyboard_handlers(node);
    let handlers_provided = !handlers.is_empty();
    let custom = is_custom_interactive(node);

    if let Some(required) = required_keys(role) {
        if custom || handlers_provided {
            let missing: Vec<&str> = required
                .iter()
                .copied()
                .filter(|key| !handlers.contains(*key))
                .collect();
            if !missing.is_empty() {
                findings.push(Finding::new(
                    MISSING_KEYBOARD_HANDLER,
                    path,
                    format!(
                        "Missing keyboard activation keys: {}. Add handlers for these keys.",
                        missing.join(", ")
                    ),
                    Severity::Error,
                ));
            }
        }
    }

    if role == "dialog" || node.bool_prop("aria-modal") == Some(true) {
        if !handlers.contains("escape") && node.bool_prop("escapeCloses") != Some(true) {
            if !custom && !handlers_provided {
                return;
            }
            findings.push(Finding::new(
                MISSING_ESCAPE_HANDLER,
                path,
                "Modal dialog should close on Escape key.",
                Severity::Error,
            ));
        }
    }

    if WIDGET_ROLES.contains(&role) {
        let has_arrow = ["arrowup", "arrowdown", "arrowleft", "arrowright"]
            .iter()
            .any(|key| handlers.contains(*key));
        if !has_arrow && (custom || handlers_provided) {
            findings.push(Finding::new(
                MISSING_ARROW_KEY_SUPPORT,
                path,
                "Widget should support arrow key navigation.",
                Severity::Warning,
            ));
        }
    }
}

fn validate_keyboard_handlers(root: &SemanticNode, findings: &mut Vec<Finding>) {
    root.walk(|node, path| check_node_handlers(node, path, findings));
}

/// Checks keyboard operability end to end: focusability, required
/// activation keys, modal escape, composite-widget arrow keys, focus
/// order, traps, and focus indicators.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardAccessible;

impl KeyboardAccessible {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for KeyboardAccessible {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Checks focusability, activation keys, focus order, and keyboard traps"
    }

    fn check(&self, root: &SemanticNode) -> Vec<Finding> {
        let mut findings = Vec::new();

        validate_focusable(root, &mut findings);
        validate_focus_indicators(root, &mut findings);
        validate_keyboard_handlers(root, &mut findings);
        findings.extend(validate_focus_order(root));
        findings.extend(validate_keyboard_traps(root));

        findings
    }
}
