//! Structural semantics rule: headings, buttons vs links, lists, tables,
//! and form labels.

use a11y_lint_core::{Finding, PropValue, Rule, SemanticNode, Severity};
use std::collections::BTreeSet;

/// Rule name for semantic-structure.
pub const NAME: &str = "semantic-structure";

/// A heading level jumps more than one step deeper than its predecessor.
pub const HEADING_LEVEL_SKIP: &str = "A11Y_SEMANTIC_HEADING_LEVEL_SKIP";
/// Headings exist but none is level 1.
pub const MISSING_H1: &str = "A11Y_SEMANTIC_MISSING_H1";
/// A link carries a click handler and should be a button.
pub const LINK_WITH_ONCLICK: &str = "A11Y_SEMANTIC_LINK_WITH_ONCLICK";
/// A link has no href and should be a button.
pub const LINK_WITHOUT_HREF: &str = "A11Y_SEMANTIC_LINK_WITHOUT_HREF";
/// A button carries an href and should be a link.
pub const BUTTON_WITH_HREF: &str = "A11Y_SEMANTIC_BUTTON_WITH_HREF";
/// A list container has a direct child that is not a list item.
pub const INVALID_LIST_CHILD: &str = "A11Y_SEMANTIC_INVALID_LIST_CHILD";
/// A `th` header cell lacks a scope attribute.
pub const TH_MISSING_SCOPE: &str = "A11Y_SEMANTIC_TH_MISSING_SCOPE";
/// A complex table is not structured with thead/tbody.
pub const TABLE_MISSING_THEAD_TBODY: &str = "A11Y_SEMANTIC_TABLE_MISSING_THEAD_TBODY";
/// A table has no header cells anywhere in its subtree.
pub const TABLE_MISSING_HEADERS: &str = "A11Y_SEMANTIC_TABLE_MISSING_HEADERS";
/// A form control has no label association.
pub const FORM_CONTROL_UNLABELED: &str = "A11Y_SEMANTIC_FORM_CONTROL_UNLABELED";

/// Checks structural document semantics:
///
/// 1. Heading hierarchy (no skipped levels going deeper; an h1 somewhere)
/// 2. Button vs link usage (buttons for actions, links for navigation)
/// 3. List structure (list containers hold only list items)
/// 4. Table semantics (header cells, scope, thead/tbody structuring)
/// 5. Form label associations
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticStructure;

impl SemanticStructure {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for SemanticStructure {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Checks heading hierarchy, button/link usage, list, table, and form structure"
    }

    fn check(&self, root: &SemanticNode) -> Vec<Finding> {
        let mut findings = Vec::new();

        check_heading_hierarchy(root, &mut findings);
        check_button_vs_link(root, &mut findings);
        check_list_structure(root, &mut findings);
        check_table_semantics(root, &mut findings);
        check_form_labels(root, &mut findings);

        findings
    }
}

/// Level parsed from an `h1`..`h6` kind, case-insensitive.
fn heading_level_from_kind(kind: &str) -> Option<u32> {
    let rest = kind
        .strip_prefix('h')
        .or_else(|| kind.strip_prefix('H'))?;
    let mut chars = rest.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() || !(1..=6).contains(&digit) {
        return None;
    }
    Some(digit)
}

/// A node is a heading when it says so explicitly, or when it has no
/// explicit role and its kind is `h1`..`h6`.
fn is_heading(node: &SemanticNode) -> bool {
    match node.role() {
        Some(role) => role == "heading",
        None => heading_level_from_kind(node.kind()).is_some(),
    }
}

/// Heading level: explicit `aria-level`, else derived from the kind.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn heading_level(node: &SemanticNode) -> Option<u32> {
    node.number_prop("aria-level")
        .map(|level| level as u32)
        .or_else(|| heading_level_from_kind(node.kind()))
}

fn check_heading_hierarchy(root: &SemanticNode, findings: &mut Vec<Finding>) {
    let mut headings: Vec<(u32, String)> = Vec::new();

    root.walk(|node, path| {
        if is_heading(node) {
            if let Some(level) = heading_level(node) {
                headings.push((level, path.to_string()));
            }
        }
    });

    for pair in headings.windows(2) {
        let (prev_level, _) = &pair[0];
        let (curr_level, curr_path) = &pair[1];

        // Same level, one deeper, or back out to any shallower level is
        // fine; only skipping levels on the way down is flagged.
        if *curr_level > prev_level + 1 {
            findings.push(Finding::new(
                HEADING_LEVEL_SKIP,
                curr_path,
                format!(
                    "Heading level {curr_level} skips level {}. Use h{} before h{curr_level}.",
                    prev_level + 1,
                    prev_level + 1
                ),
                Severity::Error,
            ));
        }
    }

    if !headings.is_empty() && !headings.iter().any(|(level, _)| *level == 1) {
        findings.push(Finding::new(
            MISSING_H1,
            "$",
            "Document should have at least one h1 heading.",
            Severity::Warning,
        ));
    }
}

fn truthy_prop(node: &SemanticNode, key: &str) -> bool {
    node.prop(key).is_some_and(PropValue::is_truthy)
}

fn check_button_vs_link(root: &SemanticNode, findings: &mut Vec<Finding>) {
    root.walk(|node, path| {
        let link_like = node.kind() == "a" || node.role() == Some("link");
        let button_like = node.kind() == "button" || node.role() == Some("button");

        if link_like && truthy_prop(node, "onclick") {
            findings.push(Finding::new(
                LINK_WITH_ONCLICK,
                path,
                "Link has onclick handler. Use <button> for actions, <a> for navigation.",
                Severity::Error,
            ));
        }

        if link_like && !truthy_prop(node, "href") {
            findings.push(Finding::new(
                LINK_WITHOUT_HREF,
                path,
                "Link missing href attribute. Use <button> if not navigating.",
                Severity::Error,
            ));
        }

        if button_like && truthy_prop(node, "href") {
            findings.push(Finding::new(
                BUTTON_WITH_HREF,
                path,
                "Button has href attribute. Use <a> for navigation, <button> for actions.",
                Severity::Error,
            ));
        }
    });
}

fn check_list_structure(root: &SemanticNode, findings: &mut Vec<Finding>) {
    root.walk(|node, path| {
        let is_list =
            node.kind() == "ul" || node.kind() == "ol" || node.role() == Some("list");
        if !is_list {
            return;
        }

        for (index, child) in node.children().iter().enumerate() {
            let is_list_item = child.kind() == "li" || child.role() == Some("listitem");
            if !is_list_item {
                findings.push(Finding::new(
                    INVALID_LIST_CHILD,
                    format!("{path}.children[{index}]"),
                    format!(
                        "List child must be <li> or role=\"listitem\", found type=\"{}\".",
                        child.kind()
                    ),
                    Severity::Error,
                ));
            }
        }
    });
}

/// Scans a table subtree for rows and their header cells. Scope warnings
/// are reported at the table's path. Returns whether any header cell was
/// seen.
fn scan_rows_for_headers(
    node: &SemanticNode,
    table_path: &str,
    findings: &mut Vec<Finding>,
) -> bool {
    let mut has_header_cells = false;

    if node.kind() == "tr" || node.role() == Some("row") {
        for cell in node.children() {
            let is_header = cell.kind() == "th"
                || matches!(cell.role(), Some("columnheader" | "rowheader"));
            if is_header {
                has_header_cells = true;

                if cell.kind() == "th" && !truthy_prop(cell, "scope") {
                    findings.push(Finding::new(
                        TH_MISSING_SCOPE,
                        table_path,
                        "Header cells (<th>) should have scope attribute (row, col, rowgroup, colgroup).",
                        Severity::Warning,
                    ));
                }
            }
        }
    }

    for child in node.children() {
        if scan_rows_for_headers(child, table_path, findings) {
            has_header_cells = true;
        }
    }

    has_header_cells
}

fn check_table_semantics(root: &SemanticNode, findings: &mut Vec<Finding>) {
    root.walk(|node, path| {
        let is_table = node.kind() == "table" || node.role() == Some("table");
        if !is_table {
            return;
        }

        let has_thead_or_tbody = node
            .children()
            .iter()
            .any(|child| child.kind() == "thead" || child.kind() == "tbody");

        let has_header_cells = scan_rows_for_headers(node, path, findings);

        if !has_thead_or_tbody && node.children().len() > 3 {
            findings.push(Finding::new(
                TABLE_MISSING_THEAD_TBODY,
                path,
                "Complex tables should use <thead> and <tbody> for better structure.",
                Severity::Info,
            ));
        }

        if !has_header_cells {
            findings.push(Finding::new(
                TABLE_MISSING_HEADERS,
                path,
                "Tables should have header cells (<th> or role='columnheader/rowheader').",
                Severity::Warning,
            ));
        }
    });
}

fn check_form_labels(root: &SemanticNode, findings: &mut Vec<Finding>) {
    // Pass 1: every id a <label for> points at, tree-wide.
    let mut labeled_ids: BTreeSet<String> = BTreeSet::new();
    root.walk(|node, _| {
        if node.kind() == "label" {
            if let Some(target) = node.string_prop("for") {
                if !target.is_empty() {
                    labeled_ids.insert(target.to_string());
                }
            }
        }
    });

    // Pass 2: each form control must be reachable by some label mechanism.
    root.walk(|node, path| {
        let is_form_control = matches!(node.kind(), "input" | "select" | "textarea")
            || matches!(node.role(), Some("textbox" | "combobox" | "searchbox"));
        if !is_form_control {
            return;
        }

        let has_name = node.name().is_some();
        let has_label_association = node
            .string_prop("id")
            .is_some_and(|id| !id.is_empty() && labeled_ids.contains(id));
        let has_aria_label = node
            .string_prop("aria-label")
            .is_some_and(|s| !s.is_empty())
            || node
                .string_prop("aria-labelledby")
                .is_some_and(|s| !s.is_empty());

        if !has_name && !has_label_association && !has_aria_label {
            findings.push(Finding::new(
                FORM_CONTROL_UNLABELED,
                path,
                "Form control should have associated <label>, aria-label, or aria-labelledby.",
                Severity::Error,
            ));
        }
    });
}
