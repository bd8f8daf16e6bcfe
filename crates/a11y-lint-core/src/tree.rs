//! The semantic tree consumed by accessibility rules.
//!
//! A [`SemanticNode`] is one accessibility-relevant unit of a document:
//! an element category (`kind`), an optional accessible name, an optional
//! explicit ARIA role, an open property bag, and ordered children. Trees
//! are built once (by an adapter or deserialized from JSON), validated at
//! construction, and read immutably by every rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use miette::Diagnostic;
use thiserror::Error;

/// ARIA roles accepted on a node. Not exhaustive of the ARIA spec, but
/// covers the roles the rules know about.
pub const ARIA_ROLES: &[&str] = &[
    "alert",
    "alertdialog",
    "application",
    "article",
    "banner",
    "button",
    "cell",
    "checkbox",
    "columnheader",
    "combobox",
    "complementary",
    "contentinfo",
    "definition",
    "dialog",
    "directory",
    "document",
    "feed",
    "figure",
    "form",
    "grid",
    "gridcell",
    "group",
    "heading",
    "img",
    "link",
    "list",
    "listbox",
    "listitem",
    "log",
    "main",
    "marquee",
    "math",
    "menu",
    "menubar",
    "menuitem",
    "menuitemcheckbox",
    "menuitemradio",
    "navigation",
    "none",
    "note",
    "option",
    "presentation",
    "progressbar",
    "radio",
    "radiogroup",
    "region",
    "row",
    "rowgroup",
    "rowheader",
    "scrollbar",
    "search",
    "searchbox",
    "separator",
    "slider",
    "spinbutton",
    "status",
    "switch",
    "tab",
    "table",
    "tablist",
    "tabpanel",
    "term",
    "textbox",
    "timer",
    "toolbar",
    "tooltip",
    "tree",
    "treegrid",
    "treeitem",
];

/// Returns true if `role` is in the accepted ARIA role list.
#[must_use]
pub fn is_valid_role(role: &str) -> bool {
    ARIA_ROLES.contains(&role)
}

/// Errors raised while constructing a [`SemanticNode`].
#[derive(Debug, Error, Diagnostic)]
pub enum TreeError {
    /// Element type fails the identifier format.
    #[error("element type `{0}` must start with a letter and contain only letters, digits, underscores, or hyphens (max 100 chars)")]
    #[diagnostic(code(a11y_lint::tree::invalid_kind))]
    InvalidKind(String),

    /// Accessible name is empty or whitespace-only.
    #[error("accessible name must not be empty or whitespace-only")]
    #[diagnostic(
        code(a11y_lint::tree::empty_name),
        help("omit the name instead of passing a blank string")
    )]
    EmptyName,

    /// Accessible name exceeds the length limit.
    #[error("accessible name exceeds 1000 characters")]
    #[diagnostic(code(a11y_lint::tree::name_too_long))]
    NameTooLong,

    /// Role is not a recognized ARIA role.
    #[error("`{0}` is not a valid ARIA role")]
    #[diagnostic(
        code(a11y_lint::tree::invalid_role),
        help("see ARIA_ROLES for the accepted set")
    )]
    InvalidRole(String),
}

/// A dynamically typed property value.
///
/// Properties arrive from heterogeneous sources (resolved styles, ARIA
/// attributes, adapter flags), so the variant set mirrors JSON. Rules never
/// match on this directly; they go through the typed accessors on
/// [`SemanticNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Boolean flag.
    Bool(bool),
    /// Numeric value (integers and floats collapse to f64).
    Number(f64),
    /// String value.
    String(String),
    /// Ordered list of values.
    List(Vec<PropValue>),
    /// Nested string-keyed map.
    Map(BTreeMap<String, PropValue>),
}

impl PropValue {
    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the list items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[PropValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Truthiness in the source-document sense: `false`, `0`, NaN, and the
    /// empty string are falsy; lists and maps are always truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::String(s) => !s.is_empty(),
            Self::List(_) | Self::Map(_) => true,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        Self::List(value)
    }
}

/// Untrusted wire shape; validated into [`SemanticNode`] via `TryFrom`.
#[derive(Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    props: BTreeMap<String, PropValue>,
    #[serde(default)]
    children: Vec<SemanticNode>,
}

/// One accessibility-relevant unit of a document.
///
/// Immutable after construction; build with [`SemanticNode::builder`] or
/// deserialize from JSON (deserialization applies the same validation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode")]
pub struct SemanticNode {
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    props: BTreeMap<String, PropValue>,
    children: Vec<SemanticNode>,
}

impl TryFrom<RawNode> for SemanticNode {
    type Error = TreeError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let mut builder = Self::builder(raw.kind);
        if let Some(name) = raw.name {
            builder = builder.name(name);
        }
        if let Some(role) = raw.role {
            builder = builder.role(role);
        }
        builder.props = raw.props;
        builder.children = raw.children;
        builder.build()
    }
}

impl SemanticNode {
    /// Starts building a node of the given element kind.
    #[must_use]
    pub fn builder(kind: impl Into<String>) -> NodeBuilder {
        NodeBuilder {
            kind: kind.into(),
            name: None,
            role: None,
            props: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Element category identifier (e.g. `button`, `h2`, `custom-widget`).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Accessible name, trimmed. Never empty when present.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Explicit ARIA role, if one was set.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// The explicit role, falling back to the element kind.
    #[must_use]
    pub fn role_or_kind(&self) -> &str {
        self.role.as_deref().unwrap_or(&self.kind)
    }

    /// The open property map.
    #[must_use]
    pub fn props(&self) -> &BTreeMap<String, PropValue> {
        &self.props
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self) -> &[SemanticNode] {
        &self.children
    }

    /// Raw property lookup.
    #[must_use]
    pub fn prop(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// Returns true if the property key is present, whatever its value.
    #[must_use]
    pub fn has_prop(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// String property; non-string values read as absent.
    #[must_use]
    pub fn string_prop(&self, key: &str) -> Option<&str> {
        self.prop(key).and_then(PropValue::as_str)
    }

    /// Boolean property; non-boolean values read as absent.
    #[must_use]
    pub fn bool_prop(&self, key: &str) -> Option<bool> {
        self.prop(key).and_then(PropValue::as_bool)
    }

    /// Numeric property: a number, or a string that parses as one.
    #[must_use]
    pub fn number_prop(&self, key: &str) -> Option<f64> {
        match self.prop(key)? {
            PropValue::Number(n) if n.is_finite() => Some(*n),
            PropValue::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Attribute-style flag: boolean `true` or the string `"true"`.
    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        match self.prop(key) {
            Some(PropValue::Bool(b)) => *b,
            Some(PropValue::String(s)) => s == "true",
            _ => false,
        }
    }

    /// Explicit tab index from `tabIndex`/`tabindex`, as a number or a
    /// numeric string. Returns `None` when absent or unparseable.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn tab_index(&self) -> Option<i32> {
        let raw = self.prop("tabIndex").or_else(|| self.prop("tabindex"))?;
        let value = match raw {
            PropValue::Number(n) if n.is_finite() => *n,
            PropValue::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())?
            }
            _ => return None,
        };
        Some(value as i32)
    }

    /// Preorder traversal threading the location path downward.
    ///
    /// The root is visited with path `$`; each descent appends
    /// `.children[N]` where `N` is the zero-based child index. Rules build
    /// finding paths from the string handed to `visit`, never by
    /// re-deriving structure afterward.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a SemanticNode, &str),
    {
        self.walk_inner("$", &mut visit);
    }

    fn walk_inner<'a, F>(&'a self, path: &str, visit: &mut F)
    where
        F: FnMut(&'a SemanticNode, &str),
    {
        visit(self, path);
        for (index, child) in self.children.iter().enumerate() {
            child.walk_inner(&format!("{path}.children[{index}]"), visit);
        }
    }

    /// Total number of nodes in this subtree, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

/// Builder for [`SemanticNode`]; validation happens in [`NodeBuilder::build`].
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    kind: String,
    name: Option<String>,
    role: Option<String>,
    props: BTreeMap<String, PropValue>,
    children: Vec<SemanticNode>,
}

impl NodeBuilder {
    /// Sets the accessible name. Trimmed at build time; blank input is a
    /// build error.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the explicit ARIA role. Must be in [`ARIA_ROLES`].
    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Adds one property.
    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Appends one child.
    #[must_use]
    pub fn child(mut self, child: SemanticNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends children in order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = SemanticNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Validates and builds the node.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] when the kind fails the identifier format,
    /// the name is blank or too long, or the role is not a valid ARIA role.
    pub fn build(self) -> Result<SemanticNode, TreeError> {
        validate_kind(&self.kind)?;

        let name = match self.name {
            Some(raw) => {
                if raw.len() > 1000 {
                    return Err(TreeError::NameTooLong);
                }
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(TreeError::EmptyName);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let role = match self.role {
            Some(raw) => {
                let trimmed = raw.trim();
                if !is_valid_role(trimmed) {
                    return Err(TreeError::InvalidRole(trimmed.to_string()));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        Ok(SemanticNode {
            kind: self.kind,
            name,
            role,
            props: self.props,
            children: self.children,
        })
    }
}

fn validate_kind(kind: &str) -> Result<(), TreeError> {
    let mut chars = kind.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if !starts_with_letter || !rest_valid || kind.len() > 100 {
        return Err(TreeError::InvalidKind(kind.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(kind: &str) -> SemanticNode {
        SemanticNode::builder(kind).build().unwrap()
    }

    #[test]
    fn builds_minimal_node() {
        let n = node("div");
        assert_eq!(n.kind(), "div");
        assert!(n.name().is_none());
        assert!(n.role().is_none());
        assert!(n.children().is_empty());
    }

    #[test]
    fn rejects_invalid_kinds() {
        for bad in ["", "9lives", "has space", "\u{e9}tiquette"] {
            assert!(matches!(
                SemanticNode::builder(bad).build(),
                Err(TreeError::InvalidKind(_))
            ));
        }
    }

    #[test]
    fn accepts_custom_element_kinds() {
        assert!(SemanticNode::builder("my-widget_v2").build().is_ok());
        assert!(SemanticNode::builder("h1").build().is_ok());
    }

    #[test]
    fn trims_names_and_rejects_blank_ones() {
        let n = SemanticNode::builder("button")
            .name("  Submit  ")
            .build()
            .unwrap();
        assert_eq!(n.name(), Some("Submit"));

        assert!(matches!(
            SemanticNode::builder("button").name("   ").build(),
            Err(TreeError::EmptyName)
        ));
    }

    #[test]
    fn validates_roles() {
        let n = SemanticNode::builder("div")
            .role(" heading ")
            .build()
            .unwrap();
        assert_eq!(n.role(), Some("heading"));

        assert!(matches!(
            SemanticNode::builder("div").role("headline").build(),
            Err(TreeError::InvalidRole(_))
        ));
    }

    #[test]
    fn role_or_kind_falls_back_to_kind() {
        assert_eq!(node("button").role_or_kind(), "button");
        let n = SemanticNode::builder("div").role("button").build().unwrap();
        assert_eq!(n.role_or_kind(), "button");
    }

    #[test]
    fn string_prop_ignores_other_types() {
        let n = SemanticNode::builder("div")
            .prop("id", "main")
            .prop("count", 3)
            .build()
            .unwrap();
        assert_eq!(n.string_prop("id"), Some("main"));
        assert_eq!(n.string_prop("count"), None);
        assert_eq!(n.string_prop("missing"), None);
    }

    #[test]
    fn number_prop_accepts_numeric_strings() {
        let n = SemanticNode::builder("div")
            .prop("a", 2)
            .prop("b", "3")
            .prop("c", "not a number")
            .prop("d", " ")
            .build()
            .unwrap();
        assert_eq!(n.number_prop("a"), Some(2.0));
        assert_eq!(n.number_prop("b"), Some(3.0));
        assert_eq!(n.number_prop("c"), None);
        assert_eq!(n.number_prop("d"), None);
    }

    #[test]
    fn flag_matches_bool_true_and_string_true() {
        let n = SemanticNode::builder("div")
            .prop("a", true)
            .prop("b", "true")
            .prop("c", "TRUE")
            .prop("d", false)
            .build()
            .unwrap();
        assert!(n.flag("a"));
        assert!(n.flag("b"));
        assert!(!n.flag("c"));
        assert!(!n.flag("d"));
        assert!(!n.flag("missing"));
    }

    #[test]
    fn tab_index_reads_both_spellings() {
        let camel = SemanticNode::builder("div")
            .prop("tabIndex", 2)
            .build()
            .unwrap();
        let lower = SemanticNode::builder("div")
            .prop("tabindex", "-1")
            .build()
            .unwrap();
        let bad = SemanticNode::builder("div")
            .prop("tabIndex", "soon")
            .build()
            .unwrap();

        assert_eq!(camel.tab_index(), Some(2));
        assert_eq!(lower.tab_index(), Some(-1));
        assert_eq!(bad.tab_index(), None);
        assert_eq!(node("div").tab_index(), None);
    }

    #[test]
    fn truthiness_follows_source_document_semantics() {
        assert!(PropValue::Bool(true).is_truthy());
        assert!(!PropValue::Bool(false).is_truthy());
        assert!(!PropValue::Number(0.0).is_truthy());
        assert!(PropValue::Number(1.5).is_truthy());
        assert!(!PropValue::String(String::new()).is_truthy());
        assert!(PropValue::String("x".into()).is_truthy());
        assert!(PropValue::List(vec![]).is_truthy());
        assert!(PropValue::Map(BTreeMap::new()).is_truthy());
    }

    #[test]
    fn walk_threads_paths_in_document_order() {
        let tree = SemanticNode::builder("main")
            .child(
                SemanticNode::builder("section")
                    .child(node("p"))
                    .build()
                    .unwrap(),
            )
            .child(node("footer"))
            .build()
            .unwrap();

        let mut seen = Vec::new();
        tree.walk(|n, path| seen.push((n.kind().to_string(), path.to_string())));

        assert_eq!(
            seen,
            vec![
                ("main".to_string(), "$".to_string()),
                ("section".to_string(), "$.children[0]".to_string()),
                ("p".to_string(), "$.children[0].children[0]".to_string()),
                ("footer".to_string(), "$.children[1]".to_string()),
            ]
        );
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn deserializes_and_validates_json() {
        let tree: SemanticNode = serde_json::from_str(
            r#"{
                "type": "ul",
                "role": "list",
                "props": {"id": "nav", "aria-level": 2, "hidden": false},
                "children": [
                    {"type": "li", "name": "Home", "props": {}, "children": []}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(tree.kind(), "ul");
        assert_eq!(tree.role(), Some("list"));
        assert_eq!(tree.number_prop("aria-level"), Some(2.0));
        assert_eq!(tree.children()[0].name(), Some("Home"));
    }

    #[test]
    fn deserialization_rejects_blank_names() {
        let result: Result<SemanticNode, _> =
            serde_json::from_str(r#"{"type": "button", "name": "   "}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialization_rejects_unknown_roles() {
        let result: Result<SemanticNode, _> =
            serde_json::from_str(r#"{"type": "div", "role": "super-button"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_kind_as_type() {
        let n = SemanticNode::builder("img")
            .prop("alt", "Logo")
            .build()
            .unwrap();
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "img");
        assert_eq!(json["props"]["alt"], "Logo");
    }
}
