//! Text alternatives rule: alt text, SVG labels, media captions, icon
//! controls, and fallback content.

use a11y_lint_core::{Finding, Rule, SemanticNode, Severity};

/// Rule name for text-alternatives.
pub const NAME: &str = "text-alternatives";

/// Meaningful image without an alt property.
pub const MISSING_ALT: &str = "A11Y_TEXT_ALT_MISSING_ALT";
/// Meaningful image with empty alt text.
pub const EMPTY_ALT_MEANINGFUL: &str = "A11Y_TEXT_ALT_EMPTY_ALT_MEANINGFUL";
/// SVG without an accessible label.
pub const MISSING_SVG_LABEL: &str = "A11Y_TEXT_ALT_MISSING_SVG_LABEL";
/// Audio/video without captions or a transcript.
pub const MISSING_MEDIA_ALTERNATIVE: &str = "A11Y_TEXT_ALT_MISSING_MEDIA_ALTERNATIVE";
/// Icon-only control without an accessible label.
pub const ICON_CONTROL_MISSING_LABEL: &str = "A11Y_TEXT_ALT_ICON_CONTROL_MISSING_LABEL";
/// Canvas/iframe without fallback content.
pub const MISSING_FALLBACK_CONTENT: &str = "A11Y_TEXT_ALT_MISSING_FALLBACK_CONTENT";

fn is_image(node: &SemanticNode) -> bool {
    node.kind() == "img" || node.role() == Some("img")
}

fn is_decorative(node: &SemanticNode) -> bool {
    node.bool_prop("decorative") == Some(true)
        || matches!(node.role(), Some("presentation" | "none"))
}

/// Accessible label: a name, or a non-blank `aria-label`,
/// `aria-labelledby`, `title`, or `desc` string prop.
fn has_accessible_label(node: &SemanticNode) -> bool {
    if node.name().is_some() {
        return true;
    }
    ["aria-label", "aria-labelledby", "title", "desc"]
        .iter()
        .any(|key| {
            node.string_prop(key)
                .is_some_and(|value| !value.trim().is_empty())
        })
}

fn has_media_alternative(node: &SemanticNode) -> bool {
    let flags = ["captions", "transcript", "hasCaptions", "hasTranscript"];
    if flags.iter().any(|key| node.bool_prop(key) == Some(true)) {
        return true;
    }
    has_accessible_label(node)
}

fn is_icon_only_control(node: &SemanticNode) -> bool {
    if node.bool_prop("iconOnly") != Some(true) {
        return false;
    }
    node.kind() == "button" || matches!(node.role(), Some("button" | "link"))
}

/// Requires text alternatives for non-text content: image alt text, SVG
/// and icon-control labels, media captions/transcripts, and canvas/iframe
/// fallback content.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAlternatives;

impl TextAlternatives {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for TextAlternatives {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Requires text alternatives for images, SVG, media, and embedded content"
    }

    fn check(&self, root: &SemanticNode) -> Vec<Finding> {
        let mut findings = Vec::new();

        root.walk(|node, path| {
            if is_image(node) {
                let alt_provided = node.has_prop("alt");
                let alt = node.string_prop("alt");
                let decorative = is_decorative(node);

                if !alt_provided && !decorative {
                    findings.push(Finding::new(
                        MISSING_ALT,
                        path,
                        "Image elements must provide alt text.",
                        Severity::Error,
                    ));
                } else if alt == Some("") && !decorative {
                    findings.push(Finding::new(
                        EMPTY_ALT_MEANINGFUL,
                        path,
                        "Meaningful images must not use empty alt text.",
                        Severity::Error,
                    ));
                }
            }

            if node.kind() == "svg" && !has_accessible_label(node) {
                findings.push(Finding::new(
                    MISSING_SVG_LABEL,
                    path,
                    "SVG elements must have a title/desc or ARIA label.",
                    Severity::Error,
                ));
            }

            if matches!(node.kind(), "video" | "audio") && !has_media_alternative(node) {
                findings.push(Finding::new(
                    MISSING_MEDIA_ALTERNATIVE,
                    path,
                    "Audio and video elements must provide captions or transcripts.",
                    Severity::Error,
                ));
            }

            if is_icon_only_control(node) && !has_accessible_label(node) {
                findings.push(Finding::new(
                    ICON_CONTROL_MISSING_LABEL,
                    path,
                    "Icon-only controls must include an accessible label.",
                    Severity::Error,
                ));
            }

            if matches!(node.kind(), "canvas" | "iframe") {
                let has_fallback = !node.children().is_empty()
                    || has_accessible_label(node)
                    || node
                        .string_prop("fallbackText")
                        .is_some_and(|text| !text.is_empty());
                if !has_fallback {
                    findings.push(Finding::new(
                        MISSING_FALLBACK_CONTENT,
                        path,
                        "Canvas and iframe elements must include fallback content.",
                        Severity::Error,
                    ));
                }
            }
        });

        findings
    }
}
