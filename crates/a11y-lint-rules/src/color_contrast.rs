//! Color contrast rule using the WCAG relative-luminance formula.

use a11y_lint_core::{Finding, PropValue, Rule, SemanticNode, Severity};
use regex::Regex;
use std::sync::LazyLock;

/// Rule name for color-contrast.
pub const NAME: &str = "color-contrast";

/// Contrast ratio below the required minimum.
pub const INSUFFICIENT_CONTRAST: &str = "A11Y_COLOR_INSUFFICIENT_CONTRAST";

#[allow(clippy::expect_used)]
static RGB_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)").expect("valid regex")
});

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Parses `#rgb`/`#rrggbb` hex or `rgb()`/`rgba()` function syntax.
/// Anything else reads as unparseable.
#[must_use]
pub fn parse_color(value: &str) -> Option<Rgb> {
    let trimmed = value.trim().to_lowercase();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex);
    }
    if trimmed.starts_with("rgb") {
        return parse_rgb_fn(&trimmed);
    }
    None
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Rgb { r, g, b })
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb { r, g, b })
        }
        _ => None,
    }
}

fn parse_rgb_fn(value: &str) -> Option<Rgb> {
    let caps = RGB_FN.captures(value)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    Some(Rgb { r, g, b })
}

/// Relative luminance per WCAG 2.x.
/// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let channel = |c: u8| {
        let normalized = f64::from(c) / 255.0;
        if normalized <= 0.03928 {
            normalized / 12.92
        } else {
            ((normalized + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * channel(color.r) + 0.7152 * channel(color.g) + 0.0722 * channel(color.b)
}

/// Contrast ratio between two colors. Symmetric in its arguments; the
/// result lies in `[1, 21]`.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

struct ContrastTarget {
    foreground: Rgb,
    background: Rgb,
    large_text: bool,
    non_text: bool,
}

fn parse_font_size(value: &PropValue) -> Option<f64> {
    match value {
        PropValue::Number(n) if n.is_finite() => Some(*n),
        PropValue::String(s) => {
            let trimmed = s.trim().to_lowercase();
            let digits = trimmed.strip_suffix("px").unwrap_or(&trimmed);
            digits.trim().parse::<f64>().ok().filter(|n| n.is_finite())
        }
        _ => None,
    }
}

fn is_bold(value: &PropValue) -> bool {
    match value {
        PropValue::Number(n) => *n >= 700.0,
        PropValue::String(s) => {
            let trimmed = s.trim().to_lowercase();
            if trimmed == "bold" || trimmed == "bolder" {
                return true;
            }
            trimmed.parse::<f64>().is_ok_and(|n| n >= 700.0)
        }
        _ => false,
    }
}

fn is_large_font(node: &SemanticNode) -> bool {
    let Some(size) = node.prop("fontSize").and_then(parse_font_size) else {
        return false;
    };
    let bold = node.prop("fontWeight").is_some_and(is_bold);
    if bold {
        size >= 18.66
    } else {
        size >= 24.0
    }
}

fn extract_target(node: &SemanticNode) -> Option<ContrastTarget> {
    let foreground = node
        .string_prop("color")
        .or_else(|| node.string_prop("textColor"))
        .and_then(parse_color)?;
    let background = node
        .string_prop("backgroundColor")
        .or_else(|| node.string_prop("background"))
        .and_then(parse_color)?;

    let non_text = node.bool_prop("nonText") == Some(true)
        || node.string_prop("contrastType") == Some("non-text");
    let large_text = node.bool_prop("largeText") == Some(true) || is_large_font(node);

    Some(ContrastTarget {
        foreground,
        background,
        large_text,
        non_text,
    })
}

/// Minimum ratio plus the labels used in the message.
fn required_ratio(target: &ContrastTarget) -> (f64, &'static str, &'static str) {
    if target.non_text {
        (3.0, "Non-text", "3")
    } else if target.large_text {
        (3.0, "Large text", "3")
    } else {
        (4.5, "Text", "4.5")
    }
}

/// Checks text/background contrast against WCAG minimums: 4.5:1 for normal
/// text, 3:1 for large text and non-text targets. Nodes without a
/// parseable color pair are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorContrast;

impl ColorContrast {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for ColorContrast {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Checks color contrast ratios against WCAG minimums"
    }

    fn check(&self, root: &SemanticNode) -> Vec<Finding> {
        let mut findings = Vec::new();

        root.walk(|node, path| {
            let Some(target) = extract_target(node) else {
                return;
            };

            let ratio = contrast_ratio(target.foreground, target.background);
            let (min_ratio, label, min_display) = required_ratio(&target);
            tracing::trace!(ratio, path, "contrast computed");

            if ratio < min_ratio {
                findings.push(Finding::new(
                    INSUFFICIENT_CONTRAST,
                    path,
                    format!(
                        "{label} contrast ratio {ratio:.2}:1 is below {min_display}:1. Increase contrast to at least {min_display}:1."
                    ),
                    Severity::Error,
                ));
            }
        });

        findings
    }
}
