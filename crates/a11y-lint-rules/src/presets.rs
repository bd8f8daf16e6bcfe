//! Rule presets for common configurations.

use crate::{
    AriaUsage, ColorContrast, KeyboardAccessible, NameRequired, ScreenReaderVisibility,
    SemanticStructure, TextAlternatives,
};
use a11y_lint_core::RuleBox;

/// Preset configurations for a11y-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every built-in rule.
    Standard,
    /// Name and text-alternative checks only, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Standard => standard_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns every built-in rule:
///
/// - `semantic-structure` - headings, buttons vs links, lists, tables, forms
/// - `aria-usage` - role properties, conflicts, id references, live regions
/// - `keyboard-accessible` - focusability, activation keys, focus order
/// - `color-contrast` - WCAG contrast minimums
/// - `text-alternatives` - alt text, labels, captions, fallback content
/// - `screen-reader-visibility` - hidden and aria-hidden content
/// - `name-required` - accessible names on interactive elements
#[must_use]
pub fn standard_rules() -> Vec<RuleBox> {
    vec![
        Box::new(SemanticStructure::new()),
        Box::new(AriaUsage::new()),
        Box::new(KeyboardAccessible::new()),
        Box::new(ColorContrast::new()),
        Box::new(TextAlternatives::new()),
        Box::new(ScreenReaderVisibility::new()),
        Box::new(NameRequired::new()),
    ]
}

/// Returns the minimal set of rules for gradual adoption.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![
        Box::new(NameRequired::new()),
        Box::new(TextAlternatives::new()),
    ]
}
