//! # a11y-lint-rules
//!
//! Built-in accessibility rules for a11y-lint.
//!
//! Each rule is a pure function over a semantic tree: it walks the tree,
//! reads node properties defensively, and emits findings with stable codes
//! and tree paths. Rules never mutate the tree and never depend on each
//! other's output.
//!
//! ## Available Rules
//!
//! | Name | Checks |
//! |------|--------|
//! | `semantic-structure` | Heading hierarchy, buttons vs links, lists, tables, form labels |
//! | `aria-usage` | Required ARIA properties, role conflicts, id references, live regions |
//! | `keyboard-accessible` | Focusability, activation keys, tab order, keyboard traps |
//! | `color-contrast` | WCAG relative-luminance contrast minimums |
//! | `text-alternatives` | Alt text, SVG/media/icon labels, fallback content |
//! | `screen-reader-visibility` | Hidden content and aria-hidden focus targets |
//! | `name-required` | Accessible names on interactive elements |
//!
//! ## Usage
//!
//! ```ignore
//! use a11y_lint_core::Engine;
//! use a11y_lint_rules::standard_rules;
//!
//! let engine = Engine::builder().rules(standard_rules()).build();
//! let report = engine.validate(Some(&tree));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aria_usage;
mod color_contrast;
mod focus;
mod keyboard_accessible;
mod name_required;
mod presets;
mod screen_reader;
mod semantic_structure;
mod text_alternatives;

pub use aria_usage::AriaUsage;
pub use color_contrast::{contrast_ratio, parse_color, relative_luminance, ColorContrast, Rgb};
pub use focus::{is_focusable, is_interactive, INTERACTIVE_ROLES};
pub use keyboard_accessible::{
    simulate_tab_navigation, validate_focus_order, validate_keyboard_traps, FocusTarget,
    KeyboardAccessible,
};
pub use name_required::NameRequired;
pub use presets::{minimal_rules, standard_rules, Preset};
pub use screen_reader::ScreenReaderVisibility;
pub use semantic_structure::SemanticStructure;
pub use text_alternatives::TextAlternatives;

/// Finding codes emitted by the built-in rules.
pub mod codes {
    pub use crate::aria_usage::{
        CONFLICTING_ROLE, INVALID_ATTRIBUTE_VALUE, LIVE_INVALID, REDUNDANT_ROLE,
        RELATIONSHIP_MISSING_TARGET, REQUIRED_ATTRIBUTE_MISSING,
    };
    pub use crate::color_contrast::INSUFFICIENT_CONTRAST;
    pub use crate::keyboard_accessible::{
        MISSING_ARROW_KEY_SUPPORT, MISSING_ESCAPE_HANDLER, MISSING_FOCUS_INDICATOR,
        MISSING_KEYBOARD_HANDLER, MISSING_TABINDEX, NEGATIVE_TABINDEX, NOT_FOCUSABLE,
        TABINDEX_OUT_OF_ORDER, TRAP,
    };
    pub use crate::name_required::MISSING_NAME;
    pub use crate::screen_reader::{
        ARIA_HIDDEN_FOCUSABLE, CONTENT_HIDDEN, INTERACTIVE_HIDDEN, ONLY_NO_TEXT,
    };
    pub use crate::semantic_structure::{
        BUTTON_WITH_HREF, FORM_CONTROL_UNLABELED, HEADING_LEVEL_SKIP, INVALID_LIST_CHILD,
        LINK_WITHOUT_HREF, LINK_WITH_ONCLICK, MISSING_H1, TABLE_MISSING_HEADERS,
        TABLE_MISSING_THEAD_TBODY, TH_MISSING_SCOPE,
    };
    pub use crate::text_alternatives::{
        EMPTY_ALT_MEANINGFUL, ICON_CONTROL_MISSING_LABEL, MISSING_ALT, MISSING_FALLBACK_CONTENT,
        MISSING_MEDIA_ALTERNATIVE, MISSING_SVG_LABEL,
    };
}

/// Re-export core types for convenience.
pub use a11y_lint_core::{Finding, Rule, Severity};
