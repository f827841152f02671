//! Per-category display styles.
//!
//! Styling is process-wide configuration: hosts build one [`StyleMap`] at
//! startup, register a persistent visual style per category against their
//! display surface, and never touch it again. The classifier itself never
//! reads styles; it reports only categories.

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Font weight for a styled category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Normal weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// The visual style a host should apply to one category.
///
/// Colors are CSS color strings (`#rrggbbaa` hex or `rgba(...)`); the host's
/// rendering layer interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    /// Foreground color.
    pub color: String,
    /// Font weight.
    #[serde(default)]
    pub font_weight: FontWeight,
    /// Optional background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl CategoryStyle {
    /// A normal-weight foreground color with no background.
    pub fn plain(color: &str) -> Self {
        Self {
            color: color.to_string(),
            font_weight: FontWeight::Normal,
            background: None,
        }
    }

    /// A bold foreground color, optionally over a background.
    pub fn bold(color: &str, background: Option<&str>) -> Self {
        Self {
            color: color.to_string(),
            font_weight: FontWeight::Bold,
            background: background.map(str::to_string),
        }
    }
}

/// Immutable mapping from [`Category`] to its display style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMap {
    styles: [CategoryStyle; Category::ALL.len()],
}

impl StyleMap {
    /// Build a style map from explicit per-category styles, in
    /// [`Category::ALL`] order.
    pub fn new(styles: [CategoryStyle; Category::ALL.len()]) -> Self {
        Self { styles }
    }

    /// The style registered for `category`.
    pub fn get(&self, category: Category) -> &CategoryStyle {
        &self.styles[category.index()]
    }

    /// Iterate `(category, style)` pairs in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryStyle)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.get(category)))
    }
}

impl Default for StyleMap {
    /// The default theme: bold red-on-tint errors, bold amber warnings, bold
    /// green successes, and muted token colors.
    fn default() -> Self {
        Self::new([
            CategoryStyle::bold("#e97272ff", Some("rgba(255, 68, 68, 0.1)")),
            CategoryStyle::bold("#f0a86eff", Some("rgba(255, 170, 0, 0.1)")),
            CategoryStyle::bold("#93cc7cff", None),
            CategoryStyle::plain("#b697acff"),
            CategoryStyle::plain("#65b6b2ff"),
            CategoryStyle::plain("#d8d86cff"),
            CategoryStyle::plain("#a79cc7ff"),
            CategoryStyle::plain("#888888"),
        ])
    }
}
