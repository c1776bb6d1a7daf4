//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// Whether this variant targets dark terminal backgrounds.
    ///
    /// The toast adapter keys its region styles off this signal.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Sidebar --
    pub sidebar_normal: Style,
    pub sidebar_selected: Style,
    pub sidebar_unread: Style,
    pub sidebar_error: Style,
    pub sidebar_badge: Style,
    pub sidebar_header: Style,
    pub sidebar_caret: Style,
    pub sidebar_indicator: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
    pub overlay_body: Style,
    pub overlay_title: Style,

    // -- Toasts --
    pub toast: Style,
    pub toast_description: Style,
    pub toast_action_button: Style,
    pub toast_cancel_button: Style,
    pub toast_error: Style,
}

impl ColorPalette {
    /// Dark palette — the default.
    fn dark() -> Self {
        Self {
            // Sidebar
            sidebar_normal: Style::default(),
            sidebar_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            sidebar_unread: Style::default().add_modifier(Modifier::BOLD),
            sidebar_error: Style::default().fg(Color::Red),
            sidebar_badge: Style::default().fg(Color::DarkGray),
            sidebar_header: Style::default().add_modifier(Modifier::BOLD),
            sidebar_caret: Style::default().fg(Color::DarkGray),
            sidebar_indicator: Style::default().fg(Color::Yellow),

            // Chrome
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
            overlay_body: Style::default(),
            overlay_title: Style::default().add_modifier(Modifier::BOLD),

            // Toasts
            toast: Style::default().bg(Color::Black).fg(Color::White),
            toast_description: Style::default().bg(Color::Black).fg(Color::Gray),
            toast_action_button: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            toast_cancel_button: Style::default().bg(Color::DarkGray).fg(Color::Gray),
            toast_error: Style::default().bg(Color::Black).fg(Color::Red),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            // Sidebar
            sidebar_normal: Style::default().fg(Color::Black),
            sidebar_selected: Style::default().bg(Color::Blue).fg(Color::White),
            sidebar_unread: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            sidebar_error: Style::default().fg(Color::Red),
            sidebar_badge: Style::default().fg(Color::DarkGray),
            sidebar_header: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            sidebar_caret: Style::default().fg(Color::DarkGray),
            sidebar_indicator: Style::default().fg(Color::Magenta),

            // Chrome
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
            overlay_body: Style::default().fg(Color::Black),
            overlay_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            // Toasts
            toast: Style::default().bg(Color::White).fg(Color::Black),
            toast_description: Style::default().bg(Color::White).fg(Color::DarkGray),
            toast_action_button: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            toast_cancel_button: Style::default().bg(Color::Gray).fg(Color::Black),
            toast_error: Style::default().bg(Color::White).fg(Color::Red),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup for config-driven overrides
// ============================================================================

/// String-keyed style lookup for dynamic resolution at render time.
///
/// Built from a `ColorPalette`, this allows resolving role names (e.g.
/// `"sidebar_selected"`) to their concrete `Style` at runtime.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 18] = [
    "sidebar_normal",
    "sidebar_selected",
    "sidebar_unread",
    "sidebar_error",
    "sidebar_badge",
    "sidebar_header",
    "sidebar_caret",
    "sidebar_indicator",
    "status_bar",
    "panel_border",
    "panel_border_focused",
    "overlay_body",
    "overlay_title",
    "toast",
    "toast_description",
    "toast_action_button",
    "toast_cancel_button",
    "toast_error",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 18] = [
            p.sidebar_normal,
            p.sidebar_selected,
            p.sidebar_unread,
            p.sidebar_error,
            p.sidebar_badge,
            p.sidebar_header,
            p.sidebar_caret,
            p.sidebar_indicator,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
            p.overlay_body,
            p.overlay_title,
            p.toast,
            p.toast_description,
            p.toast_action_button,
            p.toast_cancel_button,
            p.toast_error,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_sidebar_selected() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.sidebar_selected,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }

    #[test]
    fn dark_palette_focus_border() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.panel_border_focused,
            Style::default().fg(Color::Cyan)
        );
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        // Light selection uses Blue bg instead of DarkGray
        assert_ne!(dark.sidebar_selected, light.sidebar_selected);
        assert_ne!(dark.toast, light.toast);
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(
            ThemeVariant::from_str_name("dark"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn variant_cycle_round_trips() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
    }

    #[test]
    fn style_map_resolves_known_roles() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);

        assert_eq!(sm.resolve("sidebar_selected"), palette.sidebar_selected);
        assert_eq!(sm.resolve("toast_action_button"), palette.toast_action_button);
        assert_eq!(sm.resolve("status_bar"), palette.status_bar);
    }

    #[test]
    fn style_map_returns_default_for_unknown() {
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.resolve("nonexistent_role"), Style::default());
    }

    #[test]
    fn role_names_count_matches_palette_fields() {
        // If a role is added to ColorPalette but not to ROLE_NAMES,
        // the from_palette array length will catch it here.
        let palette = ThemeVariant::Dark.palette();
        let sm = StyleMap::from_palette(&palette);
        assert_eq!(sm.map.len(), ROLE_NAMES.len());
    }
}
