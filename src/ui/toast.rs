//! Toast notifications.
//!
//! `ToastHost` is the rendering surface: a queue of short-lived messages
//! drawn as an overlay in the bottom-right corner, expired on tick.
//! `Toaster` is the theme-aware configuration wrapper around it: it maps the
//! ambient dark/light signal to a fixed set of region styles (toast
//! container, description, action button, cancel button) and forwards all
//! other options to the host untouched.

use crate::theme::ThemeVariant;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

// ============================================================================
// Toast values
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// One queued toast.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    /// Optional labels rendered as the action/cancel button regions.
    pub action_label: Option<&'static str>,
    pub cancel_label: Option<&'static str>,
    created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: None,
            action_label: None,
            cancel_label: None,
            created_at: Instant::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Standard toast configuration, forwarded by the adapter as-is.
#[derive(Debug, Clone, Copy)]
pub struct ToastOptions {
    /// How long a toast stays visible.
    pub duration: Duration,
    /// Maximum number of toasts stacked on screen at once.
    pub max_visible: usize,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(4),
            max_visible: 3,
        }
    }
}

/// Styles for the semantic toast regions. Fixed per theme variant.
#[derive(Debug, Clone, Copy)]
pub struct ToastRegionStyles {
    pub toast: Style,
    pub description: Style,
    pub action_button: Style,
    pub cancel_button: Style,
    pub error: Style,
}

impl ToastRegionStyles {
    fn for_variant(variant: ThemeVariant) -> Self {
        let p = variant.palette();
        Self {
            toast: p.toast,
            description: p.toast_description,
            action_button: p.toast_action_button,
            cancel_button: p.toast_cancel_button,
            error: p.toast_error,
        }
    }
}

// ============================================================================
// Toaster adapter
// ============================================================================

/// Theme-aware constructor for the toast host.
///
/// Stateless by itself: it derives the region styles from the dark/light
/// signal and hands them, together with the caller's options, to the host.
pub struct Toaster;

impl Toaster {
    /// Build a `ToastHost` themed for `variant`, forwarding `options`.
    pub fn themed(variant: ThemeVariant, options: ToastOptions) -> ToastHost {
        ToastHost {
            styles: ToastRegionStyles::for_variant(variant),
            options,
            queue: VecDeque::new(),
        }
    }
}

// ============================================================================
// Toast host
// ============================================================================

/// The wrapped toast surface: queue, expiry, overlay rendering.
pub struct ToastHost {
    styles: ToastRegionStyles,
    options: ToastOptions,
    queue: VecDeque<Toast>,
}

impl ToastHost {
    /// Enqueue a toast.
    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(title = %toast.title, "Toast");
        self.queue.push_back(toast);
        while self.queue.len() > self.options.max_visible {
            self.queue.pop_front();
        }
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn expire(&mut self) -> bool {
        let duration = self.options.duration;
        let before = self.queue.len();
        self.queue.retain(|t| t.created_at.elapsed() < duration);
        self.queue.len() != before
    }

    /// Re-derive region styles after the dark/light signal changed.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.styles = ToastRegionStyles::for_variant(variant);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    #[cfg(test)]
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    /// Render the toast stack anchored to the bottom-right corner.
    pub fn render(&self, f: &mut Frame) {
        if self.queue.is_empty() {
            return;
        }
        let area = f.area();
        let width = 36u16.min(area.width.saturating_sub(2));
        if width < 10 || area.height < 5 {
            return;
        }

        // Stack upward from just above the status bar.
        let mut bottom = area.bottom().saturating_sub(1);
        for toast in self.queue.iter().rev() {
            let body_lines = 1 + toast.description.is_some() as u16
                + (toast.action_label.is_some() || toast.cancel_label.is_some()) as u16;
            let height = body_lines + 2; // borders
            if bottom < height + 1 {
                break;
            }
            let rect = Rect::new(area.right().saturating_sub(width + 1), bottom - height, width, height);
            self.render_one(f, toast, rect);
            bottom = rect.y;
        }
    }

    fn render_one(&self, f: &mut Frame, toast: &Toast, rect: Rect) {
        let container = match toast.kind {
            ToastKind::Error => self.styles.error,
            _ => self.styles.toast,
        };

        let mut lines = vec![Line::from(Span::styled(toast.title.clone(), container))];
        if let Some(desc) = &toast.description {
            lines.push(Line::from(Span::styled(
                desc.clone(),
                self.styles.description,
            )));
        }
        if toast.action_label.is_some() || toast.cancel_label.is_some() {
            let mut spans = Vec::new();
            if let Some(action) = toast.action_label {
                spans.push(Span::styled(format!(" {} ", action), self.styles.action_button));
                spans.push(Span::raw(" "));
            }
            if let Some(cancel) = toast.cancel_label {
                spans.push(Span::styled(format!(" {} ", cancel), self.styles.cancel_button));
            }
            lines.push(Line::from(spans));
        }

        f.render_widget(Clear, rect);
        let paragraph = Paragraph::new(lines)
            .style(container)
            .block(Block::default().borders(Borders::ALL).border_style(container));
        f.render_widget(paragraph, rect);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_maps_variant_to_region_styles() {
        let dark = Toaster::themed(ThemeVariant::Dark, ToastOptions::default());
        let light = Toaster::themed(ThemeVariant::Light, ToastOptions::default());
        assert_ne!(dark.styles.toast, light.styles.toast);
        assert_ne!(dark.styles.action_button, light.styles.action_button);
    }

    #[test]
    fn options_are_forwarded_unchanged() {
        let options = ToastOptions {
            duration: Duration::from_millis(1500),
            max_visible: 7,
        };
        let host = Toaster::themed(ThemeVariant::Dark, options);
        assert_eq!(host.options.duration, Duration::from_millis(1500));
        assert_eq!(host.options.max_visible, 7);
    }

    #[test]
    fn queue_caps_at_max_visible() {
        let mut host = Toaster::themed(
            ThemeVariant::Dark,
            ToastOptions {
                duration: Duration::from_secs(60),
                max_visible: 2,
            },
        );
        host.push(Toast::new(ToastKind::Info, "one"));
        host.push(Toast::new(ToastKind::Info, "two"));
        host.push(Toast::new(ToastKind::Info, "three"));
        let titles: Vec<_> = host.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }

    #[tokio::test(start_paused = true)]
    async fn toasts_expire_after_duration() {
        let mut host = Toaster::themed(
            ThemeVariant::Dark,
            ToastOptions {
                duration: Duration::from_secs(4),
                max_visible: 3,
            },
        );
        host.push(Toast::new(ToastKind::Success, "done"));
        assert!(!host.expire());
        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(host.expire());
        assert!(host.is_empty());
    }

    #[test]
    fn retheming_swaps_styles_without_touching_queue() {
        let mut host = Toaster::themed(ThemeVariant::Dark, ToastOptions::default());
        host.push(Toast::new(ToastKind::Info, "keep me").with_description("still here"));
        let dark_toast = host.styles.toast;
        host.set_theme(ThemeVariant::Light);
        assert_ne!(host.styles.toast, dark_toast);
        assert_eq!(host.visible().count(), 1);
    }
}
