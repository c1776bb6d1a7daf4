use crate::api::{ApiClient, QueryCache, QueryKey, SubscriptionResponse};
use crate::sidebar::{ActiveSelection, ContextMenu, FeedListState};
use crate::theme::{StyleMap, ThemeVariant};
use crate::ui::toast::{ToastHost, ToastOptions, Toaster};
use ratatui::style::Style;
use std::borrow::Cow;
use tokio::sync::mpsc;
use tokio::time::Instant;

// ============================================================================
// Confirmation Dialog
// ============================================================================

/// Pending confirmation for destructive operations.
pub enum ConfirmAction {
    /// Delete a category grouping. The feeds it contains are retained.
    DeleteCategory {
        name: String,
        feed_id_list: Vec<String>,
    },
}

// ============================================================================
// Rename Dialog
// ============================================================================

/// State of the category rename dialog.
///
/// The dialog stays open while a submission is in flight; the success event
/// closes it, a failure keeps it open for another attempt.
pub struct RenameDialogState {
    /// The category's current name.
    pub category: String,
    pub feed_id_list: Vec<String>,
    /// Text-input buffer, pre-filled with the current name.
    pub input: String,
    /// True while a rename request is in flight.
    pub submitting: bool,
}

impl RenameDialogState {
    pub fn new(category: String, feed_id_list: Vec<String>) -> Self {
        let input = category.clone();
        Self {
            category,
            feed_id_list,
            input,
            submitting: false,
        }
    }
}

// ============================================================================
// Events from background tasks
// ============================================================================

/// Events delivered to the event loop from spawned tasks and callbacks.
pub enum AppEvent {
    /// The sidebar emitted a selection; the App (ancestor) records it.
    SelectionChanged(ActiveSelection),
    /// A subscriptions fetch completed.
    ///
    /// `generation` is the load counter at spawn time; stale completions
    /// (mismatched generation) are discarded by the handler.
    SubscriptionsLoaded {
        view: usize,
        generation: u64,
        result: Result<SubscriptionResponse, String>,
    },
    /// A category deletion completed.
    CategoryDeleted {
        view: usize,
        name: String,
        result: Result<(), String>,
    },
    /// A category rename completed.
    CategoryRenamed {
        view: usize,
        old_name: String,
        new_name: String,
        result: Result<(), String>,
    },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
///
/// Everything here is owned by the event-loop task and mutated only there;
/// spawned tasks communicate back exclusively through `AppEvent`s.
pub struct App {
    pub api: ApiClient,

    // Theme
    /// Current theme variant (for cycling).
    pub theme_variant: ThemeVariant,
    /// Active style map for all UI rendering.
    pub theme: StyleMap,

    // Sidebar
    pub feed_list: FeedListState,
    /// The active selection, owned here — the sidebar only reports changes.
    pub active: Option<ActiveSelection>,

    // Query layer
    pub cache: QueryCache,
    /// Generation counter for subscription loads; stale completions are
    /// rejected against this.
    pub load_generation: u64,

    // Overlays
    pub pending_confirm: Option<ConfirmAction>,
    pub context_menu: Option<ContextMenu>,
    pub rename_dialog: Option<RenameDialogState>,

    // Toasts
    pub toasts: ToastHost,

    // Chrome
    /// Status message with expiry; Cow avoids allocation for static hints.
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,
}

impl App {
    pub fn new(api: ApiClient, feed_list: FeedListState, theme_variant: ThemeVariant) -> Self {
        Self {
            api,
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            feed_list,
            active: None,
            cache: QueryCache::new(),
            load_generation: 0,
            pending_confirm: None,
            context_menu: None,
            rename_dialog: None,
            toasts: Toaster::themed(theme_variant, ToastOptions::default()),
            status_message: None,
            needs_redraw: true,
        }
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    /// Switch to a different theme variant at runtime.
    ///
    /// Rebuilds the style map and re-derives the toast region styles from
    /// the new dark/light signal.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.toasts.set_theme(variant);
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant (Dark → Light → Dark).
    ///
    /// Returns the name of the new theme for status display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    /// The cache key for the currently displayed view, if any.
    pub fn current_query_key(&self) -> Option<QueryKey> {
        self.feed_list.view().map(QueryKey::subscriptions)
    }

    /// Spawn a subscriptions fetch for the current view.
    ///
    /// Increments the load generation so that completions of older fetches
    /// are discarded when they arrive.
    pub fn spawn_subscriptions_load(&mut self, event_tx: &mpsc::Sender<AppEvent>) {
        let Some(view) = self.feed_list.view() else {
            return;
        };
        self.load_generation = self.load_generation.wrapping_add(1);
        let generation = self.load_generation;
        let api = self.api.clone();
        let tx = event_tx.clone();

        tracing::debug!(view, generation, "Spawning subscriptions load");
        tokio::spawn(async move {
            let result = api.subscriptions(view).await.map_err(|e| e.to_string());
            if tx
                .send(AppEvent::SubscriptionsLoaded {
                    view,
                    generation,
                    result,
                })
                .await
                .is_err()
            {
                tracing::warn!(view, "Channel send failed (receiver dropped)");
            }
        });
    }

    /// Set status message (will auto-expire after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired (older than 3 seconds).
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    /// Whether any modal overlay is open (confirm, rename, context menu).
    pub fn modal_open(&self) -> bool {
        self.pending_confirm.is_some()
            || self.rename_dialog.is_some()
            || self.context_menu.is_some()
    }
}
