//! Handling of events delivered from spawned tasks.
//!
//! Each mutation completion follows the same shape: check staleness, update
//! the cache, push the result into the sidebar state or surface it to the
//! user. Deletion failures are log-only.

use crate::api::QueryKey;
use crate::app::{App, AppEvent};
use crate::ui::toast::{Toast, ToastKind};
use tokio::sync::mpsc;

pub fn handle_app_event(app: &mut App, event: AppEvent, event_tx: &mpsc::Sender<AppEvent>) {
    app.needs_redraw = true;
    match event {
        AppEvent::SelectionChanged(selection) => {
            tracing::debug!(name = %selection.name, view = selection.view, "Selection changed");
            app.active = Some(selection);
        }

        AppEvent::SubscriptionsLoaded {
            view,
            generation,
            result,
        } => {
            if generation != app.load_generation {
                tracing::debug!(view, generation, "Discarding stale load");
                return;
            }
            if app.feed_list.view() != Some(view) {
                return;
            }
            match result {
                Ok(data) => {
                    app.cache.insert(QueryKey::subscriptions(view), data.clone());
                    app.feed_list.set_data(data);
                }
                Err(e) => {
                    tracing::warn!(view, error = %e, "Subscriptions load failed");
                    app.set_status("Could not load subscriptions");
                }
            }
        }

        AppEvent::CategoryDeleted { view, name, result } => match result {
            Ok(()) => {
                app.cache.invalidate(&QueryKey::subscriptions(view));
                app.spawn_subscriptions_load(event_tx);
                app.toasts.push(Toast::new(
                    ToastKind::Success,
                    format!("Deleted category {}", name),
                ));
            }
            Err(e) => {
                tracing::warn!(category = %name, error = %e, "Category deletion failed");
            }
        },

        AppEvent::CategoryRenamed {
            view,
            old_name,
            new_name,
            result,
        } => match result {
            Ok(()) => {
                app.rename_dialog = None;
                app.cache.invalidate(&QueryKey::subscriptions(view));
                app.spawn_subscriptions_load(event_tx);
                app.toasts.push(Toast::new(
                    ToastKind::Success,
                    format!("Renamed {} to {}", old_name, new_name),
                ));
            }
            Err(e) => {
                tracing::warn!(category = %old_name, error = %e, "Category rename failed");
                if let Some(dialog) = app.rename_dialog.as_mut() {
                    dialog.submitting = false;
                }
                app.toasts.push(
                    Toast::new(ToastKind::Error, "Rename failed").with_description(e),
                );
            }
        },
    }
}
