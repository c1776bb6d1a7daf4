//! Keyboard handling.
//!
//! Input is routed by modality: an open confirmation dialog captures all
//! keys, then the rename dialog, then the context menu, and only then the
//! normal sidebar bindings. Modal state is taken out of the `App` for the
//! duration of the dispatch and restored unless the handler consumed it.

use crate::app::{App, AppEvent, ConfirmAction, RenameDialogState};
use crate::sidebar::{ContextMenu, MenuAction, MenuTarget, Row};
use crate::util::validate_url_for_open;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

/// What the event loop should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent, event_tx: &mpsc::Sender<AppEvent>) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }
    app.needs_redraw = true;

    if let Some(confirm) = app.pending_confirm.take() {
        handle_confirm_key(app, key, confirm, event_tx);
        return Action::Continue;
    }
    if let Some(dialog) = app.rename_dialog.take() {
        handle_rename_key(app, key, dialog, event_tx);
        return Action::Continue;
    }
    if let Some(menu) = app.context_menu.take() {
        handle_menu_key(app, key, menu, event_tx);
        return Action::Continue;
    }
    handle_normal_key(app, key, event_tx)
}

// ============================================================================
// Normal mode
// ============================================================================

fn handle_normal_key(
    app: &mut App,
    key: KeyEvent,
    event_tx: &mpsc::Sender<AppEvent>,
) -> Action {
    match key.code {
        KeyCode::Char('q') => return Action::Quit,

        KeyCode::Char('j') | KeyCode::Down => app.feed_list.move_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.feed_list.move_cursor_up(),

        KeyCode::Enter => {
            if let Some(sel) = app.feed_list.activate_cursor() {
                tracing::debug!(name = %sel.name, "Selection activated");
            }
        }

        KeyCode::Char(' ') => {
            if let Some(Row::Category { cat }) = app.feed_list.cursor_row() {
                app.feed_list.toggle_section(cat);
            }
        }

        KeyCode::Char('e') => {
            app.feed_list.toggle_expansion();
            app.set_status(if app.feed_list.expansion() {
                "Expanded all categories"
            } else {
                "Collapsed all categories"
            });
        }

        KeyCode::Char('m') => open_menu_for_cursor(app),

        KeyCode::Char('1') => switch_view(app, 0, event_tx),
        KeyCode::Char('2') => switch_view(app, 1, event_tx),

        KeyCode::Char('r') => {
            if let Some(key) = app.current_query_key() {
                app.cache.invalidate(&key);
            }
            app.spawn_subscriptions_load(event_tx);
            app.set_status("Refreshing...");
        }

        KeyCode::Char('t') => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }

        _ => {}
    }
    Action::Continue
}

fn switch_view(app: &mut App, view: usize, event_tx: &mpsc::Sender<AppEvent>) {
    if app.feed_list.view() == Some(view) {
        return;
    }
    app.feed_list.set_view(Some(view));
    app.spawn_subscriptions_load(event_tx);
}

fn open_menu_for_cursor(app: &mut App) {
    let menu = match app.feed_list.cursor_row() {
        Some(Row::Category { cat }) => app.feed_list.category(cat).map(ContextMenu::for_category),
        Some(Row::Feed { cat, feed }) => app.feed_list.feed(cat, feed).map(ContextMenu::for_feed),
        None => None,
    };
    app.context_menu = menu;
}

// ============================================================================
// Confirmation dialog
// ============================================================================

fn handle_confirm_key(
    app: &mut App,
    key: KeyEvent,
    confirm: ConfirmAction,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            let ConfirmAction::DeleteCategory { name, feed_id_list } = confirm;
            spawn_delete(app, name, feed_id_list, event_tx);
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            // Cancel issues no request
        }
        _ => {
            app.pending_confirm = Some(confirm);
        }
    }
}

/// Fire-and-forget deletion: success invalidates the cache, failure is
/// logged by the event handler without surfacing an error dialog.
fn spawn_delete(
    app: &mut App,
    name: String,
    feed_id_list: Vec<String>,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    let Some(view) = app.feed_list.view() else {
        return;
    };
    let api = app.api.clone();
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = api
            .delete_category(feed_id_list)
            .await
            .map_err(|e| e.to_string());
        let _ = tx
            .send(AppEvent::CategoryDeleted { view, name, result })
            .await;
    });
}

// ============================================================================
// Rename dialog
// ============================================================================

fn handle_rename_key(
    app: &mut App,
    key: KeyEvent,
    mut dialog: RenameDialogState,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    if dialog.submitting {
        // Only Esc is honored while the request is in flight
        if key.code != KeyCode::Esc {
            app.rename_dialog = Some(dialog);
        }
        return;
    }
    match key.code {
        KeyCode::Esc => {}
        KeyCode::Enter => {
            let new_name = dialog.input.trim().to_string();
            if new_name.is_empty() || new_name == dialog.category {
                app.rename_dialog = Some(dialog);
                return;
            }
            spawn_rename(app, &dialog, new_name, event_tx);
            dialog.submitting = true;
            app.rename_dialog = Some(dialog);
        }
        KeyCode::Backspace => {
            dialog.input.pop();
            app.rename_dialog = Some(dialog);
        }
        KeyCode::Char(c) => {
            dialog.input.push(c);
            app.rename_dialog = Some(dialog);
        }
        _ => {
            app.rename_dialog = Some(dialog);
        }
    }
}

fn spawn_rename(
    app: &App,
    dialog: &RenameDialogState,
    new_name: String,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    let Some(view) = app.feed_list.view() else {
        return;
    };
    let api = app.api.clone();
    let tx = event_tx.clone();
    let old_name = dialog.category.clone();
    let feed_id_list = dialog.feed_id_list.clone();
    tokio::spawn(async move {
        let result = api
            .rename_category(feed_id_list, &new_name)
            .await
            .map_err(|e| e.to_string());
        let _ = tx
            .send(AppEvent::CategoryRenamed {
                view,
                old_name,
                new_name,
                result,
            })
            .await;
    });
}

// ============================================================================
// Context menu
// ============================================================================

fn handle_menu_key(
    app: &mut App,
    key: KeyEvent,
    mut menu: ContextMenu,
    _event_tx: &mpsc::Sender<AppEvent>,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => {}
        KeyCode::Char('j') | KeyCode::Down => {
            menu.select_next();
            app.context_menu = Some(menu);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            menu.select_prev();
            app.context_menu = Some(menu);
        }
        KeyCode::Enter => {
            if let Some(action) = menu.selected_action() {
                dispatch_menu_action(app, action, &menu.target);
            } else {
                app.context_menu = Some(menu);
            }
        }
        _ => {
            app.context_menu = Some(menu);
        }
    }
}

fn dispatch_menu_action(app: &mut App, action: MenuAction, target: &MenuTarget) {
    match (action, target) {
        (MenuAction::RenameCategory, MenuTarget::Category { name, feed_id_list }) => {
            app.rename_dialog = Some(RenameDialogState::new(name.clone(), feed_id_list.clone()));
        }
        (MenuAction::DeleteCategory, MenuTarget::Category { name, feed_id_list }) => {
            app.pending_confirm = Some(ConfirmAction::DeleteCategory {
                name: name.clone(),
                feed_id_list: feed_id_list.clone(),
            });
        }
        (MenuAction::EditFeed, MenuTarget::Feed { feed_id, .. }) => {
            tracing::debug!(feed_id = %feed_id, "Edit requested (not implemented)");
        }
        (MenuAction::UnfollowFeed, MenuTarget::Feed { feed_id, .. }) => {
            tracing::debug!(feed_id = %feed_id, "Unfollow requested (not implemented)");
        }
        (MenuAction::OpenFeedInBrowser, MenuTarget::Feed { feed_id, .. }) => {
            tracing::debug!(feed_id = %feed_id, "Open feed requested (not implemented)");
        }
        (MenuAction::OpenSiteInBrowser, MenuTarget::Feed { site_url, .. }) => {
            open_site(app, site_url);
        }
        _ => {}
    }
}

fn open_site(app: &mut App, site_url: &str) {
    match validate_url_for_open(site_url) {
        Ok(url) => {
            if let Err(e) = open::that(url.as_str()) {
                tracing::warn!(error = %e, "Browser launch failed");
                app.set_status("Could not open browser");
            } else {
                app.set_status("Opened in browser");
            }
        }
        Err(e) => {
            tracing::warn!(url = site_url, error = %e, "Refusing to open URL");
            app.set_status("URL rejected");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
