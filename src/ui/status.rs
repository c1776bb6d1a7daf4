//! Status bar rendering.
//!
//! Priority order: transient status message, then detail text for the row
//! under the cursor (fetch errors, privacy note), then static key hints.

use crate::app::App;
use crate::sidebar::Row;
use crate::util::humanize_ago;
use chrono::Utc;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};
use std::borrow::Cow;

const KEY_HINTS: &str =
    " j/k: move | Enter: select | Space: fold | e: expand all | m: menu | 1/2: view | r: refresh | t: theme | q: quit";

/// The line shown in the status bar.
pub fn status_text(app: &App) -> Cow<'static, str> {
    if let Some((msg, _)) = &app.status_message {
        return msg.clone();
    }
    if let Some(detail) = cursor_detail(app) {
        return Cow::Owned(detail);
    }
    Cow::Borrowed(KEY_HINTS)
}

/// Detail text for the row under the cursor, mirroring what a pointer
/// hover would surface: fetch failure age and the privacy note.
fn cursor_detail(app: &App) -> Option<String> {
    let Row::Feed { cat, feed } = app.feed_list.cursor_row()? else {
        return None;
    };
    let feed = app.feed_list.feed(cat, feed)?;

    let mut parts = Vec::new();
    if let Some(error_at) = feed.feeds.error_at {
        parts.push(format!(
            "Error since {}, the feed has not been updated",
            humanize_ago(error_at, Utc::now())
        ));
    }
    if feed.is_private {
        parts.push("Not publicly visible on your profile page".to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!(" {}", parts.join(" | ")))
    }
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::raw(status_text(app));
    f.render_widget(Paragraph::new(line).style(app.style("status_bar")), area);
}
