//! Sidebar feed list rendering.
//!
//! Projects `FeedListState::visible_rows()` into styled lines: an optional
//! header (view name, aggregate unread, expansion affordance), category
//! header rows with caret and unread badge, and indented feed rows with
//! error and privacy indicators.

use crate::app::App;
use crate::sidebar::{view_name, FeedListState, Row};
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARET_OPEN: &str = "v";
const CARET_CLOSED: &str = ">";
const ERROR_INDICATOR: &str = "!";
const PRIVATE_INDICATOR: &str = "*";

/// Format an unread count as a badge suffix. Empty at zero: the badge is
/// rendered only when there is something unread.
pub fn unread_badge(unread: u64) -> String {
    if unread > 0 {
        format!(" ({})", unread)
    } else {
        String::new()
    }
}

/// Header line text: view name plus the aggregate unread badge.
pub fn header_text(view: usize, total_unread: u64, expansion: bool) -> String {
    let affordance = if expansion { "[-]" } else { "[+]" };
    format!("{}{} {}", view_name(view), unread_badge(total_unread), affordance)
}

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let state = &app.feed_list;
    let border = if app.modal_open() {
        app.style("panel_border")
    } else {
        app.style("panel_border_focused")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title("Feeds");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if state.shows_title() {
        if let Some(view) = state.view() {
            lines.push(Line::from(Span::styled(
                header_text(view, state.data().unread, state.expansion()),
                app.style("sidebar_header"),
            )));
            lines.push(Line::raw(""));
        }
    }

    let rows = state.visible_rows();
    let header_height = lines.len();
    let body_height = (inner.height as usize).saturating_sub(header_height);

    // Scroll so that the cursor row stays inside the viewport.
    let offset = scroll_offset(state.cursor(), rows.len(), body_height);

    let width = inner.width as usize;
    for (i, row) in rows.iter().enumerate().skip(offset).take(body_height) {
        let under_cursor = i == state.cursor();
        lines.push(match *row {
            Row::Category { cat } => category_line(app, state, cat, under_cursor, width),
            Row::Feed { cat, feed } => feed_line(app, state, cat, feed, under_cursor, width),
        });
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// First visible row index for a viewport of `height` rows.
fn scroll_offset(cursor: usize, total: usize, height: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let max_offset = total - height;
    cursor.saturating_sub(height.saturating_sub(1)).min(max_offset)
}

fn category_line<'a>(
    app: &App,
    state: &FeedListState,
    cat_idx: usize,
    under_cursor: bool,
    width: usize,
) -> Line<'a> {
    let Some(cat) = state.category(cat_idx) else {
        return Line::raw("");
    };
    let caret = if state.section_state(&cat.name).is_open() {
        CARET_OPEN
    } else {
        CARET_CLOSED
    };
    let active = FeedListState::is_active_folder(app.active.as_ref(), cat);
    let base = row_style(app, under_cursor, active, cat.unread > 0);

    let badge = unread_badge(cat.unread);
    let name_budget = width.saturating_sub(2 + badge.len());
    let name = truncate_to_width(&cat.name, name_budget).into_owned();

    let mut spans = vec![
        Span::styled(format!("{} ", caret), app.style("sidebar_caret")),
        Span::styled(name, base),
    ];
    if !badge.is_empty() {
        spans.push(Span::styled(badge, app.style("sidebar_badge")));
    }
    Line::from(spans).style(base)
}

fn feed_line<'a>(
    app: &App,
    state: &FeedListState,
    cat_idx: usize,
    feed_idx: usize,
    under_cursor: bool,
    width: usize,
) -> Line<'a> {
    let Some(feed) = state.feed(cat_idx, feed_idx) else {
        return Line::raw("");
    };
    let indent = if state.category(cat_idx).map(|c| c.name.is_empty()) == Some(true) {
        ""
    } else {
        "  "
    };
    let active = FeedListState::is_active_feed(app.active.as_ref(), feed);
    let base = row_style(app, under_cursor, active, feed.unread > 0);

    let badge = unread_badge(feed.unread);
    let has_error = feed.feeds.error_at.is_some();
    let indicators = 2 * (has_error as usize + feed.is_private as usize);
    let title_budget = width.saturating_sub(indent.len() + badge.len() + indicators);
    let title = truncate_to_width(&feed.feeds.title, title_budget).into_owned();

    let mut spans = vec![Span::raw(indent), Span::styled(title, base)];
    if has_error {
        spans.push(Span::styled(
            format!(" {}", ERROR_INDICATOR),
            app.style("sidebar_error"),
        ));
    }
    if feed.is_private {
        spans.push(Span::styled(
            format!(" {}", PRIVATE_INDICATOR),
            app.style("sidebar_indicator"),
        ));
    }
    if !badge.is_empty() {
        spans.push(Span::styled(badge, app.style("sidebar_badge")));
    }
    Line::from(spans).style(base)
}

fn row_style(
    app: &App,
    under_cursor: bool,
    active: bool,
    unread: bool,
) -> ratatui::style::Style {
    if under_cursor || active {
        app.style("sidebar_selected")
    } else if unread {
        app.style("sidebar_unread")
    } else {
        app.style("sidebar_normal")
    }
}
