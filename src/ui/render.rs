//! Frame composition.
//!
//! Lays out the sidebar and status bar, then draws whichever overlay is
//! open (context menu, rename dialog, delete confirmation) on top, and the
//! toast stack last.

use crate::app::{App, ConfirmAction};
use crate::sidebar::MenuEntry;
use crate::ui::{feed_list, status};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const MIN_WIDTH: u16 = 24;
const MIN_HEIGHT: u16 = 8;

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = Paragraph::new("Terminal too small").wrap(Wrap { trim: true });
        f.render_widget(msg, area);
        return;
    }

    let [body, status_bar] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    feed_list::render(f, app, body);
    status::render(f, app, status_bar);

    if let Some(menu) = &app.context_menu {
        draw_context_menu(f, app, menu);
    }
    if let Some(dialog) = &app.rename_dialog {
        draw_rename_dialog(f, app, dialog);
    }
    if let Some(confirm) = &app.pending_confirm {
        draw_confirm(f, app, confirm);
    }

    app.toasts.render(f);
}

/// Centered rect of at most `width` x `height` within `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn overlay_block<'a>(app: &App, title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("panel_border_focused"))
        .title(Span::styled(title, app.style("overlay_title")))
}

fn draw_context_menu(f: &mut Frame, app: &App, menu: &crate::sidebar::ContextMenu) {
    let width = 30;
    let height = menu.entries.len() as u16 + 2;
    let rect = centered(f.area(), width, height);

    let mut lines = Vec::with_capacity(menu.entries.len());
    for (i, entry) in menu.entries.iter().enumerate() {
        lines.push(match entry {
            MenuEntry::Action { label, .. } => {
                let marker = if i == menu.selected { "> " } else { "  " };
                let style = if i == menu.selected {
                    app.style("sidebar_selected")
                } else {
                    app.style("overlay_body")
                };
                Line::from(Span::styled(format!("{}{}", marker, label), style))
            }
            MenuEntry::Separator => Line::from(Span::styled(
                "-".repeat(width as usize - 2),
                app.style("panel_border"),
            )),
        });
    }

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(overlay_block(app, menu.title().to_string())),
        rect,
    );
}

fn draw_rename_dialog(f: &mut Frame, app: &App, dialog: &crate::app::RenameDialogState) {
    let rect = centered(f.area(), 44, 6);
    let input_line = format!("> {}_", dialog.input);
    let footer = if dialog.submitting {
        "Renaming..."
    } else {
        "(Enter) Rename  (Esc) Cancel"
    };

    let lines = vec![
        Line::from(Span::styled(input_line, app.style("overlay_body"))),
        Line::raw(""),
        Line::from(Span::styled(footer, app.style("sidebar_badge"))),
    ];

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines).block(overlay_block(
            app,
            format!("Rename Category {}", dialog.category),
        )),
        rect,
    );
}

fn draw_confirm(f: &mut Frame, app: &App, confirm: &ConfirmAction) {
    let ConfirmAction::DeleteCategory { name, .. } = confirm;
    let rect = centered(f.area(), 48, 7);

    let lines = vec![
        Line::from(Span::styled(
            "The feeds in this category will be kept.",
            app.style("overlay_body"),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "(y) Delete  (n/Esc) Cancel",
            app.style("sidebar_badge"),
        )),
    ];

    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(overlay_block(app, format!("Delete Category {}?", name))),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 44, 6);
        assert_eq!(rect, Rect::new(18, 9, 44, 6));
    }

    #[test]
    fn centered_rect_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered(area, 44, 20);
        assert_eq!(rect, Rect::new(0, 0, 30, 10));
    }
}
