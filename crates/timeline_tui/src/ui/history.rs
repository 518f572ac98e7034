//! Jump list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::pane_style;
use crate::app::App;

/// Renders one entry per recorded step. The current step is marked with `>`,
/// the selection is highlighted while the pane has focus.
pub fn render_history(f: &mut Frame, area: Rect, app: &App, focused: bool) {
    let items: Vec<ListItem> = app
        .view()
        .moves
        .iter()
        .map(|entry| {
            let marker = if entry.current { "> " } else { "  " };
            let mut spans = vec![
                Span::raw(marker),
                Span::styled(
                    entry.label.clone(),
                    if entry.current {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
            ];
            if app.show_move_details()
                && let Some(action) = entry.action
            {
                spans.push(Span::styled(
                    format!("  ({})", action),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("History")
                .border_style(pane_style(focused)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White));

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    f.render_stateful_widget(list, area, &mut state);
}
