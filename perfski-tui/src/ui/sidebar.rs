//! Side panel - section list and action keys.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use perfski_core::labels::DOWNLOAD_LABEL;

use crate::app::{AppState, Panel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Panel::ALL
        .iter()
        .map(|&panel| {
            let text = format!(" {} {}", panel.index() + 1, panel.label());
            if panel == app.active_panel {
                Line::from(Span::styled(text, theme.selected_style()))
            } else {
                Line::from(text)
            }
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" d ", theme.title_style()),
        Span::raw(DOWNLOAD_LABEL),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" r ", theme.title_style()),
        Span::raw("Rapport Markdown"),
    ]));

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.muted))
        .style(Style::default().fg(theme.text).bg(theme.sidebar));
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}
