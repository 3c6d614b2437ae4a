//! Header band - page title and description.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use ratatui::Frame;

use perfski_core::labels::{DESCRIPTION, PAGE_TITLE};

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let style = app.theme.header_style();
    let lines = vec![
        Line::from(Span::styled(PAGE_TITLE, style.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(DESCRIPTION, style)),
    ];
    let para = Paragraph::new(lines)
        .block(Block::default().style(style).padding(Padding::horizontal(1)))
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}
