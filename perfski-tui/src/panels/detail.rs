//! Detail panel - skier selector and the selected skier's figures
//!
//! Left: the generated names, cursor on the current selection. Right: the
//! heading and the three labelled values in natural decimal form.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use perfski_core::labels::SELECT_PROMPT;
use perfski_core::{RecordSet, Selector, SkierDetail};

use crate::theme::Theme;

pub struct DetailPanel<'a> {
    records: &'a RecordSet,
    selector: &'a Selector,
    theme: &'a Theme,
}

impl<'a> DetailPanel<'a> {
    pub fn new(records: &'a RecordSet, selector: &'a Selector, theme: &'a Theme) -> Self {
        Self {
            records,
            selector,
            theme,
        }
    }

    fn render_selector(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {SELECT_PROMPT} "))
            .title_style(self.theme.title_style())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().fg(self.theme.text).bg(self.theme.sidebar));
        let inner = block.inner(area);
        block.render(area, buf);

        let selected = self.selector.index();
        let offset = list_offset(selected, inner.height as usize);
        let lines: Vec<Line> = self
            .records
            .names()
            .enumerate()
            .skip(offset)
            .take(inner.height as usize)
            .map(|(i, name)| {
                if i == selected {
                    Line::from(Span::styled(format!("> {name}"), self.theme.selected_style()))
                } else {
                    Line::from(format!("  {name}"))
                }
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_detail(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(self.theme.base());

        let Some(record) = self.selector.selected(self.records) else {
            Paragraph::new(Span::styled("Aucun skieur.", self.theme.muted_style()))
                .block(block)
                .render(area, buf);
            return;
        };

        let detail = SkierDetail::from(record);
        let mut lines = vec![
            Line::from(Span::styled(detail.heading(), self.theme.title_style())),
            Line::from(""),
        ];
        for (label, value, unit) in detail.fields() {
            lines.push(Line::from(vec![
                Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(": {value} {unit}")),
            ]));
        }
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// First visible row so that `selected` stays inside a window of `height`.
fn list_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        return selected;
    }
    selected.saturating_sub(height - 1)
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(20)])
            .split(area);

        self.render_selector(chunks[0], buf);
        self.render_detail(chunks[1], buf);
    }
}
