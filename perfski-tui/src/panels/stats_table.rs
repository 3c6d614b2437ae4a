//! Statistics panel - count, mean, std, min, quartiles and max per field
//!
//! The largest figure of each column is painted light blue.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use perfski_core::labels::SECTION_STATS;
use perfski_core::{Describe, Field, Statistic};

use crate::theme::Theme;

pub struct StatsTablePanel<'a> {
    describe: &'a Describe,
    theme: &'a Theme,
}

impl<'a> StatsTablePanel<'a> {
    pub fn new(describe: &'a Describe, theme: &'a Theme) -> Self {
        Self { describe, theme }
    }
}

fn format_figure(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}

impl<'a> Widget for StatsTablePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {SECTION_STATS} "))
            .title_style(self.theme.title_style())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(self.theme.base());

        let bold = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(
            std::iter::once("")
                .chain(Field::ALL.iter().map(|f| f.header()))
                .map(|h| Cell::from(h).style(bold)),
        );

        let highlighted = Field::ALL.map(|field| self.describe.highlighted(field));
        let highlight = Style::default()
            .bg(self.theme.stats_highlight)
            .fg(self.theme.text);

        let rows = Statistic::ALL.iter().map(|&stat| {
            let mut cells = vec![Cell::from(stat.label()).style(bold)];
            for (&field, marked) in Field::ALL.iter().zip(highlighted) {
                let value = self.describe.value(stat, field).unwrap_or(f64::NAN);
                let cell = Cell::from(format!("{:>14}", format_figure(value)));
                cells.push(if marked == Some(stat) {
                    cell.style(highlight)
                } else {
                    cell
                });
            }
            Row::new(cells)
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(24),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .column_spacing(1)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::buffer_text;
    use perfski_core::generate;

    #[test]
    fn renders_every_statistic() {
        let theme = Theme::default();
        let describe = Describe::of(&generate(10, 42));
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        StatsTablePanel::new(&describe, &theme).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("Statistiques des Performances"));
        for stat in Statistic::ALL {
            assert!(content.contains(stat.label()), "missing {}", stat.label());
        }
        assert!(content.contains("10.0000"));
    }

    #[test]
    fn highlights_one_cell_per_column() {
        let theme = Theme::default();
        let describe = Describe::of(&generate(10, 42));
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        StatsTablePanel::new(&describe, &theme).render(area, &mut buf);

        let rows_with_highlight: std::collections::HashSet<u16> = (0..area.height)
            .filter(|&y| {
                (0..area.width).any(|x| buf.cell((x, y)).unwrap().bg == theme.stats_highlight)
            })
            .collect();
        // Distances and times always peak on the max row. Speeds peak on
        // either max or count, depending on the draw.
        assert!(!rows_with_highlight.is_empty());
        assert!(rows_with_highlight.len() <= 2);
    }

    #[test]
    fn nan_figures_are_spelled_out() {
        assert_eq!(format_figure(f64::NAN), "NaN");
        assert_eq!(format_figure(2.5), "2.5000");
    }
}
