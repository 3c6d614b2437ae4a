//! Data table panel - every record, generation order
//!
//! The maximum of each numeric column is painted light green.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use perfski_core::labels::SECTION_DATA;
use perfski_core::{highlight_max, Field, RecordSet, NAME_HEADER};

use crate::theme::Theme;

pub struct DataTablePanel<'a> {
    records: &'a RecordSet,
    scroll: usize,
    theme: &'a Theme,
}

impl<'a> DataTablePanel<'a> {
    pub fn new(records: &'a RecordSet, scroll: usize, theme: &'a Theme) -> Self {
        Self {
            records,
            scroll,
            theme,
        }
    }

    /// Row index of each column's maximum, in `Field::ALL` order.
    fn maxima(&self) -> [Option<usize>; 3] {
        Field::ALL.map(|field| highlight_max(&self.records.column(field)))
    }
}

impl<'a> Widget for DataTablePanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {SECTION_DATA} "))
            .title_style(self.theme.title_style())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(self.theme.base());

        let header_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(
            std::iter::once(NAME_HEADER)
                .chain(Field::ALL.iter().map(|f| f.header()))
                .map(|h| Cell::from(h).style(header_style)),
        );

        let maxima = self.maxima();
        let highlight = Style::default()
            .bg(self.theme.data_highlight)
            .fg(self.theme.text);

        let rows = self
            .records
            .iter()
            .enumerate()
            .skip(self.scroll)
            .map(|(row, record)| {
                let mut cells = vec![Cell::from(record.name().to_string())];
                for (field, max) in Field::ALL.iter().zip(maxima) {
                    let cell = Cell::from(format!("{:>12.2}", field.value(record)));
                    cells.push(if max == Some(row) {
                        cell.style(highlight)
                    } else {
                        cell
                    });
                }
                Row::new(cells)
            });

        let widths = [
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(14),
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
    use perfski_core::{generate, SkierRecord};

    #[test]
    fn renders_header_and_every_name() {
        let theme = Theme::default();
        let records = generate(5, 42);
        let area = Rect::new(0, 0, 80, 12);
        let mut buf = Buffer::empty(area);
        DataTablePanel::new(&records, 0, &theme).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(content.contains("Données des Skieurs"));
        assert!(content.contains("Distance (m)"));
        assert!(content.contains("Vitesse Moyenne (m/s)"));
        for name in records.names() {
            assert!(content.contains(name));
        }
    }

    #[test]
    fn maxima_are_highlighted() {
        let theme = Theme::default();
        let records = RecordSet::new(vec![
            SkierRecord::try_new("a", 1000.0, 500.0).unwrap(),
            SkierRecord::try_new("b", 3000.0, 400.0).unwrap(),
            SkierRecord::try_new("c", 2000.0, 800.0).unwrap(),
        ])
        .unwrap();
        let panel = DataTablePanel::new(&records, 0, &theme);
        assert_eq!(panel.maxima(), [Some(1), Some(2), Some(1)]);

        let area = Rect::new(0, 0, 80, 8);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        let highlighted = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .filter(|&pos| buf.cell(pos).unwrap().bg == theme.data_highlight)
            .count();
        assert!(highlighted > 0);
    }

    #[test]
    fn scroll_skips_leading_rows() {
        let theme = Theme::default();
        let records = generate(10, 42);
        let area = Rect::new(0, 0, 80, 14);
        let mut buf = Buffer::empty(area);
        DataTablePanel::new(&records, 3, &theme).render(area, &mut buf);

        let content = buffer_text(&buf);
        assert!(!content.contains("Skieur_1 "));
        assert!(content.contains("Skieur_4"));
    }
}
