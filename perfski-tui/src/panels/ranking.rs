//! Ranking panel - skiers by average speed, fastest first

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

use perfski_core::labels::SECTION_RANKING;
use perfski_core::{Field, RankingEntry, NAME_HEADER};

use crate::theme::Theme;

pub struct RankingPanel<'a> {
    entries: &'a [RankingEntry<'a>],
    scroll: usize,
    theme: &'a Theme,
}

impl<'a> RankingPanel<'a> {
    pub fn new(entries: &'a [RankingEntry<'a>], scroll: usize, theme: &'a Theme) -> Self {
        Self {
            entries,
            scroll,
            theme,
        }
    }
}

impl<'a> Widget for RankingPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {SECTION_RANKING} "))
            .title_style(self.theme.title_style())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(self.theme.base());

        let header_style = Style::default()
            .fg(self.theme.accent)
            .add_modifier(Modifier::BOLD);
        let header = Row::new(
            ["Rang", NAME_HEADER, Field::Speed.header()]
                .into_iter()
                .map(|h| Cell::from(h).style(header_style)),
        );

        let rows = self.entries.iter().skip(self.scroll).map(|entry| {
            let row = Row::new(vec![
                Cell::from(format!("{:>4}", entry.rank)),
                Cell::from(entry.name().to_string()),
                Cell::from(format!("{:>12.4}", entry.avg_speed_mps())),
            ]);
            if entry.rank == 1 {
                row.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                row
            }
        });

        let widths = [
            Constraint::Length(5),
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
    use perfski_core::{generate, rank_by_speed};

    #[test]
    fn fastest_skier_is_on_first_row() {
        let theme = Theme::default();
        let records = generate(10, 42);
        let ranking = rank_by_speed(&records);
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        RankingPanel::new(&ranking, 0, &theme).render(area, &mut buf);

        let content = buffer_text(&buf);
        let first_row = content.lines().nth(2).unwrap();
        assert!(first_row.contains(ranking[0].name()));
        assert!(first_row.contains("   1"));
    }

    #[test]
    fn scroll_hides_top_ranks() {
        let theme = Theme::default();
        let records = generate(10, 42);
        let ranking = rank_by_speed(&records);
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        RankingPanel::new(&ranking, 2, &theme).render(area, &mut buf);

        let content = buffer_text(&buf);
        let first_row = content.lines().nth(2).unwrap();
        assert!(first_row.contains(ranking[2].name()));
    }
}
