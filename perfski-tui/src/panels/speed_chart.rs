//! Speed bar chart - one horizontal bar per skier
//!
//! Bars are coloured on the cool → warm ramp by speed. `BarChart` takes
//! integer values, so speeds are scaled by `SCALE` and the real figure is
//! shown as the bar text.

use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

use perfski_core::labels::SPEED_CHART_TITLE;
use perfski_core::{Field, RecordSet};

use crate::theme::Theme;

const SCALE: f64 = 100.0;

pub struct SpeedBarChart<'a> {
    records: &'a RecordSet,
    theme: &'a Theme,
}

impl<'a> SpeedBarChart<'a> {
    pub fn new(records: &'a RecordSet, theme: &'a Theme) -> Self {
        Self { records, theme }
    }

    fn bars(&self) -> Vec<Bar<'a>> {
        let speeds = self.records.column(Field::Speed);
        let min = speeds.iter().copied().fold(f64::INFINITY, f64::min);
        let max = speeds.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        self.records
            .iter()
            .map(|record| {
                let speed = record.avg_speed_mps();
                let colour = self.theme.scaled(speed, min, max);
                Bar::default()
                    .value(scaled(speed))
                    .label(Line::from(record.name().to_string()))
                    .text_value(format!("{speed:.2}"))
                    .style(Style::default().fg(colour))
                    .value_style(Style::default().fg(self.theme.text).bg(colour))
            })
            .collect()
    }
}

fn scaled(speed: f64) -> u64 {
    (speed * SCALE).round().max(0.0) as u64
}

impl<'a> Widget for SpeedBarChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {SPEED_CHART_TITLE} "))
            .title_style(self.theme.title_style())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(self.theme.base());

        let bars = self.bars();
        let max = bars_max(self.records);

        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .max(max)
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}

fn bars_max(records: &RecordSet) -> u64 {
    records
        .iter()
        .map(|r| scaled(r.avg_speed_mps()))
        .max()
        .unwrap_or(1)
        .max(1)
}
