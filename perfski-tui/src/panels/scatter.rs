//! Distance vs time scatter chart
//!
//! Time on x, distance on y. A terminal dataset carries a single style, so
//! points are bucketed by speed and each bucket is drawn in its own ramp
//! colour, slowest bucket coolest.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

use perfski_core::labels::SCATTER_CHART_TITLE;
use perfski_core::{Field, RecordSet};

use crate::theme::Theme;

/// Number of speed buckets (colours) on the ramp.
pub const SPEED_BUCKETS: usize = 5;

pub struct DistanceTimeScatter<'a> {
    records: &'a RecordSet,
    theme: &'a Theme,
}

impl<'a> DistanceTimeScatter<'a> {
    pub fn new(records: &'a RecordSet, theme: &'a Theme) -> Self {
        Self { records, theme }
    }

    /// `(time, distance)` points grouped by speed bucket.
    fn buckets(&self) -> Vec<Vec<(f64, f64)>> {
        let (min, max) = min_max(&self.records.column(Field::Speed));
        let mut buckets = vec![Vec::new(); SPEED_BUCKETS];
        for record in self.records {
            let idx = bucket_of(record.avg_speed_mps(), min, max);
            buckets[idx].push((record.time_s(), record.distance_m()));
        }
        buckets
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

fn bucket_of(value: f64, min: f64, max: f64) -> usize {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return SPEED_BUCKETS / 2;
    }
    let t = ((value - min) / span).clamp(0.0, 1.0);
    ((t * SPEED_BUCKETS as f64) as usize).min(SPEED_BUCKETS - 1)
}

/// Axis bounds padded by 5% on each side.
fn padded(lo: f64, hi: f64) -> [f64; 2] {
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((hi - lo) * 0.05).max(1.0);
    [lo - pad, hi + pad]
}

impl<'a> Widget for DistanceTimeScatter<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {SCATTER_CHART_TITLE} "))
            .title_style(self.theme.title_style())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(self.theme.base());

        let buckets = self.buckets();
        let datasets: Vec<Dataset> = buckets
            .iter()
            .enumerate()
            .filter(|(_, points)| !points.is_empty())
            .map(|(i, points)| {
                let t = (i as f64 + 0.5) / SPEED_BUCKETS as f64;
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(self.theme.coolwarm(t)))
                    .data(points)
            })
            .collect();

        let x = padded_axis(&self.records.column(Field::Time));
        let y = padded_axis(&self.records.column(Field::Distance));
        let muted = self.theme.muted_style();

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title(Span::styled(Field::Time.header(), muted))
                    .style(muted)
                    .bounds(x)
                    .labels(axis_labels(x, muted)),
            )
            .y_axis(
                Axis::default()
                    .title(Span::styled(Field::Distance.header(), muted))
                    .style(muted)
                    .bounds(y)
                    .labels(axis_labels(y, muted)),
            )
            .render(area, buf);
    }
}

fn padded_axis(values: &[f64]) -> [f64; 2] {
    let (lo, hi) = min_max(values);
    padded(lo, hi)
}

fn axis_labels(bounds: [f64; 2], style: Style) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::styled(format!("{v:.0}"), style))
        .collect()
}
