//! Plain-text tables for terminal output.
//!
//! First column left-aligned, the rest right-aligned. Column maxima are
//! flagged with a trailing `*`, the text counterpart of the dashboard's
//! highlight colours.

use perfski_core::{
    highlight_max, Describe, Field, RankingEntry, RecordSet, SkierDetail, Statistic, NAME_HEADER,
};

const MAX_MARK: &str = "*";

/// Align `rows` under `headers`, two spaces between columns.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = String::new();
    for row in std::iter::once(&header_cells).chain(rows) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &w))| {
                if i == 0 {
                    format!("{cell:<w$}")
                } else {
                    format!("{cell:>w$}")
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn figure(value: f64, marked: bool) -> String {
    let mark = if marked { MAX_MARK } else { " " };
    if value.is_nan() {
        format!("NaN{mark}")
    } else {
        format!("{value:.2}{mark}")
    }
}

fn field_headers(first: &'static str) -> Vec<&'static str> {
    std::iter::once(first)
        .chain(Field::ALL.iter().map(|f| f.header()))
        .collect()
}

pub fn records_table(records: &RecordSet) -> String {
    let maxima = Field::ALL.map(|field| highlight_max(&records.column(field)));
    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            std::iter::once(record.name().to_string())
                .chain(
                    Field::ALL
                        .iter()
                        .zip(maxima)
                        .map(|(field, max)| figure(field.value(record), max == Some(row))),
                )
                .collect()
        })
        .collect();
    render_table(&field_headers(NAME_HEADER), &rows)
}

pub fn describe_table(describe: &Describe) -> String {
    let marked = Field::ALL.map(|field| describe.highlighted(field));
    let rows: Vec<Vec<String>> = Statistic::ALL
        .iter()
        .map(|&stat| {
            std::iter::once(stat.label().to_string())
                .chain(Field::ALL.iter().zip(marked).map(|(&field, mark)| {
                    let value = describe.value(stat, field).unwrap_or(f64::NAN);
                    figure(value, mark == Some(stat))
                }))
                .collect()
        })
        .collect();
    render_table(&field_headers(""), &rows)
}

pub fn ranking_table(entries: &[RankingEntry<'_>]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| {
            vec![
                e.rank.to_string(),
                e.name().to_string(),
                format!("{:.4}", e.avg_speed_mps()),
            ]
        })
        .collect();
    render_table(&["Rang", NAME_HEADER, Field::Speed.header()], &rows)
}

pub fn detail_text(detail: &SkierDetail) -> String {
    let mut out = format!("{}\n", detail.heading());
    for (label, value, unit) in detail.fields() {
        out.push_str(&format!("{label}: {value} {unit}\n"));
    }
    out
}
