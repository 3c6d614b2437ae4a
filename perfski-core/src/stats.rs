//! Descriptive statistics over record columns.
//!
//! `ColumnSummary` carries the eight figures of a classic "describe" table:
//! count, mean, sample standard deviation (n − 1), min, the three quartiles
//! and max. Quartiles use linear interpolation between closest ranks.
//! Figures that are undefined for the input (mean of nothing, std of a
//! single value) are NaN.

use serde::{Deserialize, Serialize};

use crate::domain::{Field, RecordSet};

/// One row of the summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Statistic {
    Count,
    Mean,
    Std,
    Min,
    Q25,
    Q50,
    Q75,
    Max,
}

impl Statistic {
    pub const ALL: [Statistic; 8] = [
        Statistic::Count,
        Statistic::Mean,
        Statistic::Std,
        Statistic::Min,
        Statistic::Q25,
        Statistic::Q50,
        Statistic::Q75,
        Statistic::Max,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Statistic::Count => "count",
            Statistic::Mean => "mean",
            Statistic::Std => "std",
            Statistic::Min => "min",
            Statistic::Q25 => "25%",
            Statistic::Q50 => "50%",
            Statistic::Q75 => "75%",
            Statistic::Max => "max",
        }
    }
}

/// Summary of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarize the finite values of a column. NaN entries are skipped.
    pub fn from_values(values: &[f64]) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        if count == 0 {
            return Self {
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                q50: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let mean = sorted.iter().sum::<f64>() / count as f64;
        let std = if count > 1 {
            let ss = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (ss / (count - 1) as f64).sqrt()
        } else {
            f64::NAN
        };

        Self {
            count,
            mean,
            std,
            min: sorted[0],
            q25: percentile_sorted(&sorted, 0.25),
            q50: percentile_sorted(&sorted, 0.50),
            q75: percentile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    pub fn get(&self, stat: Statistic) -> f64 {
        match stat {
            Statistic::Count => self.count as f64,
            Statistic::Mean => self.mean,
            Statistic::Std => self.std,
            Statistic::Min => self.min,
            Statistic::Q25 => self.q25,
            Statistic::Q50 => self.q50,
            Statistic::Q75 => self.q75,
            Statistic::Max => self.max,
        }
    }

    /// All eight figures in `Statistic::ALL` order.
    pub fn values(&self) -> [f64; 8] {
        Statistic::ALL.map(|s| self.get(s))
    }
}

/// Summary table for every numeric field of a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Describe {
    columns: Vec<(Field, ColumnSummary)>,
}

impl Describe {
    pub fn of(records: &RecordSet) -> Self {
        let columns = Field::ALL
            .iter()
            .map(|&field| (field, ColumnSummary::from_values(&records.column(field))))
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[(Field, ColumnSummary)] {
        &self.columns
    }

    pub fn column(&self, field: Field) -> Option<&ColumnSummary> {
        self.columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, summary)| summary)
    }

    pub fn value(&self, stat: Statistic, field: Field) -> Option<f64> {
        self.column(field).map(|summary| summary.get(stat))
    }

    /// Row of the largest figure in a field's column (what the table
    /// highlights). Count is a row like any other, so for small-valued
    /// columns it can win.
    pub fn highlighted(&self, field: Field) -> Option<Statistic> {
        let summary = self.column(field)?;
        highlight_max(&summary.values()).map(|idx| Statistic::ALL[idx])
    }
}

/// Index of the largest value, first occurrence on ties, NaN ignored.
/// `None` for an empty or all-NaN column.
pub fn highlight_max(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, current)) if v <= current => {}
            _ => best = Some((idx, v)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Linear-interpolated percentile of an ascending slice, `p` in [0, 1].
pub fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!((0.0..=1.0).contains(&p), "percentile must be in [0, 1]");
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = p * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SkierRecord;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn summary_of_simple_column() {
        let s = ColumnSummary::from_values(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.count, 4);
        assert!(approx(s.mean, 2.5));
        // sample variance = 5/3
        assert!(approx(s.std, (5.0f64 / 3.0).sqrt()));
        assert_eq!(s.min, 1.0);
        assert!(approx(s.q25, 1.75));
        assert!(approx(s.q50, 2.5));
        assert!(approx(s.q75, 3.25));
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn single_value_has_undefined_std() {
        let s = ColumnSummary::from_values(&[5.0]);
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert_eq!(s.q25, 5.0);
    }

    #[test]
    fn empty_column_is_all_nan() {
        let s = ColumnSummary::from_values(&[]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan() && s.min.is_nan() && s.max.is_nan());
    }

    #[test]
    fn highlight_first_max_ignoring_nan() {
        assert_eq!(highlight_max(&[1.0, 3.0, f64::NAN, 3.0, 2.0]), Some(1));
        assert_eq!(highlight_max(&[f64::NAN, -1.0]), Some(1));
        assert_eq!(highlight_max(&[f64::NAN]), None);
        assert_eq!(highlight_max(&[]), None);
    }

    #[test]
    fn percentile_endpoints() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile_sorted(&v, 0.0), 1.0);
        assert_eq!(percentile_sorted(&v, 0.5), 3.0);
        assert_eq!(percentile_sorted(&v, 1.0), 5.0);
    }

    #[test]
    fn describe_highlights_count_for_small_columns() {
        let set = RecordSet::new(vec![
            SkierRecord::try_new("a", 1000.0, 500.0).unwrap(),
            SkierRecord::try_new("b", 1500.0, 500.0).unwrap(),
            SkierRecord::try_new("c", 4000.0, 500.0).unwrap(),
        ])
        .unwrap();
        let d = Describe::of(&set);
        // speeds 2, 3, 8: max speed 8 beats count 3
        assert_eq!(d.highlighted(Field::Speed), Some(Statistic::Max));
        assert_eq!(d.value(Statistic::Count, Field::Time), Some(3.0));
        // times are all 500; std is 0 and the first 500 is the mean row
        assert_eq!(d.highlighted(Field::Time), Some(Statistic::Mean));
    }
}
