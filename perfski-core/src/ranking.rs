//! Speed ranking - a sorted view over the record set.
//!
//! Sorted by average speed, fastest first. The sort is stable, so records
//! with equal speed keep their generation order.

use crate::domain::{RecordSet, SkierRecord};

/// One row of the ranking view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingEntry<'a> {
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Generation-order index of the record.
    pub index: usize,
    pub record: &'a SkierRecord,
}

impl<'a> RankingEntry<'a> {
    pub fn name(&self) -> &'a str {
        self.record.name()
    }

    pub fn avg_speed_mps(&self) -> f64 {
        self.record.avg_speed_mps()
    }
}

pub fn rank_by_speed(records: &RecordSet) -> Vec<RankingEntry<'_>> {
    let mut order: Vec<(usize, &SkierRecord)> = records.iter().enumerate().collect();
    order.sort_by(|(_, a), (_, b)| b.avg_speed_mps().total_cmp(&a.avg_speed_mps()));
    order
        .into_iter()
        .enumerate()
        .map(|(pos, (index, record))| RankingEntry {
            rank: pos + 1,
            index,
            record,
        })
        .collect()
}
