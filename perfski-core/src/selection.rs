//! Skier selection and detail formatting.
//!
//! `Selector` is the drop-down: a cursor that can only point at names that
//! exist in the record set, so resolving it never fails for a non-empty
//! set. `select` is the by-name lookup used by the CLI, where the name comes
//! from the user and may be unknown.

use crate::domain::{RecordSet, SkierRecord};

/// Cursor over the generated names, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selector {
    index: usize,
    len: usize,
}

impl Selector {
    pub fn new(records: &RecordSet) -> Self {
        Self {
            index: 0,
            len: records.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn select_next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.index = 0;
    }

    pub fn select_last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }

    /// Move to `name`. Returns false (cursor unchanged) if it is unknown.
    pub fn select_name(&mut self, records: &RecordSet, name: &str) -> bool {
        match records.position(name) {
            Some(idx) => {
                self.index = idx;
                true
            }
            None => false,
        }
    }

    pub fn selected<'a>(&self, records: &'a RecordSet) -> Option<&'a SkierRecord> {
        records.records().get(self.index)
    }
}

/// Display-ready detail for one skier.
#[derive(Debug, Clone, PartialEq)]
pub struct SkierDetail {
    pub name: String,
    pub distance_m: f64,
    pub time_s: f64,
    pub avg_speed_mps: f64,
}

impl From<&SkierRecord> for SkierDetail {
    fn from(record: &SkierRecord) -> Self {
        Self {
            name: record.name().to_string(),
            distance_m: record.distance_m(),
            time_s: record.time_s(),
            avg_speed_mps: record.avg_speed_mps(),
        }
    }
}

impl SkierDetail {
    pub fn heading(&self) -> String {
        format!("Analyse détaillée pour {}", self.name)
    }

    /// `(label, value, unit)` triples, values in natural decimal form.
    pub fn fields(&self) -> [(&'static str, String, &'static str); 3] {
        [
            ("Distance parcourue", self.distance_m.to_string(), "m"),
            ("Temps total", self.time_s.to_string(), "s"),
            ("Vitesse moyenne", self.avg_speed_mps.to_string(), "m/s"),
        ]
    }

    /// Markdown block with bold labels and hard line breaks.
    pub fn to_markdown(&self) -> String {
        self.fields()
            .iter()
            .map(|(label, value, unit)| format!("**{label}**: {value} {unit}  "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Look up a skier by name.
pub fn select(records: &RecordSet, name: &str) -> Option<SkierDetail> {
    records.get(name).map(SkierDetail::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn cursor_is_clamped() {
        let records = generate(3, 42);
        let mut sel = Selector::new(&records);
        sel.select_previous();
        assert_eq!(sel.index(), 0);
        sel.select_next();
        sel.select_next();
        sel.select_next();
        assert_eq!(sel.index(), 2);
        sel.select_first();
        assert_eq!(sel.index(), 0);
        sel.select_last();
        assert_eq!(sel.selected(&records).unwrap().name(), "Skieur_3");
    }

    #[test]
    fn select_by_name() {
        let records = generate(5, 42);
        let mut sel = Selector::new(&records);
        assert!(sel.select_name(&records, "Skieur_4"));
        assert_eq!(sel.index(), 3);
        assert!(!sel.select_name(&records, "nobody"));
        assert_eq!(sel.index(), 3);
    }

    #[test]
    fn empty_set_selects_nothing() {
        let records = RecordSet::default();
        let mut sel = Selector::new(&records);
        sel.select_next();
        sel.select_last();
        assert!(sel.selected(&records).is_none());
    }

    #[test]
    fn detail_markdown() {
        let record = SkierRecord::try_new("Skieur_1", 3000.0, 600.0).unwrap();
        let detail = SkierDetail::from(&record);
        assert_eq!(detail.heading(), "Analyse détaillée pour Skieur_1");
        assert_eq!(
            detail.to_markdown(),
            "**Distance parcourue**: 3000 m  \n**Temps total**: 600 s  \n**Vitesse moyenne**: 5 m/s  "
        );
    }

    #[test]
    fn unknown_name_is_none() {
        let records = generate(2, 42);
        assert!(select(&records, "Skieur_3").is_none());
        assert_eq!(select(&records, "Skieur_2").unwrap().name, "Skieur_2");
    }
}
