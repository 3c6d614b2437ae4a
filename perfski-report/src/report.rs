//! Markdown session report.
//!
//! Mirrors the dashboard page as a document: title and description, the
//! record table, the statistics table, the speed ranking and, optionally,
//! the detail block of one skier. Column maxima are set in bold in both
//! tables, matching the highlight colours on screen.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use perfski_core::labels;
use perfski_core::{highlight_max, Field, RecordSet, Session, Statistic, NAME_HEADER};

pub struct MarkdownReport<'a> {
    session: &'a Session,
    skier: Option<&'a str>,
}

impl<'a> MarkdownReport<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            skier: None,
        }
    }

    /// Append the detail section for `name`.
    pub fn with_skier(mut self, name: &'a str) -> Self {
        self.skier = Some(name);
        self
    }

    pub fn generate(&self) -> Result<String> {
        self.generate_at(Utc::now())
    }

    /// Render with an explicit timestamp.
    pub fn generate_at(&self, generated_at: DateTime<Utc>) -> Result<String> {
        let session = self.session;
        let records = session.records();

        let mut report = format!(
            "# {}\n\n{}\n\n\
- Seed: {}\n\
- Skieurs: {}\n\
- Empreinte: `{}`\n\
- Généré le: {}\n",
            labels::PAGE_TITLE,
            labels::DESCRIPTION,
            session.seed(),
            records.len(),
            session.fingerprint(),
            generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );

        report.push_str(&format!("\n## {}\n\n", labels::SECTION_DATA));
        report.push_str(&data_table(records));

        report.push_str(&format!("\n## {}\n\n", labels::SECTION_STATS));
        report.push_str(&format!("| | {} |\n", field_headers().join(" | ")));
        report.push_str("|---|---:|---:|---:|\n");
        let describe = session.describe();
        for stat in Statistic::ALL {
            let cells: Vec<String> = Field::ALL
                .iter()
                .map(|&field| {
                    let value = describe.value(stat, field).unwrap_or(f64::NAN);
                    cell(value, describe.highlighted(field) == Some(stat))
                })
                .collect();
            report.push_str(&format!("| {} | {} |\n", stat.label(), cells.join(" | ")));
        }

        report.push_str(&format!("\n## {}\n\n", labels::SECTION_RANKING));
        report.push_str(&format!("| Rang | {} | {} |\n", NAME_HEADER, Field::Speed.header()));
        report.push_str("|---:|---|---:|\n");
        for entry in session.ranking() {
            report.push_str(&format!(
                "| {} | {} | {:.2} |\n",
                entry.rank,
                entry.name(),
                entry.avg_speed_mps()
            ));
        }

        if let Some(name) = self.skier {
            let Some(detail) = session.detail(name) else {
                bail!("unknown skier '{name}'");
            };
            report.push_str(&format!("\n## {}\n\n", detail.heading()));
            report.push_str(&detail.to_markdown());
            report.push('\n');
        }

        Ok(report)
    }
}

fn field_headers() -> Vec<&'static str> {
    Field::ALL.iter().map(|f| f.header()).collect()
}

fn cell(value: f64, bold: bool) -> String {
    if bold {
        format!("**{value:.2}**")
    } else {
        format!("{value:.2}")
    }
}

fn data_table(records: &RecordSet) -> String {
    let maxima: Vec<Option<usize>> = Field::ALL
        .iter()
        .map(|&field| highlight_max(&records.column(field)))
        .collect();

    let mut table = format!("| {} | {} |\n", NAME_HEADER, field_headers().join(" | "));
    table.push_str("|---|---:|---:|---:|\n");
    for (row, record) in records.iter().enumerate() {
        let cells: Vec<String> = Field::ALL
            .iter()
            .zip(&maxima)
            .map(|(&field, max)| cell(field.value(record), *max == Some(row)))
            .collect();
        table.push_str(&format!("| {} | {} |\n", record.name(), cells.join(" | ")));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use perfski_core::SessionConfig;

    fn session() -> Session {
        Session::start(SessionConfig::default()).unwrap()
    }

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn report_contains_every_section() {
        let session = session();
        let md = MarkdownReport::new(&session).generate_at(fixed_time()).unwrap();
        assert!(md.starts_with("# Analyse des Performances des Skieurs\n"));
        assert!(md.contains("## Données des Skieurs"));
        assert!(md.contains("## Statistiques des Performances"));
        assert!(md.contains("## Classement des Skieurs par Vitesse Moyenne"));
        assert!(md.contains("2024-01-15 09:30:00 UTC"));
        assert!(md.contains(&session.fingerprint().0));
        assert!(!md.contains("Analyse détaillée pour"));
    }

    #[test]
    fn one_bold_cell_per_data_column() {
        let session = session();
        let table = data_table(session.records());
        // Three numeric columns, each with exactly one maximum.
        assert_eq!(table.matches("**").count(), 6);
    }

    #[test]
    fn fastest_skier_ranks_first() {
        let session = session();
        let md = MarkdownReport::new(&session).generate_at(fixed_time()).unwrap();
        let first = session.ranking()[0].name().to_string();
        assert!(md.contains(&format!("| 1 | {first} |")));
    }

    #[test]
    fn skier_detail_appended() {
        let session = session();
        let md = MarkdownReport::new(&session)
            .with_skier("Skieur_3")
            .generate_at(fixed_time())
            .unwrap();
        assert!(md.contains("## Analyse détaillée pour Skieur_3"));
        assert!(md.contains("**Distance parcourue**:"));
    }

    #[test]
    fn unknown_skier_is_an_error() {
        let session = session();
        let err = MarkdownReport::new(&session)
            .with_skier("Nobody")
            .generate_at(fixed_time())
            .unwrap_err();
        assert!(err.to_string().contains("unknown skier"));
    }
}
