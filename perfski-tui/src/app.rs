//! Application state - single-owner, main-thread only.
//!
//! The session's record set is immutable for the lifetime of the app. Key
//! presses only move UI state (active panel, selector cursor, scroll offset)
//! and trigger file writes.

use std::path::PathBuf;

use anyhow::Result;

use perfski_core::{Selector, Session, SkierRecord};
use perfski_report::{DownloadArtifact, MarkdownReport};

use crate::theme::Theme;

/// Which section is shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Data,
    Stats,
    Charts,
    Ranking,
    Detail,
    Help,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Data,
        Panel::Stats,
        Panel::Charts,
        Panel::Ranking,
        Panel::Detail,
        Panel::Help,
    ];

    pub fn index(self) -> usize {
        match self {
            Panel::Data => 0,
            Panel::Stats => 1,
            Panel::Charts => 2,
            Panel::Ranking => 3,
            Panel::Detail => 4,
            Panel::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Data => "Données",
            Panel::Stats => "Statistiques",
            Panel::Charts => "Graphiques",
            Panel::Ranking => "Classement",
            Panel::Detail => "Analyse détaillée",
            Panel::Help => "Aide",
        }
    }

    pub fn next(self) -> Panel {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Panel {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub session: Session,
    pub active_panel: Panel,
    pub selector: Selector,
    /// First visible row of the data and ranking tables.
    pub scroll: usize,
    pub status_message: Option<(String, StatusLevel)>,
    pub output_dir: PathBuf,
    pub theme: Theme,
    pub running: bool,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let selector = Selector::new(session.records());
        let output_dir = session.config().export.output_dir.clone();
        Self {
            session,
            active_panel: Panel::Data,
            selector,
            scroll: 0,
            status_message: None,
            output_dir,
            theme: Theme::default(),
            running: true,
        }
    }

    pub fn switch_panel(&mut self, panel: Panel) {
        if panel != self.active_panel {
            tracing::debug!(panel = panel.label(), "panel switched");
            self.active_panel = panel;
            self.scroll = 0;
        }
    }

    pub fn selected_record(&self) -> Option<&SkierRecord> {
        self.selector.selected(self.session.records())
    }

    pub fn select_next(&mut self) {
        self.selector.select_next();
        self.log_selection();
    }

    pub fn select_previous(&mut self) {
        self.selector.select_previous();
        self.log_selection();
    }

    fn log_selection(&self) {
        if let Some(record) = self.selected_record() {
            tracing::debug!(skier = record.name(), "selection changed");
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.session.records().len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Write the CSV download into the output directory.
    pub fn download(&mut self) {
        let result = DownloadArtifact::csv(self.session.records())
            .and_then(|artifact| artifact.save(&self.output_dir));
        match result {
            Ok(path) => self.set_status(format!("CSV écrit: {}", path.display())),
            Err(err) => self.report_error("download failed", err),
        }
    }

    /// Write the Markdown report, including the selected skier's detail.
    pub fn write_report(&mut self) {
        let result = self.build_report().and_then(|md| {
            DownloadArtifact::markdown(md).save(&self.output_dir)
        });
        match result {
            Ok(path) => self.set_status(format!("Rapport écrit: {}", path.display())),
            Err(err) => self.report_error("report failed", err),
        }
    }

    fn build_report(&self) -> Result<String> {
        let report = MarkdownReport::new(&self.session);
        match self.selected_record() {
            Some(record) => report.with_skier(record.name()).generate(),
            None => report.generate(),
        }
    }

    fn report_error(&mut self, what: &str, err: anyhow::Error) {
        tracing::error!(error = %format!("{err:#}"), "{what}");
        self.set_error(format!("{err:#}"));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
