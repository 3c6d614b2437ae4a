//! Top-level UI layout - header band, section list, active section and
//! status bar.

pub mod header;
pub mod help_panel;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use perfski_core::labels::CHARTS_INTRO;

use crate::app::{AppState, Panel};
use crate::panels::{
    DataTablePanel, DetailPanel, DistanceTimeScatter, RankingPanel, SpeedBarChart,
    StatsTablePanel,
};

/// Height of the header band: title, two description lines, padding.
const HEADER_HEIGHT: u16 = 4;
const SIDEBAR_WIDTH: u16 = 26;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    header::render(f, chunks[0], app);
    sidebar::render(f, body[0], app);
    draw_panel(f, body[1], app);
    status_bar::render(f, chunks[2], app);
}

/// Draw the active section.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    f.render_widget(Block::default().style(theme.base()), area);

    let records = app.session.records();
    match app.active_panel {
        Panel::Data => f.render_widget(DataTablePanel::new(records, app.scroll, theme), area),
        Panel::Stats => {
            let describe = app.session.describe();
            f.render_widget(StatsTablePanel::new(&describe, theme), area);
        }
        Panel::Charts => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Percentage(45),
                    Constraint::Min(6),
                ])
                .split(area);
            f.render_widget(
                Paragraph::new(Span::styled(CHARTS_INTRO, theme.muted_style())),
                chunks[0],
            );
            f.render_widget(SpeedBarChart::new(records, theme), chunks[1]);
            f.render_widget(DistanceTimeScatter::new(records, theme), chunks[2]);
        }
        Panel::Ranking => {
            let ranking = app.session.ranking();
            f.render_widget(RankingPanel::new(&ranking, app.scroll, theme), area);
        }
        Panel::Detail => f.render_widget(DetailPanel::new(records, &app.selector, theme), area),
        Panel::Help => help_panel::render(f, area, app),
    }
}
