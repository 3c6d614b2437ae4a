//! Bottom status bar - session identity and the last status message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let session = &app.session;
    let mut spans: Vec<Span> = vec![Span::styled(
        format!(
            " seed {} | {} skieurs | {} ",
            session.seed(),
            session.records().len(),
            session.fingerprint().short()
        ),
        theme.muted_style(),
    )];

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            msg.as_str(),
            Style::default().fg(theme.status_color(*level)),
        ));
    } else {
        spans.push(Span::styled("| ?: aide  q: quitter", theme.muted_style()));
    }

    let para = Paragraph::new(Line::from(spans)).style(theme.base());
    f.render_widget(para, area);
}
