//! Section 6 - Aide: keyboard shortcuts and session settings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, theme, "Navigation");
    key(&mut lines, theme, "1-6", "Aller à la section");
    key(&mut lines, theme, "Tab / Shift+Tab", "Section suivante / précédente");
    key(&mut lines, theme, "?", "Cette aide");
    key(&mut lines, theme, "q / Ctrl+C", "Quitter");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Données et Classement");
    key(&mut lines, theme, "j / k", "Faire défiler le tableau");
    key(&mut lines, theme, "g / G", "Début / fin du tableau");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Analyse détaillée");
    key(&mut lines, theme, "j / k", "Skieur suivant / précédent");
    key(&mut lines, theme, "g / G", "Premier / dernier skieur");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Fichiers");
    key(&mut lines, theme, "d", "Écrire performances_skieurs.csv");
    key(&mut lines, theme, "r", "Écrire le rapport Markdown");
    key(
        &mut lines,
        theme,
        "Dossier",
        &app.output_dir.display().to_string(),
    );
    lines.push(Line::from(""));

    let generator = &app.session.config().generator;
    section(&mut lines, theme, "Session");
    key(&mut lines, theme, "Seed", &generator.seed.to_string());
    key(&mut lines, theme, "Skieurs", &generator.count.to_string());
    key(
        &mut lines,
        theme,
        "Distance (m)",
        &format!("[{}, {})", generator.distance_m.min, generator.distance_m.max),
    );
    key(
        &mut lines,
        theme,
        "Temps (s)",
        &format!("[{}, {})", generator.time_s.min, generator.time_s.max),
    );
    key(&mut lines, theme, "Empreinte", &app.session.fingerprint().0);

    let para = Paragraph::new(lines).style(theme.base());
    f.render_widget(para, area);
}

fn section(lines: &mut Vec<Line<'_>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme.title_style())));
}

fn key(lines: &mut Vec<Line<'_>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme.title_style()),
        Span::styled(desc.to_string(), theme.muted_style()),
    ]));
}
