//! Test helpers for building app state

use perfski_core::{Session, SessionConfig};

use crate::app::AppState;

/// App over the default session (seed 42, ten skiers).
pub fn test_app() -> AppState {
    AppState::new(Session::start(SessionConfig::default()).unwrap())
}

/// Concatenate every cell symbol of a buffer, row by row.
pub fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            content.push_str(buf.cell((x, y)).unwrap().symbol());
        }
        content.push('\n');
    }
    content
}
