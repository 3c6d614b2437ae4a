//! Keyboard input dispatch - global keys, then section-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel};

/// Handle a key event. Clears `app.running` when the user quits.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(panel) = Panel::from_index(idx) {
                app.switch_panel(panel);
            }
            return;
        }
        KeyCode::Char('?') => {
            app.switch_panel(Panel::Help);
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.switch_panel(app.active_panel.prev());
            } else {
                app.switch_panel(app.active_panel.next());
            }
            return;
        }
        KeyCode::BackTab => {
            app.switch_panel(app.active_panel.prev());
            return;
        }
        KeyCode::Char('d') => {
            app.download();
            return;
        }
        KeyCode::Char('r') => {
            app.write_report();
            return;
        }
        _ => {}
    }

    // 2. Section-specific keys.
    match app.active_panel {
        Panel::Data | Panel::Ranking => handle_table_key(app, key),
        Panel::Detail => handle_detail_key(app, key),
        Panel::Stats | Panel::Charts | Panel::Help => {} // display only
    }
}

fn handle_table_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') | KeyCode::Home => app.scroll = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.scroll = app.session.records().len().saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Char('g') | KeyCode::Home => app.selector.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.selector.select_last(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_switch_sections() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('5')));
        assert_eq!(app.active_panel, Panel::Detail);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.active_panel, Panel::Data);
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert_eq!(app.active_panel, Panel::Help);
    }

    #[test]
    fn tab_cycles_both_ways() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.active_panel, Panel::Stats);
        handle_key(&mut app, press(KeyCode::BackTab));
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.active_panel, Panel::Help);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = test_app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release);
        assert!(app.running);
    }

    #[test]
    fn quit_keys() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = test_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(!app.running);
    }

    #[test]
    fn j_k_move_selector_in_detail() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('5')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.selected_record().unwrap().name(), "Skieur_3");
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.selected_record().unwrap().name(), "Skieur_2");
        handle_key(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.selected_record().unwrap().name(), "Skieur_10");
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn j_k_scroll_tables() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.scroll, 2);
        handle_key(&mut app, press(KeyCode::Char('g')));
        assert_eq!(app.scroll, 0);
        assert_eq!(app.selector.index(), 0);
    }

    #[test]
    fn display_only_sections_ignore_movement() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.scroll, 0);
        assert_eq!(app.selector.index(), 0);
    }
}
