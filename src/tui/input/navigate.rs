use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Mode;
use crate::tui::app::{App, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('1') => app.view = View::LiveMap,
        KeyCode::Char('2') => app.view = View::Performance,
        KeyCode::Tab => {
            app.view = match app.view {
                View::LiveMap => View::Performance,
                View::Performance => View::LiveMap,
            }
        }
        KeyCode::Char('b') => app.set_mode(Mode::Bus),
        KeyCode::Char('r') => app.set_mode(Mode::Rail),
        KeyCode::Char('m') => {
            let other = app.mode().other();
            app.set_mode(other);
        }
        KeyCode::Char('s') => app.toggle_auxiliary_markers(),
        KeyCode::Char('/') | KeyCode::Char('f') => {
            // The picker only lives on the map page
            app.view = View::LiveMap;
            app.focus_picker();
        }
        KeyCode::Char('x') => app.clear_all(),
        _ => {}
    }
}
