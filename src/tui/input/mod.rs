mod mouse;
mod navigate;
mod picker;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

use super::app::{App, InputMode};

use mouse::handle_mouse_event;
use navigate::handle_navigate;
use picker::handle_picker;

/// Handle a key event in the current input mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Navigate => handle_navigate(app, key),
        InputMode::Picker => handle_picker(app, key),
    }
}

/// Handle a mouse event (clicks only)
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    handle_mouse_event(app, mouse);
}
