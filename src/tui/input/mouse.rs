use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::tui::app::{App, InputMode};
use crate::tui::render::picker::list_row_at;

pub(super) fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_click(app, Position::new(mouse.column, mouse.row));
        }
        MouseEventKind::ScrollDown if popup_contains(app, mouse.column, mouse.row) => {
            app.move_highlight(1);
        }
        MouseEventKind::ScrollUp if popup_contains(app, mouse.column, mouse.row) => {
            app.move_highlight(-1);
        }
        _ => {}
    }
}

fn popup_contains(app: &App, column: u16, row: u16) -> bool {
    app.picker.open
        && app
            .popup_area
            .is_some_and(|r| r.contains(Position::new(column, row)))
}

fn handle_click(app: &mut App, pos: Position) {
    let in_anchor = app.picker_anchor.is_some_and(|r| r.contains(pos));
    let popup: Option<Rect> = if app.picker.open { app.popup_area } else { None };

    if let Some(area) = popup.filter(|r| r.contains(pos)) {
        if let Some(index) = list_row_at(area, pos.y, app.picker.scroll) {
            let id = app.candidates().get(index).map(|e| e.id.clone());
            if let Some(id) = id {
                app.picker.highlight = index;
                app.toggle_entity(&id);
            }
        }
        return;
    }

    if in_anchor {
        app.input_mode = InputMode::Picker;
        if app.picker.open {
            app.close_picker();
        } else {
            app.open_picker();
        }
        return;
    }

    // Outside both the control and its popup: dismiss
    if app.picker.open {
        app.close_picker();
    }
}
