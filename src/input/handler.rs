use crate::app::AppState;
use crate::domain::UiMode;
use crate::persistence;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::AddingSubtask => handle_input_form_mode(app, key),
        UiMode::Searching => handle_search_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation (with Shift modifier for reordering)
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_up();
            } else {
                app.move_selection_up();
            }
            Ok(false)
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.move_selected_down();
            } else {
                app.move_selection_down();
            }
            Ok(false)
        }

        // Toggle completion
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.toggle_completion_selected();
            Ok(false)
        }

        // Toggle favorite star
        KeyCode::Char('f') | KeyCode::Char('F') => {
            app.toggle_favorite_selected();
            Ok(false)
        }

        // Expand/collapse subtasks
        KeyCode::Tab => {
            app.toggle_expansion_selected();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') => {
            app.start_add_task();
            Ok(false)
        }

        // Add subtask under the selected task
        KeyCode::Char('A') => {
            app.start_add_subtask();
            Ok(false)
        }

        // Search
        KeyCode::Char('/') => {
            app.start_search();
            Ok(false)
        }

        // Drop an active filter
        KeyCode::Esc => {
            app.cancel_search();
            Ok(false)
        }

        // Clear completed tasks (undoable once)
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.clear_completed();
            Ok(false)
        }

        // Undo the last clear
        KeyCode::Char('u') | KeyCode::Char('U') => {
            app.undo_clear();
            Ok(false)
        }

        // Toggle theme; the write is fire-and-forget, a failure only means
        // the default theme on next start
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
            let _ = persistence::save_theme(app.theme);
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the add-task/add-subtask form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }
        KeyCode::Tab => {
            app.input_form_toggle_field();
            Ok(false)
        }
        KeyCode::Left => {
            app.input_form_cycle_category(false);
            Ok(false)
        }
        KeyCode::Right => {
            app.input_form_cycle_category(true);
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while typing a search query
fn handle_search_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Keep the filter active
        KeyCode::Enter => {
            app.finish_search();
            Ok(false)
        }
        // Drop the filter entirely
        KeyCode::Esc => {
            app.cancel_search();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.search_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.search_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
