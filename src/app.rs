use crate::domain::{store, views, Category, FlatRow, Task, TaskDraft, Theme, UiMode};
use chrono::{Local, NaiveDate};

/// Maximum task/subtask text length, enforced at the input form
pub const MAX_TEXT_LEN: usize = 50;

/// Input form state for adding tasks/subtasks
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub text: String,
    pub deadline: String, // YYYY-MM-DD, empty for no deadline
    pub category: Category,
    pub is_subtask: bool,
    /// Parent task key when adding a subtask
    pub parent_key: Option<String>,
    pub editing_field: usize, // 0 = text, 1 = deadline
}

/// Main application state.
///
/// Owns the canonical task sequence, the search query, the theme flag, and
/// the single undo slot. Every mutation resolves its target from the
/// selected row's stable key via `store::position_of` immediately before
/// calling a store operation — row positions in the filtered view are never
/// used as store indices.
pub struct AppState {
    pub tasks: Vec<Task>,
    pub query: String,
    pub theme: Theme,
    /// Most recent batch removed by clear-completed; overwritten on each
    /// clear, taken by undo. Depth-1 history by design.
    pub last_removed: Option<Vec<Task>>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            tasks: Vec::new(),
            query: String::new(),
            theme,
            last_removed: None,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
        }
    }

    /// Rows currently visible, derived from the canonical store and the
    /// search query
    pub fn visible_rows(&self) -> Vec<FlatRow> {
        views::flatten_visible(&self.tasks, &self.query)
    }

    /// The currently selected row, if any
    pub fn selected_row(&self) -> Option<FlatRow> {
        self.visible_rows().into_iter().nth(self.selected_index)
    }

    /// Keys of visible tasks in visible order (subtask rows excluded)
    fn visible_task_keys(&self) -> Vec<String> {
        views::filter_tasks(&self.tasks, &self.query)
            .into_iter()
            .map(|t| t.key.clone())
            .collect()
    }

    /// Keep the selection inside the visible row range
    fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_rows().len() {
            self.selected_index += 1;
        }
    }

    /// Re-select the task row with the given key after a reorder
    fn select_task(&mut self, key: &str) {
        if let Some(idx) = self
            .visible_rows()
            .iter()
            .position(|r| r.task_key == key && r.subtask_key.is_none())
        {
            self.selected_index = idx;
        }
    }

    /// Toggle completion on the selected task or subtask
    pub fn toggle_completion_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            let tasks = std::mem::take(&mut self.tasks);
            self.tasks = match store::position_of(&tasks, &row.task_key) {
                Some(task_idx) => {
                    if let Some(sub_key) = &row.subtask_key {
                        match store::subtask_position_of(&tasks[task_idx], sub_key) {
                            Some(sub_idx) => {
                                store::toggle_subtask_completion(tasks, task_idx, sub_idx)
                            }
                            None => tasks,
                        }
                    } else {
                        store::toggle_completion(tasks, task_idx)
                    }
                }
                None => tasks,
            };
        }
    }

    /// Toggle the favorite star on the selected task (task rows only)
    pub fn toggle_favorite_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            if row.subtask_key.is_some() {
                return;
            }
            let tasks = std::mem::take(&mut self.tasks);
            self.tasks = match store::position_of(&tasks, &row.task_key) {
                Some(task_idx) => store::toggle_favorite(tasks, task_idx),
                None => tasks,
            };
        }
    }

    /// Expand or collapse the selected task's subtasks (task rows only)
    pub fn toggle_expansion_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            if row.subtask_key.is_some() {
                return;
            }
            let tasks = std::mem::take(&mut self.tasks);
            self.tasks = match store::position_of(&tasks, &row.task_key) {
                Some(task_idx) => store::toggle_expansion(tasks, task_idx),
                None => tasks,
            };
            self.clamp_selection();
        }
    }

    /// Remove completed tasks, keeping the batch for a single undo. A
    /// second clear before an undo overwrites the pending batch.
    pub fn clear_completed(&mut self) {
        let part = store::clear_completed(std::mem::take(&mut self.tasks));
        self.tasks = part.remaining;
        self.last_removed = Some(part.removed);
        self.clamp_selection();
    }

    /// Restore the most recently cleared batch, appended to the list.
    /// Usable exactly once per clear.
    pub fn undo_clear(&mut self) {
        if let Some(removed) = self.last_removed.take() {
            self.tasks = store::undo_clear(std::mem::take(&mut self.tasks), removed);
        }
    }

    /// Number of tasks restorable by undo, for the status bar
    pub fn pending_undo_count(&self) -> usize {
        self.last_removed.as_ref().map_or(0, Vec::len)
    }

    /// Move the selected task one position up in the visible sequence,
    /// reconciled into canonical order (hidden tasks keep their slots)
    pub fn move_selected_up(&mut self) {
        self.move_selected_by(true);
    }

    /// Move the selected task one position down in the visible sequence
    pub fn move_selected_down(&mut self) {
        self.move_selected_by(false);
    }

    fn move_selected_by(&mut self, up: bool) {
        let row = match self.selected_row() {
            Some(row) if row.subtask_key.is_none() => row,
            _ => return, // subtasks keep their order within the parent
        };

        let mut order = self.visible_task_keys();
        let pos = match order.iter().position(|k| *k == row.task_key) {
            Some(pos) => pos,
            None => return,
        };

        if up {
            if pos == 0 {
                return;
            }
            order.swap(pos, pos - 1);
        } else {
            if pos + 1 >= order.len() {
                return;
            }
            order.swap(pos, pos + 1);
        }

        self.tasks = views::reconcile_order(std::mem::take(&mut self.tasks), &order);
        self.select_task(&row.task_key);
    }

    /// Start adding a new task (opens the input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            text: String::new(),
            deadline: String::new(),
            category: Category::Personal,
            is_subtask: false,
            parent_key: None,
            editing_field: 0,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Start adding a subtask under the selected task's parent
    pub fn start_add_subtask(&mut self) {
        if let Some(row) = self.selected_row() {
            self.input_form = Some(InputFormState {
                text: String::new(),
                deadline: String::new(),
                category: Category::Personal,
                is_subtask: true,
                parent_key: Some(row.task_key),
                editing_field: 0,
            });
            self.ui_mode = UiMode::AddingSubtask;
        }
    }

    /// Switch between the text and deadline fields (task form only)
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            if !form.is_subtask {
                form.editing_field = (form.editing_field + 1) % 2;
            }
        }
    }

    /// Add a character to the current form field
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    if form.text.chars().count() < MAX_TEXT_LEN {
                        form.text.push(c);
                    }
                }
                1 => form.deadline.push(c),
                _ => {}
            }
        }
    }

    /// Backspace in the current form field
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.text.pop();
                }
                1 => {
                    form.deadline.pop();
                }
                _ => {}
            }
        }
    }

    /// Cycle the form's category forward or backward
    pub fn input_form_cycle_category(&mut self, forward: bool) {
        if let Some(form) = &mut self.input_form {
            form.category = if forward {
                form.category.next()
            } else {
                form.category.prev()
            };
        }
    }

    /// Submit the input form. Empty text falls through as a store no-op; an
    /// unparseable deadline is treated as no deadline.
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            let now = Local::now();
            if form.is_subtask {
                if let Some(task_idx) = form
                    .parent_key
                    .as_deref()
                    .and_then(|key| store::position_of(&self.tasks, key))
                {
                    self.tasks = store::add_subtask(
                        std::mem::take(&mut self.tasks),
                        task_idx,
                        &form.text,
                        now,
                    );
                }
            } else {
                let deadline = NaiveDate::parse_from_str(form.deadline.trim(), "%Y-%m-%d").ok();
                let draft = TaskDraft {
                    text: form.text,
                    category: form.category,
                    deadline,
                };
                self.tasks = store::add_task(std::mem::take(&mut self.tasks), draft, now);
            }
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel the input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Enter search mode
    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::Searching;
    }

    /// Append a character to the search query
    pub fn search_add_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    /// Remove the last character from the search query
    pub fn search_backspace(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    /// Leave search mode, keeping the active filter
    pub fn finish_search(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Leave search mode and drop the filter
    pub fn cancel_search(&mut self) {
        self.query.clear();
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// Flip the in-memory theme flag. The caller persists the new value
    /// fire-and-forget; a failed write is not surfaced.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
