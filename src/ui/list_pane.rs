use crate::app::AppState;
use crate::domain::{store, tree_connector, Subtask, Task};
use crate::ui::styles::{
    border_style, category_style, completed_style, deadline_style, default_style, favorite_style,
    overdue_style, selected_style, star_outline_style, title_style, tree_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let now = Local::now();
    let rows = app.visible_rows();

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let task_idx = store::position_of(&app.tasks, &row.task_key)?;
            let task = &app.tasks[task_idx];

            let line = if let Some(sub_key) = &row.subtask_key {
                let sub_idx = store::subtask_position_of(task, sub_key)?;
                create_subtask_line(app, &task.subtasks[sub_idx], row.is_last)
            } else {
                create_task_line(app, task, now)
            };

            let item = if idx == app.selected_index {
                ListItem::new(line).style(selected_style(app.theme))
            } else {
                ListItem::new(line)
            };
            Some(item)
        })
        .collect();

    let open = app.tasks.iter().filter(|t| !t.completed).count();
    let title = if app.query.is_empty() {
        format!(" Slate — {} tasks, {} open ", app.tasks.len(), open)
    } else {
        format!(" Slate — {} of {} match ", rows.iter().filter(|r| r.subtask_key.is_none()).count(), app.tasks.len())
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app.theme))
            .title(Span::styled(title, title_style(app.theme))),
    );

    f.render_widget(list, area);
}

/// Build the display line for a task row
fn create_task_line<'a>(app: &AppState, task: &'a Task, now: chrono::DateTime<Local>) -> Line<'a> {
    let mut spans = Vec::new();

    // Checkbox
    spans.push(Span::raw(if task.completed { "[x] " } else { "[ ] " }));

    // Favorite star
    if task.favorite {
        spans.push(Span::styled("★ ", favorite_style()));
    } else {
        spans.push(Span::styled("☆ ", star_outline_style()));
    }

    // Expansion marker for tasks with subtasks
    if !task.subtasks.is_empty() {
        spans.push(Span::raw(if task.expanded { "▾ " } else { "▸ " }));
    }

    // Task text, struck through when completed
    let text_style = if task.completed {
        completed_style(app.theme)
    } else {
        default_style(app.theme)
    };
    spans.push(Span::styled(task.text.as_str(), text_style));

    // Category badge
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        format!("[{}]", task.category.label()),
        category_style(task.category),
    ));

    // Due date, red when overdue (recomputed at render time)
    if let Some(label) = task.deadline_label() {
        let style = if task.is_overdue(now) {
            overdue_style()
        } else {
            deadline_style()
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("due {}", label), style));
        if task.is_overdue(now) {
            spans.push(Span::styled(" !", overdue_style()));
        }
    }

    Line::from(spans)
}

/// Build the display line for a subtask row
fn create_subtask_line<'a>(app: &AppState, subtask: &'a Subtask, is_last: bool) -> Line<'a> {
    let text_style = if subtask.completed {
        completed_style(app.theme)
    } else {
        default_style(app.theme)
    };

    Line::from(vec![
        Span::raw("    "),
        Span::styled(tree_connector(is_last), tree_style()),
        Span::raw(" "),
        Span::raw(if subtask.completed { "[x] " } else { "[ ] " }),
        Span::styled(subtask.text.as_str(), text_style),
    ])
}
