use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the input form for adding tasks/subtasks
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = Vec::new();

        let title_text = if form.is_subtask {
            " Add Subtask "
        } else {
            " Add Task "
        };

        // Text field
        lines.push(Line::raw(""));
        let text_label = if form.editing_field == 0 {
            "Text: (editing)"
        } else {
            "Text:"
        };
        lines.push(Line::raw(text_label));
        lines.push(Line::from(vec![
            Span::raw("> "),
            Span::styled(&form.text, modal_title_style()),
            if form.editing_field == 0 {
                Span::styled("█", modal_title_style()) // Cursor
            } else {
                Span::raw("")
            },
        ]));
        lines.push(Line::raw(""));

        if !form.is_subtask {
            // Category selector
            lines.push(Line::from(vec![
                Span::raw("Category: "),
                Span::styled(
                    format!("◂ {} ▸", form.category.label()),
                    modal_title_style(),
                ),
            ]));
            lines.push(Line::raw(""));

            // Deadline field
            let deadline_label = if form.editing_field == 1 {
                "Deadline (YYYY-MM-DD, optional): (editing)"
            } else {
                "Deadline (YYYY-MM-DD, optional):"
            };
            lines.push(Line::raw(deadline_label));
            lines.push(Line::from(vec![
                Span::raw("> "),
                Span::styled(&form.deadline, modal_title_style()),
                if form.editing_field == 1 {
                    Span::styled("█", modal_title_style()) // Cursor
                } else {
                    Span::raw("")
                },
            ]));
            lines.push(Line::raw(""));
        }

        let instructions = if form.is_subtask {
            "Enter to add  ·  Esc to cancel"
        } else {
            "Tab field  ·  ←/→ category  ·  Enter add  ·  Esc cancel"
        };
        lines.push(Line::raw(instructions));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style(app.theme)),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
