use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{hint_style, search_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the bottom status bar: the search query while typing, the active
/// filter afterwards, plus theme and pending-undo hints
pub fn render_status_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();

    if app.ui_mode == UiMode::Searching {
        spans.push(Span::raw(" /"));
        spans.push(Span::styled(app.query.clone(), search_style(app.theme)));
        spans.push(Span::styled("█", search_style(app.theme)));
        spans.push(Span::styled(
            "   Enter keep filter · Esc clear",
            hint_style(),
        ));
    } else if !app.query.is_empty() {
        spans.push(Span::raw(" filter: "));
        spans.push(Span::styled(app.query.clone(), search_style(app.theme)));
        spans.push(Span::styled("   Esc clears", hint_style()));
    } else {
        spans.push(Span::styled(" / to search", hint_style()));
    }

    let undo_count = app.pending_undo_count();
    if undo_count > 0 {
        spans.push(Span::styled(
            format!("   u restores {} cleared", undo_count),
            hint_style(),
        ));
    }

    spans.push(Span::styled(
        format!("   theme: {}", app.theme.to_tag()),
        hint_style(),
    ));

    let paragraph = Paragraph::new(Line::from(spans));
    f.render_widget(paragraph, area);
}
