use crate::domain::{Category, Theme};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Black)
    }
}

/// Selected row highlight style
pub fn selected_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    }
}

/// Completed task style (strikethrough + dim)
pub fn completed_style(theme: Theme) -> Style {
    default_style(theme)
        .fg(Color::DarkGray)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Favorite star style
pub fn favorite_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Unfilled star style
pub fn star_outline_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Overdue deadline style
pub fn overdue_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Non-overdue deadline style
pub fn deadline_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Category badge style, keyed by the closed category set
pub fn category_style(category: Category) -> Style {
    let color = match category {
        Category::Personal => Color::LightBlue,
        Category::Work => Color::Magenta,
        Category::Shopping => Color::Green,
        Category::Others => Color::Gray,
    };
    Style::default().fg(color)
}

/// Tree connector style (for subtasks)
pub fn tree_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Title style for panes
pub fn title_style(theme: Theme) -> Style {
    let color = if theme.is_dark() {
        Color::Cyan
    } else {
        Color::Blue
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Active search query style
pub fn search_style(theme: Theme) -> Style {
    default_style(theme).add_modifier(Modifier::BOLD)
}

/// Modal background style
pub fn modal_bg_style(theme: Theme) -> Style {
    if theme.is_dark() {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    } else {
        Style::default().bg(Color::Gray).fg(Color::Black)
    }
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
