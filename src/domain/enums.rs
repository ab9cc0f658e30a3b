use serde::{Deserialize, Serialize};

/// Closed category set for tasks. Adding a fifth value is a data-model
/// change, not a runtime one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Personal,
    Work,
    Shopping,
    Others,
}

impl Category {
    /// Parse a category from its display label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "personal" => Some(Self::Personal),
            "work" => Some(Self::Work),
            "shopping" => Some(Self::Shopping),
            "others" => Some(Self::Others),
            _ => None,
        }
    }

    /// Display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Shopping => "Shopping",
            Self::Others => "Others",
        }
    }

    /// All categories, in form-cycling order
    pub fn all() -> &'static [Category] {
        &[Self::Personal, Self::Work, Self::Shopping, Self::Others]
    }

    /// Next category in cycling order (wraps around)
    pub fn next(&self) -> Category {
        let all = Self::all();
        let pos = all.iter().position(|c| c == self).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }

    /// Previous category in cycling order (wraps around)
    pub fn prev(&self) -> Category {
        let all = Self::all();
        let pos = all.iter().position(|c| c == self).unwrap_or(0);
        all[(pos + all.len() - 1) % all.len()]
    }
}

/// Color theme preference, persisted in prefs.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse theme from its stored tag ("light"/"dark")
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Convert theme to its stored tag
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme
    pub fn toggled(&self) -> Theme {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    AddingSubtask,
    Searching,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label() {
        assert_eq!(Category::from_label("Work"), Some(Category::Work));
        assert_eq!(Category::from_label("shopping"), Some(Category::Shopping));
        assert_eq!(Category::from_label("PERSONAL"), Some(Category::Personal));
        assert_eq!(Category::from_label("errands"), None);
    }

    #[test]
    fn test_category_cycling() {
        assert_eq!(Category::Personal.next(), Category::Work);
        assert_eq!(Category::Others.next(), Category::Personal);
        assert_eq!(Category::Personal.prev(), Category::Others);
        assert_eq!(Category::Work.prev(), Category::Personal);
    }

    #[test]
    fn test_theme_tags() {
        assert_eq!(Theme::from_tag("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_tag("LIGHT"), Some(Theme::Light));
        assert_eq!(Theme::from_tag("sepia"), None);
        assert_eq!(Theme::Dark.to_tag(), "dark");
        assert_eq!(Theme::Light.to_tag(), "light");
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }
}
