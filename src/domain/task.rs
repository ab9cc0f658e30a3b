use super::enums::Category;
use super::key::derive_key;
use chrono::{DateTime, Local, NaiveDate};

/// A child checklist item belonging to exactly one task
#[derive(Debug, Clone, PartialEq)]
pub struct Subtask {
    /// Checklist text (non-empty, trimmed)
    pub text: String,
    pub completed: bool,
    /// Unique identifier, immutable after creation
    pub key: String,
}

impl Subtask {
    pub fn new(text: &str, at: DateTime<Local>) -> Self {
        let text = text.trim().to_string();
        let key = derive_key(&text, at);
        Self {
            text,
            completed: false,
            key,
        }
    }
}

/// A top-level to-do item
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Task text (non-empty, trimmed)
    pub text: String,
    /// Category from the closed set
    pub category: Category,
    /// Due instant; `None` means no deadline, never an empty sentinel
    pub deadline: Option<DateTime<Local>>,
    pub completed: bool,
    pub favorite: bool,
    /// Whether subtasks are shown in the list (view state, not business state)
    pub expanded: bool,
    pub subtasks: Vec<Subtask>,
    /// Unique identifier, immutable after creation
    pub key: String,
}

/// Draft captured by the add-task form
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub text: String,
    pub category: Category,
    pub deadline: Option<NaiveDate>,
}

impl Task {
    /// Create a task from a draft. The caller has already checked that the
    /// text is non-empty after trimming.
    pub fn new(draft: TaskDraft, at: DateTime<Local>) -> Self {
        let text = draft.text.trim().to_string();
        let key = derive_key(&text, at);
        Self {
            text,
            category: draft.category,
            deadline: draft.deadline.and_then(deadline_instant),
            completed: false,
            favorite: false,
            expanded: false,
            subtasks: Vec::new(),
            key,
        }
    }

    /// Overdue = deadline present, in the past, and the task not completed.
    /// Recomputed at render time, never stored.
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        matches!(self.deadline, Some(d) if d < now && !self.completed)
    }

    /// Human-readable due date for row display, e.g. "Mar 05"
    pub fn deadline_label(&self) -> Option<String> {
        self.deadline.map(|d| d.format("%b %d").to_string())
    }
}

/// Normalize a deadline date to the end of that local day, so a task due
/// today does not read as overdue until midnight.
pub fn deadline_instant(date: NaiveDate) -> Option<DateTime<Local>> {
    date.and_hms_opt(23, 59, 59)?
        .and_local_timezone(Local)
        .earliest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn draft(text: &str) -> TaskDraft {
        TaskDraft {
            text: text.to_string(),
            category: Category::Personal,
            deadline: None,
        }
    }

    #[test]
    fn test_task_new_defaults() {
        let task = Task::new(draft("  Buy milk  "), Local::now());
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.category, Category::Personal);
        assert!(task.deadline.is_none());
        assert!(!task.completed);
        assert!(!task.favorite);
        assert!(!task.expanded);
        assert!(task.subtasks.is_empty());
        assert!(task.key.starts_with("Buy milk_"));
    }

    #[test]
    fn test_subtask_new_defaults() {
        let subtask = Subtask::new(" call plumber ", Local::now());
        assert_eq!(subtask.text, "call plumber");
        assert!(!subtask.completed);
        assert!(subtask.key.starts_with("call plumber_"));
    }

    #[test]
    fn test_deadline_normalized_to_end_of_day() {
        let mut d = draft("Taxes");
        d.deadline = Some(NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
        let task = Task::new(d, Local::now());

        let deadline = task.deadline.unwrap();
        assert_eq!(deadline.format("%Y-%m-%d %H:%M:%S").to_string(), "2026-03-05 23:59:59");
        assert_eq!(task.deadline_label().unwrap(), "Mar 05");
    }

    #[test]
    fn test_is_overdue() {
        let now = Local::now();
        let mut task = Task::new(draft("Report"), now);

        // No deadline: never overdue
        assert!(!task.is_overdue(now));

        // Deadline in the past
        task.deadline = Some(now - Duration::hours(1));
        assert!(task.is_overdue(now));

        // Completed tasks are not overdue
        task.completed = true;
        assert!(!task.is_overdue(now));

        // Deadline in the future
        task.completed = false;
        task.deadline = Some(now + Duration::hours(1));
        assert!(!task.is_overdue(now));
    }
}
