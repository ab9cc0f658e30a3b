//! Pure state transitions over the canonical task sequence.
//!
//! Every operation consumes the current snapshot and returns the next one.
//! Empty text and out-of-range indices return the input unchanged; callers
//! resolve indices from stable keys via `position_of` immediately before
//! mutating, never from a filtered view.

use super::task::{Subtask, Task, TaskDraft};
use chrono::{DateTime, Local};

/// Append a new task built from `draft`. No-op if the draft text trims to
/// empty.
pub fn add_task(tasks: Vec<Task>, draft: TaskDraft, at: DateTime<Local>) -> Vec<Task> {
    if draft.text.trim().is_empty() {
        return tasks;
    }
    let mut next = tasks;
    next.push(Task::new(draft, at));
    next
}

/// Flip the completed flag on the task at `index`
pub fn toggle_completion(mut tasks: Vec<Task>, index: usize) -> Vec<Task> {
    if let Some(task) = tasks.get_mut(index) {
        task.completed = !task.completed;
    }
    tasks
}

/// Flip the favorite flag on the task at `index`
pub fn toggle_favorite(mut tasks: Vec<Task>, index: usize) -> Vec<Task> {
    if let Some(task) = tasks.get_mut(index) {
        task.favorite = !task.favorite;
    }
    tasks
}

/// Flip the expanded flag on the task at `index`. Pure view state; never
/// affects filtering or identity.
pub fn toggle_expansion(mut tasks: Vec<Task>, index: usize) -> Vec<Task> {
    if let Some(task) = tasks.get_mut(index) {
        task.expanded = !task.expanded;
    }
    tasks
}

/// Append a subtask to the task at `task_index`. No-op if the text trims to
/// empty.
pub fn add_subtask(
    mut tasks: Vec<Task>,
    task_index: usize,
    text: &str,
    at: DateTime<Local>,
) -> Vec<Task> {
    if text.trim().is_empty() {
        return tasks;
    }
    if let Some(task) = tasks.get_mut(task_index) {
        task.subtasks.push(Subtask::new(text, at));
    }
    tasks
}

/// Flip the completed flag on the identified subtask
pub fn toggle_subtask_completion(
    mut tasks: Vec<Task>,
    task_index: usize,
    subtask_index: usize,
) -> Vec<Task> {
    if let Some(subtask) = tasks
        .get_mut(task_index)
        .and_then(|t| t.subtasks.get_mut(subtask_index))
    {
        subtask.completed = !subtask.completed;
    }
    tasks
}

/// Canonical index of the task with the given key
pub fn position_of(tasks: &[Task], key: &str) -> Option<usize> {
    tasks.iter().position(|t| t.key == key)
}

/// Index of the subtask with the given key within its parent
pub fn subtask_position_of(task: &Task, key: &str) -> Option<usize> {
    task.subtasks.iter().position(|s| s.key == key)
}

/// Result of removing completed tasks from the sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    /// Non-completed tasks, relative order preserved
    pub remaining: Vec<Task>,
    /// Completed tasks, relative order preserved
    pub removed: Vec<Task>,
}

/// Partition the sequence by the completed flag
pub fn clear_completed(tasks: Vec<Task>) -> Partition {
    let (removed, remaining): (Vec<Task>, Vec<Task>) =
        tasks.into_iter().partition(|t| t.completed);
    Partition { remaining, removed }
}

/// Restore a removed batch by appending it. Original positions are not
/// remembered.
pub fn undo_clear(mut tasks: Vec<Task>, removed: Vec<Task>) -> Vec<Task> {
    tasks.extend(removed);
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use pretty_assertions::assert_eq;

    fn draft(text: &str, category: Category) -> TaskDraft {
        TaskDraft {
            text: text.to_string(),
            category,
            deadline: None,
        }
    }

    fn fixture(specs: &[(&str, bool)]) -> Vec<Task> {
        specs
            .iter()
            .map(|(text, completed)| {
                let mut task = Task::new(draft(text, Category::Others), Local::now());
                task.completed = *completed;
                task
            })
            .collect()
    }

    #[test]
    fn test_add_task_empty_text_is_noop() {
        let tasks = fixture(&[("Existing", false)]);
        let before = tasks.clone();

        let after = add_task(tasks, draft("   ", Category::Work), Local::now());
        assert_eq!(after, before);

        let after = add_task(after, draft("", Category::Work), Local::now());
        assert_eq!(after, before);
    }

    #[test]
    fn test_add_task_appends_with_defaults() {
        let tasks = add_task(
            Vec::new(),
            draft("Buy milk", Category::Shopping),
            Local::now(),
        );

        assert_eq!(tasks.len(), 1);
        let task = &tasks[0];
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.category, Category::Shopping);
        assert!(!task.completed);
        assert!(!task.favorite);
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_add_task_retains_existing() {
        let tasks = fixture(&[("Existing", false)]);
        let tasks = add_task(tasks, draft("New", Category::Work), Local::now());

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "Existing");
        assert_eq!(tasks[1].text, "New");
    }

    #[test]
    fn test_toggle_completion_double_is_identity() {
        let tasks = fixture(&[("A", false), ("B", true)]);
        let before = tasks.clone();

        let tasks = toggle_completion(tasks, 1);
        assert!(!tasks[1].completed);

        let tasks = toggle_completion(tasks, 1);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_toggle_favorite_double_leaves_task_untouched() {
        let tasks = fixture(&[("A", false), ("B", false)]);
        let before = tasks.clone();

        let tasks = toggle_favorite(tasks, 0);
        assert!(tasks[0].favorite);
        assert_eq!(tasks[1], before[1]);

        let tasks = toggle_favorite(tasks, 0);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let tasks = fixture(&[("A", false)]);
        let before = tasks.clone();

        assert_eq!(toggle_completion(tasks.clone(), 5), before);
        assert_eq!(toggle_favorite(tasks.clone(), 5), before);
        assert_eq!(toggle_expansion(tasks.clone(), 5), before);
        assert_eq!(toggle_subtask_completion(tasks, 0, 0), before);
    }

    #[test]
    fn test_add_subtask() {
        let tasks = fixture(&[("Parent", false)]);
        let tasks = add_subtask(tasks, 0, "  child  ", Local::now());

        assert_eq!(tasks[0].subtasks.len(), 1);
        assert_eq!(tasks[0].subtasks[0].text, "child");
        assert!(!tasks[0].subtasks[0].completed);
    }

    #[test]
    fn test_add_subtask_empty_text_is_noop() {
        let tasks = fixture(&[("Parent", false)]);
        let before = tasks.clone();
        assert_eq!(add_subtask(tasks, 0, "   ", Local::now()), before);
    }

    #[test]
    fn test_toggle_subtask_completion() {
        let tasks = fixture(&[("Parent", false)]);
        let tasks = add_subtask(tasks, 0, "child", Local::now());

        let tasks = toggle_subtask_completion(tasks, 0, 0);
        assert!(tasks[0].subtasks[0].completed);
        assert!(!tasks[0].completed);

        let tasks = toggle_subtask_completion(tasks, 0, 0);
        assert!(!tasks[0].subtasks[0].completed);
    }

    #[test]
    fn test_position_of() {
        let tasks = fixture(&[("A", false), ("B", false)]);
        let key_b = tasks[1].key.clone();

        assert_eq!(position_of(&tasks, &key_b), Some(1));
        assert_eq!(position_of(&tasks, "missing_0"), None);
    }

    #[test]
    fn test_clear_completed_partitions() {
        let tasks = fixture(&[("A", false), ("B", true), ("C", false), ("D", true)]);
        let all = tasks.clone();

        let part = clear_completed(tasks);
        assert_eq!(part.remaining.len(), 2);
        assert_eq!(part.removed.len(), 2);
        assert_eq!(part.remaining[0].text, "A");
        assert_eq!(part.remaining[1].text, "C");
        assert_eq!(part.removed[0].text, "B");
        assert_eq!(part.removed[1].text, "D");

        // Partition completeness: nothing lost, nothing duplicated
        let mut rejoined = part.remaining.clone();
        rejoined.extend(part.removed.clone());
        assert_eq!(rejoined.len(), all.len());
        for task in &all {
            assert_eq!(rejoined.iter().filter(|t| t.key == task.key).count(), 1);
        }
    }

    #[test]
    fn test_clear_completed_with_none_completed() {
        let tasks = fixture(&[("A", false)]);
        let before = tasks.clone();

        let part = clear_completed(tasks);
        assert_eq!(part.remaining, before);
        assert!(part.removed.is_empty());
    }

    #[test]
    fn test_undo_round_trip_is_permutation() {
        let tasks = fixture(&[("A", false), ("B", true), ("C", true)]);
        let all = tasks.clone();

        let part = clear_completed(tasks);
        let restored = undo_clear(part.remaining, part.removed);

        assert_eq!(restored.len(), all.len());
        for task in &all {
            assert!(restored.iter().any(|t| t.key == task.key));
        }
        // Removed batch comes back appended, after the survivors
        assert_eq!(restored[0].text, "A");
        assert_eq!(restored[1].text, "B");
        assert_eq!(restored[2].text, "C");
    }

    #[test]
    fn test_undo_with_empty_batch_is_noop() {
        let tasks = fixture(&[("A", false)]);
        let before = tasks.clone();
        assert_eq!(undo_clear(tasks, Vec::new()), before);
    }

    // Concrete scenario from the product notes: clear then undo with one
    // task in each half.
    #[test]
    fn test_clear_then_undo_scenario() {
        let tasks = fixture(&[("A", false), ("B", true)]);

        let part = clear_completed(tasks);
        assert_eq!(part.remaining.len(), 1);
        assert_eq!(part.remaining[0].text, "A");
        assert_eq!(part.removed.len(), 1);
        assert_eq!(part.removed[0].text, "B");

        let restored = undo_clear(part.remaining, part.removed);
        assert_eq!(restored[0].text, "A");
        assert_eq!(restored[1].text, "B");
    }
}
