//! Derived views over the canonical store: the search filter, the flattened
//! visible row list, and reconciliation of a reordered visible sequence
//! back into canonical order. Nothing here mutates the store.

use super::task::Task;

/// A row in the visible (filtered, flattened) list. Rows carry stable keys,
/// not positions: callers resolve the canonical index from the key at
/// mutation time.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow {
    /// Depth in the tree (0 = task, 1 = subtask)
    pub depth: usize,
    /// Whether this is the last subtask of its parent
    pub is_last: bool,
    /// Key of the task (or the subtask's parent task)
    pub task_key: String,
    /// Subtask key (None for task rows)
    pub subtask_key: Option<String>,
}

/// Tasks whose text contains `query` case-insensitively. Empty query
/// returns all tasks unchanged in order.
pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str) -> Vec<&'a Task> {
    if query.is_empty() {
        return tasks.iter().collect();
    }
    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.text.to_lowercase().contains(&needle))
        .collect()
}

/// Flatten the visible tasks into a linear row list for rendering. Subtask
/// rows appear only when the parent is expanded.
pub fn flatten_visible(tasks: &[Task], query: &str) -> Vec<FlatRow> {
    let mut rows = Vec::new();

    for task in filter_tasks(tasks, query) {
        rows.push(FlatRow {
            depth: 0,
            is_last: false,
            task_key: task.key.clone(),
            subtask_key: None,
        });

        if task.expanded && !task.subtasks.is_empty() {
            let count = task.subtasks.len();
            for (idx, subtask) in task.subtasks.iter().enumerate() {
                rows.push(FlatRow {
                    depth: 1,
                    is_last: idx == count - 1,
                    task_key: task.key.clone(),
                    subtask_key: Some(subtask.key.clone()),
                });
            }
        }
    }

    rows
}

/// Reconcile a reordered visible sequence back into the canonical order.
///
/// `visible_keys` is the full post-drag ordering of the visible tasks.
/// Slots that held visible tasks are refilled in that new order; tasks
/// hidden by the filter keep their slots, so their relative positions are
/// preserved. With no filter active the visible sequence is the new
/// canonical order directly.
///
/// Total over its input: stale keys are skipped, and visible tasks missing
/// from `visible_keys` retain their relative order at the end of the
/// visible run.
pub fn reconcile_order(tasks: Vec<Task>, visible_keys: &[String]) -> Vec<Task> {
    let mut slots: Vec<Option<Task>> = tasks.into_iter().map(Some).collect();
    let mut pool: Vec<Task> = Vec::new();
    let mut visible_slots: Vec<usize> = Vec::new();

    for (idx, slot) in slots.iter_mut().enumerate() {
        let is_visible = matches!(slot, Some(t) if visible_keys.iter().any(|k| *k == t.key));
        if is_visible {
            if let Some(task) = slot.take() {
                pool.push(task);
                visible_slots.push(idx);
            }
        }
    }

    let mut ordered: Vec<Task> = Vec::with_capacity(pool.len());
    for key in visible_keys {
        if let Some(pos) = pool.iter().position(|t| t.key == *key) {
            ordered.push(pool.remove(pos));
        }
    }
    ordered.append(&mut pool);

    let mut refill = ordered.into_iter();
    for idx in visible_slots {
        slots[idx] = refill.next();
    }

    slots.into_iter().flatten().collect()
}

/// Tree connector glyph for subtask rows
pub fn tree_connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}
