//! Task List Operations
//!
//! Pure mutations over the ordered task list, plus the derived layout mode
//! and the transient editing state machine. Each mutation returns whether
//! the list changed, which is what drives a persistence write.

use crate::models::Task;

/// Layout derived from list occupancy
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LayoutMode {
    /// Centered heading, no list rendered
    Empty,
    /// Heading pinned to top, list visible
    Populated,
}

pub fn layout_mode(tasks: &[Task]) -> LayoutMode {
    if tasks.is_empty() {
        LayoutMode::Empty
    } else {
        LayoutMode::Populated
    }
}

/// Next fresh id: max existing id + 1.
/// Keeps ids unique within the list without relying on wall-clock time.
pub fn next_task_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|task| task.id).max().map_or(1, |id| id + 1)
}

/// Append a new task with trimmed text; rejects whitespace-only input.
pub fn add_task(tasks: &mut Vec<Task>, text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    let id = next_task_id(tasks);
    tasks.push(Task::new(id, trimmed.to_string()));
    true
}

/// Delete the task with matching id; absent id is a no-op.
pub fn remove_task(tasks: &mut Vec<Task>, id: u64) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Flip the completed flag for the matching task.
pub fn toggle_task(tasks: &mut [Task], id: u64) -> bool {
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Replace the task's text when the new text trims to something non-empty.
/// The draft is stored as typed; only the emptiness check trims.
pub fn rename_task(tasks: &mut [Task], id: u64, new_text: &str) -> bool {
    if new_text.trim().is_empty() {
        return false;
    }
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            task.text = new_text.to_string();
            true
        }
        None => false,
    }
}

/// Move the dragged task to the target task's current position.
/// Both indices are resolved before the splice, so the dragged task lands
/// at the target's pre-drop index and every other task keeps its relative
/// order. Equal or missing ids are a no-op.
pub fn reorder_task(tasks: &mut Vec<Task>, dragged_id: u64, target_id: u64) -> bool {
    if dragged_id == target_id {
        return false;
    }
    let dragged_index = tasks.iter().position(|task| task.id == dragged_id);
    let target_index = tasks.iter().position(|task| task.id == target_id);
    match (dragged_index, target_index) {
        (Some(from), Some(to)) => {
            let dragged = tasks.remove(from);
            tasks.insert(to, dragged);
            true
        }
        _ => false,
    }
}

/// Transient per-task edit mode. A sum type so "no task being edited"
/// cannot coexist with a leftover draft.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { id: u64, draft: String },
}

impl EditState {
    /// Enter editing for a task, seeding the draft with its current text.
    /// Refused for completed tasks.
    pub fn begin(task: &Task) -> Option<Self> {
        if task.completed {
            return None;
        }
        Some(Self::Editing {
            id: task.id,
            draft: task.text.clone(),
        })
    }

    pub fn is_editing(&self, task_id: u64) -> bool {
        matches!(self, Self::Editing { id, .. } if *id == task_id)
    }

    pub fn set_draft(&mut self, text: String) {
        if let Self::Editing { draft, .. } = self {
            *draft = text;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn make_task(id: u64, text: &str) -> Task {
        Task::new(id, text.to_string())
    }

    fn make_list() -> Vec<Task> {
        vec![make_task(1, "A"), make_task(2, "B"), make_task(3, "C")]
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut tasks = Vec::new();
        assert!(add_task(&mut tasks, "  Buy milk  "));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);
        assert_eq!(layout_mode(&tasks), LayoutMode::Populated);
    }

    #[test]
    fn test_add_rejects_whitespace() {
        let mut tasks = make_list();
        assert!(!add_task(&mut tasks, ""));
        assert!(!add_task(&mut tasks, "   "));
        assert_eq!(tasks, make_list());
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "one");
        add_task(&mut tasks, "two");
        add_task(&mut tasks, "three");
        assert_eq!(tasks[0].id, 1);
        assert_eq!(tasks[1].id, 2);
        assert_eq!(tasks[2].id, 3);

        // Removing the newest task must not hand out an id still in use
        remove_task(&mut tasks, 2);
        add_task(&mut tasks, "four");
        let mut ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut tasks = make_list();
        assert!(toggle_task(&mut tasks, 2));
        assert!(tasks[1].completed);
        assert!(toggle_task(&mut tasks, 2));
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut tasks = make_list();
        assert!(!toggle_task(&mut tasks, 99));
        assert_eq!(tasks, make_list());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut tasks = make_list();
        assert!(!remove_task(&mut tasks, 99));
        assert_eq!(tasks, make_list());
    }

    #[test]
    fn test_remove_existing() {
        let mut tasks = make_list();
        assert!(remove_task(&mut tasks, 2));
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_rename_replaces_text() {
        let mut tasks = make_list();
        assert!(rename_task(&mut tasks, 1, "Buy milk 2%"));
        assert_eq!(tasks[0].text, "Buy milk 2%");
    }

    #[test]
    fn test_rename_empty_is_noop() {
        let mut tasks = make_list();
        assert!(!rename_task(&mut tasks, 1, "   "));
        assert_eq!(tasks[0].text, "A");
    }

    #[test]
    fn test_rename_missing_is_noop() {
        let mut tasks = make_list();
        assert!(!rename_task(&mut tasks, 99, "ghost"));
        assert_eq!(tasks, make_list());
    }

    #[test]
    fn test_reorder_same_id_is_noop() {
        let mut tasks = make_list();
        assert!(!reorder_task(&mut tasks, 2, 2));
        assert_eq!(tasks, make_list());
    }

    #[test]
    fn test_reorder_missing_is_noop() {
        let mut tasks = make_list();
        assert!(!reorder_task(&mut tasks, 1, 99));
        assert!(!reorder_task(&mut tasks, 99, 1));
        assert_eq!(tasks, make_list());
    }

    #[test]
    fn test_reorder_last_to_front() {
        // [A, B, C] with C dragged onto A -> [C, A, B]
        let mut tasks = make_list();
        assert!(reorder_task(&mut tasks, 3, 1));
        let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reorder_front_to_later() {
        // Dragging forward lands at the target's pre-drop index
        let mut tasks = make_list();
        assert!(reorder_task(&mut tasks, 1, 3));
        let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_layout_mode_empty() {
        assert_eq!(layout_mode(&[]), LayoutMode::Empty);
    }

    #[test]
    fn test_edit_begin_refused_for_completed() {
        let mut task = make_task(1, "done");
        task.completed = true;
        assert!(EditState::begin(&task).is_none());
    }

    #[test]
    fn test_edit_begin_seeds_draft() {
        let task = make_task(1, "draft me");
        let state = EditState::begin(&task).expect("editable task");
        assert!(state.is_editing(1));
        assert!(!state.is_editing(2));
        assert_eq!(
            state,
            EditState::Editing {
                id: 1,
                draft: "draft me".to_string()
            }
        );
    }

    #[test]
    fn test_edit_set_draft() {
        let task = make_task(1, "old");
        let mut state = EditState::begin(&task).expect("editable task");
        state.set_draft("new".to_string());
        assert_eq!(
            state,
            EditState::Editing {
                id: 1,
                draft: "new".to_string()
            }
        );

        // Draft updates are ignored outside of editing
        let mut idle = EditState::Idle;
        idle.set_draft("ignored".to_string());
        assert_eq!(idle, EditState::Idle);
    }
}
