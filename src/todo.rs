//! Todo State
//!
//! Task list with filtering and a single inline edit session.
//! Tasks are addressed by their stable `TaskId`; list positions shift on
//! delete and differ between filtered views, so no operation takes one.

use reactive_stores::Store;
use thiserror::Error;

use crate::models::{EditSession, Filter, Task, TaskId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("No task is being edited")]
    NoActiveEdit,

    #[error("Task ids exhausted")]
    IdsExhausted,
}

pub type TodoResult<T> = Result<T, TodoError>;

/// Todo list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
    /// Current view filter
    pub filter: Filter,
    /// Active inline edit, if any
    pub edit: Option<EditSession>,
    /// Next id to hand out
    pub next_id: u32,
}

impl TodoState {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    pub fn with_filter(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::new()
        }
    }

    /// Append a task unless `raw` is blank. The stored text keeps the
    /// surrounding whitespace as typed. `Ok(None)` for blank input.
    pub fn add_task(&mut self, raw: &str) -> TodoResult<Option<TaskId>> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let id = TaskId(self.next_id.max(1));
        self.next_id = id.0.checked_add(1).ok_or(TodoError::IdsExhausted)?;
        self.tasks.push(Task {
            id,
            text: raw.to_string(),
            completed: false,
        });
        Ok(Some(id))
    }

    /// Flip completion; returns the new state
    pub fn toggle(&mut self, id: TaskId) -> TodoResult<bool> {
        let task = self.task_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Remove a task. An edit session on it is dropped.
    pub fn delete(&mut self, id: TaskId) -> TodoResult<Task> {
        let pos = self.position_of(id).ok_or(TodoError::TaskNotFound(id))?;
        if self.is_editing(id) {
            self.edit = None;
        }
        Ok(self.tasks.remove(pos))
    }

    /// Start editing `id`, discarding any unsaved draft
    pub fn begin_edit(&mut self, id: TaskId) -> TodoResult<()> {
        let draft = self.task(id).ok_or(TodoError::TaskNotFound(id))?.text.clone();
        self.edit = Some(EditSession { target: id, draft });
        Ok(())
    }

    pub fn update_draft(&mut self, text: impl Into<String>) -> TodoResult<()> {
        let session = self.edit.as_mut().ok_or(TodoError::NoActiveEdit)?;
        session.draft = text.into();
        Ok(())
    }

    /// Write the draft back and close the session.
    /// `Ok(None)` when nothing was being edited.
    pub fn save_edit(&mut self) -> TodoResult<Option<TaskId>> {
        let Some(session) = self.edit.take() else {
            return Ok(None);
        };
        let task = self.task_mut(session.target)?;
        task.text = session.draft;
        Ok(Some(session.target))
    }

    /// Drop the session without touching tasks
    pub fn cancel_edit(&mut self) -> Option<EditSession> {
        self.edit.take()
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks selected by the current filter, in list order
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .cloned()
            .collect()
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn task_mut(&mut self, id: TaskId) -> TodoResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TodoError::TaskNotFound(id))
    }

    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit.as_ref().is_some_and(|session| session.target == id)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(texts: &[&str]) -> (TodoState, Vec<TaskId>) {
        let mut state = TodoState::new();
        let ids = texts
            .iter()
            .map(|t| state.add_task(t).unwrap().expect("non-empty"))
            .collect();
        (state, ids)
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut state = TodoState::new();
        assert_eq!(state.add_task(""), Ok(None));
        assert_eq!(state.add_task("   "), Ok(None));
        assert_eq!(state.add_task("\t\n"), Ok(None));
        assert!(state.is_empty());
    }

    #[test]
    fn test_add_keeps_raw_text() {
        let mut state = TodoState::new();
        let id = state.add_task("  wash car  ").unwrap().unwrap();
        assert_eq!(state.tasks.len(), 1);
        let task = state.task(id).unwrap();
        assert_eq!(task.text, "  wash car  ");
        assert!(!task.completed);
    }

    #[test]
    fn test_ids_are_unique_after_delete() {
        let (mut state, ids) = state_with(&["a", "b"]);
        state.delete(ids[1]).unwrap();
        let c = state.add_task("c").unwrap().unwrap();
        assert!(!ids.contains(&c));
    }

    #[test]
    fn test_toggle() {
        let (mut state, ids) = state_with(&["a", "b"]);
        assert_eq!(state.toggle(ids[1]), Ok(true));
        assert!(state.task(ids[1]).unwrap().completed);
        assert!(!state.task(ids[0]).unwrap().completed);
        assert_eq!(state.toggle(ids[1]), Ok(false));
        assert_eq!(state.toggle(TaskId(99)), Err(TodoError::TaskNotFound(TaskId(99))));
    }

    #[test]
    fn test_completed_filter_preserves_order() {
        let (mut state, ids) = state_with(&["a", "b", "c", "d"]);
        state.toggle(ids[3]).unwrap();
        state.toggle(ids[0]).unwrap();
        let before = state.tasks.clone();

        state.set_filter(Filter::Completed);
        let visible: Vec<TaskId> = state.visible_tasks().iter().map(|t| t.id).collect();
        assert_eq!(visible, vec![ids[0], ids[3]]);

        state.set_filter(Filter::Incomplete);
        let visible: Vec<TaskId> = state.visible_tasks().iter().map(|t| t.id).collect();
        assert_eq!(visible, vec![ids[1], ids[2]]);

        state.set_filter(Filter::All);
        assert_eq!(state.visible_tasks().len(), 4);
        assert_eq!(state.tasks, before);
    }

    #[test]
    fn test_toggle_from_filtered_view_hits_right_task() {
        let (mut state, ids) = state_with(&["a", "b", "c"]);
        state.toggle(ids[0]).unwrap();
        state.set_filter(Filter::Incomplete);

        // first visible row is "b", not position 0 of the backing list
        let first_visible = state.visible_tasks()[0].id;
        state.toggle(first_visible).unwrap();
        assert!(state.task(ids[1]).unwrap().completed);
        assert!(state.task(ids[0]).unwrap().completed);
        assert!(!state.task(ids[2]).unwrap().completed);
    }

    #[test]
    fn test_edit_save_flow() {
        let (mut state, ids) = state_with(&["a", "b"]);
        state.begin_edit(ids[1]).unwrap();
        assert_eq!(state.edit.as_ref().unwrap().draft, "b");
        state.update_draft("bee").unwrap();
        assert_eq!(state.save_edit(), Ok(Some(ids[1])));

        assert_eq!(state.task(ids[1]).unwrap().text, "bee");
        assert!(state.edit.is_none());
    }

    #[test]
    fn test_second_begin_edit_discards_draft() {
        let (mut state, ids) = state_with(&["a", "b"]);
        state.begin_edit(ids[0]).unwrap();
        state.update_draft("changed").unwrap();
        state.begin_edit(ids[1]).unwrap();

        assert_eq!(state.task(ids[0]).unwrap().text, "a");
        assert!(state.is_editing(ids[1]));
        assert!(!state.is_editing(ids[0]));
        assert_eq!(state.edit.as_ref().unwrap().draft, "b");
    }

    #[test]
    fn test_edit_without_session() {
        let (mut state, _) = state_with(&["a"]);
        assert_eq!(state.update_draft("x"), Err(TodoError::NoActiveEdit));
        assert_eq!(state.save_edit(), Ok(None));
        assert_eq!(state.tasks[0].text, "a");
        assert_eq!(state.begin_edit(TaskId(7)), Err(TodoError::TaskNotFound(TaskId(7))));
    }

    #[test]
    fn test_cancel_edit() {
        let (mut state, ids) = state_with(&["a"]);
        state.begin_edit(ids[0]).unwrap();
        state.update_draft("zzz").unwrap();
        assert!(state.cancel_edit().is_some());
        assert_eq!(state.tasks[0].text, "a");
        assert!(state.edit.is_none());
    }

    #[test]
    fn test_delete_shifts_positions() {
        let (mut state, ids) = state_with(&["a", "b", "c", "d"]);
        assert_eq!(state.position_of(ids[2]), Some(2));

        let removed = state.delete(ids[1]).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(state.position_of(ids[2]), Some(1));
        assert_eq!(state.position_of(ids[3]), Some(2));
        assert_eq!(state.tasks[1].id, ids[2]);

        let second = state.tasks[1].id;
        state.toggle(second).unwrap();
        assert!(state.task(ids[2]).unwrap().completed);

        state.begin_edit(ids[3]).unwrap();
        state.update_draft("dee").unwrap();
        state.save_edit().unwrap();
        assert_eq!(state.tasks[2].text, "dee");
        assert_eq!(state.tasks[0].text, "a");
    }

    #[test]
    fn test_delete_clears_edit_on_target() {
        let (mut state, ids) = state_with(&["a", "b"]);
        state.begin_edit(ids[0]).unwrap();
        state.delete(ids[1]).unwrap();
        assert!(state.is_editing(ids[0]));

        state.delete(ids[0]).unwrap();
        assert!(state.edit.is_none());
        assert_eq!(state.delete(ids[0]), Err(TodoError::TaskNotFound(ids[0])));
    }

    #[test]
    fn test_id_counter_never_wraps() {
        let mut state = TodoState {
            next_id: u32::MAX - 1,
            ..TodoState::new()
        };
        assert_eq!(state.add_task("last"), Ok(Some(TaskId(u32::MAX - 1))));
        assert_eq!(state.add_task("one more"), Err(TodoError::IdsExhausted));
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.next_id, u32::MAX);
    }

    #[test]
    fn test_counts() {
        let (mut state, ids) = state_with(&["a", "b", "c"]);
        state.toggle(ids[2]).unwrap();
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.remaining_count(), 2);
    }

    #[test]
    fn test_with_filter() {
        let mut state = TodoState::with_filter(Filter::Completed);
        assert_eq!(state.filter, Filter::Completed);
        let id = state.add_task("x").unwrap().unwrap();
        assert_eq!(id, TaskId(1));
        assert!(state.visible_tasks().is_empty());
    }
}
