//! Todo List State
//!
//! Lifecycle of one list load plus the in-place edits applied after the
//! server confirms a mutation.

use todo_api::{ApiError, ApiResult, Todo, TodoCollection};

/// State of the todo list
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Request in flight, nothing to show yet
    #[default]
    Pending,
    /// Rows in display order
    Resolved(Vec<Todo>),
    Failed(ApiError),
}

/// Which branch of `LoadState` is active, without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Pending,
    Resolved,
    Failed,
}

impl From<ApiResult<TodoCollection>> for LoadState {
    fn from(result: ApiResult<TodoCollection>) -> Self {
        match result {
            Ok(todos) => LoadState::Resolved(todos.into_vec()),
            Err(err) => LoadState::Failed(err),
        }
    }
}

impl LoadState {
    pub fn phase(&self) -> LoadPhase {
        match self {
            LoadState::Pending => LoadPhase::Pending,
            LoadState::Resolved(_) => LoadPhase::Resolved,
            LoadState::Failed(_) => LoadPhase::Failed,
        }
    }

    /// Rows to render; empty unless resolved
    pub fn rows(&self) -> &[Todo] {
        match self {
            LoadState::Resolved(todos) => todos,
            _ => &[],
        }
    }

    /// The row with `id`, if resolved and present
    pub fn get(&self, id: i32) -> Option<&Todo> {
        self.rows().iter().find(|todo| todo.id == id)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    // ========================
    // In-place edits
    // ========================

    /// Replace the row with the same id, keeping its position
    pub fn replace(&mut self, updated: Todo) {
        if let LoadState::Resolved(todos) = self {
            if let Some(todo) = todos.iter_mut().find(|todo| todo.id == updated.id) {
                *todo = updated;
            }
        }
    }

    /// Add a new row at the top (the server lists newest first).
    /// An id already present is replaced in place instead.
    pub fn insert_front(&mut self, created: Todo) {
        if let LoadState::Resolved(todos) = self {
            if let Some(todo) = todos.iter_mut().find(|todo| todo.id == created.id) {
                *todo = created;
            } else {
                todos.insert(0, created);
            }
        }
    }

    pub fn remove(&mut self, id: i32) {
        if let LoadState::Resolved(todos) = self {
            todos.retain(|todo| todo.id != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(ids: &[i32]) -> LoadState {
        LoadState::Resolved(ids.iter().map(|&id| Todo::new(id, format!("Todo {}", id))).collect())
    }

    fn ids(state: &LoadState) -> Vec<i32> {
        state.rows().iter().map(|todo| todo.id).collect()
    }

    #[test]
    fn test_pending_shows_only_spinner() {
        let state = LoadState::Pending;
        assert_eq!(state.phase(), LoadPhase::Pending);
        assert!(state.rows().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_empty_collection_renders_nothing() {
        let state = LoadState::from(TodoCollection::from_records(Vec::new()));
        assert_eq!(state.phase(), LoadPhase::Resolved);
        assert!(state.rows().is_empty());
    }

    #[test]
    fn test_rows_keep_input_order() {
        let records = vec![Todo::new(9, "c"), Todo::new(2, "a"), Todo::new(5, "b")];
        let state = LoadState::from(TodoCollection::from_records(records.clone()));
        assert_eq!(state.rows(), records.as_slice());
        assert_eq!(state.phase(), LoadPhase::Resolved);
    }

    #[test]
    fn test_failure_carries_error() {
        let state = LoadState::from(Err::<TodoCollection, _>(ApiError::DuplicateId(3)));
        assert_eq!(state.phase(), LoadPhase::Failed);
        assert_eq!(state.error(), Some(&ApiError::DuplicateId(3)));
        assert!(state.rows().is_empty());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut state = resolved(&[3, 2, 1]);
        let mut updated = Todo::new(2, "edited");
        updated.completed = true;
        state.replace(updated.clone());

        assert_eq!(ids(&state), vec![3, 2, 1]);
        assert_eq!(state.rows()[1], updated);
        assert_eq!(state.rows()[0].text, "Todo 3");
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut state = resolved(&[1, 2]);
        state.replace(Todo::new(42, "ghost"));
        assert_eq!(state, resolved(&[1, 2]));
    }

    #[test]
    fn test_insert_front() {
        let mut state = resolved(&[2, 1]);
        state.insert_front(Todo::new(3, "new"));
        assert_eq!(ids(&state), vec![3, 2, 1]);

        state.insert_front(Todo::new(1, "renamed"));
        assert_eq!(ids(&state), vec![3, 2, 1]);
        assert_eq!(state.rows()[2].text, "renamed");
    }

    #[test]
    fn test_get_reads_current_row() {
        let mut state = resolved(&[2, 1]);
        assert_eq!(state.get(1).map(|todo| todo.text.as_str()), Some("Todo 1"));
        state.insert_front(Todo::new(1, "renamed"));
        assert_eq!(state.get(1).map(|todo| todo.text.as_str()), Some("renamed"));
        assert!(state.get(9).is_none());
        assert!(LoadState::Pending.get(1).is_none());
    }

    #[test]
    fn test_remove() {
        let mut state = resolved(&[3, 2, 1]);
        state.remove(2);
        assert_eq!(ids(&state), vec![3, 1]);
        state.remove(7);
        assert_eq!(ids(&state), vec![3, 1]);
    }

    #[test]
    fn test_edits_ignored_outside_resolved() {
        let mut state = LoadState::Pending;
        state.insert_front(Todo::new(1, "early"));
        state.replace(Todo::new(1, "early"));
        state.remove(1);
        assert_eq!(state, LoadState::Pending);

        let mut state = LoadState::Failed(ApiError::NotFound);
        state.insert_front(Todo::new(1, "late"));
        assert_eq!(state, LoadState::Failed(ApiError::NotFound));
    }
}
