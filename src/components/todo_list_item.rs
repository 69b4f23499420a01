//! Todo List Item Component
//!
//! A single todo row. Mutations go to the server first; the list state is
//! only touched once the server confirms, and the row re-renders from it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api::{Todo, UpdateTodo};

use crate::context::use_app_context;
use crate::state::LoadState;

/// The row's record as the list state currently holds it. Rows are keyed by
/// id and never rebuilt for an edit, so this is what keeps them in sync.
/// Once the id leaves the list the last known record is kept.
fn track_row(state: ReadSignal<LoadState>, todo: Todo) -> Memo<Todo> {
    Memo::new(move |prev: Option<&Todo>| {
        state
            .with(|s| s.get(todo.id).cloned())
            .or_else(|| prev.cloned())
            .unwrap_or_else(|| todo.clone())
    })
}

/// A single todo row
#[component]
pub fn TodoListItem(
    todo: Todo,
    /// The owning list's state
    state: ReadSignal<LoadState>,
    set_state: WriteSignal<LoadState>,
) -> impl IntoView {
    let ctx = use_app_context();

    let id = todo.id;
    let row = track_row(state, todo);
    let (busy, set_busy) = signal(false);

    let toggle = move |_| {
        let completed = !row.get_untracked().completed;
        let client = ctx.client();
        set_busy.set(true);
        spawn_local(async move {
            match client.update_todo(id, &UpdateTodo::completed(completed)).await {
                Ok(updated) => set_state.update(|state| state.replace(updated)),
                Err(e) => log::error!("[TodoListItem] Failed to update #{}: {}", id, e),
            }
            set_busy.set(false);
        });
    };

    let delete = move |_| {
        let client = ctx.client();
        set_busy.set(true);
        spawn_local(async move {
            match client.delete_todo(id).await {
                Ok(()) => {
                    log::info!("[TodoListItem] Deleted #{}", id);
                    set_state.update(|state| state.remove(id));
                }
                Err(e) => {
                    log::error!("[TodoListItem] Failed to delete #{}: {}", id, e);
                    set_busy.set(false);
                }
            }
        });
    };

    view! {
        <div class=move || if row.get().completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                prop:checked=move || row.get().completed
                prop:disabled=move || busy.get()
                on:change=toggle
            />
            <span class="todo-text">{move || row.get().text}</span>
            <button class="delete-btn" title="Delete" disabled=move || busy.get() on:click=delete>
                "×"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(id: i32, text: &str) -> Todo {
        Todo {
            completed: true,
            ..Todo::new(id, text)
        }
    }

    #[test]
    fn test_row_follows_in_place_replacement() {
        let owner = Owner::new();
        owner.with(|| {
            let (state, set_state) = signal(LoadState::Resolved(vec![Todo::new(2, "second"), Todo::new(1, "first")]));
            let row = track_row(state, Todo::new(1, "first"));
            assert_eq!(row.get_untracked().text, "first");

            set_state.update(|s| s.insert_front(Todo::new(1, "renamed")));
            assert_eq!(row.get_untracked().text, "renamed");
            assert!(!row.get_untracked().completed);
        });
    }

    #[test]
    fn test_row_picks_up_confirmation_after_reload() {
        let owner = Owner::new();
        owner.with(|| {
            // The reload answered before the toggle reached the server
            let (state, set_state) = signal(LoadState::Resolved(vec![Todo::new(4, "walk")]));
            let row = track_row(state, Todo::new(4, "walk"));
            assert!(!row.get_untracked().completed);

            set_state.update(|s| s.replace(done(4, "walk")));
            assert_eq!(row.get_untracked(), done(4, "walk"));
        });
    }

    #[test]
    fn test_removed_row_keeps_last_record() {
        let owner = Owner::new();
        owner.with(|| {
            let (state, set_state) = signal(LoadState::Resolved(vec![done(3, "read")]));
            let row = track_row(state, Todo::new(3, "stale"));
            assert_eq!(row.get_untracked(), done(3, "read"));

            set_state.update(|s| s.remove(3));
            assert_eq!(row.get_untracked(), done(3, "read"));
        });
    }
}
