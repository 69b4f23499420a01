//! Todo List Component
//!
//! Loads the todo collection through the shared client and renders one row
//! per record. A reload (header button, Retry) starts a new load; a response
//! that arrives after a newer load started is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api::Todo;

use crate::components::{NewTodoForm, TodoListItem};
use crate::context::use_app_context;
use crate::state::{LoadPhase, LoadState};

/// Whether a response sent at `generation` may still land
fn is_current(generation: u32, latest: u32) -> bool {
    generation == latest
}

/// `Loaded 2 todos: [#2 "walk" done, #1 "read"]`
fn loaded_summary(todos: &[Todo]) -> String {
    let rows: Vec<String> = todos
        .iter()
        .map(|todo| {
            let done = if todo.completed { " done" } else { "" };
            format!("#{} {:?}{}", todo.id, todo.text, done)
        })
        .collect();
    format!("Loaded {} todos: [{}]", todos.len(), rows.join(", "))
}

/// Loading indicator shown while the list request is in flight
#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="progressbar" aria-busy="true" aria-label="Loading todos"></div>
    }
}

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    let (state, set_state) = signal(LoadState::Pending);

    // Load on mount and on every reload
    Effect::new(move |_| {
        let generation = ctx.reload_trigger.get();
        if generation > 0 {
            set_state.set(LoadState::Pending);
        }
        let client = ctx.client();
        log::debug!("[TodoList] Loading todos via {}, generation={}", client.transport_name(), generation);
        spawn_local(async move {
            let next = LoadState::from(client.list_todos().await);
            if !is_current(generation, ctx.reload_trigger.get_untracked()) {
                log::debug!("[TodoList] Dropping stale response for generation {}", generation);
                return;
            }
            match &next {
                LoadState::Resolved(todos) => log::info!("[TodoList] {}", loaded_summary(todos)),
                LoadState::Failed(err) => log::error!("[TodoList] Load failed: {}", err),
                LoadState::Pending => {}
            }
            set_state.set(next);
        });
    });

    view! { <TodoListBody state=state set_state=set_state /> }
}

/// What the list shows for each load phase
#[component]
fn TodoListBody(state: ReadSignal<LoadState>, set_state: WriteSignal<LoadState>) -> impl IntoView {
    let ctx = use_app_context();
    let phase = Memo::new(move |_| state.with(LoadState::phase));

    view! {
        <div class="todo-list">
            {move || match phase.get() {
                LoadPhase::Pending => view! { <Spinner /> }.into_any(),
                LoadPhase::Failed => {
                    let message = state.with_untracked(|s| s.error().map(ToString::to_string).unwrap_or_default());
                    view! {
                        <div class="todo-list-error" role="alert">
                            <span>{format!("Could not load todos: {}", message)}</span>
                            <button on:click=move |_| ctx.reload()>"Retry"</button>
                        </div>
                    }
                    .into_any()
                }
                LoadPhase::Resolved => view! {
                    <NewTodoForm set_state=set_state />
                    <div class="todo-rows">
                        <For
                            each=move || state.with(|s| s.rows().to_vec())
                            key=|todo| todo.id
                            children=move |todo| view! { <TodoListItem todo=todo state=state set_state=set_state /> }
                        />
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
