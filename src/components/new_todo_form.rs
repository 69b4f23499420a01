//! New Todo Form Component
//!
//! Single-line form that creates a todo and puts it at the top of the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api::CreateTodo;

use crate::context::use_app_context;
use crate::state::LoadState;

/// Trimmed text to submit, or `None` when there is nothing to create
fn submission(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

#[component]
pub fn NewTodoForm(set_state: WriteSignal<LoadState>) -> impl IntoView {
    let ctx = use_app_context();

    let (new_text, set_new_text) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = new_text.with(|text| submission(text).map(CreateTodo::new)) else {
            return;
        };
        let client = ctx.client();
        set_saving.set(true);

        spawn_local(async move {
            match client.create_todo(&payload).await {
                Ok(created) => {
                    log::info!("[NewTodoForm] Created #{}", created.id);
                    set_new_text.set(String::new());
                    set_state.update(|state| state.insert_front(created));
                }
                Err(e) => log::error!("[NewTodoForm] Failed to create todo: {}", e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Add new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || saving.get()>"Add"</button>
        </form>
    }
}
