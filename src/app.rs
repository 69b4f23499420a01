//! Todos Frontend App
//!
//! Root component: provides the shared client and lays out the page.

use leptos::prelude::*;
use todo_api::TodoClient;

use crate::components::{Layout, TodoList};
use crate::context::AppContext;

#[component]
pub fn App(client: TodoClient, header_height: u32) -> impl IntoView {
    let reload_trigger = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(client, reload_trigger));

    view! {
        <Layout header_height=header_height>
            <main class="main-content">
                <TodoList />
            </main>
        </Layout>
    }
}
