//! Page Header Component
//!
//! Top bar with the app title and the transport the client talks through.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Header(
    /// Sizing from the layout
    #[prop(into)]
    style: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let transport = ctx.transport_name();

    view! {
        <header class="page-header" style=style>
            <span class="page-title">"Todos"</span>
            <span class="transport-badge" title="Active transport">{transport}</span>
            <button class="refresh-btn" title="Reload" on:click=move |_| ctx.reload()>
                "⟳"
            </button>
        </header>
    }
}
