//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use todo_api::TodoClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// API client built once at startup
    client: StoredValue<TodoClient>,
    /// Bumped to reload the todo list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to reload the todo list - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(client: TodoClient, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            client: StoredValue::new(client),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// A handle to the shared client
    pub fn client(&self) -> TodoClient {
        self.client.get_value()
    }

    pub fn transport_name(&self) -> &'static str {
        self.client.with_value(|client| client.transport_name())
    }

    /// Trigger a reload of the todo list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Provide an `AppContext` over an HTTP client that is never called
#[cfg(test)]
pub fn provide_test_context() -> AppContext {
    let client = TodoClient::new(todo_api::HttpTransport::new("http://localhost:3005"));
    let ctx = AppContext::new(client, signal(0));
    provide_context(ctx);
    ctx
}
