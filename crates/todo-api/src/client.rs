//! Todo Client
//!
//! Typed operations on the todos resource, bound to one transport at
//! construction time.

use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{CreateTodo, Todo, TodoCollection, UpdateTodo};
use crate::request;
use crate::transport::Transport;

/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct TodoClient {
    transport: Arc<dyn Transport>,
}

impl TodoClient {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn from_boxed(transport: Box<dyn Transport>) -> Self {
        Self {
            transport: Arc::from(transport),
        }
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// `GET /todos`
    pub async fn list_todos(&self) -> ApiResult<TodoCollection> {
        let response = self.transport.send(request::list_todos()).await?;
        request::parse_list(response)
    }

    /// `GET /todos/{id}`
    pub async fn get_todo(&self, id: i32) -> ApiResult<Todo> {
        let response = self.transport.send(request::get_todo(id)).await?;
        request::parse_todo(response)
    }

    /// `POST /todos`
    pub async fn create_todo(&self, payload: &CreateTodo) -> ApiResult<Todo> {
        let response = self.transport.send(request::create_todo(payload)?).await?;
        request::parse_created(response)
    }

    /// `PATCH /todos/{id}`
    pub async fn update_todo(&self, id: i32, payload: &UpdateTodo) -> ApiResult<Todo> {
        let response = self.transport.send(request::update_todo(id, payload)?).await?;
        request::parse_todo(response)
    }

    /// `DELETE /todos/{id}`
    pub async fn delete_todo(&self, id: i32) -> ApiResult<()> {
        let response = self.transport.send(request::delete_todo(id)).await?;
        request::parse_deleted(response)
    }
}

impl std::fmt::Debug for TodoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoClient")
            .field("transport", &self.transport.name())
            .finish()
    }
}
