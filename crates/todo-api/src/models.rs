//! Todo Models
//!
//! Data structures matching the todos resource served by the backend.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A single todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: i32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Payload for `POST /todos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTodo {
    pub text: String,
}

impl CreateTodo {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Payload for `PATCH /todos/{id}`.
/// Fields left as `None` are not sent and stay unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl UpdateTodo {
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Default::default()
        }
    }
}

/// Ordered todos from one list response.
///
/// Order is display order. Ids are unique: a response repeating an id is
/// rejected instead of rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoCollection(Vec<Todo>);

impl TodoCollection {
    pub fn from_records(records: Vec<Todo>) -> Result<Self, ApiError> {
        let mut seen = HashSet::with_capacity(records.len());
        for todo in &records {
            if !seen.insert(todo.id) {
                return Err(ApiError::DuplicateId(todo.id));
            }
        }
        Ok(Self(records))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Todo> {
        self.0
    }
}
