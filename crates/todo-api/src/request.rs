//! Request/Response Plumbing
//!
//! Requests and responses as plain data. Building and parsing never touch
//! the network; a `Transport` carries the request in between.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::models::{CreateTodo, Todo, TodoCollection, UpdateTodo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A request relative to the transport's base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/`, e.g. `/todos/3`
    pub path: String,
    pub headers: Vec<(String, String)>,
    /// JSON body, if any
    pub body: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: String) -> Self {
        Self {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(mut self, payload: &T) -> ApiResult<Self> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.headers.push(("content-type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

// ========================
// Builders
// ========================

pub fn list_todos() -> ApiRequest {
    ApiRequest::new(Method::Get, "/todos".to_string())
}

pub fn get_todo(id: i32) -> ApiRequest {
    ApiRequest::new(Method::Get, format!("/todos/{id}"))
}

pub fn create_todo(payload: &CreateTodo) -> ApiResult<ApiRequest> {
    ApiRequest::new(Method::Post, "/todos".to_string()).with_json(payload)
}

pub fn update_todo(id: i32, payload: &UpdateTodo) -> ApiResult<ApiRequest> {
    ApiRequest::new(Method::Patch, format!("/todos/{id}")).with_json(payload)
}

pub fn delete_todo(id: i32) -> ApiRequest {
    ApiRequest::new(Method::Delete, format!("/todos/{id}"))
}

// ========================
// Parsers
// ========================

pub fn parse_list(response: ApiResponse) -> ApiResult<TodoCollection> {
    let records: Vec<Todo> = parse_json(response)?;
    TodoCollection::from_records(records)
}

pub fn parse_todo(response: ApiResponse) -> ApiResult<Todo> {
    parse_json(response)
}

pub fn parse_created(response: ApiResponse) -> ApiResult<Todo> {
    parse_json(response)
}

/// Any 2xx counts; a body, if present, is ignored
pub fn parse_deleted(response: ApiResponse) -> ApiResult<()> {
    check_status(&response)
}

fn parse_json<T: DeserializeOwned>(response: ApiResponse) -> ApiResult<T> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn check_status(response: &ApiResponse) -> ApiResult<()> {
    match response.status {
        200..=299 => Ok(()),
        404 => Err(ApiError::NotFound),
        status => Err(ApiError::Status {
            status,
            body: response.body.clone(),
        }),
    }
}
