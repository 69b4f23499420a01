//! Desktop transport
//!
//! Sends requests through the desktop runtime's HTTP bridge
//! (`window.__TAURI__.http.fetch`) instead of the webview's own `fetch`,
//! so requests are not subject to the webview origin.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::{join_url, Transport};
use crate::error::{ApiError, ApiResult};
use crate::request::{ApiRequest, ApiResponse};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "http"], js_name = fetch, catch)]
    async fn bridge_fetch(url: &str, init: JsValue) -> Result<JsValue, JsValue>;
}

/// Second argument of `fetch`
#[derive(Serialize)]
struct FetchInit<'a> {
    method: &'static str,
    headers: BTreeMap<&'a str, &'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct TauriTransport {
    base_url: String,
}

impl TauriTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

fn js_error(context: &str, value: JsValue) -> ApiError {
    ApiError::Transport(format!("{}: {:?}", context, value))
}

#[async_trait(?Send)]
impl Transport for TauriTransport {
    fn name(&self) -> &'static str {
        "tauri"
    }

    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = join_url(&self.base_url, &request.path);
        log::debug!("[tauri] {} {}", request.method.as_str(), url);

        let init = FetchInit {
            method: request.method.as_str(),
            headers: request
                .headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect(),
            body: request.body.as_deref(),
        };
        // Headers must reach JS as a plain object, not a `Map`
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_init = init
            .serialize(&serializer)
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        let value = bridge_fetch(&url, js_init)
            .await
            .map_err(|e| js_error("bridge fetch failed", e))?;
        let response: web_sys::Response = value
            .dyn_into()
            .map_err(|e| js_error("bridge returned a non-Response value", e))?;

        let status = response.status();
        let text = response.text().map_err(|e| js_error("reading body failed", e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| js_error("reading body failed", e))?
            .as_string()
            .unwrap_or_default();

        Ok(ApiResponse { status, body })
    }
}
