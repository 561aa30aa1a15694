use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestCredentials, RequestInit, Response};

use crate::constants::CSRF_HEADER_NAME;
use crate::errors::InteractionError;
use crate::models::RequestBody;

/// A fully resolved POST, ready to hand to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub body: RequestBody,
    pub csrf_token: Option<String>,
}

/// Sends action requests and returns the raw response body.
///
/// Non-2xx statuses are **not** errors here: the listings server reports
/// failures as `{ "error": … }` with a 4xx status and the caller decodes the
/// body either way.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, request: &HttpRequest) -> Result<String, InteractionError>;
}

/// Browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

/// Assemble the browser `Request` for `request`: same-origin credentials, the
/// CSRF header when a token is known, and a JSON content type for everything
/// except multipart bodies, whose boundary header the browser fills in.
pub fn build_request(request: &HttpRequest) -> Result<Request, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_credentials(RequestCredentials::SameOrigin);

    let headers = Headers::new()?;
    if let Some(token) = &request.csrf_token {
        headers.append(CSRF_HEADER_NAME, token)?;
    }
    if !request.body.is_form() {
        headers.append("Content-Type", "application/json")?;
    }
    opts.set_headers(&headers);

    match &request.body {
        RequestBody::Empty => {}
        RequestBody::Json(value) => {
            let text = serde_json::to_string(value)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            opts.set_body(&JsValue::from_str(&text));
        }
        RequestBody::Form(fields) => {
            let form = FormData::new()?;
            for (name, value) in fields {
                form.append_with_str(name, value)?;
            }
            opts.set_body(&form);
        }
    }

    Request::new_with_str_and_init(&request.url, &opts)
}

impl FetchTransport {
    async fn fetch_text(request: &HttpRequest) -> Result<String, JsValue> {
        let req = build_request(request)?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window exists"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&req)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            log::debug!("POST {} answered {} {}", request.url, resp.status(), resp.status_text());
        }

        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}

impl Transport for FetchTransport {
    async fn post(&self, request: &HttpRequest) -> Result<String, InteractionError> {
        Self::fetch_text(request)
            .await
            .map_err(|e| InteractionError::Transport(format!("{:?}", e)))
    }
}
