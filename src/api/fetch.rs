//! Browser Transport
//!
//! GET via `window.fetch`. No timeout is applied.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{RawResponse, Transport};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> ApiResult<RawResponse> {
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window available".into()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

        let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_error)?;
        let response: Response = value.dyn_into().map_err(js_error)?;
        let status = response.status();

        let text = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;
        let body = text
            .as_string()
            .ok_or_else(|| ApiError::Parse("response body was not text".into()))?;

        Ok(RawResponse { status, body })
    }
}

fn js_error(value: JsValue) -> ApiError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Network(message)
}
