//! Remote Backend
//!
//! REST variant over the browser fetch API. Wire contract:
//! `GET {base}` returns the item array, `POST {base}` creates one item,
//! `PATCH {base}/{id}` updates the checked flag, `DELETE {base}/{id}`
//! removes. A non-2xx status or a failed request becomes a
//! `PersistError::Fetch` value; nothing here panics.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Item;
use crate::persist::{PersistError, PersistResult};

#[derive(Clone)]
pub struct RemoteBackend {
    base_url: String,
}

impl RemoteBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_items(&self) -> PersistResult<Vec<Item>> {
        let resp = request("GET", &self.base_url, None).await?;
        if !resp.ok() {
            return Err(PersistError::Fetch(
                "Did not receive expected data".to_string(),
            ));
        }
        let promise = resp.json().map_err(fetch_err)?;
        let value = JsFuture::from(promise).await.map_err(fetch_err)?;
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| PersistError::Fetch(e.to_string()))
    }

    pub async fn post_item(&self, item: &Item) -> PersistResult<()> {
        let body = serde_json::to_string(item)
            .map_err(|e| PersistError::Fetch(e.to_string()))?;
        let resp = request("POST", &self.base_url, Some(body)).await?;
        check_status(&resp)
    }

    pub async fn patch_checked(&self, id: u32, checked: bool) -> PersistResult<()> {
        // Partial update: only the field that changed goes over the wire.
        let body = serde_json::json!({ "checked": checked }).to_string();
        let url = format!("{}/{}", self.base_url, id);
        let resp = request("PATCH", &url, Some(body)).await?;
        check_status(&resp)
    }

    pub async fn delete_item(&self, id: u32) -> PersistResult<()> {
        let url = format!("{}/{}", self.base_url, id);
        let resp = request("DELETE", &url, None).await?;
        check_status(&resp)
    }
}

async fn request(method: &str, url: &str, body: Option<String>) -> PersistResult<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(fetch_err)?;
    if body_method(method) {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(fetch_err)?;
    }

    let window = web_sys::window()
        .ok_or_else(|| PersistError::Fetch("no window available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(fetch_err)?;
    resp_value.dyn_into::<Response>().map_err(fetch_err)
}

fn body_method(method: &str) -> bool {
    matches!(method, "POST" | "PATCH")
}

fn check_status(resp: &Response) -> PersistResult<()> {
    if resp.ok() {
        Ok(())
    } else {
        Err(PersistError::Fetch(format!(
            "request failed with status {} {}",
            resp.status(),
            resp.status_text()
        )))
    }
}

fn fetch_err(value: JsValue) -> PersistError {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    PersistError::Fetch(message)
}
