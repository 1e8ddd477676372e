//! Uniform request helper for the campaign backend.
//!
//! Every JSON call goes through [`send`]: the body is decoded as the
//! `{ success, data, message }` envelope and failures become [`ApiError`].

use super::error::{decode_envelope, ApiError};
use gloo_net::http::{Request, RequestBuilder};
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{Blob, BlobPropertyBag, FormData};

static API_BASE: OnceCell<String> = OnceCell::new();

/// Fixes the API base from configuration; blank values are ignored
pub fn set_api_base(base_url: &str) {
    let base = base_url.trim().trim_end_matches('/');
    if !base.is_empty() && API_BASE.set(base.to_string()).is_err() {
        log::warn!("API base already set, ignoring {}", base);
    }
}

/// Configured base, or the page host on port 3000
pub fn api_base() -> String {
    if let Some(base) = API_BASE.get() {
        return base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encodes one path segment (ids, file names)
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Missing `data` is accepted only by types that deserialize from `null`
fn require_data<T: DeserializeOwned>(data: Option<T>) -> Result<T, ApiError> {
    match data {
        Some(d) => Ok(d),
        None => serde_json::from_value(serde_json::Value::Null)
            .map_err(|_| ApiError::Decode("response has no data".to_string())),
    }
}

fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
    builder.build().map_err(|e| ApiError::Request(e.to_string()))
}

async fn send<T: DeserializeOwned>(
    method: &'static str,
    path: &str,
    request: Result<Request, ApiError>,
) -> Result<T, ApiError> {
    log::debug!("{} {}", method, path);
    let response = request?.send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", method, path, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let data = decode_envelope::<T>(status, &body).inspect_err(|e| {
        log::warn!("{} {} failed: {}", method, path, e.detail());
    })?;
    require_data(data)
}

pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    send("GET", path, build(Request::get(&api_url(path)))).await
}

/// GET with query parameters serialized by `serde_qs`
pub async fn get_query<T, Q>(path: &str, query: &Q) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    Q: Serialize,
{
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Request(e.to_string()))?;
    let full = if qs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, qs)
    };
    send("GET", &full, build(Request::get(&api_url(&full)))).await
}

pub async fn post<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()));
    send("POST", path, request).await
}

pub async fn put<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()));
    send("PUT", path, request).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send::<Option<serde_json::Value>>("DELETE", path, build(Request::delete(&api_url(path))))
        .await
        .map(|_| ())
}

/// POST of a `multipart/form-data` body; the browser sets the boundary header
pub async fn post_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let request = Request::post(&api_url(path))
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()));
    send("POST (multipart)", path, request).await
}

/// Raw file download; error bodies are still decoded for their message
pub async fn get_blob(path: &str) -> Result<Blob, ApiError> {
    log::debug!("GET (blob) {}", path);
    let response = Request::get(&api_url(path)).send().await.map_err(|e| {
        log::warn!("GET {} failed: {}", path, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let err = match decode_envelope::<serde_json::Value>(status, &body) {
            Err(e) => e,
            Ok(_) => ApiError::Http { status, message: None },
        };
        log::warn!("GET {} failed: {}", path, err.detail());
        return Err(err);
    }

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes.as_slice()));
    let properties = BlobPropertyBag::new();
    properties.set_type(&content_type);
    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_data_for_unit_and_option() {
        assert_eq!(require_data::<()>(None), Ok(()));
        assert_eq!(require_data::<Option<u32>>(None), Ok(None));
        assert!(matches!(require_data::<u32>(None), Err(ApiError::Decode(_))));
        assert_eq!(require_data(Some(7u32)), Ok(7));
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("list 1.csv"), "list%201.csv");
        assert_eq!(segment("abc123"), "abc123");
    }
}
