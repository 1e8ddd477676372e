use contracts::shared::ApiResponse;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error, check your connection")]
    Network(String),
    #[error("Server error (HTTP {status})")]
    Http { status: u16, message: Option<String> },
    #[error("Request was rejected by the server")]
    Rejected { message: Option<String> },
    #[error("Unexpected response from the server")]
    Decode(String),
    #[error("Could not build the request")]
    Request(String),
}

impl ApiError {
    /// Backend message when there is one, otherwise the generic text
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message: Some(m), .. } | ApiError::Rejected { message: Some(m) } => {
                m.clone()
            }
            other => other.to_string(),
        }
    }

    /// Technical detail for the log
    pub fn detail(&self) -> String {
        match self {
            ApiError::Network(d) | ApiError::Decode(d) | ApiError::Request(d) => {
                format!("{}: {}", self, d)
            }
            ApiError::Http { status, message } => {
                format!("HTTP {} {}", status, message.as_deref().unwrap_or(""))
            }
            ApiError::Rejected { message } => {
                format!("rejected: {}", message.as_deref().unwrap_or("-"))
            }
        }
    }
}

impl From<ApiError> for String {
    fn from(e: ApiError) -> Self {
        e.user_message()
    }
}

/// Decodes a `{ success, data, message }` body received with `status`
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<Option<T>, ApiError> {
    let ok_status = (200..300).contains(&status);
    let envelope: ApiResponse<T> = match serde_json::from_str(body) {
        Ok(e) => e,
        Err(e) if ok_status => return Err(ApiError::Decode(e.to_string())),
        // error pages are not always JSON
        Err(_) => {
            return Err(ApiError::Http {
                status,
                message: message_field(body),
            })
        }
    };

    if !ok_status {
        return Err(ApiError::Http {
            status,
            message: envelope.message.filter(|m| !m.trim().is_empty()),
        });
    }
    envelope
        .into_result()
        .map_err(|message| ApiError::Rejected { message })
}

/// `message` of an error body that does not match the envelope's `data` type
fn message_field(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_data() {
        let r: Result<Option<Vec<u32>>, _> =
            decode_envelope(200, r#"{"success":true,"data":[1,2]}"#);
        assert_eq!(r, Ok(Some(vec![1, 2])));
    }

    #[test]
    fn test_success_without_data() {
        let r: Result<Option<u32>, _> = decode_envelope(200, r#"{"success":true}"#);
        assert_eq!(r, Ok(None));
    }

    #[test]
    fn test_rejected_keeps_backend_message() {
        let r: Result<Option<u32>, _> =
            decode_envelope(200, r#"{"success":false,"message":"Name taken"}"#);
        let err = r.unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: Some("Name taken".into()) });
        assert_eq!(err.user_message(), "Name taken");
    }

    #[test]
    fn test_http_error_without_json() {
        let r: Result<Option<u32>, _> = decode_envelope(502, "<html>Bad gateway</html>");
        let err = r.unwrap_err();
        assert_eq!(err, ApiError::Http { status: 502, message: None });
        assert_eq!(err.user_message(), "Server error (HTTP 502)");
    }

    #[test]
    fn test_http_error_with_message() {
        let r: Result<Option<Vec<u32>>, _> =
            decode_envelope(404, r#"{"success":false,"message":"Campaign not found"}"#);
        assert_eq!(r.unwrap_err().user_message(), "Campaign not found");
    }

    #[test]
    fn test_decode_error_on_bad_payload() {
        let r: Result<Option<u32>, _> = decode_envelope(200, r#"{"success":true,"data":"x"}"#);
        assert!(matches!(r, Err(ApiError::Decode(_))));
    }
}
