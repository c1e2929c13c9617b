//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (404 → [`ApiError::NotFound`], other
//! non-success → [`ApiError::Api`] carrying the backend's `error` message) and
//! JSON decoding, so endpoint modules stay focused on paths and mapping.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Error document the backend sends with non-success responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(resp.url().path().to_string()));
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

/// Decode a successful response body, keeping serde's message on failure.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let body = check_response(resp).await?.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// The `error` field of a JSON error body, or the trimmed raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| body.trim().to_string(), |parsed| parsed.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn error_message_prefers_json_error_field() {
        assert_eq!(
            error_message(r#"{"error":"Training não encontrado"}"#),
            "Training não encontrado"
        );
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("  Bad Gateway \n"), "Bad Gateway");
    }

    #[tokio::test]
    async fn check_response_api_error_uses_backend_message() {
        let resp = mock_response(400, r#"{"error":"timeMinutes obrigatório"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Api { status: 400, ref message } if message == "timeMinutes obrigatório"
        ));
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let resp = mock_response(404, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "{}");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn decode_reports_parse_errors() {
        #[derive(Debug, Deserialize)]
        struct Named {
            #[allow(dead_code)]
            name: String,
        }

        let resp = mock_response(200, r#"{"title":"x"}"#);
        let err = decode::<Named>(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
