//! Transport client for the catalog API.
//!
//! Every request carries the session cookie and JSON headers. Every failure,
//! whether network, non-2xx status or malformed body, surfaces as a single
//! [`ServiceError`] with a human-readable message and is logged before being
//! returned. Requests are fired once; callers decide whether to retry.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;

/// The single failure representation for any API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceError {}

/// GET a JSON resource. Failures without a server message fall back to the
/// generic "Error <status>: <statusText>" line.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ServiceError> {
    let response = Request::get(&api_url(path))
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    into_json(response, None).await
}

/// POST a JSON body and decode the JSON reply. `default_msg` replaces the
/// generic status line when the server supplied no message.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    default_msg: &str,
) -> Result<T, ServiceError> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
        .json(body)
        .map_err(serialize_error)?
        .send()
        .await
        .map_err(network_error)?;
    into_json(response, Some(default_msg)).await
}

/// PUT a JSON body (full-resource replacement) and decode the JSON reply.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    default_msg: &str,
) -> Result<T, ServiceError> {
    let response = Request::put(&api_url(path))
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
        .json(body)
        .map_err(serialize_error)?
        .send()
        .await
        .map_err(network_error)?;
    into_json(response, Some(default_msg)).await
}

/// DELETE a resource. The server reply body is not required; success is the
/// status alone and is reported as `true`.
pub async fn delete(path: &str, default_msg: &str) -> Result<bool, ServiceError> {
    let response = Request::delete(&api_url(path))
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    if !response.ok() {
        return Err(error_from_response(response, Some(default_msg)).await);
    }
    Ok(true)
}

async fn into_json<T: DeserializeOwned>(
    response: Response,
    default_msg: Option<&str>,
) -> Result<T, ServiceError> {
    if !response.ok() {
        return Err(error_from_response(response, default_msg).await);
    }
    let text = response
        .text()
        .await
        .map_err(|e| logged(ServiceError::new(format!("Error al leer la respuesta: {}", e))))?;
    serde_json::from_str(&text).map_err(|e| {
        logged(ServiceError::new(format!(
            "Respuesta inesperada del servidor: {}",
            e
        )))
    })
}

async fn error_from_response(response: Response, default_msg: Option<&str>) -> ServiceError {
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let message = server_message(&body)
        .or_else(|| default_msg.map(str::to_string))
        .unwrap_or_else(|| status_fallback(status, &status_text));
    logged(ServiceError::new(message))
}

fn network_error(err: gloo_net::Error) -> ServiceError {
    logged(ServiceError::new(format!("Error de red: {}", err)))
}

fn serialize_error(err: gloo_net::Error) -> ServiceError {
    logged(ServiceError::new(format!(
        "Error al serializar la petición: {}",
        err
    )))
}

fn logged(err: ServiceError) -> ServiceError {
    log::error!("solicitud al API fallida: {}", err);
    err
}

/// Extracts a non-empty `message` field from a JSON error body, if any.
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn status_fallback(status: u16, status_text: &str) -> String {
    format!("Error {}: {}", status, status_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_extracts_message_field() {
        assert_eq!(
            server_message(r#"{"message":"Referencia duplicada"}"#),
            Some("Referencia duplicada".to_string())
        );
    }

    #[test]
    fn server_message_rejects_empty_or_missing() {
        assert_eq!(server_message(r#"{"message":"   "}"#), None);
        assert_eq!(server_message(r#"{"error":"x"}"#), None);
        assert_eq!(server_message("not json"), None);
        assert_eq!(server_message(""), None);
    }

    #[test]
    fn server_message_ignores_non_string_message() {
        assert_eq!(server_message(r#"{"message":42}"#), None);
    }

    #[test]
    fn status_fallback_names_status_and_text() {
        assert_eq!(
            status_fallback(500, "Internal Server Error"),
            "Error 500: Internal Server Error"
        );
    }
}
