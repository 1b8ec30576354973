//! HTTP utilities for the catalog REST API calls

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// Maximum length of response body to log
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Truncate long response bodies and strip non-printable characters
/// before they reach the log file.
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        // Error bodies are Portuguese text; the cut must not land inside
        // a multi-byte character.
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... [truncated, {} bytes total]",
            &body[..end],
            body.len()
        )
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Status and body of a single API exchange.
///
/// The status is exposed to the caller because single-record reads must
/// detect not-found via the response status, not via an error.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP client wrapper for the catalog API.
///
/// One attempt per call: no retries, no backoff, no request timeout.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("aventura/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<ApiResponse> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            tracing::warn!("API error: {} - {}", status, sanitize_for_log(&body));
        }

        Ok(ApiResponse { status, body })
    }

    /// Make a POST request with a JSON body
    pub async fn post_json(&self, url: &str, body: &Value) -> Result<ApiResponse> {
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let response_body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            tracing::error!(
                "API error: {} - {}",
                status,
                sanitize_for_log(&response_body)
            );
        }

        Ok(ApiResponse {
            status,
            body: response_body,
        })
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str) -> Result<ApiResponse> {
        tracing::debug!("DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if !status.is_success() {
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
        }

        Ok(ApiResponse { status, body })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default HTTP client")
    }
}

/// Format an API error for display in a notice dialog.
pub fn format_api_error(error: &anyhow::Error) -> String {
    let error_str = error.to_string();

    if error_str.contains("404") {
        return "Registro não encontrado no servidor.".to_string();
    }
    if error_str.contains("400") {
        return "Requisição inválida. Verifique os dados informados.".to_string();
    }
    if error_str.contains("500") || error_str.contains("503") {
        return "Servidor indisponível no momento. Tente novamente.".to_string();
    }
    if error_str.contains("Failed to send request") {
        return "Não foi possível conectar ao servidor da API.".to_string();
    }
    if error_str.contains("API request failed") {
        return "A requisição falhou. Verifique a conexão e tente novamente.".to_string();
    }

    // Truncate anything else rather than exposing a raw error chain
    let sanitized = error_str.chars().take(80).collect::<String>();
    if sanitized.len() < error_str.len() {
        format!("{}...", sanitized)
    } else {
        sanitized
    }
}
