//! Digest-authenticated client for the camera config API.
//!
//! Talks to the mock or to real firmware exposing the same endpoint. Requests
//! go through `diqwest`, which answers the `WWW-Authenticate` challenge with a
//! proper MD5 digest.

use std::time::Duration;

use diqwest::WithDigestAuth;
use reqwest::StatusCode;
use thiserror::Error;

use crate::camera::table;
use crate::http::handlers::CONFIG_MANAGER_PATH;

/// Errors surfaced to operators by the client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Motion detection status line not found in response")]
    UnexpectedBody,
}

/// Operator-readable explanation for a failed status.
pub fn status_message(status: StatusCode) -> String {
    match status.as_u16() {
        401 => "Authentication failed - check username and password".to_string(),
        403 => "Access forbidden - check camera permissions".to_string(),
        404 => "Camera endpoint not found - check IP address and API path".to_string(),
        500 => "Camera server error - check camera status".to_string(),
        503 => "Camera service unavailable - camera may be busy".to_string(),
        code => format!("Camera responded with error {code}"),
    }
}

/// Client for `getConfig`/`setConfig` on a single camera.
#[derive(Debug, Clone)]
pub struct CameraClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl CameraClient {
    /// `base_url` is scheme and authority, e.g. `http://192.168.1.20:8081`.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
        })
    }

    /// Whether motion detection is currently enabled.
    pub async fn motion_status(&self) -> Result<bool, ClientError> {
        let body = self
            .get(&format!("action=getConfig&name={}", table::MOTION_DETECT))
            .await?;
        table::parse_motion_enabled(&body).ok_or(ClientError::UnexpectedBody)
    }

    /// Enable or disable motion detection.
    pub async fn set_motion(&self, enabled: bool) -> Result<(), ClientError> {
        self.get(&format!("action=setConfig&MotionDetect[].Enable={enabled}"))
            .await
            .map(|_| ())
    }

    async fn get(&self, query: &str) -> Result<String, ClientError> {
        let url = format!("{}{}?{}", self.base_url, CONFIG_MANAGER_PATH, query);
        tracing::debug!(url = %url, "Camera request");

        let response = self
            .http
            .get(&url)
            .send_with_digest_auth(&self.username, &self.password)
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Camera request failed");
            return Err(ClientError::Status {
                status,
                message: status_message(status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))
    }
}
