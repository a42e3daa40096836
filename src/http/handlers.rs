//! Handlers for `/cgi-bin/configManager.cgi`.
//!
//! # Responsibilities
//! - Dispatch on the `action` query parameter
//! - `getConfig`: report the motion table
//! - `setConfig`: update the motion flag, then simulate hardware latency

use std::time::Duration;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::Response,
};

use crate::camera::{table, MotionState, QueryParams};
use crate::http::error::ApiError;
use crate::http::response::plain_text;
use crate::http::server::AppState;

/// The single CGI endpoint the simulated camera serves.
pub const CONFIG_MANAGER_PATH: &str = "/cgi-bin/configManager.cgi";

/// Delay before `setConfig` answers. Taken after the state lock is released.
pub const SET_CONFIG_DELAY: Duration = Duration::from_millis(100);

/// Entry point for the config manager endpoint.
pub async fn config_manager(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let params = QueryParams::parse(query.as_deref().unwrap_or_default());

    match params.first("action") {
        Some("getConfig") => get_config(&state.motion, &params),
        Some("setConfig") => set_config(&state.motion, &params).await,
        _ => Err(ApiError::InvalidAction),
    }
}

/// `action=getConfig&name=MotionDetect`
pub fn get_config(motion: &MotionState, params: &QueryParams) -> Result<Response, ApiError> {
    if params.first("name") != Some(table::MOTION_DETECT) {
        return Err(ApiError::InvalidConfigName);
    }

    let enabled = motion.get();
    tracing::info!(enabled, "Returned motion status");

    Ok(plain_text(StatusCode::OK, table::render_motion_detect(enabled)))
}

/// `action=setConfig&MotionDetect[0].Enable=<value>`
pub async fn set_config(motion: &MotionState, params: &QueryParams) -> Result<Response, ApiError> {
    let (key, value) = params
        .find_key(table::is_motion_enable_key)
        .ok_or(ApiError::MissingEnableParameter)?;

    let enabled = table::parse_enable_value(value);
    motion.set(enabled);

    tokio::time::sleep(SET_CONFIG_DELAY).await;

    tracing::info!(key, value, enabled, "Set motion detection");
    Ok(plain_text(StatusCode::OK, "OK"))
}

/// Fallback for every other path.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
