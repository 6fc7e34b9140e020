//! JSON API for team balancing
//!
//! Entry point for request handlers: takes the raw request body, returns the
//! serialized response envelope. Errors never produce a partial result.

use super::config_env::config_from_env;
use crate::balance::{Algorithm, BalanceResult, TeamBalancer};
use crate::config::BalancerConfig;
use crate::error::BalanceError;
use crate::models::Player;
use chrono::{DateTime, Utc};
use rand::Rng;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

// ========== Request/Response Structures ==========

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    pub players: Vec<Player>,
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Replay seed. Drawn at random when omitted and echoed in the response.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    #[serde(flatten)]
    pub result: BalanceResult,
    pub seed: u64,
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with code and HTTP-equivalent status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub status: u16,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(code: &str, message: &str, status: u16) -> Self {
        Self { code: code.to_string(), message: message.to_string(), status, details: None }
    }

    pub fn from_balance_error(err: &BalanceError) -> Self {
        let details = match err {
            BalanceError::InsufficientPlayers { required, found } => {
                Some(serde_json::json!({ "required": required, "found": found }))
            }
            BalanceError::NonFiniteRating { player_id, .. } => {
                Some(serde_json::json!({ "playerId": player_id }))
            }
            _ => None,
        };

        Self {
            code: err.code().to_string(),
            message: err.user_message(),
            status: err.http_status(),
            details,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

fn error_json(error: ApiError) -> String {
    to_json(&ApiResponse::<BalanceResponse>::error(error))
}

// ========== Public API Functions ==========

/// Balance a roster from a JSON request string
///
/// Tuning comes from `PELADA_BALANCER_CONFIG_PATH` when set, defaults otherwise.
///
/// # Returns
/// JSON string containing `ApiResponse<BalanceResponse>`
pub fn balance_teams_json(request_json: &str) -> String {
    let config = match config_from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load balancer config: {}", e);
            return error_json(ApiError::new(
                "INVALID_CONFIG",
                &format!("Balancer config could not be loaded: {}", e),
                500,
            ));
        }
    };

    balance_teams_json_with_config(request_json, &config)
}

/// Balance a roster from a JSON request string with an explicit config
pub fn balance_teams_json_with_config(request_json: &str, config: &BalancerConfig) -> String {
    info!("Processing team balance request");

    let request: BalanceRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse BalanceRequest: {}", e);
            return error_json(ApiError::new(
                "INVALID_JSON",
                &format!("Invalid JSON format: {}", e),
                400,
            ));
        }
    };

    let balancer = match TeamBalancer::new(config.clone()) {
        Ok(balancer) => balancer,
        Err(e) => {
            error!("Rejected balancer config: {}", e);
            return error_json(ApiError::from_balance_error(&e));
        }
    };

    let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());

    match balancer.balance_seeded(&request.players, request.algorithm, seed) {
        Ok(result) => {
            info!(
                "Balanced {} players with {} (quality {:.1}, seed {})",
                request.players.len(),
                result.algorithm,
                result.quality,
                seed
            );
            to_json(&ApiResponse::success(BalanceResponse { result, seed }))
        }
        Err(e) => {
            warn!("Team balance request rejected: {}", e);
            error_json(ApiError::from_balance_error(&e))
        }
    }
}

/// JSON Schema of [`BalanceRequest`]
pub fn balance_request_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(BalanceRequest)).unwrap_or_default()
}

/// JSON Schema of [`BalanceResponse`] (the `data` field of a successful response)
pub fn balance_response_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(BalanceResponse)).unwrap_or_default()
}
