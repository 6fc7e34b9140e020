pub mod balance_json;

mod config_env;

pub use balance_json::{
    balance_request_schema, balance_response_schema, balance_teams_json,
    balance_teams_json_with_config, ApiError, ApiResponse, BalanceRequest, BalanceResponse,
    API_VERSION,
};
pub use config_env::{config_from_env, CONFIG_PATH_ENV};
