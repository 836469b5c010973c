use serde::{Deserialize, Serialize};

use crate::domain::BaseUrl;
use crate::models::config::ServerConfig;

/// Public server details returned by the status endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerInfoDto {
    pub base_url: String,
    pub allow_registrations: bool,
}

impl ServerInfoDto {
    pub fn new(base_url: &BaseUrl, config: &ServerConfig) -> Self {
        Self {
            base_url: base_url.as_str().to_string(),
            allow_registrations: config.allow_registrations(),
        }
    }
}
