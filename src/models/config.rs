//! Configuration model loaded from external sources.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use validator::Validate;

use crate::domain::{BaseUrl, LogLevel, RegistrationPolicy};

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
/// Name of the data directory created next to the entry point.
pub const DATA_DIR_NAME: &str = "data";

/// Settings exactly as found in the layered sources, before defaults.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct RawSettings {
    #[validate(url)]
    pub base_url: Option<String>,
    #[validate(length(min = 1))]
    pub data_dir: Option<String>,
    pub allow_registrations: Option<bool>,
    pub log_level: Option<String>,
    #[validate(length(min = 1))]
    pub address: Option<String>,
    pub port: Option<u16>,
}

/// Resolved configuration shared across handlers. Never changes once built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub(crate) base_url: Option<BaseUrl>,
    pub(crate) data_dir: PathBuf,
    pub(crate) allow_registrations: bool,
    pub(crate) log_level: LogLevel,
    pub(crate) address: String,
    pub(crate) port: u16,
}

impl ServerConfig {
    /// Configured base URL. `None` means it is guessed per request.
    pub fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn allow_registrations(&self) -> bool {
        self.allow_registrations
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn registration_policy(&self) -> RegistrationPolicy {
        RegistrationPolicy::from_flag(self.allow_registrations)
    }

    /// Whether self-registration is possible with `existing_users` accounts.
    pub fn registrations_open(&self, existing_users: u64) -> bool {
        self.registration_policy().allows(existing_users)
    }

    /// Create the data directory (and parents) if it does not exist yet.
    pub fn ensure_data_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.data_dir)
    }
}
