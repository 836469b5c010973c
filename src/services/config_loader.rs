use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat, Map};
use validator::Validate;

use crate::domain::{BaseUrl, LogLevel};
use crate::models::config::{
    DATA_DIR_NAME, DEFAULT_ADDRESS, DEFAULT_PORT, RawSettings, ServerConfig,
};
use crate::services::{ServiceError, ServiceResult};

/// Prefix of every environment override (`GPODDER_DATA_DIR`, ...).
pub const ENV_PREFIX: &str = "GPODDER";

/// Resolves [`ServerConfig`] from an explicit file, the environment and
/// built-in defaults, in that order of precedence.
#[derive(Clone, Debug, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env: Option<Map<String, String>>,
    entry_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from a YAML file. The file must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Use `vars` instead of the process environment.
    pub fn with_env(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Directory the default data directory is placed in.
    pub fn with_entry_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.entry_dir = Some(dir.into());
        self
    }

    fn read_sources(&self) -> ServiceResult<RawSettings> {
        let mut builder = Config::builder().add_source(
            Environment::with_prefix(ENV_PREFIX)
                .ignore_empty(true)
                .source(self.env.clone()),
        );
        // Added last so file values win over the environment.
        if let Some(file) = &self.file {
            builder = builder.add_source(
                File::from(file.as_path())
                    .format(FileFormat::Yaml)
                    .required(true),
            );
        }

        let settings = builder.build()?.try_deserialize::<RawSettings>()?;
        settings
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        Ok(settings)
    }

    fn default_data_dir(&self) -> PathBuf {
        let entry_dir = self.entry_dir.clone().unwrap_or_else(entry_point_dir);
        entry_dir.join(DATA_DIR_NAME)
    }

    /// Resolve the configuration. Missing overrides fall back to defaults.
    pub fn load(&self) -> ServiceResult<ServerConfig> {
        let raw = self.read_sources()?;

        let base_url = raw
            .base_url
            .as_deref()
            .map(BaseUrl::try_from_str)
            .transpose()
            .map_err(ServiceError::BaseUrl)?;

        let log_level = raw
            .log_level
            .as_deref()
            .map(str::parse::<LogLevel>)
            .transpose()
            .map_err(ServiceError::LogLevel)?
            .unwrap_or_default();

        let data_dir = match raw.data_dir {
            Some(dir) => {
                let dir = PathBuf::from(dir);
                prepare_data_dir(&dir)?;
                dir
            }
            None => self.default_data_dir(),
        };

        Ok(ServerConfig {
            base_url,
            data_dir,
            allow_registrations: raw.allow_registrations.unwrap_or(false),
            log_level,
            address: raw.address.unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            port: raw.port.unwrap_or(DEFAULT_PORT),
        })
    }
}

/// Directory holding the running executable, or the working directory.
fn entry_point_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// An explicitly configured data directory has to be usable right away.
fn prepare_data_dir(dir: &Path) -> ServiceResult<()> {
    fs::create_dir_all(dir).map_err(|source| ServiceError::DataDirCreate {
        path: dir.to_path_buf(),
        source,
    })?;
    tempfile::tempfile_in(dir).map_err(|source| ServiceError::DataDirNotWritable {
        path: dir.to_path_buf(),
        source,
    })?;
    Ok(())
}
