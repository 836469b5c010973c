//! Strongly-typed domain structures for server configuration.
use std::fmt;
use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;
use url::Url;

/// Absolute base URL used to build links (e.g. `https://example.com/gpodder/`).
///
/// Always `http` or `https`, always has a host and its path always ends
/// with `/` so relative links resolve below it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    pub fn try_new(mut url: Url) -> Result<Self, TypeConstraintError> {
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(TypeConstraintError::InvalidBaseUrl);
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(TypeConstraintError::InvalidBaseUrl);
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self(url))
    }

    pub fn try_from_str(input: &str) -> Result<Self, TypeConstraintError> {
        let url = Url::parse(input.trim()).map_err(|_| TypeConstraintError::InvalidBaseUrl)?;
        Self::try_new(url)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl FromStr for BaseUrl {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Logging verbosity accepted by `GPODDER_LOG_LEVEL`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Info,
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            _ => Err(TypeConstraintError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may create an account.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistrationPolicy {
    /// Only the very first account can be self-registered.
    FirstUserOnly,
    /// Anyone can register.
    Open,
}

impl RegistrationPolicy {
    pub fn from_flag(allow_registrations: bool) -> Self {
        if allow_registrations {
            RegistrationPolicy::Open
        } else {
            RegistrationPolicy::FirstUserOnly
        }
    }

    /// Whether a new account may be created given the current user count.
    pub fn allows(&self, existing_users: u64) -> bool {
        existing_users == 0 || matches!(self, RegistrationPolicy::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_appends_trailing_slash() {
        let url = BaseUrl::try_from_str("https://example.com/gpodder").unwrap();
        assert_eq!(url.as_str(), "https://example.com/gpodder/");

        let root = BaseUrl::try_from_str("http://example.com").unwrap();
        assert_eq!(root.as_str(), "http://example.com/");
    }

    #[test]
    fn base_url_rejects_relative_and_foreign_schemes() {
        assert!(BaseUrl::try_from_str("/gpodder").is_err());
        assert!(BaseUrl::try_from_str("ftp://example.com/").is_err());
        assert!(BaseUrl::try_from_str("https://example.com/?a=b").is_err());
        assert!(BaseUrl::try_from_str("").is_err());
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!(" Error ".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Off);
    }

    #[test]
    fn log_level_rejects_unknown() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(matches!(err, TypeConstraintError::InvalidLogLevel(ref v) if v == "verbose"));
    }

    #[test]
    fn log_level_maps_to_filter() {
        assert_eq!(LogLevel::default().to_level_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn first_user_can_always_register() {
        assert!(RegistrationPolicy::FirstUserOnly.allows(0));
        assert!(!RegistrationPolicy::FirstUserOnly.allows(1));
        assert!(RegistrationPolicy::Open.allows(0));
        assert!(RegistrationPolicy::Open.allows(12));
    }
}

#[derive(Debug, Error)]
pub enum TypeConstraintError {
    #[error("invalid base url")]
    InvalidBaseUrl,
    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}
