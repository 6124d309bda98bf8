use std::fmt::{self, Display, Formatter};


pub const FLAG_LISTEN_ADDRESS: &str = "addr";
pub const FLAG_LOG_LEVEL: &str = "log-level";
pub const FLAG_REFRESH_INTERVAL: &str = "refresh-interval";
pub const FLAG_STALE_DURATION: &str = "age-stale";
pub const FLAG_CLIENT_ID: &str = "client-id";
pub const FLAG_CLIENT_SECRET: &str = "client-secret";
pub const FLAG_USERNAME: &str = "username";
pub const FLAG_PASSWORD: &str = "password";

pub const ENV_VAR_LISTEN_ADDRESS: &str = "NETATMO_EXPORTER_ADDR";
pub const ENV_VAR_LOG_LEVEL: &str = "NETATMO_LOG_LEVEL";
pub const ENV_VAR_REFRESH_INTERVAL: &str = "NETATMO_REFRESH_INTERVAL";
pub const ENV_VAR_STALE_DURATION: &str = "NETATMO_AGE_STALE";
pub const ENV_VAR_CLIENT_ID: &str = "NETATMO_CLIENT_ID";
pub const ENV_VAR_CLIENT_SECRET: &str = "NETATMO_CLIENT_SECRET";
pub const ENV_VAR_USERNAME: &str = "NETATMO_CLIENT_USERNAME";
pub const ENV_VAR_PASSWORD: &str = "NETATMO_CLIENT_PASSWORD";



/// Every key the resolver knows about. Each key has exactly one flag
/// and one environment variable as its sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationKey {
    ListenAddress,
    LogLevel,
    RefreshInterval,
    StaleDuration,
    ClientId,
    ClientSecret,
    Username,
    Password,
}

impl ConfigurationKey {
    pub const ALL: [ConfigurationKey; 8] = [
        Self::ListenAddress,
        Self::LogLevel,
        Self::RefreshInterval,
        Self::StaleDuration,
        Self::ClientId,
        Self::ClientSecret,
        Self::Username,
        Self::Password,
    ];

    /// Long flag name, without the leading `--`.
    pub const fn flag_name(self) -> &'static str {
        match self {
            Self::ListenAddress => FLAG_LISTEN_ADDRESS,
            Self::LogLevel => FLAG_LOG_LEVEL,
            Self::RefreshInterval => FLAG_REFRESH_INTERVAL,
            Self::StaleDuration => FLAG_STALE_DURATION,
            Self::ClientId => FLAG_CLIENT_ID,
            Self::ClientSecret => FLAG_CLIENT_SECRET,
            Self::Username => FLAG_USERNAME,
            Self::Password => FLAG_PASSWORD,
        }
    }

    pub const fn env_var(self) -> &'static str {
        match self {
            Self::ListenAddress => ENV_VAR_LISTEN_ADDRESS,
            Self::LogLevel => ENV_VAR_LOG_LEVEL,
            Self::RefreshInterval => ENV_VAR_REFRESH_INTERVAL,
            Self::StaleDuration => ENV_VAR_STALE_DURATION,
            Self::ClientId => ENV_VAR_CLIENT_ID,
            Self::ClientSecret => ENV_VAR_CLIENT_SECRET,
            Self::Username => ENV_VAR_USERNAME,
            Self::Password => ENV_VAR_PASSWORD,
        }
    }
}

impl Display for ConfigurationKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "--{} / {}", self.flag_name(), self.env_var())
    }
}
