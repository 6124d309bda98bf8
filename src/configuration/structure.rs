use std::{
    fmt::{self, Display, Formatter},
    time::Duration,
};

pub use self::credentials::{Credentials, UnresolvedCredentials};
pub use self::log_level::{LogLevel, UnknownLogLevel};
use super::{
    duration::parse_duration,
    error::{ConfigurationError, ResolveError},
    keys::ConfigurationKey,
    traits::{ResolvableConfiguration, ResolvableConfigurationWithContext},
    utilities::select_source,
};
use crate::cli::CLIArgs;

mod credentials;
mod log_level;


pub const DEFAULT_LISTEN_ADDRESS: &str = ":9210";
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(8 * 60);
pub const DEFAULT_STALE_DURATION: Duration = Duration::from_secs(30 * 60);



/// Values used for optional keys that neither a flag nor the environment supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationDefaults {
    pub listen_address: String,
    pub log_level: LogLevel,
    pub refresh_interval: Duration,
    pub stale_duration: Duration,
}

impl Default for ConfigurationDefaults {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            log_level: LogLevel::Info,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            stale_duration: DEFAULT_STALE_DURATION,
        }
    }
}


/// Raw values after the flag/environment merge, before defaults and coercion.
/// `None` means no source supplied the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UnresolvedConfiguration {
    listen_address: Option<String>,
    log_level: Option<String>,
    refresh_interval: Option<String>,
    stale_duration: Option<String>,
    credentials: UnresolvedCredentials,
}

impl UnresolvedConfiguration {
    pub(crate) fn from_sources<F>(arguments: CLIArgs, env_lookup: &F) -> Self
    where
        F: Fn(&str) -> String,
    {
        let select = |key: ConfigurationKey, flag_value: Option<String>| {
            select_source(key, flag_value, env_lookup)
        };

        Self {
            listen_address: select(ConfigurationKey::ListenAddress, arguments.listen_address),
            log_level: select(ConfigurationKey::LogLevel, arguments.log_level),
            refresh_interval: select(
                ConfigurationKey::RefreshInterval,
                arguments.refresh_interval,
            ),
            stale_duration: select(ConfigurationKey::StaleDuration, arguments.stale_duration),
            credentials: UnresolvedCredentials {
                client_id: select(ConfigurationKey::ClientId, arguments.client_id)
                    .unwrap_or_default(),
                client_secret: select(ConfigurationKey::ClientSecret, arguments.client_secret)
                    .unwrap_or_default(),
                username: select(ConfigurationKey::Username, arguments.username)
                    .unwrap_or_default(),
                password: select(ConfigurationKey::Password, arguments.password)
                    .unwrap_or_default(),
            },
        }
    }
}


/// Whatever was resolved before a check failed. Only ever handed out
/// alongside an error, see [`ResolveError::partial`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfiguration {
    /// Listen address after default substitution.
    pub listen_address: String,

    pub log_level: Option<LogLevel>,

    pub refresh_interval: Option<Duration>,

    pub stale_duration: Option<Duration>,

    /// Credentials as merged from flags and environment; not validated.
    pub credentials: UnresolvedCredentials,
}


/// The fully resolved and validated exporter configuration.
///
/// Only the resolver can construct this; once built it is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    listen_address: String,
    log_level: LogLevel,
    refresh_interval: Duration,
    stale_duration: Duration,
    credentials: Credentials,
}


fn parse_duration_for(
    key: ConfigurationKey,
    raw_value: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigurationError> {
    match raw_value {
        None => Ok(default),
        Some(value) => parse_duration(&value)
            .map_err(|source| ConfigurationError::InvalidDuration { key, value, source }),
    }
}

impl ResolvableConfigurationWithContext for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = ConfigurationDefaults;

    fn resolve(self, defaults: Self::Context) -> Result<Self::Resolved, ResolveError> {
        let mut partial = PartialConfiguration {
            listen_address: self
                .listen_address
                .unwrap_or(defaults.listen_address),
            credentials: self.credentials,
            ..PartialConfiguration::default()
        };


        let log_level = match self.log_level {
            None => defaults.log_level,
            Some(value) => match value.parse::<LogLevel>() {
                Ok(level) => level,
                Err(source) => {
                    return Err(ResolveError::with_partial(
                        ConfigurationError::InvalidLogLevel { value, source },
                        partial,
                    ))
                }
            },
        };
        partial.log_level = Some(log_level);

        let refresh_interval = match parse_duration_for(
            ConfigurationKey::RefreshInterval,
            self.refresh_interval,
            defaults.refresh_interval,
        ) {
            Ok(interval) => interval,
            Err(error) => return Err(ResolveError::with_partial(error, partial)),
        };
        partial.refresh_interval = Some(refresh_interval);

        let stale_duration = match parse_duration_for(
            ConfigurationKey::StaleDuration,
            self.stale_duration,
            defaults.stale_duration,
        ) {
            Ok(duration) => duration,
            Err(error) => return Err(ResolveError::with_partial(error, partial)),
        };
        partial.stale_duration = Some(stale_duration);


        if partial.listen_address.is_empty() {
            return Err(ResolveError::with_partial(
                ConfigurationError::NoListenAddress,
                partial,
            ));
        }

        let credentials = match partial.credentials.clone().resolve() {
            Ok(credentials) => credentials,
            Err(error) => return Err(ResolveError::with_partial(error, partial)),
        };


        Ok(Configuration {
            listen_address: partial.listen_address,
            log_level,
            refresh_interval,
            stale_duration,
            credentials,
        })
    }
}


impl Configuration {
    /// Address the HTTP listener binds to, in `host:port` form.
    pub fn listen_address(&self) -> &str {
        &self.listen_address
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// How often upstream data is polled.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// Age after which previously fetched data counts as stale.
    pub fn stale_duration(&self) -> Duration {
        self.stale_duration
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "listen address {}, log level {}, refresh interval {:?}, stale after {:?}, \
             client ID {}, username {}",
            self.listen_address,
            self.log_level,
            self.refresh_interval,
            self.stale_duration,
            self.credentials.client_id(),
            self.credentials.username(),
        )
    }
}
