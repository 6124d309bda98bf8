use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use miette::{Diagnostic, LabeledSpan, Severity, SourceCode};
use thiserror::Error;

use super::{
    duration::DurationParseError,
    keys::ConfigurationKey,
    PartialConfiguration,
    UnknownLogLevel,
};


/// The reason a configuration was rejected.
///
/// Every rule of the resolver has its own variant, so callers can
/// tell exactly which check failed.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigurationError {
    #[error("argument list is missing the invocation name")]
    #[diagnostic(code(configuration::no_invocation_name))]
    NoInvocationName,

    #[error("failed to parse command-line arguments")]
    #[diagnostic(
        code(configuration::arguments),
        help("run with --help to see the accepted flags")
    )]
    Arguments(#[source] clap::Error),

    #[error("invalid duration \"{value}\" for {key}")]
    #[diagnostic(
        code(configuration::invalid_duration),
        help("use a number followed by a unit, e.g. 30s, 5m or 1h30m")
    )]
    InvalidDuration {
        key: ConfigurationKey,
        value: String,
        #[source]
        source: DurationParseError,
    },

    #[error("invalid log level \"{value}\" for {key}", key = ConfigurationKey::LogLevel)]
    #[diagnostic(
        code(configuration::invalid_log_level),
        help("expected one of panic, fatal, error, warn, info, debug or trace")
    )]
    InvalidLogLevel {
        value: String,
        #[source]
        source: UnknownLogLevel,
    },

    #[error("no listen address configured")]
    #[diagnostic(code(configuration::no_listen_address))]
    NoListenAddress,

    #[error("no client ID configured")]
    #[diagnostic(
        code(configuration::no_client_id),
        help("pass --client-id or set NETATMO_CLIENT_ID")
    )]
    NoClientId,

    #[error("no client secret configured")]
    #[diagnostic(
        code(configuration::no_client_secret),
        help("pass --client-secret or set NETATMO_CLIENT_SECRET")
    )]
    NoClientSecret,

    #[error("no username configured")]
    #[diagnostic(
        code(configuration::no_username),
        help("pass --username or set NETATMO_CLIENT_USERNAME")
    )]
    NoUsername,

    #[error("no password configured")]
    #[diagnostic(
        code(configuration::no_password),
        help("pass --password or set NETATMO_CLIENT_PASSWORD")
    )]
    NoPassword,
}



/// A rejected resolution.
///
/// Besides the [`ConfigurationError`], this carries whatever was resolved
/// before the failing check. That value is for diagnostics only; it is
/// never a usable configuration.
#[derive(Debug)]
pub struct ResolveError {
    error: ConfigurationError,
    partial: Option<Box<PartialConfiguration>>,
}

impl ResolveError {
    pub(crate) fn new(error: ConfigurationError) -> Self {
        Self {
            error,
            partial: None,
        }
    }

    pub(crate) fn with_partial(error: ConfigurationError, partial: PartialConfiguration) -> Self {
        Self {
            error,
            partial: Some(Box::new(partial)),
        }
    }

    pub fn error(&self) -> &ConfigurationError {
        &self.error
    }

    /// Fields resolved before the failing check, if resolution got past
    /// argument parsing.
    pub fn partial(&self) -> Option<&PartialConfiguration> {
        self.partial.as_deref()
    }

    pub fn into_error(self) -> ConfigurationError {
        self.error
    }
}

impl From<ConfigurationError> for ResolveError {
    fn from(error: ConfigurationError) -> Self {
        Self::new(error)
    }
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.error, f)
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error.source()
    }
}

impl Diagnostic for ResolveError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.error.code()
    }

    fn severity(&self) -> Option<Severity> {
        self.error.severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.error.help()
    }

    fn url<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.error.url()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.error.source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.error.labels()
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        self.error.related()
    }

    fn diagnostic_source(&self) -> Option<&dyn Diagnostic> {
        self.error.diagnostic_source()
    }
}
