//! Command-line interface definitions for the exporter binary.

use std::{collections::HashMap, env::VarError, ffi::OsString};

use clap::Parser;
use miette::{miette, Result};

use crate::configuration::keys::{
    ConfigurationKey,
    FLAG_CLIENT_ID,
    FLAG_CLIENT_SECRET,
    FLAG_LISTEN_ADDRESS,
    FLAG_LOG_LEVEL,
    FLAG_PASSWORD,
    FLAG_REFRESH_INTERVAL,
    FLAG_STALE_DURATION,
    FLAG_USERNAME,
};



/// Command-line arguments.
///
/// Every flag takes the next argument as its value, even if it starts
/// with `-`, so secrets like `-p4ss` can be passed.
///
/// Every flag is optional and kept as a raw string: `None` means the flag
/// was not on the command line, `Some("")` means it was passed explicitly
/// as an empty value. Coercion and defaulting happen later, once the
/// environment has been consulted.
#[derive(Parser, Debug, Default)]
#[command(
    name = "netatmo-exporter",
    author,
    about = "Prometheus exporter for Netatmo weather station data.",
    version
)]
pub struct CLIArgs {
    #[arg(
        long = FLAG_LISTEN_ADDRESS,
        allow_hyphen_values = true,
        value_name = "ADDRESS",
        help = "Address to listen on (host:port). Defaults to :9210."
    )]
    pub listen_address: Option<String>,

    #[arg(
        long = FLAG_LOG_LEVEL,
        allow_hyphen_values = true,
        value_name = "LEVEL",
        help = "Log level: panic, fatal, error, warn, info, debug or trace. Defaults to info."
    )]
    pub log_level: Option<String>,

    #[arg(
        long = FLAG_REFRESH_INTERVAL,
        allow_hyphen_values = true,
        value_name = "DURATION",
        help = "How often to poll the Netatmo API, e.g. 5m. Defaults to 8m."
    )]
    pub refresh_interval: Option<String>,

    #[arg(
        long = FLAG_STALE_DURATION,
        allow_hyphen_values = true,
        value_name = "DURATION",
        help = "Age after which fetched data is considered stale, e.g. 30m. Defaults to 30m."
    )]
    pub stale_duration: Option<String>,

    #[arg(
        long = FLAG_CLIENT_ID,
        allow_hyphen_values = true,
        value_name = "ID",
        help = "Client ID for the Netatmo app."
    )]
    pub client_id: Option<String>,

    #[arg(
        long = FLAG_CLIENT_SECRET,
        allow_hyphen_values = true,
        value_name = "SECRET",
        help = "Client secret for the Netatmo app."
    )]
    pub client_secret: Option<String>,

    #[arg(
        long = FLAG_USERNAME,
        allow_hyphen_values = true,
        value_name = "USERNAME",
        help = "Username of the Netatmo account."
    )]
    pub username: Option<String>,

    #[arg(
        long = FLAG_PASSWORD,
        allow_hyphen_values = true,
        value_name = "PASSWORD",
        help = "Password of the Netatmo account."
    )]
    pub password: Option<String>,
}


/// Convert raw process arguments into strings, failing on the first one
/// that is not valid UTF-8 instead of altering it.
pub fn unicode_arguments<I>(arguments: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = OsString>,
{
    arguments
        .into_iter()
        .enumerate()
        .map(|(position, argument)| {
            // The value itself is not printed, it may be a secret.
            argument
                .into_string()
                .map_err(|_| miette!("Argument at position {} is not valid UTF-8.", position))
        })
        .collect()
}

/// Read every configuration environment variable once through `lookup`.
///
/// Unset variables are left out of the snapshot. A variable that is set but
/// not valid Unicode is an error rather than being treated as unset.
pub fn environment_snapshot<F>(lookup: F) -> Result<HashMap<&'static str, String>>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let mut snapshot = HashMap::with_capacity(ConfigurationKey::ALL.len());

    for key in ConfigurationKey::ALL {
        match lookup(key.env_var()) {
            Ok(value) => {
                snapshot.insert(key.env_var(), value);
            }
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(_)) => {
                return Err(miette!(
                    "Environment variable {} is not valid Unicode.",
                    key.env_var()
                ));
            }
        }
    }

    Ok(snapshot)
}
