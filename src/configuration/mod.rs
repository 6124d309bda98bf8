//! This module contains all configuration-relevant code: the key table,
//! the configuration structure and the resolver that builds it from
//! command-line arguments and environment variables.
//!
//! Your starting point should probably be [`resolve`].
//!
//! # Internals
//! Resolution goes through an unvalidated ("unresolved") and a validated
//! ("resolved") configuration structure.
//!
//! The arguments are first parsed into [`CLIArgs`][crate::cli::CLIArgs], which
//! records only what was explicitly passed. Each key is then merged with its
//! environment variable into an [`UnresolvedConfiguration`] using the
//! precedence *flag > non-empty environment variable > default*.
//! Its [`resolve`][traits::ResolvableConfigurationWithContext::resolve] method
//! substitutes defaults, coerces durations and the log level, and validates
//! required fields, always in this order:
//!
//! 1. the argument list contains the invocation name,
//! 2. every flag is known and every supplied value parses,
//! 3. the listen address is non-empty,
//! 4. client ID, client secret, username and password are non-empty.
//!
//! The first failing check decides the returned [`ConfigurationError`].
//!
//! The environment is never read directly: callers pass a lookup function,
//! which returns an empty string for unset variables.

#![allow(rustdoc::private_intra_doc_links)]

mod duration;
mod error;
pub mod keys;
mod structure;
mod traits;
mod utilities;

use clap::Parser;
pub use duration::{parse_duration, DurationParseError};
pub use error::{ConfigurationError, ResolveError};
pub use keys::ConfigurationKey;
pub use structure::*;

use self::traits::ResolvableConfigurationWithContext;
use crate::cli::CLIArgs;


/// Resolve the configuration from the full argument vector (including the
/// invocation name) and an environment lookup, using the built-in defaults.
pub fn resolve<A, F>(args: &[A], env_lookup: F) -> Result<Configuration, ResolveError>
where
    A: AsRef<str>,
    F: Fn(&str) -> String,
{
    resolve_with_defaults(args, env_lookup, ConfigurationDefaults::default())
}

/// Like [`resolve`], but with explicit values for keys no source supplied.
pub fn resolve_with_defaults<A, F>(
    args: &[A],
    env_lookup: F,
    defaults: ConfigurationDefaults,
) -> Result<Configuration, ResolveError>
where
    A: AsRef<str>,
    F: Fn(&str) -> String,
{
    if args.is_empty() {
        return Err(ConfigurationError::NoInvocationName.into());
    }

    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let arguments = CLIArgs::try_parse_from(args).map_err(ConfigurationError::Arguments)?;

    UnresolvedConfiguration::from_sources(arguments, &env_lookup).resolve(defaults)
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn empty_argument_list_never_consults_the_environment() {
        let lookups = Cell::new(0);
        let args: [&str; 0] = [];

        let error = resolve(&args, |_| {
            lookups.set(lookups.get() + 1);
            "value".to_string()
        })
        .unwrap_err();

        assert!(matches!(error.error(), ConfigurationError::NoInvocationName));
        assert!(error.partial().is_none());
        assert_eq!(lookups.get(), 0);
    }

    #[test]
    fn unknown_flag_is_an_argument_error() {
        let error = resolve(&["netatmo-exporter", "--bogus", "x"], |_| String::new()).unwrap_err();

        assert!(matches!(error.error(), ConfigurationError::Arguments(_)));
        assert!(error.partial().is_none());
    }
}
