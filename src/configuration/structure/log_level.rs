use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;
use tracing::level_filters::LevelFilter;


/// Severity threshold for the exporter's log output, ordered from
/// most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Panic,
    Fatal,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("not a valid log level: \"{0}\"")]
pub struct UnknownLogLevel(pub String);


impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Panic => "panic",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// The closest `tracing` filter. `tracing` has nothing above `ERROR`,
    /// so `panic` and `fatal` collapse into it.
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Panic | Self::Fatal | Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(UnknownLogLevel(value.to_string())),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("debug".parse(), Ok(LogLevel::Debug));
        assert_eq!("DEBUG".parse(), Ok(LogLevel::Debug));
        assert_eq!("Trace".parse(), Ok(LogLevel::Trace));
        assert_eq!("PaNiC".parse(), Ok(LogLevel::Panic));
        assert_eq!("warning".parse(), Ok(LogLevel::Warn));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "verbose".parse::<LogLevel>(),
            Err(UnknownLogLevel("verbose".to_string()))
        );
        assert!("".parse::<LogLevel>().is_err());
        assert!(" info".parse::<LogLevel>().is_err());
    }

    #[test]
    fn display_round_trips_every_level() {
        for level in [
            LogLevel::Panic,
            LogLevel::Fatal,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert_eq!(level.to_string().parse(), Ok(level));
        }
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn severe_levels_collapse_into_error_filter() {
        assert_eq!(LogLevel::Fatal.level_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Panic.level_filter(), LevelFilter::ERROR);
        assert_eq!(LogLevel::Debug.level_filter(), LevelFilter::DEBUG);
    }
}
