//! Tracing subscriber setup for the exporter binary.

use miette::{Context, IntoDiagnostic, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::configuration::LogLevel;


/// Filter directives for `log_level`. Output from dependencies is capped
/// at `warn` unless the exporter itself is quieter than that.
pub fn filter_directives(log_level: LogLevel) -> String {
    let exporter_level = log_level.level_filter();
    let dependency_level = exporter_level.min(LevelFilter::WARN);

    format!(
        "{},{}={}",
        dependency_level,
        env!("CARGO_CRATE_NAME"),
        exporter_level
    )
    .to_lowercase()
}

/// Install a global console subscriber filtered at `log_level`.
pub fn initialize_tracing(log_level: LogLevel) -> Result<()> {
    let console_filter = EnvFilter::try_new(filter_directives(log_level))
        .into_diagnostic()
        .wrap_err("Failed to build the console log filter.")?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(console_filter)
        .try_init()
        .into_diagnostic()
        .wrap_err("Failed to install the tracing subscriber.")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_levels_keep_dependencies_at_warn() {
        assert_eq!(
            filter_directives(LogLevel::Debug),
            "warn,netatmo_exporter=debug"
        );
        assert_eq!(
            filter_directives(LogLevel::Info),
            "warn,netatmo_exporter=info"
        );
    }

    #[test]
    fn quiet_levels_also_quieten_dependencies() {
        assert_eq!(
            filter_directives(LogLevel::Fatal),
            "error,netatmo_exporter=error"
        );
    }

    #[test]
    fn directives_parse_for_every_level() {
        for level in ["panic", "fatal", "error", "warn", "info", "debug", "trace"] {
            let level: LogLevel = level.parse().unwrap();
            assert!(EnvFilter::try_new(filter_directives(level)).is_ok());
        }
    }
}
