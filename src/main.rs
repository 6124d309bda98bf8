use miette::{Context, Result};
use netatmo_exporter::{
    cli::{environment_snapshot, unicode_arguments},
    configuration::{self, ConfigurationError},
    logging::initialize_tracing,
};
use tracing::{debug, info};


fn main() -> Result<()> {
    let args = unicode_arguments(std::env::args_os())?;
    let environment = environment_snapshot(|key| std::env::var(key))?;

    let configuration = match configuration::resolve(&args, |key| {
        environment.get(key).cloned().unwrap_or_default()
    }) {
        Ok(configuration) => configuration,
        Err(failure) => {
            // clap knows how to print help, version and usage errors (and which exit code to use).
            if let ConfigurationError::Arguments(arguments_error) = failure.error() {
                arguments_error.exit();
            }

            return Err(failure).wrap_err("Invalid configuration.");
        }
    };


    initialize_tracing(configuration.log_level())
        .wrap_err("Failed to initialize tracing.")?;

    info!(
        listen_address = configuration.listen_address(),
        log_level = %configuration.log_level(),
        refresh_interval = ?configuration.refresh_interval(),
        stale_duration = ?configuration.stale_duration(),
        "Configuration resolved."
    );
    debug!(credentials = ?configuration.credentials(), "Using Netatmo credentials.");


    Ok(())
}
