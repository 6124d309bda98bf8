use super::error::{ConfigurationError, ResolveError};

/// Represents a configuration that can be validated or resolved.
pub trait ResolvableConfiguration {
    type Resolved;

    /// Resolve the configuration into its `Resolved` type.
    /// If the resolution / validation fails, return the [`ConfigurationError`]
    /// identifying the rule that rejected it.
    fn resolve(self) -> Result<Self::Resolved, ConfigurationError>;
}


/// Represents a configuration that can be validated or resolved,
/// but where that process requires some additional context.
pub trait ResolvableConfigurationWithContext {
    type Context;
    type Resolved;

    /// Resolve the configuration into its `Resolved` type.
    /// If the resolution / validation fails, the returned [`ResolveError`]
    /// may also carry what was resolved before the failing check.
    fn resolve(self, context: Self::Context) -> Result<Self::Resolved, ResolveError>;
}
