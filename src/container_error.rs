use thiserror::Error;

/// Error type returned by factories.
///
/// Anything implementing `std::error::Error + Send + Sync` converts into it with `?`,
/// including [`ContainerError`] itself, so a factory can forward a failed nested resolution.
pub type FactoryError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ContainerError {
    /// The name has neither a transient nor a singleton registration.
    #[error("No binding found for name: {name}")]
    NoBindingFound { name: String },

    /// The value resolved under `name` is not of the requested type.
    #[error("Type mismatch for name: {name} (expected {expected})")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },

    /// The factory registered under the name failed. Passed through untouched.
    #[error(transparent)]
    Factory(FactoryError),
}

impl ContainerError {
    /// Name that caused the error, when the container itself produced it.
    pub fn name(&self) -> Option<&str> {
        match self {
            ContainerError::NoBindingFound { name } | ContainerError::TypeMismatch { name, .. } => {
                Some(name)
            }
            ContainerError::Factory(_) => None,
        }
    }

    pub fn is_no_binding(&self) -> bool {
        matches!(self, ContainerError::NoBindingFound { .. })
    }
}
