use crate::ports::{ConfigError, RepositoryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_repository_errors_with_layer_context() {
        let err: AppError = RepositoryError::NotFound("Campsite not found".to_string()).into();
        assert_eq!(err.to_string(), "Repository error: Not found: Campsite not found");
    }

    #[test]
    fn wraps_config_errors_with_layer_context() {
        let err: AppError = ConfigError::ReadError("missing config dir".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Failed to read configuration: missing config dir"
        );
    }
}
