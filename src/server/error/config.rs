use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but holds an unusable value.
    #[error("Invalid value for environment variable {0}: '{1}'")]
    InvalidEnvVar(String, String),
}
