use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `LISTEN_ADDR` could not be parsed as a socket address.
    ///
    /// The value must be of the form `host:port`, for example `0.0.0.0:5000`.
    #[error("Invalid listen address: {0}")]
    InvalidListenAddr(String),
}
