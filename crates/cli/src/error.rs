use connectors::error::ConnectorError;
use engine::error::EtlError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid cutoff date `{0}`: expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database connection failed: {0}")]
    Connector(#[from] ConnectorError),

    #[error("{0}")]
    Etl(#[from] EtlError),
}
