use thiserror::Error;

/// Failures while establishing or validating a database connection.
/// Malformed settings are rejected upstream, before a connection is attempted.
#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("PostgreSQL connection error: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}

/// Failures while reading from or writing to a connected database.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Query failed: {0}")]
    Query(#[from] tokio_postgres::Error),

    #[error("Unexpected row shape: {0}")]
    RowShape(String),
}
