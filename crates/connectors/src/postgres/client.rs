use crate::error::ConnectorError;
use native_tls::TlsConnector;
use postgres_native_tls::MakeTlsConnector;
use tokio_postgres::{Client, Config, NoTls, config::SslMode};
use tracing::{error, info, warn};

/// Connection parameters, assembled once at startup and passed by reference.
/// No connector reads ambient environment state.
#[derive(Debug, Clone)]
pub struct PgSettings {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: String,
}

impl PgSettings {
    fn config(&self) -> Config {
        let mut config = Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user)
            .password(&self.password);
        config
    }
}

pub(crate) async fn connect_client(settings: &PgSettings) -> Result<Client, ConnectorError> {
    let config = settings.config();
    let client = match config.get_ssl_mode() {
        SslMode::Disable => connect_without_tls(config).await?,
        SslMode::Require => connect_with_tls(config).await?,
        SslMode::Prefer => match connect_with_tls(config.clone()).await {
            Ok(client) => client,
            Err(error) => {
                warn!(%error, "Postgres TLS handshake failed, retrying without TLS");
                connect_without_tls(config).await?
            }
        },
        _ => connect_with_tls(config).await?,
    };

    // Validate the session before any extraction starts.
    client.query_one("SELECT 1", &[]).await?;
    info!(database = %settings.dbname, "Connected to database");

    Ok(client)
}

pub(crate) async fn connect_with_tls(config: Config) -> Result<Client, ConnectorError> {
    let connector = TlsConnector::builder().build()?;
    let tls = MakeTlsConnector::new(connector);
    let (client, connection) = config.connect(tls).await?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(%err, "Postgres connection error");
        }
    });
    Ok(client)
}

pub(crate) async fn connect_without_tls(config: Config) -> Result<Client, ConnectorError> {
    let (client, connection) = config.connect(NoTls).await?;
    tokio::spawn(async move {
        if let Err(err) = connection.await {
            error!(%err, "Postgres connection error");
        }
    });
    Ok(client)
}
