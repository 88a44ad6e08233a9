use crate::{
    error::{ConnectorError, DbError},
    postgres::{
        client::{PgSettings, connect_client},
        params::PgParamStore,
    },
};
use model::core::value::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_postgres::{Client, Row};

/// Shared handle over one Postgres session. Reads take a shared lock, writes
/// an exclusive one, so the extractor and the sink can hold clones of the same
/// adapter.
#[derive(Clone)]
pub struct PgAdapter {
    client: Arc<RwLock<Client>>,
}

impl PgAdapter {
    pub async fn connect(settings: &PgSettings) -> Result<Self, ConnectorError> {
        let client = Arc::new(RwLock::new(connect_client(settings).await?));
        Ok(PgAdapter { client })
    }

    pub async fn query(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Row>, DbError> {
        let bindings = PgParamStore::from_values(params);
        let client = self.client.read().await;
        let rows = client.query(sql, &bindings.as_refs()).await?;
        Ok(rows)
    }

    pub async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<u64, DbError> {
        let bindings = PgParamStore::from_values(params);
        let client = self.client.write().await;
        let affected = client.execute(sql, &bindings.as_refs()).await?;
        Ok(affected)
    }
}
