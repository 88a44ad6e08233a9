use crate::{env::EnvManager, error::CliError};
use chrono::NaiveDate;
use connectors::postgres::client::PgSettings;

const REQUIRED_VARS: [&str; 5] = ["DB_HOST", "DB_PORT", "DB_NAME", "DB_USER", "DB_PASSWORD"];

/// Assembles the connection settings from the environment, reporting every
/// missing variable at once.
pub fn pg_settings(env: &EnvManager) -> Result<PgSettings, CliError> {
    let missing: Vec<&str> = REQUIRED_VARS
        .iter()
        .copied()
        .filter(|var| env.get(var).is_none_or(str::is_empty))
        .collect();
    if !missing.is_empty() {
        return Err(CliError::Config(format!(
            "Missing database connection settings: {}",
            missing.join(", ")
        )));
    }

    let port_raw = env.get("DB_PORT").unwrap_or_default();
    let port = port_raw
        .parse::<u16>()
        .map_err(|_| CliError::Config(format!("DB_PORT is not a valid port: {port_raw}")))?;

    Ok(PgSettings {
        host: env.get("DB_HOST").unwrap_or_default().to_string(),
        port,
        dbname: env.get("DB_NAME").unwrap_or_default().to_string(),
        user: env.get("DB_USER").unwrap_or_default().to_string(),
        password: env.get("DB_PASSWORD").unwrap_or_default().to_string(),
    })
}

/// Validates the single positional argument: a YYYY-MM-DD calendar date.
pub fn parse_cutoff(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(raw.to_string()))
}
