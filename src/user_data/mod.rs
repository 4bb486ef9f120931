//! Flat query service over the external `user_details` table
//!
//! The table belongs to another system and nothing here governs its shape:
//! the single route runs a fixed `SELECT *` and returns every row as a JSON
//! array of values in column order. This component is an independent leaf
//! and shares no code with the library service.

pub mod rows;

use std::convert::Infallible;

use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use thiserror::Error;
use tokio_postgres::NoTls;
use warp::http::StatusCode;
use warp::Filter;

/// Errors surfaced by the flat query service
#[derive(Debug, Error)]
pub enum UserDataError {
    /// Connection pool issues
    #[error("Pool error: {0}")]
    Pool(String),

    /// Query execution or row decoding failure
    #[error("Query error: {0}")]
    Query(String),
}

impl From<deadpool_postgres::PoolError> for UserDataError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        UserDataError::Pool(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for UserDataError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        UserDataError::Pool(err.to_string())
    }
}

impl From<tokio_postgres::Error> for UserDataError {
    fn from(err: tokio_postgres::Error) -> Self {
        UserDataError::Query(err.to_string())
    }
}

/// Connection settings for the external user-details database
#[derive(Debug, Clone)]
pub struct UserDataConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for UserDataConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "infy".to_string(),
            user: "postgres".to_string(),
            password: "".to_string(),
        }
    }
}

impl UserDataConfig {
    /// Read settings from `USER_DATA_DB_*` environment keys, falling back to
    /// local defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("USER_DATA_DB_HOST").unwrap_or(defaults.host),
            port: std::env::var("USER_DATA_DB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database: std::env::var("USER_DATA_DB_NAME").unwrap_or(defaults.database),
            user: std::env::var("USER_DATA_DB_USER").unwrap_or(defaults.user),
            password: std::env::var("USER_DATA_DB_PASSWORD").unwrap_or(defaults.password),
        }
    }

    /// Build a connection pool from this configuration
    pub fn build_pool(&self) -> Result<Pool, UserDataError> {
        let mut cfg = tokio_postgres::Config::new();
        cfg.host(&self.host);
        cfg.port(self.port);
        cfg.dbname(&self.database);
        cfg.user(&self.user);
        cfg.password(&self.password);

        let manager_config = ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        };

        let manager = Manager::from_config(cfg, NoTls, manager_config);

        let pool = Pool::builder(manager)
            .max_size(16)
            .runtime(Runtime::Tokio1)
            .build()?;

        Ok(pool)
    }
}

/// Route definition for the flat query service
///
/// GET /data
pub fn configure_routes(
    pool: Pool,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path("data")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::any().map(move || pool.clone()))
        .and_then(get_data_handler)
}

pub async fn get_data_handler(pool: Pool) -> Result<impl warp::Reply, Infallible> {
    tracing::info!("GET /data");

    Ok(match fetch_user_details(&pool).await {
        Ok(rows) => warp::reply::with_status(warp::reply::json(&rows), StatusCode::OK),
        Err(err) => {
            tracing::error!(error = %err, "user_details query failed");
            warp::reply::with_status(
                warp::reply::json(&serde_json::json!({ "error": err.to_string() })),
                StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    })
}

/// Run the fixed query and serialize every row positionally
async fn fetch_user_details(pool: &Pool) -> Result<Vec<Vec<serde_json::Value>>, UserDataError> {
    let conn = pool.get().await?;

    let rows = conn.query("SELECT * FROM user_details", &[]).await?;

    let values = rows
        .iter()
        .map(rows::row_values)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserDataConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.database, "infy");
    }

    #[test]
    fn test_pool_error_display() {
        let err = UserDataError::Pool("no connections available".to_string());
        assert!(err.to_string().contains("Pool error"));
    }

    #[test]
    fn test_query_error_display() {
        let err = UserDataError::Query("relation does not exist".to_string());
        assert!(err.to_string().contains("Query error"));
        assert!(err.to_string().contains("relation does not exist"));
    }
}
