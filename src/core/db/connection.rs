//! Connection Management Module
//!
//! Supplies database connections for the fixed sakila target. Credentials
//! come from the command line once at startup; the target host, port and
//! schema are compile-time constants. Each menu operation borrows one
//! pooled connection and releases it on drop, including on error paths.

use mysql::{Opts, OptsBuilder, Pool, PooledConn};
use tracing::info;

use crate::core::{CastqError, Result};

/// Hostname of the backing store.
pub const DB_HOST: &str = "localhost";
/// TCP port of the backing store.
pub const DB_PORT: u16 = 3306;
/// Schema holding the movie-rental catalog.
pub const DB_SCHEMA: &str = "sakila";

/// Store credentials captured from the command line, immutable for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Hands out one connection per operation from an underlying pool.
#[derive(Debug)]
pub struct ConnectionProvider {
    pool: Pool,
}

impl ConnectionProvider {
    /// Opens a pool against the fixed connection target.
    ///
    /// An unreachable store or rejected credentials surfaces as
    /// `CastqError::Connection`, here or on the first `conn` call.
    pub fn connect(credentials: &Credentials) -> Result<Self> {
        info!(host = DB_HOST, port = DB_PORT, schema = DB_SCHEMA, "connecting");
        let pool = Pool::new(Self::opts(credentials)).map_err(CastqError::Connection)?;
        Ok(ConnectionProvider { pool })
    }

    /// Borrows a connection scoped to a single operation.
    pub fn conn(&self) -> Result<PooledConn> {
        self.pool.get_conn().map_err(CastqError::Connection)
    }

    fn opts(credentials: &Credentials) -> Opts {
        Opts::from(
            OptsBuilder::new()
                .ip_or_hostname(Some(DB_HOST))
                .tcp_port(DB_PORT)
                .db_name(Some(DB_SCHEMA))
                .user(Some(credentials.username.as_str()))
                .pass(Some(credentials.password.as_str())),
        )
    }
}
