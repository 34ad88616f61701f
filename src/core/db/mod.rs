pub mod connection;
pub mod query;

pub use connection::{ConnectionProvider, Credentials};
pub use query::QueryExecutor;
