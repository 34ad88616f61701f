//! Query Execution Module
//!
//! The four fixed query templates the application can run, with
//! positional bind parameters. User input is never interpolated into the
//! SQL text; name fragments travel as `LIKE` parameters wrapped in `%`
//! wildcards and the category id as an integer parameter.

use mysql::prelude::Queryable;
use tracing::debug;

use crate::catalog::{Actor, CatalogStore, Category};
use crate::core::db::ConnectionProvider;
use crate::core::{CastqError, Result};

const LIST_ACTORS: &str = "\
    SELECT actor_id, first_name, last_name \
    FROM actor \
    ORDER BY actor_id";

const SEARCH_BY_NAME: &str = "\
    SELECT actor_id, first_name, last_name \
    FROM actor \
    WHERE first_name LIKE ? AND last_name LIKE ? \
    ORDER BY actor_id";

const LIST_CATEGORIES: &str = "\
    SELECT category_id, name \
    FROM category \
    ORDER BY category_id";

const ACTORS_IN_CATEGORY: &str = "\
    SELECT DISTINCT a.actor_id, a.first_name, a.last_name \
    FROM film_category fc \
    JOIN film_actor fa ON fc.film_id = fa.film_id \
    JOIN actor a ON fa.actor_id = a.actor_id \
    WHERE fc.category_id = ? \
    ORDER BY a.actor_id";

/// Wraps a name fragment in `%` wildcards for a `LIKE` bind parameter.
/// An empty fragment becomes `%%`, which matches every value.
pub fn like_pattern(fragment: &str) -> String {
    format!("%{}%", fragment)
}

/// Runs the fixed query templates, one scoped connection per call.
pub struct QueryExecutor<'a> {
    provider: &'a ConnectionProvider,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(provider: &'a ConnectionProvider) -> Self {
        QueryExecutor { provider }
    }
}

impl CatalogStore for QueryExecutor<'_> {
    fn list_actors(&self) -> Result<Vec<Actor>> {
        debug!("listing all actors");
        let mut conn = self.provider.conn()?;
        conn.exec_map(
            LIST_ACTORS,
            (),
            |(actor_id, first_name, last_name): (u16, String, String)| Actor {
                actor_id,
                first_name,
                last_name,
            },
        )
        .map_err(|e| CastqError::Query(format!("failed to list actors: {}", e)))
    }

    fn search_by_name(&self, first_name: &str, last_name: &str) -> Result<Vec<Actor>> {
        debug!(first_name, last_name, "searching actors by name");
        let mut conn = self.provider.conn()?;
        conn.exec_map(
            SEARCH_BY_NAME,
            (like_pattern(first_name), like_pattern(last_name)),
            |(actor_id, first_name, last_name): (u16, String, String)| Actor {
                actor_id,
                first_name,
                last_name,
            },
        )
        .map_err(|e| CastqError::Query(format!("failed to search actors by name: {}", e)))
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        debug!("listing categories");
        let mut conn = self.provider.conn()?;
        conn.exec_map(
            LIST_CATEGORIES,
            (),
            |(category_id, name): (u8, String)| Category { category_id, name },
        )
        .map_err(|e| CastqError::Query(format!("failed to list categories: {}", e)))
    }

    fn actors_in_category(&self, category_id: u16) -> Result<Vec<Actor>> {
        debug!(category_id, "listing actors in category");
        let mut conn = self.provider.conn()?;
        conn.exec_map(
            ACTORS_IN_CATEGORY,
            (category_id,),
            |(actor_id, first_name, last_name): (u16, String, String)| Actor {
                actor_id,
                first_name,
                last_name,
            },
        )
        .map_err(|e| {
            CastqError::Query(format!(
                "failed to list actors in category {}: {}",
                category_id, e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_fragment() {
        assert_eq!(like_pattern("JOHN"), "%JOHN%");
    }

    #[test]
    fn test_like_pattern_on_empty_fragment_matches_everything() {
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_templates_bind_rather_than_interpolate() {
        // Fragments and category ids only ever enter as `?` parameters.
        assert_eq!(SEARCH_BY_NAME.matches('?').count(), 2);
        assert_eq!(ACTORS_IN_CATEGORY.matches('?').count(), 1);
        assert_eq!(LIST_ACTORS.matches('?').count(), 0);
        assert_eq!(LIST_CATEGORIES.matches('?').count(), 0);
    }

    #[test]
    fn test_templates_order_by_ascending_id() {
        assert!(LIST_ACTORS.ends_with("ORDER BY actor_id"));
        assert!(SEARCH_BY_NAME.ends_with("ORDER BY actor_id"));
        assert!(LIST_CATEGORIES.ends_with("ORDER BY category_id"));
        assert!(ACTORS_IN_CATEGORY.ends_with("ORDER BY a.actor_id"));
    }

    #[test]
    fn test_category_join_is_distinct() {
        // An actor in several films of one category must come back once.
        assert!(ACTORS_IN_CATEGORY.starts_with("SELECT DISTINCT"));
        assert!(ACTORS_IN_CATEGORY.contains("film_category"));
        assert!(ACTORS_IN_CATEGORY.contains("film_actor"));
    }
}
