//! Row types for the movie-rental catalog and the store seam the menu
//! controller queries through. Both entities are read-only from this
//! application's perspective.

use crate::core::Result;

/// A performer record from the `actor` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub actor_id: u16,
    pub first_name: String,
    pub last_name: String,
}

/// A genre record from the `category` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub category_id: u8,
    pub name: String,
}

/// The four read operations the menu can dispatch. `QueryExecutor` is the
/// live implementation; tests drive the menu with an in-memory fake.
pub trait CatalogStore {
    /// All actors, ordered by ascending `actor_id`.
    fn list_actors(&self) -> Result<Vec<Actor>>;

    /// Actors whose first and last names contain the given fragments,
    /// ordered by ascending `actor_id`. Empty fragments match everything.
    fn search_by_name(&self, first_name: &str, last_name: &str) -> Result<Vec<Actor>>;

    /// All categories, ordered by ascending `category_id`.
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// The distinct actors appearing in at least one film of the given
    /// category, ordered by ascending `actor_id`.
    fn actors_in_category(&self, category_id: u16) -> Result<Vec<Actor>>;
}
