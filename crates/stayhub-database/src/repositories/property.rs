//! Property repository implementation.
//!
//! Home of the dynamic search-query composer: [`build_search_query`] turns
//! a normalized criteria record into a single parametrized statement with
//! row-level predicates, grouping, an optional aggregate threshold on the
//! review average, ordering, and a bound row count.

use sqlx::PgPool;
use tracing::debug;

use stayhub_core::config::search::SearchConfig;
use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::property::{CreateProperty, Property, PropertyListing};
use stayhub_entity::search::{PropertySearch, SearchFilters};

use crate::query::{QueryParam, SqlBuilder};

/// Base of the search query. Selecting the review average alongside the
/// property columns is what forces the grouping clause later on.
const SEARCH_BASE: &str =
    "SELECT properties.*, AVG(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Compose the property search query for a normalized criteria record.
///
/// Criteria are processed in a fixed order (city, owner, minimum price,
/// maximum price) because the connector chosen for each predicate depends
/// on whether any earlier one was present. The aggregate rating threshold
/// lives after `GROUP BY` and keeps its own connector state. The limit is
/// always the final parameter.
fn build_search_query(
    filters: &SearchFilters,
    limit: i64,
    case_insensitive_city: bool,
) -> (String, Vec<QueryParam>) {
    let mut builder = SqlBuilder::new(SEARCH_BASE);

    if let Some(city) = &filters.city {
        let expr = if case_insensitive_city {
            "properties.city ILIKE"
        } else {
            "properties.city LIKE"
        };
        builder.push_predicate(expr, QueryParam::Text(format!("%{city}%")));
    }
    if let Some(owner_id) = filters.owner_id {
        builder.push_predicate("properties.owner_id =", QueryParam::Int(owner_id));
    }
    if let Some(min) = filters.min_cost_cents {
        builder.push_predicate("properties.cost_per_night >=", QueryParam::Int(min));
    }
    if let Some(max) = filters.max_cost_cents {
        builder.push_predicate("properties.cost_per_night <=", QueryParam::Int(max));
    }

    builder.push_sql("GROUP BY properties.id");
    if let Some(rating) = filters.min_rating {
        builder.push_aggregate_predicate(
            "AVG(property_reviews.rating) >=",
            QueryParam::Float(rating),
        );
    }

    builder.push_sql("ORDER BY properties.cost_per_night");
    builder.push_limit(limit);
    builder.into_parts()
}

/// Repository for property CRUD and search operations.
#[derive(Debug, Clone)]
pub struct PropertyRepository {
    pool: PgPool,
    config: SearchConfig,
}

impl PropertyRepository {
    /// Create a new property repository.
    pub fn new(pool: PgPool, config: SearchConfig) -> Self {
        Self { pool, config }
    }

    /// Search property listings matching the given criteria.
    ///
    /// Criteria are normalized first; a malformed criterion fails the call
    /// before any statement is sent to the database. `limit` falls back to
    /// the configured default when absent and is clamped to the configured
    /// maximum. Execution errors propagate with their source preserved.
    pub async fn search(
        &self,
        criteria: &PropertySearch,
        limit: Option<i64>,
    ) -> AppResult<Vec<PropertyListing>> {
        let filters = criteria.normalize()?;
        let limit = limit
            .unwrap_or(self.config.default_limit)
            .clamp(1, self.config.max_limit);

        let (sql, params) =
            build_search_query(&filters, limit, self.config.case_insensitive_city);
        debug!(sql = %sql, params = params.len(), "Composed property search query");

        let mut query = sqlx::query_as::<_, PropertyListing>(&sql);
        for param in params {
            query = match param {
                QueryParam::Text(s) => query.bind(s),
                QueryParam::Int(i) => query.bind(i),
                QueryParam::Float(f) => query.bind(f),
            };
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search properties", e))
    }

    /// Find a property by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Property>> {
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find property", e))
    }

    /// Create a new property listing.
    pub async fn create(&self, data: &CreateProperty) -> AppResult<Property> {
        sqlx::query_as::<_, Property>(
            "INSERT INTO properties (owner_id, title, description, thumbnail_photo_url, \
             cover_photo_url, cost_per_night, parking_spaces, number_of_bathrooms, \
             number_of_bedrooms, country, street, city, province, post_code) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.thumbnail_photo_url)
        .bind(&data.cover_photo_url)
        .bind(data.cost_per_night)
        .bind(data.parking_spaces)
        .bind(data.number_of_bathrooms)
        .bind(data.number_of_bedrooms)
        .bind(&data.country)
        .bind(&data.street)
        .bind(&data.city)
        .bind(&data.province)
        .bind(&data.post_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create property", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(search: &PropertySearch, limit: i64) -> (String, Vec<QueryParam>) {
        build_search_query(&search.normalize().unwrap(), limit, true)
    }

    /// Placeholder ordinal N must address the Nth parameter, exactly once.
    fn assert_placeholders_consistent(sql: &str, params: &[QueryParam]) {
        for ordinal in 1..=params.len() {
            assert_eq!(
                sql.matches(&format!("${ordinal}")).count(),
                1,
                "placeholder ${ordinal} missing or duplicated in {sql:?}"
            );
        }
        assert_eq!(sql.matches('$').count(), params.len());
    }

    #[test]
    fn test_no_criteria_yields_group_order_limit_only() {
        let (sql, params) = compose(&PropertySearch::default(), 10);
        assert!(!sql.contains("WHERE"));
        assert!(!sql.contains("HAVING"));
        assert!(sql.contains("GROUP BY properties.id"));
        assert!(sql.ends_with("ORDER BY properties.cost_per_night LIMIT $1"));
        assert_eq!(params, vec![QueryParam::Int(10)]);
    }

    #[test]
    fn test_single_criterion_opens_with_where() {
        for search in [
            PropertySearch {
                city: Some("Toronto".into()),
                ..Default::default()
            },
            PropertySearch {
                owner_id: Some(7.into()),
                ..Default::default()
            },
            PropertySearch {
                minimum_price_per_night: Some(80.into()),
                ..Default::default()
            },
            PropertySearch {
                maximum_price_per_night: Some(120.into()),
                ..Default::default()
            },
        ] {
            let (sql, params) = compose(&search, 10);
            assert_eq!(sql.matches("WHERE").count(), 1, "{sql}");
            assert!(!sql.contains(" AND "), "{sql}");
            assert_placeholders_consistent(&sql, &params);
        }
    }

    #[test]
    fn test_multiple_criteria_use_where_then_and_in_fixed_order() {
        let search = PropertySearch {
            city: Some("Toronto".into()),
            owner_id: Some(7.into()),
            minimum_price_per_night: Some(80.into()),
            maximum_price_per_night: Some(120.into()),
            ..Default::default()
        };
        let (sql, params) = compose(&search, 10);
        assert_eq!(sql.matches("WHERE").count(), 1);
        assert_eq!(sql.matches(" AND ").count(), 3);

        // Fixed processing order: city, owner, minimum price, maximum price.
        let city = sql.find("properties.city ILIKE $1").unwrap();
        let owner = sql.find("AND properties.owner_id = $2").unwrap();
        let min = sql.find("AND properties.cost_per_night >= $3").unwrap();
        let max = sql.find("AND properties.cost_per_night <= $4").unwrap();
        assert!(city < owner && owner < min && min < max);
        assert_placeholders_consistent(&sql, &params);
    }

    #[test]
    fn test_price_bounds_are_scaled_numeric_parameters() {
        let search = PropertySearch {
            minimum_price_per_night: Some(80.into()),
            maximum_price_per_night: Some(120.into()),
            ..Default::default()
        };
        let (_, params) = compose(&search, 10);
        assert_eq!(
            params,
            vec![
                QueryParam::Int(8000),
                QueryParam::Int(12000),
                QueryParam::Int(10),
            ]
        );
    }

    #[test]
    fn test_rating_threshold_appends_having_after_grouping() {
        let search = PropertySearch {
            owner_id: Some(3.into()),
            minimum_rating: Some(4.into()),
            ..Default::default()
        };
        let (sql, params) = compose(&search, 10);
        let group = sql.find("GROUP BY properties.id").unwrap();
        let having = sql.find("HAVING AVG(property_reviews.rating) >= $2").unwrap();
        assert!(group < having);
        assert_eq!(params[1], QueryParam::Float(4.0));
        assert_placeholders_consistent(&sql, &params);
    }

    #[test]
    fn test_city_search_scenario() {
        let search = PropertySearch {
            city: Some("Vancouver".into()),
            ..Default::default()
        };
        let (sql, params) = compose(&search, 5);
        assert!(sql.contains("WHERE properties.city ILIKE $1"));
        assert!(sql.contains("GROUP BY properties.id"));
        assert!(!sql.contains("HAVING"));
        assert_eq!(
            params,
            vec![
                QueryParam::Text("%Vancouver%".into()),
                QueryParam::Int(5),
            ]
        );
    }

    #[test]
    fn test_price_and_rating_scenario() {
        let search = PropertySearch {
            minimum_price_per_night: Some(50.into()),
            maximum_price_per_night: Some(150.into()),
            minimum_rating: Some(4.into()),
            ..Default::default()
        };
        let (sql, params) = compose(&search, 10);
        assert_eq!(
            params,
            vec![
                QueryParam::Int(5000),
                QueryParam::Int(15000),
                QueryParam::Float(4.0),
                QueryParam::Int(10),
            ]
        );
        assert!(sql.contains("WHERE properties.cost_per_night >= $1"));
        assert!(sql.contains("AND properties.cost_per_night <= $2"));
        assert!(sql.contains("HAVING AVG(property_reviews.rating) >= $3"));
        assert!(sql.ends_with("LIMIT $4"));
        assert_placeholders_consistent(&sql, &params);
    }

    #[test]
    fn test_case_sensitive_city_uses_like() {
        let filters = SearchFilters {
            city: Some("Montreal".into()),
            ..Default::default()
        };
        let (sql, _) = build_search_query(&filters, 10, false);
        assert!(sql.contains("WHERE properties.city LIKE $1"));
        assert!(!sql.contains("ILIKE"));
    }

    #[test]
    fn test_composition_is_deterministic() {
        let search = PropertySearch {
            city: Some("Calgary".into()),
            minimum_rating: Some(3.into()),
            ..Default::default()
        };
        assert_eq!(compose(&search, 20), compose(&search, 20));
    }
}
