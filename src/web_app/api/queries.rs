// web_app/api/queries.rs - Database query implementations
//
// Read-only queries over the aggregator schema. Pure functions that take
// a pool and parameters and return typed results.

use sqlx::{PgPool, Row};

use crate::web_app::model::*;

/// Errors from the query layer, mapped to ServerFnError at the boundary
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("listing {0} not found")]
    NotFound(i32),
}

const SEARCH_PREDICATE: &str = r#"
      ($1 = ''
       OR lower(p.canonical_title) LIKE '%' || lower($1) || '%'
       OR lower(p.canonical_address) LIKE '%' || lower($1) || '%'
       OR lower(COALESCE(p.description, '')) LIKE '%' || lower($1) || '%')
  AND ($2::bigint IS NULL OR p.min_price >= $2)
  AND ($3::bigint IS NULL OR p.min_price <= $3)
  AND ($4::float8 IS NULL OR p.area >= $4)
  AND ($5::float8 IS NULL OR p.area <= $5)
  AND ($6::int IS NULL OR p.rooms = $6)
"#;

/// Substring search over canonical listings
///
/// Empty query matches everything; unset filters add no predicate.
/// Results are ordered cheapest-first, the way the aggregator's
/// frontend has always shown them.
pub async fn search_listings(
    pool: &PgPool,
    query: &str,
    filters: &SearchFilters,
) -> Result<SearchResponse, QueryError> {
    let sql = format!(
        r#"
        SELECT
            p.id, p.canonical_title, p.canonical_address, p.district,
            p.rooms, p.area, p.property_type, p.min_price, p.image_url,
            COUNT(o.id) AS offers_count
        FROM products p
        LEFT JOIN offers o ON o.product_id = p.id
        WHERE {SEARCH_PREDICATE}
        GROUP BY p.id
        ORDER BY p.min_price ASC
        LIMIT $7 OFFSET $8
        "#
    );

    let results = sqlx::query_as::<_, ListingSummary>(&sql)
        .bind(query)
        .bind(filters.min_price)
        .bind(filters.max_price)
        .bind(filters.min_area)
        .bind(filters.max_area)
        .bind(filters.rooms)
        .bind(filters.limit as i64)
        .bind(filters.offset as i64)
        .fetch_all(pool)
        .await?;

    let count_sql = format!(
        r#"
        SELECT COUNT(*)
        FROM products p
        WHERE {SEARCH_PREDICATE}
        "#
    );

    let total: i64 = sqlx::query_scalar(&count_sql)
        .bind(query)
        .bind(filters.min_price)
        .bind(filters.max_price)
        .bind(filters.min_area)
        .bind(filters.max_area)
        .bind(filters.rooms)
        .fetch_one(pool)
        .await?;

    Ok(SearchResponse {
        results,
        total,
        limit: filters.limit,
        offset: filters.offset,
    })
}

/// Fetch one listing with all of its offers and attributes
pub async fn get_listing(pool: &PgPool, id: i32) -> Result<ListingDetail, QueryError> {
    let row = sqlx::query(
        r#"
        SELECT id, canonical_title, canonical_address, district, description,
               rooms, area, property_type, min_price, image_url, created_at
        FROM products
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(QueryError::NotFound(id))?;

    let offers = sqlx::query_as::<_, Offer>(
        r#"
        SELECT id, website_name, title, price, url, date_parsed
        FROM offers
        WHERE product_id = $1
        ORDER BY price ASC, id ASC
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    let attributes = sqlx::query_as::<_, ListingAttribute>(
        r#"
        SELECT attribute_name, attribute_value
        FROM attributes
        WHERE product_id = $1
        ORDER BY attribute_name ASC
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(ListingDetail {
        id: row.get("id"),
        canonical_title: row.get("canonical_title"),
        canonical_address: row.get("canonical_address"),
        district: row.get("district"),
        description: row.get("description"),
        rooms: row.get("rooms"),
        area: row.get("area"),
        property_type: row.get("property_type"),
        min_price: row.get("min_price"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
        offers,
        attributes,
    })
}

/// Aggregate counters: product total plus per-source offer counts
pub async fn get_stats(pool: &PgPool) -> Result<Stats, QueryError> {
    let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    let source_rows = sqlx::query(
        r#"
        SELECT website_name, COUNT(*) AS count
        FROM offers
        GROUP BY website_name
        "#,
    )
    .fetch_all(pool)
    .await?;

    let offers_by_source: std::collections::HashMap<String, i64> = source_rows
        .into_iter()
        .map(|row| (row.get("website_name"), row.get("count")))
        .collect();

    let total_offers = offers_by_source.values().sum();

    Ok(Stats {
        total_products,
        total_offers,
        offers_by_source,
    })
}
