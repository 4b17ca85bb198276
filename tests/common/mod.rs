// tests/common/mod.rs - Shared harness for database-backed tests
//
// Each test runs in its own PostgreSQL schema so suites can run multiple
// times, in parallel, against the same database. The schema is created
// fresh, populated through the crate's own DDL, and dropped afterwards.

use std::env;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Executor, PgPool};

use rent_radar::web_app::api::db;

/// Sanitize a test name into a valid schema name
pub fn schema_name(test_name: &str) -> String {
    let sanitized: String = test_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    // PostgreSQL identifiers cap at 63 chars
    let truncated = if sanitized.len() > 50 {
        &sanitized[..50]
    } else {
        &sanitized
    };

    format!("test_{}", truncated)
}

/// Run a test against an isolated schema
///
/// The pool handed to the test sets `search_path` on every connection,
/// so the crate's unqualified queries land in the test schema.
pub async fn with_test_db<F, Fut>(test_name: &str, test_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(PgPool) -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<()>>,
{
    dotenv::dotenv().ok();
    let database_url =
        env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let schema = schema_name(test_name);

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await?;
    admin
        .execute(format!("DROP SCHEMA IF EXISTS {} CASCADE", schema).as_str())
        .await?;
    admin
        .execute(format!("CREATE SCHEMA {}", schema).as_str())
        .await?;

    let search_path = format!("SET search_path TO {}, public", schema);
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .after_connect(move |conn, _meta| {
            let search_path = search_path.clone();
            Box::pin(async move {
                conn.execute(search_path.as_str()).await?;
                Ok(())
            })
        })
        .connect(&database_url)
        .await?;

    db::ensure_schema(&pool).await?;

    let result = test_fn(pool.clone()).await;

    // Always cleanup, even if the test failed
    admin
        .execute(format!("DROP SCHEMA IF EXISTS {} CASCADE", schema).as_str())
        .await?;

    result
}

/// Insert a canonical listing, returning its id
pub async fn insert_listing(
    pool: &PgPool,
    title: &str,
    address: &str,
    description: Option<&str>,
    rooms: i32,
    area: f64,
    min_price: i64,
) -> anyhow::Result<i32> {
    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO products
            (canonical_title, canonical_address, description, rooms, area,
             property_type, min_price)
        VALUES ($1, $2, $3, $4, $5, 'apartment', $6)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(address)
    .bind(description)
    .bind(rooms)
    .bind(area)
    .bind(min_price)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Insert an offer attached to a listing, returning its id
pub async fn insert_offer(
    pool: &PgPool,
    product_id: i32,
    website_name: &str,
    title: &str,
    price: i64,
    url: &str,
) -> anyhow::Result<i32> {
    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO offers (product_id, external_id, website_name, title, price, url)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(product_id)
    .bind(format!("ext-{}", url))
    .bind(website_name)
    .bind(title)
    .bind(price)
    .bind(url)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Insert a key/value attribute for a listing
pub async fn insert_attribute(
    pool: &PgPool,
    product_id: i32,
    name: &str,
    value: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        "INSERT INTO attributes (product_id, attribute_name, attribute_value) VALUES ($1, $2, $3)",
    )
    .bind(product_id)
    .bind(name)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}
