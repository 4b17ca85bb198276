// web_app/api/db.rs - Database pool and schema setup

use std::sync::OnceLock;

use sqlx::PgPool;

static POOL: OnceLock<PgPool> = OnceLock::new();

// Idempotent DDL mirroring the aggregator's canonical schema:
// deduplicated products, per-site offers, free-form attributes.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id SERIAL PRIMARY KEY,
    canonical_title VARCHAR(500) NOT NULL,
    canonical_address VARCHAR(500) NOT NULL DEFAULT '',
    district VARCHAR(100),
    description TEXT,
    rooms INT NOT NULL DEFAULT 0,
    area DOUBLE PRECISION NOT NULL DEFAULT 0,
    property_type VARCHAR(100) NOT NULL DEFAULT '',
    image_url VARCHAR(1000),
    min_price BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT now(),
    updated_at TIMESTAMP NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS offers (
    id SERIAL PRIMARY KEY,
    product_id INT REFERENCES products(id) ON DELETE CASCADE,
    external_id VARCHAR(100) NOT NULL,
    website_name VARCHAR(50) NOT NULL,
    title VARCHAR(500) NOT NULL,
    price BIGINT NOT NULL,
    url VARCHAR(1000) NOT NULL UNIQUE,
    date_parsed TIMESTAMP NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS attributes (
    id SERIAL PRIMARY KEY,
    product_id INT NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    attribute_name VARCHAR(200) NOT NULL,
    attribute_value VARCHAR(500) NOT NULL
);

CREATE INDEX IF NOT EXISTS ix_products_search
    ON products (canonical_title, canonical_address);
CREATE INDEX IF NOT EXISTS ix_products_price_area
    ON products (min_price, area);
CREATE INDEX IF NOT EXISTS ix_offers_product_website
    ON offers (product_id, website_name);
CREATE INDEX IF NOT EXISTS ix_offers_website_external
    ON offers (website_name, external_id);
"#;

/// Initialize the global database pool
pub fn init_db(pool: PgPool) {
    if POOL.set(pool).is_err() {
        tracing::warn!("database pool already initialized");
    } else {
        tracing::info!("global database pool initialized");
    }
}

/// Get the global database pool
pub fn get_db() -> Option<PgPool> {
    POOL.get().cloned()
}

/// Create the aggregator tables and indexes if they do not exist
///
/// The scraping pipeline that fills these tables lives elsewhere;
/// this server only reads them, so creation is enough to boot
/// against an empty database.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;
    Ok(())
}
