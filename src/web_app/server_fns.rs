// web_app/server_fns.rs - Leptos server function declarations
//
// Accessible from both client (WASM) and server (native Rust). The
// #[server] macro generates the implementation on the server and an
// HTTP stub on the client, mounted under /api.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;

use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn pool() -> Result<sqlx::PgPool, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use sqlx::PgPool;

    use crate::web_app::api::db;

    // Context first (tests or manual setup), then the global pool
    if let Some(pool) = use_context::<PgPool>() {
        return Ok(pool);
    }
    if let Some(pool) = db::get_db() {
        return Ok(pool);
    }

    // Last resort: pull it out of the actix request
    match extract().await {
        Ok(req) => {
            let req: HttpRequest = req;
            if let Some(pool_data) = req.app_data::<Data<PgPool>>() {
                return Ok(pool_data.as_ref().clone());
            }
            if let Some(pool) = req.app_data::<PgPool>() {
                return Ok(pool.clone());
            }
        }
        Err(e) => {
            tracing::error!("failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("database pool not available"))
}

/// Search canonical listings with optional filters
#[server(SearchListings, "/api")]
pub async fn search_listings(
    query: String,
    filters: SearchFilters,
) -> Result<SearchResponse, ServerFnError> {
    use crate::web_app::api::queries;

    let query = query.trim().to_string();
    tracing::info!("search request: query='{}', filters={:?}", query, filters);

    let pool = pool().await?;
    let response = queries::search_listings(&pool, &query, &filters).await;

    match &response {
        Ok(res) => tracing::info!(
            "search returned {} of {} listings",
            res.results.len(),
            res.total
        ),
        Err(e) => tracing::error!("search failed: {}", e),
    }

    response.map_err(|e| ServerFnError::new(format!("search failed: {}", e)))
}

/// Fetch one listing's full detail including all cross-site offers
#[server(GetListing, "/api")]
pub async fn get_listing(id: i32) -> Result<ListingDetail, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::get_listing(&pool, id).await.map_err(|e| {
        tracing::error!("detail fetch for listing {} failed: {}", id, e);
        ServerFnError::new(e.to_string())
    })
}

/// Aggregate counters for the page header
#[server(GetStats, "/api")]
pub async fn get_stats() -> Result<Stats, ServerFnError> {
    use crate::web_app::api::queries;

    let pool = pool().await?;
    queries::get_stats(&pool)
        .await
        .map_err(|e| ServerFnError::new(format!("stats failed: {}", e)))
}
