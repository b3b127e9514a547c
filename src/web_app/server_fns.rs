// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Each function forwards to exactly one remote API call. Failures reach the
// browser as a single generic message per action; the cause is only logged.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

pub const LOAD_PRODUCTS_FAILED: &str = "Failed to load products";
pub const LOAD_CATEGORIES_FAILED: &str = "Failed to load categories";
pub const ADD_PRODUCT_FAILED: &str = "Failed to add product";
pub const UPDATE_PRODUCT_FAILED: &str = "Failed to update product";
pub const DELETE_PRODUCT_FAILED: &str = "Failed to delete product";

#[cfg(feature = "ssr")]
fn client() -> Result<crate::web_app::api::DummyJsonClient, ServerFnError> {
    use crate::web_app::api::registry;

    // First try to get from context (for testing or if manually set)
    if let Some(client) = use_context::<crate::web_app::api::DummyJsonClient>() {
        return Ok(client);
    }

    registry::get_client().ok_or_else(|| {
        tracing::error!("API client could not be resolved from any source");
        ServerFnError::new("API client not available")
    })
}

#[cfg(feature = "ssr")]
fn generic_failure(
    action: &str,
    message: &'static str,
    err: crate::web_app::api::ApiError,
) -> ServerFnError {
    tracing::error!("{} failed: {}", action, err);
    ServerFnError::new(message)
}

/// Load one page of products (1 page = `limit` items starting at `skip`)
#[server(GetProductsPage, "/api")]
pub async fn get_products_page(limit: u32, skip: u32) -> Result<ProductListing, ServerFnError> {
    let query = PageQuery {
        limit,
        skip,
        select: LISTING_FIELDS.iter().map(|f| f.to_string()).collect(),
    };
    tracing::info!("Page request: limit={}, skip={}", limit, skip);

    client()?
        .list_products(&query)
        .await
        .map_err(|e| generic_failure("list_products", LOAD_PRODUCTS_FAILED, e))
}

/// Search products by free text
#[server(SearchProducts, "/api")]
pub async fn search_products(query: String) -> Result<ProductListing, ServerFnError> {
    tracing::info!("Search request: query='{}'", query);

    let results = client()?
        .search_products(&query)
        .await
        .map_err(|e| generic_failure("search_products", LOAD_PRODUCTS_FAILED, e))?;

    tracing::info!("Search successful: found {} results", results.products.len());
    Ok(results)
}

/// Products of a single category
#[server(GetProductsByCategory, "/api")]
pub async fn get_products_by_category(slug: String) -> Result<ProductListing, ServerFnError> {
    tracing::info!("Category request: slug='{}'", slug);

    client()?
        .products_by_category(&slug)
        .await
        .map_err(|e| generic_failure("products_by_category", LOAD_PRODUCTS_FAILED, e))
}

/// All categories, loaded once per page view
#[server(GetCategories, "/api")]
pub async fn get_categories() -> Result<Vec<Category>, ServerFnError> {
    client()?
        .categories()
        .await
        .map_err(|e| generic_failure("categories", LOAD_CATEGORIES_FAILED, e))
}

/// Products sorted by title
#[server(SortProducts, "/api")]
pub async fn sort_products(order: SortOrder) -> Result<ProductListing, ServerFnError> {
    tracing::info!("Sort request: {} {}", SORT_FIELD, order);

    client()?
        .sort_products(SORT_FIELD, order)
        .await
        .map_err(|e| generic_failure("sort_products", LOAD_PRODUCTS_FAILED, e))
}

/// Create a product; the API answers with the assigned id
#[server(AddProduct, "/api")]
pub async fn add_product(product: NewProduct) -> Result<Product, ServerFnError> {
    client()?
        .add_product(&product)
        .await
        .map_err(|e| generic_failure("add_product", ADD_PRODUCT_FAILED, e))
}

/// Update title, price and thumbnail of a product
#[server(UpdateProduct, "/api")]
pub async fn update_product(id: i64, update: ProductUpdate) -> Result<Product, ServerFnError> {
    client()?
        .update_product(id, &update)
        .await
        .map_err(|e| generic_failure("update_product", UPDATE_PRODUCT_FAILED, e))
}

/// Delete a product
#[server(DeleteProduct, "/api")]
pub async fn delete_product(id: i64) -> Result<DeletedProduct, ServerFnError> {
    client()?
        .delete_product(id)
        .await
        .map_err(|e| generic_failure("delete_product", DELETE_PRODUCT_FAILED, e))
}
