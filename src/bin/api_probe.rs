// Connectivity check against the configured product API
//
// Prints the category count, the first page and a sample search so a broken
// base URL or network shows up before the web server is started.

use anyhow::{Context, Result};
use dummyjson_catalog::web_app::api::{CatalogConfig, DummyJsonClient};
use dummyjson_catalog::web_app::model::{PageQuery, DEFAULT_PAGE_SIZE};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let config = CatalogConfig::from_env().context("invalid API configuration")?;
    let client = DummyJsonClient::new(&config)?;
    let query = std::env::args().nth(1).unwrap_or_else(|| "phone".to_string());

    println!("Testing product API at {}...", client.base_url());

    let categories = client.categories().await.context("loading categories")?;
    println!("✓ {} categories", categories.len());

    let page = client
        .list_products(&PageQuery::for_page(1, DEFAULT_PAGE_SIZE))
        .await
        .context("loading first page")?;
    println!(
        "\nFirst page ({} of {} products, {} pages):",
        page.products.len(),
        page.total,
        page.total_pages()
    );
    for product in &page.products {
        println!("  - #{} {} ${:.2}", product.id, product.title, product.price);
    }

    match client.search_products(&query).await {
        Ok(results) => {
            println!("\n✓ Search '{}' found {} products", query, results.total);
            for product in results.products.iter().take(5) {
                println!("  - #{} {}", product.id, product.title);
            }
        }
        Err(e) => println!("\n✗ Search '{}' failed: {}", query, e),
    }

    Ok(())
}
