//! # Catalog Commands
//!
//! `products` lists what the configured catalog sells. `serve` runs a local
//! catalog from a `db.json` seed until Ctrl-C.

use std::fmt::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use storefront_catalog::{CatalogHandle, CatalogResult, CatalogSeed, CatalogServer, CatalogService, InMemoryCatalog};
use tracing::info;

use crate::error::AppResult;
use crate::state::CurrencySettings;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Seed file with `products` and `stock` arrays
    #[arg(long, default_value = "db.json")]
    pub seed: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3333")]
    pub bind: SocketAddr,
}

/// Renders the catalog's products as a table.
pub async fn list_products(catalog: &dyn CatalogService, currency: &CurrencySettings) -> CatalogResult<String> {
    let products = catalog.products().await?;
    if products.is_empty() {
        return Ok("No products".to_string());
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<5} {:<40} {:>10}", "ID", "PRODUCT", "PRICE");
    for product in &products {
        let _ = writeln!(
            out,
            "{:<5} {:<40} {:>10}",
            product.id,
            product.title,
            currency.format(product.unit_price())
        );
    }
    Ok(out.trim_end().to_string())
}

/// Loads the seed and starts the catalog server.
pub async fn start_server(args: &ServeArgs) -> AppResult<CatalogHandle> {
    let seed = CatalogSeed::from_path(&args.seed)?;
    let catalog = Arc::new(InMemoryCatalog::from_seed(seed));
    Ok(CatalogServer::new(catalog).start(args.bind).await?)
}

/// Serves until Ctrl-C.
pub async fn serve(args: ServeArgs) -> AppResult<()> {
    let handle = start_server(&args).await?;
    println!("Catalog listening on http://{}", handle.local_addr());

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received");
    handle.shutdown().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{CatalogConfig, HttpCatalog};

    const DB_JSON: &str = r#"{
        "products": [
            { "id": 1, "title": "Tênis de Caminhada", "price": 179.9, "image": "https://example.com/1.jpg" },
            { "id": 2, "title": "Tênis VR Caminhada", "price": 139.9, "image": "https://example.com/2.jpg" }
        ],
        "stock": [ { "id": 1, "amount": 3 }, { "id": 2, "amount": 5 } ]
    }"#;

    #[tokio::test]
    async fn test_served_seed_is_listed() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("db.json");
        std::fs::write(&seed, DB_JSON).unwrap();

        let handle = start_server(&ServeArgs {
            seed,
            bind: "127.0.0.1:0".parse().unwrap(),
        })
        .await
        .unwrap();

        let client = HttpCatalog::new(&CatalogConfig::new(format!("http://{}", handle.local_addr()))).unwrap();
        let out = list_products(&client, &CurrencySettings::default()).await.unwrap();

        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1 "));
        assert!(lines[1].ends_with("$179.90"));
        assert!(lines[2].ends_with("$139.90"));

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_seed_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = start_server(&ServeArgs {
            seed: dir.path().join("missing.json"),
            bind: "127.0.0.1:0".parse().unwrap(),
        })
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let out = list_products(&InMemoryCatalog::new(), &CurrencySettings::default())
            .await
            .unwrap();
        assert_eq!(out, "No products");
    }
}
