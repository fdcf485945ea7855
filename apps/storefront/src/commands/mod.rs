//! # CLI Commands
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (argument parsing, dispatch)
//! ├── cart.rs     ◄─── cart show / add / remove / update
//! └── catalog.rs  ◄─── products, serve
//! ```
//!
//! ## Exit Codes
//! A cart operation that was refused exits with status 1 after its
//! notification was printed. Startup failures surface as errors from `main`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use storefront_catalog::HttpCatalog;

use crate::error::AppResult;
use crate::state::{AppConfig, ConsoleNotifier};

pub mod cart;
pub mod catalog;

pub use cart::CartCommand;
pub use catalog::ServeArgs;

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Shopping cart with stock checks", long_about = None)]
pub struct Cli {
    /// Config file (default: <config dir>/storefront.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or change the cart
    #[command(subcommand)]
    Cart(CartCommand),

    /// List the catalog's products
    Products,

    /// Serve a catalog from a db.json file
    Serve(ServeArgs),
}

impl Cli {
    pub async fn run(self) -> AppResult<ExitCode> {
        let config = AppConfig::load(self.config.as_deref())?;

        match self.command {
            Command::Cart(command) => {
                let store = crate::build_cart_store(&config, Arc::new(ConsoleNotifier))?;
                match cart::run(&store, command, &config.currency).await {
                    Ok(output) => {
                        println!("{}", output);
                        Ok(ExitCode::SUCCESS)
                    }
                    // Already reported through the notifier.
                    Err(_) => Ok(ExitCode::FAILURE),
                }
            }
            Command::Products => {
                let client = HttpCatalog::new(&config.catalog)?;
                println!("{}", catalog::list_products(&client, &config.currency).await?);
                Ok(ExitCode::SUCCESS)
            }
            Command::Serve(args) => {
                catalog::serve(args).await?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cart_commands() {
        let cli = Cli::try_parse_from(["storefront", "cart", "add", "3"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Cart(CartCommand::Add { product_id: 3 })
        ));

        let cli = Cli::try_parse_from(["storefront", "cart", "update", "3", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Cart(CartCommand::Update {
                product_id: 3,
                amount: -1
            })
        ));

        let cli =
            Cli::try_parse_from(["storefront", "cart", "show", "--config", "/tmp/s.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/s.toml")));
    }

    #[test]
    fn test_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["storefront", "serve"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.seed, PathBuf::from("db.json"));
        assert_eq!(args.bind.port(), 3333);
    }

    #[test]
    fn test_rejects_bad_product_id() {
        assert!(Cli::try_parse_from(["storefront", "cart", "add", "shoe"]).is_err());
        assert!(Cli::try_parse_from(["storefront", "cart", "remove", "-2"]).is_err());
    }
}
