//! # Cart Commands
//!
//! ```text
//! storefront cart show
//! storefront cart add <ID>
//! storefront cart remove <ID>
//! storefront cart update <ID> <AMOUNT>
//! ```
//!
//! Every command prints the cart as it stands afterwards:
//! ```text
//! ID    PRODUCT                         PRICE   QTY     SUBTOTAL
//! 1     Tênis de Caminhada            $179.90     2      $359.80
//! 2     Tênis VR Caminhada            $139.90     1      $139.90
//! ──────────────────────────────────────────────────────────────
//! TOTAL (3 items)                                        $499.70
//! ```

use std::fmt::Write;

use clap::Subcommand;
use storefront_core::{Cart, ProductId};
use tracing::debug;

use crate::error::CartResult;
use crate::state::{CartStore, CurrencySettings, UpdateProductAmount};

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Print the cart
    Show,

    /// Add one unit of a product
    Add { product_id: ProductId },

    /// Remove a product's line
    Remove { product_id: ProductId },

    /// Set a product's amount (zero or below is ignored)
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

/// Runs a cart command and renders the resulting cart.
pub async fn run(store: &CartStore, command: CartCommand, currency: &CurrencySettings) -> CartResult<String> {
    debug!(?command, "Cart command");

    match command {
        CartCommand::Show => {}
        CartCommand::Add { product_id } => store.add_product(product_id).await?,
        CartCommand::Remove { product_id } => store.remove_product(product_id).await?,
        CartCommand::Update { product_id, amount } => {
            store
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await?
        }
    }

    Ok(render_cart(&store.cart(), currency))
}

const RULE_WIDTH: usize = 62;

/// Renders a cart as a text table with subtotals and a total.
pub fn render_cart(cart: &Cart, currency: &CurrencySettings) -> String {
    if cart.is_empty() {
        return "Cart is empty".to_string();
    }

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        out,
        "{:<5} {:<28} {:>9} {:>5} {:>12}",
        "ID", "PRODUCT", "PRICE", "QTY", "SUBTOTAL"
    );
    for item in cart.items() {
        let _ = writeln!(
            out,
            "{:<5} {:<28} {:>9} {:>5} {:>12}",
            item.id,
            truncate(&item.title, 28),
            currency.format(item.unit_price()),
            item.amount,
            currency.format(item.subtotal())
        );
    }
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH));

    let label = format!("TOTAL ({} items)", cart.total_quantity());
    let _ = write!(
        out,
        "{:<width$}{:>12}",
        label,
        currency.format(cart.total()),
        width = RULE_WIDTH - 12
    );
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}
