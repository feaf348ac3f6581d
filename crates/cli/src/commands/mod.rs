//! Subcommand implementations.

pub mod catalog;
pub mod codec;
pub mod order;
pub mod session;

use coffee_shop_core::{Coffee, ProductId};
use coffee_shop_storefront::error::{AppError, Result};
use coffee_shop_storefront::state::AppState;

/// Show a user-facing failure message.
#[allow(clippy::print_stderr)]
pub fn report(message: &str) {
    eprintln!("{message}");
}

/// Look up a catalog product, cloning it out of the shared state.
fn find_product(state: &AppState, id: &str) -> Result<Coffee> {
    state
        .catalog()
        .get(&ProductId::new(id))
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
