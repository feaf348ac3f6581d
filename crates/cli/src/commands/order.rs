//! Order quotes.

use coffee_shop_core::{CupSize, DeliveryMethod};
use coffee_shop_storefront::error::{AppError, Result};
use coffee_shop_storefront::order::OrderDraft;
use coffee_shop_storefront::state::AppState;

/// Print the order screen's price breakdown.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id, or `AppError::Internal`
/// if the order cannot be priced (currency mismatch or overflow).
#[allow(clippy::print_stdout)]
pub fn quote(
    state: &AppState,
    id: &str,
    size: CupSize,
    quantity: u32,
    pickup: bool,
) -> Result<()> {
    let coffee = super::find_product(state, id)?;
    let delivery = if pickup {
        DeliveryMethod::Pickup
    } else {
        DeliveryMethod::Deliver
    };
    let draft = OrderDraft::new(coffee)
        .with_size(size.clone())
        .with_quantity(quantity)
        .with_delivery(delivery);

    let summary = draft
        .quote(state.config().delivery_fee)
        .ok_or_else(|| AppError::Internal(format!("cannot price order for product {id}")))?;

    println!(
        "{} x {} ({size}, {delivery})",
        draft.quantity(),
        draft.coffee().name
    );
    println!("Subtotal      {}", summary.subtotal);
    println!("Delivery fee  {}", summary.delivery_fee);
    println!("Total         {}", summary.total);
    Ok(())
}
