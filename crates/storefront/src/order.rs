//! Order drafts and price quotes.
//!
//! The order screen lets the user pick a quantity and a delivery method for
//! a single product, then shows subtotal, delivery fee and total. No payment
//! is taken and nothing is submitted anywhere.

use rust_decimal::Decimal;

use coffee_shop_core::{Coffee, CupSize, DeliveryMethod, Price};

/// Price breakdown shown on the order screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub total: Price,
}

/// An order being assembled on the order screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    coffee: Coffee,
    size: CupSize,
    quantity: u32,
    delivery: DeliveryMethod,
}

impl OrderDraft {
    /// One delivered cup in the product's size, or medium if it has none.
    #[must_use]
    pub fn new(coffee: Coffee) -> Self {
        let size = coffee.size.clone().unwrap_or_default();
        Self {
            coffee,
            size,
            quantity: 1,
            delivery: DeliveryMethod::Deliver,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: CupSize) -> Self {
        self.size = size;
        self
    }

    /// Set the quantity, clamped to at least one.
    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    #[must_use]
    pub const fn with_delivery(mut self, delivery: DeliveryMethod) -> Self {
        self.delivery = delivery;
        self
    }

    #[must_use]
    pub const fn coffee(&self) -> &Coffee {
        &self.coffee
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub const fn delivery(&self) -> DeliveryMethod {
        self.delivery
    }

    /// Add one cup.
    pub const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Remove one cup, never going below one.
    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// Unit price for the selected size, or `None` if it overflows.
    #[must_use]
    pub fn unit_price(&self) -> Option<Price> {
        self.coffee.price_for_size(&self.size)
    }

    /// Price the draft.
    ///
    /// `delivery_fee` only applies to delivered orders; pickup orders are
    /// always quoted with a zero fee, whatever `delivery_fee` is. Returns
    /// `None` if the fee is in a different currency than the product, or if
    /// any step of the arithmetic overflows.
    #[must_use]
    pub fn quote(&self, delivery_fee: Price) -> Option<OrderSummary> {
        let subtotal = self.unit_price()?.checked_mul(self.quantity)?;
        let delivery_fee = match self.delivery {
            DeliveryMethod::Deliver => delivery_fee,
            DeliveryMethod::Pickup => Price::new(Decimal::ZERO, subtotal.currency_code()).ok()?,
        };
        let total = subtotal.checked_add(&delivery_fee)?;

        Some(OrderSummary {
            subtotal,
            delivery_fee,
            total,
        })
    }
}
