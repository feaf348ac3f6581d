//! Core types for Coffee Shop.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod coffee;
pub mod credential;
pub mod email;
pub mod id;
pub mod image;
pub mod options;
pub mod price;

pub use coffee::{Coffee, Modifiers};
pub use credential::Credential;
pub use email::{Email, EmailError};
pub use id::*;
pub use image::{AssetHandle, ImageSource};
pub use options::{CupSize, DeliveryMethod, ServingType};
pub use price::{CurrencyCode, Price, PriceError, Rating, RatingError};
