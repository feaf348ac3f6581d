//! Coffee Shop Core - Shared types library.
//!
//! This crate provides the domain types used across all Coffee Shop components:
//! - `storefront` - Favorites registry, product codec, session store
//! - `cli` - Developer command-line tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access,
//! no serialization formats beyond serde derives. This keeps it lightweight
//! and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product entity, image sources, prices, ratings, ids, emails
//!   and session credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
