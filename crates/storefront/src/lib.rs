//! Coffee Shop Storefront library.
//!
//! The client-side core shared by every screen of the storefront app:
//!
//! - [`favorites`] - In-memory favorites registry with change notifications
//! - [`codec`] - Product encoding for string-only navigation parameters
//! - [`navigation`] - Routes that carry an encoded product
//! - [`session`] - Single-slot persisted credential and its storage adapters
//! - [`services`] - Sign-in / sign-up / sign-out on top of the session store
//! - [`catalog`] - Static product catalog with category filter and search
//! - [`order`] - Order drafts and price quotes
//!
//! Everything is wired together once in [`state::AppState`] and handed to
//! consumers explicitly; there is no process-global state.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod favorites;
pub mod navigation;
pub mod order;
pub mod services;
pub mod session;
pub mod state;
