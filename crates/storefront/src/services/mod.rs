//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Sign-in, sign-up and sign-out on top of the session store

pub mod auth;
