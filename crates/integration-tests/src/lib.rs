//! Integration tests for Coffee Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p coffee-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `favorites_flow` - Registry behavior as seen by the screens
//! - `codec_contract` - Navigation parameter encoding and decoding
//! - `session_flow` - Session persistence across restarts
//!
//! Nothing here needs a network or external service; file-backed storage
//! runs against a temporary directory.
