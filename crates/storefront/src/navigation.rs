//! Routes that carry a product across screens.
//!
//! The navigation channel only accepts string parameters. Product detail
//! and place order both take the product in a single `coffee` parameter,
//! produced and consumed exclusively through [`crate::codec`].

use std::collections::HashMap;
use std::fmt;

use coffee_shop_core::Coffee;

use crate::codec::{self, ValidationError};
use crate::error::add_breadcrumb;

/// Name of the query parameter holding the encoded product.
pub const COFFEE_PARAM: &str = "coffee";

/// A screen that receives a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    ProductDetail,
    PlaceOrder,
}

impl Route {
    /// Screen path without parameters.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::ProductDetail => "/screens/CoffeeDetail",
            Self::PlaceOrder => "/screens/OrderScreen",
        }
    }

    /// Parameters to push alongside the route.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the product cannot be encoded; the
    /// caller must stay on the current screen.
    pub fn params(&self, coffee: &Coffee) -> Result<HashMap<String, String>, ValidationError> {
        let encoded = codec::encode(coffee)?;
        add_breadcrumb(
            "navigation",
            "Navigated with product",
            Some(&[("route", self.path()), ("product_id", coffee.id.as_str())]),
        );
        Ok(HashMap::from([(COFFEE_PARAM.to_string(), encoded)]))
    }

    /// Full link, e.g. `/screens/CoffeeDetail?coffee=%7B...`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the product cannot be encoded.
    pub fn href(&self, coffee: &Coffee) -> Result<String, ValidationError> {
        let encoded = codec::encode(coffee)?;
        Ok(format!("{}?{COFFEE_PARAM}={encoded}", self.path()))
    }

    /// Product carried by the received parameters.
    ///
    /// `None` when the parameter is missing or undecodable; the screen then
    /// shows its "no data" state.
    #[must_use]
    pub fn coffee_from_params(params: &HashMap<String, String>) -> Option<Coffee> {
        params.get(COFFEE_PARAM).and_then(|text| codec::decode(text))
    }

    /// Product carried by a link built with [`href`](Self::href).
    #[must_use]
    pub fn coffee_from_href(href: &str) -> Option<Coffee> {
        let (_, query) = href.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == COFFEE_PARAM)
            .and_then(|(_, value)| codec::decode(value))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
