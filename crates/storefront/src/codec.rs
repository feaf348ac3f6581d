//! Product encoding for string-only navigation parameters.
//!
//! A product travels between screens as percent-encoded JSON. The transform
//! is lossless for every scalar field and for remote image URIs. It is
//! **lossy** for bundled images: an [`AssetHandle`] has no string form, so it
//! is written as an empty string and the decoder substitutes
//! [`AssetHandle::PLACEHOLDER`]. The substitution is applied on every
//! successful decode with an empty or missing image, never conditionally.
//!
//! ```
//! use coffee_shop_core::{AssetHandle, Coffee, ImageSource, Price};
//! use coffee_shop_storefront::codec;
//!
//! let latte = Coffee::new("1", "Latte", Price::from_cents(390))
//!     .with_image(ImageSource::LocalAsset(AssetHandle::new(7)));
//!
//! let text = codec::encode(&latte).unwrap();
//! let back = codec::decode(&text).unwrap();
//!
//! assert_eq!(back.name, "Latte");
//! assert_eq!(back.image, ImageSource::placeholder());
//! assert!(codec::decode("not valid data").is_none());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use coffee_shop_core::{
    AssetHandle, Coffee, CupSize, ImageSource, Modifiers, Price, ProductId, Rating, ServingType,
};

/// A product that must not be put on the navigation channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product id cannot be empty")]
    EmptyId,
    #[error("product could not be serialized: {0}")]
    Serialize(String),
}

/// Why a navigation parameter did not yield a product.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid percent-encoding: {0}")]
    Encoding(String),
    #[error("malformed product data: {0}")]
    Malformed(String),
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

/// Wire shape of a product.
///
/// Field names follow the app's JSON (`type`, `reviewCount`, ...). Prices
/// and ratings are accepted as JSON numbers or strings and written as
/// strings so no precision is lost.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoffeeParam {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: Option<Decimal>,
    #[serde(default)]
    rating: Option<Decimal>,
    #[serde(default)]
    review_count: Option<u32>,
    /// Remote URI, or empty for a bundled asset.
    #[serde(default)]
    image: Option<String>,
    #[serde(rename = "type", default)]
    serving: ServingType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<CupSize>,
    #[serde(default)]
    is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    with_chocolate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    with_milk: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    with_oat_milk: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_single_shot: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    preparation_methods: Vec<String>,
}

impl From<&Coffee> for CoffeeParam {
    fn from(coffee: &Coffee) -> Self {
        let image = match &coffee.image {
            ImageSource::RemoteUri(uri) => uri.clone(),
            ImageSource::LocalAsset(_) => String::new(),
        };

        Self {
            id: Some(coffee.id.to_string()),
            name: coffee.name.clone(),
            description: coffee.description.clone(),
            price: Some(coffee.price.amount()),
            rating: Some(coffee.rating.value()),
            review_count: Some(coffee.review_count),
            image: Some(image),
            serving: coffee.serving,
            size: coffee.size.clone(),
            is_favorite: coffee.is_favorite,
            with_chocolate: coffee.modifiers.with_chocolate,
            with_milk: coffee.modifiers.with_milk,
            with_oat_milk: coffee.modifiers.with_oat_milk,
            is_single_shot: coffee.modifiers.is_single_shot,
            preparation_methods: coffee.preparation_methods.clone(),
        }
    }
}

impl TryFrom<CoffeeParam> for Coffee {
    type Error = DecodeError;

    fn try_from(param: CoffeeParam) -> Result<Self, Self::Error> {
        let id = param
            .id
            .filter(|id| !id.is_empty())
            .ok_or(DecodeError::MissingField("id"))?;

        let amount = param.price.ok_or(DecodeError::MissingField("price"))?;
        let price = Price::usd(amount).map_err(|e| DecodeError::InvalidField {
            field: "price",
            reason: e.to_string(),
        })?;

        let rating = Rating::new(param.rating.unwrap_or(Decimal::ZERO)).map_err(|e| {
            DecodeError::InvalidField {
                field: "rating",
                reason: e.to_string(),
            }
        })?;

        let image = match param.image {
            Some(uri) if !uri.is_empty() => ImageSource::RemoteUri(uri),
            _ => ImageSource::LocalAsset(AssetHandle::PLACEHOLDER),
        };

        Ok(Self {
            id: ProductId::new(id),
            name: param.name,
            description: param.description,
            price,
            rating,
            review_count: param.review_count.unwrap_or(0),
            image,
            serving: param.serving,
            size: param.size,
            is_favorite: param.is_favorite,
            modifiers: Modifiers {
                with_chocolate: param.with_chocolate,
                with_milk: param.with_milk,
                with_oat_milk: param.with_oat_milk,
                is_single_shot: param.is_single_shot,
            },
            preparation_methods: param.preparation_methods,
        })
    }
}

/// Encode a product for a navigation parameter.
///
/// # Errors
///
/// Returns `ValidationError::EmptyId` if the product has no id; the caller
/// must not navigate in that case.
pub fn encode(coffee: &Coffee) -> Result<String, ValidationError> {
    if coffee.id.is_empty() {
        return Err(ValidationError::EmptyId);
    }

    let json = serde_json::to_string(&CoffeeParam::from(coffee))
        .map_err(|e| ValidationError::Serialize(e.to_string()))?;

    Ok(urlencoding::encode(&json).into_owned())
}

/// Decode a navigation parameter, reporting why it failed.
///
/// # Errors
///
/// Returns a [`DecodeError`] for malformed text or a missing/invalid field.
pub fn try_decode(text: &str) -> Result<Coffee, DecodeError> {
    let json = urlencoding::decode(text).map_err(|e| DecodeError::Encoding(e.to_string()))?;
    let param: CoffeeParam =
        serde_json::from_str(&json).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    Coffee::try_from(param)
}

/// Decode a navigation parameter.
///
/// Returns `None` ("no entity") instead of failing; the receiving screen
/// shows its empty state.
#[must_use]
pub fn decode(text: &str) -> Option<Coffee> {
    match try_decode(text) {
        Ok(coffee) => Some(coffee),
        Err(err) => {
            tracing::warn!(error = %err, "Discarding undecodable product parameter");
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn latte() -> Coffee {
        Coffee::new("1", "Latte", Price::usd(Decimal::new(390, 2)).unwrap())
            .with_rating(Rating::new(Decimal::new(45, 1)).unwrap(), 0)
            .with_image(ImageSource::remote("https://x/img.png"))
            .with_serving(ServingType::Hot)
    }

    #[test]
    fn test_roundtrip_remote_image_is_exact() {
        let coffee = latte()
            .with_description("With Oat Milk")
            .with_size(CupSize::Large)
            .with_modifiers(Modifiers {
                with_oat_milk: Some(true),
                with_milk: Some(false),
                ..Modifiers::default()
            })
            .with_preparation_methods(vec!["Espresso".to_string(), "Steamed milk".to_string()])
            .with_favorite(true);

        let decoded = decode(&encode(&coffee).unwrap()).unwrap();
        assert_eq!(decoded, coffee);
    }

    #[test]
    fn test_local_asset_becomes_placeholder() {
        let coffee = latte().with_image(ImageSource::LocalAsset(AssetHandle::new(3)));
        let decoded = decode(&encode(&coffee).unwrap()).unwrap();

        assert_eq!(decoded.image, ImageSource::LocalAsset(AssetHandle::PLACEHOLDER));
        assert_eq!(decoded.clone().with_image(coffee.image.clone()), coffee);
    }

    #[test]
    fn test_local_asset_is_written_as_empty_sentinel() {
        let coffee = latte().with_image(ImageSource::LocalAsset(AssetHandle::new(3)));
        let json = urlencoding::decode(&encode(&coffee).unwrap())
            .unwrap()
            .into_owned();
        assert!(json.contains(r#""image":"""#), "{json}");
    }

    #[test]
    fn test_output_is_query_safe() {
        let coffee = latte().with_description("Milk & honey = 100% good?");
        let text = encode(&coffee).unwrap();
        assert!(!text.contains(['&', '=', '?', '"', ' ', '{']));
        assert_eq!(decode(&text).unwrap().description, "Milk & honey = 100% good?");
    }

    #[test]
    fn test_empty_id_rejected_on_encode() {
        let coffee = Coffee::new("", "Nameless", Price::usd(Decimal::new(3, 0)).unwrap());
        assert_eq!(encode(&coffee), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_not_valid_data_is_no_entity() {
        assert!(decode("not valid data").is_none());
        assert!(matches!(
            try_decode("not valid data"),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_percent_encoding() {
        assert!(matches!(try_decode("%FF%FE"), Err(DecodeError::Encoding(_))));
    }

    #[test]
    fn test_missing_id_and_price() {
        assert_eq!(
            try_decode(r#"{"name":"Latte","price":3.9}"#),
            Err(DecodeError::MissingField("id"))
        );
        assert_eq!(
            try_decode(r#"{"id":"","price":3.9}"#),
            Err(DecodeError::MissingField("id"))
        );
        assert_eq!(
            try_decode(r#"{"id":"1","name":"Latte"}"#),
            Err(DecodeError::MissingField("price"))
        );
    }

    #[test]
    fn test_out_of_range_values() {
        assert!(matches!(
            try_decode(r#"{"id":"1","price":-1}"#),
            Err(DecodeError::InvalidField { field: "price", .. })
        ));
        assert!(matches!(
            try_decode(r#"{"id":"1","price":1,"rating":7}"#),
            Err(DecodeError::InvalidField { field: "rating", .. })
        ));
    }

    #[test]
    fn test_decodes_legacy_numeric_json() {
        let raw = r#"{"id":"5","name":"Latte","description":"With Oat Milk","price":4.75,"rating":4.5,"type":"iced","withOatMilk":true}"#;
        let coffee = decode(&urlencoding::encode(raw)).unwrap();

        assert_eq!(coffee.price.display(), "$4.75");
        assert_eq!(coffee.rating.to_string(), "4.5");
        assert_eq!(coffee.serving, ServingType::Iced);
        assert_eq!(coffee.modifiers.with_oat_milk, Some(true));
        assert_eq!(coffee.review_count, 0);
        assert_eq!(coffee.image, ImageSource::placeholder());
    }

    #[test]
    fn test_decoded_price_supports_display_math() {
        let coffee = decode(r#"{"id":"1","price":"3.90"}"#).unwrap();
        let total = coffee
            .price
            .checked_mul(2)
            .and_then(|line| line.checked_add(&Price::from_cents(100)))
            .unwrap();
        assert_eq!(total.display(), "$8.80");
    }

    #[test]
    fn test_decoded_max_price_math_does_not_panic() {
        let raw = r#"{"id":"1","price":"79228162514264337593543950335"}"#;
        let coffee = decode(&urlencoding::encode(raw)).unwrap();

        assert!(coffee.price_for_size(&CupSize::Large).is_none());
        assert!(coffee.price.checked_mul(2).is_none());
    }
}
