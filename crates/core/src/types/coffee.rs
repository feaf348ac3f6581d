//! The coffee product entity.

use crate::types::{CupSize, ImageSource, Price, ProductId, Rating, ServingType};

/// Optional recipe modifiers.
///
/// `None` means the attribute was never specified, which the product codec
/// preserves so a product reads back exactly as it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub with_chocolate: Option<bool>,
    pub with_milk: Option<bool>,
    pub with_oat_milk: Option<bool>,
    pub is_single_shot: Option<bool>,
}

/// A coffee product.
///
/// Products are immutable values. Changing an attribute such as the
/// favorite flag produces a replacement value via the `with_*` methods.
///
/// ```
/// use coffee_shop_core::{Coffee, ImageSource, Price};
///
/// let latte = Coffee::new("1", "Latte", Price::from_cents(390))
///     .with_image(ImageSource::remote("https://x/img.png"));
/// let favorite = latte.clone().with_favorite(true);
///
/// assert!(!latte.is_favorite);
/// assert!(favorite.is_favorite);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coffee {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub rating: Rating,
    pub review_count: u32,
    pub image: ImageSource,
    pub serving: ServingType,
    pub size: Option<CupSize>,
    pub is_favorite: bool,
    pub modifiers: Modifiers,
    pub preparation_methods: Vec<String>,
}

impl Coffee {
    /// Create a hot coffee with placeholder artwork and no reviews.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            rating: Rating::default(),
            review_count: 0,
            image: ImageSource::placeholder(),
            serving: ServingType::Hot,
            size: None,
            is_favorite: false,
            modifiers: Modifiers::default(),
            preparation_methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rating: Rating, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: ImageSource) -> Self {
        self.image = image;
        self
    }

    #[must_use]
    pub const fn with_serving(mut self, serving: ServingType) -> Self {
        self.serving = serving;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: CupSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_preparation_methods(mut self, methods: Vec<String>) -> Self {
        self.preparation_methods = methods;
        self
    }

    /// Replacement value with the favorite flag set to `is_favorite`.
    #[must_use]
    pub const fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Unit price for the selected cup size.
    ///
    /// Small is fifty cents under the base price, large fifty cents over;
    /// medium and free-form sizes cost the base price. Returns `None` if the
    /// adjusted price does not fit in a `Decimal`.
    #[must_use]
    pub fn price_for_size(&self, size: &CupSize) -> Option<Price> {
        self.price.checked_adjust(size.price_delta())
    }
}
