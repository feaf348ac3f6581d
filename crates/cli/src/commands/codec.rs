//! Navigation parameter encoding.

use coffee_shop_storefront::codec;
use coffee_shop_storefront::error::Result;
use coffee_shop_storefront::navigation::Route;
use coffee_shop_storefront::state::AppState;

/// Print the encoded parameter and detail link for a catalog product.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown id, or `AppError::Validation`
/// if the product cannot be encoded.
#[allow(clippy::print_stdout)]
pub fn encode(state: &AppState, id: &str) -> Result<()> {
    let coffee = super::find_product(state, id)?;
    let encoded = codec::encode(&coffee)?;
    let href = Route::ProductDetail.href(&coffee)?;

    println!("{encoded}");
    println!("{href}");
    Ok(())
}

/// Print the product carried by an encoded parameter.
///
/// # Errors
///
/// Returns `AppError::Decode` if the text does not hold a product.
#[allow(clippy::print_stdout)]
pub fn decode(text: &str) -> Result<()> {
    let coffee = codec::try_decode(text)?;

    println!("id:          {}", coffee.id);
    println!("name:        {}", coffee.name);
    println!("description: {}", coffee.description);
    println!("price:       {}", coffee.price);
    println!("rating:      {} ({} reviews)", coffee.rating, coffee.review_count);
    println!("serving:     {}", coffee.serving);
    if let Some(size) = &coffee.size {
        println!("size:        {size}");
    }
    match coffee.image.as_uri() {
        Some(uri) => println!("image:       {uri}"),
        None => println!("image:       (bundled placeholder)"),
    }
    Ok(())
}
