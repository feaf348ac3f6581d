//! Catalog browsing.

use coffee_shop_storefront::catalog::Category;
use coffee_shop_storefront::state::AppState;

/// Print the products shown under a category tab and search box.
#[allow(clippy::print_stdout)]
pub fn list(state: &AppState, category: Category, search: Option<&str>) {
    let matches = state.catalog().search(category, search.unwrap_or_default());

    tracing::debug!(%category, results = matches.len(), "Catalog search");

    if matches.is_empty() {
        println!("No products in {category}");
        return;
    }

    for coffee in matches {
        println!(
            "{:>3}  {:<12} {:<22} {}",
            coffee.id.as_str(),
            coffee.name,
            coffee.description,
            coffee.price.display()
        );
    }
}
