//! Static product catalog.
//!
//! The home screen's grid is a hand-authored list; there is no product
//! backend. Category tabs filter by product name and the search box matches
//! name or description, case-insensitively.

use std::fmt;

use coffee_shop_core::{AssetHandle, Coffee, ImageSource, Modifiers, Price, ProductId};

/// Bundled artwork used by every catalog card.
pub const COFFEE_ART: AssetHandle = AssetHandle::new(1);

/// Home screen category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Cappuccino,
    Latte,
    Americano,
}

impl Category {
    /// Tabs in display order.
    pub const TABS: [Self; 4] = [Self::All, Self::Cappuccino, Self::Latte, Self::Americano];

    /// Tab label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All Coffee",
            Self::Cappuccino => "Cappuccino",
            Self::Latte => "Latte",
            Self::Americano => "Americano",
        }
    }

    fn matches(self, coffee: &Coffee) -> bool {
        match self {
            Self::All => true,
            other => coffee.name.eq_ignore_ascii_case(other.label()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TABS
            .into_iter()
            .find(|tab| {
                tab.label().eq_ignore_ascii_case(s)
                    || (matches!(tab, Self::All) && s.eq_ignore_ascii_case("all"))
            })
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

/// Read-only product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Coffee>,
}

impl Catalog {
    /// Catalog over an arbitrary product list.
    #[must_use]
    pub const fn from_items(items: Vec<Coffee>) -> Self {
        Self { items }
    }

    /// The storefront's bundled products.
    #[must_use]
    pub fn builtin() -> Self {
        let art = ImageSource::LocalAsset(COFFEE_ART);
        let item = |id: &str, name: &str, description: &str, cents: u32, modifiers: Modifiers| {
            Coffee::new(id, name, Price::from_cents(cents))
                .with_description(description)
                .with_image(art.clone())
                .with_modifiers(modifiers)
        };

        Self::from_items(vec![
            item(
                "1",
                "Cappuccino",
                "With Chocolate",
                453,
                Modifiers {
                    with_chocolate: Some(true),
                    ..Modifiers::default()
                },
            ),
            item(
                "2",
                "Cappuccino",
                "With Low Fat Milk",
                399,
                Modifiers {
                    with_milk: Some(true),
                    ..Modifiers::default()
                },
            ),
            item(
                "3",
                "Cappuccino",
                "With Skim Milk",
                425,
                Modifiers {
                    with_milk: Some(true),
                    ..Modifiers::default()
                },
            ),
            item(
                "4",
                "Espresso",
                "Single Shot",
                299,
                Modifiers {
                    is_single_shot: Some(true),
                    ..Modifiers::default()
                },
            ),
            item(
                "5",
                "Latte",
                "With Oat Milk",
                475,
                Modifiers {
                    with_oat_milk: Some(true),
                    ..Modifiers::default()
                },
            ),
            item("6", "Mocha", "With Whipped Cream", 525, Modifiers::default()),
        ])
    }

    /// All products in display order.
    #[must_use]
    pub fn all(&self) -> &[Coffee] {
        &self.items
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Coffee> {
        self.items.iter().find(|coffee| &coffee.id == id)
    }

    /// Products in `category` whose name or description contains `query`.
    ///
    /// A blank query matches everything.
    #[must_use]
    pub fn search(&self, category: Category, query: &str) -> Vec<&Coffee> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|coffee| category.matches(coffee))
            .filter(|coffee| {
                needle.is_empty()
                    || coffee.name.to_lowercase().contains(&needle)
                    || coffee.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
