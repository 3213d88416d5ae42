//! Demo menu served by the in-memory catalog.

use rust_decimal::Decimal;

use reorder_core::domain::menu::{Category, MenuItem, MenuItemId, MenuItemOptions};

#[derive(Debug, Clone, Copy)]
struct MenuSeed {
    id: u32,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    category: &'static str,
    rating: f64,
    reviews: u32,
    is_popular: bool,
    sizes: &'static [&'static str],
    addons: &'static [&'static str],
}

const CATEGORY_SEEDS: &[(u32, &str, &str)] = &[
    (1, "Appetizers", "restaurant-outline"),
    (2, "Main Course", "fast-food-outline"),
    (3, "Beverages", "beer-outline"),
    (4, "Desserts", "ice-cream-outline"),
];

const MENU_SEEDS: &[MenuSeed] = &[
    MenuSeed {
        id: 1,
        name: "Classic Burger",
        description: "Juicy beef patty with fresh lettuce, tomatoes, and special sauce",
        price_cents: 1299,
        category: "Main Course",
        rating: 4.5,
        reviews: 128,
        is_popular: true,
        sizes: &["Regular", "Large"],
        addons: &["Extra Cheese", "Bacon", "Avocado"],
    },
    MenuSeed {
        id: 2,
        name: "Margherita Pizza",
        description: "Fresh mozzarella, tomatoes, and basil on thin crust",
        price_cents: 1599,
        category: "Main Course",
        rating: 4.8,
        reviews: 256,
        is_popular: true,
        sizes: &["Small", "Medium", "Large"],
        addons: &[],
    },
    MenuSeed {
        id: 3,
        name: "Caesar Salad",
        description: "Crisp romaine lettuce, croutons, parmesan, and Caesar dressing",
        price_cents: 999,
        category: "Appetizers",
        rating: 4.3,
        reviews: 98,
        is_popular: false,
        sizes: &[],
        addons: &[],
    },
    MenuSeed {
        id: 4,
        name: "Chocolate Lava Cake",
        description: "Warm chocolate cake with molten center",
        price_cents: 799,
        category: "Desserts",
        rating: 4.9,
        reviews: 187,
        is_popular: true,
        sizes: &[],
        addons: &[],
    },
    MenuSeed {
        id: 5,
        name: "Iced Coffee",
        description: "Cold-brewed coffee served over ice",
        price_cents: 499,
        category: "Beverages",
        rating: 4.6,
        reviews: 145,
        is_popular: true,
        sizes: &["Small", "Medium", "Large"],
        addons: &[],
    },
    MenuSeed {
        id: 6,
        name: "Chicken Wings",
        description: "Crispy wings with choice of sauce",
        price_cents: 1199,
        category: "Appetizers",
        rating: 4.7,
        reviews: 212,
        is_popular: true,
        sizes: &["6 pcs", "12 pcs"],
        addons: &["Ranch Dip", "Blue Cheese Dip"],
    },
];

fn to_owned_list(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

pub fn seed_categories() -> Vec<Category> {
    CATEGORY_SEEDS
        .iter()
        .map(|(id, name, icon)| Category {
            id: *id,
            name: (*name).to_owned(),
            icon: (*icon).to_owned(),
        })
        .collect()
}

pub fn seed_menu() -> Vec<MenuItem> {
    MENU_SEEDS
        .iter()
        .map(|seed| MenuItem {
            id: MenuItemId(seed.id),
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            price: Decimal::new(seed.price_cents, 2),
            category: seed.category.to_owned(),
            rating: seed.rating,
            reviews: seed.reviews,
            is_popular: seed.is_popular,
            options: MenuItemOptions {
                sizes: to_owned_list(seed.sizes),
                addons: to_owned_list(seed.addons),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rust_decimal::Decimal;

    use super::{seed_categories, seed_menu};

    #[test]
    fn menu_ids_are_unique_and_categories_exist() {
        let menu = seed_menu();
        let categories: HashSet<String> =
            seed_categories().into_iter().map(|category| category.name).collect();
        let ids: HashSet<u32> = menu.iter().map(|item| item.id.0).collect();

        assert_eq!(ids.len(), menu.len());
        assert!(menu.iter().all(|item| categories.contains(&item.category)));
    }

    #[test]
    fn prices_keep_cents() {
        let burger = &seed_menu()[0];

        assert_eq!(burger.price, Decimal::new(1299, 2));
        assert_eq!(burger.price.to_string(), "12.99");
    }
}
