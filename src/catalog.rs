//! Static Menu Data
//!
//! The restaurant's categories and dishes. Rendered once; the controller
//! only reads them back from the page.

pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub struct Subcategory {
    pub key: &'static str,
    pub label: &'static str,
}

pub struct Dish {
    pub name: &'static str,
    pub description: &'static str,
    /// Raw `data-price` value
    pub price: &'static str,
    pub category: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { key: "all", label: "Tout", icon: "🍽️" },
    Category { key: "pizzas", label: "Pizzas", icon: "🍕" },
    Category { key: "pates", label: "Pâtes", icon: "🍝" },
    Category { key: "salades", label: "Salades", icon: "🥗" },
    Category { key: "desserts", label: "Desserts", icon: "🍰" },
    Category { key: "boissons", label: "Boissons", icon: "🥤" },
];

pub const SUBCATEGORIES: &[Subcategory] = &[
    Subcategory { key: "populaires", label: "Populaires" },
    Subcategory { key: "nouveautes", label: "Nouveautés" },
    Subcategory { key: "vegetarien", label: "Végétarien" },
    Subcategory { key: "epice", label: "Épicé" },
    Subcategory { key: "a-partager", label: "À partager" },
];

pub const DISHES: &[Dish] = &[
    Dish { name: "Pizza Margherita", description: "Tomate, mozzarella, basilic frais", price: "9.00", category: "pizzas", icon: "🍕" },
    Dish { name: "Pizza Reine", description: "Tomate, mozzarella, jambon, champignons", price: "11.50", category: "pizzas", icon: "🍕" },
    Dish { name: "Pizza Diavola", description: "Tomate, mozzarella, salami piquant", price: "12.00", category: "pizzas", icon: "🌶️" },
    Dish { name: "Spaghetti Carbonara", description: "Guanciale, pecorino, jaune d'œuf", price: "12.50", category: "pates", icon: "🍝" },
    Dish { name: "Penne Arrabbiata", description: "Sauce tomate relevée, ail, persil", price: "10.50", category: "pates", icon: "🍝" },
    Dish { name: "Salade César", description: "Laitue romaine, poulet, parmesan, croûtons", price: "10.00", category: "salades", icon: "🥗" },
    Dish { name: "Salade Caprese", description: "Tomates, burrata, basilic, huile d'olive", price: "9.50", category: "salades", icon: "🍅" },
    Dish { name: "Tiramisu", description: "Mascarpone, café, cacao", price: "6.50", category: "desserts", icon: "🍰" },
    Dish { name: "Panna Cotta", description: "Coulis de fruits rouges", price: "6.00", category: "desserts", icon: "🍮" },
    Dish { name: "Coca-Cola", description: "Canette 33 cl", price: "2.50", category: "boissons", icon: "🥤" },
    Dish { name: "Eau Pétillante", description: "Bouteille 50 cl", price: "3.00", category: "boissons", icon: "💧" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::parse_price;
    use crate::search::ALL_CATEGORIES;
    use std::collections::HashSet;

    #[test]
    fn test_every_dish_is_orderable() {
        let mut names = HashSet::new();
        for dish in DISHES {
            assert!(parse_price(dish.price).is_ok(), "{} has price {:?}", dish.name, dish.price);
            assert!(CATEGORIES.iter().any(|c| c.key == dish.category), "{} has no category", dish.name);
            assert!(names.insert(dish.name), "duplicate dish {}", dish.name);
        }
    }

    #[test]
    fn test_first_category_shows_everything() {
        assert_eq!(CATEGORIES[0].key, ALL_CATEGORIES);
    }
}
