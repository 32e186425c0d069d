//! # Catalog
//!
//! The read-only menu data the order builder presents: one ordered list of
//! [`MenuItem`]s per [`Course`].
//!
//! The catalog is validated once at construction. After that it only hands
//! out references; nothing in this crate ever mutates a catalog entry, so an
//! order can safely clone items out of it for the lifetime of the session.

use serde::{Deserialize, Serialize};

use lunchtray_core::validation::validate_menu_item;
use lunchtray_core::{Course, CoreResult, MenuItem};

/// Ordered menu options for the three courses.
///
/// ## Invariants
/// - Every item has passed [`validate_menu_item`] (non-empty name,
///   non-negative price).
/// - Lists keep their supplied order; the UI presents them as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    entrees: Vec<MenuItem>,
    side_dishes: Vec<MenuItem>,
    accompaniments: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from externally supplied menu data, validating every
    /// item up front.
    ///
    /// A bad item (negative price, empty name) rejects the whole catalog:
    /// serving a partially valid menu would let an unpriceable dish reach
    /// the order state.
    pub fn new(
        entrees: Vec<MenuItem>,
        side_dishes: Vec<MenuItem>,
        accompaniments: Vec<MenuItem>,
    ) -> CoreResult<Self> {
        for item in entrees
            .iter()
            .chain(side_dishes.iter())
            .chain(accompaniments.iter())
        {
            validate_menu_item(item)?;
        }

        Ok(Catalog {
            entrees,
            side_dishes,
            accompaniments,
        })
    }

    /// The menu options for one course, in presentation order.
    pub fn options(&self, course: Course) -> &[MenuItem] {
        match course {
            Course::Entree => &self.entrees,
            Course::SideDish => &self.side_dishes,
            Course::Accompaniment => &self.accompaniments,
        }
    }

    /// Looks up an item by display name within a course.
    pub fn find(&self, course: Course, name: &str) -> Option<&MenuItem> {
        self.options(course).iter().find(|item| item.name == name)
    }

    /// Total number of items across all courses.
    pub fn len(&self) -> usize {
        Course::ALL
            .iter()
            .map(|course| self.options(*course).len())
            .sum()
    }

    /// True if no course has any options.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The lunch counter's standard menu.
    ///
    /// Static data for the deployment this core was built for; other
    /// deployments supply their own lists through [`Catalog::new`].
    pub fn lunch_tray() -> Self {
        let entrees = vec![
            MenuItem::new(
                "Cauliflower",
                700,
                "Whole cauliflower, brined, roasted, and deep fried",
            )
            .with_image("images/cauliflower.jpg"),
            MenuItem::new(
                "Three Bean Chili",
                400,
                "Black beans, red beans, kidney beans, slow cooked, topped with onion",
            )
            .with_image("images/chili.jpg"),
            MenuItem::new(
                "Mushroom Pasta",
                550,
                "Penne pasta, mushrooms, basil, with plum tomatoes cooked in garlic and olive oil",
            )
            .with_image("images/mushroom_pasta.jpg"),
            MenuItem::new(
                "Spicy Black Bean Skillet",
                550,
                "Seasonal vegetables, black beans, house spice blend, served with avocado and quick pickled onions",
            )
            .with_image("images/black_bean_skillet.jpg"),
        ];

        let side_dishes = vec![
            MenuItem::new(
                "Summer Salad",
                250,
                "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
            )
            .with_image("images/summer_salad.jpg"),
            MenuItem::new(
                "Butternut Squash Soup",
                300,
                "Roasted butternut squash, roasted peppers, chili oil",
            )
            .with_image("images/butternut_squash_soup.jpg"),
            MenuItem::new(
                "Spicy Potatoes",
                200,
                "Marble potatoes, roasted, and fried in house spice blend",
            )
            .with_image("images/spicy_potatoes.jpg"),
            MenuItem::new("Coconut Rice", 150, "Rice, coconut milk, lime, and sugar")
                .with_image("images/coconut_rice.jpg"),
        ];

        let accompaniments = vec![
            MenuItem::new("Lunch Roll", 50, "Fresh baked roll made in house")
                .with_image("images/lunch_roll.jpg"),
            MenuItem::new(
                "Mixed Berries",
                100,
                "Strawberries, blueberries, raspberries, and huckleberries",
            )
            .with_image("images/mixed_berries.jpg"),
            MenuItem::new(
                "Pickled Veggies",
                50,
                "Pickled cucumbers and carrots, made in house",
            )
            .with_image("images/pickled_veggies.jpg"),
        ];

        // Static data above is known-good; validation still runs so a bad
        // edit here fails loudly in tests rather than at checkout.
        Catalog::new(entrees, side_dishes, accompaniments)
            .expect("standard lunch tray menu must validate")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_menu_shape() {
        let catalog = Catalog::lunch_tray();
        assert_eq!(catalog.options(Course::Entree).len(), 4);
        assert_eq!(catalog.options(Course::SideDish).len(), 4);
        assert_eq!(catalog.options(Course::Accompaniment).len(), 3);
        assert_eq!(catalog.len(), 11);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_standard_menu_items_carry_images() {
        let catalog = Catalog::lunch_tray();
        for course in Course::ALL {
            for item in catalog.options(course) {
                assert!(
                    item.image.is_some(),
                    "menu item '{}' is missing its picture",
                    item.name
                );
            }
        }

        let roll = catalog.find(Course::Accompaniment, "Lunch Roll").unwrap();
        assert_eq!(roll.image.as_deref(), Some("images/lunch_roll.jpg"));
    }

    #[test]
    fn test_find_by_name() {
        let catalog = Catalog::lunch_tray();

        let roll = catalog.find(Course::Accompaniment, "Lunch Roll").unwrap();
        assert_eq!(roll.price_cents, 50);

        // Right name, wrong course
        assert!(catalog.find(Course::Entree, "Lunch Roll").is_none());
        assert!(catalog.find(Course::Entree, "Unicorn Steak").is_none());
    }

    #[test]
    fn test_options_keep_supplied_order() {
        let catalog = Catalog::lunch_tray();
        let sides: Vec<&str> = catalog
            .options(Course::SideDish)
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(
            sides,
            [
                "Summer Salad",
                "Butternut Squash Soup",
                "Spicy Potatoes",
                "Coconut Rice"
            ]
        );
    }

    #[test]
    fn test_catalog_rejects_negative_price() {
        let result = Catalog::new(
            vec![MenuItem::new("Loss Leader", -100, "We pay you")],
            vec![],
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_rejects_empty_name() {
        let result = Catalog::new(vec![], vec![MenuItem::new("", 100, "Nameless")], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_catalog_is_legal() {
        // Loading is external; an empty menu is the provider's problem,
        // not a validation failure.
        let catalog = Catalog::new(vec![], vec![], vec![]).unwrap();
        assert!(catalog.is_empty());
    }
}
