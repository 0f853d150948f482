//! Display forms of domain objects.

use serde::{Deserialize, Serialize};

use menu_core::domain::Dish;

/// A dish as shown on a menu card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishView {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Two decimals, no currency sign.
    pub price: String,
    pub category: String,
    pub category_label: String,
    pub image_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Dish> for DishView {
    fn from(dish: &Dish) -> Self {
        Self {
            id: dish.id.to_string(),
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: format!("{:.2}", dish.price),
            category: dish.category.as_str().to_string(),
            category_label: dish.category.label().to_string(),
            image_url: dish.image_url.clone(),
            created_at: dish.created_at.to_rfc3339(),
            updated_at: dish.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use menu_core::domain::{DishCategory, DishDraft};

    use super::*;

    #[test]
    fn test_view_formats_price_and_label() {
        let dish = Dish::new(DishDraft {
            name: "Grilled Salmon".to_string(),
            description: "Fresh Atlantic salmon".to_string(),
            price: 32.5,
            category: DishCategory::Mains,
            image_url: String::new(),
        });

        let view = DishView::from(&dish);

        assert_eq!(view.price, "32.50");
        assert_eq!(view.category, "mains");
        assert_eq!(view.category_label, "Main Courses");
        assert_eq!(view.id, dish.id.to_string());

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["categoryLabel"], "Main Courses");
    }
}
