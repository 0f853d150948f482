use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DishCategory;
use crate::error::ValidationErrors;
use crate::security::{validate_image_url, validate_price};

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const PRICE_MIN: f64 = 0.01;
pub const PRICE_MAX: f64 = 9999.99;

/// Images the dish form offers as one-click picks.
pub const SUGGESTED_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?auto=format&fit=crop&w=400",
    "https://images.unsplash.com/photo-1565958011703-44f9829ba187?auto=format&fit=crop&w=400",
    "https://images.unsplash.com/photo-1540189549336-e6e99c3679fe?auto=format&fit=crop&w=400",
    "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?auto=format&fit=crop&w=400",
];

/// Dish entity - one item on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: DishCategory,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dish {
    /// Create a new dish with generated ID and matching timestamps.
    pub fn new(draft: DishDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            image_url: draft.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields and refresh `updated_at`.
    pub fn apply(&mut self, draft: DishDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.category = draft.category;
        self.image_url = draft.image_url;
        // wall clock may step backwards; never let updated_at precede created_at
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// Raw dish form data, exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: String,
}

/// Form data that passed [`DishInput::validate`].
///
/// The store only accepts drafts, so every mutation has been through the
/// form schema first.
#[derive(Debug, Clone, PartialEq)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: DishCategory,
    pub image_url: String,
}

impl DishInput {
    /// Prefill the edit form from an existing dish.
    pub fn from_dish(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: dish.price,
            category: dish.category.as_str().to_string(),
            image_url: dish.image_url.clone(),
        }
    }

    /// Run the form schema, collecting every field error.
    ///
    /// On success the image URL is replaced by its normalized form.
    pub fn validate(self) -> Result<DishDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.is_empty() {
            errors.push("name", "Name is required");
        } else if self.name.chars().count() > NAME_MAX_CHARS {
            errors.push("name", "Name must be less than 100 characters");
        }

        if self.description.is_empty() {
            errors.push("description", "Description is required");
        } else if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push("description", "Description must be less than 500 characters");
        }

        if self.price.is_nan() || self.price < PRICE_MIN {
            errors.push("price", "Price must be greater than 0");
        } else if self.price > PRICE_MAX {
            errors.push("price", "Price must be less than $10000");
        } else {
            let check = validate_price(self.price);
            if let Some(message) = check.error {
                errors.push("price", message);
            }
        }

        let category = if self.category.is_empty() {
            errors.push("category", "Category is required");
            None
        } else {
            match self.category.parse::<DishCategory>() {
                Ok(category) => Some(category),
                Err(_) => {
                    errors.push("category", "Please select a valid category");
                    None
                }
            }
        };

        let image = validate_image_url(&self.image_url);
        if !image.is_valid {
            errors.push("imageUrl", "Please enter a valid image URL");
        }

        match category {
            Some(category) if errors.is_empty() => Ok(DishDraft {
                name: self.name,
                description: self.description,
                price: self.price,
                category,
                image_url: image.sanitized,
            }),
            _ => Err(errors),
        }
    }
}
