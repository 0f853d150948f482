//! Domain entities - the core business objects.

mod category;
mod dish;
mod operation;

pub use category::{CategoryFilter, DishCategory, UnknownCategory};
pub use dish::{
    DESCRIPTION_MAX_CHARS, Dish, DishDraft, DishInput, NAME_MAX_CHARS, PRICE_MAX, PRICE_MIN,
    SUGGESTED_IMAGES,
};
pub use operation::Operation;
