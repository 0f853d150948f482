//! Input hygiene for everything typed into the dish forms.
//!
//! All functions here are pure: no I/O, no shared state.

mod image_url;
mod price;
mod sanitize;

pub use image_url::{ImageUrlValidation, validate_image_url};
pub use price::{PriceValidation, validate_price};
pub use sanitize::{sanitize_html, sanitize_text};
