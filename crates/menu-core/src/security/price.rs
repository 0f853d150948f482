//! Numeric price bounds.

use crate::domain::PRICE_MAX;

/// Outcome of [`validate_price`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceValidation {
    pub is_valid: bool,
    pub error: Option<&'static str>,
}

impl PriceValidation {
    fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn fail(error: &'static str) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }
}

/// Bounds-check a price: NaN and negatives fail, as does anything above 9999.99.
///
/// Zero passes here. The dish form applies the stricter `> 0` rule before
/// this check runs.
pub fn validate_price(price: f64) -> PriceValidation {
    if price.is_nan() || price < 0.0 {
        return PriceValidation::fail("Price must be a positive number");
    }

    if price > PRICE_MAX {
        return PriceValidation::fail("Price cannot exceed $9999.99");
    }

    PriceValidation::ok()
}
