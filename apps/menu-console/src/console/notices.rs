//! Mapping operation outcomes to notices.

use menu_core::DomainError;
use menu_core::domain::{Dish, Operation};
use menu_core::service::Submitted;
use menu_shared::Notice;

/// Notice for a failed operation. `operation` is the mutation that was
/// attempted, if any.
pub fn failure(operation: Option<Operation>, err: &DomainError) -> Notice {
    match err {
        DomainError::RateLimited { operation } => Notice::rate_limited(match operation {
            Operation::Create => "Please wait before creating another dish.",
            Operation::Update => "Please wait before updating another dish.",
            Operation::Delete => "Please wait before deleting another dish.",
        }),
        DomainError::NotFound { .. } => Notice::error("That dish is no longer on the menu"),
        DomainError::InvalidTransition { .. } | DomainError::Validation(_) => {
            Notice::error(err.to_string())
        }
        DomainError::Internal(detail) => {
            tracing::error!(detail = %detail, ?operation, "Operation failed");
            Notice::error(match operation {
                Some(Operation::Create) => "Failed to create dish",
                Some(Operation::Update) => "Failed to update dish",
                Some(Operation::Delete) => "Failed to delete dish",
                None => "Something went wrong",
            })
        }
    }
}

/// Notice for a successful form submission. An update that matched no dish
/// is silent.
pub fn submitted(outcome: &Submitted) -> Option<Notice> {
    match outcome {
        Submitted::Created(dish) => Some(Notice::success(format!(
            "{} has been added to the menu",
            dish.name
        ))),
        Submitted::Updated(Some(dish)) => {
            Some(Notice::success(format!("{} has been updated", dish.name)))
        }
        Submitted::Updated(None) => None,
    }
}

pub fn deleted(removed: Option<&Dish>) -> Notice {
    match removed {
        Some(dish) => Notice::success(format!("{} has been removed from the menu", dish.name)),
        None => Notice::success("The dish has been removed from the menu"),
    }
}
