//! Application services built on the ports.

mod catalog;
mod dish_store;
mod session;

#[cfg(test)]
mod testing;

pub use catalog::{DishFilter, SEARCH_MAX_CHARS};
pub use dish_store::DishStore;
pub use session::{MenuSession, SessionState, Submitted};
