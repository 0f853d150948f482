//! Dish repository implementations.

mod memory;

pub use memory::InMemoryDishRepository;
