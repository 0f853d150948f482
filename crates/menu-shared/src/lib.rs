//! # Menu Shared
//!
//! Presentation types shared by front-ends: display DTOs for dishes and the
//! transient notices shown after an operation.

pub mod dto;
pub mod notice;

pub use dto::DishView;
pub use notice::{Notice, NoticeVariant};
