//! Pure data structures (DTOs) managed by the [`CourseStore`](crate::store::CourseStore).

pub mod module;
pub mod resource;

pub use module::*;
pub use resource::*;
