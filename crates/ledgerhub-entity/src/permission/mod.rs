//! Access right entities and enums.

pub mod action;
pub mod model;

pub use action::Action;
pub use model::AccessRight;
