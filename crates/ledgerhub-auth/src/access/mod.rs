//! Access right repository trait and evaluation.

pub mod evaluator;
pub mod repository;

pub use evaluator::AccessEvaluator;
pub use repository::AccessRightRepository;
