pub mod evaluator;
pub mod formation;

pub use evaluator::*;
pub use formation::*;
