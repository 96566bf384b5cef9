pub mod directive;
pub mod generator;

pub use directive::*;
pub use generator::*;
