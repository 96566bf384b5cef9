pub mod engine;
pub mod market;
pub mod negotiation;
pub mod offer;
pub mod transfer;

pub use engine::*;
pub use market::*;
pub use negotiation::*;
pub use offer::*;
pub use transfer::*;
