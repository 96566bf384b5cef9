pub mod calendar;
pub mod random;

pub use calendar::*;
pub use random::*;
