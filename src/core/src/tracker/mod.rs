pub mod outcome;
pub mod performance;
pub mod record;

pub use outcome::*;
pub use performance::*;
pub use record::*;
