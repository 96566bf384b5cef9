pub mod report;
pub mod scout;

pub use report::*;
pub use scout::*;
