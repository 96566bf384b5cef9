pub mod processor;
pub mod state;

pub use processor::*;
pub use state::*;
