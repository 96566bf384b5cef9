pub mod engine;
pub mod response;
pub mod trial;

pub use engine::*;
pub use response::*;
pub use trial::*;
