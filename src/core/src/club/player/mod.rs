pub mod builder;
pub mod player;
pub mod position;
pub mod roles;
pub mod skills;

pub use builder::*;
pub use player::*;
pub use position::*;
pub use roles::*;
pub use skills::*;
