pub mod evaluation;
pub mod meeting;
pub mod profile;
pub mod reaction;

pub use evaluation::*;
pub use meeting::*;
pub use profile::*;
pub use reaction::*;
