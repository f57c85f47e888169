pub mod cleanup;
pub mod refactor;

pub use cleanup::*;
pub use refactor::*;
