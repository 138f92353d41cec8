//! Publication sources: the HTTP backend and the built-in dataset

pub mod backend;
pub mod fallback;
pub mod traits;

pub use backend::*;
pub use fallback::*;
pub use traits::*;
