pub mod color;
pub mod error;
pub mod geometry;
pub mod metadata;

pub use color::*;
pub use error::*;
pub use geometry::*;
pub use metadata::*;
