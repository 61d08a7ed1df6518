pub mod cache;
pub mod error;
pub mod rating;
pub mod summary;
pub mod tier;

pub use cache::*;
pub use error::*;
pub use rating::*;
pub use summary::*;
pub use tier::*;
