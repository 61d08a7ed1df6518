pub mod dimensions;
pub mod service;
pub mod tiers;

pub use dimensions::{rank, DimensionExtremes};
pub use service::SummaryService;
pub use tiers::{resolve, ResolvedTier};
