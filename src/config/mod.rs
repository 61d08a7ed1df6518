pub mod endpoints;
pub mod settings;

pub use endpoints::ApiConfig;
pub use settings::{default_tier_table, AppSettings, CacheSettings, Settings};
