pub mod client;
pub mod http;

pub use client::RatingsApi;
pub use http::HttpRatingsApi;

#[cfg(test)]
pub use client::MockRatingsApi;
