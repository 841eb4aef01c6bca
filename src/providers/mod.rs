pub mod caching;
pub mod exchange_rate_api;

// Re-export the concrete providers for wiring in the composition root
pub use caching::CachingRateProvider;
pub use exchange_rate_api::ExchangeRateApiProvider;
