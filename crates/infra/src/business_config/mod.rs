//! Business configuration loading and caching.
//!
//! - `source.rs`: the loading contract + error type
//! - `in_memory.rs`: process-local source for dev/tests
//! - `cache.rs`: per-tenant cache with explicit invalidation

pub mod cache;
pub mod in_memory;
pub mod source;

pub use cache::ConfigurationCache;
pub use in_memory::InMemoryConfigurationSource;
pub use source::{ConfigurationError, ConfigurationSource};
