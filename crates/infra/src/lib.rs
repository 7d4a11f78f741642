//! Infrastructure adapters for tenant business configuration.

pub mod business_config;

pub use business_config::{
    ConfigurationCache, ConfigurationError, ConfigurationSource, InMemoryConfigurationSource,
};
