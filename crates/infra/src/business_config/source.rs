use std::sync::Arc;

use thiserror::Error;

use erpgate_core::{ModuleKey, TenantId};
use erpgate_gate::BusinessConfiguration;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The backing store could not be reached or answered with an error.
    #[error("configuration backend unavailable: {0}")]
    Unavailable(String),
}

/// Where tenant module configuration lives.
///
/// Implementations perform IO; the gate never calls them directly.
#[async_trait::async_trait]
pub trait ConfigurationSource: Send + Sync {
    async fn load(&self, tenant_id: TenantId) -> Result<BusinessConfiguration, ConfigurationError>;

    async fn set_module(
        &self,
        tenant_id: TenantId,
        module: ModuleKey,
        enabled: bool,
    ) -> Result<BusinessConfiguration, ConfigurationError>;
}

#[async_trait::async_trait]
impl<S> ConfigurationSource for Arc<S>
where
    S: ConfigurationSource + ?Sized,
{
    async fn load(&self, tenant_id: TenantId) -> Result<BusinessConfiguration, ConfigurationError> {
        (**self).load(tenant_id).await
    }

    async fn set_module(
        &self,
        tenant_id: TenantId,
        module: ModuleKey,
        enabled: bool,
    ) -> Result<BusinessConfiguration, ConfigurationError> {
        (**self).set_module(tenant_id, module, enabled).await
    }
}
