use std::collections::HashMap;

use tokio::sync::RwLock;

use erpgate_core::{ModuleKey, TenantId};
use erpgate_gate::BusinessConfiguration;

use super::source::{ConfigurationError, ConfigurationSource};

/// In-memory configuration store for tests/dev.
///
/// Tenants without a record load [`BusinessConfiguration::tenant_default`].
#[derive(Debug, Default)]
pub struct InMemoryConfigurationSource {
    tenants: RwLock<HashMap<TenantId, BusinessConfiguration>>,
}

impl InMemoryConfigurationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a tenant's whole configuration.
    pub async fn put(&self, tenant_id: TenantId, config: BusinessConfiguration) {
        self.tenants.write().await.insert(tenant_id, config);
    }
}

#[async_trait::async_trait]
impl ConfigurationSource for InMemoryConfigurationSource {
    async fn load(&self, tenant_id: TenantId) -> Result<BusinessConfiguration, ConfigurationError> {
        let tenants = self.tenants.read().await;
        Ok(tenants
            .get(&tenant_id)
            .cloned()
            .unwrap_or_else(BusinessConfiguration::tenant_default))
    }

    async fn set_module(
        &self,
        tenant_id: TenantId,
        module: ModuleKey,
        enabled: bool,
    ) -> Result<BusinessConfiguration, ConfigurationError> {
        let mut tenants = self.tenants.write().await;
        let config = tenants
            .entry(tenant_id)
            .or_insert_with(BusinessConfiguration::tenant_default);
        config.set(module, enabled);
        Ok(config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_tenant_gets_default() {
        let source = InMemoryConfigurationSource::new();
        let config = source.load(TenantId::new()).await.unwrap();
        assert_eq!(config, BusinessConfiguration::tenant_default());
    }

    #[tokio::test]
    async fn set_module_is_tenant_scoped() {
        let source = InMemoryConfigurationSource::new();
        let t1 = TenantId::new();
        let t2 = TenantId::new();

        source.set_module(t1, ModuleKey::Sales, true).await.unwrap();

        assert!(source.load(t1).await.unwrap().is_enabled(ModuleKey::Sales));
        assert!(!source.load(t2).await.unwrap().is_enabled(ModuleKey::Sales));
    }
}
