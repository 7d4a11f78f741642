use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use erpgate_core::{ModuleKey, TenantId};
use erpgate_gate::BusinessConfiguration;

use super::source::{ConfigurationError, ConfigurationSource};

#[derive(Debug, Clone)]
struct CachedEntry {
    config: BusinessConfiguration,
    loaded_at: Instant,
}

/// Per-tenant slot. `generation` is bumped on every invalidation; a load only
/// stores its result if the generation it started under is still current.
#[derive(Debug, Default)]
struct TenantSlot {
    generation: u64,
    entry: Option<CachedEntry>,
}

/// Per-tenant configuration cache in front of a [`ConfigurationSource`].
///
/// Entries live until explicitly invalidated or, when a TTL is set, until they
/// age out. Failed loads are never cached.
#[derive(Debug)]
pub struct ConfigurationCache<S> {
    source: S,
    ttl: Option<Duration>,
    slots: RwLock<HashMap<TenantId, TenantSlot>>,
}

impl<S> ConfigurationCache<S>
where
    S: ConfigurationSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            ttl: None,
            slots: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_ttl(mut self, ttl: Option<Duration>) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn load(&self, tenant_id: TenantId) -> Result<BusinessConfiguration, ConfigurationError> {
        let generation = {
            let slots = self.slots.read().await;
            match slots.get(&tenant_id) {
                Some(slot) => {
                    if let Some(entry) = slot.entry.as_ref().filter(|e| self.is_fresh(e)) {
                        return Ok(entry.config.clone());
                    }
                    slot.generation
                }
                None => 0,
            }
        };

        let config = self.source.load(tenant_id).await?;

        let mut slots = self.slots.write().await;
        let slot = slots.entry(tenant_id).or_default();
        if slot.generation == generation {
            slot.entry = Some(CachedEntry {
                config: config.clone(),
                loaded_at: Instant::now(),
            });
            tracing::debug!(tenant_id = %tenant_id, "module configuration loaded");
        } else {
            tracing::debug!(tenant_id = %tenant_id, "module configuration invalidated during load; not cached");
        }
        Ok(config)
    }

    /// Load, substituting the fail-closed sentinel on any error.
    pub async fn load_or_unavailable(&self, tenant_id: TenantId) -> BusinessConfiguration {
        match self.load(tenant_id).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(tenant_id = %tenant_id, error = %e, "module configuration unavailable; failing closed");
                BusinessConfiguration::unavailable()
            }
        }
    }

    pub async fn invalidate(&self, tenant_id: TenantId) {
        let mut slots = self.slots.write().await;
        let slot = slots.entry(tenant_id).or_default();
        slot.generation += 1;
        slot.entry = None;
    }

    /// Write through to the source, then drop the tenant's cached entry so the
    /// next request observes the change.
    pub async fn update_module(
        &self,
        tenant_id: TenantId,
        module: ModuleKey,
        enabled: bool,
    ) -> Result<BusinessConfiguration, ConfigurationError> {
        let updated = self.source.set_module(tenant_id, module, enabled).await?;
        self.invalidate(tenant_id).await;

        tracing::info!(tenant_id = %tenant_id, module = %module, enabled, "module configuration changed");
        Ok(updated)
    }

    fn is_fresh(&self, entry: &CachedEntry) -> bool {
        self.ttl.is_none_or(|ttl| entry.loaded_at.elapsed() < ttl)
    }
}
