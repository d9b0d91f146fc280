//! Name binding against the registry.
//!
//! ## Write path
//!
//! `sync` refuses locally before any request when the input is blank or the
//! cache is already `Bound` for the identity. Otherwise it checks
//! availability, then binds. The availability check is advisory only; the
//! registry's bind is the single point that enforces uniqueness, so a
//! `NameConflict` can still come back from `bind` after a positive check.
//!
//! Writes are never retried: a bind whose reply was lost is picked up by
//! `reconcile` on the next start.

use crate::{
    Availability, IdentityProvisioner, LocalProfileCache, NameRegistry, ReconcileOutcome,
    SyncError, SyncResult, with_retry,
};

use cs_config::RetryConfig;
use cs_core::{BindingState, ClientIdentity, Profile};

use std::sync::Arc;

use log::{debug, info, warn};

pub struct ProfileSyncClient {
    provisioner: Arc<IdentityProvisioner>,
    registry: Arc<dyn NameRegistry>,
    cache: Arc<LocalProfileCache>,
    retry: RetryConfig,
}

impl ProfileSyncClient {
    pub fn new(
        provisioner: Arc<IdentityProvisioner>,
        registry: Arc<dyn NameRegistry>,
        cache: Arc<LocalProfileCache>,
        retry: RetryConfig,
    ) -> Self {
        Self {
            provisioner,
            registry,
            cache,
            retry,
        }
    }

    /// Binds `name` and `class` to `identity` and caches the result as `Bound`.
    pub async fn sync(
        &self,
        identity: &ClientIdentity,
        name: &str,
        class: &str,
    ) -> SyncResult<Profile> {
        let name = required("name", name)?;
        let class = required("class", class)?;

        if self.cache.read().is_bound_for(identity) {
            return Err(SyncError::locked(identity.as_str()));
        }

        let availability = self.registry.check_availability(name, identity).await?;
        if !availability.available {
            return Err(SyncError::name_conflict(availability.reason.unwrap_or_else(
                || format!("Name {:?} is already taken", name),
            )));
        }

        let profile = self.registry.bind(identity, name, class).await?;
        info!("Bound {} as {:?} ({})", identity, profile.name, profile.class);

        self.cache_bound(&profile);
        Ok(profile)
    }

    /// Single-attempt resolve. A complete profile refreshes the cache.
    pub async fn fetch_remote_profile(&self, identity: &ClientIdentity) -> SyncResult<Profile> {
        let profile = self.registry.resolve(identity).await?;

        if profile.is_complete() {
            self.cache_bound(&profile);
        }

        Ok(profile)
    }

    /// Availability of `name` for this device's identity.
    pub async fn check_name(&self, name: &str) -> SyncResult<Availability> {
        let name = required("name", name)?;
        let identity = self.provisioner.get_or_create();

        self.registry.check_availability(name, &identity).await
    }

    /// Brings the cache in line with the registry at startup.
    ///
    /// A `Bound` cache is never downgraded here, even if the registry has
    /// lost the binding.
    pub async fn reconcile(&self) -> ReconcileOutcome {
        let identity = self.provisioner.get_or_create();
        let cached = self.cache.read();
        let bound = cached.is_bound_for(&identity);

        let registry = Arc::clone(&self.registry);
        let resolved = with_retry(&self.retry, "Profile reconcile", || {
            let registry = Arc::clone(&registry);
            let identity = identity.clone();
            async move { registry.resolve(&identity).await }
        })
        .await;

        match resolved {
            Ok(profile) if !profile.is_complete() => {
                warn!("Registry returned an incomplete profile for {}", identity);
                if bound {
                    ReconcileOutcome::RemoteMissing
                } else {
                    ReconcileOutcome::Unbound
                }
            }
            Ok(profile) => {
                self.cache_bound(&profile);
                if bound {
                    debug!("Refreshed cached profile for {}", identity);
                    ReconcileOutcome::Refreshed(profile)
                } else {
                    info!("Adopted server-side binding for {}", identity);
                    ReconcileOutcome::Adopted(profile)
                }
            }
            Err(SyncError::NotFound { .. }) if bound => {
                warn!(
                    "Registry has no binding for {}; keeping the locked local profile",
                    identity
                );
                ReconcileOutcome::RemoteMissing
            }
            Err(SyncError::NotFound { .. }) => ReconcileOutcome::Unbound,
            Err(e) => ReconcileOutcome::Unreachable(e),
        }
    }

    fn cache_bound(&self, profile: &Profile) {
        if let Err(e) = self.cache.write(profile.clone(), BindingState::Bound) {
            warn!(
                "Profile for {} is cached in memory only: {} ({})",
                profile.identity,
                e,
                e.recovery_hint()
            );
        }
    }
}

#[track_caller]
fn required<'a>(field: &str, value: &'a str) -> SyncResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SyncError::validation(field, format!("{} must not be blank", field)));
    }
    Ok(value)
}
