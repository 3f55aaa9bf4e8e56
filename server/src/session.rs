//! Per-session resolution state for the UI shell.
//!
//! A [`BrandingSession`] re-resolves whenever navigation changes the request
//! context. The tenant-selection flow is the only asynchronous step: while a
//! directory lookup is outstanding the session reports
//! [`SessionState::Loading`], and any newer navigation cancels it. A lookup
//! that completes after being superseded is discarded and reported as
//! [`SessionOutcome::Superseded`].

use crate::common::errors::ResolutionError;
use crate::resolver::{ConfigResolver, RequestContext, ResolvedContext};
use crate::tenant::{Tenant, TenantDirectory, TenantId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;

/// What the UI should currently render.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Nothing resolved yet.
    Idle,
    /// A tenant lookup is outstanding.
    Loading { tenant_id: Option<TenantId> },
    Ready(Arc<ResolvedContext>),
    /// More than one (or no) active tenant; the user has to pick.
    ChooseTenant(Vec<Tenant>),
    Failed(ResolutionError),
}

/// Result of one navigation through the tenant-selection flow.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Ready(Arc<ResolvedContext>),
    ChooseTenant(Vec<Tenant>),
    /// A newer navigation started before this one finished; nothing was applied.
    Superseded,
}

enum TenantLookup {
    Selected(Tenant),
    Choose(Vec<Tenant>),
}

#[derive(PartialEq)]
struct CacheKey {
    context: RequestContext,
    tenant: Option<Tenant>,
}

struct SessionInner {
    generation: u64,
    pending: Option<CancellationToken>,
    state: SessionState,
    last: Option<(CacheKey, Arc<ResolvedContext>)>,
}

/// Restores the state from before a lookup when the `select_tenant` future
/// is dropped while the lookup is still the latest navigation.
struct PendingLookup<'a> {
    inner: &'a Mutex<SessionInner>,
    generation: u64,
    previous: Option<SessionState>,
}

impl PendingLookup<'_> {
    fn finish(mut self) {
        self.previous = None;
    }
}

impl Drop for PendingLookup<'_> {
    fn drop(&mut self) {
        let Some(previous) = self.previous.take() else {
            return;
        };
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.generation == self.generation {
            log::debug!("Tenant lookup {} abandoned, restoring previous state", self.generation);
            inner.pending = None;
            inner.state = previous;
        }
    }
}

pub struct BrandingSession<D: TenantDirectory + ?Sized> {
    resolver: ConfigResolver,
    directory: Arc<D>,
    inner: Mutex<SessionInner>,
}

impl<D: TenantDirectory + ?Sized> BrandingSession<D> {
    pub fn new(resolver: ConfigResolver, directory: Arc<D>) -> Self {
        Self {
            resolver,
            directory,
            inner: Mutex::new(SessionInner {
                generation: 0,
                pending: None,
                state: SessionState::Idle,
                last: None,
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// Resolves the plain flow and supersedes any pending tenant lookup.
    pub fn navigate(&self, context: &RequestContext) -> Arc<ResolvedContext> {
        let mut inner = self.lock();
        Self::begin(&mut inner);
        let resolved = self.resolve_cached(&mut inner, context, None);
        inner.state = SessionState::Ready(resolved.clone());
        resolved
    }

    /// Runs the tenant-selection flow for `context`.
    ///
    /// With a `tenantId` the tenant is looked up and must exist and be
    /// active. Without one, a directory holding exactly one active tenant is
    /// auto-selected; otherwise the caller gets the list to choose from.
    pub async fn select_tenant(
        &self,
        context: &RequestContext,
    ) -> Result<SessionOutcome, ResolutionError> {
        let (generation, token, pending) = {
            let mut inner = self.lock();
            let generation = Self::begin(&mut inner);
            let token = CancellationToken::new();
            inner.pending = Some(token.clone());
            let previous = std::mem::replace(
                &mut inner.state,
                SessionState::Loading {
                    tenant_id: context.tenant_id,
                },
            );
            let pending = PendingLookup {
                inner: &self.inner,
                generation,
                previous: Some(previous),
            };
            (generation, token, pending)
        };

        let lookup = tokio::select! {
            result = self.lookup(context.tenant_id) => result,
            () = token.cancelled() => {
                log::debug!("Tenant lookup {generation} cancelled by newer navigation");
                return Ok(SessionOutcome::Superseded);
            }
        };
        pending.finish();

        let mut inner = self.lock();
        if inner.generation != generation {
            log::debug!("Discarding stale tenant lookup {generation}");
            return Ok(SessionOutcome::Superseded);
        }
        inner.pending = None;

        match lookup {
            Ok(TenantLookup::Selected(tenant)) => {
                log::info!("Selected tenant {} ({})", tenant.id, tenant.slug);
                let resolved = self.resolve_cached(&mut inner, context, Some(tenant));
                inner.state = SessionState::Ready(resolved.clone());
                Ok(SessionOutcome::Ready(resolved))
            }
            Ok(TenantLookup::Choose(tenants)) => {
                inner.state = SessionState::ChooseTenant(tenants.clone());
                Ok(SessionOutcome::ChooseTenant(tenants))
            }
            Err(e) => {
                log::warn!("Tenant selection failed [{}]: {e}", e.code());
                inner.state = SessionState::Failed(e.clone());
                Err(e)
            }
        }
    }

    async fn lookup(&self, tenant_id: Option<TenantId>) -> Result<TenantLookup, ResolutionError> {
        match tenant_id {
            Some(id) => match self.directory.get(id).await? {
                Some(tenant) if tenant.is_active() => Ok(TenantLookup::Selected(tenant)),
                Some(_) => {
                    log::debug!("Tenant {id} exists but is not active");
                    Err(ResolutionError::TenantNotFound(id))
                }
                None => Err(ResolutionError::TenantNotFound(id)),
            },
            None => {
                let mut active = self.directory.list_active().await?;
                if active.len() == 1 {
                    Ok(TenantLookup::Selected(active.remove(0)))
                } else {
                    Ok(TenantLookup::Choose(active))
                }
            }
        }
    }

    /// Starts a new navigation: cancels the pending lookup and bumps the generation.
    fn begin(inner: &mut SessionInner) -> u64 {
        if let Some(pending) = inner.pending.take() {
            pending.cancel();
        }
        inner.generation += 1;
        inner.generation
    }

    fn resolve_cached(
        &self,
        inner: &mut SessionInner,
        context: &RequestContext,
        tenant: Option<Tenant>,
    ) -> Arc<ResolvedContext> {
        let key = CacheKey {
            context: context.clone(),
            tenant,
        };
        if let Some((last_key, resolved)) = &inner.last {
            if *last_key == key {
                log::trace!("Branding inputs unchanged, reusing resolved context");
                return resolved.clone();
            }
        }

        let resolved = Arc::new(
            self.resolver
                .resolve_with_tenant(&key.context, key.tenant.as_ref()),
        );
        inner.last = Some((key, resolved.clone()));
        resolved
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
