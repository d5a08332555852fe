use alloc::{string::String, sync::Arc};
use core::fmt::{self, Debug, Formatter};
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::{
    any::TypeInfo,
    errors::ResolveErrorKind,
    name::{owned_name, InjectId},
    shared::ContainerRegistry,
};

/// Lazily injected service.
///
/// The service is resolved from the active container on the first call of [`Inject::value`], not on construction,
/// so the container may be switched or the service registered in between.
/// The outcome of the first resolution, including a failure, is cached.
///
/// ```rust
/// use lazy_inject::{register_named, Inject};
/// use std::sync::Arc;
///
/// struct Config {
///     url: &'static str,
/// }
///
/// let config = Inject::<Config>::named("primary");
/// register_named("primary", || Arc::new(Config { url: "postgres://localhost" }));
///
/// assert_eq!(config.value().unwrap().url, "postgres://localhost");
/// ```
pub struct Inject<S: ?Sized> {
    registry: ContainerRegistry,
    name: Option<String>,
    cell: OnceCell<Result<Arc<S>, ResolveErrorKind>>,
}

impl<S> Inject<S>
where
    S: ?Sized + Send + Sync + 'static,
{
    /// Injects an unnamed registration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_name(None)
    }

    /// Injects a registration with a raw name or a symbolic identifier
    #[inline]
    #[must_use]
    pub fn named(name: impl InjectId) -> Self {
        Self::with_name(Some(owned_name(&name)))
    }

    #[inline]
    #[must_use]
    pub fn with_name(name: Option<String>) -> Self {
        Self {
            registry: ContainerRegistry::shared().clone(),
            name,
            cell: OnceCell::new(),
        }
    }

    /// Resolves from `registry` instead of the process-wide one
    #[inline]
    #[must_use]
    pub fn in_registry(mut self, registry: ContainerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Resolves the service on the first call and returns the cached outcome afterwards.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::MissingRegistration`] if the service wasn't registered at the first call
    pub fn value(&self) -> Result<Arc<S>, ResolveErrorKind> {
        self.cell
            .get_or_init(|| {
                debug!(service = TypeInfo::of::<S>().name, name = self.name.as_deref(), "Resolving injection");
                self.registry.active().resolve_or_err(self.name.as_deref())
            })
            .clone()
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<S> Default for Inject<S>
where
    S: ?Sized + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> Debug for Inject<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("name", &self.name)
            .field("resolved", &self.cell.get().is_some())
            .finish_non_exhaustive()
    }
}

/// Lazily injected optional service.
///
/// Same as [`Inject`], but a missing registration yields `None`.
/// The cached `None` isn't refreshed by a later registration, use [`SafeInject::try_resolve_now`] for that.
pub struct SafeInject<S: ?Sized> {
    registry: ContainerRegistry,
    name: Option<String>,
    cell: OnceCell<Option<Arc<S>>>,
}

impl<S> SafeInject<S>
where
    S: ?Sized + Send + Sync + 'static,
{
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_name(None)
    }

    #[inline]
    #[must_use]
    pub fn named(name: impl InjectId) -> Self {
        Self::with_name(Some(owned_name(&name)))
    }

    #[inline]
    #[must_use]
    pub fn with_name(name: Option<String>) -> Self {
        Self {
            registry: ContainerRegistry::shared().clone(),
            name,
            cell: OnceCell::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn in_registry(mut self, registry: ContainerRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Resolves the service on the first call and returns the cached outcome afterwards
    #[must_use]
    pub fn value(&self) -> Option<Arc<S>> {
        self.cell
            .get_or_init(|| {
                debug!(service = TypeInfo::of::<S>().name, name = self.name.as_deref(), "Resolving safe injection");
                self.resolve_now()
            })
            .clone()
    }

    /// Resolves the service again from the active container.
    ///
    /// # Warning
    /// The result isn't stored, [`SafeInject::value`] keeps returning the outcome of its first call.
    #[must_use]
    pub fn try_resolve_now(&self) -> Option<Arc<S>> {
        debug!(service = TypeInfo::of::<S>().name, name = self.name.as_deref(), "Resolving safe injection now");
        self.resolve_now()
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }

    #[inline]
    fn resolve_now(&self) -> Option<Arc<S>> {
        self.registry.active().resolve(self.name.as_deref())
    }
}

impl<S> Default for SafeInject<S>
where
    S: ?Sized + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized> Debug for SafeInject<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeInject")
            .field("name", &self.name)
            .field("resolved", &self.cell.get().is_some())
            .finish_non_exhaustive()
    }
}
