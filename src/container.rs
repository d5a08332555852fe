use alloc::sync::Arc;
use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};
use parking_lot::RwLock;
use tracing::{debug, error, info_span};

use crate::{
    any::RcAny,
    errors::ResolveErrorKind,
    registry::{boxed_factory, Registry, ServiceKey},
    scope::ObjectScope,
};

/// Registration store.
///
/// Clones are handles to the same store: a registration made through one clone is visible through all of them.
#[derive(Clone, Default)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

#[derive(Default)]
struct ContainerInner {
    registry: RwLock<Registry>,
}

impl Container {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a registration for the service type and name with the default [`ObjectScope`].
    /// The factory isn't called here, only when a matching resolution occurs.
    /// An existing registration with the same type and name is replaced.
    #[inline]
    pub fn register<S, F>(&self, name: Option<&str>, factory: F) -> ServiceEntry<S>
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.register_in_scope(name, factory, ObjectScope::default())
    }

    /// Same as [`Self::register`], but with the specified [`ObjectScope`]
    pub fn register_in_scope<S, F>(&self, name: Option<&str>, factory: F, scope: ObjectScope) -> ServiceEntry<S>
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<S>(name);

        let span = info_span!("register", service = key.type_info.name, name = name, scope = scope.name());
        let _guard = span.enter();

        if self
            .inner
            .registry
            .write()
            .insert(key.clone(), boxed_factory(factory), scope)
            .is_some()
        {
            debug!("Replaced previous registration");
        } else {
            debug!("Registered");
        }

        ServiceEntry {
            container: self.clone(),
            key,
            _marker: PhantomData,
        }
    }

    /// Retrieves the instance with the specified service type and registration name.
    ///
    /// Returns `None` if there is no registration for them in the container.
    ///
    /// # Notes
    /// No lock is held while the factory runs, so factories may resolve their own dependencies from this container.
    /// Cyclic factories aren't detected.
    pub fn resolve<S>(&self, name: Option<&str>) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<S>(name);

        let span = info_span!("resolve", service = key.type_info.name, name = name);
        let _guard = span.enter();

        self.resolve_by_key(&key)
    }

    /// Retrieves the instance with the specified service type and registration name.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::MissingRegistration`] if there is no registration for them in the container.
    pub fn resolve_or_err<S>(&self, name: Option<&str>) -> Result<Arc<S>, ResolveErrorKind>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let key = ServiceKey::of::<S>(name);

        let span = info_span!("resolve", service = key.type_info.name, name = name);
        let _guard = span.enter();

        match self.resolve_by_key(&key) {
            Some(service) => Ok(service),
            None => {
                let err = ResolveErrorKind::missing_with_type_info(&key.type_info, name);
                error!("{}", err);
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn is_registered<S: ?Sized + 'static>(&self, name: Option<&str>) -> bool {
        self.inner.registry.read().contains(&ServiceKey::of::<S>(name))
    }

    /// Removes the registration and its cached instance. Returns `false` if there was none.
    pub fn unregister<S: ?Sized + 'static>(&self, name: Option<&str>) -> bool {
        self.inner.registry.write().remove(&ServiceKey::of::<S>(name)).is_some()
    }

    /// Removes all registrations
    pub fn reset(&self) {
        self.inner.registry.write().clear();
        debug!("Container reset");
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.registry.read().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.registry.read().is_empty()
    }

    /// Returns `true` if both handles point to the same store
    #[inline]
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl Container {
    fn resolve_by_key<S>(&self, key: &ServiceKey) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let (factory, scope) = {
            let registry = self.inner.registry.read();
            let Some(data) = registry.get(key) else {
                debug!("Not registered");
                return None;
            };
            if let Some(instance) = &data.instance {
                debug!("Found in cache");
                return downcast(instance.clone());
            }
            (data.factory.clone(), data.scope)
        };

        let instance = factory();
        debug!("Resolved");

        if scope.is_cached() {
            let mut registry = self.inner.registry.write();
            match registry.get_mut(key) {
                Some(data) if data.scope.is_cached() && Arc::ptr_eq(&data.factory, &factory) => {
                    if let Some(cached) = &data.instance {
                        debug!("Already cached by another resolution");
                        return downcast(cached.clone());
                    }
                    data.instance = Some(instance.clone());
                    debug!("Cached");
                }
                _ => debug!("Registration changed while resolving, instance isn't cached"),
            }
        }

        downcast(instance)
    }
}

#[inline]
fn downcast<S>(instance: RcAny) -> Option<Arc<S>>
where
    S: ?Sized + Send + Sync + 'static,
{
    match instance.downcast::<Arc<S>>() {
        Ok(service) => Some(Arc::clone(&service)),
        Err(_) => {
            error!("Incorrect instance type in registration");
            None
        }
    }
}

impl Debug for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container").field("registrations", &self.len()).finish()
    }
}

/// Handle to a registration, permitting further configuration.
///
/// ```rust
/// use lazy_inject::{Container, ObjectScope};
/// use std::sync::Arc;
///
/// let container = Container::new();
/// container
///     .register(Some("counter"), || Arc::new(0u32))
///     .in_object_scope(ObjectScope::Transient);
///
/// assert!(container.resolve::<u32>(Some("counter")).is_some());
/// ```
pub struct ServiceEntry<S: ?Sized> {
    container: Container,
    key: ServiceKey,
    _marker: PhantomData<fn() -> Arc<S>>,
}

impl<S> ServiceEntry<S>
where
    S: ?Sized + Send + Sync + 'static,
{
    /// Changes how instances of this registration are shared. A cached instance is dropped.
    pub fn in_object_scope(self, scope: ObjectScope) -> Self {
        if self.container.inner.registry.write().set_scope(&self.key, scope) {
            debug!(service = self.key.type_info.name, scope = scope.name(), "Scope changed");
        }
        self
    }

    /// Current scope of the registration, `None` if it was removed
    #[must_use]
    pub fn object_scope(&self) -> Option<ObjectScope> {
        self.container.inner.registry.read().get(&self.key).map(|data| data.scope)
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.key.name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn container(&self) -> &Container {
        &self.container
    }

    #[inline]
    #[must_use]
    pub fn resolve(&self) -> Option<Arc<S>> {
        self.container.resolve_by_key(&self.key)
    }
}
