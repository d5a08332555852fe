use alloc::sync::Arc;
use core::fmt::{self, Debug, Formatter};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::{
    container::{Container, ServiceEntry},
    errors::ResolveErrorKind,
    name::InjectId,
    scope::ObjectScope,
};

static SHARED: Lazy<ContainerRegistry> = Lazy::new(ContainerRegistry::new);

/// Selects the active container: a custom one if installed, the default one otherwise.
///
/// Clones are handles to the same selection.
/// The process-wide instance is [`ContainerRegistry::shared`], other instances are isolated from it.
#[derive(Clone, Default)]
pub struct ContainerRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    default: Container,
    custom: RwLock<Option<Container>>,
}

impl ContainerRegistry {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry, created on first use
    #[inline]
    #[must_use]
    pub fn shared() -> &'static ContainerRegistry {
        &SHARED
    }

    /// Custom container if installed, else the default one
    #[must_use]
    pub fn active(&self) -> Container {
        match &*self.inner.custom.read() {
            Some(custom) => custom.clone(),
            None => self.inner.default.clone(),
        }
    }

    /// Makes `container` active until [`Self::use_default`] is called.
    /// Replaces a previously installed custom container.
    pub fn use_custom(&self, container: Container) {
        if self.inner.custom.write().replace(container).is_some() {
            debug!("Custom container replaced");
        } else {
            debug!("Switched to custom container");
        }
    }

    /// Removes the custom container, the default one becomes active again
    pub fn use_default(&self) {
        if self.inner.custom.write().take().is_some() {
            debug!("Switched to default container");
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.inner.custom.read().is_some()
    }

    #[inline]
    #[must_use]
    pub fn default_container(&self) -> Container {
        self.inner.default.clone()
    }
}

impl ContainerRegistry {
    /// Registers an unnamed service in the active container.
    /// The factory is called only when a matching resolution occurs.
    #[inline]
    pub fn register<S, F>(&self, factory: F) -> ServiceEntry<S>
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.active().register(None, factory)
    }

    /// Registers a service under a raw name or a symbolic identifier in the active container
    #[inline]
    pub fn register_named<S, F>(&self, name: impl InjectId, factory: F) -> ServiceEntry<S>
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.active().register(Some(name.inject_id()), factory)
    }

    #[inline]
    pub fn register_in_scope<S, F>(&self, factory: F, scope: ObjectScope) -> ServiceEntry<S>
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.active().register_in_scope(None, factory, scope)
    }

    #[inline]
    pub fn register_named_in_scope<S, F>(&self, name: impl InjectId, factory: F, scope: ObjectScope) -> ServiceEntry<S>
    where
        S: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<S> + Send + Sync + 'static,
    {
        self.active().register_in_scope(Some(name.inject_id()), factory, scope)
    }

    /// # Errors
    /// Returns [`ResolveErrorKind::MissingRegistration`] if the service isn't registered in the active container
    #[inline]
    pub fn resolve<S>(&self) -> Result<Arc<S>, ResolveErrorKind>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.active().resolve_or_err(None)
    }

    /// # Errors
    /// Returns [`ResolveErrorKind::MissingRegistration`] if the service isn't registered under `name` in the active container
    #[inline]
    pub fn resolve_named<S>(&self, name: impl InjectId) -> Result<Arc<S>, ResolveErrorKind>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.active().resolve_or_err(Some(name.inject_id()))
    }

    #[inline]
    #[must_use]
    pub fn resolve_optional<S>(&self) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.active().resolve(None)
    }

    #[inline]
    #[must_use]
    pub fn resolve_optional_named<S>(&self, name: impl InjectId) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.active().resolve(Some(name.inject_id()))
    }
}

impl Debug for ContainerRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerRegistry")
            .field("active", &self.active())
            .field("is_custom", &self.is_custom())
            .finish()
    }
}

/// Active container of the process-wide registry
#[inline]
#[must_use]
pub fn active_container() -> Container {
    ContainerRegistry::shared().active()
}

/// Switches the process-wide registry to `container`
#[inline]
pub fn use_custom_container(container: Container) {
    ContainerRegistry::shared().use_custom(container);
}

/// Switches the process-wide registry back to its default container
#[inline]
pub fn use_default_container() {
    ContainerRegistry::shared().use_default();
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::ContainerRegistry;
    use crate::{Container, ObjectScope, ResolveErrorKind};

    use alloc::{
        format,
        string::{String, ToString as _},
        sync::Arc,
    };
    use tracing_test::traced_test;

    enum Component {
        First,
    }

    impl crate::InjectId for Component {
        fn inject_id(&self) -> &str {
            match self {
                Component::First => "firstType",
            }
        }
    }

    #[test]
    #[traced_test]
    fn test_switch_and_reset() {
        let registry = ContainerRegistry::new();
        let default = registry.active();
        assert!(!registry.is_custom());

        let custom = Container::new();
        registry.use_custom(custom.clone());
        assert!(registry.is_custom());
        assert!(Container::ptr_eq(&registry.active(), &custom));
        assert!(logs_contain("Switched to custom container"));

        registry.use_default();
        registry.use_default();
        assert!(!registry.is_custom());
        assert!(Container::ptr_eq(&registry.active(), &default));
        assert!(Container::ptr_eq(&registry.default_container(), &default));
    }

    #[test]
    fn test_registrations_follow_active_container() {
        let registry = ContainerRegistry::new();
        let custom = Container::new();
        registry.use_custom(custom.clone());

        registry.register(|| Arc::new(1u8));
        registry.register_named(Component::First, || Arc::new(2u8));
        assert_eq!(custom.len(), 2);
        assert_eq!(*registry.resolve_named::<u8>("firstType").unwrap(), 2);

        registry.use_default();
        assert!(registry.default_container().is_empty());
        assert_eq!(
            registry.resolve::<u8>().unwrap_err(),
            ResolveErrorKind::missing::<u8>(None)
        );
        assert!(registry.resolve_optional_named::<u8>(Component::First).is_none());
    }

    #[test]
    fn test_register_in_scope() {
        let registry = ContainerRegistry::new();
        let entry = registry.register_in_scope(|| Arc::new(1u8), ObjectScope::Transient);

        assert_eq!(entry.object_scope(), Some(ObjectScope::Transient));
        assert_eq!(entry.name(), None);
        let first = registry.resolve_optional::<u8>().unwrap();
        let second = registry.resolve_optional::<u8>().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_register_named_in_scope() {
        let registry = ContainerRegistry::new();
        registry.register_named_in_scope(Component::First, || Arc::new(1u8), ObjectScope::Transient);
        let entry = registry.register_named_in_scope("fresh", || Arc::new(2u8), ObjectScope::Transient);

        assert_eq!(entry.name(), Some("fresh"));
        let first = registry.resolve_named::<u8>(Component::First).unwrap();
        let second = registry.resolve_named::<u8>("firstType").unwrap();
        assert_eq!(*first, 1);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*registry.resolve_named::<u8>("fresh").unwrap(), 2);
        assert!(registry.resolve_optional::<u8>().is_none());
    }

    #[test]
    fn test_clones_share_selection() {
        let registry = ContainerRegistry::new();
        let clone = registry.clone();

        clone.use_custom(Container::new());
        assert!(registry.is_custom());
        assert!(!ContainerRegistry::new().is_custom());
    }
}
