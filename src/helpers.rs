//! Registration and resolution against the active container of the process-wide [`ContainerRegistry`].
//!
//! ```rust
//! use lazy_inject::{register_named, resolve_named, resolve_optional_named};
//! use std::sync::Arc;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> &'static str;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> &'static str {
//!         "hello"
//!     }
//! }
//!
//! register_named::<dyn Greeter, _>("english", || Arc::new(English));
//!
//! assert_eq!(resolve_named::<dyn Greeter>("english").unwrap().greet(), "hello");
//! assert!(resolve_optional_named::<dyn Greeter>("french").is_none());
//! ```

use alloc::sync::Arc;

use crate::{container::ServiceEntry, errors::ResolveErrorKind, name::InjectId, scope::ObjectScope, shared::ContainerRegistry};

/// Registers an unnamed service in the active container with the default [`ObjectScope`].
/// The factory isn't called until a matching resolution occurs, a previous registration is replaced.
#[inline]
pub fn register<S, F>(factory: F) -> ServiceEntry<S>
where
    S: ?Sized + Send + Sync + 'static,
    F: Fn() -> Arc<S> + Send + Sync + 'static,
{
    ContainerRegistry::shared().register(factory)
}

/// Registers a service under a raw name or a symbolic identifier in the active container
#[inline]
pub fn register_named<S, F>(name: impl InjectId, factory: F) -> ServiceEntry<S>
where
    S: ?Sized + Send + Sync + 'static,
    F: Fn() -> Arc<S> + Send + Sync + 'static,
{
    ContainerRegistry::shared().register_named(name, factory)
}

#[inline]
pub fn register_in_scope<S, F>(factory: F, scope: ObjectScope) -> ServiceEntry<S>
where
    S: ?Sized + Send + Sync + 'static,
    F: Fn() -> Arc<S> + Send + Sync + 'static,
{
    ContainerRegistry::shared().register_in_scope(factory, scope)
}

/// Same as [`register_named`], with an explicit [`ObjectScope`]
#[inline]
pub fn register_named_in_scope<S, F>(name: impl InjectId, factory: F, scope: ObjectScope) -> ServiceEntry<S>
where
    S: ?Sized + Send + Sync + 'static,
    F: Fn() -> Arc<S> + Send + Sync + 'static,
{
    ContainerRegistry::shared().register_named_in_scope(name, factory, scope)
}

/// # Errors
/// Returns [`ResolveErrorKind::MissingRegistration`] if the service isn't registered in the active container
#[inline]
pub fn resolve<S>() -> Result<Arc<S>, ResolveErrorKind>
where
    S: ?Sized + Send + Sync + 'static,
{
    ContainerRegistry::shared().resolve()
}

/// # Errors
/// Returns [`ResolveErrorKind::MissingRegistration`] if the service isn't registered under `name` in the active container
#[inline]
pub fn resolve_named<S>(name: impl InjectId) -> Result<Arc<S>, ResolveErrorKind>
where
    S: ?Sized + Send + Sync + 'static,
{
    ContainerRegistry::shared().resolve_named(name)
}

#[inline]
#[must_use]
pub fn resolve_optional<S>() -> Option<Arc<S>>
where
    S: ?Sized + Send + Sync + 'static,
{
    ContainerRegistry::shared().resolve_optional()
}

#[inline]
#[must_use]
pub fn resolve_optional_named<S>(name: impl InjectId) -> Option<Arc<S>>
where
    S: ?Sized + Send + Sync + 'static,
{
    ContainerRegistry::shared().resolve_optional_named(name)
}
