#![no_std]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod container;
pub(crate) mod errors;
pub(crate) mod inject;
pub(crate) mod name;
pub(crate) mod registry;
pub(crate) mod scope;
pub(crate) mod shared;

pub mod helpers;

pub use any::TypeInfo;
pub use container::{Container, ServiceEntry};
pub use errors::{DescribedError, Message, ResolveErrorKind};
pub use helpers::{
    register, register_in_scope, register_named, register_named_in_scope, resolve, resolve_named, resolve_optional,
    resolve_optional_named,
};
pub use inject::{Inject, SafeInject};
pub use name::InjectId;
pub use scope::ObjectScope;
pub use shared::{active_container, use_custom_container, use_default_container, ContainerRegistry};

#[cfg(feature = "macros")]
pub use lazy_inject_macros::InjectId;

/// Creates an `Arc<dyn Trait>` from a value, optionally including supertraits.
///
/// # Syntax
/// ```text
/// shared!(value; Trait [+ SuperTrait1 [+ SuperTrait2 ...]])
/// ```
///
/// # Examples
/// ```rust
/// use lazy_inject::{shared, Container};
/// use std::sync::Arc;
///
/// trait UserRepo: Send + Sync {}
///
/// struct PostgresUserRepo;
///
/// impl UserRepo for PostgresUserRepo {}
///
/// let container = Container::new();
/// container.register(None, || shared!(PostgresUserRepo; UserRepo));
///
/// let repo: Arc<dyn UserRepo> = container.resolve(None).unwrap();
/// ```
#[macro_export]
macro_rules! shared {
    ($val:expr ; $service:tt $($super_traits:tt)*) => {{
        $crate::__private::Arc::new($val) as $crate::__private::Arc<dyn $service $($super_traits)*>
    }};
}

#[doc(hidden)]
pub mod __private {
    pub use alloc::sync::Arc;
}
