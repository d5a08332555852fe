use alloc::{collections::BTreeMap, string::String, sync::Arc};
use core::cmp::Ordering;

use crate::{any::RcAny, any::TypeInfo, scope::ObjectScope};

/// Type-erased factory. Produces a boxed `Arc<S>` for the service type it was registered for.
pub(crate) type BoxedFactory = Arc<dyn Fn() -> RcAny + Send + Sync>;

#[must_use]
pub(crate) fn boxed_factory<S, F>(factory: F) -> BoxedFactory
where
    S: ?Sized + Send + Sync + 'static,
    F: Fn() -> Arc<S> + Send + Sync + 'static,
{
    Arc::new(move || Arc::new(factory()) as RcAny)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceKey {
    pub(crate) type_info: TypeInfo,
    pub(crate) name: Option<String>,
}

impl ServiceKey {
    #[inline]
    #[must_use]
    pub(crate) fn of<S: ?Sized + 'static>(name: Option<&str>) -> Self {
        Self {
            type_info: TypeInfo::of::<S>(),
            name: name.map(String::from),
        }
    }
}

impl PartialOrd for ServiceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ServiceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_info.cmp(&other.type_info).then_with(|| self.name.cmp(&other.name))
    }
}

#[derive(Clone)]
pub(crate) struct ServiceData {
    pub(crate) factory: BoxedFactory,
    pub(crate) scope: ObjectScope,
    pub(crate) instance: Option<RcAny>,
}

/// Bindings of a single store. At most one factory per [`ServiceKey`], later bindings replace earlier ones.
#[derive(Default, Clone)]
pub(crate) struct Registry {
    services: BTreeMap<ServiceKey, ServiceData>,
}

impl Registry {
    /// Binds `key`, returning the replaced binding if there was one.
    #[inline]
    pub(crate) fn insert(&mut self, key: ServiceKey, factory: BoxedFactory, scope: ObjectScope) -> Option<ServiceData> {
        self.services.insert(
            key,
            ServiceData {
                factory,
                scope,
                instance: None,
            },
        )
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, key: &ServiceKey) -> Option<&ServiceData> {
        self.services.get(key)
    }

    #[inline]
    #[must_use]
    pub(crate) fn get_mut(&mut self, key: &ServiceKey) -> Option<&mut ServiceData> {
        self.services.get_mut(key)
    }

    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, key: &ServiceKey) -> bool {
        self.services.contains_key(key)
    }

    #[inline]
    pub(crate) fn remove(&mut self, key: &ServiceKey) -> Option<ServiceData> {
        self.services.remove(key)
    }

    /// Changes the scope of a binding and drops its cached instance.
    pub(crate) fn set_scope(&mut self, key: &ServiceKey, scope: ObjectScope) -> bool {
        match self.services.get_mut(key) {
            Some(data) => {
                data.scope = scope;
                data.instance = None;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.services.clear();
    }

    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.services.len()
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
