use alloc::{borrow::Cow, string::String};
use core::fmt::{self, Display, Formatter};

use super::DescribedError;
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveErrorKind {
    /// No binding exists for the requested type and name in the store.
    MissingRegistration {
        service_type_name: String,
        attempted_name: Option<String>,
    },
}

impl ResolveErrorKind {
    #[inline]
    #[must_use]
    pub fn missing<Dep: ?Sized + 'static>(attempted_name: Option<&str>) -> Self {
        Self::missing_with_type_info(&TypeInfo::of::<Dep>(), attempted_name)
    }

    #[must_use]
    pub(crate) fn missing_with_type_info(type_info: &TypeInfo, attempted_name: Option<&str>) -> Self {
        Self::MissingRegistration {
            service_type_name: type_info.short_name(),
            attempted_name: attempted_name.map(String::from),
        }
    }

    #[inline]
    #[must_use]
    pub fn service_type_name(&self) -> &str {
        match self {
            Self::MissingRegistration { service_type_name, .. } => service_type_name,
        }
    }

    #[inline]
    #[must_use]
    pub fn attempted_name(&self) -> Option<&str> {
        match self {
            Self::MissingRegistration { attempted_name, .. } => attempted_name.as_deref(),
        }
    }

    /// The attempted registration name, `"none"` for unnamed registrations.
    #[inline]
    #[must_use]
    pub fn attempted_name_or_none(&self) -> &str {
        self.attempted_name().unwrap_or("none")
    }
}

impl Display for ResolveErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRegistration {
                service_type_name,
                attempted_name,
            } => {
                write!(f, "Please make sure you register {service_type_name} with its component")?;
                match attempted_name {
                    Some(name) => write!(f, " and name: {name}."),
                    None => write!(f, "."),
                }
            }
        }
    }
}

impl DescribedError for ResolveErrorKind {
    fn error_description(&self) -> Cow<'_, str> {
        Cow::Owned(alloc::format!("{self}"))
    }
}
