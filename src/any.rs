use alloc::{string::String, sync::Arc};
use core::{
    any::{type_name, Any, TypeId},
    cmp::Ordering,
};

pub(crate) type RcAny = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Type name without module paths and without a leading `dyn `.
    ///
    /// `dyn app::Greeter` becomes `Greeter`, `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
    #[must_use]
    pub fn short_name(&self) -> String {
        let name = self.name.strip_prefix("dyn ").unwrap_or(self.name);

        let mut short = String::with_capacity(name.len());
        let mut segment_start = 0;
        for (index, ch) in name.char_indices() {
            if ch.is_alphanumeric() || ch == '_' || ch == ':' {
                continue;
            }
            short.push_str(strip_path(&name[segment_start..index]));
            short.push(ch);
            segment_start = index + ch.len_utf8();
        }
        short.push_str(strip_path(&name[segment_start..]));
        short
    }
}

#[inline]
fn strip_path(segment: &str) -> &str {
    segment.rsplit_once("::").map_or(segment, |(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::TypeInfo;

    use alloc::{string::String, vec::Vec};

    mod nested {
        pub trait Greeter {}
        pub struct English;
    }

    #[test]
    fn test_equality_by_id() {
        let a = TypeInfo::of::<nested::English>();
        let b = TypeInfo { name: "other", ..a };

        assert_eq!(a, b);
        assert_ne!(a, TypeInfo::of::<u8>());
    }

    #[test]
    fn test_short_name() {
        assert_eq!(TypeInfo::of::<nested::English>().short_name(), "English");
        assert_eq!(TypeInfo::of::<dyn nested::Greeter>().short_name(), "Greeter");
        assert_eq!(TypeInfo::of::<Vec<String>>().short_name(), "Vec<String>");
        assert_eq!(TypeInfo::of::<u32>().short_name(), "u32");
    }
}
