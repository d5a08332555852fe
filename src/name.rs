use alloc::{boxed::Box, string::String};

/// A registration name source.
///
/// Symbolic identifiers (usually unit-only enums, see `#[derive(InjectId)]`) project to a stable label,
/// and a raw string is its own label, so anywhere a name is taken either can be passed.
///
/// ```rust
/// use lazy_inject::InjectId;
///
/// enum Storage {
///     Primary,
///     Replica,
/// }
///
/// impl InjectId for Storage {
///     fn inject_id(&self) -> &str {
///         match self {
///             Storage::Primary => "primary",
///             Storage::Replica => "replica",
///         }
///     }
/// }
///
/// assert_eq!(Storage::Replica.inject_id(), "replica");
/// assert_eq!("primary".inject_id(), Storage::Primary.inject_id());
/// ```
#[cfg_attr(
    feature = "macros",
    doc = r#"
# Deriving

```rust
use lazy_inject::InjectId;

#[derive(InjectId)]
enum Storage {
    Primary,
    #[inject_id(rename = "replica")]
    Replica,
}

assert_eq!(Storage::Primary.inject_id(), "Primary");
assert_eq!(Storage::Replica.inject_id(), "replica");
```

Only enums with unit variants can derive it:

```compile_fail
#[derive(lazy_inject::InjectId)]
struct Storage;
```

```compile_fail
#[derive(lazy_inject::InjectId)]
enum Storage {
    Primary(u8),
}
```

```compile_fail
#[derive(lazy_inject::InjectId)]
enum Storage {
    Primary { shard: u8 },
}
```

A variant takes one `rename`:

```compile_fail
#[derive(lazy_inject::InjectId)]
enum Storage {
    #[inject_id(rename = "primary", rename = "main")]
    Primary,
}
```

```compile_fail
#[derive(lazy_inject::InjectId)]
enum Storage {
    #[inject_id(rename = "primary")]
    #[inject_id(rename = "main")]
    Primary,
}
```

```compile_fail
#[derive(lazy_inject::InjectId)]
enum Storage {
    #[inject_id(label = "primary")]
    Primary,
}
```
"#
)]
pub trait InjectId {
    #[must_use]
    fn inject_id(&self) -> &str;
}

impl InjectId for str {
    #[inline]
    fn inject_id(&self) -> &str {
        self
    }
}

impl InjectId for String {
    #[inline]
    fn inject_id(&self) -> &str {
        self.as_str()
    }
}

impl<T: InjectId + ?Sized> InjectId for &T {
    #[inline]
    fn inject_id(&self) -> &str {
        (**self).inject_id()
    }
}

impl<T: InjectId + ?Sized> InjectId for Box<T> {
    #[inline]
    fn inject_id(&self) -> &str {
        (**self).inject_id()
    }
}

#[inline]
#[must_use]
pub(crate) fn owned_name(name: &(impl InjectId + ?Sized)) -> String {
    String::from(name.inject_id())
}

#[cfg(test)]
mod tests {
    use super::{owned_name, InjectId};

    use alloc::{boxed::Box, string::String};

    #[derive(Clone, Copy)]
    enum Component {
        First,
        Second,
    }

    impl InjectId for Component {
        fn inject_id(&self) -> &str {
            match self {
                Component::First => "firstType",
                Component::Second => "secondType",
            }
        }
    }

    #[test]
    fn test_raw_strings_project_to_themselves() {
        assert_eq!("testD".inject_id(), "testD");
        assert_eq!(String::from("testE").inject_id(), "testE");
        assert_eq!(owned_name("testF"), "testF");
    }

    #[test]
    fn test_identifier_projection() {
        assert_eq!(Component::First.inject_id(), "firstType");
        assert_eq!((&Component::Second).inject_id(), "secondType");

        let boxed: Box<dyn InjectId> = Box::new(Component::Second);
        assert_eq!(owned_name(&boxed), "secondType");
    }
}
