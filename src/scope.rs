/// How an instance provided by a [`crate::Container`] is shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectScope {
    /// A single instance is created on the first resolution and reused for the lifetime of the container.
    #[default]
    Container,
    /// A new instance is created on every resolution.
    Transient,
}

impl ObjectScope {
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ObjectScope::Container => "container",
            ObjectScope::Transient => "transient",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_cached(&self) -> bool {
        matches!(self, ObjectScope::Container)
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectScope;

    #[test]
    fn test_default_is_widest() {
        assert_eq!(ObjectScope::default(), ObjectScope::Container);
        assert!(ObjectScope::default().is_cached());
        assert!(!ObjectScope::Transient.is_cached());
    }
}
