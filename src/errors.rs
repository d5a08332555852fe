mod message;
mod resolve;

pub use message::Message;
pub use resolve::ResolveErrorKind;

use alloc::{borrow::Cow, string::String};

/// Anything that can describe itself as a human-readable failure reason.
///
/// A plain string satisfies it directly, its description is the string itself.
pub trait DescribedError {
    #[must_use]
    fn error_description(&self) -> Cow<'_, str>;
}

impl DescribedError for str {
    #[inline]
    fn error_description(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl DescribedError for String {
    #[inline]
    fn error_description(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: DescribedError + ?Sized> DescribedError for &T {
    #[inline]
    fn error_description(&self) -> Cow<'_, str> {
        (**self).error_description()
    }
}
