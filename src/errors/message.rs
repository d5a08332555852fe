use alloc::{borrow::Cow, string::String};

use super::DescribedError;

/// Adapter that lets a plain text message be used as an error.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Message {
    #[inline]
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for Message {
    #[inline]
    fn from(message: &str) -> Self {
        Self(String::from(message))
    }
}

impl DescribedError for Message {
    #[inline]
    fn error_description(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Message;
    use crate::DescribedError as _;

    use alloc::{boxed::Box, string::ToString as _};
    use core::error::Error;

    #[test]
    fn test_message_is_an_error() {
        let err: Box<dyn Error + Send + Sync> = Box::new(Message::from("database is unreachable"));

        assert_eq!(err.to_string(), "database is unreachable");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_description_is_the_message() {
        let message = Message::new("database is unreachable");

        assert_eq!(message.error_description(), message.as_str());
    }
}
