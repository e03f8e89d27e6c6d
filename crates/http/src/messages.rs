//! Localized denial messages.
//!
//! The gate reports every denial with one generic message, looked up by a
//! fixed key so hosts can swap in their own translations.

use std::borrow::Cow;
use std::collections::HashMap;

/// Message key for the generic denial text.
pub const DENY_KEY: &str = "auth.deny";

const DEFAULT_DENY_MESSAGE: &str = "Permission denied";

/// Localized message lookup.
pub trait MessageSource: Send + Sync {
    fn get(&self, key: &str) -> Option<Cow<'_, str>>;

    /// The denial message, falling back to the built-in English text.
    fn denial_message(&self) -> Cow<'_, str> {
        self.get(DENY_KEY)
            .unwrap_or(Cow::Borrowed(DEFAULT_DENY_MESSAGE))
    }
}

/// Built-in English messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultMessages;

impl MessageSource for DefaultMessages {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        (key == DENY_KEY).then_some(Cow::Borrowed(DEFAULT_DENY_MESSAGE))
    }
}

/// Table-backed messages, for hosts that carry their own translations.
#[derive(Debug, Default, Clone)]
pub struct StaticMessages {
    entries: HashMap<String, String>,
}

impl StaticMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }
}

impl MessageSource for StaticMessages {
    fn get(&self, key: &str) -> Option<Cow<'_, str>> {
        self.entries.get(key).map(|text| Cow::Borrowed(text.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messages_resolve_the_deny_key() {
        assert_eq!(DefaultMessages.denial_message(), "Permission denied");
        assert!(DefaultMessages.get("auth.other").is_none());
    }

    #[test]
    fn static_messages_override_the_fallback() {
        let messages = StaticMessages::new().insert(DENY_KEY, "Zugriff verweigert");
        assert_eq!(messages.denial_message(), "Zugriff verweigert");
    }

    #[test]
    fn static_messages_fall_back_when_key_is_absent() {
        let messages = StaticMessages::new().insert("auth.other", "unrelated");
        assert_eq!(messages.denial_message(), "Permission denied");
    }
}
