//! Message lookup with language fallback.

use crate::loader::{FluentLoader, DEFAULT_LANGUAGE};
use fluent_bundle::FluentArgs;
use tracing::{debug, warn};

/// Message accessor for translated strings.
pub struct Messages;

impl Messages {
    /// Gets a localized message.
    pub fn get(key: &str, language: &str) -> String {
        Self::get_with_args(key, language, &[])
    }

    /// Gets a localized message with `$name` placeables filled from `args`.
    pub fn get_with_args(key: &str, language: &str, args: &[(&str, &str)]) -> String {
        if let Some(text) = Self::format(key, language, args) {
            return text;
        }
        if language != DEFAULT_LANGUAGE {
            if let Some(text) = Self::format(key, DEFAULT_LANGUAGE, args) {
                debug!(key, language, "Falling back to default language");
                return text;
            }
        }
        warn!(key, language, "Missing translation");
        key.to_string()
    }

    fn format(key: &str, language: &str, args: &[(&str, &str)]) -> Option<String> {
        let bundle = FluentLoader::bundle(language)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }

        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, Some(&fluent_args), &mut errors);
        if !errors.is_empty() {
            debug!(key, language, ?errors, "Formatting errors");
        }
        Some(text.into_owned())
    }
}
