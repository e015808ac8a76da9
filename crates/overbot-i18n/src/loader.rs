//! Fluent bundle loading with lazy static initialization.

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use once_cell::sync::Lazy;
use overbot_common::{OverBotError, Result};
use std::collections::HashMap;
use tracing::error;
use unic_langid::LanguageIdentifier;

/// A thread-safe Fluent bundle.
pub type Bundle = FluentBundle<FluentResource>;

/// Language used when the requested one has no translation.
pub const DEFAULT_LANGUAGE: &str = "en-US";

const RESOURCES: &[(&str, &str)] = &[
    ("en-US", include_str!("../locales/en-US/main.ftl")),
    ("it-IT", include_str!("../locales/it-IT/main.ftl")),
];

/// Every embedded bundle, keyed by language code.
pub static FLUENT_BUNDLES: Lazy<HashMap<&'static str, Bundle>> = Lazy::new(|| {
    let mut bundles = HashMap::new();
    for (language, source) in RESOURCES {
        match FluentLoader::build_bundle(language, source) {
            Ok(bundle) => {
                bundles.insert(*language, bundle);
            }
            Err(e) => error!(language, "Failed to load translations: {}", e),
        }
    }
    bundles
});

/// Fluent bundle loader.
pub struct FluentLoader;

impl FluentLoader {
    /// Parses `source` into a bundle for `language`.
    pub fn build_bundle(language: &str, source: &str) -> Result<Bundle> {
        let langid: LanguageIdentifier = language
            .parse()
            .map_err(|e| OverBotError::Localization(format!("{language}: {e}")))?;

        let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
            OverBotError::Localization(format!(
                "{language}: {} syntax error(s), first: {:?}",
                errors.len(),
                errors.first()
            ))
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // Discord renders the bidi isolation marks literally.
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            OverBotError::Localization(format!(
                "{language}: {} duplicate message(s)",
                errors.len()
            ))
        })?;

        Ok(bundle)
    }

    /// Gets the bundle for `language`, if one is embedded.
    pub fn bundle(language: &str) -> Option<&'static Bundle> {
        FLUENT_BUNDLES.get(language)
    }

    /// Lists the embedded languages.
    pub fn languages() -> Vec<&'static str> {
        let mut languages: Vec<_> = FLUENT_BUNDLES.keys().copied().collect();
        languages.sort_unstable();
        languages
    }
}
