//! Platform selection prompt.

use crate::marker::{Marker, MarkerSet};
use crate::prompt::{Prompt, PromptOptions};
use overbot_i18n::Messages;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// A platform Overwatch profiles live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Battle.net on PC.
    Pc,
    /// PlayStation Network.
    Psn,
    /// Xbox Live.
    Xbl,
    /// Nintendo Switch.
    NintendoSwitch,
}

impl Platform {
    /// Every platform, in prompt order.
    pub const ALL: [Self; 4] = [Self::Pc, Self::Psn, Self::Xbl, Self::NintendoSwitch];

    /// Canonical identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Psn => "psn",
            Self::Xbl => "xbl",
            Self::NintendoSwitch => "nintendo-switch",
        }
    }

    /// Name shown to users.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Psn => "Playstation",
            Self::Xbl => "Xbox",
            Self::NintendoSwitch => "Switch",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| format!("unknown platform: {s}"))
    }
}

/// The emoji shown for each platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformMarkers {
    /// PC.
    pub pc: Marker,
    /// PlayStation.
    pub psn: Marker,
    /// Xbox.
    pub xbl: Marker,
    /// Switch.
    pub nintendo_switch: Marker,
    /// Cancel.
    pub cancel: Marker,
}

impl Default for PlatformMarkers {
    fn default() -> Self {
        Self {
            pc: "<:battlenet:679469162724196387>".into(),
            psn: "<:psn:679468542541693128>".into(),
            xbl: "<:xbl:679469487623503930>".into(),
            nintendo_switch: "<:nsw:752653766377078817>".into(),
            cancel: "❌".into(),
        }
    }
}

impl PlatformMarkers {
    /// The marker for `platform`.
    pub const fn marker(&self, platform: Platform) -> &Marker {
        match platform {
            Platform::Pc => &self.pc,
            Platform::Psn => &self.psn,
            Platform::Xbl => &self.xbl,
            Platform::NintendoSwitch => &self.nintendo_switch,
        }
    }

    pub(crate) fn marker_set(&self) -> MarkerSet<Option<Platform>> {
        Platform::ALL
            .into_iter()
            .fold(MarkerSet::new(), |set, platform| {
                set.with(self.marker(platform).clone(), Some(platform))
            })
            .with_cancel(self.cancel.clone(), None)
    }
}

/// Asks the invoker which platform they play on.
///
/// Resolves to `Some(platform)`, or `None` when the cancel marker is
/// picked.
#[derive(Debug, Clone)]
pub struct LinkPrompt {
    options: PromptOptions,
    markers: MarkerSet<Option<Platform>>,
}

impl LinkPrompt {
    /// Creates the prompt with texts in `language`.
    pub fn new(markers: &PlatformMarkers, language: &str) -> Self {
        let options = PromptOptions::default()
            .with_title(Messages::get("prompt-platform-title", language))
            .with_footer(Messages::get("prompt-platform-footer", language));
        Self {
            options,
            markers: markers.marker_set(),
        }
    }

    /// Overrides the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = timeout;
        self
    }

    /// `"{marker} - {platform}"` for each platform.
    pub(crate) fn platform_lines(&self) -> Vec<String> {
        self.markers
            .selectable()
            .filter_map(|(marker, platform)| {
                platform.map(|platform| format!("{marker} - {}", platform.display_name()))
            })
            .collect()
    }
}

impl Default for LinkPrompt {
    fn default() -> Self {
        Self::new(&PlatformMarkers::default(), overbot_i18n::DEFAULT_LANGUAGE)
    }
}

impl Prompt for LinkPrompt {
    type Value = Option<Platform>;
    type Output = Option<Platform>;

    fn options(&self) -> &PromptOptions {
        &self.options
    }

    fn markers(&self) -> &MarkerSet<Self::Value> {
        &self.markers
    }

    fn body(&self) -> Vec<String> {
        self.platform_lines()
    }

    fn resolve(&self, marker: &Marker) -> Option<Self::Output> {
        self.markers.get(marker).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_identifiers() {
        let ids: Vec<_> = Platform::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(ids, vec!["pc", "psn", "xbl", "nintendo-switch"]);
        assert_eq!("nintendo-switch".parse::<Platform>(), Ok(Platform::NintendoSwitch));
        assert!("steam".parse::<Platform>().is_err());
    }

    #[test]
    fn test_marker_order_ends_with_cancel() {
        let prompt = LinkPrompt::default();
        let markers: Vec<_> = prompt.markers().markers().map(Marker::as_str).collect();
        assert_eq!(
            markers,
            vec![
                "<:battlenet:679469162724196387>",
                "<:psn:679468542541693128>",
                "<:xbl:679469487623503930>",
                "<:nsw:752653766377078817>",
                "❌",
            ]
        );
    }

    #[test]
    fn test_each_platform_marker_resolves_to_its_platform() {
        let markers = PlatformMarkers::default();
        let prompt = LinkPrompt::new(&markers, "en-US");
        for platform in Platform::ALL {
            assert_eq!(prompt.resolve(markers.marker(platform)), Some(Some(platform)));
        }
    }

    #[test]
    fn test_cancel_resolves_to_none() {
        let prompt = LinkPrompt::default();
        assert_eq!(prompt.resolve(&"❌".into()), Some(None));
        assert!(prompt.markers().is_cancel(&"❌".into()));
    }

    #[test]
    fn test_body_lists_platforms_only() {
        let prompt = LinkPrompt::default();
        assert_eq!(
            prompt.body(),
            vec![
                "<:battlenet:679469162724196387> - PC",
                "<:psn:679468542541693128> - Playstation",
                "<:xbl:679469487623503930> - Xbox",
                "<:nsw:752653766377078817> - Switch",
            ]
        );
    }

    #[test]
    fn test_texts_are_localized() {
        let prompt = LinkPrompt::new(&PlatformMarkers::default(), "it-IT");
        assert_eq!(prompt.options().title.as_deref(), Some("Piattaforma"));
        assert_eq!(
            prompt.options().footer.as_deref(),
            Some("Reagisci con la piattaforma su cui giochi...")
        );
    }
}
