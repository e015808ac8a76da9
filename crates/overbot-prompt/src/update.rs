//! Platform selection that shows the profile about to be replaced.

use crate::link::{LinkPrompt, Platform, PlatformMarkers};
use crate::marker::{Marker, MarkerSet};
use crate::prompt::{Prompt, PromptOptions};
use crate::surface::SurfaceField;
use overbot_common::truncate_string;
use overbot_i18n::Messages;
use std::time::Duration;

/// Discord's limit on embed field values, in characters.
const MAX_FIELD_LEN: usize = 1024;

/// A [`LinkPrompt`] that also displays the pending profile.
#[derive(Debug, Clone)]
pub struct UpdatePrompt {
    link: LinkPrompt,
    platform: Platform,
    username: String,
    heading: String,
    platform_label: String,
    username_label: String,
}

impl UpdatePrompt {
    /// Creates the prompt for the profile `platform`/`username`.
    pub fn new(
        platform: Platform,
        username: impl Into<String>,
        markers: &PlatformMarkers,
        language: &str,
    ) -> Self {
        Self {
            link: LinkPrompt::new(markers, language),
            platform,
            username: username.into(),
            heading: Messages::get("prompt-profile-to-update", language),
            platform_label: Messages::get("prompt-field-platform", language),
            username_label: Messages::get("prompt-field-username", language),
        }
    }

    /// Overrides the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.link = self.link.with_timeout(timeout);
        self
    }
}

impl Prompt for UpdatePrompt {
    type Value = Option<Platform>;
    type Output = Option<Platform>;

    fn options(&self) -> &PromptOptions {
        self.link.options()
    }

    fn markers(&self) -> &MarkerSet<Self::Value> {
        self.link.markers()
    }

    fn body(&self) -> Vec<String> {
        let mut lines = self.link.platform_lines();
        lines.push(String::new());
        lines.push(self.heading.clone());
        lines
    }

    fn fields(&self) -> Vec<SurfaceField> {
        vec![
            SurfaceField::inline(&self.platform_label, self.platform.display_name()),
            SurfaceField::inline(
                &self.username_label,
                truncate_string(&self.username, MAX_FIELD_LEN),
            ),
        ]
    }

    fn resolve(&self, marker: &Marker) -> Option<Self::Output> {
        self.link.resolve(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{FixedAccent, Invoker};
    use overbot_common::UserId;

    fn prompt() -> UpdatePrompt {
        UpdatePrompt::new(Platform::Psn, "Player-1234", &PlatformMarkers::default(), "en-US")
    }

    #[test]
    fn test_shares_link_markers_and_resolution() {
        let update = prompt();
        let link = LinkPrompt::default();
        assert!(update.markers().markers().eq(link.markers().markers()));

        let markers = PlatformMarkers::default();
        assert_eq!(update.resolve(&markers.xbl), Some(Some(Platform::Xbl)));
        assert_eq!(update.resolve(&markers.cancel), Some(None));
    }

    #[test]
    fn test_surface_shows_pending_profile_after_platform_list() {
        let invoker = Invoker::new(UserId(1), "tester", None);
        let surface = prompt().render_surface(&invoker, &FixedAccent(0));

        assert!(surface
            .description
            .ends_with("<:nsw:752653766377078817> - Switch\n\nProfile to update:"));
        assert_eq!(
            surface.fields,
            vec![
                SurfaceField::inline("Platform", "Playstation"),
                SurfaceField::inline("Username", "Player-1234"),
            ]
        );
        assert_eq!(surface.title.as_deref(), Some("Platform"));
    }
}
