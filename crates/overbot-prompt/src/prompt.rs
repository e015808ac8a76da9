//! The prompt trait shared by every concrete prompt.

use crate::context::{AccentColor, Invoker, PromptContext};
use crate::error::PromptResult;
use crate::marker::{Marker, MarkerSet};
use crate::session::Session;
use crate::surface::{Surface, SurfaceField};
use async_trait::async_trait;
use std::time::Duration;

/// How long a prompt waits for a reaction unless told otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Static display options of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOptions {
    /// How long to wait for a reaction.
    pub timeout: Duration,
    /// Embed title.
    pub title: Option<String>,
    /// Embed image URL.
    pub image: Option<String>,
    /// Embed footer.
    pub footer: Option<String>,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            title: None,
            image: None,
            footer: None,
        }
    }
}

impl PromptOptions {
    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the image.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Sets the footer.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// A reaction prompt.
///
/// Implementors describe what to show and how markers map to results;
/// [`Prompt::start`] runs the shared session lifecycle.
#[async_trait]
pub trait Prompt: Send + Sync {
    /// What each marker in [`Prompt::markers`] maps to.
    type Value: Send + Sync;

    /// What [`Prompt::start`] returns on a selection.
    type Output: Send;

    /// Display options.
    fn options(&self) -> &PromptOptions;

    /// Markers the user may pick from, in display order.
    fn markers(&self) -> &MarkerSet<Self::Value>;

    /// Body lines shown above any fields.
    fn body(&self) -> Vec<String>;

    /// Extra embed fields.
    fn fields(&self) -> Vec<SurfaceField> {
        Vec::new()
    }

    /// Maps a selected marker to the caller-facing result.
    ///
    /// Only called with markers from [`Prompt::markers`].
    fn resolve(&self, marker: &Marker) -> Option<Self::Output>;

    /// Renders the prompt for `invoker`. Pure.
    fn render_surface(&self, invoker: &Invoker, accent: &dyn AccentColor) -> Surface {
        Surface::render(
            self.options(),
            invoker,
            accent.color_for(invoker.id),
            self.body(),
            self.fields(),
        )
    }

    /// Shows the prompt and waits for the invoker's choice.
    ///
    /// # Errors
    ///
    /// [`PromptError::CannotAttachMarkers`](crate::PromptError::CannotAttachMarkers)
    /// before anything is sent when reactions are not allowed,
    /// [`PromptError::NoSelection`](crate::PromptError::NoSelection) on
    /// timeout, and [`PromptError::Transport`](crate::PromptError::Transport)
    /// when the prompt cannot be sent.
    async fn start(&self, ctx: &PromptContext) -> PromptResult<Self::Output> {
        Session::new(self, ctx).start().await
    }
}
