//! The rendered form of a prompt, independent of Discord's builders.

use crate::context::Invoker;
use crate::prompt::PromptOptions;

/// Discord's limit on embed title length, in characters.
pub const MAX_TITLE_LEN: usize = 256;

/// Embed author header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceAuthor {
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub icon_url: Option<String>,
}

/// An embed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceField {
    /// Field label.
    pub name: String,
    /// Field value.
    pub value: String,
    /// Whether the field shares a row with its neighbours.
    pub inline: bool,
}

impl SurfaceField {
    /// Creates an inline field.
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: true,
        }
    }
}

/// Everything needed to display a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    /// Accent colour.
    pub color: u32,
    /// Author header.
    pub author: SurfaceAuthor,
    /// Title, when it fits.
    pub title: Option<String>,
    /// Body text.
    pub description: String,
    /// Image URL.
    pub image: Option<String>,
    /// Footer text.
    pub footer: Option<String>,
    /// Extra fields, in order.
    pub fields: Vec<SurfaceField>,
}

impl Surface {
    /// Builds a surface from the prompt options and body lines.
    ///
    /// A title longer than [`MAX_TITLE_LEN`] characters is moved to the
    /// first line of the body instead of being truncated.
    pub fn render(
        options: &PromptOptions,
        invoker: &Invoker,
        color: u32,
        mut lines: Vec<String>,
        fields: Vec<SurfaceField>,
    ) -> Self {
        let title = match &options.title {
            Some(title) if title.is_empty() => None,
            Some(title) if title.chars().count() <= MAX_TITLE_LEN => Some(title.clone()),
            Some(title) => {
                lines.insert(0, title.clone());
                None
            }
            None => None,
        };

        Self {
            color,
            author: SurfaceAuthor {
                name: invoker.name.clone(),
                icon_url: invoker.avatar_url.clone(),
            },
            title,
            description: lines.join("\n"),
            image: options.image.clone(),
            footer: options.footer.clone(),
            fields,
        }
    }
}
