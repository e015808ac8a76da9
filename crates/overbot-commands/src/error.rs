//! Command errors and how they are reported to users.

use overbot_i18n::Messages;
use overbot_prompt::PromptError;

/// Errors raised by command logic that the user should see.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The user has no linked profiles.
    #[error("No profile linked")]
    ProfileNotLinked,

    /// The user already has the maximum number of profiles.
    #[error("Profile limit of {0} reached")]
    ProfileLimitReached(usize),

    /// An owner-only command was run by someone else.
    #[error("Command restricted to the bot owner")]
    NotOwner,
}

impl CommandError {
    /// The localized text shown to the user.
    pub fn user_message(&self, language: &str) -> String {
        match self {
            Self::ProfileNotLinked => Messages::get("error-profile-not-linked", language),
            Self::ProfileLimitReached(limit) => Messages::get_with_args(
                "error-profile-limit",
                language,
                &[("limit", limit.to_string().as_str())],
            ),
            Self::NotOwner => Messages::get("error-not-owner", language),
        }
    }
}

/// What to do with an error returned by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorResponse {
    /// Nothing is said; the prompt already disappeared.
    Silent,
    /// An expected condition, shown to the user as is.
    Notice(String),
    /// An unexpected failure; logged, and a generic text shown.
    Internal(String),
}

/// Decides how an error returned by a command is reported.
pub fn classify(error: &(dyn std::error::Error + 'static), language: &str) -> ErrorResponse {
    if let Some(error) = error.downcast_ref::<PromptError>() {
        return match error {
            PromptError::NoSelection => ErrorResponse::Silent,
            PromptError::CannotAttachMarkers => {
                ErrorResponse::Notice(Messages::get("error-cannot-add-reactions", language))
            }
            PromptError::Transport(_) => {
                ErrorResponse::Internal(Messages::get("error-generic", language))
            }
        };
    }
    if let Some(error) = error.downcast_ref::<CommandError>() {
        return ErrorResponse::Notice(error.user_message(language));
    }
    ErrorResponse::Internal(Messages::get("error-generic", language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use overbot_prompt::TransportError;

    fn boxed(error: impl std::error::Error + Send + Sync + 'static) -> crate::Error {
        Box::new(error)
    }

    #[test]
    fn test_no_selection_is_silent() {
        let error = boxed(PromptError::NoSelection);
        assert_eq!(classify(error.as_ref(), "en-US"), ErrorResponse::Silent);
    }

    #[test]
    fn test_missing_reaction_permission_is_explained() {
        let error = boxed(PromptError::CannotAttachMarkers);
        let ErrorResponse::Notice(text) = classify(error.as_ref(), "en-US") else {
            panic!("expected a notice");
        };
        assert!(text.contains("Add Reactions"));
    }

    #[test]
    fn test_transport_failure_is_internal() {
        let error = boxed(PromptError::from(TransportError::Other("boom".into())));
        assert!(matches!(
            classify(error.as_ref(), "en-US"),
            ErrorResponse::Internal(_)
        ));
    }

    #[test]
    fn test_profile_limit_mentions_limit() {
        let error = boxed(CommandError::ProfileLimitReached(5));
        assert_eq!(
            classify(error.as_ref(), "en-US"),
            ErrorResponse::Notice("Maximum limit of 5 profiles reached.".into())
        );
    }

    #[test]
    fn test_unknown_errors_are_internal() {
        let error = boxed(std::io::Error::other("disk"));
        assert_eq!(
            classify(error.as_ref(), "en-US"),
            ErrorResponse::Internal(Messages::get("error-generic", "en-US"))
        );
    }
}
