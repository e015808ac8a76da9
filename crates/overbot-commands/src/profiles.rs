//! Linked game profiles, kept in memory.

use crate::error::CommandError;
use dashmap::DashMap;
use overbot_common::UserId;
use overbot_prompt::Platform;
use std::fmt;

/// A game profile linked to a Discord user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Where the account lives.
    pub platform: Platform,
    /// Account name on that platform.
    pub username: String,
}

impl Profile {
    /// Creates a profile.
    pub fn new(platform: Platform, username: impl Into<String>) -> Self {
        Self {
            platform,
            username: username.into(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.platform, self.username)
    }
}

/// Profiles per user, in link order.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profiles: DashMap<UserId, Vec<Profile>>,
}

impl ProfileStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The profiles of `user`.
    pub fn list(&self, user: UserId) -> Vec<Profile> {
        self.profiles
            .get(&user)
            .map(|profiles| profiles.value().clone())
            .unwrap_or_default()
    }

    /// The profiles of `user`, or an error when there are none.
    ///
    /// # Errors
    ///
    /// [`CommandError::ProfileNotLinked`] when the user has no profiles.
    pub fn require(&self, user: UserId) -> Result<Vec<Profile>, CommandError> {
        let profiles = self.list(user);
        if profiles.is_empty() {
            return Err(CommandError::ProfileNotLinked);
        }
        Ok(profiles)
    }

    /// Fails when `user` cannot link another profile.
    ///
    /// # Errors
    ///
    /// [`CommandError::ProfileLimitReached`] at `limit` profiles.
    pub fn ensure_room(&self, user: UserId, limit: usize) -> Result<(), CommandError> {
        let count = self.profiles.get(&user).map_or(0, |profiles| profiles.len());
        if count >= limit {
            return Err(CommandError::ProfileLimitReached(limit));
        }
        Ok(())
    }

    /// Links `profile` to `user`.
    ///
    /// # Errors
    ///
    /// [`CommandError::ProfileLimitReached`] at `limit` profiles.
    pub fn link(&self, user: UserId, profile: Profile, limit: usize) -> Result<(), CommandError> {
        let mut profiles = self.profiles.entry(user).or_default();
        if profiles.len() >= limit {
            return Err(CommandError::ProfileLimitReached(limit));
        }
        profiles.push(profile);
        Ok(())
    }

    /// Replaces the profile at `index`.
    ///
    /// # Errors
    ///
    /// [`CommandError::ProfileNotLinked`] when there is no such profile.
    pub fn replace(&self, user: UserId, index: usize, profile: Profile) -> Result<(), CommandError> {
        let mut profiles = self
            .profiles
            .get_mut(&user)
            .ok_or(CommandError::ProfileNotLinked)?;
        let slot = profiles
            .get_mut(index)
            .ok_or(CommandError::ProfileNotLinked)?;
        *slot = profile;
        Ok(())
    }

    /// Removes and returns the profile at `index`.
    ///
    /// # Errors
    ///
    /// [`CommandError::ProfileNotLinked`] when there is no such profile.
    pub fn unlink(&self, user: UserId, index: usize) -> Result<Profile, CommandError> {
        let removed = {
            let mut profiles = self
                .profiles
                .get_mut(&user)
                .ok_or(CommandError::ProfileNotLinked)?;
            if index >= profiles.len() {
                return Err(CommandError::ProfileNotLinked);
            }
            profiles.remove(index)
        };
        self.profiles.remove_if(&user, |_, profiles| profiles.is_empty());
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: UserId = UserId(7);

    #[test]
    fn test_link_respects_limit() {
        let store = ProfileStore::new();
        store.link(USER, Profile::new(Platform::Pc, "a#1"), 2).unwrap();
        store.link(USER, Profile::new(Platform::Psn, "b"), 2).unwrap();

        assert_eq!(
            store.link(USER, Profile::new(Platform::Xbl, "c"), 2),
            Err(CommandError::ProfileLimitReached(2))
        );
        assert_eq!(store.ensure_room(USER, 2), Err(CommandError::ProfileLimitReached(2)));
        assert_eq!(store.list(USER).len(), 2);
    }

    #[test]
    fn test_require_fails_without_profiles() {
        let store = ProfileStore::new();
        assert_eq!(store.require(USER), Err(CommandError::ProfileNotLinked));
    }

    #[test]
    fn test_replace_and_unlink() {
        let store = ProfileStore::new();
        store.link(USER, Profile::new(Platform::Pc, "a#1"), 5).unwrap();
        store.link(USER, Profile::new(Platform::Psn, "b"), 5).unwrap();

        store
            .replace(USER, 1, Profile::new(Platform::NintendoSwitch, "c"))
            .unwrap();
        assert_eq!(store.list(USER)[1], Profile::new(Platform::NintendoSwitch, "c"));

        assert_eq!(store.unlink(USER, 0), Ok(Profile::new(Platform::Pc, "a#1")));
        assert_eq!(store.unlink(USER, 5), Err(CommandError::ProfileNotLinked));
        assert_eq!(store.unlink(USER, 0).map(|p| p.username), Ok("c".to_string()));
        assert!(store.list(USER).is_empty());
        assert_eq!(
            store.replace(USER, 0, Profile::new(Platform::Pc, "x")),
            Err(CommandError::ProfileNotLinked)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Profile::new(Platform::Xbl, "Gamer").to_string(), "Xbox - Gamer");
    }
}
