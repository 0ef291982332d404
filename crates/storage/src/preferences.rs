//! Session preferences stored on the device
//!
//! All keys live in a single `UserInfo` namespace. Values are plain strings,
//! overwritten in place. Every operation takes the namespace lock, which is
//! shared by every handle opened on the same [`KvStore`], so a `save` can
//! never interleave with a `clear`.

use crate::kv::{KvStore, Namespace, Result};
use std::fmt;

/// Name of the namespace that holds the session keys
pub const USER_INFO_NAMESPACE: &str = "UserInfo";

/// Keys that may be stored in the preference namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefKey {
    /// Customer id
    Id,
    /// Display name
    Name,
    /// Email address
    Email,
    /// Phone number
    Phone,
    /// Preferred currency code
    Currency,
    /// `"true"` while a user is logged in
    IsLoggedIn,
    /// Draft order id backing the favorites list
    FavListId,
    /// Draft order id backing the cart
    CartListId,
    /// Human-readable language name
    Language,
    /// Language code, e.g. `en`
    LanguageCode,
    /// `"true"` once onboarding has been shown
    OnboardingShown,
}

impl PrefKey {
    /// Every supported key
    pub const ALL: [PrefKey; 11] = [
        PrefKey::Id,
        PrefKey::Name,
        PrefKey::Email,
        PrefKey::Phone,
        PrefKey::Currency,
        PrefKey::IsLoggedIn,
        PrefKey::FavListId,
        PrefKey::CartListId,
        PrefKey::Language,
        PrefKey::LanguageCode,
        PrefKey::OnboardingShown,
    ];

    /// Stored key name
    pub fn as_str(&self) -> &'static str {
        match self {
            PrefKey::Id => "ID",
            PrefKey::Name => "NAME",
            PrefKey::Email => "EMAIL",
            PrefKey::Phone => "PHONE",
            PrefKey::Currency => "CURRENCY",
            PrefKey::IsLoggedIn => "IS_LOGGED_IN",
            PrefKey::FavListId => "FavListID",
            PrefKey::CartListId => "CartListID",
            PrefKey::Language => "Language",
            PrefKey::LanguageCode => "LanguageCode",
            PrefKey::OnboardingShown => "ONBOARDING_SHOWN",
        }
    }

    /// Look up a key by its stored name
    pub fn from_name(name: &str) -> Option<PrefKey> {
        PrefKey::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synchronous string preference store over the `UserInfo` namespace
///
/// Cloning is cheap. Every store opened on the same [`KvStore`] shares the
/// namespace and its lock.
#[derive(Clone)]
pub struct PreferenceStore {
    namespace: Namespace,
}

impl PreferenceStore {
    /// Open the preference namespace inside a key-value store
    pub fn open(kv: &KvStore) -> Result<Self> {
        Ok(Self {
            namespace: kv.namespace(USER_INFO_NAMESPACE)?,
        })
    }

    /// Store a value, flushing it to disk before returning
    pub fn save(&self, key: PrefKey, value: &str) -> Result<()> {
        let _guard = self.namespace.lock();
        self.namespace.set(key.as_str(), &value)?;
        self.namespace.flush()?;
        tracing::trace!(key = %key, "saved preference");
        Ok(())
    }

    /// Remove `remove` and store `values` in one atomic write
    ///
    /// Readers see either the old keys or the new ones, never a mix.
    pub fn replace(&self, remove: &[PrefKey], values: &[(PrefKey, &str)]) -> Result<()> {
        let set: Vec<(&str, &str)> = values
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();
        let remove: Vec<&str> = remove.iter().map(PrefKey::as_str).collect();

        let _guard = self.namespace.lock();
        self.namespace.apply(&set, &remove)?;
        self.namespace.flush()?;
        tracing::trace!(
            saved = set.len(),
            removed = remove.len(),
            "replaced preferences"
        );
        Ok(())
    }

    /// Read a value, falling back to `default` when it is absent or unreadable
    pub fn retrieve(&self, key: PrefKey, default: &str) -> String {
        let _guard = self.namespace.lock();
        match self.namespace.get::<String>(key.as_str()) {
            Ok(Some(value)) => value,
            Ok(None) => default.to_string(),
            Err(err) => {
                tracing::warn!(
                    key = %key,
                    error = %err,
                    "failed to read preference, using default"
                );
                default.to_string()
            }
        }
    }

    /// Check whether a key currently has a value
    pub fn contains(&self, key: PrefKey) -> bool {
        let _guard = self.namespace.lock();
        self.namespace.contains(key.as_str()).unwrap_or(false)
    }

    /// Remove every key in the namespace
    pub fn clear(&self) -> Result<()> {
        let _guard = self.namespace.lock();
        self.namespace.clear()?;
        self.namespace.flush()?;
        tracing::debug!(namespace = USER_INFO_NAMESPACE, "cleared preferences");
        Ok(())
    }

    /// All stored key/value pairs, in the order of [`PrefKey::ALL`]
    pub fn snapshot(&self) -> Vec<(PrefKey, String)> {
        let _guard = self.namespace.lock();
        PrefKey::ALL
            .into_iter()
            .filter_map(|key| match self.namespace.get::<String>(key.as_str()) {
                Ok(Some(value)) => Some((key, value)),
                _ => None,
            })
            .collect()
    }
}
