//! Logged-in session kept in the device preferences
//!
//! There is at most one session per device. Starting a session replaces the
//! previous one in a single write; ending it clears the whole preference
//! namespace. Device settings (language, onboarding) survive a new login.

use commerce_client::models::Customer;
use std::collections::HashMap;
use storage::kv::Result;
use storage::{PrefKey, PreferenceStore};

const TRUE: &str = "true";

/// Keys owned by the logged-in user
const SESSION_KEYS: [PrefKey; 8] = [
    PrefKey::Id,
    PrefKey::Name,
    PrefKey::Email,
    PrefKey::Phone,
    PrefKey::Currency,
    PrefKey::IsLoggedIn,
    PrefKey::FavListId,
    PrefKey::CartListId,
];

/// Snapshot of the active session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Customer id
    pub customer_id: u64,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Preferred currency code
    pub currency: String,
    /// Draft order backing the favorites list
    pub fav_list_id: Option<u64>,
    /// Draft order backing the cart
    pub cart_list_id: Option<u64>,
}

/// Session operations over the preference store
#[derive(Clone)]
pub struct SessionStore {
    prefs: PreferenceStore,
}

impl SessionStore {
    /// Wrap a preference store
    pub fn new(prefs: PreferenceStore) -> Self {
        Self { prefs }
    }

    /// Underlying preference store
    pub fn preferences(&self) -> &PreferenceStore {
        &self.prefs
    }

    /// Record `customer` as the logged-in user
    ///
    /// Every key of the previous session is replaced, including its list ids.
    pub fn begin(&self, customer: &Customer) -> Result<()> {
        let id = customer.id.to_string();
        let name = customer.display_name();
        let values = [
            (PrefKey::Id, id.as_str()),
            (PrefKey::Name, name.as_str()),
            (PrefKey::Email, customer.email.as_deref().unwrap_or_default()),
            (PrefKey::Phone, customer.phone.as_deref().unwrap_or_default()),
            (PrefKey::Currency, customer.currency.as_deref().unwrap_or_default()),
            (PrefKey::IsLoggedIn, TRUE),
        ];
        let stale: Vec<PrefKey> = SESSION_KEYS
            .into_iter()
            .filter(|key| values.iter().all(|(set, _)| set != key))
            .collect();

        self.prefs.replace(&stale, &values)?;
        tracing::info!(customer_id = customer.id, "session started");
        Ok(())
    }

    /// Remember the draft orders backing the favorites list and the cart
    pub fn set_lists(&self, fav_list_id: u64, cart_list_id: u64) -> Result<()> {
        let fav = fav_list_id.to_string();
        let cart = cart_list_id.to_string();
        self.prefs.replace(
            &[],
            &[
                (PrefKey::FavListId, fav.as_str()),
                (PrefKey::CartListId, cart.as_str()),
            ],
        )
    }

    /// Check if a user is logged in
    pub fn is_logged_in(&self) -> bool {
        self.prefs.retrieve(PrefKey::IsLoggedIn, "false") == TRUE
    }

    /// The active session, if any
    ///
    /// Read from one snapshot, so the fields always belong to the same user.
    pub fn current(&self) -> Option<Session> {
        let mut values: HashMap<PrefKey, String> = self.prefs.snapshot().into_iter().collect();
        if values.get(&PrefKey::IsLoggedIn).map(String::as_str) != Some(TRUE) {
            return None;
        }
        let mut take = |key: PrefKey| values.remove(&key).unwrap_or_default();
        let customer_id = take(PrefKey::Id).parse().ok()?;
        Some(Session {
            customer_id,
            name: take(PrefKey::Name),
            email: take(PrefKey::Email),
            phone: take(PrefKey::Phone),
            currency: take(PrefKey::Currency),
            fav_list_id: take(PrefKey::FavListId).parse().ok(),
            cart_list_id: take(PrefKey::CartListId).parse().ok(),
        })
    }

    /// Log out, clearing every session key
    pub fn end(&self) -> Result<()> {
        self.prefs.clear()?;
        tracing::info!("session ended");
        Ok(())
    }

    /// Store the user's language choice
    pub fn set_language(&self, name: &str, code: &str) -> Result<()> {
        self.prefs.replace(
            &[],
            &[(PrefKey::Language, name), (PrefKey::LanguageCode, code)],
        )
    }

    /// Stored language code, empty when never set
    pub fn language_code(&self) -> String {
        self.prefs.retrieve(PrefKey::LanguageCode, "")
    }

    /// Record that onboarding was shown
    pub fn mark_onboarding_shown(&self) -> Result<()> {
        self.prefs.save(PrefKey::OnboardingShown, TRUE)
    }

    /// Check if onboarding was already shown
    pub fn onboarding_shown(&self) -> bool {
        self.prefs.retrieve(PrefKey::OnboardingShown, "false") == TRUE
    }
}
