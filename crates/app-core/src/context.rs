//! Composition root
//!
//! [`AppContext`] builds the key-value store, the preference namespace, the
//! network client and the repository once, and hands out references to
//! them. There is no global instance; the owner of the context decides its
//! lifetime.

use crate::config::{AppConfig, PaymentRedirects};
use crate::error::Result;
use crate::locale::{resolve_locale, Locale};
use crate::repository::Repository;
use crate::session::SessionStore;
use commerce_client::{CommerceApi, NetworkClient};
use std::sync::Arc;
use storage::{KvStore, PreferenceStore};

/// Long-lived application services
#[derive(Clone)]
pub struct AppContext {
    kv: KvStore,
    repository: Repository,
    session: SessionStore,
    payment: PaymentRedirects,
}

impl AppContext {
    /// Open storage and build the network client from `config`
    pub fn new(config: AppConfig) -> Result<Self> {
        let kv = KvStore::new(config.storage.clone())?;
        let client = NetworkClient::new(config.client.clone())?;
        Self::assemble(kv, Arc::new(client), config)
    }

    /// Build a context over an existing store and backend
    pub fn with_backend(kv: KvStore, api: Arc<dyn CommerceApi>, config: AppConfig) -> Result<Self> {
        Self::assemble(kv, api, config)
    }

    fn assemble(kv: KvStore, api: Arc<dyn CommerceApi>, config: AppConfig) -> Result<Self> {
        let prefs = PreferenceStore::open(&kv)?;
        let context = Self {
            kv,
            repository: Repository::new(api),
            session: SessionStore::new(prefs),
            payment: config.payment,
        };
        tracing::info!(
            logged_in = context.session.is_logged_in(),
            locale = context.locale().code,
            "application context ready"
        );
        Ok(context)
    }

    /// Repository for remote data
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Session stored on this device
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Device preferences
    pub fn preferences(&self) -> &PreferenceStore {
        self.session.preferences()
    }

    /// Underlying key-value store
    pub fn kv(&self) -> &KvStore {
        &self.kv
    }

    /// Checkout redirect targets
    pub fn payment_redirects(&self) -> &PaymentRedirects {
        &self.payment
    }

    /// Effective locale for the stored language code
    pub fn locale(&self) -> Locale {
        resolve_locale(&self.session.language_code())
    }

    /// Store a new language choice and return the resulting locale
    pub fn change_language(&self, code: &str) -> Result<Locale> {
        let locale = resolve_locale(code);
        self.session.set_language(locale.name, locale.code)?;
        tracing::info!(locale = locale.code, "language changed");
        Ok(locale)
    }
}
