//! Effective locale from the stored language code

/// Reading direction of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Left to right
    Ltr,
    /// Right to left
    Rtl,
}

/// A locale the application ships translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// ISO 639-1 language code
    pub code: &'static str,
    /// Language name in that language
    pub name: &'static str,
    /// Reading direction
    pub direction: TextDirection,
}

/// English, the fallback locale
pub const ENGLISH: Locale = Locale {
    code: "en",
    name: "English",
    direction: TextDirection::Ltr,
};

/// Arabic
pub const ARABIC: Locale = Locale {
    code: "ar",
    name: "العربية",
    direction: TextDirection::Rtl,
};

/// Every supported locale
pub const SUPPORTED_LOCALES: [Locale; 2] = [ENGLISH, ARABIC];

/// Map a stored language code (e.g. `"ar"`, `"ar-EG"`, `"EN_us"`) to a supported locale
///
/// Unknown or empty codes resolve to [`ENGLISH`].
pub fn resolve_locale(stored_code: &str) -> Locale {
    let primary = stored_code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    SUPPORTED_LOCALES
        .into_iter()
        .find(|locale| locale.code == primary)
        .unwrap_or(ENGLISH)
}
