// src/locale.rs
// Thin wrapper over ICU4X language identifiers. Accepts `_` as well as `-`.

use icu_locale_core::LanguageIdentifier;
use memchr::{memchr, memchr2};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("invalid locale tag `{tag}`: {reason}")]
    Invalid { tag: String, reason: String },
}

/// A parsed locale tag such as `zh-Hans`, `ar_MA` or `sr-Cyrl-RS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag {
    id: LanguageIdentifier,
}

impl LocaleTag {
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let normalized: Cow<'_, str> = if memchr(b'_', tag.as_bytes()).is_some() {
            Cow::Owned(tag.replace('_', "-"))
        } else {
            Cow::Borrowed(tag)
        };
        LanguageIdentifier::try_from_str(&normalized)
            .map(|id| Self { id })
            .map_err(|e| LocaleError::Invalid {
                tag: tag.to_owned(),
                reason: e.to_string(),
            })
    }

    #[inline]
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    #[inline]
    pub fn script(&self) -> Option<&str> {
        self.id.script.as_ref().map(|s| s.as_str())
    }

    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.id.region.as_ref().map(|r| r.as_str())
    }

    /// Whether any script, region or variant subtag follows the language.
    #[inline]
    pub fn is_qualified(&self) -> bool {
        self.id.script.is_some() || self.id.region.is_some() || !self.id.variants.is_empty()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.id, f)
    }
}

/// Cheap pre-check: does `query` carry a subtag separator at all?
#[inline]
pub fn has_separator(query: &str) -> bool {
    memchr2(b'-', b'_', query.as_bytes()).is_some()
}
