//! Query resolution.
//!
//! A query is tried against an ordered list of [`Strategy`] values; the
//! first one that identifies a registry entry wins:
//!
//! 1. [`Strategy::Locale`] – `zh-Hans`, `ar_MA`: the language subtag must be
//!    a known code, names are rendered from the full tag.
//! 2. [`Strategy::Code`] – two or three ASCII letters matching any of
//!    ISO 639 parts 1, 2b, 2t, 3 or 5.
//! 3. [`Strategy::Name`] – English reference name or native name, ignoring
//!    case.
//!
//! Individual languages inherit missing codes from their macrolanguage, so
//! `cmn` reports `zh`/`chi`/`zho` next to its own part 3 code.

use crate::{
    details::{IsoType, IsoTypes, LanguageDetails, QueryType},
    lang::{self, IsoLang},
    locale::{self, LocaleTag},
    names::{self, DisplayNames, cldr::CldrNames, cldr::REFERENCE_LOCALE},
};
use smallvec::smallvec;
use std::sync::{Arc, LazyLock};
use thiserror::Error;
use tracing::{debug, trace};

/// The only failure a lookup can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("language not found: `{query}`")]
    NotFound { query: String },
}

/// One way of reading a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Locale,
    Code,
    Name,
}

/// A strategy hit: the macro-merged registry row and what matched.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub lang: IsoLang,
    pub iso_types: IsoTypes,
}

impl Match {
    fn new(lang: &IsoLang, iso_types: IsoTypes) -> Self {
        Self {
            lang: lang::with_macro(lang),
            iso_types,
        }
    }
}

impl Strategy {
    /// Resolution order. First hit wins.
    pub const ORDER: [Strategy; 3] = [Strategy::Locale, Strategy::Code, Strategy::Name];

    pub const fn query_type(self) -> QueryType {
        match self {
            Strategy::Locale => QueryType::Locale,
            Strategy::Code => QueryType::PureCode,
            Strategy::Name => QueryType::LanguageName,
        }
    }

    pub fn resolve(self, query: &str, names: &dyn DisplayNames) -> Option<Match> {
        match self {
            Strategy::Locale => Self::resolve_locale(query),
            Strategy::Code => Self::resolve_code(query),
            Strategy::Name => Self::resolve_name(query, names),
        }
    }

    fn resolve_locale(query: &str) -> Option<Match> {
        if !locale::has_separator(query) {
            return None;
        }
        let tag = match LocaleTag::parse(query) {
            Ok(tag) => tag,
            Err(e) => {
                trace!(query, error = %e, "not a locale");
                return None;
            }
        };
        if !tag.is_qualified() {
            return None;
        }
        let base = tag.language();
        let lang = lang::lookup_code(base)?;
        Some(Match::new(lang, lang.matching_types(base)))
    }

    fn resolve_code(query: &str) -> Option<Match> {
        if !(2..=3).contains(&query.len()) || !query.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        let lang = lang::lookup_code(query)?;
        Some(Match::new(lang, lang.matching_types(query)))
    }

    fn resolve_name(query: &str, names: &dyn DisplayNames) -> Option<Match> {
        let lang = lang::lookup_name(query).or_else(|| {
            names
                .language_for_native_name(query)
                .and_then(lang::lookup_code)
        })?;
        Some(Match::new(lang, smallvec![IsoType::Name]))
    }
}

/// Resolves queries against the registry and a display-name service.
///
/// Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct Resolver {
    names: Arc<dyn DisplayNames>,
    reference_locale: &'static str,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("reference_locale", &self.reference_locale)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    #[inline]
    pub fn reference_locale(&self) -> &'static str {
        self.reference_locale
    }

    /// Resolve `query`, failing with [`LookupError::NotFound`].
    pub fn details(&self, query: &str) -> Result<LanguageDetails, LookupError> {
        self.details_failsafe(query)
            .ok_or_else(|| LookupError::NotFound {
                query: query.to_owned(),
            })
    }

    /// Resolve `query`, signalling absence with `None`.
    pub fn details_failsafe(&self, query: &str) -> Option<LanguageDetails> {
        let names = self.names.as_ref();
        Strategy::ORDER.into_iter().find_map(|strategy| {
            let hit = strategy.resolve(query, names)?;
            debug!(query, ?strategy, key = hit.lang.key(), "language resolved");
            let display = names::resolve_names(names, self.reference_locale, query, &hit.lang);
            Some(LanguageDetails::new(
                &hit.lang,
                hit.iso_types,
                display,
                query,
                strategy.query_type(),
            ))
        })
        .or_else(|| {
            debug!(query, "no strategy matched");
            None
        })
    }

    /// `(native, english)` names for `query`; `(query, query)` when unknown.
    pub fn find_language_names(&self, query: &str) -> (String, String) {
        match self.details_failsafe(query) {
            Some(details) => (details.native, details.english),
            None => (query.to_owned(), query.to_owned()),
        }
    }

    /// Whether `code` is an ISO 639-3 code in its own right.
    pub fn is_valid_iso_639_3(&self, code: &str) -> bool {
        self.details_failsafe(code)
            .is_some_and(|details| details.iso_639_3.as_deref() == Some(code))
    }
}

pub struct ResolverBuilder {
    names: Arc<dyn DisplayNames>,
    reference_locale: &'static str,
}

impl Default for ResolverBuilder {
    fn default() -> Self {
        Self {
            names: Arc::new(CldrNames),
            reference_locale: REFERENCE_LOCALE,
        }
    }
}

impl ResolverBuilder {
    /// Replace the bundled CLDR excerpt with another rendering service.
    pub fn display_names<T: DisplayNames + 'static>(mut self, names: T) -> Self {
        self.names = Arc::new(names);
        self
    }

    /// Locale the `english` field is rendered in. Defaults to `en`.
    pub fn reference_locale(mut self, locale: &'static str) -> Self {
        self.reference_locale = locale;
        self
    }

    pub fn build(self) -> Resolver {
        Resolver {
            names: self.names,
            reference_locale: self.reference_locale,
        }
    }
}

static DEFAULT_RESOLVER: LazyLock<Resolver> = LazyLock::new(Resolver::default);

/// Resolve `query` with the bundled data.
///
/// With `failsafe` set, an unknown query yields `Ok(None)`; otherwise it
/// yields `Err(LookupError::NotFound)`. `Ok(None)` is never returned when
/// `failsafe` is false.
pub fn get_language_details(
    query: &str,
    failsafe: bool,
) -> Result<Option<LanguageDetails>, LookupError> {
    if failsafe {
        Ok(DEFAULT_RESOLVER.details_failsafe(query))
    } else {
        DEFAULT_RESOLVER.details(query).map(Some)
    }
}

/// `(native, english)` display names for `query`. Never fails.
pub fn find_language_names(query: &str) -> (String, String) {
    DEFAULT_RESOLVER.find_language_names(query)
}

pub fn is_valid_iso_639_3(code: &str) -> bool {
    DEFAULT_RESOLVER.is_valid_iso_639_3(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::AFA;
    use crate::lang::{IsoLang, get_lang_by_key};

    fn lang(key: &str) -> IsoLang {
        *get_lang_by_key(key).unwrap_or_else(|| panic!("{key} not registered"))
    }

    fn resolve(strategy: Strategy, query: &str) -> Option<Match> {
        strategy.resolve(query, &CldrNames)
    }

    #[test]
    fn locale_strategy_needs_a_qualified_known_tag() {
        let hit = resolve(Strategy::Locale, "zh-Hans").unwrap();
        assert_eq!(hit.lang, lang("zho"));
        assert_eq!(hit.iso_types.as_slice(), &[IsoType::Part1]);

        let hit = resolve(Strategy::Locale, "ara_EG").unwrap();
        assert_eq!(hit.lang, lang("ara"));
        assert_eq!(hit.iso_types.as_slice(), &[
            IsoType::Part2b,
            IsoType::Part2t,
            IsoType::Part3
        ]);

        assert_eq!(resolve(Strategy::Locale, "zh"), None);
        assert_eq!(resolve(Strategy::Locale, "qq-FR"), None);
        assert_eq!(resolve(Strategy::Locale, "fake-lang"), None);
    }

    #[test]
    fn code_strategy_only_considers_short_alphabetic_queries() {
        assert_eq!(resolve(Strategy::Code, "fre").unwrap().lang, lang("fra"));
        assert_eq!(resolve(Strategy::Code, "FR").unwrap().lang, lang("fra"));
        assert_eq!(resolve(Strategy::Code, "afa").unwrap().lang, AFA);
        assert_eq!(resolve(Strategy::Code, "fake"), None);
        assert_eq!(resolve(Strategy::Code, "C#"), None);
        assert_eq!(resolve(Strategy::Code, "f"), None);
    }

    #[test]
    fn code_strategy_merges_macrolanguage() {
        let hit = resolve(Strategy::Code, "cmn").unwrap();
        assert_eq!(hit.lang.part1, Some("zh"));
        assert_eq!(hit.lang.part3, Some("cmn"));
        assert_eq!(hit.iso_types.as_slice(), &[IsoType::Part3]);
    }

    #[test]
    fn name_strategy_reads_english_and_native_names() {
        let hit = resolve(Strategy::Name, "Japanese").unwrap();
        assert_eq!(hit.lang, lang("jpn"));
        assert_eq!(hit.iso_types.as_slice(), &[IsoType::Name]);

        assert_eq!(resolve(Strategy::Name, "français").unwrap().lang, lang("fra"));
        assert_eq!(resolve(Strategy::Name, "AFRO-ASIATIC LANGUAGES").unwrap().lang, AFA);
        assert_eq!(resolve(Strategy::Name, "Elvish"), None);
    }

    #[test]
    fn strategy_query_types() {
        assert_eq!(Strategy::Locale.query_type(), QueryType::Locale);
        assert_eq!(Strategy::Code.query_type(), QueryType::PureCode);
        assert_eq!(Strategy::Name.query_type(), QueryType::LanguageName);
    }

    #[test]
    fn not_found_error_names_the_query() {
        let err = Resolver::default().details("fks").unwrap_err();
        assert_eq!(err, LookupError::NotFound { query: "fks".to_owned() });
        assert_eq!(err.to_string(), "language not found: `fks`");
    }

    #[test]
    fn failsafe_flag_selects_the_failure_mode() {
        assert_eq!(get_language_details("fks", true), Ok(None));
        assert!(get_language_details("fks", false).is_err());
        assert!(matches!(get_language_details("fr", false), Ok(Some(_))));
        assert!(matches!(get_language_details("fr", true), Ok(Some(_))));
    }

    #[test]
    fn iso_639_3_validity() {
        assert!(is_valid_iso_639_3("cmn"));
        assert!(is_valid_iso_639_3("fra"));
        assert!(!is_valid_iso_639_3("fre"));
        assert!(!is_valid_iso_639_3("zh"));
        assert!(!is_valid_iso_639_3("afa"));
        assert!(!is_valid_iso_639_3("fks"));
    }
}
