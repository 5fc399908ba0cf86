//! Native and English display names.
//!
//! Rendering is delegated to a [`DisplayNames`] service so callers can
//! plug in a full CLDR backend. The bundled [`cldr::CldrNames`] covers every
//! ISO 639 language with a known autonym, and every ISO 3166 region and
//! ISO 15924 script by English name ([`subtags`]). Whatever the
//! service returns, name resolution is total: it degrades to the static
//! English reference name, and to the query itself when nothing matched.

pub mod cldr;
pub mod subtags;

use crate::details::IsoType;
use crate::lang::IsoLang;
use tracing::trace;

/// Locale name-rendering service.
pub trait DisplayNames: Send + Sync {
    /// Display name of `locale` rendered in `target`, or in the locale's
    /// own language when `target` is `None`. `None` when it cannot render.
    fn display_name(&self, locale: &str, target: Option<&str>) -> Option<String>;

    /// Language code whose native name is `name`, if the service knows it.
    fn language_for_native_name(&self, _name: &str) -> Option<&'static str> {
        None
    }
}

/// `(native, reference)` rendering of `locale`; both must be non-empty.
pub(crate) fn render_pair(
    names: &dyn DisplayNames,
    locale: &str,
    reference: &str,
) -> Option<(String, String)> {
    let native = names.display_name(locale, None).filter(|s| !s.is_empty())?;
    let english = names
        .display_name(locale, Some(reference))
        .filter(|s| !s.is_empty())?;
    Some((native, english))
}

/// Names for a resolved language.
///
/// Tries the query as typed, then every registry code from the most
/// granular (part 5, part 3) down to part 1, then the reference name.
pub(crate) fn resolve_names(
    names: &dyn DisplayNames,
    reference: &str,
    query: &str,
    lang: &IsoLang,
) -> (String, String) {
    if let Some(pair) = render_pair(names, query, reference) {
        return pair;
    }

    for level in IsoType::CODES.iter().rev() {
        if let Some(code) = lang.code(*level)
            && let Some(pair) = render_pair(names, code, reference)
        {
            trace!(query, code, level = %level, "display names rendered from registry code");
            return pair;
        }
    }

    trace!(query, name = lang.name, "display names fall back to reference name");
    (lang.name.to_owned(), lang.name.to_owned())
}
