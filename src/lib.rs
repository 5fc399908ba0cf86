pub mod details;
pub mod lang;
pub mod locale;
pub mod names;
pub mod resolver;

pub use details::{IsoType, IsoTypes, LanguageDetails, QueryType};
pub use lang::data::FAMILIES;
pub use lang::{IsoLang, all_langs, get_lang_by_key, lookup_code, lookup_name};
pub use locale::{LocaleError, LocaleTag};
pub use names::{DisplayNames, cldr::CldrNames};
pub use resolver::{
    LookupError, Resolver, ResolverBuilder, Strategy, find_language_names, get_language_details,
    is_valid_iso_639_3,
};
