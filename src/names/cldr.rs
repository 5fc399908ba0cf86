// src/names/cldr.rs
// Bundled CLDR excerpt: autonyms, English names, and script/region names
// as rendered in each locale. Keyed by CLDR language subtag.

use crate::lang::fold_name;
use crate::locale::LocaleTag;
use crate::names::{DisplayNames, subtags};
use isolang::Language;
use phf::{Map, phf_map};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::LazyLock;

pub const REFERENCE_LOCALE: &str = "en";

/// Names one locale knows: its own name, its English name, and how it
/// writes script and region subtags.
#[derive(Debug, Clone, Copy)]
pub struct LocaleData {
    pub autonym: &'static str,
    pub english: &'static str,
    pub scripts: &'static [(&'static str, &'static str)],
    pub regions: &'static [(&'static str, &'static str)],
}

impl LocaleData {
    #[inline]
    pub fn script_name(&self, script: &str) -> Option<&'static str> {
        self.scripts.iter().find(|(code, _)| *code == script).map(|(_, name)| *name)
    }

    #[inline]
    pub fn region_name(&self, region: &str) -> Option<&'static str> {
        self.regions.iter().find(|(code, _)| *code == region).map(|(_, name)| *name)
    }
}

/// Likely subtags for three-letter codes CLDR does not use as locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Likely {
    pub language: &'static str,
    pub script: Option<&'static str>,
    pub region: Option<&'static str>,
}

macro_rules! likely {
    ($lang:literal) => {
        Likely { language: $lang, script: None, region: None }
    };
    ($lang:literal, region: $region:literal) => {
        Likely { language: $lang, script: None, region: Some($region) }
    };
    ($lang:literal, $script:literal, $region:literal) => {
        Likely { language: $lang, script: Some($script), region: Some($region) }
    };
}

// English subtag names live in the complete tables of `subtags`.
const ENGLISH: LocaleData = LocaleData {
    autonym: "English",
    english: "English",
    scripts: &[],
    regions: &[],
};

pub static LOCALE_DATA: Map<&'static str, LocaleData> = phf_map! {
    "en" => ENGLISH,
    "am" => LocaleData {
        autonym: "አማርኛ", english: "Amharic",
        scripts: &[("Ethi", "ግዕዝ")],
        regions: &[("ET", "ኢትዮጵያ")],
    },
    "ar" => LocaleData {
        autonym: "العربية", english: "Arabic",
        scripts: &[("Arab", "العربية")],
        regions: &[
            ("AE", "الإمارات العربية المتحدة"),
            ("DZ", "الجزائر"),
            ("EG", "مصر"),
            ("IQ", "العراق"),
            ("JO", "الأردن"),
            ("LB", "لبنان"),
            ("MA", "المغرب"),
            ("SA", "المملكة العربية السعودية"),
            ("SY", "سوريا"),
            ("TN", "تونس"),
        ],
    },
    "bm" => LocaleData {
        autonym: "bamanakan", english: "Bambara",
        scripts: &[],
        regions: &[("ML", "Mali")],
    },
    "bn" => LocaleData {
        autonym: "বাংলা", english: "Bangla",
        scripts: &[("Beng", "বাংলা")],
        regions: &[("BD", "বাংলাদেশ"), ("IN", "ভারত")],
    },
    "ca" => LocaleData {
        autonym: "català", english: "Catalan",
        scripts: &[("Latn", "llatí")],
        regions: &[("ES", "Espanya"), ("FR", "França")],
    },
    "cs" => LocaleData {
        autonym: "čeština", english: "Czech",
        scripts: &[("Latn", "latinka")],
        regions: &[("CZ", "Česko")],
    },
    "da" => LocaleData {
        autonym: "dansk", english: "Danish",
        scripts: &[],
        regions: &[("DK", "Danmark")],
    },
    "de" => LocaleData {
        autonym: "Deutsch", english: "German",
        scripts: &[("Latn", "Lateinisch")],
        regions: &[("AT", "Österreich"), ("CH", "Schweiz"), ("DE", "Deutschland")],
    },
    "ee" => LocaleData {
        autonym: "Eʋegbe", english: "Ewe",
        scripts: &[],
        regions: &[("GH", "Ghana nutome"), ("TG", "Togo nutome")],
    },
    "el" => LocaleData {
        autonym: "Ελληνικά", english: "Greek",
        scripts: &[("Grek", "Ελληνικό")],
        regions: &[("GR", "Ελλάδα")],
    },
    "es" => LocaleData {
        autonym: "español", english: "Spanish",
        scripts: &[("Latn", "latino")],
        regions: &[
            ("AR", "Argentina"),
            ("CO", "Colombia"),
            ("ES", "España"),
            ("MX", "México"),
            ("US", "Estados Unidos"),
        ],
    },
    "fa" => LocaleData {
        autonym: "فارسی", english: "Persian",
        scripts: &[("Arab", "عربی")],
        regions: &[("AF", "افغانستان"), ("IR", "ایران")],
    },
    "fi" => LocaleData {
        autonym: "suomi", english: "Finnish",
        scripts: &[],
        regions: &[("FI", "Suomi")],
    },
    "fr" => LocaleData {
        autonym: "français", english: "French",
        scripts: &[("Latn", "latin")],
        regions: &[
            ("BE", "Belgique"),
            ("CA", "Canada"),
            ("CH", "Suisse"),
            ("DZ", "Algérie"),
            ("FR", "France"),
            ("MA", "Maroc"),
            ("ML", "Mali"),
            ("SN", "Sénégal"),
            ("TN", "Tunisie"),
        ],
    },
    "ha" => LocaleData {
        autonym: "Hausa", english: "Hausa",
        scripts: &[],
        regions: &[("GH", "Gana"), ("NG", "Najeriya")],
    },
    "he" => LocaleData {
        autonym: "עברית", english: "Hebrew",
        scripts: &[("Hebr", "עברי")],
        regions: &[("IL", "ישראל")],
    },
    "hi" => LocaleData {
        autonym: "हिन्दी", english: "Hindi",
        scripts: &[("Deva", "देवनागरी"), ("Latn", "लैटिन")],
        regions: &[("IN", "भारत")],
    },
    "id" => LocaleData {
        autonym: "Indonesia", english: "Indonesian",
        scripts: &[],
        regions: &[("ID", "Indonesia")],
    },
    "it" => LocaleData {
        autonym: "italiano", english: "Italian",
        scripts: &[("Latn", "latino")],
        regions: &[("CH", "Svizzera"), ("IT", "Italia")],
    },
    "ja" => LocaleData {
        autonym: "日本語", english: "Japanese",
        scripts: &[("Jpan", "日本語の文字")],
        regions: &[("JP", "日本")],
    },
    "km" => LocaleData {
        autonym: "ខ្មែរ", english: "Khmer",
        scripts: &[("Khmr", "ខ្មែរ")],
        regions: &[("KH", "កម្ពុជា")],
    },
    "ko" => LocaleData {
        autonym: "한국어", english: "Korean",
        scripts: &[("Kore", "한국 문자")],
        regions: &[("KR", "대한민국")],
    },
    "ms" => LocaleData {
        autonym: "Melayu", english: "Malay",
        scripts: &[],
        regions: &[("MY", "Malaysia"), ("SG", "Singapura")],
    },
    "nb" => LocaleData {
        autonym: "norsk bokmål", english: "Norwegian Bokmål",
        scripts: &[],
        regions: &[("NO", "Norge")],
    },
    "nl" => LocaleData {
        autonym: "Nederlands", english: "Dutch",
        scripts: &[],
        regions: &[("BE", "België"), ("NL", "Nederland")],
    },
    "pl" => LocaleData {
        autonym: "polski", english: "Polish",
        scripts: &[],
        regions: &[("PL", "Polska")],
    },
    "pt" => LocaleData {
        autonym: "português", english: "Portuguese",
        scripts: &[],
        regions: &[("BR", "Brasil"), ("PT", "Portugal")],
    },
    "ru" => LocaleData {
        autonym: "русский", english: "Russian",
        scripts: &[("Cyrl", "кириллица")],
        regions: &[("RU", "Россия"), ("UA", "Украина")],
    },
    "sr" => LocaleData {
        autonym: "српски", english: "Serbian",
        scripts: &[("Cyrl", "ћирилица"), ("Latn", "латиница")],
        regions: &[("BA", "Босна и Херцеговина"), ("RS", "Србија")],
    },
    "sv" => LocaleData {
        autonym: "svenska", english: "Swedish",
        scripts: &[],
        regions: &[("FI", "Finland"), ("SE", "Sverige")],
    },
    "sw" => LocaleData {
        autonym: "Kiswahili", english: "Swahili",
        scripts: &[],
        regions: &[("KE", "Kenya"), ("TZ", "Tanzania")],
    },
    "ta" => LocaleData {
        autonym: "தமிழ்", english: "Tamil",
        scripts: &[("Taml", "தமிழ்")],
        regions: &[("IN", "இந்தியா"), ("LK", "இலங்கை"), ("SG", "சிங்கப்பூர்")],
    },
    "th" => LocaleData {
        autonym: "ไทย", english: "Thai",
        scripts: &[("Thai", "ไทย")],
        regions: &[("TH", "ไทย")],
    },
    "tr" => LocaleData {
        autonym: "Türkçe", english: "Turkish",
        scripts: &[],
        regions: &[("TR", "Türkiye")],
    },
    "uk" => LocaleData {
        autonym: "українська", english: "Ukrainian",
        scripts: &[("Cyrl", "кирилиця")],
        regions: &[("UA", "Україна")],
    },
    "ur" => LocaleData {
        autonym: "اردو", english: "Urdu",
        scripts: &[("Arab", "عربی")],
        regions: &[("IN", "بھارت"), ("PK", "پاکستان")],
    },
    "vi" => LocaleData {
        autonym: "Tiếng Việt", english: "Vietnamese",
        scripts: &[],
        regions: &[("VN", "Việt Nam")],
    },
    "wo" => LocaleData {
        autonym: "Wolof", english: "Wolof",
        scripts: &[],
        regions: &[("SN", "Senegaal")],
    },
    "yo" => LocaleData {
        autonym: "Èdè Yorùbá", english: "Yoruba",
        scripts: &[],
        regions: &[("NG", "Nàìjíríà")],
    },
    "yue" => LocaleData {
        autonym: "粵語", english: "Cantonese",
        scripts: &[("Hans", "簡體"), ("Hant", "繁體")],
        regions: &[("CN", "中華人民共和國"), ("HK", "中華人民共和國香港特別行政區")],
    },
    "zh" => LocaleData {
        autonym: "中文", english: "Chinese",
        scripts: &[("Hans", "简体"), ("Hant", "繁体")],
        regions: &[
            ("CN", "中国"),
            ("HK", "中国香港特别行政区"),
            ("SG", "新加坡"),
            ("TW", "台湾"),
        ],
    },
};

/// Three-letter codes mapped to the CLDR locale they render as.
pub static LIKELY_LOCALES: Map<&'static str, Likely> = phf_map! {
    "amh" => likely!("am"),
    "apc" => likely!("ar", region: "SY"),
    "ara" => likely!("ar"),
    "arq" => likely!("ar", region: "EG"),
    "ary" => likely!("ar", region: "MA"),
    "arz" => likely!("ar", region: "EG"),
    "bam" => likely!("bm"),
    "ben" => likely!("bn"),
    "cat" => likely!("ca"),
    "ces" => likely!("cs"),
    "chi" => likely!("zh"),
    "cmn" => likely!("zh", "Hans", "CN"),
    "cze" => likely!("cs"),
    "dan" => likely!("da"),
    "deu" => likely!("de"),
    "dut" => likely!("nl"),
    "ell" => likely!("el"),
    "eng" => likely!("en"),
    "ewe" => likely!("ee"),
    "fas" => likely!("fa"),
    "fin" => likely!("fi"),
    "fra" => likely!("fr"),
    "fre" => likely!("fr"),
    "ger" => likely!("de"),
    "gre" => likely!("el"),
    "hau" => likely!("ha"),
    "heb" => likely!("he"),
    "hin" => likely!("hi", region: "IN"),
    "ind" => likely!("id"),
    "ita" => likely!("it"),
    "jpn" => likely!("ja", region: "JP"),
    "khm" => likely!("km"),
    "kor" => likely!("ko"),
    "may" => likely!("ms"),
    "msa" => likely!("ms"),
    "nld" => likely!("nl"),
    "nob" => likely!("nb"),
    "per" => likely!("fa"),
    "pol" => likely!("pl"),
    "por" => likely!("pt"),
    "rus" => likely!("ru"),
    "spa" => likely!("es"),
    "srp" => likely!("sr"),
    "swa" => likely!("sw"),
    "swe" => likely!("sv"),
    "swh" => likely!("sw", region: "TZ"),
    "tam" => likely!("ta"),
    "tha" => likely!("th"),
    "tur" => likely!("tr"),
    "ukr" => likely!("uk"),
    "urd" => likely!("ur"),
    "vie" => likely!("vi"),
    "wol" => likely!("wo"),
    "yor" => likely!("yo"),
    "zho" => likely!("zh"),
    "zsm" => likely!("ms", region: "MY"),
};

// Autonyms from the CLDR excerpt first, then the ISO 639 autonym table.
static NATIVE_INDEX: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for (code, data) in LOCALE_DATA.entries() {
        index.entry(fold_name(data.autonym)).or_insert(*code);
    }
    for language in isolang::languages() {
        if let Some(autonym) = language.to_autonym() {
            let code = language.to_639_1().unwrap_or_else(|| language.to_639_3());
            index.entry(fold_name(autonym)).or_insert(code);
        }
    }
    index
});

/// Names of a language subtag: `(autonym, english, localized subtag names)`.
///
/// Languages outside the CLDR excerpt take their names from ISO 639. With
/// no known autonym the native name is the English one.
fn language_names(code: &str) -> Option<(&'static str, &'static str, &'static LocaleData)> {
    if let Some(data) = LOCALE_DATA.get(code) {
        return Some((data.autonym, data.english, data));
    }
    let language = match code.len() {
        2 => Language::from_639_1(code),
        3 => Language::from_639_3(code),
        _ => None,
    }?;
    let english = language.to_name();
    Some((language.to_autonym().unwrap_or(english), english, &ENGLISH))
}

struct Subtags<'a> {
    language: &'a str,
    script: Option<&'a str>,
    region: Option<&'a str>,
}

fn expand(tag: &LocaleTag) -> Subtags<'_> {
    match LIKELY_LOCALES.get(tag.language()) {
        // Explicit subtags win over likely ones.
        Some(likely) if tag.is_qualified() => Subtags {
            language: likely.language,
            script: tag.script(),
            region: tag.region(),
        },
        Some(likely) => Subtags {
            language: likely.language,
            script: likely.script,
            region: likely.region,
        },
        None => Subtags {
            language: tag.language(),
            script: tag.script(),
            region: tag.region(),
        },
    }
}

/// [`DisplayNames`] backed by the bundled CLDR excerpt.
///
/// Renders `language (script, region)` in the locale itself or in
/// English. Script and region names missing from the display locale fall
/// back to English ones; subtags unknown to both are left out. Languages
/// outside the excerpt are named from ISO 639.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrNames;

impl DisplayNames for CldrNames {
    fn display_name(&self, locale: &str, target: Option<&str>) -> Option<String> {
        let tag = LocaleTag::parse(locale).ok()?;
        let parts = expand(&tag);
        let (autonym, english, data) = language_names(parts.language)?;

        let (name, display) = match target {
            None => (autonym, data),
            Some(t) if t.eq_ignore_ascii_case(parts.language) => (autonym, data),
            Some(t) if t.eq_ignore_ascii_case(REFERENCE_LOCALE) => (english, &ENGLISH),
            Some(_) => return None,
        };

        let details: SmallVec<[&str; 2]> = [
            parts
                .script
                .and_then(|s| display.script_name(s).or_else(|| subtags::script_name(s))),
            parts
                .region
                .and_then(|r| display.region_name(r).or_else(|| subtags::region_name(r))),
        ]
        .into_iter()
        .flatten()
        .collect();

        Some(if details.is_empty() {
            name.to_owned()
        } else {
            format!("{name} ({})", details.join(", "))
        })
    }

    fn language_for_native_name(&self, name: &str) -> Option<&'static str> {
        NATIVE_INDEX.get(&fold_name(name)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(locale: &str) -> (Option<String>, Option<String>) {
        (
            CldrNames.display_name(locale, None),
            CldrNames.display_name(locale, Some(REFERENCE_LOCALE)),
        )
    }

    fn some(native: &str, english: &str) -> (Option<String>, Option<String>) {
        (Some(native.to_owned()), Some(english.to_owned()))
    }

    #[test]
    fn bare_languages() {
        assert_eq!(both("fr"), some("français", "French"));
        assert_eq!(both("en"), some("English", "English"));
        assert_eq!(both("bm"), some("bamanakan", "Bambara"));
        assert_eq!(both("zh"), some("中文", "Chinese"));
        assert_eq!(both("ar"), some("العربية", "Arabic"));
    }

    #[test]
    fn qualified_locales() {
        assert_eq!(both("zh-Hans"), some("中文 (简体)", "Chinese (Simplified)"));
        assert_eq!(both("ar_MA"), some("العربية (المغرب)", "Arabic (Morocco)"));
        assert_eq!(
            both("ar-AE"),
            some("العربية (الإمارات العربية المتحدة)", "Arabic (United Arab Emirates)")
        );
        assert_eq!(
            both("zh-Hans-CN"),
            some("中文 (简体, 中国)", "Chinese (Simplified, China)")
        );
    }

    #[test]
    fn likely_subtags_expand_three_letter_codes() {
        assert_eq!(both("hin"), some("हिन्दी (भारत)", "Hindi (India)"));
        assert_eq!(both("cmn"), some("中文 (简体, 中国)", "Chinese (Simplified, China)"));
        assert_eq!(both("jpn"), some("日本語 (日本)", "Japanese (Japan)"));
        assert_eq!(both("ara"), some("العربية", "Arabic"));
    }

    #[test]
    fn explicit_subtags_override_likely_ones() {
        assert_eq!(
            both("cmn-Hant-TW"),
            some("中文 (繁体, 台湾)", "Chinese (Traditional, Taiwan)")
        );
    }

    #[test]
    fn missing_native_region_falls_back_to_english() {
        assert_eq!(both("bm-FR"), some("bamanakan (France)", "Bambara (France)"));
    }

    #[test]
    fn languages_outside_the_excerpt_use_iso_639_names() {
        assert_eq!(both("te"), some("తెలుగు", "Telugu"));
        assert_eq!(both("kn"), some("ಕನ್ನಡ", "Kannada"));
        assert_eq!(both("te-IN"), some("తెలుగు (India)", "Telugu (India)"));
        assert_eq!(both("nav"), some("Diné", "Navajo"));
        assert_eq!(CldrNames.display_name("te", Some("te")).as_deref(), Some("తెలుగు"));
    }

    #[test]
    fn regions_missing_from_the_excerpt_use_english_names() {
        assert_eq!(both("fr-LU"), some("français (Luxembourg)", "French (Luxembourg)"));
        assert_eq!(both("en-NZ"), some("English (New Zealand)", "English (New Zealand)"));
        assert_eq!(both("es-CL"), some("español (Chile)", "Spanish (Chile)"));
        assert_eq!(both("pt-AO"), some("português (Angola)", "Portuguese (Angola)"));
        assert_eq!(both("de-LI"), some("Deutsch (Liechtenstein)", "German (Liechtenstein)"));
        assert_eq!(both("te-Telu"), some("తెలుగు (Telugu)", "Telugu (Telugu)"));
    }

    #[test]
    fn unknown_subtags_are_omitted() {
        assert_eq!(both("fr-ZZ"), some("français", "French"));
    }

    #[test]
    fn unrenderable_locales() {
        assert_eq!(both("qq"), (None, None));
        assert_eq!(both("afa"), (None, None));
        assert_eq!(both("C#"), (None, None));
        assert_eq!(CldrNames.display_name("fr", Some("de")), None);
    }

    #[test]
    fn target_equal_to_language_renders_natively() {
        assert_eq!(CldrNames.display_name("fr", Some("fr")).as_deref(), Some("français"));
    }

    #[test]
    fn native_name_lookup() {
        assert_eq!(CldrNames.language_for_native_name("français"), Some("fr"));
        assert_eq!(CldrNames.language_for_native_name("FRANÇAIS"), Some("fr"));
        assert_eq!(CldrNames.language_for_native_name("中文"), Some("zh"));
        assert_eq!(CldrNames.language_for_native_name("తెలుగు"), Some("te"));
        assert_eq!(CldrNames.language_for_native_name("Elvish"), None);
    }

    #[test]
    fn every_likely_locale_has_data() {
        for (code, likely) in LIKELY_LOCALES.entries() {
            assert!(LOCALE_DATA.contains_key(likely.language), "{code}");
            if let Some(region) = likely.region {
                assert!(subtags::region_name(region).is_some(), "{code}");
            }
            if let Some(script) = likely.script {
                assert!(subtags::script_name(script).is_some(), "{code}");
            }
        }
    }
}
