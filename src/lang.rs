pub mod data;

use crate::details::{IsoType, IsoTypes};
use data::{FAMILIES, ISO_639_2B, MACROLANGUAGES};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use isolang::Language;
use std::collections::HashMap;
use std::sync::LazyLock;

/// One row of the ISO 639 registry: an individual language, a
/// macrolanguage or a language family (639-5).
///
/// Absent parts are `None`; `name` is the English reference name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoLang {
    pub part1: Option<&'static str>,
    pub part2b: Option<&'static str>,
    pub part2t: Option<&'static str>,
    pub part3: Option<&'static str>,
    pub part5: Option<&'static str>,
    pub name: &'static str,
    /// Part 3 code of the macrolanguage this language belongs to.
    pub macrolanguage: Option<&'static str>,
}

impl IsoLang {
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Code registered for `level`, or the English name for [`IsoType::Name`].
    #[inline]
    pub const fn code(&self, level: IsoType) -> Option<&'static str> {
        match level {
            IsoType::Part1 => self.part1,
            IsoType::Part2b => self.part2b,
            IsoType::Part2t => self.part2t,
            IsoType::Part3 => self.part3,
            IsoType::Part5 => self.part5,
            IsoType::Name => Some(self.name),
            IsoType::Locale => None,
        }
    }

    /// Table key: part 3 for languages, part 5 for families.
    #[inline]
    pub fn key(&self) -> &'static str {
        self.part3.or(self.part5).unwrap_or(self.name)
    }

    #[inline]
    pub fn is_family(&self) -> bool {
        self.part3.is_none() && self.part5.is_some()
    }

    /// Every code family (plus `name`) whose value equals `query`,
    /// ignoring case, in the fixed part1 → part5 → name order.
    pub fn matching_types(&self, query: &str) -> IsoTypes {
        IsoType::CODES
            .iter()
            .chain(std::iter::once(&IsoType::Name))
            .copied()
            .filter(|&level| match (level, self.code(level)) {
                (IsoType::Name, Some(name)) => fold_name(name) == fold_name(query),
                (_, Some(code)) => code.eq_ignore_ascii_case(query),
                (_, None) => false,
            })
            .collect()
    }

    /// Fill every empty code part from `macro_lang`; the name is kept.
    pub fn merged_with(mut self, macro_lang: &IsoLang) -> IsoLang {
        self.part1 = self.part1.or(macro_lang.part1);
        self.part2b = self.part2b.or(macro_lang.part2b);
        self.part2t = self.part2t.or(macro_lang.part2t);
        self.part3 = self.part3.or(macro_lang.part3);
        self.part5 = self.part5.or(macro_lang.part5);
        self
    }
}

impl From<Language> for IsoLang {
    /// Row for a 639-3 language. ISO 639-2 membership and macrolanguage
    /// links come from the bundled tables.
    fn from(language: Language) -> Self {
        let part3 = language.to_639_3();
        let part2b = ISO_639_2B.get(part3).copied();
        IsoLang {
            part1: language.to_639_1(),
            part2b,
            part2t: part2b.map(|_| part3),
            part3: Some(part3),
            part5: None,
            name: language.to_name(),
            macrolanguage: MACROLANGUAGES.get(part3).copied(),
        }
    }
}

// Every ISO 639-3 language in code order, then the 639-5 families.
static ALL_LANGS: LazyLock<Vec<IsoLang>> = LazyLock::new(|| {
    isolang::languages()
        .map(IsoLang::from)
        .chain(FAMILIES.iter().copied())
        .collect()
});

/// The whole registry. Index builders walk it in order, so the first row
/// wins on duplicate names.
#[inline]
pub fn all_langs() -> &'static [IsoLang] {
    &ALL_LANGS
}

static NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Comparison key for free-text names: NFC, then lowercase.
pub(crate) fn fold_name(name: &str) -> String {
    NFC.normalize(name.trim()).to_lowercase()
}

type CodeIndex = HashMap<&'static str, &'static IsoLang>;

// One index per code family, in IsoType::CODES order. First row wins.
static CODE_INDEX: LazyLock<[CodeIndex; 5]> = LazyLock::new(|| {
    IsoType::CODES.map(|level| {
        let mut index = CodeIndex::new();
        for lang in all_langs() {
            if let Some(code) = lang.code(level) {
                index.entry(code).or_insert(lang);
            }
        }
        index
    })
});

static NAME_INDEX: LazyLock<HashMap<String, &'static IsoLang>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(all_langs().len());
    for lang in all_langs() {
        index.entry(fold_name(lang.name)).or_insert(lang);
    }
    index
});

/// Look up a code in parts 1, 2b, 2t, 3 and 5 (in that order), ignoring case.
pub fn lookup_code(code: &str) -> Option<&'static IsoLang> {
    let code = code.to_ascii_lowercase();
    CODE_INDEX
        .iter()
        .find_map(|index| index.get(code.as_str()).copied())
}

/// Case-insensitive exact match on the English reference name.
pub fn lookup_name(name: &str) -> Option<&'static IsoLang> {
    NAME_INDEX.get(&fold_name(name)).copied()
}

/// Entry by table key (part 3 for languages, part 5 for families).
#[inline]
pub fn get_lang_by_key(key: &str) -> Option<&'static IsoLang> {
    let [.., part3, part5] = &*CODE_INDEX;
    part3.get(key).or_else(|| part5.get(key)).copied()
}

/// The macrolanguage `lang` belongs to, if any.
#[inline]
pub fn macro_of(lang: &IsoLang) -> Option<&'static IsoLang> {
    lang.macrolanguage.and_then(get_lang_by_key)
}

/// `lang` with its missing codes inherited from its macrolanguage.
pub fn with_macro(lang: &IsoLang) -> IsoLang {
    match macro_of(lang) {
        Some(macro_lang) => lang.merged_with(macro_lang),
        None => *lang,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::data::AFA;

    fn lang(key: &str) -> &'static IsoLang {
        get_lang_by_key(key).unwrap_or_else(|| panic!("{key} not registered"))
    }

    #[test]
    fn lookup_code_searches_every_part() {
        assert_eq!(lookup_code("ar"), Some(lang("ara")));
        assert_eq!(lookup_code("ara"), Some(lang("ara")));
        assert_eq!(lookup_code("chi"), Some(lang("zho")));
        assert_eq!(lookup_code("zho"), Some(lang("zho")));
        assert_eq!(lookup_code("cmn"), Some(lang("cmn")));
        assert_eq!(lookup_code("afa"), Some(&AFA));
    }

    #[test]
    fn lookup_code_covers_the_whole_standard() {
        for (part1, part3) in [("nv", "nav"), ("lb", "ltz"), ("yi", "yid"), ("kn", "kan")] {
            assert_eq!(lookup_code(part1), Some(lang(part3)), "{part1}");
            assert_eq!(lookup_code(part3).and_then(|l| l.part1), Some(part1));
        }
        assert_eq!(lookup_code("gd").map(|l| l.name), Some("Scottish Gaelic"));
        assert_eq!(lookup_code("aaa").map(|l| l.name), Some("Ghotuo"));
    }

    #[test]
    fn lookup_code_ignores_case() {
        assert_eq!(lookup_code("AR"), Some(lang("ara")));
        assert_eq!(lookup_code("Hin"), Some(lang("hin")));
    }

    #[test]
    fn lookup_code_rejects_unknown() {
        assert_eq!(lookup_code("fks"), None);
        assert_eq!(lookup_code("qq"), None);
        assert_eq!(lookup_code(""), None);
    }

    #[test]
    fn lookup_name_is_case_insensitive() {
        assert_eq!(lookup_name("Arabic"), Some(lang("ara")));
        assert_eq!(lookup_name("arabic"), Some(lang("ara")));
        assert_eq!(lookup_name("afro-asiatic languages"), Some(&AFA));
        assert_eq!(lookup_name("Elvish"), None);
    }

    #[test]
    fn part2_codes_come_from_iso_639_2() {
        let fra = lang("fra");
        assert_eq!((fra.part2b, fra.part2t), (Some("fre"), Some("fra")));
        let cmn = lang("cmn");
        assert_eq!((cmn.part2b, cmn.part2t), (None, None));
        let ast = lang("ast");
        assert_eq!((ast.part1, ast.part2b, ast.part2t), (None, Some("ast"), Some("ast")));
    }

    #[test]
    fn matching_types_follow_fixed_order() {
        let hin = lang("hin");
        assert_eq!(hin.matching_types("hin").as_slice(), &[
            IsoType::Part2b,
            IsoType::Part2t,
            IsoType::Part3
        ]);
        assert_eq!(hin.matching_types("hi").as_slice(), &[IsoType::Part1]);
        assert_eq!(AFA.matching_types("afa").as_slice(), &[
            IsoType::Part2b,
            IsoType::Part2t,
            IsoType::Part5
        ]);
        assert_eq!(lang("zho").matching_types("chi").as_slice(), &[IsoType::Part2b]);
    }

    #[test]
    fn code_equal_to_name_reports_both() {
        assert_eq!(lang("ewe").matching_types("Ewe").as_slice(), &[
            IsoType::Part2b,
            IsoType::Part2t,
            IsoType::Part3,
            IsoType::Name
        ]);
    }

    #[test]
    fn with_macro_fills_missing_parts_only() {
        let merged = with_macro(lang("cmn"));
        assert_eq!(merged.part1, Some("zh"));
        assert_eq!(merged.part2b, Some("chi"));
        assert_eq!(merged.part2t, Some("zho"));
        assert_eq!(merged.part3, Some("cmn"));
        assert_eq!(merged.part5, None);
        assert_eq!(merged.name, "Mandarin Chinese");

        let merged = with_macro(lang("arq"));
        assert_eq!(merged.part1, Some("ar"));
        assert_eq!(merged.part3, Some("arq"));

        let merged = with_macro(lang("nob"));
        assert_eq!(merged.part1, Some("nb"));
        assert_eq!(merged.part2b, Some("nob"));
    }

    #[test]
    fn with_macro_is_identity_without_macrolanguage() {
        assert_eq!(with_macro(lang("ara")), *lang("ara"));
        assert_eq!(with_macro(&AFA), AFA);
    }

    #[test]
    fn families_have_no_individual_codes() {
        assert!(AFA.is_family());
        assert!(!lang("ara").is_family());
        assert_eq!(AFA.key(), "afa");
        assert_eq!(lang("cmn").key(), "cmn");
    }
}
