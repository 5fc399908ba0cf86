use crate::lang::IsoLang;
use smallvec::SmallVec;
use std::fmt;

/// Code families a query can match, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IsoType {
    Part1,
    Part2b,
    Part2t,
    Part3,
    Part5,
    Name,
    /// Reserved. Locale queries report the families of their base subtag.
    Locale,
}

impl IsoType {
    /// The ISO 639 code parts, in lookup and reporting order.
    pub const CODES: [IsoType; 5] = [
        IsoType::Part1,
        IsoType::Part2b,
        IsoType::Part2t,
        IsoType::Part3,
        IsoType::Part5,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            IsoType::Part1 => "part1",
            IsoType::Part2b => "part2b",
            IsoType::Part2t => "part2t",
            IsoType::Part3 => "part3",
            IsoType::Part5 => "part5",
            IsoType::Name => "name",
            IsoType::Locale => "locale",
        }
    }
}

impl fmt::Display for IsoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type IsoTypes = SmallVec<[IsoType; 6]>;

/// How the query was classified. Independent of which codes matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    Locale,
    PureCode,
    LanguageName,
}

impl QueryType {
    pub const fn as_str(self) -> &'static str {
        match self {
            QueryType::Locale => "locale",
            QueryType::PureCode => "purecode",
            QueryType::LanguageName => "languagename",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical record for a resolved language query.
///
/// Equality compares the language identity only: the five codes and the
/// two display names. `iso_types`, `query` and `querytype` describe how
/// the record was reached, so `"ara"` and `"Arabic"` resolve to equal
/// records.
#[derive(Debug, Clone)]
pub struct LanguageDetails {
    pub iso_639_1: Option<String>,
    pub iso_639_2b: Option<String>,
    pub iso_639_2t: Option<String>,
    pub iso_639_3: Option<String>,
    pub iso_639_5: Option<String>,
    pub english: String,
    pub native: String,
    pub iso_types: IsoTypes,
    pub query: String,
    pub querytype: QueryType,
}

impl LanguageDetails {
    pub(crate) fn new(
        lang: &IsoLang,
        iso_types: IsoTypes,
        (native, english): (String, String),
        query: &str,
        querytype: QueryType,
    ) -> Self {
        let owned = |code: Option<&str>| code.map(str::to_owned);
        Self {
            iso_639_1: owned(lang.part1),
            iso_639_2b: owned(lang.part2b),
            iso_639_2t: owned(lang.part2t),
            iso_639_3: owned(lang.part3),
            iso_639_5: owned(lang.part5),
            english,
            native,
            iso_types,
            query: query.to_owned(),
            querytype,
        }
    }
}

impl PartialEq for LanguageDetails {
    fn eq(&self, other: &Self) -> bool {
        self.iso_639_1 == other.iso_639_1
            && self.iso_639_2b == other.iso_639_2b
            && self.iso_639_2t == other.iso_639_2t
            && self.iso_639_3 == other.iso_639_3
            && self.iso_639_5 == other.iso_639_5
            && self.english == other.english
            && self.native == other.native
    }
}

impl Eq for LanguageDetails {}

impl fmt::Display for LanguageDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = |c: &Option<String>| c.as_deref().unwrap_or("-").to_owned();
        write!(
            f,
            "iso_639_1:{}, iso_639_2b:{}, iso_639_2t:{}, iso_639_3:{}, iso_639_5:{}, english:{}, native:{}",
            code(&self.iso_639_1),
            code(&self.iso_639_2b),
            code(&self.iso_639_2t),
            code(&self.iso_639_3),
            code(&self.iso_639_5),
            self.english,
            self.native,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::get_lang_by_key;
    use smallvec::smallvec;

    fn arabic() -> LanguageDetails {
        LanguageDetails::new(
            get_lang_by_key("ara").unwrap(),
            smallvec![IsoType::Part2b, IsoType::Part2t, IsoType::Part3],
            ("العربية".to_owned(), "Arabic".to_owned()),
            "ara",
            QueryType::PureCode,
        )
    }

    #[test]
    fn provenance_does_not_affect_equality() {
        let mut other = arabic();
        other.query = "Arabic".to_owned();
        other.querytype = QueryType::LanguageName;
        other.iso_types = smallvec![IsoType::Name];
        assert_eq!(arabic(), other);
    }

    #[test]
    fn identity_fields_affect_equality() {
        let mut patched = arabic();
        patched.native = "foo".to_owned();
        assert_ne!(arabic(), patched);

        let mut patched = arabic();
        patched.iso_639_5 = Some("foo".to_owned());
        assert_ne!(arabic(), patched);
    }

    #[test]
    fn display_lists_codes_and_names() {
        let shown = arabic().to_string();
        assert!(shown.starts_with("iso_639_1:ar, iso_639_2b:ara"));
        assert!(shown.contains("iso_639_5:-"));
        assert!(shown.ends_with("english:Arabic, native:العربية"));
    }

    #[test]
    fn type_labels() {
        assert_eq!(IsoType::Part2b.to_string(), "part2b");
        assert_eq!(QueryType::PureCode.to_string(), "purecode");
        assert_eq!(QueryType::LanguageName.as_str(), "languagename");
    }
}
