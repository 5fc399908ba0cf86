// src/names/subtags.rs
// English display names for region (ISO 3166-1 alpha-2 plus the UN M.49
// areas CLDR names) and script (ISO 15924) subtags, as CLDR renders them.

use phf::{Map, phf_map};

pub static REGIONS: Map<&'static str, &'static str> = phf_map! {
    "001" => "world",
    "002" => "Africa",
    "019" => "Americas",
    "142" => "Asia",
    "150" => "Europe",
    "419" => "Latin America",
    "AC" => "Ascension Island",
    "AD" => "Andorra",
    "AE" => "United Arab Emirates",
    "AF" => "Afghanistan",
    "AG" => "Antigua & Barbuda",
    "AI" => "Anguilla",
    "AL" => "Albania",
    "AM" => "Armenia",
    "AO" => "Angola",
    "AQ" => "Antarctica",
    "AR" => "Argentina",
    "AS" => "American Samoa",
    "AT" => "Austria",
    "AU" => "Australia",
    "AW" => "Aruba",
    "AX" => "Åland Islands",
    "AZ" => "Azerbaijan",
    "BA" => "Bosnia & Herzegovina",
    "BB" => "Barbados",
    "BD" => "Bangladesh",
    "BE" => "Belgium",
    "BF" => "Burkina Faso",
    "BG" => "Bulgaria",
    "BH" => "Bahrain",
    "BI" => "Burundi",
    "BJ" => "Benin",
    "BL" => "St. Barthélemy",
    "BM" => "Bermuda",
    "BN" => "Brunei",
    "BO" => "Bolivia",
    "BQ" => "Caribbean Netherlands",
    "BR" => "Brazil",
    "BS" => "Bahamas",
    "BT" => "Bhutan",
    "BV" => "Bouvet Island",
    "BW" => "Botswana",
    "BY" => "Belarus",
    "BZ" => "Belize",
    "CA" => "Canada",
    "CC" => "Cocos (Keeling) Islands",
    "CD" => "Congo - Kinshasa",
    "CF" => "Central African Republic",
    "CG" => "Congo - Brazzaville",
    "CH" => "Switzerland",
    "CI" => "Côte d’Ivoire",
    "CK" => "Cook Islands",
    "CL" => "Chile",
    "CM" => "Cameroon",
    "CN" => "China",
    "CO" => "Colombia",
    "CR" => "Costa Rica",
    "CU" => "Cuba",
    "CV" => "Cape Verde",
    "CW" => "Curaçao",
    "CX" => "Christmas Island",
    "CY" => "Cyprus",
    "CZ" => "Czechia",
    "DE" => "Germany",
    "DG" => "Diego Garcia",
    "DJ" => "Djibouti",
    "DK" => "Denmark",
    "DM" => "Dominica",
    "DO" => "Dominican Republic",
    "DZ" => "Algeria",
    "EA" => "Ceuta & Melilla",
    "EC" => "Ecuador",
    "EE" => "Estonia",
    "EG" => "Egypt",
    "EH" => "Western Sahara",
    "ER" => "Eritrea",
    "ES" => "Spain",
    "ET" => "Ethiopia",
    "EU" => "European Union",
    "FI" => "Finland",
    "FJ" => "Fiji",
    "FK" => "Falkland Islands",
    "FM" => "Micronesia",
    "FO" => "Faroe Islands",
    "FR" => "France",
    "GA" => "Gabon",
    "GB" => "United Kingdom",
    "GD" => "Grenada",
    "GE" => "Georgia",
    "GF" => "French Guiana",
    "GG" => "Guernsey",
    "GH" => "Ghana",
    "GI" => "Gibraltar",
    "GL" => "Greenland",
    "GM" => "Gambia",
    "GN" => "Guinea",
    "GP" => "Guadeloupe",
    "GQ" => "Equatorial Guinea",
    "GR" => "Greece",
    "GS" => "South Georgia & South Sandwich Islands",
    "GT" => "Guatemala",
    "GU" => "Guam",
    "GW" => "Guinea-Bissau",
    "GY" => "Guyana",
    "HK" => "Hong Kong SAR China",
    "HM" => "Heard & McDonald Islands",
    "HN" => "Honduras",
    "HR" => "Croatia",
    "HT" => "Haiti",
    "HU" => "Hungary",
    "IC" => "Canary Islands",
    "ID" => "Indonesia",
    "IE" => "Ireland",
    "IL" => "Israel",
    "IM" => "Isle of Man",
    "IN" => "India",
    "IO" => "British Indian Ocean Territory",
    "IQ" => "Iraq",
    "IR" => "Iran",
    "IS" => "Iceland",
    "IT" => "Italy",
    "JE" => "Jersey",
    "JM" => "Jamaica",
    "JO" => "Jordan",
    "JP" => "Japan",
    "KE" => "Kenya",
    "KG" => "Kyrgyzstan",
    "KH" => "Cambodia",
    "KI" => "Kiribati",
    "KM" => "Comoros",
    "KN" => "St. Kitts & Nevis",
    "KP" => "North Korea",
    "KR" => "South Korea",
    "KW" => "Kuwait",
    "KY" => "Cayman Islands",
    "KZ" => "Kazakhstan",
    "LA" => "Laos",
    "LB" => "Lebanon",
    "LC" => "St. Lucia",
    "LI" => "Liechtenstein",
    "LK" => "Sri Lanka",
    "LR" => "Liberia",
    "LS" => "Lesotho",
    "LT" => "Lithuania",
    "LU" => "Luxembourg",
    "LV" => "Latvia",
    "LY" => "Libya",
    "MA" => "Morocco",
    "MC" => "Monaco",
    "MD" => "Moldova",
    "ME" => "Montenegro",
    "MF" => "St. Martin",
    "MG" => "Madagascar",
    "MH" => "Marshall Islands",
    "MK" => "North Macedonia",
    "ML" => "Mali",
    "MM" => "Myanmar (Burma)",
    "MN" => "Mongolia",
    "MO" => "Macao SAR China",
    "MP" => "Northern Mariana Islands",
    "MQ" => "Martinique",
    "MR" => "Mauritania",
    "MS" => "Montserrat",
    "MT" => "Malta",
    "MU" => "Mauritius",
    "MV" => "Maldives",
    "MW" => "Malawi",
    "MX" => "Mexico",
    "MY" => "Malaysia",
    "MZ" => "Mozambique",
    "NA" => "Namibia",
    "NC" => "New Caledonia",
    "NE" => "Niger",
    "NF" => "Norfolk Island",
    "NG" => "Nigeria",
    "NI" => "Nicaragua",
    "NL" => "Netherlands",
    "NO" => "Norway",
    "NP" => "Nepal",
    "NR" => "Nauru",
    "NU" => "Niue",
    "NZ" => "New Zealand",
    "OM" => "Oman",
    "PA" => "Panama",
    "PE" => "Peru",
    "PF" => "French Polynesia",
    "PG" => "Papua New Guinea",
    "PH" => "Philippines",
    "PK" => "Pakistan",
    "PL" => "Poland",
    "PM" => "St. Pierre & Miquelon",
    "PN" => "Pitcairn Islands",
    "PR" => "Puerto Rico",
    "PS" => "Palestinian Territories",
    "PT" => "Portugal",
    "PW" => "Palau",
    "PY" => "Paraguay",
    "QA" => "Qatar",
    "RE" => "Réunion",
    "RO" => "Romania",
    "RS" => "Serbia",
    "RU" => "Russia",
    "RW" => "Rwanda",
    "SA" => "Saudi Arabia",
    "SB" => "Solomon Islands",
    "SC" => "Seychelles",
    "SD" => "Sudan",
    "SE" => "Sweden",
    "SG" => "Singapore",
    "SH" => "St. Helena",
    "SI" => "Slovenia",
    "SJ" => "Svalbard & Jan Mayen",
    "SK" => "Slovakia",
    "SL" => "Sierra Leone",
    "SM" => "San Marino",
    "SN" => "Senegal",
    "SO" => "Somalia",
    "SR" => "Suriname",
    "SS" => "South Sudan",
    "ST" => "São Tomé & Príncipe",
    "SV" => "El Salvador",
    "SX" => "Sint Maarten",
    "SY" => "Syria",
    "SZ" => "Eswatini",
    "TA" => "Tristan da Cunha",
    "TC" => "Turks & Caicos Islands",
    "TD" => "Chad",
    "TF" => "French Southern Territories",
    "TG" => "Togo",
    "TH" => "Thailand",
    "TJ" => "Tajikistan",
    "TK" => "Tokelau",
    "TL" => "Timor-Leste",
    "TM" => "Turkmenistan",
    "TN" => "Tunisia",
    "TO" => "Tonga",
    "TR" => "Türkiye",
    "TT" => "Trinidad & Tobago",
    "TV" => "Tuvalu",
    "TW" => "Taiwan",
    "TZ" => "Tanzania",
    "UA" => "Ukraine",
    "UG" => "Uganda",
    "UM" => "U.S. Outlying Islands",
    "UN" => "United Nations",
    "US" => "United States",
    "UY" => "Uruguay",
    "UZ" => "Uzbekistan",
    "VA" => "Vatican City",
    "VC" => "St. Vincent & Grenadines",
    "VE" => "Venezuela",
    "VG" => "British Virgin Islands",
    "VI" => "U.S. Virgin Islands",
    "VN" => "Vietnam",
    "VU" => "Vanuatu",
    "WF" => "Wallis & Futuna",
    "WS" => "Samoa",
    "XK" => "Kosovo",
    "YE" => "Yemen",
    "YT" => "Mayotte",
    "ZA" => "South Africa",
    "ZM" => "Zambia",
    "ZW" => "Zimbabwe",
};

pub static SCRIPTS: Map<&'static str, &'static str> = phf_map! {
    "Adlm" => "Adlam",
    "Aghb" => "Caucasian Albanian",
    "Ahom" => "Ahom",
    "Arab" => "Arabic",
    "Aran" => "Nastaliq",
    "Armi" => "Imperial Aramaic",
    "Armn" => "Armenian",
    "Avst" => "Avestan",
    "Bali" => "Balinese",
    "Bamu" => "Bamum",
    "Bass" => "Bassa Vah",
    "Batk" => "Batak",
    "Beng" => "Bangla",
    "Bhks" => "Bhaiksuki",
    "Bopo" => "Bopomofo",
    "Brah" => "Brahmi",
    "Brai" => "Braille",
    "Bugi" => "Buginese",
    "Buhd" => "Buhid",
    "Cakm" => "Chakma",
    "Cans" => "Unified Canadian Aboriginal Syllabics",
    "Cari" => "Carian",
    "Cham" => "Cham",
    "Cher" => "Cherokee",
    "Chrs" => "Chorasmian",
    "Copt" => "Coptic",
    "Cpmn" => "Cypro-Minoan",
    "Cprt" => "Cypriot",
    "Cyrl" => "Cyrillic",
    "Deva" => "Devanagari",
    "Diak" => "Dives Akuru",
    "Dogr" => "Dogra",
    "Dsrt" => "Deseret",
    "Dupl" => "Duployan shorthand",
    "Egyp" => "Egyptian hieroglyphs",
    "Elba" => "Elbasan",
    "Elym" => "Elymaic",
    "Ethi" => "Ethiopic",
    "Geor" => "Georgian",
    "Glag" => "Glagolitic",
    "Gong" => "Gunjala Gondi",
    "Gonm" => "Masaram Gondi",
    "Goth" => "Gothic",
    "Gran" => "Grantha",
    "Grek" => "Greek",
    "Gujr" => "Gujarati",
    "Guru" => "Gurmukhi",
    "Hanb" => "Han with Bopomofo",
    "Hang" => "Hangul",
    "Hani" => "Han",
    "Hano" => "Hanunoo",
    "Hans" => "Simplified",
    "Hant" => "Traditional",
    "Hatr" => "Hatran",
    "Hebr" => "Hebrew",
    "Hira" => "Hiragana",
    "Hluw" => "Anatolian Hieroglyphs",
    "Hmng" => "Pahawh Hmong",
    "Hmnp" => "Nyiakeng Puachue Hmong",
    "Hrkt" => "Japanese syllabaries",
    "Hung" => "Old Hungarian",
    "Ital" => "Old Italic",
    "Jamo" => "Jamo",
    "Java" => "Javanese",
    "Jpan" => "Japanese",
    "Kali" => "Kayah Li",
    "Kana" => "Katakana",
    "Kawi" => "Kawi",
    "Khar" => "Kharoshthi",
    "Khmr" => "Khmer",
    "Khoj" => "Khojki",
    "Kits" => "Khitan small script",
    "Knda" => "Kannada",
    "Kore" => "Korean",
    "Kthi" => "Kaithi",
    "Lana" => "Lanna",
    "Laoo" => "Lao",
    "Latn" => "Latin",
    "Lepc" => "Lepcha",
    "Limb" => "Limbu",
    "Lina" => "Linear A",
    "Linb" => "Linear B",
    "Lisu" => "Fraser",
    "Lyci" => "Lycian",
    "Lydi" => "Lydian",
    "Mahj" => "Mahajani",
    "Maka" => "Makasar",
    "Mand" => "Mandaean",
    "Mani" => "Manichaean",
    "Marc" => "Marchen",
    "Medf" => "Medefaidrin",
    "Mend" => "Mende",
    "Merc" => "Meroitic Cursive",
    "Mero" => "Meroitic",
    "Mlym" => "Malayalam",
    "Modi" => "Modi",
    "Mong" => "Mongolian",
    "Mroo" => "Mro",
    "Mtei" => "Meitei Mayek",
    "Mult" => "Multani",
    "Mymr" => "Myanmar",
    "Nagm" => "Nag Mundari",
    "Nand" => "Nandinagari",
    "Narb" => "Old North Arabian",
    "Nbat" => "Nabataean",
    "Newa" => "Newa",
    "Nkoo" => "N’Ko",
    "Nshu" => "Nüshu",
    "Ogam" => "Ogham",
    "Olck" => "Ol Chiki",
    "Orkh" => "Orkhon",
    "Orya" => "Odia",
    "Osge" => "Osage",
    "Osma" => "Osmanya",
    "Ougr" => "Old Uyghur",
    "Palm" => "Palmyrene",
    "Pauc" => "Pau Cin Hau",
    "Perm" => "Old Permic",
    "Phag" => "Phags-pa",
    "Phli" => "Inscriptional Pahlavi",
    "Phlp" => "Psalter Pahlavi",
    "Phnx" => "Phoenician",
    "Plrd" => "Pollard Phonetic",
    "Prti" => "Inscriptional Parthian",
    "Rjng" => "Rejang",
    "Rohg" => "Hanifi",
    "Runr" => "Runic",
    "Samr" => "Samaritan",
    "Sarb" => "Old South Arabian",
    "Saur" => "Saurashtra",
    "Sgnw" => "SignWriting",
    "Shaw" => "Shavian",
    "Shrd" => "Sharada",
    "Sidd" => "Siddham",
    "Sind" => "Khudawadi",
    "Sinh" => "Sinhala",
    "Sogd" => "Sogdian",
    "Sogo" => "Old Sogdian",
    "Sora" => "Sora Sompeng",
    "Soyo" => "Soyombo",
    "Sund" => "Sundanese",
    "Sylo" => "Syloti Nagri",
    "Syrc" => "Syriac",
    "Tagb" => "Tagbanwa",
    "Takr" => "Takri",
    "Tale" => "Tai Le",
    "Talu" => "New Tai Lue",
    "Taml" => "Tamil",
    "Tang" => "Tangut",
    "Tavt" => "Tai Viet",
    "Telu" => "Telugu",
    "Tfng" => "Tifinagh",
    "Tglg" => "Tagalog",
    "Thaa" => "Thaana",
    "Thai" => "Thai",
    "Tibt" => "Tibetan",
    "Tirh" => "Tirhuta",
    "Tnsa" => "Tangsa",
    "Toto" => "Toto",
    "Ugar" => "Ugaritic",
    "Vaii" => "Vai",
    "Vith" => "Vithkuqi",
    "Wara" => "Varang Kshiti",
    "Wcho" => "Wancho",
    "Xpeo" => "Old Persian",
    "Xsux" => "Sumero-Akkadian Cuneiform",
    "Yezi" => "Yezidi",
    "Yiii" => "Yi",
    "Zanb" => "Zanabazar Square",
    "Zinh" => "Inherited",
    "Zmth" => "Mathematical Notation",
    "Zsye" => "Emoji",
    "Zsym" => "Symbols",
    "Zxxx" => "Unwritten",
    "Zyyy" => "Common",
    "Zzzz" => "Unknown Script",
};

#[inline]
pub fn region_name(region: &str) -> Option<&'static str> {
    REGIONS.get(region).copied()
}

#[inline]
pub fn script_name(script: &str) -> Option<&'static str> {
    SCRIPTS.get(script).copied()
}
