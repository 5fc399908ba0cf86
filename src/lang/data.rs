use crate::lang::IsoLang;

use phf::{Map, phf_map};

macro_rules! part2 {
    (yes, $code:literal) => {
        Some($code)
    };
    (no, $code:literal) => {
        None
    };
}

/// ---------------------------------------------------------------------------
///    Macro – generates family constants and the ordered family slice
/// ---------------------------------------------------------------------------
macro_rules! define_families {
    ($(
        $ident:ident, $code:literal, $name:literal, iso_639_2: $p2:ident
    );* $(;)?) => {
        $(
            pub const $ident: IsoLang = IsoLang {
                part1: None,
                part2b: part2!($p2, $code),
                part2t: part2!($p2, $code),
                part3: None,
                part5: Some($code),
                name: $name,
                macrolanguage: None,
            };
        )*

        /// ISO 639-5 rows in code order. They follow the 639-3 languages in
        /// the registry.
        pub static FAMILIES: &[IsoLang] = &[$($ident),*];
    };
}

// ---------------------------------------------------------------------------
//    Language families and groups (ISO 639-5)
//    Collective codes shared with ISO 639-2 carry the same 2b/2t code.
// ---------------------------------------------------------------------------
define_families! {
    AAV, "aav", "Austro-Asiatic languages",                iso_639_2: no;
    AFA, "afa", "Afro-Asiatic languages",                  iso_639_2: yes;
    ALG, "alg", "Algonquian languages",                    iso_639_2: yes;
    ALV, "alv", "Atlantic-Congo languages",                iso_639_2: no;
    APA, "apa", "Apache languages",                        iso_639_2: yes;
    AQA, "aqa", "Alacalufan languages",                    iso_639_2: no;
    AQL, "aql", "Algic languages",                         iso_639_2: no;
    ART, "art", "Artificial languages",                    iso_639_2: yes;
    ATH, "ath", "Athapascan languages",                    iso_639_2: yes;
    AUF, "auf", "Arauan languages",                        iso_639_2: no;
    AUS, "aus", "Australian languages",                    iso_639_2: yes;
    AWD, "awd", "Arawakan languages",                      iso_639_2: no;
    AZC, "azc", "Uto-Aztecan languages",                   iso_639_2: no;
    BAD, "bad", "Banda languages",                         iso_639_2: yes;
    BAI, "bai", "Bamileke languages",                      iso_639_2: yes;
    BAT, "bat", "Baltic languages",                        iso_639_2: yes;
    BER, "ber", "Berber languages",                        iso_639_2: yes;
    BIH, "bih", "Bihari languages",                        iso_639_2: yes;
    BNT, "bnt", "Bantu languages",                         iso_639_2: yes;
    BTK, "btk", "Batak languages",                         iso_639_2: yes;
    CAI, "cai", "Central American Indian languages",       iso_639_2: yes;
    CAU, "cau", "Caucasian languages",                     iso_639_2: yes;
    CBA, "cba", "Chibchan languages",                      iso_639_2: no;
    CCN, "ccn", "North Caucasian languages",               iso_639_2: no;
    CCS, "ccs", "South Caucasian languages",               iso_639_2: no;
    CDC, "cdc", "Chadic languages",                        iso_639_2: no;
    CDD, "cdd", "Caddoan languages",                       iso_639_2: no;
    CEL, "cel", "Celtic languages",                        iso_639_2: yes;
    CMC, "cmc", "Chamic languages",                        iso_639_2: yes;
    CPE, "cpe", "Creoles and pidgins, English-based",      iso_639_2: yes;
    CPF, "cpf", "Creoles and pidgins, French-based",       iso_639_2: yes;
    CPP, "cpp", "Creoles and pidgins, Portuguese-based",   iso_639_2: yes;
    CRP, "crp", "Creoles and pidgins",                     iso_639_2: yes;
    CSU, "csu", "Central Sudanic languages",               iso_639_2: no;
    CUS, "cus", "Cushitic languages",                      iso_639_2: yes;
    DAY, "day", "Land Dayak languages",                    iso_639_2: yes;
    DMN, "dmn", "Mande languages",                         iso_639_2: no;
    DRA, "dra", "Dravidian languages",                     iso_639_2: yes;
    EGX, "egx", "Egyptian languages",                      iso_639_2: no;
    ESX, "esx", "Eskimo-Aleut languages",                  iso_639_2: no;
    EUQ, "euq", "Basque (family)",                         iso_639_2: no;
    FIU, "fiu", "Finno-Ugrian languages",                  iso_639_2: yes;
    FOX, "fox", "Formosan languages",                      iso_639_2: no;
    GEM, "gem", "Germanic languages",                      iso_639_2: yes;
    GME, "gme", "East Germanic languages",                 iso_639_2: no;
    GMQ, "gmq", "North Germanic languages",                iso_639_2: no;
    GMW, "gmw", "West Germanic languages",                 iso_639_2: no;
    GRK, "grk", "Greek languages",                         iso_639_2: no;
    HMX, "hmx", "Hmong-Mien languages",                    iso_639_2: no;
    HOK, "hok", "Hokan languages",                         iso_639_2: no;
    HYX, "hyx", "Armenian (family)",                       iso_639_2: no;
    IIR, "iir", "Indo-Iranian languages",                  iso_639_2: no;
    IJO, "ijo", "Ijo languages",                           iso_639_2: yes;
    INC, "inc", "Indic languages",                         iso_639_2: yes;
    INE, "ine", "Indo-European languages",                 iso_639_2: yes;
    IRA, "ira", "Iranian languages",                       iso_639_2: yes;
    IRO, "iro", "Iroquoian languages",                     iso_639_2: yes;
    ITC, "itc", "Italic languages",                        iso_639_2: no;
    JPX, "jpx", "Japanese (family)",                       iso_639_2: no;
    KAR, "kar", "Karen languages",                         iso_639_2: yes;
    KDO, "kdo", "Kordofanian languages",                   iso_639_2: no;
    KHI, "khi", "Khoisan languages",                       iso_639_2: yes;
    KRO, "kro", "Kru languages",                           iso_639_2: yes;
    MAP, "map", "Austronesian languages",                  iso_639_2: yes;
    MKH, "mkh", "Mon-Khmer languages",                     iso_639_2: yes;
    MNO, "mno", "Manobo languages",                        iso_639_2: yes;
    MUN, "mun", "Munda languages",                         iso_639_2: yes;
    MYN, "myn", "Mayan languages",                         iso_639_2: yes;
    NAH, "nah", "Nahuatl languages",                       iso_639_2: yes;
    NAI, "nai", "North American Indian languages",         iso_639_2: yes;
    NGF, "ngf", "Trans-New Guinea languages",              iso_639_2: no;
    NIC, "nic", "Niger-Kordofanian languages",             iso_639_2: yes;
    NUB, "nub", "Nubian languages",                        iso_639_2: yes;
    OMQ, "omq", "Oto-Manguean languages",                  iso_639_2: no;
    OMV, "omv", "Omotic languages",                        iso_639_2: no;
    OTO, "oto", "Otomian languages",                       iso_639_2: yes;
    PAA, "paa", "Papuan languages",                        iso_639_2: yes;
    PHI, "phi", "Philippine languages",                    iso_639_2: yes;
    PLF, "plf", "Central Malayo-Polynesian languages",     iso_639_2: no;
    POZ, "poz", "Malayo-Polynesian languages",             iso_639_2: no;
    PQE, "pqe", "Eastern Malayo-Polynesian languages",     iso_639_2: no;
    PQW, "pqw", "Western Malayo-Polynesian languages",     iso_639_2: no;
    PRA, "pra", "Prakrit languages",                       iso_639_2: yes;
    QWE, "qwe", "Quechuan (family)",                       iso_639_2: no;
    ROA, "roa", "Romance languages",                       iso_639_2: yes;
    SAI, "sai", "South American Indian languages",         iso_639_2: yes;
    SAL, "sal", "Salishan languages",                      iso_639_2: yes;
    SDV, "sdv", "Eastern Sudanic languages",               iso_639_2: no;
    SEM, "sem", "Semitic languages",                       iso_639_2: yes;
    SGN, "sgn", "Sign languages",                          iso_639_2: yes;
    SIO, "sio", "Siouan languages",                        iso_639_2: yes;
    SIT, "sit", "Sino-Tibetan languages",                  iso_639_2: yes;
    SLA, "sla", "Slavic languages",                        iso_639_2: yes;
    SMI, "smi", "Sami languages",                          iso_639_2: yes;
    SON, "son", "Songhai languages",                       iso_639_2: yes;
    SQJ, "sqj", "Albanian languages",                      iso_639_2: no;
    SSA, "ssa", "Nilo-Saharan languages",                  iso_639_2: yes;
    SYD, "syd", "Samoyedic languages",                     iso_639_2: no;
    TAI, "tai", "Tai languages",                           iso_639_2: yes;
    TBQ, "tbq", "Tibeto-Burman languages",                 iso_639_2: no;
    TRK, "trk", "Turkic languages",                        iso_639_2: no;
    TUP, "tup", "Tupi languages",                          iso_639_2: yes;
    TUT, "tut", "Altaic languages",                        iso_639_2: yes;
    TUW, "tuw", "Tungus languages",                        iso_639_2: no;
    URJ, "urj", "Uralic languages",                        iso_639_2: no;
    WAK, "wak", "Wakashan languages",                      iso_639_2: yes;
    WEN, "wen", "Sorbian languages",                       iso_639_2: yes;
    XGN, "xgn", "Mongolian languages",                     iso_639_2: no;
    XND, "xnd", "Na-Dene languages",                       iso_639_2: no;
    YPK, "ypk", "Yupik languages",                         iso_639_2: yes;
    ZHX, "zhx", "Chinese (family)",                        iso_639_2: no;
    ZLE, "zle", "East Slavic languages",                   iso_639_2: no;
    ZLS, "zls", "South Slavic languages",                  iso_639_2: no;
    ZLW, "zlw", "West Slavic languages",                   iso_639_2: no;
    ZND, "znd", "Zande languages",                         iso_639_2: yes;
}

// ---------------------------------------------------------------------------
//    ISO 639-2 bibliographic codes, keyed by part 3 code.
//    Every language in ISO 639-2 has a terminology code equal to its part 3
//    code; only the 2b column can differ.
// ---------------------------------------------------------------------------
pub static ISO_639_2B: Map<&'static str, &'static str> = phf_map! {
    "aar" => "aar", "abk" => "abk", "ace" => "ace", "ach" => "ach", "ada" => "ada",
    "ady" => "ady", "afh" => "afh", "afr" => "afr", "ain" => "ain", "aka" => "aka",
    "akk" => "akk", "ale" => "ale", "alt" => "alt", "amh" => "amh", "ang" => "ang",
    "anp" => "anp", "ara" => "ara", "arc" => "arc", "arg" => "arg", "arn" => "arn",
    "arp" => "arp", "arw" => "arw", "asm" => "asm", "ast" => "ast", "ava" => "ava",
    "ave" => "ave", "awa" => "awa", "aym" => "aym", "aze" => "aze", "bak" => "bak",
    "bal" => "bal", "bam" => "bam", "ban" => "ban", "bas" => "bas", "bej" => "bej",
    "bel" => "bel", "bem" => "bem", "ben" => "ben", "bho" => "bho", "bik" => "bik",
    "bin" => "bin", "bis" => "bis", "bla" => "bla", "bod" => "tib", "bos" => "bos",
    "bra" => "bra", "bre" => "bre", "bua" => "bua", "bug" => "bug", "bul" => "bul",
    "byn" => "byn", "cad" => "cad", "car" => "car", "cat" => "cat", "ceb" => "ceb",
    "ces" => "cze", "cha" => "cha", "chb" => "chb", "che" => "che", "chg" => "chg",
    "chk" => "chk", "chm" => "chm", "chn" => "chn", "cho" => "cho", "chp" => "chp",
    "chr" => "chr", "chu" => "chu", "chv" => "chv", "chy" => "chy", "cnr" => "cnr",
    "cop" => "cop", "cor" => "cor", "cos" => "cos", "cre" => "cre", "crh" => "crh",
    "csb" => "csb", "cym" => "wel", "dak" => "dak", "dan" => "dan", "dar" => "dar",
    "del" => "del", "den" => "den", "deu" => "ger", "dgr" => "dgr", "din" => "din",
    "div" => "div", "doi" => "doi", "dsb" => "dsb", "dua" => "dua", "dum" => "dum",
    "dyu" => "dyu", "dzo" => "dzo", "efi" => "efi", "egy" => "egy", "eka" => "eka",
    "ell" => "gre", "elx" => "elx", "eng" => "eng", "enm" => "enm", "epo" => "epo",
    "est" => "est", "eus" => "baq", "ewe" => "ewe", "ewo" => "ewo", "fan" => "fan",
    "fao" => "fao", "fas" => "per", "fat" => "fat", "fij" => "fij", "fil" => "fil",
    "fin" => "fin", "fon" => "fon", "fra" => "fre", "frm" => "frm", "fro" => "fro",
    "frr" => "frr", "frs" => "frs", "fry" => "fry", "ful" => "ful", "fur" => "fur",
    "gaa" => "gaa", "gay" => "gay", "gba" => "gba", "gez" => "gez", "gil" => "gil",
    "gla" => "gla", "gle" => "gle", "glg" => "glg", "glv" => "glv", "gmh" => "gmh",
    "goh" => "goh", "gon" => "gon", "gor" => "gor", "got" => "got", "grb" => "grb",
    "grc" => "grc", "grn" => "grn", "gsw" => "gsw", "guj" => "guj", "gwi" => "gwi",
    "hai" => "hai", "hat" => "hat", "hau" => "hau", "haw" => "haw", "heb" => "heb",
    "her" => "her", "hil" => "hil", "hin" => "hin", "hit" => "hit", "hmn" => "hmn",
    "hmo" => "hmo", "hrv" => "hrv", "hsb" => "hsb", "hun" => "hun", "hup" => "hup",
    "hye" => "arm", "iba" => "iba", "ibo" => "ibo", "ido" => "ido", "iii" => "iii",
    "iku" => "iku", "ile" => "ile", "ilo" => "ilo", "ina" => "ina", "ind" => "ind",
    "inh" => "inh", "ipk" => "ipk", "isl" => "ice", "ita" => "ita", "jav" => "jav",
    "jbo" => "jbo", "jpn" => "jpn", "jpr" => "jpr", "jrb" => "jrb", "kaa" => "kaa",
    "kab" => "kab", "kac" => "kac", "kal" => "kal", "kam" => "kam", "kan" => "kan",
    "kas" => "kas", "kat" => "geo", "kau" => "kau", "kaw" => "kaw", "kaz" => "kaz",
    "kbd" => "kbd", "kha" => "kha", "khm" => "khm", "kho" => "kho", "kik" => "kik",
    "kin" => "kin", "kir" => "kir", "kmb" => "kmb", "kok" => "kok", "kom" => "kom",
    "kon" => "kon", "kor" => "kor", "kos" => "kos", "kpe" => "kpe", "krc" => "krc",
    "krl" => "krl", "kru" => "kru", "kua" => "kua", "kum" => "kum", "kur" => "kur",
    "kut" => "kut", "lad" => "lad", "lah" => "lah", "lam" => "lam", "lao" => "lao",
    "lat" => "lat", "lav" => "lav", "lez" => "lez", "lim" => "lim", "lin" => "lin",
    "lit" => "lit", "lol" => "lol", "loz" => "loz", "ltz" => "ltz", "lua" => "lua",
    "lub" => "lub", "lug" => "lug", "lui" => "lui", "lun" => "lun", "luo" => "luo",
    "lus" => "lus", "mad" => "mad", "mag" => "mag", "mah" => "mah", "mai" => "mai",
    "mak" => "mak", "mal" => "mal", "man" => "man", "mar" => "mar", "mas" => "mas",
    "mdf" => "mdf", "mdr" => "mdr", "men" => "men", "mga" => "mga", "mic" => "mic",
    "min" => "min", "mis" => "mis", "mkd" => "mac", "mlg" => "mlg", "mlt" => "mlt",
    "mnc" => "mnc", "mni" => "mni", "moh" => "moh", "mon" => "mon", "mos" => "mos",
    "mri" => "mao", "msa" => "may", "mul" => "mul", "mus" => "mus", "mwl" => "mwl",
    "mwr" => "mwr", "mya" => "bur", "myv" => "myv", "nap" => "nap", "nau" => "nau",
    "nav" => "nav", "nbl" => "nbl", "nde" => "nde", "ndo" => "ndo", "nds" => "nds",
    "nep" => "nep", "new" => "new", "nia" => "nia", "niu" => "niu", "nld" => "dut",
    "nno" => "nno", "nob" => "nob", "nog" => "nog", "non" => "non", "nor" => "nor",
    "nqo" => "nqo", "nso" => "nso", "nwc" => "nwc", "nya" => "nya", "nym" => "nym",
    "nyn" => "nyn", "nyo" => "nyo", "nzi" => "nzi", "oci" => "oci", "oji" => "oji",
    "ori" => "ori", "orm" => "orm", "osa" => "osa", "oss" => "oss", "ota" => "ota",
    "pag" => "pag", "pal" => "pal", "pam" => "pam", "pan" => "pan", "pap" => "pap",
    "pau" => "pau", "peo" => "peo", "phn" => "phn", "pli" => "pli", "pol" => "pol",
    "pon" => "pon", "por" => "por", "pro" => "pro", "pus" => "pus", "que" => "que",
    "raj" => "raj", "rap" => "rap", "rar" => "rar", "roh" => "roh", "rom" => "rom",
    "ron" => "rum", "run" => "run", "rup" => "rup", "rus" => "rus", "sad" => "sad",
    "sag" => "sag", "sah" => "sah", "sam" => "sam", "san" => "san", "sas" => "sas",
    "sat" => "sat", "scn" => "scn", "sco" => "sco", "sel" => "sel", "sga" => "sga",
    "shn" => "shn", "sid" => "sid", "sin" => "sin", "slk" => "slo", "slv" => "slv",
    "sma" => "sma", "sme" => "sme", "smj" => "smj", "smn" => "smn", "smo" => "smo",
    "sms" => "sms", "sna" => "sna", "snd" => "snd", "snk" => "snk", "sog" => "sog",
    "som" => "som", "sot" => "sot", "spa" => "spa", "sqi" => "alb", "srd" => "srd",
    "srn" => "srn", "srp" => "srp", "srr" => "srr", "ssw" => "ssw", "suk" => "suk",
    "sun" => "sun", "sus" => "sus", "sux" => "sux", "swa" => "swa", "swe" => "swe",
    "syc" => "syc", "syr" => "syr", "tah" => "tah", "tam" => "tam", "tat" => "tat",
    "tel" => "tel", "tem" => "tem", "ter" => "ter", "tet" => "tet", "tgk" => "tgk",
    "tgl" => "tgl", "tha" => "tha", "tig" => "tig", "tir" => "tir", "tiv" => "tiv",
    "tkl" => "tkl", "tlh" => "tlh", "tli" => "tli", "tmh" => "tmh", "tog" => "tog",
    "ton" => "ton", "tpi" => "tpi", "tsi" => "tsi", "tsn" => "tsn", "tso" => "tso",
    "tuk" => "tuk", "tum" => "tum", "tur" => "tur", "tvl" => "tvl", "twi" => "twi",
    "tyv" => "tyv", "udm" => "udm", "uga" => "uga", "uig" => "uig", "ukr" => "ukr",
    "umb" => "umb", "und" => "und", "urd" => "urd", "uzb" => "uzb", "vai" => "vai",
    "ven" => "ven", "vie" => "vie", "vol" => "vol", "vot" => "vot", "wal" => "wal",
    "war" => "war", "was" => "was", "wln" => "wln", "wol" => "wol", "xal" => "xal",
    "xho" => "xho", "yao" => "yao", "yap" => "yap", "yid" => "yid", "yor" => "yor",
    "zap" => "zap", "zbl" => "zbl", "zen" => "zen", "zgh" => "zgh", "zha" => "zha",
    "zho" => "chi", "zul" => "zul", "zun" => "zun", "zxx" => "zxx", "zza" => "zza",
};

// ---------------------------------------------------------------------------
//    Individual languages mapped to the macrolanguage they belong to.
// ---------------------------------------------------------------------------
pub static MACROLANGUAGES: Map<&'static str, &'static str> = phf_map! {
    "fat" => "aka", "twi" => "aka",

    "aao" => "ara", "abh" => "ara", "abv" => "ara", "acm" => "ara", "acq" => "ara",
    "acw" => "ara", "acx" => "ara", "acy" => "ara", "adf" => "ara", "aeb" => "ara",
    "aec" => "ara", "afb" => "ara", "apc" => "ara", "apd" => "ara", "arb" => "ara",
    "arq" => "ara", "ars" => "ara", "ary" => "ara", "arz" => "ara", "auz" => "ara",
    "avl" => "ara", "ayh" => "ara", "ayl" => "ara", "ayn" => "ara", "ayp" => "ara",
    "pga" => "ara", "shu" => "ara", "ssh" => "ara",

    "ayc" => "aym", "ayr" => "aym",

    "azb" => "aze", "azj" => "aze",

    "bcc" => "bal", "bgn" => "bal", "bgp" => "bal",

    "bcl" => "bik", "bln" => "bik", "bto" => "bik", "cts" => "bik", "fbl" => "bik",
    "lbl" => "bik", "rbl" => "bik", "ubl" => "bik",

    "bxm" => "bua", "bxr" => "bua", "bxu" => "bua",

    "mhr" => "chm", "mrj" => "chm",

    "crj" => "cre", "crk" => "cre", "crl" => "cre", "crm" => "cre", "csw" => "cre",
    "cwd" => "cre",

    "umu" => "del", "unm" => "del",

    "scs" => "den", "xsl" => "den",

    "dib" => "din", "dik" => "din", "dip" => "din", "diw" => "din", "dks" => "din",

    "dgo" => "doi", "xnr" => "doi",

    "ekk" => "est", "vro" => "est",

    "pes" => "fas", "prs" => "fas",

    "ffm" => "ful", "fub" => "ful", "fuc" => "ful", "fue" => "ful", "fuf" => "ful",
    "fuh" => "ful", "fui" => "ful", "fuq" => "ful", "fuv" => "ful",

    "bdt" => "gba", "gbp" => "gba", "gbq" => "gba", "gmm" => "gba", "gso" => "gba",
    "gya" => "gba",

    "esg" => "gon", "gno" => "gon", "wsg" => "gon",

    "gbo" => "grb", "gec" => "grb", "grj" => "grb", "grv" => "grb", "gry" => "grb",

    "gnw" => "grn", "gug" => "grn", "gui" => "grn", "gun" => "grn", "nhd" => "grn",

    "hax" => "hai", "hdn" => "hai",

    "bos" => "hbs", "cnr" => "hbs", "hrv" => "hbs", "srp" => "hbs",

    "cqd" => "hmn", "hea" => "hmn", "hma" => "hmn", "hmc" => "hmn", "hmd" => "hmn",
    "hme" => "hmn", "hmg" => "hmn", "hmh" => "hmn", "hmi" => "hmn", "hmj" => "hmn",
    "hml" => "hmn", "hmm" => "hmn", "hmp" => "hmn", "hmq" => "hmn", "hms" => "hmn",
    "hmw" => "hmn", "hmy" => "hmn", "hmz" => "hmn", "hnj" => "hmn", "hrm" => "hmn",
    "huj" => "hmn", "mmr" => "hmn", "muq" => "hmn", "mww" => "hmn", "sfm" => "hmn",

    "ike" => "iku", "ikt" => "iku",

    "esi" => "ipk", "esk" => "ipk",

    "aju" => "jrb", "jye" => "jrb", "yhd" => "jrb", "yud" => "jrb",

    "kby" => "kau", "knc" => "kau", "krt" => "kau",

    "enb" => "kln", "eyo" => "kln", "niq" => "kln", "oki" => "kln", "pko" => "kln",
    "sgc" => "kln", "spy" => "kln", "tec" => "kln", "tuy" => "kln",

    "gom" => "kok", "knn" => "kok",

    "koi" => "kom", "kpv" => "kom",

    "kng" => "kon", "kwy" => "kon", "ldi" => "kon",

    "gkp" => "kpe", "xpe" => "kpe",

    "ckb" => "kur", "kmr" => "kur", "sdh" => "kur",

    "hnd" => "lah", "hno" => "lah", "jat" => "lah", "phr" => "lah", "pnb" => "lah",
    "skr" => "lah", "xhe" => "lah",

    "ltg" => "lav", "lvs" => "lav",

    "bxk" => "luy", "ida" => "luy", "lkb" => "luy", "lko" => "luy", "lks" => "luy",
    "lri" => "luy", "lrm" => "luy", "lsm" => "luy", "lto" => "luy", "lts" => "luy",
    "lwg" => "luy", "nle" => "luy", "nyd" => "luy", "rag" => "luy",

    "emk" => "man", "mku" => "man", "mlq" => "man", "mnk" => "man", "msc" => "man",
    "mwk" => "man",

    "bhr" => "mlg", "bmm" => "mlg", "bzc" => "mlg", "msh" => "mlg", "plt" => "mlg",
    "skg" => "mlg", "tdx" => "mlg", "tkg" => "mlg", "txy" => "mlg", "xmv" => "mlg",
    "xmw" => "mlg",

    "khk" => "mon", "mvf" => "mon",

    "bjn" => "msa", "btj" => "msa", "bve" => "msa", "bvu" => "msa", "coa" => "msa",
    "dup" => "msa", "hji" => "msa", "ind" => "msa", "jak" => "msa", "jax" => "msa",
    "kvb" => "msa", "kvr" => "msa", "kxd" => "msa", "lce" => "msa", "lcf" => "msa",
    "liw" => "msa", "max" => "msa", "meo" => "msa", "mfa" => "msa", "mfb" => "msa",
    "min" => "msa", "mqg" => "msa", "msi" => "msa", "mui" => "msa", "orn" => "msa",
    "ors" => "msa", "pel" => "msa", "pse" => "msa", "tmw" => "msa", "urk" => "msa",
    "vkk" => "msa", "vkt" => "msa", "xmm" => "msa", "zlm" => "msa", "zmi" => "msa",
    "zsm" => "msa",

    "dhd" => "mwr", "mtr" => "mwr", "mve" => "mwr", "rwr" => "mwr", "swv" => "mwr",
    "wry" => "mwr",

    "dty" => "nep", "npi" => "nep",

    "nno" => "nor", "nob" => "nor",

    "ciw" => "oji", "ojb" => "oji", "ojc" => "oji", "ojg" => "oji", "ojs" => "oji",
    "ojw" => "oji", "otw" => "oji",

    "ory" => "ori", "spv" => "ori",

    "gax" => "orm", "gaz" => "orm", "hae" => "orm", "orc" => "orm",

    "pbt" => "pus", "pbu" => "pus", "pst" => "pus",

    "qub" => "que", "qud" => "que", "quf" => "que", "qug" => "que", "quh" => "que",
    "quk" => "que", "qul" => "que", "qup" => "que", "qur" => "que", "qus" => "que",
    "quw" => "que", "qux" => "que", "quy" => "que", "quz" => "que", "qva" => "que",
    "qvc" => "que", "qve" => "que", "qvh" => "que", "qvi" => "que", "qvj" => "que",
    "qvl" => "que", "qvm" => "que", "qvn" => "que", "qvo" => "que", "qvp" => "que",
    "qvs" => "que", "qvw" => "que", "qvz" => "que", "qwa" => "que", "qwc" => "que",
    "qwh" => "que", "qws" => "que", "qxa" => "que", "qxc" => "que", "qxh" => "que",
    "qxl" => "que", "qxn" => "que", "qxo" => "que", "qxp" => "que", "qxr" => "que",
    "qxt" => "que", "qxu" => "que", "qxw" => "que",

    "bgq" => "raj", "gda" => "raj", "gju" => "raj", "hoj" => "raj", "mup" => "raj",
    "wbr" => "raj",

    "aae" => "sqi", "aat" => "sqi", "aln" => "sqi", "als" => "sqi",

    "sdc" => "srd", "sdn" => "srd", "src" => "srd", "sro" => "srd",

    "swc" => "swa", "swh" => "swa",

    "aii" => "syr", "cld" => "syr",

    "taq" => "tmh", "thv" => "tmh", "thz" => "tmh", "ttq" => "tmh",

    "uzn" => "uzb", "uzs" => "uzb",

    "ydd" => "yid", "yih" => "yid",

    "zch" => "zha", "zeh" => "zha", "zgb" => "zha", "zgm" => "zha", "zgn" => "zha",
    "zhd" => "zha", "zhn" => "zha", "zlj" => "zha", "zln" => "zha", "zlq" => "zha",
    "zqe" => "zha", "zyb" => "zha", "zyg" => "zha", "zyj" => "zha", "zyn" => "zha",
    "zzj" => "zha",

    "cdo" => "zho", "cjy" => "zho", "cmn" => "zho", "cnp" => "zho", "cpx" => "zho",
    "csp" => "zho", "czh" => "zho", "czo" => "zho", "gan" => "zho", "hak" => "zho",
    "hsn" => "zho", "lzh" => "zho", "mnp" => "zho", "nan" => "zho", "wuu" => "zho",
    "yue" => "zho",

    "diq" => "zza", "kiu" => "zza",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{all_langs, get_lang_by_key};
    use std::collections::HashSet;

    #[test]
    fn every_row_is_identifiable() {
        for lang in all_langs() {
            assert!(
                lang.part3.is_some() || lang.part5.is_some(),
                "{} has neither part 3 nor part 5",
                lang.name
            );
            assert!(!lang.name.is_empty());
        }
    }

    #[test]
    fn codes_have_expected_shape() {
        for lang in all_langs() {
            if let Some(p1) = lang.part1 {
                assert_eq!(p1.len(), 2, "{}", lang.name);
            }
            for code in [lang.part2b, lang.part2t, lang.part3, lang.part5]
                .into_iter()
                .flatten()
            {
                assert_eq!(code.len(), 3, "{}", lang.name);
                assert!(code.bytes().all(|b| b.is_ascii_lowercase()), "{code}");
            }
        }
    }

    #[test]
    fn codes_are_unique_per_part() {
        let mut seen = HashSet::new();
        for lang in all_langs() {
            for (part, code) in [
                ("part1", lang.part1),
                ("part2b", lang.part2b),
                ("part3", lang.part3),
                ("part5", lang.part5),
            ] {
                if let Some(code) = code {
                    assert!(seen.insert((part, code)), "duplicate {part} code {code}");
                }
            }
        }
    }

    #[test]
    fn registry_covers_iso_639_3() {
        let languages = all_langs().iter().filter(|l| l.part3.is_some()).count();
        assert!(languages > 7_800, "{languages}");
        assert_eq!(all_langs().len(), languages + FAMILIES.len());
    }

    #[test]
    fn bibliographic_table_keys_are_languages() {
        for (part3, part2b) in ISO_639_2B.entries() {
            let lang = get_lang_by_key(part3).unwrap_or_else(|| panic!("{part3}"));
            assert_eq!(lang.part2b, Some(*part2b));
            assert_eq!(lang.part2t, Some(*part3));
        }
    }

    #[test]
    fn macrolanguages_exist_and_are_not_nested() {
        for (member, key) in MACROLANGUAGES.entries() {
            let parent = get_lang_by_key(key)
                .unwrap_or_else(|| panic!("{member} points at unknown {key}"));
            assert_eq!(parent.macrolanguage, None, "{key} is nested");
            let lang = get_lang_by_key(member).unwrap_or_else(|| panic!("{member}"));
            assert_eq!(lang.macrolanguage, Some(*key));
        }
    }

    #[test]
    fn families_have_no_part1_or_part3() {
        for lang in FAMILIES {
            assert_eq!(lang.part1, None, "{}", lang.name);
            assert_eq!(lang.part3, None, "{}", lang.name);
            assert!(lang.is_family());
            assert_eq!(lang.part2b, lang.part2t, "{}", lang.name);
        }
        assert_eq!(AFA.part2b, Some("afa"));
        assert_eq!(TRK.part2b, None);
    }

    #[test]
    fn test_arabic_metadata() {
        let ara = get_lang_by_key("ara").unwrap();
        assert_eq!(ara.part1, Some("ar"));
        assert_eq!(ara.part2b, Some("ara"));
        assert_eq!(ara.part2t, Some("ara"));
        assert_eq!(ara.part3, Some("ara"));
        assert_eq!(ara.part5, None);
        assert_eq!(ara.name(), "Arabic");
    }

    #[test]
    fn test_bibliographic_codes_differ() {
        assert_eq!(ISO_639_2B.get("fra"), Some(&"fre"));
        assert_eq!(ISO_639_2B.get("zho"), Some(&"chi"));
        assert_eq!(ISO_639_2B.get("deu"), Some(&"ger"));
        assert_eq!(ISO_639_2B.get("cmn"), None);
    }
}
