//! Writing system identification.
//!
//! [`Script`] enumerates the Unicode script property values of UAX #24,
//! which mirror the ISO 15924 script codes. Values are stable across table
//! regenerations; new scripts are only ever appended to the alphabetical
//! block.

use core::fmt;

/// Unicode script of a codepoint.
///
/// The first four values are reserved: `Invalid` marks "no run yet" in
/// segmenter output, `Unknown` covers unassigned codepoints, and `Common`
/// and `Inherited` are the script-neutral values that run segmentation
/// resolves away (see [`ScriptSegmenter`](crate::ScriptSegmenter)).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub enum Script {
    #[default]
    Invalid,
    Unknown,
    Common,
    Inherited,
    Adlam,
    Ahom,
    AnatolianHieroglyphs,
    Arabic,
    Armenian,
    Avestan,
    Balinese,
    Bamum,
    BassaVah,
    Batak,
    Bengali,
    BeriaErfe,
    Bhaiksuki,
    Bopomofo,
    Brahmi,
    Braille,
    Buginese,
    Buhid,
    CanadianAboriginal,
    Carian,
    CaucasianAlbanian,
    Chakma,
    Cham,
    Cherokee,
    Chorasmian,
    Coptic,
    Cuneiform,
    Cypriot,
    CyproMinoan,
    Cyrillic,
    Deseret,
    Devanagari,
    DivesAkuru,
    Dogra,
    Duployan,
    EgyptianHieroglyphs,
    Elbasan,
    Elymaic,
    Ethiopic,
    Garay,
    Georgian,
    Glagolitic,
    Gothic,
    Grantha,
    Greek,
    Gujarati,
    GunjalaGondi,
    Gurmukhi,
    GurungKhema,
    Han,
    Hangul,
    HanifiRohingya,
    Hanunoo,
    Hatran,
    Hebrew,
    Hiragana,
    ImperialAramaic,
    InscriptionalPahlavi,
    InscriptionalParthian,
    Javanese,
    Kaithi,
    Kannada,
    Katakana,
    Kawi,
    KayahLi,
    Kharoshthi,
    KhitanSmallScript,
    Khmer,
    Khojki,
    Khudawadi,
    KiratRai,
    Lao,
    Latin,
    Lepcha,
    Limbu,
    LinearA,
    LinearB,
    Lisu,
    Lycian,
    Lydian,
    Mahajani,
    Makasar,
    Malayalam,
    Mandaic,
    Manichaean,
    Marchen,
    MasaramGondi,
    Medefaidrin,
    MeeteiMayek,
    MendeKikakui,
    MeroiticCursive,
    MeroiticHieroglyphs,
    Miao,
    Modi,
    Mongolian,
    Mro,
    Multani,
    Myanmar,
    Nabataean,
    NagMundari,
    Nandinagari,
    NewTaiLue,
    Newa,
    Nko,
    Nushu,
    NyiakengPuachueHmong,
    Ogham,
    OlChiki,
    OlOnal,
    OldHungarian,
    OldItalic,
    OldNorthArabian,
    OldPermic,
    OldPersian,
    OldSogdian,
    OldSouthArabian,
    OldTurkic,
    OldUyghur,
    Oriya,
    Osage,
    Osmanya,
    PahawhHmong,
    Palmyrene,
    PauCinHau,
    PhagsPa,
    Phoenician,
    PsalterPahlavi,
    Rejang,
    Runic,
    Samaritan,
    Saurashtra,
    Sharada,
    Shavian,
    Siddham,
    Sidetic,
    SignWriting,
    Sinhala,
    Sogdian,
    SoraSompeng,
    Soyombo,
    Sundanese,
    Sunuwar,
    SylotiNagri,
    Syriac,
    Tagalog,
    Tagbanwa,
    TaiLe,
    TaiTham,
    TaiViet,
    TaiYo,
    Takri,
    Tamil,
    Tangsa,
    Tangut,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Tifinagh,
    Tirhuta,
    Todhri,
    TolongSiki,
    Toto,
    TuluTigalari,
    Ugaritic,
    Vai,
    Vithkuqi,
    Wancho,
    WarangCiti,
    Yezidi,
    Yi,
    ZanabazarSquare,
}

impl Script {
    /// Returns the UAX #24 long name of the script ("Latin", "Old_Italic").
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Returns the script with the given UAX #24 long name, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        match BY_NAME.binary_search_by(|entry| entry.0.cmp(name)) {
            Ok(index) => Some(BY_NAME[index].1),
            Err(_) => None,
        }
    }

    /// Returns true for a concrete writing system, i.e. none of the four
    /// reserved values.
    pub fn is_real(self) -> bool {
        !matches!(
            self,
            Script::Invalid | Script::Unknown | Script::Common | Script::Inherited
        )
    }

    /// Returns true for the two script-neutral values that inherit the
    /// script of the surrounding run.
    pub fn is_common_or_inherited(self) -> bool {
        matches!(self, Script::Common | Script::Inherited)
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

const NAMES: &[&str] = &[
    "Invalid", "Unknown", "Common", "Inherited", "Adlam",
    "Ahom", "Anatolian_Hieroglyphs", "Arabic", "Armenian", "Avestan",
    "Balinese", "Bamum", "Bassa_Vah", "Batak", "Bengali",
    "Beria_Erfe", "Bhaiksuki", "Bopomofo", "Brahmi", "Braille",
    "Buginese", "Buhid", "Canadian_Aboriginal", "Carian", "Caucasian_Albanian",
    "Chakma", "Cham", "Cherokee", "Chorasmian", "Coptic",
    "Cuneiform", "Cypriot", "Cypro_Minoan", "Cyrillic", "Deseret",
    "Devanagari", "Dives_Akuru", "Dogra", "Duployan", "Egyptian_Hieroglyphs",
    "Elbasan", "Elymaic", "Ethiopic", "Garay", "Georgian",
    "Glagolitic", "Gothic", "Grantha", "Greek", "Gujarati",
    "Gunjala_Gondi", "Gurmukhi", "Gurung_Khema", "Han", "Hangul",
    "Hanifi_Rohingya", "Hanunoo", "Hatran", "Hebrew", "Hiragana",
    "Imperial_Aramaic", "Inscriptional_Pahlavi", "Inscriptional_Parthian", "Javanese", "Kaithi",
    "Kannada", "Katakana", "Kawi", "Kayah_Li", "Kharoshthi",
    "Khitan_Small_Script", "Khmer", "Khojki", "Khudawadi", "Kirat_Rai",
    "Lao", "Latin", "Lepcha", "Limbu", "Linear_A",
    "Linear_B", "Lisu", "Lycian", "Lydian", "Mahajani",
    "Makasar", "Malayalam", "Mandaic", "Manichaean", "Marchen",
    "Masaram_Gondi", "Medefaidrin", "Meetei_Mayek", "Mende_Kikakui", "Meroitic_Cursive",
    "Meroitic_Hieroglyphs", "Miao", "Modi", "Mongolian", "Mro",
    "Multani", "Myanmar", "Nabataean", "Nag_Mundari", "Nandinagari",
    "New_Tai_Lue", "Newa", "Nko", "Nushu", "Nyiakeng_Puachue_Hmong",
    "Ogham", "Ol_Chiki", "Ol_Onal", "Old_Hungarian", "Old_Italic",
    "Old_North_Arabian", "Old_Permic", "Old_Persian", "Old_Sogdian", "Old_South_Arabian",
    "Old_Turkic", "Old_Uyghur", "Oriya", "Osage", "Osmanya",
    "Pahawh_Hmong", "Palmyrene", "Pau_Cin_Hau", "Phags_Pa", "Phoenician",
    "Psalter_Pahlavi", "Rejang", "Runic", "Samaritan", "Saurashtra",
    "Sharada", "Shavian", "Siddham", "Sidetic", "SignWriting",
    "Sinhala", "Sogdian", "Sora_Sompeng", "Soyombo", "Sundanese",
    "Sunuwar", "Syloti_Nagri", "Syriac", "Tagalog", "Tagbanwa",
    "Tai_Le", "Tai_Tham", "Tai_Viet", "Tai_Yo", "Takri",
    "Tamil", "Tangsa", "Tangut", "Telugu", "Thaana",
    "Thai", "Tibetan", "Tifinagh", "Tirhuta", "Todhri",
    "Tolong_Siki", "Toto", "Tulu_Tigalari", "Ugaritic", "Vai",
    "Vithkuqi", "Wancho", "Warang_Citi", "Yezidi", "Yi",
    "Zanabazar_Square",
];

const BY_NAME: &[(&str, Script)] = &[
    ("Adlam", Script::Adlam), ("Ahom", Script::Ahom), ("Anatolian_Hieroglyphs", Script::AnatolianHieroglyphs),
    ("Arabic", Script::Arabic), ("Armenian", Script::Armenian), ("Avestan", Script::Avestan),
    ("Balinese", Script::Balinese), ("Bamum", Script::Bamum), ("Bassa_Vah", Script::BassaVah),
    ("Batak", Script::Batak), ("Bengali", Script::Bengali), ("Beria_Erfe", Script::BeriaErfe),
    ("Bhaiksuki", Script::Bhaiksuki), ("Bopomofo", Script::Bopomofo), ("Brahmi", Script::Brahmi),
    ("Braille", Script::Braille), ("Buginese", Script::Buginese), ("Buhid", Script::Buhid),
    ("Canadian_Aboriginal", Script::CanadianAboriginal), ("Carian", Script::Carian), ("Caucasian_Albanian", Script::CaucasianAlbanian),
    ("Chakma", Script::Chakma), ("Cham", Script::Cham), ("Cherokee", Script::Cherokee),
    ("Chorasmian", Script::Chorasmian), ("Common", Script::Common), ("Coptic", Script::Coptic),
    ("Cuneiform", Script::Cuneiform), ("Cypriot", Script::Cypriot), ("Cypro_Minoan", Script::CyproMinoan),
    ("Cyrillic", Script::Cyrillic), ("Deseret", Script::Deseret), ("Devanagari", Script::Devanagari),
    ("Dives_Akuru", Script::DivesAkuru), ("Dogra", Script::Dogra), ("Duployan", Script::Duployan),
    ("Egyptian_Hieroglyphs", Script::EgyptianHieroglyphs), ("Elbasan", Script::Elbasan), ("Elymaic", Script::Elymaic),
    ("Ethiopic", Script::Ethiopic), ("Garay", Script::Garay), ("Georgian", Script::Georgian),
    ("Glagolitic", Script::Glagolitic), ("Gothic", Script::Gothic), ("Grantha", Script::Grantha),
    ("Greek", Script::Greek), ("Gujarati", Script::Gujarati), ("Gunjala_Gondi", Script::GunjalaGondi),
    ("Gurmukhi", Script::Gurmukhi), ("Gurung_Khema", Script::GurungKhema), ("Han", Script::Han),
    ("Hangul", Script::Hangul), ("Hanifi_Rohingya", Script::HanifiRohingya), ("Hanunoo", Script::Hanunoo),
    ("Hatran", Script::Hatran), ("Hebrew", Script::Hebrew), ("Hiragana", Script::Hiragana),
    ("Imperial_Aramaic", Script::ImperialAramaic), ("Inherited", Script::Inherited), ("Inscriptional_Pahlavi", Script::InscriptionalPahlavi),
    ("Inscriptional_Parthian", Script::InscriptionalParthian), ("Javanese", Script::Javanese), ("Kaithi", Script::Kaithi),
    ("Kannada", Script::Kannada), ("Katakana", Script::Katakana), ("Kawi", Script::Kawi),
    ("Kayah_Li", Script::KayahLi), ("Kharoshthi", Script::Kharoshthi), ("Khitan_Small_Script", Script::KhitanSmallScript),
    ("Khmer", Script::Khmer), ("Khojki", Script::Khojki), ("Khudawadi", Script::Khudawadi),
    ("Kirat_Rai", Script::KiratRai), ("Lao", Script::Lao), ("Latin", Script::Latin),
    ("Lepcha", Script::Lepcha), ("Limbu", Script::Limbu), ("Linear_A", Script::LinearA),
    ("Linear_B", Script::LinearB), ("Lisu", Script::Lisu), ("Lycian", Script::Lycian),
    ("Lydian", Script::Lydian), ("Mahajani", Script::Mahajani), ("Makasar", Script::Makasar),
    ("Malayalam", Script::Malayalam), ("Mandaic", Script::Mandaic), ("Manichaean", Script::Manichaean),
    ("Marchen", Script::Marchen), ("Masaram_Gondi", Script::MasaramGondi), ("Medefaidrin", Script::Medefaidrin),
    ("Meetei_Mayek", Script::MeeteiMayek), ("Mende_Kikakui", Script::MendeKikakui), ("Meroitic_Cursive", Script::MeroiticCursive),
    ("Meroitic_Hieroglyphs", Script::MeroiticHieroglyphs), ("Miao", Script::Miao), ("Modi", Script::Modi),
    ("Mongolian", Script::Mongolian), ("Mro", Script::Mro), ("Multani", Script::Multani),
    ("Myanmar", Script::Myanmar), ("Nabataean", Script::Nabataean), ("Nag_Mundari", Script::NagMundari),
    ("Nandinagari", Script::Nandinagari), ("New_Tai_Lue", Script::NewTaiLue), ("Newa", Script::Newa),
    ("Nko", Script::Nko), ("Nushu", Script::Nushu), ("Nyiakeng_Puachue_Hmong", Script::NyiakengPuachueHmong),
    ("Ogham", Script::Ogham), ("Ol_Chiki", Script::OlChiki), ("Ol_Onal", Script::OlOnal),
    ("Old_Hungarian", Script::OldHungarian), ("Old_Italic", Script::OldItalic), ("Old_North_Arabian", Script::OldNorthArabian),
    ("Old_Permic", Script::OldPermic), ("Old_Persian", Script::OldPersian), ("Old_Sogdian", Script::OldSogdian),
    ("Old_South_Arabian", Script::OldSouthArabian), ("Old_Turkic", Script::OldTurkic), ("Old_Uyghur", Script::OldUyghur),
    ("Oriya", Script::Oriya), ("Osage", Script::Osage), ("Osmanya", Script::Osmanya),
    ("Pahawh_Hmong", Script::PahawhHmong), ("Palmyrene", Script::Palmyrene), ("Pau_Cin_Hau", Script::PauCinHau),
    ("Phags_Pa", Script::PhagsPa), ("Phoenician", Script::Phoenician), ("Psalter_Pahlavi", Script::PsalterPahlavi),
    ("Rejang", Script::Rejang), ("Runic", Script::Runic), ("Samaritan", Script::Samaritan),
    ("Saurashtra", Script::Saurashtra), ("Sharada", Script::Sharada), ("Shavian", Script::Shavian),
    ("Siddham", Script::Siddham), ("Sidetic", Script::Sidetic), ("SignWriting", Script::SignWriting),
    ("Sinhala", Script::Sinhala), ("Sogdian", Script::Sogdian), ("Sora_Sompeng", Script::SoraSompeng),
    ("Soyombo", Script::Soyombo), ("Sundanese", Script::Sundanese), ("Sunuwar", Script::Sunuwar),
    ("Syloti_Nagri", Script::SylotiNagri), ("Syriac", Script::Syriac), ("Tagalog", Script::Tagalog),
    ("Tagbanwa", Script::Tagbanwa), ("Tai_Le", Script::TaiLe), ("Tai_Tham", Script::TaiTham),
    ("Tai_Viet", Script::TaiViet), ("Tai_Yo", Script::TaiYo), ("Takri", Script::Takri),
    ("Tamil", Script::Tamil), ("Tangsa", Script::Tangsa), ("Tangut", Script::Tangut),
    ("Telugu", Script::Telugu), ("Thaana", Script::Thaana), ("Thai", Script::Thai),
    ("Tibetan", Script::Tibetan), ("Tifinagh", Script::Tifinagh), ("Tirhuta", Script::Tirhuta),
    ("Todhri", Script::Todhri), ("Tolong_Siki", Script::TolongSiki), ("Toto", Script::Toto),
    ("Tulu_Tigalari", Script::TuluTigalari), ("Ugaritic", Script::Ugaritic), ("Unknown", Script::Unknown),
    ("Vai", Script::Vai), ("Vithkuqi", Script::Vithkuqi), ("Wancho", Script::Wancho),
    ("Warang_Citi", Script::WarangCiti), ("Yezidi", Script::Yezidi), ("Yi", Script::Yi),
    ("Zanabazar_Square", Script::ZanabazarSquare),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for script in [
            Script::Latin,
            Script::Han,
            Script::OldItalic,
            Script::SignWriting,
            Script::NyiakengPuachueHmong,
        ] {
            assert_eq!(Script::from_name(script.name()), Some(script));
        }
    }

    #[test]
    fn name_spelling() {
        assert_eq!(Script::Latin.name(), "Latin");
        assert_eq!(Script::OldItalic.name(), "Old_Italic");
        assert_eq!(Script::Nko.name(), "Nko");
        assert_eq!(Script::Common.to_string(), "Common");
    }

    #[test]
    fn from_name_reserved_values() {
        // The Invalid sentinel is not a UAX #24 value.
        assert_eq!(Script::from_name("Invalid"), None);
        assert_eq!(Script::from_name("Zzzz"), None);
        assert_eq!(Script::from_name("Common"), Some(Script::Common));
    }

    #[test]
    fn reserved_values() {
        assert_eq!(Script::default(), Script::Invalid);
        assert!(!Script::Common.is_real());
        assert!(!Script::Inherited.is_real());
        assert!(!Script::Unknown.is_real());
        assert!(Script::Arabic.is_real());
        assert!(Script::Common.is_common_or_inherited());
        assert!(!Script::Unknown.is_common_or_inherited());
    }
}
