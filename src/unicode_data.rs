// Generated from Unicode Character Database data files (Scripts.txt,
// emoji/emoji-data.txt). Unicode version 17.0.0. DO NOT EDIT.

use crate::script::Script;

/// Version of the Unicode Character Database the tables below were
/// generated from.
pub const UNICODE_VERSION: (u64, u64, u64) = (17, 0, 0);

pub const SCRIPT_RANGES: &[(u32, u32, Script)] = &[
    (0x0000, 0x0040, Script::Common),
    (0x0041, 0x005A, Script::Latin),
    (0x005B, 0x0060, Script::Common),
    (0x0061, 0x007A, Script::Latin),
    (0x007B, 0x00A9, Script::Common),
    (0x00AA, 0x00AA, Script::Latin),
    (0x00AB, 0x00B9, Script::Common),
    (0x00BA, 0x00BA, Script::Latin),
    (0x00BB, 0x00BF, Script::Common),
    (0x00C0, 0x00D6, Script::Latin),
    (0x00D7, 0x00D7, Script::Common),
    (0x00D8, 0x00F6, Script::Latin),
    (0x00F7, 0x00F7, Script::Common),
    (0x00F8, 0x02B8, Script::Latin),
    (0x02B9, 0x02DF, Script::Common),
    (0x02E0, 0x02E4, Script::Latin),
    (0x02E5, 0x02E9, Script::Common),
    (0x02EA, 0x02EB, Script::Bopomofo),
    (0x02EC, 0x02FF, Script::Common),
    (0x0300, 0x036F, Script::Inherited),
    (0x0370, 0x0373, Script::Greek),
    (0x0374, 0x0374, Script::Common),
    (0x0375, 0x0377, Script::Greek),
    (0x037A, 0x037D, Script::Greek),
    (0x037E, 0x037E, Script::Common),
    (0x037F, 0x037F, Script::Greek),
    (0x0384, 0x0384, Script::Greek),
    (0x0385, 0x0385, Script::Common),
    (0x0386, 0x0386, Script::Greek),
    (0x0387, 0x0387, Script::Common),
    (0x0388, 0x038A, Script::Greek),
    (0x038C, 0x038C, Script::Greek),
    (0x038E, 0x03A1, Script::Greek),
    (0x03A3, 0x03E1, Script::Greek),
    (0x03E2, 0x03EF, Script::Coptic),
    (0x03F0, 0x03FF, Script::Greek),
    (0x0400, 0x0484, Script::Cyrillic),
    (0x0485, 0x0486, Script::Inherited),
    (0x0487, 0x052F, Script::Cyrillic),
    (0x0531, 0x0556, Script::Armenian),
    (0x0559, 0x058A, Script::Armenian),
    (0x058D, 0x058F, Script::Armenian),
    (0x0591, 0x05C7, Script::Hebrew),
    (0x05D0, 0x05EA, Script::Hebrew),
    (0x05EF, 0x05F4, Script::Hebrew),
    (0x0600, 0x0604, Script::Arabic),
    (0x0605, 0x0605, Script::Common),
    (0x0606, 0x060B, Script::Arabic),
    (0x060C, 0x060C, Script::Common),
    (0x060D, 0x061A, Script::Arabic),
    (0x061B, 0x061B, Script::Common),
    (0x061C, 0x061E, Script::Arabic),
    (0x061F, 0x061F, Script::Common),
    (0x0620, 0x063F, Script::Arabic),
    (0x0640, 0x0640, Script::Common),
    (0x0641, 0x064A, Script::Arabic),
    (0x064B, 0x0655, Script::Inherited),
    (0x0656, 0x066F, Script::Arabic),
    (0x0670, 0x0670, Script::Inherited),
    (0x0671, 0x06DC, Script::Arabic),
    (0x06DD, 0x06DD, Script::Common),
    (0x06DE, 0x06FF, Script::Arabic),
    (0x0700, 0x070D, Script::Syriac),
    (0x070F, 0x074A, Script::Syriac),
    (0x074D, 0x074F, Script::Syriac),
    (0x0750, 0x077F, Script::Arabic),
    (0x0780, 0x07B1, Script::Thaana),
    (0x07C0, 0x07FA, Script::Nko),
    (0x07FD, 0x07FF, Script::Nko),
    (0x0800, 0x082D, Script::Samaritan),
    (0x0830, 0x083E, Script::Samaritan),
    (0x0840, 0x085B, Script::Mandaic),
    (0x085E, 0x085E, Script::Mandaic),
    (0x0860, 0x086A, Script::Syriac),
    (0x0870, 0x0891, Script::Arabic),
    (0x0897, 0x08E1, Script::Arabic),
    (0x08E2, 0x08E2, Script::Common),
    (0x08E3, 0x08FF, Script::Arabic),
    (0x0900, 0x0950, Script::Devanagari),
    (0x0951, 0x0954, Script::Inherited),
    (0x0955, 0x0963, Script::Devanagari),
    (0x0964, 0x0965, Script::Common),
    (0x0966, 0x097F, Script::Devanagari),
    (0x0980, 0x0983, Script::Bengali),
    (0x0985, 0x098C, Script::Bengali),
    (0x098F, 0x0990, Script::Bengali),
    (0x0993, 0x09A8, Script::Bengali),
    (0x09AA, 0x09B0, Script::Bengali),
    (0x09B2, 0x09B2, Script::Bengali),
    (0x09B6, 0x09B9, Script::Bengali),
    (0x09BC, 0x09C4, Script::Bengali),
    (0x09C7, 0x09C8, Script::Bengali),
    (0x09CB, 0x09CE, Script::Bengali),
    (0x09D7, 0x09D7, Script::Bengali),
    (0x09DC, 0x09DD, Script::Bengali),
    (0x09DF, 0x09E3, Script::Bengali),
    (0x09E6, 0x09FE, Script::Bengali),
    (0x0A01, 0x0A03, Script::Gurmukhi),
    (0x0A05, 0x0A0A, Script::Gurmukhi),
    (0x0A0F, 0x0A10, Script::Gurmukhi),
    (0x0A13, 0x0A28, Script::Gurmukhi),
    (0x0A2A, 0x0A30, Script::Gurmukhi),
    (0x0A32, 0x0A33, Script::Gurmukhi),
    (0x0A35, 0x0A36, Script::Gurmukhi),
    (0x0A38, 0x0A39, Script::Gurmukhi),
    (0x0A3C, 0x0A3C, Script::Gurmukhi),
    (0x0A3E, 0x0A42, Script::Gurmukhi),
    (0x0A47, 0x0A48, Script::Gurmukhi),
    (0x0A4B, 0x0A4D, Script::Gurmukhi),
    (0x0A51, 0x0A51, Script::Gurmukhi),
    (0x0A59, 0x0A5C, Script::Gurmukhi),
    (0x0A5E, 0x0A5E, Script::Gurmukhi),
    (0x0A66, 0x0A76, Script::Gurmukhi),
    (0x0A81, 0x0A83, Script::Gujarati),
    (0x0A85, 0x0A8D, Script::Gujarati),
    (0x0A8F, 0x0A91, Script::Gujarati),
    (0x0A93, 0x0AA8, Script::Gujarati),
    (0x0AAA, 0x0AB0, Script::Gujarati),
    (0x0AB2, 0x0AB3, Script::Gujarati),
    (0x0AB5, 0x0AB9, Script::Gujarati),
    (0x0ABC, 0x0AC5, Script::Gujarati),
    (0x0AC7, 0x0AC9, Script::Gujarati),
    (0x0ACB, 0x0ACD, Script::Gujarati),
    (0x0AD0, 0x0AD0, Script::Gujarati),
    (0x0AE0, 0x0AE3, Script::Gujarati),
    (0x0AE6, 0x0AF1, Script::Gujarati),
    (0x0AF9, 0x0AFF, Script::Gujarati),
    (0x0B01, 0x0B03, Script::Oriya),
    (0x0B05, 0x0B0C, Script::Oriya),
    (0x0B0F, 0x0B10, Script::Oriya),
    (0x0B13, 0x0B28, Script::Oriya),
    (0x0B2A, 0x0B30, Script::Oriya),
    (0x0B32, 0x0B33, Script::Oriya),
    (0x0B35, 0x0B39, Script::Oriya),
    (0x0B3C, 0x0B44, Script::Oriya),
    (0x0B47, 0x0B48, Script::Oriya),
    (0x0B4B, 0x0B4D, Script::Oriya),
    (0x0B55, 0x0B57, Script::Oriya),
    (0x0B5C, 0x0B5D, Script::Oriya),
    (0x0B5F, 0x0B63, Script::Oriya),
    (0x0B66, 0x0B77, Script::Oriya),
    (0x0B82, 0x0B83, Script::Tamil),
    (0x0B85, 0x0B8A, Script::Tamil),
    (0x0B8E, 0x0B90, Script::Tamil),
    (0x0B92, 0x0B95, Script::Tamil),
    (0x0B99, 0x0B9A, Script::Tamil),
    (0x0B9C, 0x0B9C, Script::Tamil),
    (0x0B9E, 0x0B9F, Script::Tamil),
    (0x0BA3, 0x0BA4, Script::Tamil),
    (0x0BA8, 0x0BAA, Script::Tamil),
    (0x0BAE, 0x0BB9, Script::Tamil),
    (0x0BBE, 0x0BC2, Script::Tamil),
    (0x0BC6, 0x0BC8, Script::Tamil),
    (0x0BCA, 0x0BCD, Script::Tamil),
    (0x0BD0, 0x0BD0, Script::Tamil),
    (0x0BD7, 0x0BD7, Script::Tamil),
    (0x0BE6, 0x0BFA, Script::Tamil),
    (0x0C00, 0x0C0C, Script::Telugu),
    (0x0C0E, 0x0C10, Script::Telugu),
    (0x0C12, 0x0C28, Script::Telugu),
    (0x0C2A, 0x0C39, Script::Telugu),
    (0x0C3C, 0x0C44, Script::Telugu),
    (0x0C46, 0x0C48, Script::Telugu),
    (0x0C4A, 0x0C4D, Script::Telugu),
    (0x0C55, 0x0C56, Script::Telugu),
    (0x0C58, 0x0C5A, Script::Telugu),
    (0x0C5C, 0x0C5D, Script::Telugu),
    (0x0C60, 0x0C63, Script::Telugu),
    (0x0C66, 0x0C6F, Script::Telugu),
    (0x0C77, 0x0C7F, Script::Telugu),
    (0x0C80, 0x0C8C, Script::Kannada),
    (0x0C8E, 0x0C90, Script::Kannada),
    (0x0C92, 0x0CA8, Script::Kannada),
    (0x0CAA, 0x0CB3, Script::Kannada),
    (0x0CB5, 0x0CB9, Script::Kannada),
    (0x0CBC, 0x0CC4, Script::Kannada),
    (0x0CC6, 0x0CC8, Script::Kannada),
    (0x0CCA, 0x0CCD, Script::Kannada),
    (0x0CD5, 0x0CD6, Script::Kannada),
    (0x0CDC, 0x0CDE, Script::Kannada),
    (0x0CE0, 0x0CE3, Script::Kannada),
    (0x0CE6, 0x0CEF, Script::Kannada),
    (0x0CF1, 0x0CF3, Script::Kannada),
    (0x0D00, 0x0D0C, Script::Malayalam),
    (0x0D0E, 0x0D10, Script::Malayalam),
    (0x0D12, 0x0D44, Script::Malayalam),
    (0x0D46, 0x0D48, Script::Malayalam),
    (0x0D4A, 0x0D4F, Script::Malayalam),
    (0x0D54, 0x0D63, Script::Malayalam),
    (0x0D66, 0x0D7F, Script::Malayalam),
    (0x0D81, 0x0D83, Script::Sinhala),
    (0x0D85, 0x0D96, Script::Sinhala),
    (0x0D9A, 0x0DB1, Script::Sinhala),
    (0x0DB3, 0x0DBB, Script::Sinhala),
    (0x0DBD, 0x0DBD, Script::Sinhala),
    (0x0DC0, 0x0DC6, Script::Sinhala),
    (0x0DCA, 0x0DCA, Script::Sinhala),
    (0x0DCF, 0x0DD4, Script::Sinhala),
    (0x0DD6, 0x0DD6, Script::Sinhala),
    (0x0DD8, 0x0DDF, Script::Sinhala),
    (0x0DE6, 0x0DEF, Script::Sinhala),
    (0x0DF2, 0x0DF4, Script::Sinhala),
    (0x0E01, 0x0E3A, Script::Thai),
    (0x0E3F, 0x0E3F, Script::Common),
    (0x0E40, 0x0E5B, Script::Thai),
    (0x0E81, 0x0E82, Script::Lao),
    (0x0E84, 0x0E84, Script::Lao),
    (0x0E86, 0x0E8A, Script::Lao),
    (0x0E8C, 0x0EA3, Script::Lao),
    (0x0EA5, 0x0EA5, Script::Lao),
    (0x0EA7, 0x0EBD, Script::Lao),
    (0x0EC0, 0x0EC4, Script::Lao),
    (0x0EC6, 0x0EC6, Script::Lao),
    (0x0EC8, 0x0ECE, Script::Lao),
    (0x0ED0, 0x0ED9, Script::Lao),
    (0x0EDC, 0x0EDF, Script::Lao),
    (0x0F00, 0x0F47, Script::Tibetan),
    (0x0F49, 0x0F6C, Script::Tibetan),
    (0x0F71, 0x0F97, Script::Tibetan),
    (0x0F99, 0x0FBC, Script::Tibetan),
    (0x0FBE, 0x0FCC, Script::Tibetan),
    (0x0FCE, 0x0FD4, Script::Tibetan),
    (0x0FD5, 0x0FD8, Script::Common),
    (0x0FD9, 0x0FDA, Script::Tibetan),
    (0x1000, 0x109F, Script::Myanmar),
    (0x10A0, 0x10C5, Script::Georgian),
    (0x10C7, 0x10C7, Script::Georgian),
    (0x10CD, 0x10CD, Script::Georgian),
    (0x10D0, 0x10FA, Script::Georgian),
    (0x10FB, 0x10FB, Script::Common),
    (0x10FC, 0x10FF, Script::Georgian),
    (0x1100, 0x11FF, Script::Hangul),
    (0x1200, 0x1248, Script::Ethiopic),
    (0x124A, 0x124D, Script::Ethiopic),
    (0x1250, 0x1256, Script::Ethiopic),
    (0x1258, 0x1258, Script::Ethiopic),
    (0x125A, 0x125D, Script::Ethiopic),
    (0x1260, 0x1288, Script::Ethiopic),
    (0x128A, 0x128D, Script::Ethiopic),
    (0x1290, 0x12B0, Script::Ethiopic),
    (0x12B2, 0x12B5, Script::Ethiopic),
    (0x12B8, 0x12BE, Script::Ethiopic),
    (0x12C0, 0x12C0, Script::Ethiopic),
    (0x12C2, 0x12C5, Script::Ethiopic),
    (0x12C8, 0x12D6, Script::Ethiopic),
    (0x12D8, 0x1310, Script::Ethiopic),
    (0x1312, 0x1315, Script::Ethiopic),
    (0x1318, 0x135A, Script::Ethiopic),
    (0x135D, 0x137C, Script::Ethiopic),
    (0x1380, 0x1399, Script::Ethiopic),
    (0x13A0, 0x13F5, Script::Cherokee),
    (0x13F8, 0x13FD, Script::Cherokee),
    (0x1400, 0x167F, Script::CanadianAboriginal),
    (0x1680, 0x169C, Script::Ogham),
    (0x16A0, 0x16EA, Script::Runic),
    (0x16EB, 0x16ED, Script::Common),
    (0x16EE, 0x16F8, Script::Runic),
    (0x1700, 0x1715, Script::Tagalog),
    (0x171F, 0x171F, Script::Tagalog),
    (0x1720, 0x1734, Script::Hanunoo),
    (0x1735, 0x1736, Script::Common),
    (0x1740, 0x1753, Script::Buhid),
    (0x1760, 0x176C, Script::Tagbanwa),
    (0x176E, 0x1770, Script::Tagbanwa),
    (0x1772, 0x1773, Script::Tagbanwa),
    (0x1780, 0x17DD, Script::Khmer),
    (0x17E0, 0x17E9, Script::Khmer),
    (0x17F0, 0x17F9, Script::Khmer),
    (0x1800, 0x1801, Script::Mongolian),
    (0x1802, 0x1803, Script::Common),
    (0x1804, 0x1804, Script::Mongolian),
    (0x1805, 0x1805, Script::Common),
    (0x1806, 0x1819, Script::Mongolian),
    (0x1820, 0x1878, Script::Mongolian),
    (0x1880, 0x18AA, Script::Mongolian),
    (0x18B0, 0x18F5, Script::CanadianAboriginal),
    (0x1900, 0x191E, Script::Limbu),
    (0x1920, 0x192B, Script::Limbu),
    (0x1930, 0x193B, Script::Limbu),
    (0x1940, 0x1940, Script::Limbu),
    (0x1944, 0x194F, Script::Limbu),
    (0x1950, 0x196D, Script::TaiLe),
    (0x1970, 0x1974, Script::TaiLe),
    (0x1980, 0x19AB, Script::NewTaiLue),
    (0x19B0, 0x19C9, Script::NewTaiLue),
    (0x19D0, 0x19DA, Script::NewTaiLue),
    (0x19DE, 0x19DF, Script::NewTaiLue),
    (0x19E0, 0x19FF, Script::Khmer),
    (0x1A00, 0x1A1B, Script::Buginese),
    (0x1A1E, 0x1A1F, Script::Buginese),
    (0x1A20, 0x1A5E, Script::TaiTham),
    (0x1A60, 0x1A7C, Script::TaiTham),
    (0x1A7F, 0x1A89, Script::TaiTham),
    (0x1A90, 0x1A99, Script::TaiTham),
    (0x1AA0, 0x1AAD, Script::TaiTham),
    (0x1AB0, 0x1ADD, Script::Inherited),
    (0x1AE0, 0x1AEB, Script::Inherited),
    (0x1B00, 0x1B4C, Script::Balinese),
    (0x1B4E, 0x1B7F, Script::Balinese),
    (0x1B80, 0x1BBF, Script::Sundanese),
    (0x1BC0, 0x1BF3, Script::Batak),
    (0x1BFC, 0x1BFF, Script::Batak),
    (0x1C00, 0x1C37, Script::Lepcha),
    (0x1C3B, 0x1C49, Script::Lepcha),
    (0x1C4D, 0x1C4F, Script::Lepcha),
    (0x1C50, 0x1C7F, Script::OlChiki),
    (0x1C80, 0x1C8A, Script::Cyrillic),
    (0x1C90, 0x1CBA, Script::Georgian),
    (0x1CBD, 0x1CBF, Script::Georgian),
    (0x1CC0, 0x1CC7, Script::Sundanese),
    (0x1CD0, 0x1CD2, Script::Inherited),
    (0x1CD3, 0x1CD3, Script::Common),
    (0x1CD4, 0x1CE0, Script::Inherited),
    (0x1CE1, 0x1CE1, Script::Common),
    (0x1CE2, 0x1CE8, Script::Inherited),
    (0x1CE9, 0x1CEC, Script::Common),
    (0x1CED, 0x1CED, Script::Inherited),
    (0x1CEE, 0x1CF3, Script::Common),
    (0x1CF4, 0x1CF4, Script::Inherited),
    (0x1CF5, 0x1CF7, Script::Common),
    (0x1CF8, 0x1CF9, Script::Inherited),
    (0x1CFA, 0x1CFA, Script::Common),
    (0x1D00, 0x1D25, Script::Latin),
    (0x1D26, 0x1D2A, Script::Greek),
    (0x1D2B, 0x1D2B, Script::Cyrillic),
    (0x1D2C, 0x1D5C, Script::Latin),
    (0x1D5D, 0x1D61, Script::Greek),
    (0x1D62, 0x1D65, Script::Latin),
    (0x1D66, 0x1D6A, Script::Greek),
    (0x1D6B, 0x1D77, Script::Latin),
    (0x1D78, 0x1D78, Script::Cyrillic),
    (0x1D79, 0x1DBE, Script::Latin),
    (0x1DBF, 0x1DBF, Script::Greek),
    (0x1DC0, 0x1DFF, Script::Inherited),
    (0x1E00, 0x1EFF, Script::Latin),
    (0x1F00, 0x1F15, Script::Greek),
    (0x1F18, 0x1F1D, Script::Greek),
    (0x1F20, 0x1F45, Script::Greek),
    (0x1F48, 0x1F4D, Script::Greek),
    (0x1F50, 0x1F57, Script::Greek),
    (0x1F59, 0x1F59, Script::Greek),
    (0x1F5B, 0x1F5B, Script::Greek),
    (0x1F5D, 0x1F5D, Script::Greek),
    (0x1F5F, 0x1F7D, Script::Greek),
    (0x1F80, 0x1FB4, Script::Greek),
    (0x1FB6, 0x1FC4, Script::Greek),
    (0x1FC6, 0x1FD3, Script::Greek),
    (0x1FD6, 0x1FDB, Script::Greek),
    (0x1FDD, 0x1FEF, Script::Greek),
    (0x1FF2, 0x1FF4, Script::Greek),
    (0x1FF6, 0x1FFE, Script::Greek),
    (0x2000, 0x200B, Script::Common),
    (0x200C, 0x200D, Script::Inherited),
    (0x200E, 0x2064, Script::Common),
    (0x2066, 0x2070, Script::Common),
    (0x2071, 0x2071, Script::Latin),
    (0x2074, 0x207E, Script::Common),
    (0x207F, 0x207F, Script::Latin),
    (0x2080, 0x208E, Script::Common),
    (0x2090, 0x209C, Script::Latin),
    (0x20A0, 0x20C1, Script::Common),
    (0x20D0, 0x20F0, Script::Inherited),
    (0x2100, 0x2125, Script::Common),
    (0x2126, 0x2126, Script::Greek),
    (0x2127, 0x2129, Script::Common),
    (0x212A, 0x212B, Script::Latin),
    (0x212C, 0x2131, Script::Common),
    (0x2132, 0x2132, Script::Latin),
    (0x2133, 0x214D, Script::Common),
    (0x214E, 0x214E, Script::Latin),
    (0x214F, 0x215F, Script::Common),
    (0x2160, 0x2188, Script::Latin),
    (0x2189, 0x218B, Script::Common),
    (0x2190, 0x2429, Script::Common),
    (0x2440, 0x244A, Script::Common),
    (0x2460, 0x27FF, Script::Common),
    (0x2800, 0x28FF, Script::Braille),
    (0x2900, 0x2B73, Script::Common),
    (0x2B76, 0x2BFF, Script::Common),
    (0x2C00, 0x2C5F, Script::Glagolitic),
    (0x2C60, 0x2C7F, Script::Latin),
    (0x2C80, 0x2CF3, Script::Coptic),
    (0x2CF9, 0x2CFF, Script::Coptic),
    (0x2D00, 0x2D25, Script::Georgian),
    (0x2D27, 0x2D27, Script::Georgian),
    (0x2D2D, 0x2D2D, Script::Georgian),
    (0x2D30, 0x2D67, Script::Tifinagh),
    (0x2D6F, 0x2D70, Script::Tifinagh),
    (0x2D7F, 0x2D7F, Script::Tifinagh),
    (0x2D80, 0x2D96, Script::Ethiopic),
    (0x2DA0, 0x2DA6, Script::Ethiopic),
    (0x2DA8, 0x2DAE, Script::Ethiopic),
    (0x2DB0, 0x2DB6, Script::Ethiopic),
    (0x2DB8, 0x2DBE, Script::Ethiopic),
    (0x2DC0, 0x2DC6, Script::Ethiopic),
    (0x2DC8, 0x2DCE, Script::Ethiopic),
    (0x2DD0, 0x2DD6, Script::Ethiopic),
    (0x2DD8, 0x2DDE, Script::Ethiopic),
    (0x2DE0, 0x2DFF, Script::Cyrillic),
    (0x2E00, 0x2E5D, Script::Common),
    (0x2E80, 0x2E99, Script::Han),
    (0x2E9B, 0x2EF3, Script::Han),
    (0x2F00, 0x2FD5, Script::Han),
    (0x2FF0, 0x3004, Script::Common),
    (0x3005, 0x3005, Script::Han),
    (0x3006, 0x3006, Script::Common),
    (0x3007, 0x3007, Script::Han),
    (0x3008, 0x3020, Script::Common),
    (0x3021, 0x3029, Script::Han),
    (0x302A, 0x302D, Script::Inherited),
    (0x302E, 0x302F, Script::Hangul),
    (0x3030, 0x3037, Script::Common),
    (0x3038, 0x303B, Script::Han),
    (0x303C, 0x303F, Script::Common),
    (0x3041, 0x3096, Script::Hiragana),
    (0x3099, 0x309A, Script::Inherited),
    (0x309B, 0x309C, Script::Common),
    (0x309D, 0x309F, Script::Hiragana),
    (0x30A0, 0x30A0, Script::Common),
    (0x30A1, 0x30FA, Script::Katakana),
    (0x30FB, 0x30FC, Script::Common),
    (0x30FD, 0x30FF, Script::Katakana),
    (0x3105, 0x312F, Script::Bopomofo),
    (0x3131, 0x318E, Script::Hangul),
    (0x3190, 0x319F, Script::Common),
    (0x31A0, 0x31BF, Script::Bopomofo),
    (0x31C0, 0x31E5, Script::Common),
    (0x31EF, 0x31EF, Script::Common),
    (0x31F0, 0x31FF, Script::Katakana),
    (0x3200, 0x321E, Script::Hangul),
    (0x3220, 0x325F, Script::Common),
    (0x3260, 0x327E, Script::Hangul),
    (0x327F, 0x32CF, Script::Common),
    (0x32D0, 0x32FE, Script::Katakana),
    (0x32FF, 0x32FF, Script::Common),
    (0x3300, 0x3357, Script::Katakana),
    (0x3358, 0x33FF, Script::Common),
    (0x3400, 0x4DBF, Script::Han),
    (0x4DC0, 0x4DFF, Script::Common),
    (0x4E00, 0x9FFF, Script::Han),
    (0xA000, 0xA48C, Script::Yi),
    (0xA490, 0xA4C6, Script::Yi),
    (0xA4D0, 0xA4FF, Script::Lisu),
    (0xA500, 0xA62B, Script::Vai),
    (0xA640, 0xA69F, Script::Cyrillic),
    (0xA6A0, 0xA6F7, Script::Bamum),
    (0xA700, 0xA721, Script::Common),
    (0xA722, 0xA787, Script::Latin),
    (0xA788, 0xA78A, Script::Common),
    (0xA78B, 0xA7DC, Script::Latin),
    (0xA7F1, 0xA7FF, Script::Latin),
    (0xA800, 0xA82C, Script::SylotiNagri),
    (0xA830, 0xA839, Script::Common),
    (0xA840, 0xA877, Script::PhagsPa),
    (0xA880, 0xA8C5, Script::Saurashtra),
    (0xA8CE, 0xA8D9, Script::Saurashtra),
    (0xA8E0, 0xA8FF, Script::Devanagari),
    (0xA900, 0xA92D, Script::KayahLi),
    (0xA92E, 0xA92E, Script::Common),
    (0xA92F, 0xA92F, Script::KayahLi),
    (0xA930, 0xA953, Script::Rejang),
    (0xA95F, 0xA95F, Script::Rejang),
    (0xA960, 0xA97C, Script::Hangul),
    (0xA980, 0xA9CD, Script::Javanese),
    (0xA9CF, 0xA9CF, Script::Common),
    (0xA9D0, 0xA9D9, Script::Javanese),
    (0xA9DE, 0xA9DF, Script::Javanese),
    (0xA9E0, 0xA9FE, Script::Myanmar),
    (0xAA00, 0xAA36, Script::Cham),
    (0xAA40, 0xAA4D, Script::Cham),
    (0xAA50, 0xAA59, Script::Cham),
    (0xAA5C, 0xAA5F, Script::Cham),
    (0xAA60, 0xAA7F, Script::Myanmar),
    (0xAA80, 0xAAC2, Script::TaiViet),
    (0xAADB, 0xAADF, Script::TaiViet),
    (0xAAE0, 0xAAF6, Script::MeeteiMayek),
    (0xAB01, 0xAB06, Script::Ethiopic),
    (0xAB09, 0xAB0E, Script::Ethiopic),
    (0xAB11, 0xAB16, Script::Ethiopic),
    (0xAB20, 0xAB26, Script::Ethiopic),
    (0xAB28, 0xAB2E, Script::Ethiopic),
    (0xAB30, 0xAB5A, Script::Latin),
    (0xAB5B, 0xAB5B, Script::Common),
    (0xAB5C, 0xAB64, Script::Latin),
    (0xAB65, 0xAB65, Script::Greek),
    (0xAB66, 0xAB69, Script::Latin),
    (0xAB6A, 0xAB6B, Script::Common),
    (0xAB70, 0xABBF, Script::Cherokee),
    (0xABC0, 0xABED, Script::MeeteiMayek),
    (0xABF0, 0xABF9, Script::MeeteiMayek),
    (0xAC00, 0xD7A3, Script::Hangul),
    (0xD7B0, 0xD7C6, Script::Hangul),
    (0xD7CB, 0xD7FB, Script::Hangul),
    (0xF900, 0xFA6D, Script::Han),
    (0xFA70, 0xFAD9, Script::Han),
    (0xFB00, 0xFB06, Script::Latin),
    (0xFB13, 0xFB17, Script::Armenian),
    (0xFB1D, 0xFB36, Script::Hebrew),
    (0xFB38, 0xFB3C, Script::Hebrew),
    (0xFB3E, 0xFB3E, Script::Hebrew),
    (0xFB40, 0xFB41, Script::Hebrew),
    (0xFB43, 0xFB44, Script::Hebrew),
    (0xFB46, 0xFB4F, Script::Hebrew),
    (0xFB50, 0xFD3D, Script::Arabic),
    (0xFD3E, 0xFD3F, Script::Common),
    (0xFD40, 0xFDCF, Script::Arabic),
    (0xFDF0, 0xFDFF, Script::Arabic),
    (0xFE00, 0xFE0F, Script::Inherited),
    (0xFE10, 0xFE19, Script::Common),
    (0xFE20, 0xFE2D, Script::Inherited),
    (0xFE2E, 0xFE2F, Script::Cyrillic),
    (0xFE30, 0xFE52, Script::Common),
    (0xFE54, 0xFE66, Script::Common),
    (0xFE68, 0xFE6B, Script::Common),
    (0xFE70, 0xFE74, Script::Arabic),
    (0xFE76, 0xFEFC, Script::Arabic),
    (0xFEFF, 0xFEFF, Script::Common),
    (0xFF01, 0xFF20, Script::Common),
    (0xFF21, 0xFF3A, Script::Latin),
    (0xFF3B, 0xFF40, Script::Common),
    (0xFF41, 0xFF5A, Script::Latin),
    (0xFF5B, 0xFF65, Script::Common),
    (0xFF66, 0xFF6F, Script::Katakana),
    (0xFF70, 0xFF70, Script::Common),
    (0xFF71, 0xFF9D, Script::Katakana),
    (0xFF9E, 0xFF9F, Script::Common),
    (0xFFA0, 0xFFBE, Script::Hangul),
    (0xFFC2, 0xFFC7, Script::Hangul),
    (0xFFCA, 0xFFCF, Script::Hangul),
    (0xFFD2, 0xFFD7, Script::Hangul),
    (0xFFDA, 0xFFDC, Script::Hangul),
    (0xFFE0, 0xFFE6, Script::Common),
    (0xFFE8, 0xFFEE, Script::Common),
    (0xFFF9, 0xFFFD, Script::Common),
    (0x10000, 0x1000B, Script::LinearB),
    (0x1000D, 0x10026, Script::LinearB),
    (0x10028, 0x1003A, Script::LinearB),
    (0x1003C, 0x1003D, Script::LinearB),
    (0x1003F, 0x1004D, Script::LinearB),
    (0x10050, 0x1005D, Script::LinearB),
    (0x10080, 0x100FA, Script::LinearB),
    (0x10100, 0x10102, Script::Common),
    (0x10107, 0x10133, Script::Common),
    (0x10137, 0x1013F, Script::Common),
    (0x10140, 0x1018E, Script::Greek),
    (0x10190, 0x1019C, Script::Common),
    (0x101A0, 0x101A0, Script::Greek),
    (0x101D0, 0x101FC, Script::Common),
    (0x101FD, 0x101FD, Script::Inherited),
    (0x10280, 0x1029C, Script::Lycian),
    (0x102A0, 0x102D0, Script::Carian),
    (0x102E0, 0x102E0, Script::Inherited),
    (0x102E1, 0x102FB, Script::Common),
    (0x10300, 0x10323, Script::OldItalic),
    (0x1032D, 0x1032F, Script::OldItalic),
    (0x10330, 0x1034A, Script::Gothic),
    (0x10350, 0x1037A, Script::OldPermic),
    (0x10380, 0x1039D, Script::Ugaritic),
    (0x1039F, 0x1039F, Script::Ugaritic),
    (0x103A0, 0x103C3, Script::OldPersian),
    (0x103C8, 0x103D5, Script::OldPersian),
    (0x10400, 0x1044F, Script::Deseret),
    (0x10450, 0x1047F, Script::Shavian),
    (0x10480, 0x1049D, Script::Osmanya),
    (0x104A0, 0x104A9, Script::Osmanya),
    (0x104B0, 0x104D3, Script::Osage),
    (0x104D8, 0x104FB, Script::Osage),
    (0x10500, 0x10527, Script::Elbasan),
    (0x10530, 0x10563, Script::CaucasianAlbanian),
    (0x1056F, 0x1056F, Script::CaucasianAlbanian),
    (0x10570, 0x1057A, Script::Vithkuqi),
    (0x1057C, 0x1058A, Script::Vithkuqi),
    (0x1058C, 0x10592, Script::Vithkuqi),
    (0x10594, 0x10595, Script::Vithkuqi),
    (0x10597, 0x105A1, Script::Vithkuqi),
    (0x105A3, 0x105B1, Script::Vithkuqi),
    (0x105B3, 0x105B9, Script::Vithkuqi),
    (0x105BB, 0x105BC, Script::Vithkuqi),
    (0x105C0, 0x105F3, Script::Todhri),
    (0x10600, 0x10736, Script::LinearA),
    (0x10740, 0x10755, Script::LinearA),
    (0x10760, 0x10767, Script::LinearA),
    (0x10780, 0x10785, Script::Latin),
    (0x10787, 0x107B0, Script::Latin),
    (0x107B2, 0x107BA, Script::Latin),
    (0x10800, 0x10805, Script::Cypriot),
    (0x10808, 0x10808, Script::Cypriot),
    (0x1080A, 0x10835, Script::Cypriot),
    (0x10837, 0x10838, Script::Cypriot),
    (0x1083C, 0x1083C, Script::Cypriot),
    (0x1083F, 0x1083F, Script::Cypriot),
    (0x10840, 0x10855, Script::ImperialAramaic),
    (0x10857, 0x1085F, Script::ImperialAramaic),
    (0x10860, 0x1087F, Script::Palmyrene),
    (0x10880, 0x1089E, Script::Nabataean),
    (0x108A7, 0x108AF, Script::Nabataean),
    (0x108E0, 0x108F2, Script::Hatran),
    (0x108F4, 0x108F5, Script::Hatran),
    (0x108FB, 0x108FF, Script::Hatran),
    (0x10900, 0x1091B, Script::Phoenician),
    (0x1091F, 0x1091F, Script::Phoenician),
    (0x10920, 0x10939, Script::Lydian),
    (0x1093F, 0x1093F, Script::Lydian),
    (0x10940, 0x10959, Script::Sidetic),
    (0x10980, 0x1099F, Script::MeroiticHieroglyphs),
    (0x109A0, 0x109B7, Script::MeroiticCursive),
    (0x109BC, 0x109CF, Script::MeroiticCursive),
    (0x109D2, 0x109FF, Script::MeroiticCursive),
    (0x10A00, 0x10A03, Script::Kharoshthi),
    (0x10A05, 0x10A06, Script::Kharoshthi),
    (0x10A0C, 0x10A13, Script::Kharoshthi),
    (0x10A15, 0x10A17, Script::Kharoshthi),
    (0x10A19, 0x10A35, Script::Kharoshthi),
    (0x10A38, 0x10A3A, Script::Kharoshthi),
    (0x10A3F, 0x10A48, Script::Kharoshthi),
    (0x10A50, 0x10A58, Script::Kharoshthi),
    (0x10A60, 0x10A7F, Script::OldSouthArabian),
    (0x10A80, 0x10A9F, Script::OldNorthArabian),
    (0x10AC0, 0x10AE6, Script::Manichaean),
    (0x10AEB, 0x10AF6, Script::Manichaean),
    (0x10B00, 0x10B35, Script::Avestan),
    (0x10B39, 0x10B3F, Script::Avestan),
    (0x10B40, 0x10B55, Script::InscriptionalParthian),
    (0x10B58, 0x10B5F, Script::InscriptionalParthian),
    (0x10B60, 0x10B72, Script::InscriptionalPahlavi),
    (0x10B78, 0x10B7F, Script::InscriptionalPahlavi),
    (0x10B80, 0x10B91, Script::PsalterPahlavi),
    (0x10B99, 0x10B9C, Script::PsalterPahlavi),
    (0x10BA9, 0x10BAF, Script::PsalterPahlavi),
    (0x10C00, 0x10C48, Script::OldTurkic),
    (0x10C80, 0x10CB2, Script::OldHungarian),
    (0x10CC0, 0x10CF2, Script::OldHungarian),
    (0x10CFA, 0x10CFF, Script::OldHungarian),
    (0x10D00, 0x10D27, Script::HanifiRohingya),
    (0x10D30, 0x10D39, Script::HanifiRohingya),
    (0x10D40, 0x10D65, Script::Garay),
    (0x10D69, 0x10D85, Script::Garay),
    (0x10D8E, 0x10D8F, Script::Garay),
    (0x10E60, 0x10E7E, Script::Arabic),
    (0x10E80, 0x10EA9, Script::Yezidi),
    (0x10EAB, 0x10EAD, Script::Yezidi),
    (0x10EB0, 0x10EB1, Script::Yezidi),
    (0x10EC2, 0x10EC7, Script::Arabic),
    (0x10ED0, 0x10ED8, Script::Arabic),
    (0x10EFA, 0x10EFF, Script::Arabic),
    (0x10F00, 0x10F27, Script::OldSogdian),
    (0x10F30, 0x10F59, Script::Sogdian),
    (0x10F70, 0x10F89, Script::OldUyghur),
    (0x10FB0, 0x10FCB, Script::Chorasmian),
    (0x10FE0, 0x10FF6, Script::Elymaic),
    (0x11000, 0x1104D, Script::Brahmi),
    (0x11052, 0x11075, Script::Brahmi),
    (0x1107F, 0x1107F, Script::Brahmi),
    (0x11080, 0x110C2, Script::Kaithi),
    (0x110CD, 0x110CD, Script::Kaithi),
    (0x110D0, 0x110E8, Script::SoraSompeng),
    (0x110F0, 0x110F9, Script::SoraSompeng),
    (0x11100, 0x11134, Script::Chakma),
    (0x11136, 0x11147, Script::Chakma),
    (0x11150, 0x11176, Script::Mahajani),
    (0x11180, 0x111DF, Script::Sharada),
    (0x111E1, 0x111F4, Script::Sinhala),
    (0x11200, 0x11211, Script::Khojki),
    (0x11213, 0x11241, Script::Khojki),
    (0x11280, 0x11286, Script::Multani),
    (0x11288, 0x11288, Script::Multani),
    (0x1128A, 0x1128D, Script::Multani),
    (0x1128F, 0x1129D, Script::Multani),
    (0x1129F, 0x112A9, Script::Multani),
    (0x112B0, 0x112EA, Script::Khudawadi),
    (0x112F0, 0x112F9, Script::Khudawadi),
    (0x11300, 0x11303, Script::Grantha),
    (0x11305, 0x1130C, Script::Grantha),
    (0x1130F, 0x11310, Script::Grantha),
    (0x11313, 0x11328, Script::Grantha),
    (0x1132A, 0x11330, Script::Grantha),
    (0x11332, 0x11333, Script::Grantha),
    (0x11335, 0x11339, Script::Grantha),
    (0x1133B, 0x1133B, Script::Inherited),
    (0x1133C, 0x11344, Script::Grantha),
    (0x11347, 0x11348, Script::Grantha),
    (0x1134B, 0x1134D, Script::Grantha),
    (0x11350, 0x11350, Script::Grantha),
    (0x11357, 0x11357, Script::Grantha),
    (0x1135D, 0x11363, Script::Grantha),
    (0x11366, 0x1136C, Script::Grantha),
    (0x11370, 0x11374, Script::Grantha),
    (0x11380, 0x11389, Script::TuluTigalari),
    (0x1138B, 0x1138B, Script::TuluTigalari),
    (0x1138E, 0x1138E, Script::TuluTigalari),
    (0x11390, 0x113B5, Script::TuluTigalari),
    (0x113B7, 0x113C0, Script::TuluTigalari),
    (0x113C2, 0x113C2, Script::TuluTigalari),
    (0x113C5, 0x113C5, Script::TuluTigalari),
    (0x113C7, 0x113CA, Script::TuluTigalari),
    (0x113CC, 0x113D5, Script::TuluTigalari),
    (0x113D7, 0x113D8, Script::TuluTigalari),
    (0x113E1, 0x113E2, Script::TuluTigalari),
    (0x11400, 0x1145B, Script::Newa),
    (0x1145D, 0x11461, Script::Newa),
    (0x11480, 0x114C7, Script::Tirhuta),
    (0x114D0, 0x114D9, Script::Tirhuta),
    (0x11580, 0x115B5, Script::Siddham),
    (0x115B8, 0x115DD, Script::Siddham),
    (0x11600, 0x11644, Script::Modi),
    (0x11650, 0x11659, Script::Modi),
    (0x11660, 0x1166C, Script::Mongolian),
    (0x11680, 0x116B9, Script::Takri),
    (0x116C0, 0x116C9, Script::Takri),
    (0x116D0, 0x116E3, Script::Myanmar),
    (0x11700, 0x1171A, Script::Ahom),
    (0x1171D, 0x1172B, Script::Ahom),
    (0x11730, 0x11746, Script::Ahom),
    (0x11800, 0x1183B, Script::Dogra),
    (0x118A0, 0x118F2, Script::WarangCiti),
    (0x118FF, 0x118FF, Script::WarangCiti),
    (0x11900, 0x11906, Script::DivesAkuru),
    (0x11909, 0x11909, Script::DivesAkuru),
    (0x1190C, 0x11913, Script::DivesAkuru),
    (0x11915, 0x11916, Script::DivesAkuru),
    (0x11918, 0x11935, Script::DivesAkuru),
    (0x11937, 0x11938, Script::DivesAkuru),
    (0x1193B, 0x11946, Script::DivesAkuru),
    (0x11950, 0x11959, Script::DivesAkuru),
    (0x119A0, 0x119A7, Script::Nandinagari),
    (0x119AA, 0x119D7, Script::Nandinagari),
    (0x119DA, 0x119E4, Script::Nandinagari),
    (0x11A00, 0x11A47, Script::ZanabazarSquare),
    (0x11A50, 0x11AA2, Script::Soyombo),
    (0x11AB0, 0x11ABF, Script::CanadianAboriginal),
    (0x11AC0, 0x11AF8, Script::PauCinHau),
    (0x11B00, 0x11B09, Script::Devanagari),
    (0x11B60, 0x11B67, Script::Sharada),
    (0x11BC0, 0x11BE1, Script::Sunuwar),
    (0x11BF0, 0x11BF9, Script::Sunuwar),
    (0x11C00, 0x11C08, Script::Bhaiksuki),
    (0x11C0A, 0x11C36, Script::Bhaiksuki),
    (0x11C38, 0x11C45, Script::Bhaiksuki),
    (0x11C50, 0x11C6C, Script::Bhaiksuki),
    (0x11C70, 0x11C8F, Script::Marchen),
    (0x11C92, 0x11CA7, Script::Marchen),
    (0x11CA9, 0x11CB6, Script::Marchen),
    (0x11D00, 0x11D06, Script::MasaramGondi),
    (0x11D08, 0x11D09, Script::MasaramGondi),
    (0x11D0B, 0x11D36, Script::MasaramGondi),
    (0x11D3A, 0x11D3A, Script::MasaramGondi),
    (0x11D3C, 0x11D3D, Script::MasaramGondi),
    (0x11D3F, 0x11D47, Script::MasaramGondi),
    (0x11D50, 0x11D59, Script::MasaramGondi),
    (0x11D60, 0x11D65, Script::GunjalaGondi),
    (0x11D67, 0x11D68, Script::GunjalaGondi),
    (0x11D6A, 0x11D8E, Script::GunjalaGondi),
    (0x11D90, 0x11D91, Script::GunjalaGondi),
    (0x11D93, 0x11D98, Script::GunjalaGondi),
    (0x11DA0, 0x11DA9, Script::GunjalaGondi),
    (0x11DB0, 0x11DDB, Script::TolongSiki),
    (0x11DE0, 0x11DE9, Script::TolongSiki),
    (0x11EE0, 0x11EF8, Script::Makasar),
    (0x11F00, 0x11F10, Script::Kawi),
    (0x11F12, 0x11F3A, Script::Kawi),
    (0x11F3E, 0x11F5A, Script::Kawi),
    (0x11FB0, 0x11FB0, Script::Lisu),
    (0x11FC0, 0x11FF1, Script::Tamil),
    (0x11FFF, 0x11FFF, Script::Tamil),
    (0x12000, 0x12399, Script::Cuneiform),
    (0x12400, 0x1246E, Script::Cuneiform),
    (0x12470, 0x12474, Script::Cuneiform),
    (0x12480, 0x12543, Script::Cuneiform),
    (0x12F90, 0x12FF2, Script::CyproMinoan),
    (0x13000, 0x13455, Script::EgyptianHieroglyphs),
    (0x13460, 0x143FA, Script::EgyptianHieroglyphs),
    (0x14400, 0x14646, Script::AnatolianHieroglyphs),
    (0x16100, 0x16139, Script::GurungKhema),
    (0x16800, 0x16A38, Script::Bamum),
    (0x16A40, 0x16A5E, Script::Mro),
    (0x16A60, 0x16A69, Script::Mro),
    (0x16A6E, 0x16A6F, Script::Mro),
    (0x16A70, 0x16ABE, Script::Tangsa),
    (0x16AC0, 0x16AC9, Script::Tangsa),
    (0x16AD0, 0x16AED, Script::BassaVah),
    (0x16AF0, 0x16AF5, Script::BassaVah),
    (0x16B00, 0x16B45, Script::PahawhHmong),
    (0x16B50, 0x16B59, Script::PahawhHmong),
    (0x16B5B, 0x16B61, Script::PahawhHmong),
    (0x16B63, 0x16B77, Script::PahawhHmong),
    (0x16B7D, 0x16B8F, Script::PahawhHmong),
    (0x16D40, 0x16D79, Script::KiratRai),
    (0x16E40, 0x16E9A, Script::Medefaidrin),
    (0x16EA0, 0x16EB8, Script::BeriaErfe),
    (0x16EBB, 0x16ED3, Script::BeriaErfe),
    (0x16F00, 0x16F4A, Script::Miao),
    (0x16F4F, 0x16F87, Script::Miao),
    (0x16F8F, 0x16F9F, Script::Miao),
    (0x16FE0, 0x16FE0, Script::Tangut),
    (0x16FE1, 0x16FE1, Script::Nushu),
    (0x16FE2, 0x16FE3, Script::Han),
    (0x16FE4, 0x16FE4, Script::KhitanSmallScript),
    (0x16FF0, 0x16FF6, Script::Han),
    (0x17000, 0x18AFF, Script::Tangut),
    (0x18B00, 0x18CD5, Script::KhitanSmallScript),
    (0x18CFF, 0x18CFF, Script::KhitanSmallScript),
    (0x18D00, 0x18D1E, Script::Tangut),
    (0x18D80, 0x18DF2, Script::Tangut),
    (0x1AFF0, 0x1AFF3, Script::Katakana),
    (0x1AFF5, 0x1AFFB, Script::Katakana),
    (0x1AFFD, 0x1AFFE, Script::Katakana),
    (0x1B000, 0x1B000, Script::Katakana),
    (0x1B001, 0x1B11F, Script::Hiragana),
    (0x1B120, 0x1B122, Script::Katakana),
    (0x1B132, 0x1B132, Script::Hiragana),
    (0x1B150, 0x1B152, Script::Hiragana),
    (0x1B155, 0x1B155, Script::Katakana),
    (0x1B164, 0x1B167, Script::Katakana),
    (0x1B170, 0x1B2FB, Script::Nushu),
    (0x1BC00, 0x1BC6A, Script::Duployan),
    (0x1BC70, 0x1BC7C, Script::Duployan),
    (0x1BC80, 0x1BC88, Script::Duployan),
    (0x1BC90, 0x1BC99, Script::Duployan),
    (0x1BC9C, 0x1BC9F, Script::Duployan),
    (0x1BCA0, 0x1BCA3, Script::Common),
    (0x1CC00, 0x1CCFC, Script::Common),
    (0x1CD00, 0x1CEB3, Script::Common),
    (0x1CEBA, 0x1CED0, Script::Common),
    (0x1CEE0, 0x1CEF0, Script::Common),
    (0x1CF00, 0x1CF2D, Script::Inherited),
    (0x1CF30, 0x1CF46, Script::Inherited),
    (0x1CF50, 0x1CFC3, Script::Common),
    (0x1D000, 0x1D0F5, Script::Common),
    (0x1D100, 0x1D126, Script::Common),
    (0x1D129, 0x1D166, Script::Common),
    (0x1D167, 0x1D169, Script::Inherited),
    (0x1D16A, 0x1D17A, Script::Common),
    (0x1D17B, 0x1D182, Script::Inherited),
    (0x1D183, 0x1D184, Script::Common),
    (0x1D185, 0x1D18B, Script::Inherited),
    (0x1D18C, 0x1D1A9, Script::Common),
    (0x1D1AA, 0x1D1AD, Script::Inherited),
    (0x1D1AE, 0x1D1EA, Script::Common),
    (0x1D200, 0x1D245, Script::Greek),
    (0x1D2C0, 0x1D2D3, Script::Common),
    (0x1D2E0, 0x1D2F3, Script::Common),
    (0x1D300, 0x1D356, Script::Common),
    (0x1D360, 0x1D378, Script::Common),
    (0x1D400, 0x1D454, Script::Common),
    (0x1D456, 0x1D49C, Script::Common),
    (0x1D49E, 0x1D49F, Script::Common),
    (0x1D4A2, 0x1D4A2, Script::Common),
    (0x1D4A5, 0x1D4A6, Script::Common),
    (0x1D4A9, 0x1D4AC, Script::Common),
    (0x1D4AE, 0x1D4B9, Script::Common),
    (0x1D4BB, 0x1D4BB, Script::Common),
    (0x1D4BD, 0x1D4C3, Script::Common),
    (0x1D4C5, 0x1D505, Script::Common),
    (0x1D507, 0x1D50A, Script::Common),
    (0x1D50D, 0x1D514, Script::Common),
    (0x1D516, 0x1D51C, Script::Common),
    (0x1D51E, 0x1D539, Script::Common),
    (0x1D53B, 0x1D53E, Script::Common),
    (0x1D540, 0x1D544, Script::Common),
    (0x1D546, 0x1D546, Script::Common),
    (0x1D54A, 0x1D550, Script::Common),
    (0x1D552, 0x1D6A5, Script::Common),
    (0x1D6A8, 0x1D7CB, Script::Common),
    (0x1D7CE, 0x1D7FF, Script::Common),
    (0x1D800, 0x1DA8B, Script::SignWriting),
    (0x1DA9B, 0x1DA9F, Script::SignWriting),
    (0x1DAA1, 0x1DAAF, Script::SignWriting),
    (0x1DF00, 0x1DF1E, Script::Latin),
    (0x1DF25, 0x1DF2A, Script::Latin),
    (0x1E000, 0x1E006, Script::Glagolitic),
    (0x1E008, 0x1E018, Script::Glagolitic),
    (0x1E01B, 0x1E021, Script::Glagolitic),
    (0x1E023, 0x1E024, Script::Glagolitic),
    (0x1E026, 0x1E02A, Script::Glagolitic),
    (0x1E030, 0x1E06D, Script::Cyrillic),
    (0x1E08F, 0x1E08F, Script::Cyrillic),
    (0x1E100, 0x1E12C, Script::NyiakengPuachueHmong),
    (0x1E130, 0x1E13D, Script::NyiakengPuachueHmong),
    (0x1E140, 0x1E149, Script::NyiakengPuachueHmong),
    (0x1E14E, 0x1E14F, Script::NyiakengPuachueHmong),
    (0x1E290, 0x1E2AE, Script::Toto),
    (0x1E2C0, 0x1E2F9, Script::Wancho),
    (0x1E2FF, 0x1E2FF, Script::Wancho),
    (0x1E4D0, 0x1E4F9, Script::NagMundari),
    (0x1E5D0, 0x1E5FA, Script::OlOnal),
    (0x1E5FF, 0x1E5FF, Script::OlOnal),
    (0x1E6C0, 0x1E6DE, Script::TaiYo),
    (0x1E6E0, 0x1E6F5, Script::TaiYo),
    (0x1E6FE, 0x1E6FF, Script::TaiYo),
    (0x1E7E0, 0x1E7E6, Script::Ethiopic),
    (0x1E7E8, 0x1E7EB, Script::Ethiopic),
    (0x1E7ED, 0x1E7EE, Script::Ethiopic),
    (0x1E7F0, 0x1E7FE, Script::Ethiopic),
    (0x1E800, 0x1E8C4, Script::MendeKikakui),
    (0x1E8C7, 0x1E8D6, Script::MendeKikakui),
    (0x1E900, 0x1E94B, Script::Adlam),
    (0x1E950, 0x1E959, Script::Adlam),
    (0x1E95E, 0x1E95F, Script::Adlam),
    (0x1EC71, 0x1ECB4, Script::Common),
    (0x1ED01, 0x1ED3D, Script::Common),
    (0x1EE00, 0x1EE03, Script::Arabic),
    (0x1EE05, 0x1EE1F, Script::Arabic),
    (0x1EE21, 0x1EE22, Script::Arabic),
    (0x1EE24, 0x1EE24, Script::Arabic),
    (0x1EE27, 0x1EE27, Script::Arabic),
    (0x1EE29, 0x1EE32, Script::Arabic),
    (0x1EE34, 0x1EE37, Script::Arabic),
    (0x1EE39, 0x1EE39, Script::Arabic),
    (0x1EE3B, 0x1EE3B, Script::Arabic),
    (0x1EE42, 0x1EE42, Script::Arabic),
    (0x1EE47, 0x1EE47, Script::Arabic),
    (0x1EE49, 0x1EE49, Script::Arabic),
    (0x1EE4B, 0x1EE4B, Script::Arabic),
    (0x1EE4D, 0x1EE4F, Script::Arabic),
    (0x1EE51, 0x1EE52, Script::Arabic),
    (0x1EE54, 0x1EE54, Script::Arabic),
    (0x1EE57, 0x1EE57, Script::Arabic),
    (0x1EE59, 0x1EE59, Script::Arabic),
    (0x1EE5B, 0x1EE5B, Script::Arabic),
    (0x1EE5D, 0x1EE5D, Script::Arabic),
    (0x1EE5F, 0x1EE5F, Script::Arabic),
    (0x1EE61, 0x1EE62, Script::Arabic),
    (0x1EE64, 0x1EE64, Script::Arabic),
    (0x1EE67, 0x1EE6A, Script::Arabic),
    (0x1EE6C, 0x1EE72, Script::Arabic),
    (0x1EE74, 0x1EE77, Script::Arabic),
    (0x1EE79, 0x1EE7C, Script::Arabic),
    (0x1EE7E, 0x1EE7E, Script::Arabic),
    (0x1EE80, 0x1EE89, Script::Arabic),
    (0x1EE8B, 0x1EE9B, Script::Arabic),
    (0x1EEA1, 0x1EEA3, Script::Arabic),
    (0x1EEA5, 0x1EEA9, Script::Arabic),
    (0x1EEAB, 0x1EEBB, Script::Arabic),
    (0x1EEF0, 0x1EEF1, Script::Arabic),
    (0x1F000, 0x1F02B, Script::Common),
    (0x1F030, 0x1F093, Script::Common),
    (0x1F0A0, 0x1F0AE, Script::Common),
    (0x1F0B1, 0x1F0BF, Script::Common),
    (0x1F0C1, 0x1F0CF, Script::Common),
    (0x1F0D1, 0x1F0F5, Script::Common),
    (0x1F100, 0x1F1AD, Script::Common),
    (0x1F1E6, 0x1F1FF, Script::Common),
    (0x1F200, 0x1F200, Script::Hiragana),
    (0x1F201, 0x1F202, Script::Common),
    (0x1F210, 0x1F23B, Script::Common),
    (0x1F240, 0x1F248, Script::Common),
    (0x1F250, 0x1F251, Script::Common),
    (0x1F260, 0x1F265, Script::Common),
    (0x1F300, 0x1F6D8, Script::Common),
    (0x1F6DC, 0x1F6EC, Script::Common),
    (0x1F6F0, 0x1F6FC, Script::Common),
    (0x1F700, 0x1F7D9, Script::Common),
    (0x1F7E0, 0x1F7EB, Script::Common),
    (0x1F7F0, 0x1F7F0, Script::Common),
    (0x1F800, 0x1F80B, Script::Common),
    (0x1F810, 0x1F847, Script::Common),
    (0x1F850, 0x1F859, Script::Common),
    (0x1F860, 0x1F887, Script::Common),
    (0x1F890, 0x1F8AD, Script::Common),
    (0x1F8B0, 0x1F8BB, Script::Common),
    (0x1F8C0, 0x1F8C1, Script::Common),
    (0x1F8D0, 0x1F8D8, Script::Common),
    (0x1F900, 0x1FA57, Script::Common),
    (0x1FA60, 0x1FA6D, Script::Common),
    (0x1FA70, 0x1FA7C, Script::Common),
    (0x1FA80, 0x1FA8A, Script::Common),
    (0x1FA8E, 0x1FAC6, Script::Common),
    (0x1FAC8, 0x1FAC8, Script::Common),
    (0x1FACD, 0x1FADC, Script::Common),
    (0x1FADF, 0x1FAEA, Script::Common),
    (0x1FAEF, 0x1FAF8, Script::Common),
    (0x1FB00, 0x1FB92, Script::Common),
    (0x1FB94, 0x1FBFA, Script::Common),
    (0x20000, 0x2A6DF, Script::Han),
    (0x2A700, 0x2B81D, Script::Han),
    (0x2B820, 0x2CEAD, Script::Han),
    (0x2CEB0, 0x2EBE0, Script::Han),
    (0x2EBF0, 0x2EE5D, Script::Han),
    (0x2F800, 0x2FA1D, Script::Han),
    (0x30000, 0x3134A, Script::Han),
    (0x31350, 0x33479, Script::Han),
    (0xE0001, 0xE0001, Script::Common),
    (0xE0020, 0xE007F, Script::Common),
    (0xE0100, 0xE01EF, Script::Inherited),
];

/// Packed `EmojiProperties` bits for every codepoint that carries at least
/// one property from emoji-data.txt.
pub const EMOJI_PROPERTY_RANGES: &[(u32, u32, u8)] = &[
    (0x0023, 0x0023, 1), (0x002A, 0x002A, 1), (0x0030, 0x0039, 1), (0x00A9, 0x00A9, 17),
    (0x00AE, 0x00AE, 17), (0x203C, 0x203C, 17), (0x2049, 0x2049, 17), (0x2122, 0x2122, 17),
    (0x2139, 0x2139, 17), (0x2194, 0x2199, 17), (0x21A9, 0x21AA, 17), (0x231A, 0x231B, 19),
    (0x2328, 0x2328, 17), (0x23CF, 0x23CF, 17), (0x23E9, 0x23EC, 19), (0x23ED, 0x23EF, 17),
    (0x23F0, 0x23F0, 19), (0x23F1, 0x23F2, 17), (0x23F3, 0x23F3, 19), (0x23F8, 0x23FA, 17),
    (0x24C2, 0x24C2, 17), (0x25AA, 0x25AB, 17), (0x25B6, 0x25B6, 17), (0x25C0, 0x25C0, 17),
    (0x25FB, 0x25FC, 17), (0x25FD, 0x25FE, 19), (0x2600, 0x2604, 17), (0x260E, 0x260E, 17),
    (0x2611, 0x2611, 17), (0x2614, 0x2615, 19), (0x2618, 0x2618, 17), (0x261D, 0x261D, 25),
    (0x2620, 0x2620, 17), (0x2622, 0x2623, 17), (0x2626, 0x2626, 17), (0x262A, 0x262A, 17),
    (0x262E, 0x262F, 17), (0x2638, 0x263A, 17), (0x2640, 0x2640, 17), (0x2642, 0x2642, 17),
    (0x2648, 0x2653, 19), (0x265F, 0x2660, 17), (0x2663, 0x2663, 17), (0x2665, 0x2666, 17),
    (0x2668, 0x2668, 17), (0x267B, 0x267B, 17), (0x267E, 0x267E, 17), (0x267F, 0x267F, 19),
    (0x2692, 0x2692, 17), (0x2693, 0x2693, 19), (0x2694, 0x2697, 17), (0x2699, 0x2699, 17),
    (0x269B, 0x269C, 17), (0x26A0, 0x26A0, 17), (0x26A1, 0x26A1, 19), (0x26A7, 0x26A7, 17),
    (0x26AA, 0x26AB, 19), (0x26B0, 0x26B1, 17), (0x26BD, 0x26BE, 19), (0x26C4, 0x26C5, 19),
    (0x26C8, 0x26C8, 17), (0x26CE, 0x26CE, 19), (0x26CF, 0x26CF, 17), (0x26D1, 0x26D1, 17),
    (0x26D3, 0x26D3, 17), (0x26D4, 0x26D4, 19), (0x26E9, 0x26E9, 17), (0x26EA, 0x26EA, 19),
    (0x26F0, 0x26F1, 17), (0x26F2, 0x26F3, 19), (0x26F4, 0x26F4, 17), (0x26F5, 0x26F5, 19),
    (0x26F7, 0x26F8, 17), (0x26F9, 0x26F9, 25), (0x26FA, 0x26FA, 19), (0x26FD, 0x26FD, 19),
    (0x2702, 0x2702, 17), (0x2705, 0x2705, 19), (0x2708, 0x2709, 17), (0x270A, 0x270B, 27),
    (0x270C, 0x270D, 25), (0x270F, 0x270F, 17), (0x2712, 0x2712, 17), (0x2714, 0x2714, 17),
    (0x2716, 0x2716, 17), (0x271D, 0x271D, 17), (0x2721, 0x2721, 17), (0x2728, 0x2728, 19),
    (0x2733, 0x2734, 17), (0x2744, 0x2744, 17), (0x2747, 0x2747, 17), (0x274C, 0x274C, 19),
    (0x274E, 0x274E, 19), (0x2753, 0x2755, 19), (0x2757, 0x2757, 19), (0x2763, 0x2764, 17),
    (0x2795, 0x2797, 19), (0x27A1, 0x27A1, 17), (0x27B0, 0x27B0, 19), (0x27BF, 0x27BF, 19),
    (0x2934, 0x2935, 17), (0x2B05, 0x2B07, 17), (0x2B1B, 0x2B1C, 19), (0x2B50, 0x2B50, 19),
    (0x2B55, 0x2B55, 19), (0x3030, 0x3030, 17), (0x303D, 0x303D, 17), (0x3297, 0x3297, 17),
    (0x3299, 0x3299, 17), (0x1F004, 0x1F004, 19), (0x1F02C, 0x1F02F, 16), (0x1F094, 0x1F09F, 16),
    (0x1F0AF, 0x1F0B0, 16), (0x1F0C0, 0x1F0C0, 16), (0x1F0CF, 0x1F0CF, 19), (0x1F0D0, 0x1F0D0, 16),
    (0x1F0F6, 0x1F0FF, 16), (0x1F170, 0x1F171, 17), (0x1F17E, 0x1F17F, 17), (0x1F18E, 0x1F18E, 19),
    (0x1F191, 0x1F19A, 19), (0x1F1AE, 0x1F1E5, 16), (0x1F1E6, 0x1F1FF, 3), (0x1F201, 0x1F201, 19),
    (0x1F202, 0x1F202, 17), (0x1F203, 0x1F20F, 16), (0x1F21A, 0x1F21A, 19), (0x1F22F, 0x1F22F, 19),
    (0x1F232, 0x1F236, 19), (0x1F237, 0x1F237, 17), (0x1F238, 0x1F23A, 19), (0x1F23C, 0x1F23F, 16),
    (0x1F249, 0x1F24F, 16), (0x1F250, 0x1F251, 19), (0x1F252, 0x1F25F, 16), (0x1F266, 0x1F2FF, 16),
    (0x1F300, 0x1F320, 19), (0x1F321, 0x1F321, 17), (0x1F324, 0x1F32C, 17), (0x1F32D, 0x1F335, 19),
    (0x1F336, 0x1F336, 17), (0x1F337, 0x1F37C, 19), (0x1F37D, 0x1F37D, 17), (0x1F37E, 0x1F384, 19),
    (0x1F385, 0x1F385, 27), (0x1F386, 0x1F393, 19), (0x1F396, 0x1F397, 17), (0x1F399, 0x1F39B, 17),
    (0x1F39E, 0x1F39F, 17), (0x1F3A0, 0x1F3C1, 19), (0x1F3C2, 0x1F3C4, 27), (0x1F3C5, 0x1F3C6, 19),
    (0x1F3C7, 0x1F3C7, 27), (0x1F3C8, 0x1F3C9, 19), (0x1F3CA, 0x1F3CA, 27), (0x1F3CB, 0x1F3CC, 25),
    (0x1F3CD, 0x1F3CE, 17), (0x1F3CF, 0x1F3D3, 19), (0x1F3D4, 0x1F3DF, 17), (0x1F3E0, 0x1F3F0, 19),
    (0x1F3F3, 0x1F3F3, 17), (0x1F3F4, 0x1F3F4, 19), (0x1F3F5, 0x1F3F5, 17), (0x1F3F7, 0x1F3F7, 17),
    (0x1F3F8, 0x1F3FA, 19), (0x1F3FB, 0x1F3FF, 7), (0x1F400, 0x1F43E, 19), (0x1F43F, 0x1F43F, 17),
    (0x1F440, 0x1F440, 19), (0x1F441, 0x1F441, 17), (0x1F442, 0x1F443, 27), (0x1F444, 0x1F445, 19),
    (0x1F446, 0x1F450, 27), (0x1F451, 0x1F465, 19), (0x1F466, 0x1F478, 27), (0x1F479, 0x1F47B, 19),
    (0x1F47C, 0x1F47C, 27), (0x1F47D, 0x1F480, 19), (0x1F481, 0x1F483, 27), (0x1F484, 0x1F484, 19),
    (0x1F485, 0x1F487, 27), (0x1F488, 0x1F48E, 19), (0x1F48F, 0x1F48F, 27), (0x1F490, 0x1F490, 19),
    (0x1F491, 0x1F491, 27), (0x1F492, 0x1F4A9, 19), (0x1F4AA, 0x1F4AA, 27), (0x1F4AB, 0x1F4FC, 19),
    (0x1F4FD, 0x1F4FD, 17), (0x1F4FF, 0x1F53D, 19), (0x1F549, 0x1F54A, 17), (0x1F54B, 0x1F54E, 19),
    (0x1F550, 0x1F567, 19), (0x1F56F, 0x1F570, 17), (0x1F573, 0x1F573, 17), (0x1F574, 0x1F575, 25),
    (0x1F576, 0x1F579, 17), (0x1F57A, 0x1F57A, 27), (0x1F587, 0x1F587, 17), (0x1F58A, 0x1F58D, 17),
    (0x1F590, 0x1F590, 25), (0x1F595, 0x1F596, 27), (0x1F5A4, 0x1F5A4, 19), (0x1F5A5, 0x1F5A5, 17),
    (0x1F5A8, 0x1F5A8, 17), (0x1F5B1, 0x1F5B2, 17), (0x1F5BC, 0x1F5BC, 17), (0x1F5C2, 0x1F5C4, 17),
    (0x1F5D1, 0x1F5D3, 17), (0x1F5DC, 0x1F5DE, 17), (0x1F5E1, 0x1F5E1, 17), (0x1F5E3, 0x1F5E3, 17),
    (0x1F5E8, 0x1F5E8, 17), (0x1F5EF, 0x1F5EF, 17), (0x1F5F3, 0x1F5F3, 17), (0x1F5FA, 0x1F5FA, 17),
    (0x1F5FB, 0x1F644, 19), (0x1F645, 0x1F647, 27), (0x1F648, 0x1F64A, 19), (0x1F64B, 0x1F64F, 27),
    (0x1F680, 0x1F6A2, 19), (0x1F6A3, 0x1F6A3, 27), (0x1F6A4, 0x1F6B3, 19), (0x1F6B4, 0x1F6B6, 27),
    (0x1F6B7, 0x1F6BF, 19), (0x1F6C0, 0x1F6C0, 27), (0x1F6C1, 0x1F6C5, 19), (0x1F6CB, 0x1F6CB, 17),
    (0x1F6CC, 0x1F6CC, 27), (0x1F6CD, 0x1F6CF, 17), (0x1F6D0, 0x1F6D2, 19), (0x1F6D5, 0x1F6D8, 19),
    (0x1F6D9, 0x1F6DB, 16), (0x1F6DC, 0x1F6DF, 19), (0x1F6E0, 0x1F6E5, 17), (0x1F6E9, 0x1F6E9, 17),
    (0x1F6EB, 0x1F6EC, 19), (0x1F6ED, 0x1F6EF, 16), (0x1F6F0, 0x1F6F0, 17), (0x1F6F3, 0x1F6F3, 17),
    (0x1F6F4, 0x1F6FC, 19), (0x1F6FD, 0x1F6FF, 16), (0x1F7DA, 0x1F7DF, 16), (0x1F7E0, 0x1F7EB, 19),
    (0x1F7EC, 0x1F7EF, 16), (0x1F7F0, 0x1F7F0, 19), (0x1F7F1, 0x1F7FF, 16), (0x1F80C, 0x1F80F, 16),
    (0x1F848, 0x1F84F, 16), (0x1F85A, 0x1F85F, 16), (0x1F888, 0x1F88F, 16), (0x1F8AE, 0x1F8AF, 16),
    (0x1F8BC, 0x1F8BF, 16), (0x1F8C2, 0x1F8CF, 16), (0x1F8D9, 0x1F8FF, 16), (0x1F90C, 0x1F90C, 27),
    (0x1F90D, 0x1F90E, 19), (0x1F90F, 0x1F90F, 27), (0x1F910, 0x1F917, 19), (0x1F918, 0x1F91F, 27),
    (0x1F920, 0x1F925, 19), (0x1F926, 0x1F926, 27), (0x1F927, 0x1F92F, 19), (0x1F930, 0x1F939, 27),
    (0x1F93A, 0x1F93A, 19), (0x1F93C, 0x1F93E, 27), (0x1F93F, 0x1F945, 19), (0x1F947, 0x1F976, 19),
    (0x1F977, 0x1F977, 27), (0x1F978, 0x1F9B4, 19), (0x1F9B5, 0x1F9B6, 27), (0x1F9B7, 0x1F9B7, 19),
    (0x1F9B8, 0x1F9B9, 27), (0x1F9BA, 0x1F9BA, 19), (0x1F9BB, 0x1F9BB, 27), (0x1F9BC, 0x1F9CC, 19),
    (0x1F9CD, 0x1F9CF, 27), (0x1F9D0, 0x1F9D0, 19), (0x1F9D1, 0x1F9DD, 27), (0x1F9DE, 0x1F9FF, 19),
    (0x1FA58, 0x1FA5F, 16), (0x1FA6E, 0x1FA6F, 16), (0x1FA70, 0x1FA7C, 19), (0x1FA7D, 0x1FA7F, 16),
    (0x1FA80, 0x1FA8A, 19), (0x1FA8B, 0x1FA8D, 16), (0x1FA8E, 0x1FAC2, 19), (0x1FAC3, 0x1FAC5, 27),
    (0x1FAC6, 0x1FAC6, 19), (0x1FAC7, 0x1FAC7, 16), (0x1FAC8, 0x1FAC8, 19), (0x1FAC9, 0x1FACC, 16),
    (0x1FACD, 0x1FADC, 19), (0x1FADD, 0x1FADE, 16), (0x1FADF, 0x1FAEA, 19), (0x1FAEB, 0x1FAEE, 16),
    (0x1FAEF, 0x1FAEF, 19), (0x1FAF0, 0x1FAF8, 27), (0x1FAF9, 0x1FAFF, 16), (0x1FC00, 0x1FFFD, 16),
];
