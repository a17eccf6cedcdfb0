//! Codepoint property lookups.
//!
//! Thin accessors over the compiled UCD range tables: the script
//! property, the binary emoji properties from emoji-data.txt, and the
//! derived [`EmojiSegmentationCategory`] consumed by the emoji
//! presentation scanner.

use crate::script::Script;
use crate::unicode_data::{EMOJI_PROPERTY_RANGES, SCRIPT_RANGES};

use bitflags::bitflags;
use core::cmp::Ordering;

bitflags! {
    /// Binary emoji properties of a codepoint.
    #[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
    pub struct EmojiProperties: u8 {
        const EMOJI = 1;
        const EMOJI_PRESENTATION = 1 << 1;
        const EMOJI_MODIFIER = 1 << 2;
        const EMOJI_MODIFIER_BASE = 1 << 3;
        const EXTENDED_PICTOGRAPHIC = 1 << 4;
    }
}

/// Category of a codepoint in the emoji presentation scanner.
///
/// The discriminants are stable interop identifiers and must not change
/// when the tables are regenerated. `Emoji` and `EmojiVSBase` are part of
/// the stable numbering but are never produced by [`classification`];
/// every `Emoji` codepoint resolves to one of the presentation-specific
/// categories first.
///
/// [`classification`]: Codepoint::emoji_segmentation_category
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(i8)]
pub enum EmojiSegmentationCategory {
    /// Not part of an emoji sequence.
    #[default]
    Invalid = -1,
    Emoji = 0,
    EmojiTextPresentation = 1,
    EmojiEmojiPresentation = 2,
    EmojiModifierBase = 3,
    EmojiModifier = 4,
    EmojiVSBase = 5,
    RegionalIndicator = 6,
    KeyCapBase = 7,
    CombiningEnclosingKeyCap = 8,
    CombiningEnclosingCircleBackslash = 9,
    ZWJ = 10,
    VS15 = 11,
    VS16 = 12,
    TagBase = 13,
    TagSequence = 14,
    TagTerm = 15,
}

const COMBINING_ENCLOSING_KEYCAP: u32 = 0x20E3;
const COMBINING_ENCLOSING_CIRCLE_BACKSLASH: u32 = 0x20E0;
const ZERO_WIDTH_JOINER: u32 = 0x200D;
const VARIATION_SELECTOR_15: u32 = 0xFE0E;
const VARIATION_SELECTOR_16: u32 = 0xFE0F;
const WAVING_BLACK_FLAG: u32 = 0x1F3F4;
const CANCEL_TAG: u32 = 0xE007F;

fn lookup<T: Copy>(table: &[(u32, u32, T)], codepoint: u32) -> Option<T> {
    table
        .binary_search_by(|&(first, last, _)| {
            if last < codepoint {
                Ordering::Less
            } else if first > codepoint {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|index| table[index].2)
}

/// Property accessors for a scalar value.
///
/// Implemented for `u32` so that surrogates, which `char` cannot carry,
/// still classify (as `Script::Unknown` and category `Invalid`). Values
/// above 0x10FFFF are clamped to the same answers rather than rejected.
pub trait Codepoint: Sized + Copy {
    /// Returns the scalar value.
    fn value(self) -> u32;

    /// Returns the script property.
    fn script(self) -> Script {
        lookup(SCRIPT_RANGES, self.value()).unwrap_or(Script::Unknown)
    }

    /// Returns the set of binary emoji properties.
    fn emoji_properties(self) -> EmojiProperties {
        lookup(EMOJI_PROPERTY_RANGES, self.value())
            .map(EmojiProperties::from_bits_truncate)
            .unwrap_or(EmojiProperties::empty())
    }

    /// Returns true if the codepoint carries the given emoji properties.
    fn has_emoji_properties(self, properties: EmojiProperties) -> bool {
        self.emoji_properties().contains(properties)
    }

    /// Returns true if the codepoint is rendered as color emoji without a
    /// variation selector.
    fn is_emoji_presentation_default(self) -> bool {
        self.has_emoji_properties(EmojiProperties::EMOJI_PRESENTATION)
    }

    /// Returns the category of the codepoint in the emoji presentation
    /// scanner. Fixed codepoints take precedence over property bits.
    fn emoji_segmentation_category(self) -> EmojiSegmentationCategory {
        use EmojiSegmentationCategory::*;
        let cp = self.value();
        match cp {
            COMBINING_ENCLOSING_KEYCAP => return CombiningEnclosingKeyCap,
            COMBINING_ENCLOSING_CIRCLE_BACKSLASH => {
                return CombiningEnclosingCircleBackslash
            }
            ZERO_WIDTH_JOINER => return ZWJ,
            VARIATION_SELECTOR_15 => return VS15,
            VARIATION_SELECTOR_16 => return VS16,
            WAVING_BLACK_FLAG => return TagBase,
            0xE0020..=0xE007E => return TagSequence,
            CANCEL_TAG => return TagTerm,
            0x1F1E6..=0x1F1FF => return RegionalIndicator,
            0x0030..=0x0039 | 0x0023 | 0x002A => return KeyCapBase,
            _ => {}
        }
        let properties = self.emoji_properties();
        if properties.contains(EmojiProperties::EMOJI_MODIFIER_BASE) {
            EmojiModifierBase
        } else if properties.contains(EmojiProperties::EMOJI_MODIFIER) {
            EmojiModifier
        } else if properties.contains(EmojiProperties::EMOJI_PRESENTATION) {
            EmojiEmojiPresentation
        } else if properties.contains(EmojiProperties::EMOJI) {
            EmojiTextPresentation
        } else {
            Invalid
        }
    }
}

impl Codepoint for u32 {
    fn value(self) -> u32 {
        self
    }
}

impl Codepoint for char {
    fn value(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EmojiSegmentationCategory::*;

    #[test]
    fn script_lookup() {
        assert_eq!('A'.script(), Script::Latin);
        assert_eq!(' '.script(), Script::Common);
        assert_eq!('\u{0301}'.script(), Script::Inherited);
        assert_eq!('\u{0646}'.script(), Script::Arabic);
        assert_eq!('\u{D0A4}'.script(), Script::Hangul);
        assert_eq!('\u{767E}'.script(), Script::Han);
        assert_eq!('\u{090B}'.script(), Script::Devanagari);
        assert_eq!('\u{3044}'.script(), Script::Hiragana);
        assert_eq!('\u{0561}'.script(), Script::Armenian);
        assert_eq!('\u{03B1}'.script(), Script::Greek);
        // Emoji and variation selectors are script-neutral.
        assert_eq!('\u{1F600}'.script(), Script::Common);
        assert_eq!('\u{FE0E}'.script(), Script::Inherited);
    }

    #[test]
    fn surrogates_and_out_of_range_are_unknown() {
        assert_eq!(0xD800u32.script(), Script::Unknown);
        assert_eq!(0xDFFFu32.script(), Script::Unknown);
        assert_eq!(0x110000u32.script(), Script::Unknown);
        assert_eq!(u32::MAX.script(), Script::Unknown);
        assert_eq!(0xD800u32.emoji_segmentation_category(), Invalid);
        assert_eq!(0x110000u32.emoji_segmentation_category(), Invalid);
    }

    #[test]
    fn emoji_property_bits() {
        let grin = '\u{1F600}'.emoji_properties();
        assert!(grin.contains(EmojiProperties::EMOJI));
        assert!(grin.contains(EmojiProperties::EMOJI_PRESENTATION));
        assert!(grin.contains(EmojiProperties::EXTENDED_PICTOGRAPHIC));
        assert!(!grin.contains(EmojiProperties::EMOJI_MODIFIER_BASE));

        let victory = '\u{270C}'.emoji_properties();
        assert!(victory.contains(EmojiProperties::EMOJI));
        assert!(!victory.contains(EmojiProperties::EMOJI_PRESENTATION));
        assert!(victory.contains(EmojiProperties::EMOJI_MODIFIER_BASE));

        let tone = '\u{1F3FB}'.emoji_properties();
        assert!(tone.contains(EmojiProperties::EMOJI_MODIFIER));

        assert_eq!('x'.emoji_properties(), EmojiProperties::empty());
        assert!('\u{1F600}'.is_emoji_presentation_default());
        assert!(!'\u{270C}'.is_emoji_presentation_default());
    }

    #[test]
    fn fixed_codepoint_categories() {
        assert_eq!(0x20E3u32.emoji_segmentation_category(), CombiningEnclosingKeyCap);
        assert_eq!(
            0x20E0u32.emoji_segmentation_category(),
            CombiningEnclosingCircleBackslash
        );
        assert_eq!(0x200Du32.emoji_segmentation_category(), ZWJ);
        assert_eq!(0xFE0Eu32.emoji_segmentation_category(), VS15);
        assert_eq!(0xFE0Fu32.emoji_segmentation_category(), VS16);
        assert_eq!(0x1F3F4u32.emoji_segmentation_category(), TagBase);
        assert_eq!(0xE0067u32.emoji_segmentation_category(), TagSequence);
        assert_eq!(0xE007Fu32.emoji_segmentation_category(), TagTerm);
    }

    #[test]
    fn derived_categories() {
        assert_eq!('#'.emoji_segmentation_category(), KeyCapBase);
        assert_eq!('7'.emoji_segmentation_category(), KeyCapBase);
        assert_eq!('\u{1F1E9}'.emoji_segmentation_category(), RegionalIndicator);
        assert_eq!('\u{1F600}'.emoji_segmentation_category(), EmojiEmojiPresentation);
        assert_eq!('\u{270C}'.emoji_segmentation_category(), EmojiModifierBase);
        assert_eq!('\u{1F3FC}'.emoji_segmentation_category(), EmojiModifier);
        // Orthodox cross: emoji with default text presentation.
        assert_eq!('\u{2626}'.emoji_segmentation_category(), EmojiTextPresentation);
        assert_eq!('\u{2764}'.emoji_segmentation_category(), EmojiTextPresentation);
        assert_eq!('A'.emoji_segmentation_category(), Invalid);
        assert_eq!('\u{0646}'.emoji_segmentation_category(), Invalid);
    }

    #[test]
    fn category_numbering_is_stable() {
        assert_eq!(Invalid as i8, -1);
        assert_eq!(Emoji as i8, 0);
        assert_eq!(EmojiVSBase as i8, 5);
        assert_eq!(KeyCapBase as i8, 7);
        assert_eq!(ZWJ as i8, 10);
        assert_eq!(TagTerm as i8, 15);
    }
}
