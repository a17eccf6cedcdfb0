use super::Segmenter;
use crate::properties::{Codepoint as _, EmojiSegmentationCategory};

/// Rendering mode of a run: monochrome text glyphs or color emoji.
///
/// The discriminants are stable interop identifiers.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[repr(u8)]
pub enum PresentationStyle {
    #[default]
    Text = 0,
    Emoji = 1,
}

/// Lazy producer of emoji presentation runs.
///
/// Scans the buffer one emoji unit at a time (a single codepoint, or a
/// whole modifier/keycap/flag/tag/ZWJ sequence), resolves each unit to a
/// presentation, and merges consecutive units of equal presentation into
/// maximal runs. Only emoji-category codepoints are ever resolved to
/// [`PresentationStyle::Emoji`]; everything else trivially segments as
/// text.
///
/// ```
/// use ipanema::{EmojiSegmenter, PresentationStyle, Segmenter};
///
/// let buffer: Vec<u32> = "AB\u{1F600}".chars().map(u32::from).collect();
/// let mut segmenter = EmojiSegmenter::new(&buffer);
/// let (mut end, mut style) = (0, PresentationStyle::default());
/// assert!(segmenter.consume(&mut end, &mut style));
/// assert_eq!((end, style), (2, PresentationStyle::Text));
/// assert!(segmenter.consume(&mut end, &mut style));
/// assert_eq!((end, style), (3, PresentationStyle::Emoji));
/// assert!(!segmenter.consume(&mut end, &mut style));
/// ```
#[derive(Clone)]
pub struct EmojiSegmenter<'a> {
    buffer: &'a [u32],
    start: usize,
    scan: usize,
    peeked: Option<(usize, bool)>,
    current_start: usize,
    current_end: usize,
    is_emoji: bool,
}

impl<'a> EmojiSegmenter<'a> {
    /// Creates a segmenter over a buffer of scalar values.
    pub fn new(buffer: &'a [u32]) -> Self {
        Self {
            buffer,
            start: 0,
            scan: 0,
            peeked: None,
            current_start: 0,
            current_end: 0,
            is_emoji: false,
        }
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &'a [u32] {
        self.buffer
    }

    /// Returns the start of the most recently consumed run.
    pub fn current_start(&self) -> usize {
        self.current_start
    }

    /// Returns the end of the most recently consumed run.
    pub fn current_end(&self) -> usize {
        self.current_end
    }

    /// Returns true if the most recently consumed run renders as color
    /// emoji.
    pub fn is_emoji(&self) -> bool {
        self.is_emoji
    }

    fn category(&self, pos: usize) -> Option<EmojiSegmentationCategory> {
        self.buffer.get(pos).map(|cp| cp.emoji_segmentation_category())
    }

    /// Scans one unit starting at the scan cursor: a compound emoji
    /// sequence extended over any ZWJ glue, or a single codepoint.
    fn scan_unit(&mut self) -> Option<(usize, bool)> {
        use EmojiSegmentationCategory::ZWJ;
        if self.scan >= self.buffer.len() {
            return None;
        }
        let (mut end, emoji) = self.scan_sequence(self.scan);
        if emoji {
            // A ZWJ glues two emoji units into one; a ZWJ with no emoji
            // behind it is left for the following text run.
            while end + 1 < self.buffer.len() && self.category(end) == Some(ZWJ) {
                let (joined_end, joined_emoji) = self.scan_sequence(end + 1);
                if !joined_emoji {
                    break;
                }
                end = joined_end;
            }
        }
        self.scan = end;
        Some((end, emoji))
    }

    /// Scans one emoji sequence at `pos` (which must be in bounds) and
    /// resolves its presentation. Longest match wins; a codepoint that
    /// heads no sequence falls through to its per-category default.
    fn scan_sequence(&self, pos: usize) -> (usize, bool) {
        use EmojiSegmentationCategory::*;
        let first = self.buffer[pos].emoji_segmentation_category();
        match first {
            KeyCapBase => {
                if self.category(pos + 1) == Some(VS16)
                    && self.category(pos + 2) == Some(CombiningEnclosingKeyCap)
                {
                    return (pos + 3, true);
                }
                if self.category(pos + 1) == Some(CombiningEnclosingKeyCap) {
                    return (pos + 2, true);
                }
            }
            EmojiModifierBase => {
                if self.category(pos + 1) == Some(EmojiModifier) {
                    return (pos + 2, true);
                }
            }
            RegionalIndicator => {
                if self.category(pos + 1) == Some(RegionalIndicator) {
                    return (pos + 2, true);
                }
            }
            TagBase => {
                let mut cursor = pos + 1;
                while self.category(cursor) == Some(TagSequence) {
                    cursor += 1;
                }
                if cursor > pos + 1 && self.category(cursor) == Some(TagTerm) {
                    return (cursor + 1, true);
                }
            }
            _ => {}
        }
        if is_emoji_base(first) {
            if self.category(pos + 1) == Some(CombiningEnclosingCircleBackslash) {
                return (pos + 2, true);
            }
            if self.category(pos + 1) == Some(VS16) {
                if self.category(pos + 2) == Some(CombiningEnclosingCircleBackslash) {
                    return (pos + 3, true);
                }
                return (pos + 2, true);
            }
            if self.category(pos + 1) == Some(VS15) {
                return (pos + 2, false);
            }
        }
        (pos + 1, is_emoji_default(first))
    }
}

/// Categories that a variation selector or enclosing mark can apply to.
fn is_emoji_base(category: EmojiSegmentationCategory) -> bool {
    use EmojiSegmentationCategory::*;
    matches!(
        category,
        Emoji
            | EmojiTextPresentation
            | EmojiEmojiPresentation
            | EmojiModifierBase
            | EmojiModifier
            | EmojiVSBase
            | RegionalIndicator
            | KeyCapBase
            | TagBase
    )
}

/// Presentation of a category standing alone, outside any sequence.
fn is_emoji_default(category: EmojiSegmentationCategory) -> bool {
    use EmojiSegmentationCategory::*;
    matches!(
        category,
        EmojiEmojiPresentation
            | EmojiModifierBase
            | EmojiModifier
            | RegionalIndicator
            | TagBase
    )
}

impl Segmenter for EmojiSegmenter<'_> {
    type Property = PresentationStyle;

    fn consume(&mut self, end: &mut usize, property: &mut PresentationStyle) -> bool {
        let (mut run_end, run_emoji) = match self.peeked.take().or_else(|| self.scan_unit()) {
            Some(unit) => unit,
            None => return false,
        };
        loop {
            match self.scan_unit() {
                Some((unit_end, unit_emoji)) if unit_emoji == run_emoji => {
                    run_end = unit_end;
                }
                Some(unit) => {
                    self.peeked = Some(unit);
                    break;
                }
                None => break,
            }
        }
        self.current_start = self.start;
        self.current_end = run_end;
        self.is_emoji = run_emoji;
        self.start = run_end;
        *end = run_end;
        *property = if run_emoji {
            PresentationStyle::Emoji
        } else {
            PresentationStyle::Text
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Segments the concatenation of the given parts and asserts one run
    /// per part, each ending where its part ends, with the expected
    /// presentation.
    fn assert_segments(parts: &[(&str, PresentationStyle)]) {
        let text: String = parts.iter().map(|part| part.0).collect();
        let buffer: Vec<u32> = text.chars().map(u32::from).collect();
        let mut segmenter = EmojiSegmenter::new(&buffer);
        let mut end = 0;
        let mut style = PresentationStyle::default();
        let mut expected_end = 0;
        for (index, (part, expected_style)) in parts.iter().enumerate() {
            expected_end += part.chars().count();
            assert!(
                segmenter.consume(&mut end, &mut style),
                "part {index}: exhausted early"
            );
            assert_eq!((end, style), (expected_end, *expected_style), "part {index}");
            assert_eq!(segmenter.current_end(), expected_end);
        }
        assert!(!segmenter.consume(&mut end, &mut style));
    }

    use PresentationStyle::{Emoji, Text};

    #[test]
    fn empty() {
        let mut segmenter = EmojiSegmenter::new(&[]);
        let mut end = 0;
        let mut style = PresentationStyle::default();
        assert!(!segmenter.consume(&mut end, &mut style));
        assert_eq!((end, style), (0, Text));
    }

    #[test]
    fn single_emoji() {
        assert_segments(&[("\u{1F600}", Emoji)]);
    }

    #[test]
    fn vs15_forces_text() {
        assert_segments(&[("\u{1F600}\u{FE0E}", Text)]);
    }

    #[test]
    fn latin_then_emoji() {
        assert_segments(&[("AB", Text), ("\u{1F600}", Emoji)]);
    }

    #[test]
    fn emoji_then_latin() {
        assert_segments(&[("\u{1F600}", Emoji), ("A", Text)]);
    }

    #[test]
    fn two_emojis_merge() {
        assert_segments(&[("\u{1F600}\u{1F600}", Emoji)]);
    }

    #[test]
    fn trailing_space_stays_in_text_run() {
        assert_segments(&[("AB ", Text), ("\u{1F600}", Emoji)]);
    }

    #[test]
    fn text_default_emoji_with_vs15() {
        assert_segments(&[("\u{270C}\u{FE0E}", Text)]);
    }

    #[test]
    fn emoji_text_emoji() {
        // A bare modifier base renders emoji; VS15 flips it to text.
        assert_segments(&[
            ("\u{270C}", Emoji),
            ("\u{270C}\u{FE0E}", Text),
            ("\u{270C}", Emoji),
        ]);
    }

    #[test]
    fn mixed_complex() {
        assert_segments(&[
            ("Hello(", Text),
            // Victory hand, then man facepalming with skin tone, ZWJ,
            // male sign, VS16: one emoji run.
            ("\u{270C}\u{1F926}\u{1F3FC}\u{200D}\u{2642}\u{FE0F}", Emoji),
            ("\u{270C}\u{FE0E} :-)", Text),
            ("\u{270C}", Emoji),
            (")\u{5408}!", Text),
        ]);
    }

    #[test]
    fn modifier_sequences() {
        assert_segments(&[("\u{26F9}\u{1F3FB}\u{270D}\u{1F3FB}\u{270A}\u{1F3FC}", Emoji)]);
    }

    #[test]
    fn keycap_sequences() {
        assert_segments(&[("#\u{FE0F}\u{20E3}", Emoji)]);
        assert_segments(&[("3\u{20E3}", Emoji)]);
        // A digit with no enclosing keycap is ordinary text.
        assert_segments(&[("3A", Text)]);
    }

    #[test]
    fn flag_pairs() {
        // Two pairs of regional indicators merge into one emoji run.
        assert_segments(&[("\u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}", Emoji)]);
    }

    #[test]
    fn tag_sequences() {
        // England, Scotland, Wales subdivision flags.
        assert_segments(&[(
            "\u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}\
             \u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}\
             \u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}",
            Emoji,
        )]);
    }

    #[test]
    fn zwj_sequences() {
        assert_segments(&[
            (
                "\u{1F469}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}\
                 \u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}",
                Emoji,
            ),
            ("abcd", Text),
            ("\u{1F469}\u{200D}\u{1F469}", Emoji),
            ("\u{200D}efg", Text),
        ]);
    }

    #[test]
    fn text_presentation_symbols() {
        assert_segments(&[(
            "\u{2626}\u{262A}\u{2638}\u{271D}\u{2721}\u{2627}\u{2628}\u{2629}\
             \u{262B}\u{262C}\u{2670}\u{2671}\u{271F}\u{2720}",
            Text,
        )]);
    }

    #[test]
    fn exhaustion_is_sticky() {
        let buffer: Vec<u32> = vec![0x1F600];
        let mut segmenter = EmojiSegmenter::new(&buffer);
        let mut end = 0;
        let mut style = PresentationStyle::default();
        assert!(segmenter.consume(&mut end, &mut style));
        assert!(!segmenter.consume(&mut end, &mut style));
        assert!(!segmenter.consume(&mut end, &mut style));
        assert_eq!((end, style), (1, PresentationStyle::Emoji));
    }
}
