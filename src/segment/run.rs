use super::{EmojiSegmenter, PresentationStyle, ScriptSegmenter, Segmenter};
use crate::script::Script;

use tracing::trace;

/// A maximal range of the buffer that is homogeneous in script and
/// presentation style.
///
/// Successive ranges emitted by [`RunSegmenter`] are contiguous and cover
/// the buffer exactly once. The default value is the zeroed range that an
/// exhausted segmenter leaves untouched.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct Range {
    pub start: usize,
    pub end: usize,
    pub script: Script,
    pub presentation: PresentationStyle,
}

/// Pull cursor over one sub-segmenter: the run currently covering the
/// merge position, plus the exhaustion flag.
struct Cursor<S: Segmenter> {
    segmenter: S,
    end: usize,
    property: S::Property,
    done: bool,
}

impl<S: Segmenter> Cursor<S> {
    fn new(mut segmenter: S) -> Self {
        let mut end = 0;
        let mut property = S::Property::default();
        let done = !segmenter.consume(&mut end, &mut property);
        Self {
            segmenter,
            end,
            property,
            done,
        }
    }

    /// Pulls runs until the current one extends beyond `pos`.
    fn advance_past(&mut self, pos: usize) {
        while !self.done && self.end <= pos {
            self.done = !self.segmenter.consume(&mut self.end, &mut self.property);
        }
    }
}

/// Merges script and emoji presentation boundaries into a single stream
/// of [`Range`]s.
///
/// The sub-segmenters advance in lockstep; each consumed range ends at
/// the nearest boundary of either stream, except that a script boundary
/// never splits an emoji presentation run: a ZWJ cluster may mix scripts
/// and must reach the shaper whole, so during an emoji run the reported
/// script stays frozen at the value that held when the run began.
///
/// ```
/// use ipanema::{PresentationStyle, Range, RunSegmenter, Script};
///
/// let buffer: Vec<u32> = "A\u{1F600}".chars().map(u32::from).collect();
/// let mut segmenter = RunSegmenter::new(&buffer);
/// let mut segment = Range::default();
/// assert!(segmenter.consume(&mut segment));
/// assert_eq!(
///     (segment.start, segment.end, segment.script, segment.presentation),
///     (0, 1, Script::Latin, PresentationStyle::Text)
/// );
/// assert!(segmenter.consume(&mut segment));
/// assert_eq!(
///     (segment.start, segment.end, segment.script, segment.presentation),
///     (1, 2, Script::Latin, PresentationStyle::Emoji)
/// );
/// assert!(!segmenter.consume(&mut segment));
/// ```
pub struct RunSegmenter<'a> {
    buffer: &'a [u32],
    split: usize,
    script: Cursor<ScriptSegmenter<'a>>,
    emoji: Cursor<EmojiSegmenter<'a>>,
    pending: Option<Range>,
}

impl<'a> RunSegmenter<'a> {
    /// Creates a segmenter over a buffer of scalar values.
    pub fn new(buffer: &'a [u32]) -> Self {
        Self {
            buffer,
            split: 0,
            script: Cursor::new(ScriptSegmenter::new(buffer)),
            emoji: Cursor::new(EmojiSegmenter::new(buffer)),
            pending: None,
        }
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &'a [u32] {
        self.buffer
    }

    /// Writes the next range, returning false when the buffer is
    /// exhausted. The output is left untouched on exhaustion, so a
    /// defaulted [`Range`] stays zeroed for empty input.
    pub fn consume(&mut self, segment: &mut Range) -> bool {
        let mut range = match self.pending.take().or_else(|| self.next_range()) {
            Some(range) => range,
            None => return false,
        };
        // Coalesce ranges that the absorption rule left identical.
        while let Some(next) = self.next_range() {
            if next.script == range.script && next.presentation == range.presentation {
                range.end = next.end;
            } else {
                self.pending = Some(next);
                break;
            }
        }
        trace!(
            "run {}..{} {} {:?}",
            range.start,
            range.end,
            range.script,
            range.presentation
        );
        *segment = range;
        true
    }

    fn next_range(&mut self) -> Option<Range> {
        if self.split >= self.buffer.len() {
            return None;
        }
        let script = self.script.property;
        let presentation = self.emoji.property;
        let end = if presentation == PresentationStyle::Emoji {
            // Absorption: the emoji run wins over any script boundary
            // strictly inside it.
            self.emoji.end
        } else {
            self.script.end.min(self.emoji.end)
        };
        let range = Range {
            start: self.split,
            end,
            script,
            presentation,
        };
        self.split = end;
        self.script.advance_past(end);
        self.emoji.advance_past(end);
        Some(range)
    }
}

impl Iterator for RunSegmenter<'_> {
    type Item = Range;

    fn next(&mut self) -> Option<Range> {
        let mut segment = Range::default();
        self.consume(&mut segment).then_some(segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::Codepoint as _;

    /// Segments the concatenation of the given parts and asserts one
    /// range per part with the expected script and presentation, then
    /// checks the universal run invariants.
    fn assert_runs(parts: &[(&str, Script, PresentationStyle)]) {
        let text: String = parts.iter().map(|part| part.0).collect();
        let buffer: Vec<u32> = text.chars().map(u32::from).collect();

        let mut expected = Vec::new();
        let mut start = 0;
        for (part, script, presentation) in parts {
            let end = start + part.chars().count();
            expected.push(Range {
                start,
                end,
                script: *script,
                presentation: *presentation,
            });
            start = end;
        }

        let actual: Vec<Range> = RunSegmenter::new(&buffer).collect();
        assert_eq!(actual, expected, "text {text:?}");
        assert_invariants(&buffer, &actual);
    }

    fn assert_invariants(buffer: &[u32], runs: &[Range]) {
        // Coverage and monotonicity.
        let mut position = 0;
        for run in runs {
            assert_eq!(run.start, position);
            assert!(run.end > run.start);
            position = run.end;
        }
        assert_eq!(position, buffer.len());
        // Maximality.
        for window in runs.windows(2) {
            assert!(
                window[0].script != window[1].script
                    || window[0].presentation != window[1].presentation,
                "adjacent runs not maximal: {window:?}"
            );
        }
        // Inheritance closure.
        for run in runs {
            assert_ne!(run.script, Script::Inherited);
            if run.script == Script::Common {
                assert!(
                    buffer.iter().all(|cp| !cp.script().is_real()),
                    "Common run over buffer with a concrete script"
                );
            }
        }
        // Determinism.
        let again: Vec<Range> = RunSegmenter::new(buffer).collect();
        assert_eq!(again, runs);
    }

    use PresentationStyle::{Emoji, Text};

    #[test]
    fn empty() {
        let mut segmenter = RunSegmenter::new(&[]);
        let mut segment = Range::default();
        assert!(!segmenter.consume(&mut segment));
        assert_eq!(segment.start, 0);
        assert_eq!(segment.end, 0);
        assert_eq!(segment.script, Script::Invalid);
        assert_eq!(segment.presentation, Text);
    }

    #[test]
    fn emoji_vs15() {
        assert_runs(&[("\u{1F600}\u{FE0E}", Script::Common, Text)]);
    }

    #[test]
    fn latin_emoji() {
        assert_runs(&[
            ("A", Script::Latin, Text),
            ("\u{1F600}", Script::Latin, Emoji),
        ]);
    }

    #[test]
    fn latin_common_emoji() {
        assert_runs(&[
            ("A ", Script::Latin, Text),
            ("\u{1F600}", Script::Latin, Emoji),
        ]);
    }

    #[test]
    fn latin_emoji_latin() {
        assert_runs(&[
            ("AB", Script::Latin, Text),
            ("\u{1F600}", Script::Latin, Emoji),
            ("CD", Script::Latin, Text),
        ]);
    }

    #[test]
    fn latin_punctuation() {
        assert_runs(&[("Abc.;?Xyz", Script::Latin, Text)]);
    }

    #[test]
    fn one_space() {
        assert_runs(&[(" ", Script::Common, Text)]);
    }

    #[test]
    fn arabic_hangul() {
        assert_runs(&[
            ("\u{0646}\u{0635}", Script::Arabic, Text),
            ("\u{D0A4}\u{C2A4}\u{C758}", Script::Hangul, Text),
        ]);
    }

    #[test]
    fn han_devanagari_emoji_mix() {
        assert_runs(&[
            ("\u{767E}\u{5BB6}\u{59D3}", Script::Han, Text),
            ("\u{090B}\u{0937}\u{093F}\u{092F}\u{094B}\u{0902}", Script::Devanagari, Text),
            ("\u{1F331}\u{1F332}\u{1F333}\u{1F334}", Script::Devanagari, Emoji),
            ("\u{767E}\u{5BB6}\u{59D3}", Script::Han, Text),
            ("\u{1F331}\u{1F332}", Script::Han, Emoji),
        ]);
    }

    #[test]
    fn combining_circle() {
        assert_runs(&[(
            "\u{25CC}\u{0301}\u{25CC}\u{0300}\u{25CC}\u{0308}\u{25CC}\u{0302}\
             \u{25CC}\u{0304}\u{25CC}\u{030A}",
            Script::Common,
            Text,
        )]);
    }

    #[test]
    fn technical_symbols() {
        assert_runs(&[("\u{2300}\u{2301}\u{2302}", Script::Common, Text)]);
    }

    #[test]
    fn punctuation_common() {
        assert_runs(&[(".\u{2026}\u{00A1}", Script::Common, Text)]);
    }

    #[test]
    fn hiragana_with_punctuation_inside() {
        assert_runs(&[(
            "\u{3044}\u{308D}\u{306F}\u{306B}.\u{2026}\u{00A1}\u{307B}\u{3078}\u{3068}",
            Script::Hiragana,
            Text,
        )]);
    }

    #[test]
    fn devanagari_combining() {
        assert_runs(&[("\u{0915}+\u{0947}", Script::Devanagari, Text)]);
    }

    #[test]
    fn emoji_zwj_sequences() {
        assert_runs(&[
            (
                "\u{1F469}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}\
                 \u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}",
                Script::Latin,
                Emoji,
            ),
            ("abcd", Script::Latin, Text),
            ("\u{1F469}\u{200D}\u{1F469}", Script::Latin, Emoji),
            ("\u{200D}efg", Script::Latin, Text),
        ]);
    }

    #[test]
    fn dingbats_with_modifiers() {
        assert_runs(&[(
            "\u{26F9}\u{1F3FB}\u{270D}\u{1F3FB}\u{270A}\u{1F3FC}",
            Script::Common,
            Emoji,
        )]);
    }

    #[test]
    fn armenian_greek_case() {
        assert_runs(&[
            ("\u{0561}\u{0562}\u{0563}", Script::Armenian, Text),
            ("\u{03B1}\u{03B2}\u{03B3}", Script::Greek, Text),
            ("\u{0531}\u{0532}\u{0533}", Script::Armenian, Text),
        ]);
    }

    #[test]
    fn emoji_subdivision_flags() {
        assert_runs(&[(
            "\u{1F3F4}\u{E0067}\u{E0062}\u{E0077}\u{E006C}\u{E0073}\u{E007F}\
             \u{1F3F4}\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}\
             \u{1F3F4}\u{E0067}\u{E0062}\u{E0065}\u{E006E}\u{E0067}\u{E007F}",
            Script::Common,
            Emoji,
        )]);
    }

    #[test]
    fn non_emoji_presentation_symbols() {
        assert_runs(&[(
            "\u{2626}\u{262A}\u{2638}\u{271D}\u{2721}\u{2627}\u{2628}\u{2629}\
             \u{262B}\u{262C}\u{2670}\u{2671}\u{271F}\u{2720}",
            Script::Common,
            Text,
        )]);
    }

    #[test]
    fn surrogates_segment_as_unknown() {
        let buffer: Vec<u32> = vec![0x41, 0x42, 0xD800, 0xDFFF];
        let runs: Vec<Range> = RunSegmenter::new(&buffer).collect();
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].end, runs[0].script), (2, Script::Latin));
        assert_eq!((runs[1].end, runs[1].script), (4, Script::Unknown));
        assert_invariants(&buffer, &runs);
    }

    #[test]
    fn exhaustion_is_sticky() {
        let buffer: Vec<u32> = vec![0x41];
        let mut segmenter = RunSegmenter::new(&buffer);
        let mut segment = Range::default();
        assert!(segmenter.consume(&mut segment));
        assert!(!segmenter.consume(&mut segment));
        assert!(!segmenter.consume(&mut segment));
        assert_eq!((segment.start, segment.end), (0, 1));
    }

    #[test]
    fn iterator_matches_consume() {
        let buffer: Vec<u32> = "AB\u{1F600}CD".chars().map(u32::from).collect();
        let collected: Vec<Range> = RunSegmenter::new(&buffer).collect();
        let mut segmenter = RunSegmenter::new(&buffer);
        let mut segment = Range::default();
        let mut manual = Vec::new();
        while segmenter.consume(&mut segment) {
            manual.push(segment);
        }
        assert_eq!(collected, manual);
        assert_eq!(collected.len(), 3);
    }
}
