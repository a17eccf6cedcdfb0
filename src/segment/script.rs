use super::Segmenter;
use crate::properties::Codepoint as _;
use crate::script::Script;

/// Lazy producer of script runs.
///
/// Walks the buffer left to right, tracking the resolved script of the
/// current run. `Common` and `Inherited` codepoints never break a run:
/// they extend whatever run is open and, when they lead it, the first
/// concrete script upgrades the whole run retroactively. The emitted
/// script is therefore never `Inherited`, and `Common` only when the run
/// contains no concrete script at all.
///
/// ```
/// use ipanema::{Script, ScriptSegmenter, Segmenter};
///
/// let buffer: Vec<u32> = "ab \u{0646}\u{0635}".chars().map(u32::from).collect();
/// let mut segmenter = ScriptSegmenter::new(&buffer);
/// let (mut end, mut script) = (0, Script::default());
/// assert!(segmenter.consume(&mut end, &mut script));
/// assert_eq!((end, script), (3, Script::Latin));
/// assert!(segmenter.consume(&mut end, &mut script));
/// assert_eq!((end, script), (5, Script::Arabic));
/// assert!(!segmenter.consume(&mut end, &mut script));
/// ```
#[derive(Clone)]
pub struct ScriptSegmenter<'a> {
    buffer: &'a [u32],
    cursor: usize,
}

impl<'a> ScriptSegmenter<'a> {
    /// Creates a segmenter over a buffer of scalar values.
    pub fn new(buffer: &'a [u32]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Returns the underlying buffer.
    pub fn buffer(&self) -> &'a [u32] {
        self.buffer
    }
}

impl Segmenter for ScriptSegmenter<'_> {
    type Property = Script;

    fn consume(&mut self, end: &mut usize, property: &mut Script) -> bool {
        if self.cursor >= self.buffer.len() {
            return false;
        }
        let mut resolved = Script::Common;
        let mut pos = self.cursor;
        while pos < self.buffer.len() {
            let script = self.buffer[pos].script();
            if !script.is_common_or_inherited() {
                if resolved == Script::Common {
                    // First concrete script upgrades the run, including
                    // any Common/Inherited codepoints already absorbed.
                    resolved = script;
                } else if script != resolved {
                    break;
                }
            }
            pos += 1;
        }
        *end = pos;
        *property = resolved;
        self.cursor = pos;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(text: &str) -> Vec<(usize, Script)> {
        let buffer: Vec<u32> = text.chars().map(u32::from).collect();
        let mut segmenter = ScriptSegmenter::new(&buffer);
        let mut out = Vec::new();
        let mut end = 0;
        let mut script = Script::default();
        while segmenter.consume(&mut end, &mut script) {
            out.push((end, script));
        }
        out
    }

    #[test]
    fn empty() {
        assert_eq!(runs(""), vec![]);
    }

    #[test]
    fn single_script() {
        assert_eq!(runs("latin"), vec![(5, Script::Latin)]);
    }

    #[test]
    fn common_absorbed_into_preceding_run() {
        // Punctuation and spaces join the run on their left.
        assert_eq!(runs("Abc.;?Xyz"), vec![(9, Script::Latin)]);
        assert_eq!(
            runs("ab \u{0646}\u{0635} cd"),
            vec![(3, Script::Latin), (6, Script::Arabic), (8, Script::Latin)]
        );
    }

    #[test]
    fn leading_common_upgraded() {
        assert_eq!(runs("  ab"), vec![(4, Script::Latin)]);
    }

    #[test]
    fn all_common_stays_common() {
        assert_eq!(runs(" .!"), vec![(3, Script::Common)]);
    }

    #[test]
    fn combining_marks_inherit() {
        // e + combining acute never splits from its base.
        assert_eq!(runs("e\u{0301}x"), vec![(3, Script::Latin)]);
        // Dotted circle carriers: Common base plus Inherited marks.
        assert_eq!(runs("\u{25CC}\u{0301}\u{25CC}\u{0300}"), vec![(4, Script::Common)]);
    }

    #[test]
    fn adjacent_concrete_scripts_split() {
        assert_eq!(
            runs("\u{0646}\u{0635}\u{D0A4}\u{C2A4}\u{C758}"),
            vec![(2, Script::Arabic), (5, Script::Hangul)]
        );
    }

    #[test]
    fn unknown_segments_like_a_concrete_script() {
        // Unassigned codepoints open their own run.
        let buffer: Vec<u32> = vec![0x41, 0xD800, 0xD801, 0x42];
        let mut segmenter = ScriptSegmenter::new(&buffer);
        let mut end = 0;
        let mut script = Script::default();
        assert!(segmenter.consume(&mut end, &mut script));
        assert_eq!((end, script), (1, Script::Latin));
        assert!(segmenter.consume(&mut end, &mut script));
        assert_eq!((end, script), (3, Script::Unknown));
        assert!(segmenter.consume(&mut end, &mut script));
        assert_eq!((end, script), (4, Script::Latin));
        assert!(!segmenter.consume(&mut end, &mut script));
    }

    #[test]
    fn exhaustion_is_sticky() {
        let buffer: Vec<u32> = vec![0x41];
        let mut segmenter = ScriptSegmenter::new(&buffer);
        let mut end = 0;
        let mut script = Script::default();
        assert!(segmenter.consume(&mut end, &mut script));
        assert!(!segmenter.consume(&mut end, &mut script));
        assert!(!segmenter.consume(&mut end, &mut script));
        assert_eq!((end, script), (1, Script::Latin));
    }
}
