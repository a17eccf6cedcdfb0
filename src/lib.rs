//! Unicode text run segmentation for shaping pipelines
//!
//! Before text can be shaped, it has to be cut into runs that a font
//! selector and shaper can treat uniformly: every codepoint in a run
//! belongs to the same writing script and renders in the same
//! presentation style (monochrome text or color emoji). [`RunSegmenter`]
//! produces exactly those runs, lazily, over a borrowed buffer of scalar
//! values:
//!
//! ```
//! use ipanema::{PresentationStyle, Range, RunSegmenter, Script};
//!
//! let buffer: Vec<u32> = "AB\u{1F600}CD".chars().map(u32::from).collect();
//! let runs: Vec<Range> = RunSegmenter::new(&buffer).collect();
//!
//! assert_eq!(runs.len(), 3);
//! assert_eq!(runs[1].presentation, PresentationStyle::Emoji);
//! // The emoji adopts the script surrounding it.
//! assert_eq!(runs[1].script, Script::Latin);
//! ```
//!
//! Script-neutral codepoints (`Common` punctuation and spaces,
//! `Inherited` combining marks) never split a run: they join the run on
//! their left, and a leading neutral prefix is upgraded by the first
//! concrete script that follows. Emoji sequences (variation selectors,
//! skin tone modifiers, keycaps, flags, tag sequences and ZWJ clusters)
//! stay glued to their base even when the cluster mixes scripts.
//!
//! The two underlying boundary producers, [`ScriptSegmenter`] and
//! [`EmojiSegmenter`], are usable on their own through the same
//! [`Segmenter`] interface.
//!
//! Buffers are raw `u32` scalars rather than `char` so that ill-formed
//! input (lone surrogates) still segments; such values classify as
//! [`Script::Unknown`] and text presentation. Codepoint properties come
//! from tables compiled from the Unicode Character Database; see
//! [`UNICODE_VERSION`].

#![deny(clippy::if_not_else)]

mod properties;
mod script;
mod segment;
mod unicode_data;

pub use properties::{Codepoint, EmojiProperties, EmojiSegmentationCategory};
pub use script::Script;
pub use segment::{
    EmojiSegmenter, PresentationStyle, Range, RunSegmenter, ScriptSegmenter, Segmenter,
};
pub use unicode_data::UNICODE_VERSION;
