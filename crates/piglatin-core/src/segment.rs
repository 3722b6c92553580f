// Segment type produced by the tokenizer.

/// Segment kinds for text segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A maximal run of non-whitespace characters.
    Word,
    /// A maximal run of whitespace characters.
    Whitespace,
}

/// A segment of input text.
///
/// The tokenizer splits text into alternating word and whitespace segments.
/// Concatenating the `text` of every segment in order reproduces the input
/// exactly; whitespace is carried through so that output formatting matches
/// input formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The kind of this segment.
    pub kind: SegmentKind,

    /// The text content of this segment.
    pub text: String,

    /// Position of this segment within the input (character offset).
    pub pos: usize,
}

impl Segment {
    /// Create a new segment.
    pub fn new(kind: SegmentKind, text: impl Into<String>, pos: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Length of the segment in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True if the segment holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
