// Tokenizer: split text into alternating word and whitespace segments.

use piglatin_core::segment::{Segment, SegmentKind};

/// Compute the length of the maximal run starting at the beginning of
/// `text` whose characters all agree with `in_run`.
fn run_length(text: &[char], in_run: impl Fn(char) -> bool) -> usize {
    let mut i = 0;
    while i < text.len() && in_run(text[i]) {
        i += 1;
    }
    i
}

/// Find the next segment starting at position `pos` in the text.
///
/// Returns `(SegmentKind, segment_length)`; the caller advances `pos` by
/// `segment_length` to process subsequent segments. A whitespace character
/// opens a whitespace run, anything else opens a word run. The returned
/// length is always at least 1 while `pos` is in bounds.
pub fn next_segment(text: &[char], pos: usize) -> Option<(SegmentKind, usize)> {
    let slice = text.get(pos..)?;
    let first = *slice.first()?;
    if first.is_whitespace() {
        Some((SegmentKind::Whitespace, run_length(slice, char::is_whitespace)))
    } else {
        Some((SegmentKind::Word, run_length(slice, |c| !c.is_whitespace())))
    }
}

/// Split text into segments.
///
/// Segments alternate between word and whitespace runs, in input order.
/// The split is lossless: concatenating the text of every segment yields
/// the input exactly. Empty input produces no segments.
pub fn segment(text: &str) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut pos = 0;

    while let Some((kind, len)) = next_segment(&chars, pos) {
        let text: String = chars[pos..pos + len].iter().collect();
        segments.push(Segment::new(kind, text, pos));
        pos += len;
    }

    segments
}
