// piglatin: English to Pig Latin translation engine.
//
// The engine is a pipeline of pure functions: text is split into word and
// whitespace segments, each word segment is translated independently, and
// the segments are rejoined in order. Whitespace, capitalization, and
// trailing punctuation all survive translation.

pub mod tokenizer;
pub mod translator;

pub use tokenizer::segment;
pub use translator::{translate, translate_word};
