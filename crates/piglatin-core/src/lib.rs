// piglatin-core: shared value types and character utilities for the
// Pig Latin translation engine.

pub mod case;
pub mod character;
pub mod segment;
