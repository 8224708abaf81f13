//! Conversions from text into sequences.
//!
//! The metrics in this crate work on slices `&[T]` and never reinterpret
//! strings on their own; text has to be turned into a sequence first.

/// Collects the characters of `text` into a sequence.
///
/// No normalization is applied, so `"e\u{301}"` yields two elements.
pub fn chars<S>(text: S) -> Vec<char>
where
    S: AsRef<str>,
{
    text.as_ref().chars().collect()
}
