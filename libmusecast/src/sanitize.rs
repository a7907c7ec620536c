//! Generated-content cleanup
//!
//! Models sometimes wrap their output in quotation marks despite being told
//! not to. Posting text quoted-as-a-whole reads as attribution rather than a
//! statement, so quotation characters are stripped before publishing.

/// Double-quote characters removed from generated text.
///
/// Apostrophes and single quotes are kept; contractions are legitimate
/// content.
const QUOTE_CHARS: &[char] = &['"', '“', '”', '„', '«', '»', '＂'];

/// Strip quotation characters and surrounding whitespace.
///
/// Applying this twice gives the same result as applying it once.
pub fn sanitize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
    stripped.trim().to_string()
}

/// Length of `text` as the platform counts it, in characters rather than
/// bytes.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
