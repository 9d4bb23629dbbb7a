//! Identifier word tokenizer.
//!
//! # Responsibilities
//! - Split an identifier into ordered, non-overlapping word ranges
//! - Discard `_` and `-` separators without producing empty words
//! - Open a word boundary on lower→upper case transitions
//!
//! # Design Decisions
//! - Ranges over the source string instead of owned words, so converters
//!   can size their output buffer before writing
//! - Byte offsets (not char counts): cheap slicing, valid for UTF-8 input
//! - Single pass, no look-ahead beyond the previous character's class
//! - Upper→upper is never a boundary (`FOOBar` stays one word)

/// A non-owning word span over a source string, in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    start: usize,
    len: usize,
}

impl WordRange {
    /// Create a range from a start offset and length.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Create a range from start/end offsets.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`. An inverted range is a programming error
    /// in the tokenizer, not recoverable input.
    pub fn from_bounds(start: usize, end: usize) -> Self {
        assert!(
            end >= start,
            "inverted word range: start {} > end {}",
            start,
            end
        );
        Self {
            start,
            len: end - start,
        }
    }

    /// Start offset into the source string.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Slice the word out of its source string.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end()]
    }
}

/// Split an identifier into word ranges.
///
/// `_` and `-` close the current word and are discarded. An uppercase
/// character immediately following a lowercase one starts a new word, so
/// `fooBar` splits into `foo`/`Bar` while `FOOBar` stays whole. Leading,
/// trailing, and consecutive separators never produce empty words.
pub fn tokenize(input: &str) -> Vec<WordRange> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut prev_lower = false;

    for (idx, ch) in input.char_indices() {
        if ch == '_' || ch == '-' {
            if let Some(s) = start.take() {
                words.push(WordRange::from_bounds(s, idx));
            }
            prev_lower = false;
        } else if ch.is_uppercase() && prev_lower {
            if let Some(s) = start.take() {
                words.push(WordRange::from_bounds(s, idx));
            }
            start = Some(idx);
            prev_lower = false;
        } else {
            if start.is_none() {
                start = Some(idx);
            }
            prev_lower = ch.is_lowercase();
        }
    }

    if let Some(s) = start {
        words.push(WordRange::from_bounds(s, input.len()));
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<&str> {
        tokenize(input).iter().map(|r| r.slice(input)).collect()
    }

    #[test]
    fn test_camel_boundary() {
        assert_eq!(words("fooBar"), vec!["foo", "Bar"]);
        assert_eq!(words("userName"), vec!["user", "Name"]);
    }

    #[test]
    fn test_upper_run_not_split() {
        assert_eq!(words("FOOBar"), vec!["FOOBar"]);
        assert_eq!(words("HTTPServer"), vec!["HTTPServer"]);
    }

    #[test]
    fn test_separators() {
        assert_eq!(words("snake_case"), vec!["snake", "case"]);
        assert_eq!(words("kebab-case"), vec!["kebab", "case"]);
        assert_eq!(words("mixed_caseValue"), vec!["mixed", "case", "Value"]);
    }

    #[test]
    fn test_no_empty_words() {
        assert_eq!(words("__foo__bar__"), vec!["foo", "bar"]);
        assert_eq!(words("---"), Vec::<&str>::new());
        assert_eq!(words(""), Vec::<&str>::new());
    }

    #[test]
    fn test_ranges_cover_input_minus_separators() {
        for input in ["fooBar", "user_name-id", "GetUserById", "a_b_c", "X"] {
            let ranges = tokenize(input);
            let separators = input.chars().filter(|c| *c == '_' || *c == '-').count();
            let covered: usize = ranges.iter().map(|r| r.len()).sum();
            assert_eq!(covered + separators, input.len(), "input {:?}", input);

            // Ordered and non-overlapping.
            for pair in ranges.windows(2) {
                assert!(pair[0].end() <= pair[1].start());
            }
        }
    }

    #[test]
    #[should_panic(expected = "inverted word range")]
    fn test_inverted_range_panics() {
        WordRange::from_bounds(5, 2);
    }
}
