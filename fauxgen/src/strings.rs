//! Random string generation, one routine per registered category.
//!
//! This is the generation backend the string mark delegates to: characters
//! are drawn from per-category codepoint ranges, picking a range uniformly
//! and then a codepoint uniformly within it.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::constants::StringKind;

/// Generated string length when a mark does not request one.
pub const DEFAULT_LENGTH: usize = 10;

/// Number of generation attempts before a validator gives up.
pub const DEFAULT_TRIES: usize = 10;

/// Predicate applied to candidate strings when the `validator` option is set.
pub type Validator = Arc<dyn Fn(&str) -> bool>;

/// Extra options accepted by [`gen_string`].
#[derive(Clone)]
pub struct StringOptions {
    /// Accept or reject candidate strings. Requires `default`.
    pub validator: Option<Validator>,
    /// Substitute returned when no candidate passes the validator.
    pub default: Option<String>,
    /// Attempts before the default is substituted. Zero is treated as one.
    pub tries: usize,
}

impl StringOptions {
    pub fn new() -> Self {
        StringOptions {
            validator: None,
            default: None,
            tries: DEFAULT_TRIES,
        }
    }
}

impl Default for StringOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringOptions")
            .field("validator", &self.validator.as_ref().map(|_| "<validator>"))
            .field("default", &self.default)
            .field("tries", &self.tries)
            .finish()
    }
}

const ALPHA_RANGES: &[(char, char)] = &[('A', 'Z'), ('a', 'z')];
const NUMERIC_RANGES: &[(char, char)] = &[('0', '9')];
const ALPHANUMERIC_RANGES: &[(char, char)] = &[('0', '9'), ('A', 'Z'), ('a', 'z')];
// Latin-1 letters, skipping the multiplication and division signs.
const LATIN1_RANGES: &[(char, char)] = &[
    ('\u{00C0}', '\u{00D6}'),
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{00FF}'),
];
// CJK Unified Ideographs.
const CJK_RANGES: &[(char, char)] = &[('\u{4E00}', '\u{9FCC}')];
const PUNCTUATION_RANGES: &[(char, char)] = &[('!', '/'), (':', '@'), ('[', '`'), ('{', '~')];
const UTF8_RANGES: &[(char, char)] = &[
    ('A', 'Z'),
    ('a', 'z'),
    ('\u{00C0}', '\u{00D6}'),
    ('\u{00D8}', '\u{00F6}'),
    ('\u{00F8}', '\u{00FF}'),
    ('\u{4E00}', '\u{9FCC}'),
];

const HTML_TAGS: &[&str] = &[
    "a", "abbr", "b", "code", "div", "em", "h1", "h2", "h3", "li", "p", "span", "strong", "td",
];

/// Pick one string kind uniformly at random.
pub fn gen_choice<R: Rng + ?Sized>(kinds: &[StringKind], rng: &mut R) -> StringKind {
    assert!(!kinds.is_empty(), "gen_choice requires at least one string kind");
    kinds[rng.gen_range(0..kinds.len())]
}

/// Generate one string of the given kind.
///
/// `length` falls back to [`DEFAULT_LENGTH`]. For the `html` kind the length
/// applies to the element content, not the surrounding tag.
pub fn gen_string<R: Rng + ?Sized>(
    kind: StringKind,
    length: Option<usize>,
    options: &StringOptions,
    rng: &mut R,
) -> String {
    let length = length.unwrap_or(DEFAULT_LENGTH);
    let validator = match &options.validator {
        None => return gen_raw(kind, length, rng),
        Some(validator) => validator,
    };

    let tries = options.tries.max(1);
    let mut candidate = gen_raw(kind, length, rng);
    for _ in 1..tries {
        if validator(&candidate) {
            return candidate;
        }
        candidate = gen_raw(kind, length, rng);
    }
    if validator(&candidate) {
        candidate
    } else {
        options.default.clone().unwrap_or(candidate)
    }
}

fn gen_raw<R: Rng + ?Sized>(kind: StringKind, length: usize, rng: &mut R) -> String {
    match kind {
        StringKind::Alpha => from_ranges(ALPHA_RANGES, length, rng),
        StringKind::Alphanumeric => from_ranges(ALPHANUMERIC_RANGES, length, rng),
        StringKind::Cjk => from_ranges(CJK_RANGES, length, rng),
        StringKind::Html => {
            let tag = HTML_TAGS[rng.gen_range(0..HTML_TAGS.len())];
            let content = from_ranges(ALPHA_RANGES, length, rng);
            format!("<{}>{}</{}>", tag, content, tag)
        }
        StringKind::Latin1 => from_ranges(LATIN1_RANGES, length, rng),
        StringKind::Numeric => from_ranges(NUMERIC_RANGES, length, rng),
        StringKind::Utf8 => from_ranges(UTF8_RANGES, length, rng),
        StringKind::Punctuation => from_ranges(PUNCTUATION_RANGES, length, rng),
    }
}

fn from_ranges<R: Rng + ?Sized>(ranges: &[(char, char)], length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| {
            let (low, high) = ranges[rng.gen_range(0..ranges.len())];
            // The registry ranges contain no unassigned codepoints.
            char::from_u32(rng.gen_range(low as u32..=high as u32)).unwrap_or(low)
        })
        .collect()
}
