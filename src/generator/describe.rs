//! Description builder - turns identifiers into readable phrases

use heck::ToSnakeCase;

/// Word count kept by the short form of [`describe`]
pub const SHORT_DESCRIPTION_WORDS: usize = 1;

fn split_words(text: &str) -> Vec<String> {
    text.to_snake_case()
        .split('_')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build a description phrase for an identifier or type text.
///
/// Splits at case boundaries and delimiters, lower-cases, and joins with
/// single spaces: `"userName"` -> `"user name"`. With `short = true` the
/// phrase is truncated to its first [`SHORT_DESCRIPTION_WORDS`] words.
/// Deterministic and pure.
pub fn describe(text: &str, short: bool) -> String {
    let words = split_words(text);
    if short && words.len() > SHORT_DESCRIPTION_WORDS {
        return words[..SHORT_DESCRIPTION_WORDS].join(" ");
    }
    words.join(" ")
}

/// Description phrase without the leading verb word.
///
/// `"getUserName"` -> `"user name"`; used by accessor templates. A
/// single-word identifier is returned unchanged rather than emptied.
pub fn describe_partial(text: &str) -> String {
    let words = split_words(text);
    if words.len() <= 1 {
        return words.join(" ");
    }
    words[1..].join(" ")
}
