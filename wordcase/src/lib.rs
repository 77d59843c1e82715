//! This library splits multi-word identifiers into their words and renders them in the common
//! notations. It is the conversion engine behind the `casemap` crate; the notations are primarily
//! used for *naming* configuration keys, not for parsing arbitrary text.
//! - [`words`]: the segmentation everything else is built on.
//! - One renderer per notation: [`flat`], [`screaming_flat`], [`camel`], [`pascal`], [`snake`],
//!   [`screaming_snake`], [`pascal_snake`], [`kebab`], [`screaming_kebab`], [`pascal_kebab`].
//!
//! All functions are total: an empty input produces an empty output, and segmentation is
//! `char`-based, so extended character sets work without any special handling.

/// Character classes the segmentation scanner distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    /// `_`, `-` and space end the current word and are dropped.
    Separator,
    Upper,
    Lower,
    Digit,
}

fn classify(ch: char) -> Class {
    match ch {
        '_' | '-' | ' ' => Class::Separator,
        c if c.is_numeric() => Class::Digit,
        c if c.is_uppercase() => Class::Upper,
        _ => Class::Lower,
    }
}

/// Split an identifier into its lowercase words.
///
/// Word boundaries are separator characters (`_`, `-`, space), lower-to-upper transitions, and
/// digit runs, which count as words of their own. Inside an uppercase run the last letter belongs
/// to the following word when a lowercase letter comes next, so acronyms keep their shape:
///
/// ```rust
/// assert_eq!(wordcase::words("HTTPHeader"), ["http", "header"]);
/// assert_eq!(wordcase::words("FooBar22Tarball"), ["foo", "bar", "22", "tarball"]);
/// ```
pub fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev = Class::Separator;

    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        let class = classify(ch);
        if class == Class::Separator {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = Class::Separator;
            continue;
        }

        let boundary = match class {
            // An upper starts a new word after a lower or a digit, and inside an upper run when
            // the next character is lowercase: that last upper opens the following word.
            Class::Upper => {
                prev == Class::Lower
                    || prev == Class::Digit
                    || (prev == Class::Upper
                        && chars.peek().is_some_and(|&next| classify(next) == Class::Lower))
            }
            Class::Lower => prev == Class::Digit,
            Class::Digit => prev != Class::Digit,
            Class::Separator => unreachable!(),
        };

        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        match class {
            Class::Upper => current.extend(ch.to_lowercase()),
            _ => current.push(ch),
        }
        prev = class;
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercase the first character of a word, leaving the rest as-is.
fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn join_capitalized(words: &[String], separator: &str) -> String {
    words.iter().map(|word| capitalized(word)).collect::<Vec<_>>().join(separator)
}

fn join_screaming(words: &[String], separator: &str) -> String {
    words.iter().map(|word| word.to_uppercase()).collect::<Vec<_>>().join(separator)
}

/// Render `s` with all words lowercased and joined without a separator: `foobar22tarball`.
pub fn flat(s: &str) -> String {
    words(s).concat()
}

/// Render `s` with all words uppercased and joined without a separator: `FOOBAR22TARBALL`.
pub fn screaming_flat(s: &str) -> String {
    words(s).concat().to_uppercase()
}

/// Render `s` in camelCase: `fooBar22Tarball`.
pub fn camel(s: &str) -> String {
    let mut words = words(s).into_iter();
    let Some(mut out) = words.next() else {
        return String::new();
    };
    for word in words {
        out.push_str(&capitalized(&word));
    }
    out
}

/// Render `s` in PascalCase: `FooBar22Tarball`.
pub fn pascal(s: &str) -> String {
    words(s).iter().map(|word| capitalized(word)).collect()
}

/// Render `s` in snake_case: `foo_bar_22_tarball`.
pub fn snake(s: &str) -> String {
    words(s).join("_")
}

/// Render `s` in SCREAMING_SNAKE_CASE: `FOO_BAR_22_TARBALL`.
pub fn screaming_snake(s: &str) -> String {
    join_screaming(&words(s), "_")
}

/// Render `s` in Pascal_Snake_Case: `Foo_Bar_22_Tarball`.
pub fn pascal_snake(s: &str) -> String {
    join_capitalized(&words(s), "_")
}

/// Render `s` in kebab-case: `foo-bar-22-tarball`.
pub fn kebab(s: &str) -> String {
    words(s).join("-")
}

/// Render `s` in SCREAMING-KEBAB-CASE: `FOO-BAR-22-TARBALL`.
pub fn screaming_kebab(s: &str) -> String {
    join_screaming(&words(s), "-")
}

/// Render `s` in Pascal-Kebab-Case (also called train case): `Foo-Bar-22-Tarball`.
pub fn pascal_kebab(s: &str) -> String {
    join_capitalized(&words(s), "-")
}
