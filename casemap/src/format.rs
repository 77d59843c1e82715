use std::{fmt, str::FromStr};

use crate::Error;

/// A supported configuration key notation.
///
/// The names of the different formatting styles are not standardized, so each format is identified
/// by what it does to the example name `two words`:
///
/// | variant                    | identifier  |
/// |----------------------------|-------------|
/// | [`Flat`](Self::Flat)       | `twowords`  |
/// | [`Upper`](Self::Upper)     | `TWOWORDS`  |
/// | [`Camel`](Self::Camel)     | `twoWords`  |
/// | [`Pascal`](Self::Pascal)   | `TwoWords`  |
/// | [`Snake`](Self::Snake)     | `two_words` |
/// | [`ScreamingSnake`](Self::ScreamingSnake) | `TWO_WORDS` |
/// | [`CamelSnake`](Self::CamelSnake)         | `two_Words` |
/// | [`PascalSnake`](Self::PascalSnake)       | `Two_Words` |
/// | [`Kebab`](Self::Kebab)     | `two-words` |
/// | [`ScreamingKebab`](Self::ScreamingKebab) | `TWO-WORDS` |
/// | [`CamelKebab`](Self::CamelKebab)         | `two-Words` |
/// | [`PascalKebab`](Self::PascalKebab)       | `Two-Words` |
///
/// # Example
/// ```rust
/// use casemap::Format;
///
/// let format: Format = "Two-Words".parse()?;
/// assert_eq!(format, Format::PascalKebab);
/// assert_eq!(format.convert("HTTPHeader22"), "Http-Header-22");
/// # Ok::<(), casemap::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `twowords`
    Flat,
    /// `TWOWORDS`
    Upper,
    /// `twoWords`
    Camel,
    /// `TwoWords`
    Pascal,
    /// `two_words`
    Snake,
    /// `TWO_WORDS`
    ScreamingSnake,
    /// `two_Words`
    CamelSnake,
    /// `Two_Words`
    PascalSnake,
    /// `two-words`
    Kebab,
    /// `TWO-WORDS`
    ScreamingKebab,
    /// `two-Words`
    CamelKebab,
    /// `Two-Words`
    PascalKebab,
}

impl Format {
    /// Every supported format, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Flat,
        Self::Upper,
        Self::Camel,
        Self::Pascal,
        Self::Snake,
        Self::ScreamingSnake,
        Self::CamelSnake,
        Self::PascalSnake,
        Self::Kebab,
        Self::ScreamingKebab,
        Self::CamelKebab,
        Self::PascalKebab,
    ];

    /// The identifier naming this format, e.g. `"two_words"` for [`Format::Snake`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "twowords",
            Self::Upper => "TWOWORDS",
            Self::Camel => "twoWords",
            Self::Pascal => "TwoWords",
            Self::Snake => "two_words",
            Self::ScreamingSnake => "TWO_WORDS",
            Self::CamelSnake => "two_Words",
            Self::PascalSnake => "Two_Words",
            Self::Kebab => "two-words",
            Self::ScreamingKebab => "TWO-WORDS",
            Self::CamelKebab => "two-Words",
            Self::PascalKebab => "Two-Words",
        }
    }

    /// Rewrite a field name into this notation.
    ///
    /// Total over any input; an empty name stays empty.
    pub fn convert(self, name: &str) -> String {
        match self {
            Self::Flat => wordcase::flat(name),
            Self::Upper => wordcase::screaming_flat(name),
            Self::Camel => wordcase::camel(name),
            Self::Pascal => wordcase::pascal(name),
            Self::Snake => wordcase::snake(name),
            Self::ScreamingSnake => wordcase::screaming_snake(name),
            Self::CamelSnake => lower_first(wordcase::pascal_snake(name)),
            Self::PascalSnake => wordcase::pascal_snake(name),
            Self::Kebab => wordcase::kebab(name),
            Self::ScreamingKebab => wordcase::screaming_kebab(name),
            Self::CamelKebab => lower_first(wordcase::pascal_kebab(name)),
            Self::PascalKebab => wordcase::pascal_kebab(name),
        }
    }
}

/// Lowercase only the leading character, leaving every later word capitalized. An empty string
/// passes through untouched.
fn lower_first(s: String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => s,
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_owned()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Format {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let identifier: String = serde::Deserialize::deserialize(deserializer)?;
        identifier.parse().map_err(serde::de::Error::custom)
    }
}
