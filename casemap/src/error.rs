use crate::Format;

/// Errors reported while constructing a mapping strategy.
///
/// Both variants are terminal for the construction call that produced them. A successfully built
/// strategy cannot fail afterwards: evaluation is total over any two input strings.
pub enum Error {
    /// The requested format identifier is not in the registry.
    UnknownFormat(String),
    /// An override merge produced a key or value collision.
    DuplicateOverride(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFormat(requested) => {
                let mut known: Vec<&str> =
                    Format::ALL.iter().map(|format| format.as_str()).collect();
                known.sort_unstable();
                write!(
                    f,
                    "'{}' is not a known format. Known formats: {}",
                    requested,
                    known.join(", ")
                )
            }
            Self::DuplicateOverride(name) => write!(f, "'{}' is duplicated", name),
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
