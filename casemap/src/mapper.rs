use std::collections::HashMap;

use crate::{Error, Format, overrides};

/// Rewrites names from one naming space into the other.
///
/// Manual adjustments are consulted first; every other name goes through the format conversion.
#[derive(Debug, Clone)]
pub struct Mapper {
    format: Format,
    adjustments: HashMap<String, String>,
}

impl Mapper {
    /// Map a name, honoring adjustments before the automatic conversion.
    pub fn map(&self, name: &str) -> String {
        match self.adjustments.get(name) {
            Some(adjusted) => adjusted.clone(),
            None => self.format.convert(name),
        }
    }

    /// The format unadjusted names are converted into.
    pub const fn format(&self) -> Format {
        self.format
    }
}

/// A name mapper for each direction of a configuration round trip.
///
/// Both directions come out of a single rename merge, so the field-name/configuration-name
/// relation is validated one-to-one before either mapper exists.
///
/// # Example
/// ```rust
/// use casemap::MapperPair;
///
/// let pair = MapperPair::builder("two_words")
///     .with_map([("CNAMEs", "cnames")])
///     .build()?;
///
/// // Writing configuration: struct field names become configuration names.
/// assert_eq!(pair.writing().map("FirstName"), "first_name");
/// assert_eq!(pair.writing().map("CNAMEs"), "cnames");
///
/// // Reading configuration: adjusted names map back to their fields.
/// assert_eq!(pair.reading().map("cnames"), "CNAMEs");
/// # Ok::<(), casemap::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MapperPair {
    writing: Mapper,
    reading: Mapper,
}

impl MapperPair {
    /// Start building a mapper pair for the given format identifier.
    pub fn builder(format: impl Into<String>) -> MapperPairBuilder {
        MapperPairBuilder { format: format.into(), renames: Vec::new() }
    }

    /// The struct-field-name to configuration-name mapper.
    pub const fn writing(&self) -> &Mapper {
        &self.writing
    }

    /// The configuration-name to struct-field-name mapper.
    pub const fn reading(&self) -> &Mapper {
        &self.reading
    }
}

/// Builder for [`MapperPair`].
#[derive(Debug)]
pub struct MapperPairBuilder {
    format: String,
    renames: Vec<(String, String)>,
}

impl MapperPairBuilder {
    /// Add one rename map. Keys are struct field names; values are the configuration names to
    /// store them under.
    ///
    /// Maps added across several calls merge as if they had been one map.
    pub fn with_map<K, V>(mut self, map: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.renames.extend(map.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }

    /// Resolve the format and validate the renames.
    pub fn build(self) -> Result<MapperPair, Error> {
        let format: Format = self.format.parse()?;
        let (forward, backward) = overrides::merge(self.renames)?;
        Ok(MapperPair {
            writing: Mapper { format, adjustments: forward },
            reading: Mapper { format, adjustments: backward },
        })
    }
}
