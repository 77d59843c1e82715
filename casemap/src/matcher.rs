use std::{collections::HashMap, fmt, io::Write};

use crate::{Error, Format, overrides};

/// Decides whether a configuration key corresponds to a struct field name.
///
/// A matcher is built once per unmarshal pass and discarded afterwards. Exceptions are consulted
/// before the automatic conversion, so keys that no notation rule can produce (`"HTTP-Header"`
/// for the field `HTTPHeader`, say) still bind, and the `"-"` value pins a key to never match.
///
/// # Example
/// ```rust
/// use casemap::Matcher;
///
/// let mut matcher = Matcher::builder("Two-Words")
///     .with_map([("HTTP-Header", "HTTPHeader")])
///     .build()?;
///
/// assert!(matcher.matches("First-Name", "FirstName"));
/// assert!(matcher.matches("HTTP-Header", "HTTPHeader"));
/// assert!(!matcher.matches("first-name", "FirstName"));
/// # Ok::<(), casemap::Error>(())
/// ```
pub struct Matcher<'w> {
    format: Format,
    overrides: HashMap<String, String>,
    trace: Option<Box<dyn Write + 'w>>,
}

impl<'w> Matcher<'w> {
    /// Start building a matcher for the given format identifier.
    pub fn builder(format: impl Into<String>) -> MatcherBuilder<'w> {
        MatcherBuilder { format: format.into(), overrides: Vec::new(), trace: None }
    }

    /// Whether the configuration key `key` binds to the struct field `field`.
    ///
    /// An exception whose value names another field does not decide the call; it falls back to
    /// the automatic conversion, compared byte for byte against `key`. With a trace sink attached,
    /// every call writes exactly one line, in call order.
    pub fn matches(&mut self, key: &str, field: &str) -> bool {
        let matched = match self.overrides.get(key) {
            Some(expected) if expected == field => true,
            Some(expected) if expected == overrides::NEVER_MATCHES => false,
            Some(_) | None => self.format.convert(field) == key,
        };

        if let Some(sink) = self.trace.as_mut() {
            let op = if matched { "==" } else { "!=" };
            // A failed trace write never fails the match.
            let _ = writeln!(sink, "(key) '{key}' {op} '{field}' (struct field)");
        }

        matched
    }
}

impl fmt::Debug for Matcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("format", &self.format)
            .field("overrides", &self.overrides)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

/// Builder for [`Matcher`].
///
/// All fallible work happens in [`build`](Self::build): format resolution and override
/// validation, all-or-nothing.
pub struct MatcherBuilder<'w> {
    format: String,
    overrides: Vec<(String, String)>,
    trace: Option<Box<dyn Write + 'w>>,
}

impl<'w> MatcherBuilder<'w> {
    /// Add one override map. Keys are configuration keys; values are the struct field names they
    /// must bind to, or `"-"` to pin a key to never match anything.
    ///
    /// Maps added across several calls merge as if they had been one map.
    pub fn with_map<K, V>(mut self, map: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides.extend(map.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }

    /// Attach a trace sink receiving one line per [`Matcher::matches`] call, e.g.
    /// `(key) 'First-Name' == 'FirstName' (struct field)`.
    ///
    /// Writes are unbuffered and unsynchronized; keep a traced matcher inside a single unmarshal
    /// pass.
    pub fn with_trace(mut self, sink: impl Write + 'w) -> Self {
        self.trace = Some(Box::new(sink));
        self
    }

    /// Resolve the format and validate the overrides.
    pub fn build(self) -> Result<Matcher<'w>, Error> {
        let format: Format = self.format.parse()?;
        let (overrides, _) = overrides::merge(self.overrides)?;
        Ok(Matcher { format, overrides, trace: self.trace })
    }
}

impl fmt::Debug for MatcherBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherBuilder")
            .field("format", &self.format)
            .field("overrides", &self.overrides)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}
