//! Construction boundary from named options to validated configurations.
//!
//! This is where untyped input enters the system: option names are checked
//! against the builtin catalog and the reserved header sequence is routed to
//! its own slot. Everything past [`ConfigBuilder::build`] is well formed by
//! construction.

use crate::catalog::OptionCatalog;
use crate::config::{HEADERS_OPTION, MergeStrategy, OptionValue, RequestConfig};
use crate::error::{Error, Result};
use crate::headers::{self, HeaderEntry, HeaderList};

/// Accumulates named options in call order and validates them into a
/// [`RequestConfig`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    entries: Vec<(String, OptionValue)>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named option. Later occurrences of the same name win, exactly
    /// as if the fragments were merged.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.entries.push((name.into(), value.into()));
        self
    }

    /// Append one header entry.
    #[must_use]
    pub fn header(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers([(name.into(), value.into())])
    }

    /// Append a sequence of header entries, order preserved.
    #[must_use]
    pub fn headers<I, N, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let list: HeaderList = pairs.into_iter().collect();
        self.entries
            .push((HEADERS_OPTION.to_string(), OptionValue::Headers(list)));
        self
    }

    /// Feed a whole `{name -> value}` mapping, as produced by the option
    /// convenience collaborators.
    #[must_use]
    pub fn options<I, N>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (N, OptionValue)>,
        N: Into<String>,
    {
        self.entries
            .extend(options.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }

    /// Validate and assemble the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownOption`] for a name the catalog does not list;
    /// - [`Error::InvalidConfig`] when the reserved `headers` name carries a
    ///   scalar;
    /// - [`Error::InvariantViolation`] when any other name carries a header
    ///   sequence.
    pub fn build(self) -> Result<RequestConfig> {
        let catalog = OptionCatalog::builtin();
        let mut config = RequestConfig::empty();
        let mut pending: Vec<HeaderEntry> = Vec::new();

        for (name, value) in self.entries {
            match MergeStrategy::for_option(&name) {
                MergeStrategy::AppendDedupLastWins => match value {
                    OptionValue::Headers(list) => pending.extend(list),
                    other => {
                        return Err(Error::InvalidConfig(format!(
                            "`{HEADERS_OPTION}` expects a header sequence, got a {} value",
                            other.kind()
                        )));
                    }
                },
                MergeStrategy::Overwrite => {
                    if value.is_sequence() {
                        return Err(Error::InvariantViolation(format!(
                            "option `{name}` holds a header sequence"
                        )));
                    }
                    // Store under the catalog's short alias so both name
                    // forms merge as the same key.
                    let Some(entry) = catalog.find(&name) else {
                        return Err(Error::UnknownOption(name));
                    };
                    config.put(entry.name.clone(), value);
                }
            }
        }

        config.headers = headers::normalize(pending);
        tracing::trace!(
            options = config.option_count(),
            headers = config.headers().len(),
            "built request configuration"
        );
        Ok(config)
    }
}
