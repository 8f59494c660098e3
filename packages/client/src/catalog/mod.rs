//! Adapter over the transport library's option catalog.
//!
//! libcurl encodes each easy option as `type * 10000 + ordinal`; the table in
//! [`table`] carries those codes verbatim. Rows derive their `CURLOPT_*` long
//! name deterministically so documentation lookups resolve against curl.se.

mod table;

use hashbrown::HashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};

/// Value class of a transport option, per libcurl's `CURLOPTTYPE_*` bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Integer,
    String,
    Function,
    Number,
}

impl ValueType {
    /// Classify a raw numeric option code.
    ///
    /// The type band is `code / 10000`, index 0 = `Integer`. The encoding
    /// belongs to libcurl and is not ours to reinterpret.
    ///
    /// # Errors
    ///
    /// [`Error::InvariantViolation`] for codes outside the four bands.
    pub fn from_code(code: i64) -> Result<Self> {
        match code / 10000 {
            0 if code >= 0 => Ok(ValueType::Integer),
            1 => Ok(ValueType::String),
            2 => Ok(ValueType::Function),
            3 => Ok(ValueType::Number),
            _ => Err(Error::InvariantViolation(format!(
                "option code {code} is outside the libcurl type bands"
            ))),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::String => "string",
            ValueType::Function => "function",
            ValueType::Number => "number",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the `CURLOPT_*` symbol for a short option alias: uppercase, every
/// period replaced with an underscore, `CURLOPT_` prefixed. External
/// documentation lookups depend on this matching libcurl's naming exactly.
#[must_use]
pub fn derive_long_name(short: &str) -> String {
    let mut long = String::with_capacity("CURLOPT_".len() + short.len());
    long.push_str("CURLOPT_");
    for ch in short.chars() {
        match ch {
            '.' => long.push('_'),
            other => long.push(other.to_ascii_uppercase()),
        }
    }
    long
}

/// One row of the option catalog. Derived once at load, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    /// Lower-case library-facing alias, unique within the catalog.
    pub name: String,
    /// Derived `CURLOPT_*` symbol.
    pub long_name: String,
    /// Value class from the numeric code.
    pub value_type: ValueType,
}

/// The set of recognized transport options, indexed by both name forms.
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    entries: Vec<OptionEntry>,
    index: HashMap<String, usize>,
}

impl OptionCatalog {
    /// Build a catalog from the transport library's `{name -> code}` export.
    /// Input ordering is not trusted; rows are sorted by short name.
    ///
    /// # Errors
    ///
    /// [`Error::InvariantViolation`] for a code outside the libcurl type
    /// bands or a duplicated short name.
    pub fn from_codes<I, N>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, i64)>,
        N: Into<String>,
    {
        let mut entries = codes
            .into_iter()
            .map(|(name, code)| {
                let name: String = name.into();
                let name = name.to_ascii_lowercase();
                let value_type = ValueType::from_code(code)?;
                let long_name = derive_long_name(&name);
                Ok(OptionEntry {
                    name,
                    long_name,
                    value_type,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut index = HashMap::with_capacity(entries.len() * 2);
        for (at, entry) in entries.iter().enumerate() {
            if index.insert(entry.name.clone(), at).is_some() {
                return Err(Error::InvariantViolation(format!(
                    "duplicate catalog entry `{}`",
                    entry.name
                )));
            }
            index.insert(entry.long_name.to_ascii_lowercase(), at);
        }
        Ok(Self { entries, index })
    }

    /// The catalog compiled into this crate, loaded once.
    #[must_use]
    pub fn builtin() -> &'static OptionCatalog {
        static BUILTIN: Lazy<OptionCatalog> = Lazy::new(|| {
            OptionCatalog::from_codes(table::CURL_OPTION_CODES.iter().copied())
                .expect("embedded libcurl option table is well formed")
        });
        &BUILTIN
    }

    /// Rows in short-name order, optionally filtered by a pattern over the
    /// short name. An empty result is not an error.
    #[must_use]
    pub fn list(&self, filter: Option<&Regex>) -> Vec<&OptionEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.is_none_or(|pattern| pattern.is_match(&entry.name)))
            .collect()
    }

    /// Look up a row by either name form. Long names match the `CURLOPT_*`
    /// spelling case-insensitively.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&OptionEntry> {
        self.index
            .get(&name.to_ascii_lowercase())
            .map(|&at| &self.entries[at])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionEntry> {
        self.entries.iter()
    }

    /// Documentation page for an option, by either name form.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownOption`] when neither form matches a catalog row.
    pub fn doc_url(&self, name: &str) -> Result<Url> {
        let entry = self
            .find(name)
            .ok_or_else(|| Error::UnknownOption(name.to_string()))?;
        let page = format!("https://curl.se/libcurl/c/{}.html", entry.long_name);
        Url::parse(&page).map_err(|err| {
            Error::InvariantViolation(format!("derived documentation url `{page}`: {err}"))
        })
    }
}

impl<'a> IntoIterator for &'a OptionCatalog {
    type Item = &'a OptionEntry;
    type IntoIter = std::slice::Iter<'a, OptionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_name_derivation_matches_libcurl_symbols() {
        assert_eq!(derive_long_name("ssl.verifyhost"), "CURLOPT_SSL_VERIFYHOST");
        assert_eq!(derive_long_name("verbose"), "CURLOPT_VERBOSE");
        assert_eq!(
            derive_long_name("max.recv.speed.large"),
            "CURLOPT_MAX_RECV_SPEED_LARGE"
        );
    }

    #[test]
    fn type_bands_classify_real_codes() {
        assert_eq!(ValueType::from_code(41).unwrap(), ValueType::Integer);
        assert_eq!(ValueType::from_code(10023).unwrap(), ValueType::String);
        assert_eq!(ValueType::from_code(20011).unwrap(), ValueType::Function);
        assert_eq!(ValueType::from_code(30145).unwrap(), ValueType::Number);
    }

    #[test]
    fn codes_outside_the_bands_are_rejected() {
        assert!(matches!(
            ValueType::from_code(40001),
            Err(Error::InvariantViolation(_))
        ));
        assert!(matches!(
            ValueType::from_code(-3),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn catalog_sorts_rows_regardless_of_input_order() {
        let catalog =
            OptionCatalog::from_codes([("verbose", 41_i64), ("url", 10002), ("append", 50)])
                .unwrap();
        let names: Vec<_> = catalog.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["append", "url", "verbose"]);
    }

    #[test]
    fn lookup_accepts_both_name_forms() {
        let catalog = OptionCatalog::builtin();
        let by_short = catalog.find("ssl.verifyhost").unwrap();
        let by_long = catalog.find("CURLOPT_SSL_VERIFYHOST").unwrap();
        assert_eq!(by_short, by_long);
        assert_eq!(by_short.value_type, ValueType::Integer);
    }

    #[test]
    fn duplicate_short_names_are_rejected() {
        let result = OptionCatalog::from_codes([("verbose", 41_i64), ("verbose", 42)]);
        assert!(matches!(result, Err(Error::InvariantViolation(_))));
    }

    #[test]
    fn filter_narrows_the_listing() {
        let catalog = OptionCatalog::builtin();
        let pattern = Regex::new("^ssl\\.").unwrap();
        let listed = catalog.list(Some(&pattern));
        assert!(!listed.is_empty());
        assert!(listed.iter().all(|entry| entry.name.starts_with("ssl.")));
    }

    #[test]
    fn doc_url_resolves_and_unknown_names_fail() {
        let catalog = OptionCatalog::builtin();
        assert_eq!(
            catalog.doc_url("verbose").unwrap().as_str(),
            "https://curl.se/libcurl/c/CURLOPT_VERBOSE.html"
        );
        let err = catalog.doc_url("bogus").unwrap_err();
        assert_eq!(err.to_string(), "bogus is not a known curl option");
    }
}
