//! The configuration value type and its option values.

use std::fmt;
use std::sync::Arc;

use crate::headers::HeaderList;

/// Reserved option name whose value is the ordered header sequence.
pub const HEADERS_OPTION: &str = "headers";

/// Opaque shared callable for function-typed options (write callbacks and
/// friends). Compared by identity; the composition core never invokes it.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&[u8]) -> usize + Send + Sync>);

impl Callback {
    pub fn new(body: impl Fn(&[u8]) -> usize + Send + Sync + 'static) -> Self {
        Self(Arc::new(body))
    }

    #[must_use]
    pub fn as_fn(&self) -> &(dyn Fn(&[u8]) -> usize + Send + Sync) {
        self.0.as_ref()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<function>")
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A single option value.
///
/// The `Headers` form is only ever legal under [`HEADERS_OPTION`]; the
/// construction boundary in [`crate::builder`] rejects it anywhere else.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Number(f64),
    Str(String),
    Callback(Callback),
    Headers(HeaderList),
}

impl OptionValue {
    /// Short class name used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "integer",
            OptionValue::Number(_) => "number",
            OptionValue::Str(_) => "string",
            OptionValue::Callback(_) => "function",
            OptionValue::Headers(_) => "headers",
        }
    }

    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, OptionValue::Headers(_))
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(value) => write!(f, "{value}"),
            OptionValue::Int(value) => write!(f, "{value}"),
            OptionValue::Number(value) => write!(f, "{value}"),
            OptionValue::Str(value) => f.write_str(value),
            OptionValue::Callback(_) => f.write_str("<function>"),
            OptionValue::Headers(list) => {
                let mut first = true;
                for entry in list {
                    if !first {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", entry.name, entry.value)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Int(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Int(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl From<Callback> for OptionValue {
    fn from(value: Callback) -> Self {
        OptionValue::Callback(value)
    }
}

impl From<HeaderList> for OptionValue {
    fn from(value: HeaderList) -> Self {
        OptionValue::Headers(value)
    }
}

/// Immutable bundle of transport options plus the ordered header sequence.
///
/// Values combine through [`RequestConfig::merge`]; an instance is never
/// mutated after construction, so one can be stored as the process-wide
/// default and handed out freely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestConfig {
    pub(crate) options: Vec<(String, OptionValue)>,
    pub(crate) headers: HeaderList,
}

impl RequestConfig {
    /// The all-options-absent configuration with an empty header sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no option is set and the header sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.headers.is_empty()
    }

    /// Number of scalar options set; headers are counted separately.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Value of a single option by name.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Options in insertion order.
    pub fn options(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// The header sequence: possibly empty, never absent.
    #[must_use]
    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    /// Set a scalar option, keeping the insertion position of an existing
    /// name.
    pub(crate) fn put(&mut self, name: String, value: OptionValue) {
        if let Some(slot) = self
            .options
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            slot.1 = value;
        } else {
            self.options.push((name, value));
        }
    }
}

impl fmt::Display for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::inspect::format_config(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_overwrites_in_place_and_appends_new_names() {
        let mut config = RequestConfig::empty();
        config.put("verbose".into(), true.into());
        config.put("useragent".into(), "reqopts".into());
        config.put("verbose".into(), false.into());

        let names: Vec<_> = config.options().map(|(name, _)| name).collect();
        assert_eq!(names, ["verbose", "useragent"]);
        assert_eq!(config.option("verbose"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn callbacks_compare_by_identity() {
        let one = Callback::new(|data| data.len());
        let two = Callback::new(|data| data.len());
        assert_eq!(one, one.clone());
        assert_ne!(one, two);
    }

    #[test]
    fn empty_config_reports_empty() {
        let config = RequestConfig::empty();
        assert!(config.is_empty());
        assert!(config.headers().is_empty());
        assert_eq!(config.option("verbose"), None);
    }
}
