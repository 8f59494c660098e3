//! Ordered header sequences and duplicate collapsing.
//!
//! A configuration carries headers as an ordered list of name/value pairs.
//! Duplicates by name are allowed while fragments are being combined; they
//! collapse only through [`normalize`], which keeps the value of the last
//! occurrence at the position of the first.

use hashbrown::HashMap;

/// One header name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub name: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered sequence of header entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList(Vec<HeaderEntry>);

impl HeaderList {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, entry: HeaderEntry) {
        self.0.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaderEntry> {
        self.0.iter()
    }

    /// Value of the named header, matched ASCII case-insensitively. When
    /// duplicates are still present the last one wins, matching what a
    /// transfer would apply.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .map(|entry| entry.value.as_str())
    }
}

impl FromIterator<HeaderEntry> for HeaderList {
    fn from_iter<I: IntoIterator<Item = HeaderEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<HeaderEntry> for HeaderList {
    fn extend<I: IntoIterator<Item = HeaderEntry>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for HeaderList {
    type Item = HeaderEntry;
    type IntoIter = std::vec::IntoIter<HeaderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a HeaderEntry;
    type IntoIter = std::slice::Iter<'a, HeaderEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for HeaderList {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(name, value)| HeaderEntry::new(name, value))
            .collect()
    }
}

/// Collapse duplicate names to last-value-wins while preserving the position
/// (and spelling) of the first occurrence. Name comparison is ASCII
/// case-insensitive, per HTTP field-name semantics.
#[must_use]
pub fn normalize<I>(entries: I) -> HeaderList
where
    I: IntoIterator<Item = HeaderEntry>,
{
    let mut collapsed: Vec<HeaderEntry> = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        let key = entry.name.to_ascii_lowercase();
        match first_seen.get(&key) {
            Some(&at) => collapsed[at].value = entry.value,
            None => {
                first_seen.insert(key, collapsed.len());
                collapsed.push(entry);
            }
        }
    }
    HeaderList(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_first_position_and_last_value() {
        let collapsed = normalize([
            HeaderEntry::new("Accept", "text/plain"),
            HeaderEntry::new("User-Agent", "reqopts"),
            HeaderEntry::new("Accept", "application/json"),
        ]);

        let entries: Vec<_> = collapsed.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Accept");
        assert_eq!(entries[0].value, "application/json");
        assert_eq!(entries[1].name, "User-Agent");
    }

    #[test]
    fn normalize_compares_names_case_insensitively() {
        let collapsed = normalize([
            HeaderEntry::new("accept", "text/plain"),
            HeaderEntry::new("ACCEPT", "application/json"),
        ]);

        assert_eq!(collapsed.len(), 1);
        // First spelling survives with the last value.
        let only = collapsed.iter().next().unwrap();
        assert_eq!(only.name, "accept");
        assert_eq!(only.value, "application/json");
    }

    #[test]
    fn normalize_of_nothing_is_empty() {
        assert!(normalize(std::iter::empty::<HeaderEntry>()).is_empty());
    }

    #[test]
    fn get_prefers_the_last_duplicate() {
        let mut list = HeaderList::new();
        list.push(HeaderEntry::new("X-Trace", "a"));
        list.push(HeaderEntry::new("x-trace", "b"));
        assert_eq!(list.get("X-TRACE"), Some("b"));
        assert_eq!(list.get("missing"), None);
    }
}
