//! Pairwise merge and multi-fragment composition.
//!
//! Scalars are last-applied-wins; headers append and then collapse through
//! [`crate::headers::normalize`]. A merge never fails and never mutates its
//! inputs.

use super::value::{HEADERS_OPTION, RequestConfig};
use crate::headers;

/// How a named option combines during a merge.
///
/// `Overwrite` is the default; the reserved header sequence is the one name
/// that appends instead. A future special-cased option gets a variant here
/// rather than a branch at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeStrategy {
    /// The incoming value replaces the base value for the same name.
    Overwrite,
    /// Sequences concatenate, then duplicate names collapse to the last
    /// value at the first occurrence's position.
    AppendDedupLastWins,
}

impl MergeStrategy {
    /// Strategy for one option name.
    #[must_use]
    pub fn for_option(name: &str) -> Self {
        if name == HEADERS_OPTION {
            MergeStrategy::AppendDedupLastWins
        } else {
            MergeStrategy::Overwrite
        }
    }
}

impl RequestConfig {
    /// Combine `self` with `incoming`, producing a new configuration.
    ///
    /// Every option present in `incoming` overwrites the base value for that
    /// name; names absent from `incoming` are untouched. Headers never
    /// overwrite positionally: the two sequences concatenate and collapse to
    /// last-value-wins per name.
    #[must_use]
    pub fn merge(&self, incoming: &RequestConfig) -> RequestConfig {
        let mut merged = self.clone();
        for (name, value) in &incoming.options {
            match MergeStrategy::for_option(name) {
                MergeStrategy::Overwrite => merged.put(name.clone(), value.clone()),
                MergeStrategy::AppendDedupLastWins => {
                    // The option list never carries the header sequence;
                    // reaching this arm means the construction boundary was
                    // bypassed.
                    debug_assert!(
                        name != HEADERS_OPTION,
                        "header sequence stored as a scalar option"
                    );
                    merged.put(name.clone(), value.clone());
                }
            }
        }
        let combined = self
            .headers
            .iter()
            .cloned()
            .chain(incoming.headers.iter().cloned());
        merged.headers = headers::normalize(combined);
        merged
    }

    /// Left-fold [`RequestConfig::merge`] over `fragments` in call-site
    /// order. No fragments yields the empty configuration.
    #[must_use]
    pub fn compose<I>(fragments: I) -> RequestConfig
    where
        I: IntoIterator<Item = RequestConfig>,
    {
        fragments
            .into_iter()
            .fold(RequestConfig::empty(), |base, fragment| base.merge(&fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptionValue;
    use crate::headers::HeaderEntry;

    fn scalar(name: &str, value: impl Into<OptionValue>) -> RequestConfig {
        let mut config = RequestConfig::empty();
        config.put(name.to_string(), value.into());
        config
    }

    fn with_header(name: &str, value: &str) -> RequestConfig {
        let mut config = RequestConfig::empty();
        config.headers = headers::normalize([HeaderEntry::new(name, value)]);
        config
    }

    #[test]
    fn merge_with_empty_is_identity_on_both_sides() {
        let config = scalar("verbose", true).merge(&with_header("Accept", "application/json"));
        assert_eq!(config.merge(&RequestConfig::empty()), config);
        assert_eq!(RequestConfig::empty().merge(&config), config);
    }

    #[test]
    fn scalars_take_the_last_applied_value() {
        let merged = scalar("verbose", true).merge(&scalar("verbose", false));
        assert_eq!(merged.option("verbose"), Some(&OptionValue::Bool(false)));
        assert_eq!(merged.option_count(), 1);
    }

    #[test]
    fn options_absent_from_incoming_survive() {
        let merged = scalar("verbose", true).merge(&scalar("timeout", 30));
        assert_eq!(merged.option("verbose"), Some(&OptionValue::Bool(true)));
        assert_eq!(merged.option("timeout"), Some(&OptionValue::Int(30)));
    }

    #[test]
    fn headers_append_rather_than_overwrite() {
        let merged = with_header("X-One", "1").merge(&with_header("X-Two", "2"));
        assert_eq!(merged.headers().len(), 2);
        assert_eq!(merged.headers().get("X-One"), Some("1"));
        assert_eq!(merged.headers().get("X-Two"), Some("2"));
    }

    #[test]
    fn duplicate_header_names_collapse_to_the_last_value() {
        let merged = with_header("X-Token", "old").merge(&with_header("X-Token", "new"));
        assert_eq!(merged.headers().len(), 1);
        assert_eq!(merged.headers().get("X-Token"), Some("new"));
    }

    #[test]
    fn compose_is_a_left_fold_of_pairwise_merges() {
        let a = scalar("verbose", true);
        let b = with_header("Accept", "application/json");
        let c = scalar("verbose", false);

        let folded = RequestConfig::compose([a.clone(), b.clone(), c.clone()]);
        assert_eq!(folded, a.merge(&b).merge(&c));
    }

    #[test]
    fn compose_of_nothing_is_the_empty_configuration() {
        assert_eq!(
            RequestConfig::compose(std::iter::empty::<RequestConfig>()),
            RequestConfig::empty()
        );
    }

    #[test]
    fn merge_leaves_both_inputs_untouched() {
        let base = scalar("verbose", true);
        let incoming = scalar("verbose", false);
        let base_before = base.clone();
        let incoming_before = incoming.clone();

        let _ = base.merge(&incoming);
        assert_eq!(base, base_before);
        assert_eq!(incoming, incoming_before);
    }
}
