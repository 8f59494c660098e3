//! Mergeable request configuration for HTTP clients
//!
//! Immutable bundles of curl transport options that combine with last-wins
//! scalars and additive headers, plus a process-wide default applied to every
//! request until reset or restored.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

// Re-export the composition core
pub use reqopts_client::builder::ConfigBuilder;
pub use reqopts_client::catalog::{OptionCatalog, OptionEntry, ValueType, derive_long_name};
pub use reqopts_client::config::{
    Callback, HEADERS_OPTION, MergeStrategy, OptionValue, RequestConfig,
};
pub use reqopts_client::error::{Error, Result};
pub use reqopts_client::global::{ConfigRegistry, SetPolicy, global};
pub use reqopts_client::headers::{HeaderEntry, HeaderList};
pub use reqopts_client::inspect::{CONFIG_BANNER, format_catalog, format_config};

use regex::Regex;
use url::Url;

/// Start building a configuration fragment.
///
/// Shorthand for [`ConfigBuilder::new`].
#[must_use]
pub fn config() -> ConfigBuilder {
    ConfigBuilder::new()
}

/// Combine fragments left to right; zero fragments yield the empty
/// configuration.
#[must_use]
pub fn compose<I>(fragments: I) -> RequestConfig
where
    I: IntoIterator<Item = RequestConfig>,
{
    RequestConfig::compose(fragments)
}

/// Copy of the process-wide default configuration.
#[must_use]
pub fn global_config() -> RequestConfig {
    global().get()
}

/// Install a new process-wide default, returning the previous one.
pub fn set_global_config(config: RequestConfig, policy: SetPolicy) -> RequestConfig {
    global().install(config, policy)
}

/// Drop the process-wide default back to the empty configuration.
pub fn reset_global_config() {
    global().reset();
}

/// Run `body` with `config` installed process-wide, restoring the previous
/// default on every exit path.
pub fn with_global_config<T>(
    config: RequestConfig,
    policy: SetPolicy,
    body: impl FnOnce() -> T,
) -> T {
    global().scoped(config, policy, body)
}

/// Catalog rows sorted by short alias, optionally filtered by a pattern over
/// the alias.
#[must_use]
pub fn list_options(filter: Option<&Regex>) -> Vec<&'static OptionEntry> {
    OptionCatalog::builtin().list(filter)
}

/// Documentation page for an option, by short or `CURLOPT_` name.
///
/// # Errors
///
/// [`Error::UnknownOption`] when neither name form matches a catalog row.
pub fn doc_url(name: &str) -> Result<Url> {
    OptionCatalog::builtin().doc_url(name)
}
