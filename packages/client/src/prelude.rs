//! Essential types for request configuration composition.
//!
//! Only canonical types that are part of the public API belong here.

pub use crate::builder::ConfigBuilder;
pub use crate::catalog::{OptionCatalog, OptionEntry, ValueType, derive_long_name};
pub use crate::config::{Callback, HEADERS_OPTION, MergeStrategy, OptionValue, RequestConfig};
pub use crate::error::{Error, Result};
pub use crate::global::{ConfigRegistry, SetPolicy, global};
pub use crate::headers::{HeaderEntry, HeaderList};

// URL handling
pub use url::Url;
