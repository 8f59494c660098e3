//! Immutable request configuration values and their merge semantics.

pub mod merge;
pub mod value;

pub use merge::MergeStrategy;
pub use value::{Callback, HEADERS_OPTION, OptionValue, RequestConfig};
