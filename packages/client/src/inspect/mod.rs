//! Diagnostic rendering of the catalog and of configuration values.
//!
//! The layouts here are observable behavior: callers script against the
//! column arrangement and the `name: value` lines, so field order and
//! separators stay fixed.

use std::fmt::Write as _;

use crate::catalog::OptionEntry;
use crate::config::RequestConfig;

/// Banner opening every configuration rendering.
pub const CONFIG_BANNER: &str = "<config>";

const CATALOG_LABELS: [&str; 3] = ["option", "libcurl", "type"];

/// Render catalog rows as three labeled, space-padded columns sorted by the
/// short alias. The last column is unpadded so lines carry no trailing
/// spaces.
#[must_use]
pub fn format_catalog<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a OptionEntry>,
{
    let mut rows: Vec<&OptionEntry> = entries.into_iter().collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    let mut widths = [CATALOG_LABELS[0].len(), CATALOG_LABELS[1].len()];
    for row in &rows {
        widths[0] = widths[0].max(row.name.len());
        widths[1] = widths[1].max(row.long_name.len());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<long_width$}  {}",
        CATALOG_LABELS[0],
        CATALOG_LABELS[1],
        CATALOG_LABELS[2],
        name_width = widths[0],
        long_width = widths[1],
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<long_width$}  {}",
            row.name,
            row.long_name,
            row.value_type,
            name_width = widths[0],
            long_width = widths[1],
        );
    }
    out
}

/// Render a configuration as the fixed banner plus one `name: value` line
/// per option (insertion order) and per header entry.
#[must_use]
pub fn format_config(config: &RequestConfig) -> String {
    let mut out = String::from(CONFIG_BANNER);
    out.push('\n');
    for (name, value) in config.options() {
        let _ = writeln!(out, "{name}: {value}");
    }
    for entry in config.headers() {
        let _ = writeln!(out, "{}: {}", entry.name, entry.value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConfigBuilder;
    use crate::catalog::OptionCatalog;

    #[test]
    fn catalog_table_is_sorted_with_fixed_columns() {
        let catalog =
            OptionCatalog::from_codes([("verbose", 41_i64), ("url", 10002), ("writefunction", 20011)])
                .unwrap();
        let table = format_catalog(&catalog);

        let lines: Vec<_> = table.lines().collect();
        assert_eq!(
            lines,
            [
                "option         libcurl                type",
                "url            CURLOPT_URL            string",
                "verbose        CURLOPT_VERBOSE        integer",
                "writefunction  CURLOPT_WRITEFUNCTION  function",
            ]
        );
    }

    #[test]
    fn empty_catalog_listing_is_just_the_labels() {
        let table = format_catalog(std::iter::empty::<&OptionEntry>());
        assert_eq!(table, "option  libcurl  type\n");
    }

    #[test]
    fn config_rendering_is_banner_then_name_value_lines() {
        let config = ConfigBuilder::new()
            .option("verbose", true)
            .option("timeout", 30)
            .header("Accept", "application/json")
            .build()
            .unwrap();

        assert_eq!(
            format_config(&config),
            "<config>\nverbose: true\ntimeout: 30\nAccept: application/json\n"
        );
    }

    #[test]
    fn empty_config_renders_only_the_banner() {
        assert_eq!(
            format_config(&crate::config::RequestConfig::empty()),
            "<config>\n"
        );
    }
}
