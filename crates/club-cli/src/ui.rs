use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrowest terminal the table renderer will try to fit.
const MIN_TERM_WIDTH: usize = 40;

/// Terminal-dependent rendering choices, fixed once per process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Decide colors and width from the flags and what the terminal reports.
    ///
    /// Only tables are colored. `--color auto` colors only an interactive,
    /// non-quiet stdout without `NO_COLOR`.
    fn detect(flags: &GlobalFlags, stdout_tty: bool, no_color: bool, columns: Option<&str>) -> Self {
        let table = flags.format == OutputFormat::Table;
        let table_color = table
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => stdout_tty && !flags.quiet && !no_color,
            };
        let term_width = columns
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);
        Self {
            table_color,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let prefs = UiPrefs::detect(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
        columns.as_deref(),
    );
    let _ = UI_PREFS.set(prefs);
}

/// Preferences set by [`init`], or plain output when it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            color,
        }
    }

    #[test]
    fn auto_color_needs_an_interactive_table() {
        let table = flags(OutputFormat::Table, ColorMode::Auto, false);
        assert!(UiPrefs::detect(&table, true, false, None).table_color);
        assert!(!UiPrefs::detect(&table, false, false, None).table_color);
        assert!(!UiPrefs::detect(&table, true, true, None).table_color);

        let quiet = flags(OutputFormat::Table, ColorMode::Auto, true);
        assert!(!UiPrefs::detect(&quiet, true, false, None).table_color);
    }

    #[test]
    fn json_is_never_colored() {
        let json = flags(OutputFormat::Json, ColorMode::Always, false);
        assert!(!UiPrefs::detect(&json, true, false, None).table_color);
    }

    #[test]
    fn tiny_or_garbled_columns_are_ignored() {
        let table = flags(OutputFormat::Table, ColorMode::Never, false);
        assert_eq!(UiPrefs::detect(&table, true, false, Some("120")).term_width, Some(120));
        assert_eq!(UiPrefs::detect(&table, true, false, Some("20")).term_width, None);
        assert_eq!(UiPrefs::detect(&table, true, false, Some("wide")).term_width, None);
    }
}
