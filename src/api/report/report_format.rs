use core::str::FromStr;
use thiserror::Error;

/// Selects how [`super::text_report::print_report`] renders statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Labelled bracketed lists, one line per statistic.
    #[default]
    Text,

    /// One ASCII table per axis.
    #[cfg(feature = "tables")]
    Table,
}

/// Returned when a report format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown report format '{0}', expected one of: {names}", names = ReportFormat::NAMES.join(", "))]
pub struct UnknownFormatError(pub String);

impl ReportFormat {
    /// Names accepted by [`FromStr`].
    #[cfg(feature = "tables")]
    pub const NAMES: &'static [&'static str] = &["text", "table"];

    /// Names accepted by [`FromStr`].
    #[cfg(not(feature = "tables"))]
    pub const NAMES: &'static [&'static str] = &["text"];
}

impl FromStr for ReportFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            #[cfg(feature = "tables")]
            "table" => Ok(ReportFormat::Table),
            _ => Err(UnknownFormatError(s.to_string())),
        }
    }
}
