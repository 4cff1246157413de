//! Error types for report extraction and consolidation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a report and consolidating it.
#[derive(Error, Debug)]
pub enum Error {
    /// The file format is not supported or could not be detected.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// No row in the sheet matched the configured header markers.
    /// A user-correctable input problem, not a crash.
    #[error("No header row found; expected a row containing one of: {}", markers.join(", "))]
    HeaderNotFound {
        /// The marker tokens that were searched for.
        markers: Vec<String>,
    },

    /// The XLSX backend could not parse the workbook.
    #[error("XLSX parsing error: {0}")]
    XlsxError(String),

    /// The CSV backend could not parse the file.
    #[error("CSV parsing error: {0}")]
    CsvError(String),

    /// A configured refinement rule failed to compile.
    #[error("Invalid rewrite rule `{pattern}`: {message}")]
    InvalidRule {
        /// The offending pattern string.
        pattern: String,
        /// Regex compiler diagnostic.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_not_found_names_markers() {
        let err = Error::HeaderNotFound {
            markers: vec!["팀원".to_string(), "프로젝트".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("팀원"));
        assert!(msg.contains("프로젝트"));
    }
}
