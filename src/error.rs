// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Only [`Error::UnsupportedLocale`] is a hard, caller-visible failure of the
/// localization API itself; the I/O and config variants surface from the
/// persistence layer and are treated as soft failures by the callers that
/// can degrade gracefully.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A language switch was requested for a locale the resource table does
    /// not back. Never coerced to the default locale: a UI offering an
    /// unbacked option is a programming error that must stay visible.
    UnsupportedLocale(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::UnsupportedLocale(code) => {
                write!(f, "Unsupported locale: {}", code)
            }
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unsupported_locale_names_the_offending_code() {
        let err = Error::UnsupportedLocale("xx".into());
        assert_eq!(format!("{}", err), "Unsupported locale: xx");
    }
}
