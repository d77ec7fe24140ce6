#![warn(missing_docs)]
//! Lensray specific error structures
use std::{error::Error, fmt::Display};

/// Lensray application specific Result type
pub type LensrayResult<T> = std::result::Result<T, LensrayError>;

/// Errors that can be returned by various lensray functions.
///
/// The variants [`LensrayError::DegenerateImaging`] and [`LensrayError::NonProgressingStep`] are
/// bound to a single ray. During a trace they are stored on the failing [`Ray`](crate::ray::Ray)
/// instead of aborting the whole system trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensrayError {
    /// invalid setup of an `OpticalSystem`, a source, an element or a ray-trace configuration
    /// (e.g. tracing without a light source)
    Configuration(String),
    /// a lens interaction resulted in an infinite, undefined or zero image distance
    DegenerateImaging(String),
    /// a ray cannot advance to the next plane (element or system extent) along the optical axis
    NonProgressingStep(String),
    /// errors of a rendering sink or a path recorder
    Render(String),
    /// errors while reading, parsing or writing system description files and reports
    Document(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for LensrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(m) => {
                write!(f, "Configuration:{m}")
            }
            Self::DegenerateImaging(m) => {
                write!(f, "DegenerateImaging:{m}")
            }
            Self::NonProgressingStep(m) => {
                write!(f, "NonProgressingStep:{m}")
            }
            Self::Render(m) => {
                write!(f, "Render:{m}")
            }
            Self::Document(m) => {
                write!(f, "Document:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Lensray Error:Other:{m}"),
        }
    }
}
impl Error for LensrayError {}

impl std::convert::From<String> for LensrayError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = LensrayError::from("test".to_string());
        assert_eq!(error, LensrayError::Other("test".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", LensrayError::Configuration("test".to_string())),
            "Configuration:test"
        );
        assert_eq!(
            format!("{}", LensrayError::DegenerateImaging("test".to_string())),
            "DegenerateImaging:test"
        );
        assert_eq!(
            format!("{}", LensrayError::NonProgressingStep("test".to_string())),
            "NonProgressingStep:test"
        );
        assert_eq!(
            format!("{}", LensrayError::Render("test".to_string())),
            "Render:test"
        );
        assert_eq!(
            format!("{}", LensrayError::Document("test".to_string())),
            "Document:test"
        );
        assert_eq!(
            format!("{}", LensrayError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(
            format!("{}", LensrayError::Other("test".to_string())),
            "Lensray Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", LensrayError::NonProgressingStep("test".to_string())),
            "NonProgressingStep(\"test\")"
        );
    }
}
