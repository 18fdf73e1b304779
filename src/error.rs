use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting a CCPD directory.
///
/// Every variant is fatal for the batch; the driver stops at the first one.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("filename {name:?} has no {field}")]
    MissingField { name: String, field: &'static str },

    #[error("filename {name:?}: {value:?} is not an integer")]
    InvalidNumber {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to decode image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to list input directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to serialize VOC annotation: {0}")]
    XmlWrite(#[from] quick_xml::se::SeError),

    #[error("failed to parse VOC annotation: {0}")]
    XmlRead(#[from] quick_xml::de::DeError),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
