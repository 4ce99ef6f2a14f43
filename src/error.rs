//! Error types.

use std::io;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

/// Crate-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("conflicting attribute edit at ({path}, {attr}): '{left}' vs '{right}'")]
    AttrConflict {
        path: String,
        attr: String,
        left: String,
        right: String,
    },

    #[error("no steady state exists for experiment '{experiment}': collated frame is empty")]
    EmptyFrame { experiment: String },

    #[error("axis tick labels are not defined for criteria '{0}'; supply category-specific formatting")]
    TickLabelsUnsupported(String),

    #[error("performance measure '{measure}' is not applicable to criteria '{criteria}'")]
    MeasureNotApplicable { measure: String, criteria: String },

    #[error("missing collated data for experiment '{experiment}': {path}")]
    MissingExperiment { experiment: String, path: PathBuf },

    #[error("failed parsing {path}:{line}: {message}")]
    CsvParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("missing stats file: {0}")]
    MissingStats(PathBuf),

    #[error("toml deserialization error: {0}")]
    TomlDeser(#[from] toml::de::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Attach the offending path to a raw io error.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
