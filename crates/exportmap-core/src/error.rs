use std::path::PathBuf;
use thiserror::Error;

/// Core error type for exportmap operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("exports field is undefined")]
    UndefinedExports,

    #[error("exports field is empty")]
    EmptyExports,

    #[error(
        "exports keys must either all start with \".\" or none of them: \"{key}\" is mixed with subpath keys"
    )]
    MixedKeyFormat { key: String },

    #[error("invalid export target \"{target}\": targets must start with \"./\"")]
    InvalidTarget { target: String },

    #[error("invalid subpath pattern \"{pattern}\": only one \"*\" is allowed")]
    InvalidSubpathPattern { pattern: String },

    #[error(
        "unsupported wildcard target \"{target}\" for \"{subpath}\": target must contain exactly one \"*\""
    )]
    UnsupportedWildcardTarget { subpath: String, target: String },

    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("unsupported exports value of type {kind}")]
    UnsupportedExportsValue { kind: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest at {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Stable machine-readable code, used in JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UndefinedExports => "UNDEFINED_EXPORTS",
            Self::EmptyExports => "EMPTY_EXPORTS",
            Self::MixedKeyFormat { .. } => "MIXED_KEY_FORMAT",
            Self::InvalidTarget { .. } => "INVALID_TARGET",
            Self::InvalidSubpathPattern { .. } => "INVALID_SUBPATH_PATTERN",
            Self::UnsupportedWildcardTarget { .. } => "UNSUPPORTED_WILDCARD_TARGET",
            Self::DirectoryNotFound { .. } => "DIRECTORY_NOT_FOUND",
            Self::UnsupportedExportsValue { .. } => "UNSUPPORTED_EXPORTS_VALUE",
            Self::Io(_) => "IO_ERROR",
            Self::ManifestRead { .. } => "MANIFEST_READ_ERROR",
            Self::ManifestParse { .. } => "MANIFEST_PARSE_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
