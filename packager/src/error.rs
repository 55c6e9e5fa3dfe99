//! Error types for packaging input validation.
//!
//! Each variant provides a descriptive message identifying the invalid input
//! and the constraint that was violated.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors arising from invalid packaging inputs.
#[derive(Debug, Error)]
pub enum PackagerError {
    /// A version string does not match the `MAJOR.MINOR.PATCH` pattern.
    #[error("invalid version \"{value}\"; expected three dot-separated numbers")]
    InvalidVersion {
        /// The rejected version string.
        value: String,
    },

    /// Both a literal version and a version file were supplied.
    #[error("only one of --version and --version-file may be given")]
    ConflictingVersionSources,

    /// Neither a literal version nor a version file was supplied.
    #[error("a version is required; pass --version or --version-file")]
    MissingVersionSource,

    /// The version file did not contain exactly one significant line.
    #[error("expected exactly one version line in {path}, found {count}")]
    AmbiguousVersionFile {
        /// Path to the offending version file.
        path: Utf8PathBuf,
        /// Number of non-comment, non-blank lines found.
        count: usize,
    },

    /// A dependency coordinate is not a `group:artifact:version` triple.
    #[error("malformed dependency \"{value}\": {reason}")]
    MalformedCoordinate {
        /// The rejected coordinate string.
        value: String,
        /// Description of the validation failure.
        reason: String,
    },

    /// An artifact identifier is empty or contains unsupported characters.
    #[error("invalid artifact id: {reason}")]
    InvalidArtifactId {
        /// Description of the validation failure.
        reason: String,
    },

    /// An I/O operation on an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`PackagerError`].
pub type Result<T> = std::result::Result<T, PackagerError>;
