//! Version string validation and resolution.
//!
//! A version is exactly three dot-separated runs of ASCII digits
//! (`MAJOR.MINOR.PATCH`). It comes either from a command-line literal or
//! from a version file whose single significant line holds the number.

use crate::error::{PackagerError, Result};
use crate::listfile::significant_lines;
use camino::Utf8Path;
use log::trace;
use std::fmt;
use std::fs;

/// Number of dot-separated numeric fields in a version string.
const VERSION_FIELDS: usize = 3;

/// A validated `MAJOR.MINOR.PATCH` version string.
///
/// Each field is a non-empty run of ASCII digits; the pattern is purely
/// digit-counting, so leading zeros are accepted.
///
/// # Examples
///
/// ```
/// use maven_packager::version::Version;
///
/// let version: Version = "1.2.3".try_into().expect("valid version");
/// assert_eq!(version.as_str(), "1.2.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

/// Check that `value` is exactly three dot-separated runs of ASCII digits.
fn is_version_string(value: &str) -> bool {
    let fields: Vec<&str> = value.split('.').collect();
    fields.len() == VERSION_FIELDS
        && fields
            .iter()
            .all(|field| !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit()))
}

impl Version {
    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Version {
    type Error = PackagerError;

    fn try_from(value: &str) -> Result<Self> {
        if is_version_string(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(PackagerError::InvalidVersion {
                value: value.to_owned(),
            })
        }
    }
}

impl TryFrom<String> for Version {
    type Error = PackagerError;

    fn try_from(value: String) -> Result<Self> {
        if is_version_string(&value) {
            Ok(Self(value))
        } else {
            Err(PackagerError::InvalidVersion { value })
        }
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a resolved version came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    /// Passed literally on the command line.
    CommandLine,
    /// Read from a version file.
    File,
}

/// A version together with the source it was resolved from.
///
/// Callers surface a warning when the source is [`VersionSource::CommandLine`];
/// a direct version override is unusual and worth flagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// The validated version string.
    pub version: Version,
    /// Where the version came from.
    pub source: VersionSource,
}

/// Resolve the artifact version from a literal or a version file.
///
/// Exactly one of `literal` and `file` must be supplied. A literal is
/// validated and returned as-is; a file is read, comment and blank lines
/// are dropped, and the single remaining line must validate.
///
/// # Errors
///
/// Returns [`PackagerError::ConflictingVersionSources`] when both inputs
/// are given, [`PackagerError::MissingVersionSource`] when neither is,
/// [`PackagerError::AmbiguousVersionFile`] when the file does not hold
/// exactly one significant line, [`PackagerError::InvalidVersion`] when
/// the value does not match `MAJOR.MINOR.PATCH`, and
/// [`PackagerError::Io`] when the file cannot be read.
pub fn resolve(literal: Option<&str>, file: Option<&Utf8Path>) -> Result<ResolvedVersion> {
    match (literal, file) {
        (Some(_), Some(_)) => Err(PackagerError::ConflictingVersionSources),
        (None, None) => Err(PackagerError::MissingVersionSource),
        (Some(value), None) => Ok(ResolvedVersion {
            version: Version::try_from(value)?,
            source: VersionSource::CommandLine,
        }),
        (None, Some(path)) => read_version_file(path),
    }
}

/// Read and validate the single significant line of a version file.
fn read_version_file(path: &Utf8Path) -> Result<ResolvedVersion> {
    let contents = fs::read_to_string(path)?;
    let lines: Vec<&str> = significant_lines(&contents).collect();
    let [line] = lines.as_slice() else {
        return Err(PackagerError::AmbiguousVersionFile {
            path: path.to_owned(),
            count: lines.len(),
        });
    };
    trace!("resolved version {line} from {path}");
    Ok(ResolvedVersion {
        version: Version::try_from(*line)?,
        source: VersionSource::File,
    })
}
