//! Maven dependency coordinate parsing.
//!
//! A coordinate is a `group:artifact:version` triple. Coordinates are only
//! recorded in the generated descriptor; nothing is resolved or fetched.

use crate::error::{PackagerError, Result};
use crate::listfile::significant_lines;
use camino::Utf8Path;
use std::fmt;
use std::fs;

/// Number of colon-separated components in a coordinate string.
const COORDINATE_PARTS: usize = 3;

/// A `(group, artifact, version)` dependency coordinate.
///
/// Every component must be non-empty: a coordinate with an empty group,
/// artifact, or version would produce a dependency block Maven cannot use,
/// so `"::"` and friends are rejected up front.
///
/// # Examples
///
/// ```
/// use maven_packager::coordinate::MavenCoordinate;
///
/// let coordinate: MavenCoordinate = "com.example:widget:1.0.0"
///     .try_into()
///     .expect("valid coordinate");
/// assert_eq!(coordinate.group(), "com.example");
/// assert_eq!(coordinate.artifact(), "widget");
/// assert_eq!(coordinate.version(), "1.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenCoordinate {
    group: String,
    artifact: String,
    version: String,
}

impl MavenCoordinate {
    /// Return the group id component.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Return the artifact id component.
    #[must_use]
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// Return the version component.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl TryFrom<&str> for MavenCoordinate {
    type Error = PackagerError;

    fn try_from(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split(':').collect();
        let [group, artifact, version] = parts.as_slice() else {
            return Err(PackagerError::MalformedCoordinate {
                value: value.to_owned(),
                reason: format!(
                    "expected {COORDINATE_PARTS} colon-separated components, got {}",
                    parts.len()
                ),
            });
        };
        let components = [("group", group), ("artifact", artifact), ("version", version)];
        if let Some((name, _)) = components.iter().find(|(_, part)| part.is_empty()) {
            return Err(PackagerError::MalformedCoordinate {
                value: value.to_owned(),
                reason: format!("{name} component is empty"),
            });
        }
        Ok(Self {
            group: (*group).to_owned(),
            artifact: (*artifact).to_owned(),
            version: (*version).to_owned(),
        })
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Read dependency coordinates from a list file.
///
/// Comment and blank lines are skipped; the remaining lines are parsed in
/// file order and the first malformed line aborts the whole read.
///
/// # Errors
///
/// Returns [`PackagerError::Io`] when the file cannot be read and
/// [`PackagerError::MalformedCoordinate`] when any line fails to parse.
pub fn read_coordinates_file(path: &Utf8Path) -> Result<Vec<MavenCoordinate>> {
    let contents = fs::read_to_string(path)?;
    significant_lines(&contents)
        .map(MavenCoordinate::try_from)
        .collect()
}
