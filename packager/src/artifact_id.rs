//! Artifact identifier newtype.
//!
//! Validates that the identifier is non-empty and uses only characters that
//! are safe both as a Maven artifactId and as a path segment inside the
//! archive: ASCII alphanumerics, hyphens, underscores, and dots.

use crate::error::{PackagerError, Result};
use std::fmt;

/// A validated Maven artifact identifier (e.g. `desugar_jdk_libs`).
///
/// # Examples
///
/// ```
/// use maven_packager::artifact_id::ArtifactId;
///
/// let id: ArtifactId = "desugar_jdk_libs".try_into().expect("valid artifact id");
/// assert_eq!(id.as_str(), "desugar_jdk_libs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId(String);

/// Check that every character is ASCII alphanumeric, a hyphen, an
/// underscore, or a dot.
fn is_valid_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'
}

impl ArtifactId {
    /// Return the identifier as a string slice.
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

impl TryFrom<&str> for ArtifactId {
    type Error = PackagerError;

    fn try_from(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(PackagerError::InvalidArtifactId {
                reason: "artifact id must not be empty".to_owned(),
            });
        }
        if let Some(bad) = value.chars().find(|c| !is_valid_id_char(*c)) {
            return Err(PackagerError::InvalidArtifactId {
                reason: format!("invalid character '{bad}' in artifact id \"{value}\""),
            });
        }
        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for ArtifactId {
    type Error = PackagerError;

    fn try_from(value: String) -> Result<Self> {
        // Delegate to the &str implementation for validation.
        let _ = Self::try_from(value.as_str())?;
        Ok(Self(value))
    }
}

impl AsRef<str> for ArtifactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
