//! Maven repository path layout.
//!
//! Computes the `com/android/tools/<artifact_id>/<version>` directory and
//! the `<artifact_id>-<version>.{jar,pom}` filenames placed inside it.

use crate::artifact_id::ArtifactId;
use crate::version::Version;
use camino::Utf8PathBuf;

/// The fixed Maven group id for all packaged artifacts.
pub const GROUP_ID: &str = "com.android.tools";

/// The jar and descriptor path layout for one artifact version.
///
/// # Examples
///
/// ```
/// use maven_packager::artifact_id::ArtifactId;
/// use maven_packager::layout::ArtifactLayout;
/// use maven_packager::version::Version;
///
/// let layout = ArtifactLayout::new(
///     ArtifactId::try_from("foo").expect("valid artifact id"),
///     Version::try_from("1.0.0").expect("valid version"),
/// );
/// assert_eq!(layout.repository_dir(), "com/android/tools/foo/1.0.0");
/// assert_eq!(layout.jar_filename(), "foo-1.0.0.jar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    artifact_id: ArtifactId,
    version: Version,
}

impl ArtifactLayout {
    /// Create a layout from validated components.
    #[must_use]
    pub fn new(artifact_id: ArtifactId, version: Version) -> Self {
        Self {
            artifact_id,
            version,
        }
    }

    /// Return the artifact identifier component.
    #[must_use]
    pub fn artifact_id(&self) -> &ArtifactId {
        &self.artifact_id
    }

    /// Return the version component.
    #[must_use]
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// Relative repository directory for this artifact version, derived
    /// from [`GROUP_ID`] by splitting on dots.
    #[must_use]
    pub fn repository_dir(&self) -> Utf8PathBuf {
        let mut dir = Utf8PathBuf::new();
        for segment in GROUP_ID.split('.') {
            dir.push(segment);
        }
        dir.push(self.artifact_id.as_str());
        dir.push(self.version.as_str());
        dir
    }

    /// The `<artifact_id>-<version>` stem shared by the jar and the descriptor.
    #[must_use]
    pub fn base_name(&self) -> String {
        format!("{}-{}", self.artifact_id, self.version)
    }

    /// Filename of the packaged jar.
    #[must_use]
    pub fn jar_filename(&self) -> String {
        format!("{}.jar", self.base_name())
    }

    /// Filename of the generated POM descriptor.
    #[must_use]
    pub fn pom_filename(&self) -> String {
        format!("{}.pom", self.base_name())
    }
}
