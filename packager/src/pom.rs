//! POM descriptor generation.
//!
//! Substitutes the artifact identity and the declared dependency list into
//! a fixed project-metadata template. The name, description, license, and
//! source URL are constants of the packaged project, not parameters.

use crate::artifact_id::ArtifactId;
use crate::coordinate::MavenCoordinate;
use crate::layout::GROUP_ID;
use crate::version::Version;

/// Home of the packaged project, used for the url, license, and scm fields.
const PROJECT_URL: &str = "https://github.com/google/desugar_jdk_libs";

/// Render the POM descriptor for one artifact version.
///
/// The `<dependencies>` element is always present; each coordinate becomes
/// a `<dependency>` block in input order, and an empty list leaves the
/// element empty.
///
/// # Examples
///
/// ```
/// use maven_packager::artifact_id::ArtifactId;
/// use maven_packager::pom::pom_document;
/// use maven_packager::version::Version;
///
/// let id = ArtifactId::try_from("foo").expect("valid artifact id");
/// let version = Version::try_from("1.0.0").expect("valid version");
/// let document = pom_document(&id, &version, &[]);
/// assert!(document.contains("<artifactId>foo</artifactId>"));
/// assert!(document.contains("<version>1.0.0</version>"));
/// ```
#[must_use]
pub fn pom_document(
    artifact_id: &ArtifactId,
    version: &Version,
    dependencies: &[MavenCoordinate],
) -> String {
    let dependency_blocks: String = dependencies.iter().map(dependency_block).collect();
    format!(
        r#"<project
    xmlns="http://maven.apache.org/POM/4.0.0"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">
  <modelVersion>4.0.0</modelVersion>
  <groupId>{GROUP_ID}</groupId>
  <artifactId>{artifact_id}</artifactId>
  <version>{version}</version>
  <name>Small subset of OpenJDK libraries</name>
  <description>
    This project contains a small subset of OpenJDK libraries simplified for use on older runtimes.

    This is not an official Google product.
  </description>
  <url>{PROJECT_URL}</url>
  <inceptionYear>2018</inceptionYear>
  <licenses>
    <license>
      <name>GNU General Public License, version 2, with the Classpath Exception</name>
      <url>{PROJECT_URL}/blob/master/LICENSE</url>
      <distribution>repo</distribution>
    </license>
  </licenses>
  <dependencies>
{dependency_blocks}  </dependencies>
  <scm>
    <url>{PROJECT_URL}</url>
  </scm>
</project>
"#
    )
}

/// Render one `<dependency>` block, newline-terminated so blocks stack.
fn dependency_block(coordinate: &MavenCoordinate) -> String {
    format!(
        r#"    <dependency>
      <groupId>{}</groupId>
      <artifactId>{}</artifactId>
      <version>{}</version>
    </dependency>
"#,
        coordinate.group(),
        coordinate.artifact(),
        coordinate.version()
    )
}
