//! Maven artifact packaging library.
//!
//! Packages a compiled jar into a zip archive laid out as a Maven repository
//! tree (`com/android/tools/<artifact_id>/<version>/`), together with a
//! generated POM descriptor and MD5/SHA-1 checksum sidecars. It is used by
//! the `maven-packager` CLI binary and can be consumed programmatically for
//! testing or custom packaging workflows.
//!
//! # Modules
//!
//! - [`artifact_id`] - Artifact identifier validation
//! - [`checksum`] - Streaming file digests and checksum sidecars
//! - [`cli`] - Command-line argument definitions
//! - [`coordinate`] - Dependency coordinate parsing
//! - [`error`] - Semantic error types for input validation
//! - [`layout`] - Maven repository path layout
//! - [`listfile`] - Plain-text list input filtering
//! - [`packaging`] - Scratch-directory assembly and zip creation
//! - [`pom`] - POM descriptor generation
//! - [`version`] - Version validation and resolution

pub mod artifact_id;
pub mod checksum;
pub mod cli;
pub mod coordinate;
pub mod error;
pub mod layout;
pub mod listfile;
pub mod packaging;
pub mod pom;
pub mod version;
