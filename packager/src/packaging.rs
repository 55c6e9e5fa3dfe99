//! Archive assembly for Maven artifact distribution.
//!
//! Builds the Maven repository tree for one artifact version inside a
//! scratch directory, writes the descriptor and checksum sidecars, and
//! compresses the tree into the output zip.

use crate::artifact_id::ArtifactId;
use crate::checksum;
use crate::coordinate::MavenCoordinate;
use crate::layout::ArtifactLayout;
use crate::pom;
use crate::version::Version;
use camino::{Utf8Path, Utf8PathBuf};
use log::trace;
use std::fs;
use std::io;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Input parameters for [`package_artifact`].
///
/// Groups all required inputs so the function signature stays small.
#[derive(Debug)]
pub struct PackageParams {
    /// Path to the source jar with the compiled library code.
    pub jar: Utf8PathBuf,
    /// Maven artifact identifier for the packaged library.
    pub artifact_id: ArtifactId,
    /// Artifact version.
    pub version: Version,
    /// Dependency coordinates recorded in the descriptor, in order.
    pub dependencies: Vec<MavenCoordinate>,
    /// Destination path for the zip archive; must end in `.zip`.
    pub out: Utf8PathBuf,
}

/// Output produced by [`package_artifact`].
#[derive(Debug)]
pub struct PackageOutput {
    /// Path the archive was written to; always the requested output path.
    pub archive_path: Utf8PathBuf,
}

/// Errors arising from archive assembly.
#[derive(Debug, Error)]
pub enum PackagingError {
    /// An I/O operation failed (reading the jar, writing the tree or zip).
    #[error("I/O error during packaging: {0}")]
    Io(#[from] io::Error),

    /// Writing the zip archive failed.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The source jar does not exist or is not a regular file.
    #[error("source jar not found: {0}")]
    SourceJarNotFound(Utf8PathBuf),

    /// The output path does not end in `.zip`.
    #[error("output path must end in .zip: {0}")]
    OutputNotZip(Utf8PathBuf),

    /// The scratch directory path is not valid UTF-8.
    #[error("scratch directory is not valid UTF-8: {path}")]
    ScratchDirNotUtf8 {
        /// Lossy rendering of the offending path.
        path: String,
    },
}

/// Package the source jar into a Maven repository layout zip.
///
/// Builds `com/android/tools/<artifact_id>/<version>/` inside a scratch
/// directory containing the renamed jar, the generated descriptor, and
/// `.md5`/`.sha1` sidecars for both, then compresses the tree to
/// `params.out` (that exact path, never a derived name). The scratch
/// directory is removed when this function returns, on success or failure.
///
/// # Errors
///
/// Returns [`PackagingError::SourceJarNotFound`] when the jar is missing,
/// [`PackagingError::OutputNotZip`] when the output path lacks the `.zip`
/// suffix, and [`PackagingError::Io`] / [`PackagingError::Zip`] on any
/// failure while assembling or compressing the tree.
pub fn package_artifact(params: &PackageParams) -> Result<PackageOutput, PackagingError> {
    if !params.jar.is_file() {
        return Err(PackagingError::SourceJarNotFound(params.jar.clone()));
    }
    if !params.out.as_str().ends_with(".zip") {
        return Err(PackagingError::OutputNotZip(params.out.clone()));
    }

    // Dropped on every exit path, deleting the scratch tree with it.
    let scratch = tempfile::tempdir()?;
    let scratch_root =
        Utf8Path::from_path(scratch.path()).ok_or_else(|| PackagingError::ScratchDirNotUtf8 {
            path: scratch.path().display().to_string(),
        })?;

    let layout = ArtifactLayout::new(params.artifact_id.clone(), params.version.clone());
    let version_dir = scratch_root.join(layout.repository_dir());
    fs::create_dir_all(&version_dir)?;
    trace!("assembling {} in {version_dir}", layout.base_name());

    let pom_path = version_dir.join(layout.pom_filename());
    fs::write(
        &pom_path,
        pom::pom_document(&params.artifact_id, &params.version, &params.dependencies),
    )?;

    let jar_path = version_dir.join(layout.jar_filename());
    fs::copy(&params.jar, &jar_path)?;

    checksum::write_checksum_sidecars(&jar_path)?;
    checksum::write_checksum_sidecars(&pom_path)?;

    archive_directory(scratch_root, &params.out)?;

    Ok(PackageOutput {
        archive_path: params.out.clone(),
    })
}

/// Compress the contents of `root` into a zip archive at `out`.
///
/// Entries are added in sorted traversal order; directories become
/// explicit directory entries and file contents are deflated.
fn archive_directory(root: &Utf8Path, out: &Utf8Path) -> Result<(), PackagingError> {
    let file = fs::File::create(out)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    add_directory_contents(&mut writer, root, Utf8Path::new(""), options)?;
    writer.finish()?;
    Ok(())
}

/// Append the entries under `dir` to the archive, named relative to the
/// archive root via `prefix`.
fn add_directory_contents(
    writer: &mut ZipWriter<fs::File>,
    dir: &Utf8Path,
    prefix: &Utf8Path,
    options: SimpleFileOptions,
) -> Result<(), PackagingError> {
    let mut entries: Vec<_> = dir.read_dir_utf8()?.collect::<Result<_, _>>()?;
    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    for entry in entries {
        let entry_name = prefix.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            writer.add_directory(entry_name.as_str(), options)?;
            add_directory_contents(writer, entry.path(), &entry_name, options)?;
        } else {
            writer.start_file(entry_name.as_str(), options)?;
            let mut source = fs::File::open(entry.path())?;
            io::copy(&mut source, writer)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "packaging_tests.rs"]
mod tests;
