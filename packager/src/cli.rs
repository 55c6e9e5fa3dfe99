//! CLI argument definitions for the Maven packager.
//!
//! This module defines the command-line interface using clap. It is
//! separated from the main entrypoint to keep the binary focused on
//! orchestration. The usual clap version flag is not generated because
//! `--version` carries the artifact version here.

use camino::Utf8PathBuf;
use clap::Parser;

/// Package a compiled jar into a Maven repository layout zip.
#[derive(Parser, Debug)]
#[command(name = "maven-packager")]
#[command(about = "Package a compiled jar into a Maven repository layout zip")]
#[command(long_about = concat!(
    "Package a compiled jar into a Maven repository layout zip.\n\n",
    "The archive root contains com/android/tools/<artifact_id>/<version>/ ",
    "holding the renamed jar, a generated POM descriptor, and MD5/SHA-1 ",
    "checksum sidecars for both. Declared dependency coordinates are only ",
    "recorded in the descriptor; nothing is resolved, downloaded, or ",
    "uploaded.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Package with the version taken from a version file:\n",
    "    $ maven-packager --jar libs/desugar_jdk_libs.jar \\\n",
    "        --out dist/desugar_jdk_libs.zip \\\n",
    "        --artifact-id desugar_jdk_libs --version-file VERSION.txt\n\n",
    "  Record dependencies from a file and the command line:\n",
    "    $ maven-packager --jar libs/foo.jar --out dist/foo.zip \\\n",
    "        --artifact-id foo --version-file VERSION.txt \\\n",
    "        --dependencies-file DEPENDENCIES.txt \\\n",
    "        --dependency com.android.tools:extra:1.2.0\n",
))]
pub struct Cli {
    /// Path to the jar file with the compiled library code.
    #[arg(long, value_name = "PATH")]
    pub jar: Utf8PathBuf,

    /// Destination path for the output zip archive (must end in .zip).
    #[arg(long, value_name = "PATH")]
    pub out: Utf8PathBuf,

    /// Maven artifact identifier for the packaged library.
    #[arg(long, value_name = "ID")]
    pub artifact_id: String,

    /// Version number; a direct override is unusual and gets a warning.
    #[arg(long, value_name = "X.Y.Z")]
    pub version: Option<String>,

    /// File whose single non-comment line holds the version number.
    #[arg(long, value_name = "PATH")]
    pub version_file: Option<Utf8PathBuf>,

    /// Dependency coordinate recorded in the descriptor (repeatable).
    #[arg(long = "dependency", value_name = "GROUP:ARTIFACT:VERSION")]
    pub dependency: Vec<String>,

    /// File with one dependency coordinate per line (# starts a comment);
    /// its entries precede --dependency entries in the descriptor.
    #[arg(long, value_name = "PATH")]
    pub dependencies_file: Option<Utf8PathBuf>,
}
