//! Maven packager CLI entrypoint.
//!
//! This binary packages a compiled jar, a generated POM descriptor, and
//! MD5/SHA-1 checksum sidecars into a zip archive laid out as a Maven
//! repository tree. It runs once per invocation: validate inputs, assemble
//! the archive, exit.

use clap::Parser;
use maven_packager::artifact_id::ArtifactId;
use maven_packager::cli::Cli;
use maven_packager::coordinate::{self, MavenCoordinate};
use maven_packager::error::PackagerError;
use maven_packager::packaging::{PackageParams, PackagingError, package_artifact};
use maven_packager::version::{self, VersionSource};
use std::io::Write;
use thiserror::Error;

/// Errors returned by the packager CLI.
#[derive(Debug, Error)]
enum CliError {
    /// An input validation error (version, coordinate, artifact id).
    #[error("{0}")]
    Input(#[from] PackagerError),

    /// An error during archive assembly.
    #[error("{0}")]
    Packaging(#[from] PackagingError),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit 1, not clap's default 2; help output
            // still exits 0.
            let exit_code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(exit_code);
        }
    };
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

/// Resolve inputs and delegate to the packaging pipeline.
fn run(cli: &Cli, stderr: &mut dyn Write) -> Result<(), CliError> {
    let resolved = version::resolve(cli.version.as_deref(), cli.version_file.as_deref())?;
    if resolved.source == VersionSource::CommandLine {
        write_stderr_line(stderr, "WARNING: version passed on the command line");
    }

    let artifact_id = ArtifactId::try_from(cli.artifact_id.as_str())?;
    let dependencies = collect_dependencies(cli)?;

    let params = PackageParams {
        jar: cli.jar.clone(),
        artifact_id,
        version: resolved.version,
        dependencies,
        out: cli.out.clone(),
    };
    package_artifact(&params)?;
    Ok(())
}

/// Assemble the dependency list: file entries first, then `--dependency`
/// flags, each in their own order.
fn collect_dependencies(cli: &Cli) -> Result<Vec<MavenCoordinate>, PackagerError> {
    let mut dependencies = match &cli.dependencies_file {
        Some(path) => coordinate::read_coordinates_file(path)?,
        None => Vec::new(),
    };
    for value in &cli.dependency {
        dependencies.push(MavenCoordinate::try_from(value.as_str())?);
    }
    Ok(dependencies)
}

fn exit_code_for_run_result(result: Result<(), CliError>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, err);
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort diagnostics; ignore write failures.
    }
}
