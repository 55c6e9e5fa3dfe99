//! Unit tests for the packaging module.

use super::*;
use rstest::{fixture, rstest};
use std::io::Read as _;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::ZipArchive;

/// Well-known MD5 of the bytes `hello`.
const HELLO_MD5: &str = "5d41402abc4b2a76b9719d911017c592";

/// Well-known SHA-1 of the bytes `hello`.
const HELLO_SHA1: &str = "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";

#[fixture]
fn temp_dir() -> TempDir {
    TempDir::new().expect("temp dir creation succeeds")
}

fn utf8(path: PathBuf) -> Utf8PathBuf {
    Utf8PathBuf::try_from(path).expect("temp path is UTF-8")
}

/// Build params for a `hello`-bytes jar packaged as foo 1.0.0.
fn hello_params(temp_dir: &TempDir, dependencies: Vec<MavenCoordinate>) -> PackageParams {
    let jar = temp_dir.path().join("input.jar");
    fs::write(&jar, b"hello").expect("write jar");
    PackageParams {
        jar: utf8(jar),
        artifact_id: ArtifactId::try_from("foo").expect("valid artifact id"),
        version: Version::try_from("1.0.0").expect("valid version"),
        dependencies,
        out: utf8(temp_dir.path().join("out.zip")),
    }
}

fn open_archive(path: &Utf8Path) -> ZipArchive<fs::File> {
    let file = fs::File::open(path).expect("open archive");
    ZipArchive::new(file).expect("read archive")
}

fn read_entry(archive: &mut ZipArchive<fs::File>, name: &str) -> Vec<u8> {
    let mut entry = archive.by_name(name).expect("entry present");
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).expect("read entry");
    bytes
}

#[rstest]
fn produces_the_maven_repository_layout(temp_dir: TempDir) {
    let params = hello_params(&temp_dir, Vec::new());
    let output = package_artifact(&params).expect("packaging succeeds");

    let mut archive = open_archive(&output.archive_path);
    let mut names: Vec<String> = archive.file_names().map(str::to_owned).collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "com/",
            "com/android/",
            "com/android/tools/",
            "com/android/tools/foo/",
            "com/android/tools/foo/1.0.0/",
            "com/android/tools/foo/1.0.0/foo-1.0.0.jar",
            "com/android/tools/foo/1.0.0/foo-1.0.0.jar.md5",
            "com/android/tools/foo/1.0.0/foo-1.0.0.jar.sha1",
            "com/android/tools/foo/1.0.0/foo-1.0.0.pom",
            "com/android/tools/foo/1.0.0/foo-1.0.0.pom.md5",
            "com/android/tools/foo/1.0.0/foo-1.0.0.pom.sha1",
        ]
    );

    let jar = read_entry(&mut archive, "com/android/tools/foo/1.0.0/foo-1.0.0.jar");
    assert_eq!(jar, b"hello");
}

#[rstest]
fn descriptor_carries_identity_and_dependencies(temp_dir: TempDir) {
    let dependencies = vec![
        MavenCoordinate::try_from("g1:a1:1.0.0").expect("valid"),
        MavenCoordinate::try_from("g2:a2:2.0.0").expect("valid"),
    ];
    let params = hello_params(&temp_dir, dependencies);
    let output = package_artifact(&params).expect("packaging succeeds");

    let mut archive = open_archive(&output.archive_path);
    let pom_bytes = read_entry(&mut archive, "com/android/tools/foo/1.0.0/foo-1.0.0.pom");
    let pom_text = String::from_utf8(pom_bytes).expect("descriptor is UTF-8");

    assert!(pom_text.contains("<artifactId>foo</artifactId>"));
    assert!(pom_text.contains("<version>1.0.0</version>"));
    let first = pom_text.find("<artifactId>a1</artifactId>").expect("a1 present");
    let second = pom_text.find("<artifactId>a2</artifactId>").expect("a2 present");
    assert!(first < second, "dependency order must match input order");
}

#[rstest]
fn jar_sidecars_hold_the_expected_digests(temp_dir: TempDir) {
    let params = hello_params(&temp_dir, Vec::new());
    let output = package_artifact(&params).expect("packaging succeeds");

    let mut archive = open_archive(&output.archive_path);
    let md5 = read_entry(&mut archive, "com/android/tools/foo/1.0.0/foo-1.0.0.jar.md5");
    let sha1 = read_entry(&mut archive, "com/android/tools/foo/1.0.0/foo-1.0.0.jar.sha1");
    assert_eq!(md5, HELLO_MD5.as_bytes());
    assert_eq!(sha1, HELLO_SHA1.as_bytes());
}

#[rstest]
fn descriptor_sidecars_match_independent_recomputation(temp_dir: TempDir) {
    let params = hello_params(&temp_dir, Vec::new());
    let output = package_artifact(&params).expect("packaging succeeds");

    let mut archive = open_archive(&output.archive_path);
    let pom_bytes = read_entry(&mut archive, "com/android/tools/foo/1.0.0/foo-1.0.0.pom");
    let md5 = read_entry(&mut archive, "com/android/tools/foo/1.0.0/foo-1.0.0.pom.md5");
    let sha1 = read_entry(&mut archive, "com/android/tools/foo/1.0.0/foo-1.0.0.pom.sha1");

    // Recompute the digests over a fresh copy of the descriptor bytes.
    let copy = utf8(temp_dir.path().join("pom-copy"));
    fs::write(&copy, &pom_bytes).expect("write descriptor copy");
    assert_eq!(md5, checksum::md5_hex(&copy).expect("md5").as_bytes());
    assert_eq!(sha1, checksum::sha1_hex(&copy).expect("sha1").as_bytes());
}

#[rstest]
fn archive_lands_at_the_exact_output_path(temp_dir: TempDir) {
    let params = hello_params(&temp_dir, Vec::new());
    let output = package_artifact(&params).expect("packaging succeeds");

    assert_eq!(output.archive_path, params.out);
    assert!(params.out.is_file());
    // No derived name with a doubled suffix.
    assert!(!temp_dir.path().join("out.zip.zip").exists());
}

#[rstest]
fn rejects_missing_source_jar(temp_dir: TempDir) {
    let params = PackageParams {
        jar: utf8(temp_dir.path().join("absent.jar")),
        artifact_id: ArtifactId::try_from("foo").expect("valid artifact id"),
        version: Version::try_from("1.0.0").expect("valid version"),
        dependencies: Vec::new(),
        out: utf8(temp_dir.path().join("out.zip")),
    };
    let result = package_artifact(&params);
    assert!(matches!(result, Err(PackagingError::SourceJarNotFound(_))));
    assert!(!temp_dir.path().join("out.zip").exists());
}

#[rstest]
fn rejects_output_without_zip_suffix(temp_dir: TempDir) {
    let mut params = hello_params(&temp_dir, Vec::new());
    params.out = utf8(temp_dir.path().join("out.tar"));
    let result = package_artifact(&params);
    assert!(matches!(result, Err(PackagingError::OutputNotZip(_))));
    assert!(!temp_dir.path().join("out.tar").exists());
}

#[rstest]
fn repackaging_overwrites_the_previous_archive(temp_dir: TempDir) {
    let params = hello_params(&temp_dir, Vec::new());
    package_artifact(&params).expect("first run succeeds");
    let output = package_artifact(&params).expect("second run succeeds");

    let mut archive = open_archive(&output.archive_path);
    let jar = read_entry(&mut archive, "com/android/tools/foo/1.0.0/foo-1.0.0.jar");
    assert_eq!(jar, b"hello");
}
