//! Streaming file checksums and sidecar emission.
//!
//! Maven repositories publish `.md5` and `.sha1` sidecars next to every
//! primary file. Digests are computed by streaming the file in fixed-size
//! chunks and rendered as bare lowercase hex with no trailing newline.

use camino::{Utf8Path, Utf8PathBuf};
use md5::{Digest, Md5};
use sha1::Sha1;
use std::fs;
use std::io::{self, Read};

/// Read buffer size for digest streaming.
const CHUNK_SIZE: usize = 8192;

/// Compute the lowercase hex digest of the file at `path`.
fn file_digest<D: Digest>(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs::File::open(path)?;
    let mut hasher = D::new();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(hex_string(hasher.finalize().as_slice()))
}

/// Render bytes as lowercase hexadecimal.
fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Compute the MD5 digest of the file at `path` as lowercase hex.
///
/// # Errors
///
/// Returns an error when the file cannot be read.
pub fn md5_hex(path: &Utf8Path) -> io::Result<String> {
    file_digest::<Md5>(path)
}

/// Compute the SHA-1 digest of the file at `path` as lowercase hex.
///
/// # Errors
///
/// Returns an error when the file cannot be read.
pub fn sha1_hex(path: &Utf8Path) -> io::Result<String> {
    file_digest::<Sha1>(path)
}

/// Write `<path>.md5` and `<path>.sha1` sidecars next to the file at `path`.
///
/// Each sidecar holds exactly the hex digest of the primary file.
///
/// # Errors
///
/// Returns an error when the primary file cannot be read or a sidecar
/// cannot be written.
pub fn write_checksum_sidecars(path: &Utf8Path) -> io::Result<()> {
    fs::write(sidecar_path(path, "md5"), md5_hex(path)?)?;
    fs::write(sidecar_path(path, "sha1"), sha1_hex(path)?)?;
    Ok(())
}

/// Sidecar path for `path`: the full filename with `.<algorithm>` appended.
fn sidecar_path(path: &Utf8Path, algorithm: &str) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{path}.{algorithm}"))
}
