//! Plain-text list input filtering.
//!
//! The version file and the dependencies file share the same shape: one
//! entry per line, `#`-prefixed comment lines, blank lines ignored, entry
//! order preserved.

/// Iterate over the significant lines of a list file.
///
/// Each line is trimmed; lines that are empty after trimming or start with
/// `#` are skipped. Surviving lines keep their input order.
///
/// # Examples
///
/// ```
/// use maven_packager::listfile::significant_lines;
///
/// let contents = "# comment\n\n  1.2.3  \n";
/// let lines: Vec<&str> = significant_lines(contents).collect();
/// assert_eq!(lines, vec!["1.2.3"]);
/// ```
pub fn significant_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
