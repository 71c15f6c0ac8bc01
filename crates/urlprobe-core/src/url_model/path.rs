//! Path normalization and filename/extension derivation.

/// Strips every leading and trailing `/`, then prepends exactly one.
///
/// Interior slashes are kept as-is.
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

/// Splits the final segment of a normalized path into `(filename, extension)`.
///
/// The extension is the text after the last `.` of the filename; a filename
/// without a dot, or ending in one, has no extension. The root path has
/// neither.
pub fn split_filename(path: &str) -> (Option<String>, Option<String>) {
    let segment = match path.rsplit('/').next() {
        Some(s) if !s.is_empty() => s,
        _ => return (None, None),
    };
    let extension = segment
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .map(str::to_string);
    (Some(segment.to_string()), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        assert_eq!(normalize_path("/a/b"), "/a/b");
        assert_eq!(normalize_path("a/b/"), "/a/b");
        assert_eq!(normalize_path("//a//"), "/a");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn filename_and_extension() {
        assert_eq!(
            split_filename("/a/b/file.tar.gz"),
            (Some("file.tar.gz".to_string()), Some("gz".to_string()))
        );
        assert_eq!(split_filename("/a/b/file"), (Some("file".to_string()), None));
        assert_eq!(
            split_filename("/.htaccess"),
            (Some(".htaccess".to_string()), Some("htaccess".to_string()))
        );
        assert_eq!(split_filename("/archive."), (Some("archive.".to_string()), None));
    }

    #[test]
    fn root_has_no_filename() {
        assert_eq!(split_filename("/"), (None, None));
    }
}
