use std::io;
use std::path::Path;

/// Creates `path` (and any missing parents) if it does not already exist.
/// Existing directories and whatever they contain are left alone, so
/// running a build never clears the output directory.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> io::Result<()> {
    std::fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c");

        ensure_dir(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn is_idempotent_and_preserves_contents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("public");
        ensure_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "untouched").unwrap();

        ensure_dir(&target).unwrap();

        assert_eq!(
            std::fs::read_to_string(target.join("keep.txt")).unwrap(),
            "untouched"
        );
    }
}
