//! Source files opened for submission

use crate::error::{Error, Result};
use crate::language::editor_tag_for_path;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// An open source document
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
    language_tag: Option<String>,
}

impl SourceFile {
    /// Read a source file from disk
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        let language_tag = editor_tag_for_path(&path).map(String::from);
        Ok(Self {
            path,
            text,
            language_tag,
        })
    }

    /// Override the editor language tag
    #[must_use]
    pub fn with_language_tag(mut self, tag: impl Into<String>) -> Self {
        self.language_tag = Some(tag.into());
        self
    }

    /// Path on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base file name
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }

    /// Full current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Editor language tag, if the file type is recognised
    pub fn language_tag(&self) -> Option<&str> {
        self.language_tag.as_deref()
    }

    /// Insert `prefix` at the very start of the document
    ///
    /// The file on disk is replaced atomically; on error neither the file
    /// nor the in-memory text changes.
    pub fn insert_at_start(&mut self, prefix: &str) -> Result<()> {
        let mut updated = String::with_capacity(prefix.len() + self.text.len());
        updated.push_str(prefix);
        updated.push_str(&self.text);

        // Rename over the symlink target, not the link itself
        let target = fs::canonicalize(&self.path)?;
        let dir = target.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(updated.as_bytes())?;
        tmp.as_file().sync_all()?;
        fs::set_permissions(tmp.path(), fs::metadata(&target)?.permissions())?;
        tmp.persist(&target).map_err(|e| Error::Io(e.error))?;

        self.text = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_detects_tag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("P42_sol.py");
        fs::write(&path, "print(1)").unwrap();

        let doc = SourceFile::open(&path).unwrap();
        assert_eq!(doc.text(), "print(1)");
        assert_eq!(doc.file_name(), "P42_sol.py");
        assert_eq!(doc.language_tag(), Some("python"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SourceFile::open(dir.path().join("nope.cpp")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_insert_at_start_updates_disk_and_memory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, "int main(){}").unwrap();

        let mut doc = SourceFile::open(&path).unwrap();
        doc.insert_at_start("// acmoj: 1\n").unwrap();

        assert_eq!(doc.text(), "// acmoj: 1\nint main(){}");
        assert_eq!(fs::read_to_string(&path).unwrap(), "// acmoj: 1\nint main(){}");
    }

    #[test]
    fn test_insert_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.c");
        fs::write(&path, "x").unwrap();

        let mut doc = SourceFile::open(&path).unwrap();
        doc.insert_at_start("// acmoj: 9\n").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_failed_insert_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.cpp");
        fs::write(&path, "int main(){}").unwrap();
        let mut doc = SourceFile::open(&path).unwrap();

        // A non-empty directory cannot be renamed over, even with root privileges
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = doc.insert_at_start("// acmoj: 1\n").unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(doc.text(), "int main(){}");
        assert!(path.is_dir());
        assert_eq!(fs::read_to_string(path.join("keep")).unwrap(), "x");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "temp file left behind");
    }

    #[test]
    fn test_insert_when_file_vanished() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "print(1)").unwrap();
        let mut doc = SourceFile::open(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(doc.insert_at_start("# acmoj: 1\n").is_err());
        assert_eq!(doc.text(), "print(1)");
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_insert_through_symlink_edits_target() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.cpp");
        let link = dir.path().join("link.cpp");
        fs::write(&real, "int main(){}").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let mut doc = SourceFile::open(&link).unwrap();
        doc.insert_at_start("// acmoj: 3\n").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "// acmoj: 3\nint main(){}");
        assert_eq!(doc.path(), link.as_path());
    }
}
