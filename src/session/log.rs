// ABOUTME: Append-only text log writer for the active session log file.
// ABOUTME: Each record is written as UTF-8 followed by a single newline; nothing is ever rewritten.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Append `text` plus a trailing newline to `path`, creating the file if needed.
///
/// Parent directories are not created. Callers on the hook path swallow the error.
pub fn append_to_log(path: &Path, text: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut record = String::with_capacity(text.len() + 1);
    record.push_str(text);
    record.push('\n');
    file.write_all(record.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn append_creates_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("session.log");

        append_to_log(&log, "first").unwrap();

        assert_eq!(fs::read_to_string(&log).unwrap(), "first\n");
    }

    #[test]
    fn append_preserves_existing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("session.log");
        fs::write(&log, "# Session header\n").unwrap();

        append_to_log(&log, "one").unwrap();
        append_to_log(&log, "two\nlines").unwrap();

        let content = fs::read_to_string(&log).unwrap();
        assert_eq!(content, "# Session header\none\ntwo\nlines\n");
    }

    #[test]
    fn append_writes_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("session.log");

        append_to_log(&log, "RESULT: ✅ Success").unwrap();

        let bytes = fs::read(&log).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "RESULT: ✅ Success\n");
    }

    #[test]
    fn append_to_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("no").join("such").join("dir").join("session.log");

        assert!(append_to_log(&log, "lost").is_err());
        assert!(!log.exists());
    }

    #[test]
    fn append_to_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(append_to_log(tmp.path(), "lost").is_err());
    }
}
