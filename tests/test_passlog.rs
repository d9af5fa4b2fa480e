use rpawogen::passlog::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_record_and_display_format() {
        let mut log = PasswordLog::new();
        let line = log.record("hunter2".to_string()).display_line();
        // [HH:MM:SS] hunter2
        assert_eq!(line.len(), "[HH:MM:SS] ".len() + "hunter2".len());
        assert!(line.starts_with('['));
        assert_eq!(&line[9..11], "] ");
        assert_eq!(line.as_bytes()[3], b':');
        assert_eq!(line.as_bytes()[6], b':');
        assert!(line.ends_with("hunter2"));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut log = PasswordLog::new();
        log.record("first".to_string());
        log.record("second".to_string());
        log.record("third".to_string());
        let recorded: Vec<&str> = log.entries().iter().map(|e| e.password.as_str()).collect();
        assert_eq!(recorded, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_save_appends_and_clears() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");

        let mut log = PasswordLog::new();
        log.record("alpha1".to_string());
        log.record("beta2".to_string());

        let saved = log.save_to_file(&path).unwrap();
        assert_eq!(saved, 2);
        assert!(log.is_empty());

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        // [YYYY-MM-DD HH:MM:SS] <password>
        assert!(lines[0].starts_with('['));
        assert_eq!(&lines[0][20..22], "] ");
        assert!(lines[0].ends_with("alpha1"));
        assert!(lines[1].ends_with("beta2"));
    }

    #[test]
    fn test_save_preserves_prior_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        fs::write(&path, "[2025-08-01 10:00:00] oldpass\n").unwrap();

        let mut log = PasswordLog::new();
        log.record("newpass".to_string());
        log.save_to_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[2025-08-01 10:00:00] oldpass");
        assert!(lines[1].ends_with("newpass"));
    }

    #[test]
    fn test_save_empty_log_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        let mut log = PasswordLog::new();
        let result = log.save_to_file(&path);
        assert!(matches!(result, Err(PassLogError::NothingToSave)));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_save_keeps_entries() {
        let dir = tempdir().unwrap();
        let mut log = PasswordLog::new();
        log.record("keepme".to_string());

        // A directory path cannot be opened for appending.
        let result = log.save_to_file(dir.path());
        assert!(matches!(result, Err(PassLogError::IoError(_))));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].password, "keepme");
    }

    #[test]
    fn test_clear_drops_pending_entries() {
        let mut log = PasswordLog::new();
        log.record("gone".to_string());
        log.clear();
        assert!(log.is_empty());
    }
}
