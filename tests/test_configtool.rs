use rpawogen::configtool::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.length, 12);
        assert_eq!(config.complexity, 1);
        assert!(!config.use_words);
        assert!(!config.use_digits);
        assert!(!config.use_punct);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            length: 24,
            complexity: 7,
            use_words: true,
            use_digits: true,
            use_punct: false,
            log_file: Some("passwords.txt".to_string()),
            ..AppConfig::default()
        };
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }
}
