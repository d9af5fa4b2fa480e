//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-03
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fmt, fs};

use chrono::Local;

// 默认生成选项，保存于配置目录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub length: usize,
    pub complexity: u8,
    pub use_words: bool,
    pub use_digits: bool,
    pub use_punct: bool,
    pub log_file: Option<String>,
    pub created_at: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            length: 12,
            complexity: 1,
            use_words: false,
            use_digits: false,
            use_punct: false,
            log_file: None,
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join("config.json"))
}

/// 读取配置文件，不存在时返回默认配置
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let data = fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}

pub fn save_config(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let dir = get_config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = dir.join("config.json");
    save_config_to(config, &path)?;
    Ok(path)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, config)?;
    Ok(())
}

/// Prompt on stdout and read one trimmed line from stdin.
pub fn prompt_input(prompt: &str) -> Result<String, String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Err("Unexpected end of input".to_string());
    }
    Ok(input.trim().to_string())
}
