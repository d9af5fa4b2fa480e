//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password log

use chrono::{DateTime, Local};
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

// 日志条目：生成时间 + 密码
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub recorded_at: DateTime<Local>,
    pub password: String,
}

impl LogEntry {
    /// 屏显格式: [HH:MM:SS] 密码
    pub fn display_line(&self) -> String {
        format!("[{}] {}", self.recorded_at.format("%H:%M:%S"), self.password)
    }
}

/// Ordered, append-only record of generated passwords. Entries stay
/// pending until they are exported to a file; a failed export keeps
/// everything in place.
#[derive(Debug, Default)]
pub struct PasswordLog {
    entries: Vec<LogEntry>,
}

impl PasswordLog {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn record(&mut self, password: String) -> &LogEntry {
        self.entries.push(LogEntry {
            recorded_at: Local::now(),
            password,
        });
        self.entries.last().unwrap()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append all pending entries to the file at `path`, one line per
    /// entry as `[YYYY-MM-DD HH:MM:SS] <password>`, stamped at save
    /// time. Prior file content is preserved. The pending list is only
    /// cleared after every line has been written.
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PassLogError> {
        if self.entries.is_empty() {
            return Err(PassLogError::NothingToSave);
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;

        for entry in &self.entries {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            writeln!(file, "[{}] {}", timestamp, entry.password)?;
        }
        file.flush()?;

        let saved = self.entries.len();
        self.entries.clear();
        Ok(saved)
    }
}

#[derive(Debug)]
pub enum PassLogError {
    NothingToSave,
    IoError(std::io::Error),
}

impl fmt::Display for PassLogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassLogError::NothingToSave => write!(f, "No passwords have been generated yet"),
            PassLogError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PassLogError {}

impl From<std::io::Error> for PassLogError {
    fn from(e: std::io::Error) -> Self {
        PassLogError::IoError(e)
    }
}
