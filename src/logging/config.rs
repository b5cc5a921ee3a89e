use std::{collections::BTreeMap, env, fs, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

/// Префикс переменных окружения, переопределяющих настройки логирования.
pub const ENV_PREFIX: &str = "XMPUBSUB_LOG_";

/// Ошибки настройки логирования.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    #[error("invalid log format '{0}', expected compact, pretty or json")]
    InvalidFormat(String),

    #[error("invalid boolean '{value}' in {var}")]
    InvalidBool { var: String, value: String },

    #[error("log file name is empty")]
    EmptyFilename,

    #[error("cannot create log directory '{path}': {source}")]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("global subscriber already set: {0}")]
    Init(String),
}

/// Формат вывода событий.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(LoggingError::InvalidFormat(s.to_string())),
        }
    }
}

/// Настройки вывода в консоль.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Формат консоли; если не задан, берётся общий `LoggingConfig::format`.
    pub format: Option<LogFormat>,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_thread_ids: bool,
    pub with_line_numbers: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: None,
            with_ansi: true,
            with_target: true,
            with_thread_ids: false,
            with_line_numbers: false,
        }
    }
}

/// Настройки файлового вывода (ротация раз в сутки).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    /// Префикс имени файла; к нему добавляется дата.
    pub filename: String,
    pub format: LogFormat,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            filename: "xmpubsub.log".to_string(),
            format: LogFormat::Json,
        }
    }
}

/// Конфигурация логирования.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Базовый уровень (`trace`..`error` или `off`).
    pub level: String,
    pub format: LogFormat,
    pub log_dir: PathBuf,
    pub console: ConsoleConfig,
    pub file: FileConfig,
    /// Уровни для отдельных модулей, например `xmpubsub::pubsub = "trace"`.
    pub targets: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
            log_dir: PathBuf::from("logs"),
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
            targets: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Применяет переопределения из окружения:
    ///
    /// - `XMPUBSUB_LOG_LEVEL`
    /// - `XMPUBSUB_LOG_FORMAT`
    /// - `XMPUBSUB_LOG_DIR`
    /// - `XMPUBSUB_LOG_CONSOLE` (`true`/`false`)
    /// - `XMPUBSUB_LOG_FILE` (`true`/`false`)
    pub fn apply_env_overrides(&mut self) -> Result<(), LoggingError> {
        if let Some(level) = env_var("LEVEL") {
            self.level = level;
        }
        if let Some(format) = env_var("FORMAT") {
            self.format = format.parse()?;
        }
        if let Some(dir) = env_var("DIR") {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(enabled) = env_bool("CONSOLE")? {
            self.console.enabled = enabled;
        }
        if let Some(enabled) = env_bool("FILE")? {
            self.file.enabled = enabled;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), LoggingError> {
        parse_level(&self.level)?;
        for level in self.targets.values() {
            parse_level(level)?;
        }
        if self.file.enabled && self.file.filename.trim().is_empty() {
            return Err(LoggingError::EmptyFilename);
        }
        Ok(())
    }

    /// Создаёт каталог логов, если включён файловый вывод.
    pub fn ensure_log_dir(&self) -> Result<(), LoggingError> {
        if !self.file.enabled {
            return Ok(());
        }
        fs::create_dir_all(&self.log_dir).map_err(|source| LoggingError::LogDir {
            path: self.log_dir.clone(),
            source,
        })
    }

    pub fn console_format(&self) -> LogFormat {
        self.console.format.unwrap_or(self.format)
    }

    /// Директива для `EnvFilter`: `level[,target=level]*`.
    pub fn build_filter_directive(&self) -> String {
        let mut directive = self.level.to_ascii_lowercase();
        for (target, level) in &self.targets {
            directive.push(',');
            directive.push_str(target);
            directive.push('=');
            directive.push_str(&level.to_ascii_lowercase());
        }
        directive
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level).map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

fn env_var(suffix: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}{suffix}"))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn env_bool(suffix: &str) -> Result<Option<bool>, LoggingError> {
    let Some(value) = env_var(suffix) else {
        return Ok(None);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(LoggingError::InvalidBool {
            var: format!("{ENV_PREFIX}{suffix}"),
            value,
        }),
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////
