use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{
    jid::{Jid, JidError},
    logging::LoggingConfig,
};

/// Имя файла настроек, который ищется в рабочем каталоге (`xmpubsub.toml`).
pub const DEFAULT_CONFIG_NAME: &str = "xmpubsub";

/// Настройки клиента.
///
/// Источники по возрастанию приоритета: значения по умолчанию, файл,
/// переменные окружения `XMPUBSUB_*` (вложенные поля через `__`, например
/// `XMPUBSUB_LOGGING__LEVEL`; список узлов через запятую).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Собственный адрес клиента.
    pub own_jid: String,
    /// Адрес pubsub-сервиса; пустая строка означает собственный сервер.
    pub service: String,
    /// Узлы, на которые подписываться при старте.
    pub nodes: Vec<String>,
    pub logging: LoggingConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            own_jid: "demo@localhost/xmpubsub".to_string(),
            service: "pubsub.localhost".to_string(),
            nodes: vec!["news".to_string()],
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Загружает настройки. Явно указанный файл обязателен; без него
    /// читается `xmpubsub.toml`, если он есть.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let cfg = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("XMPUBSUB")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("nodes")
                    .try_parsing(true),
            )
            .build()?;

        cfg.try_deserialize()
    }

    pub fn own_jid(&self) -> Result<Jid, JidError> {
        self.own_jid.parse()
    }

    pub fn service_jid(&self) -> Result<Jid, JidError> {
        self.service.parse()
    }
}
