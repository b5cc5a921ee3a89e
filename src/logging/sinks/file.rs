use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling::daily};
use tracing_subscriber::{layer::Layer as LayerTrait, registry::LookupSpan};

use crate::logging::{
    config::{LoggingConfig, LoggingError},
    formatter,
};

/// Файловый слой с ежедневной ротацией.
///
/// Запись идёт через неблокирующий writer; возвращённый guard должен
/// жить, пока нужен вывод, иначе хвост буфера будет потерян.
pub fn layer_with_config<S>(
    config: &LoggingConfig
) -> Result<(Box<dyn LayerTrait<S> + Send + Sync>, WorkerGuard), LoggingError>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    config.ensure_log_dir()?;

    let file_appender = daily(&config.log_dir, &config.file.filename);
    let (writer, guard) = non_blocking(file_appender);

    let layer = formatter::build_formatter(&config.console, config.file.format, false, writer);
    Ok((layer, guard))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tracing_subscriber::{prelude::*, registry::Registry};

    use super::*;
    use crate::logging::config::LogFormat;

    /// Тест проверяет, что после сброса guard'а событие оказывается в файле
    /// внутри каталога логов.
    #[test]
    fn test_file_layer_writes_into_log_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut cfg = LoggingConfig {
            log_dir: tmp.path().join("logs"),
            ..Default::default()
        };
        cfg.file.enabled = true;
        cfg.file.format = LogFormat::Json;

        let (layer, guard) = layer_with_config::<Registry>(&cfg).unwrap();
        tracing::subscriber::with_default(Registry::default().with(layer), || {
            tracing::info!(node = "news", "written to file");
        });
        drop(guard);

        let contents: String = fs::read_dir(&cfg.log_dir)
            .unwrap()
            .map(|entry| fs::read_to_string(entry.unwrap().path()).unwrap())
            .collect();
        assert!(contents.contains("written to file"), "{contents}");
    }
}
