use std::time::Instant;

use tracing_appender::non_blocking::WorkerGuard;

/// Handle для управления lifecycle логирования.
///
/// Держит guard файлового writer'а: пока handle жив, фоновый поток
/// дописывает события в файл.
pub struct LoggingHandle {
    file_guard: Option<WorkerGuard>,
}

impl LoggingHandle {
    pub fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self { file_guard }
    }

    /// Включён ли файловый вывод.
    pub fn has_file_sink(&self) -> bool {
        self.file_guard.is_some()
    }

    /// Сбрасывает буфер файлового вывода и завершает его.
    pub fn shutdown(mut self) {
        let Some(guard) = self.file_guard.take() else {
            return;
        };

        tracing::info!("Logging shutdown initiated");
        let start = Instant::now();
        drop(guard);
        tracing::info!(
            shutdown_duration_ms = start.elapsed().as_millis() as u64,
            "Logging shutdown completed"
        );
    }
}

impl std::fmt::Debug for LoggingHandle {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("LoggingHandle")
            .field("file_sink", &self.has_file_sink())
            .finish()
    }
}
