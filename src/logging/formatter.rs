use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::Layer as LayerTrait,
    registry::LookupSpan,
};

use crate::logging::config::{ConsoleConfig, LogFormat};

/// Собирает fmt-слой нужного формата поверх произвольного writer'а.
///
/// Возвращается boxed trait-объект, чтобы стереть конкретный тип формата
/// (json/pretty/compact).
pub fn build_formatter<S, W>(
    options: &ConsoleConfig,
    format: LogFormat,
    with_ansi: bool,
    writer: W,
) -> Box<dyn LayerTrait<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => {
            let json_fmt = fmt::format().json().with_current_span(true);
            let layer = fmt::layer()
                .event_format(json_fmt)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(options.with_target)
                .with_thread_ids(options.with_thread_ids)
                .with_line_number(options.with_line_numbers);
            Box::new(layer)
        }
        LogFormat::Pretty => {
            let pretty_fmt = fmt::format().pretty();
            let layer = fmt::layer()
                .event_format(pretty_fmt)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(writer)
                .with_ansi(with_ansi)
                .with_target(options.with_target)
                .with_thread_ids(options.with_thread_ids)
                .with_line_number(options.with_line_numbers);
            Box::new(layer)
        }
        LogFormat::Compact => {
            let compact_fmt = fmt::format().compact();
            let layer = fmt::layer()
                .event_format(compact_fmt)
                .with_writer(writer)
                .with_ansi(with_ansi)
                .with_target(options.with_target)
                .with_thread_ids(options.with_thread_ids)
                .with_line_number(options.with_line_numbers);
            Box::new(layer)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use tracing_subscriber::{prelude::*, registry::Registry};

    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn render(format: LogFormat) -> String {
        let buffer = Buffer::default();
        let layer = build_formatter::<Registry, _>(
            &ConsoleConfig::default(),
            format,
            false,
            buffer.clone(),
        );
        tracing::subscriber::with_default(Registry::default().with(layer), || {
            tracing::info!(node = "news", "hello formatter");
        });
        let out = buffer.0.lock().unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn test_json_format_is_one_object_per_line() {
        let out = render(LogFormat::Json);
        let line = out.lines().next().unwrap();
        assert!(line.starts_with('{') && line.ends_with('}'));
        assert!(line.contains("\"message\":\"hello formatter\""));
        assert!(line.contains("\"node\":\"news\""));
    }

    /// Тест проверяет, что текстовые форматы выводят сообщение и поля.
    #[test]
    fn test_text_formats_render_message_and_fields() {
        for format in [LogFormat::Compact, LogFormat::Pretty] {
            let out = render(format);
            assert!(out.contains("hello formatter"), "{format:?}: {out}");
            assert!(out.contains("news"), "{format:?}: {out}");
        }
    }
}
