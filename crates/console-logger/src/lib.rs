//! Console Logger
//!
//! `tracing` subscriber for browser builds: formatted lines go to the
//! browser console at the console level matching the event level.

use std::fmt;
use std::io;

use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid filter directives: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Logger already initialized: {0}")]
    Init(String),
}

/// Receives one formatted line per event
type Sink = fn(Level, &str);

/// Install the global subscriber. `directives` uses `EnvFilter` syntax,
/// e.g. `"info"` or `"listpad_core=debug,info"`.
pub fn init_logger(app_name: &str, directives: &str) -> Result<(), LoggerError> {
    init_with_sink(app_name, directives, console_sink)
}

pub(crate) fn init_with_sink(app_name: &str, directives: &str, sink: Sink) -> Result<(), LoggerError> {
    let filter = EnvFilter::try_new(directives)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter { sink })
        .with_timer(LocalTime)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    tracing::info!(app = app_name, "console logger initialized");
    Ok(())
}

/// `%H:%M:%S%.3f` local wall-clock time
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Browser console, at the console method matching `level`
fn console_sink(level: Level, line: &str) {
    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        Level::DEBUG => web_sys::console::debug_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

/// Hands out one buffered writer per event
struct ConsoleMakeWriter {
    sink: Sink,
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level(), self.sink)
    }
}

/// Buffers one formatted event and emits it on drop
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
    sink: Sink,
}

impl ConsoleWriter {
    fn new(level: Level, sink: Sink) -> Self {
        Self { level, buf: Vec::new(), sink }
    }

    fn take_line(&mut self) -> Option<String> {
        let bytes = std::mem::take(&mut self.buf);
        let line = String::from_utf8_lossy(&bytes);
        let line = line.trim_end();
        (!line.is_empty()).then(|| line.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            (self.sink)(self.level, &line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

    fn capture_sink(level: Level, line: &str) {
        CAPTURED.lock().unwrap().push((level, line.to_string()));
    }

    fn discard_sink(_level: Level, _line: &str) {}

    #[test]
    fn test_take_line_trims_newline() {
        let mut writer = ConsoleWriter::new(Level::INFO, discard_sink);
        writer.write_all(b"12:00:00.000  INFO listpad: ready\n").unwrap();

        assert_eq!(writer.take_line().as_deref(), Some("12:00:00.000  INFO listpad: ready"));
        // Drained, so drop emits nothing
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_bad_directives_rejected() {
        assert!(matches!(
            init_with_sink("test", "listpad=notalevel", discard_sink),
            Err(LoggerError::Filter(_))
        ));
    }

    #[test]
    fn test_writer_emits_at_event_level_on_drop() {
        let make = ConsoleMakeWriter { sink: capture_sink };
        {
            let mut writer = make.make_writer();
            writer.level = Level::ERROR;
            writer.write_all(b"direct error line\n").unwrap();
        }

        let captured = CAPTURED.lock().unwrap();
        assert!(captured.contains(&(Level::ERROR, "direct error line".to_string())));
    }

    // The only test that installs the global subscriber
    #[test]
    fn test_events_routed_and_second_init_rejected() {
        init_with_sink("Listpad", "info", capture_sink).expect("first init failed");

        tracing::warn!("slot write failed");
        tracing::debug!("filtered out");

        {
            let captured = CAPTURED.lock().unwrap();
            assert!(captured
                .iter()
                .any(|(level, line)| *level == Level::WARN && line.ends_with("slot write failed")));
            assert!(captured
                .iter()
                .any(|(level, line)| *level == Level::INFO && line.contains("console logger initialized")));
            assert!(!captured.iter().any(|(_, line)| line.contains("filtered out")));
        }

        assert!(matches!(
            init_with_sink("Listpad", "info", capture_sink),
            Err(LoggerError::Init(_))
        ));
    }
}
