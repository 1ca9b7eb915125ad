use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use file_mover::config::LogLevel;
use file_mover::logging::{build_subscriber, open_log_file_append};
use tempfile::tempdir;
use tracing::{debug, error, info};

/// Appends everything written into a shared Vec<u8>.
#[derive(Clone, Default)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl BufferWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn make_writer(buf: &BufferWriter) -> impl Fn() -> BufferWriter + Send + Sync + 'static {
    let buf = buf.clone();
    move || buf.clone()
}

#[test]
fn normal_level_hides_debug_events() {
    let buf = BufferWriter::default();
    let subscriber = build_subscriber(&LogLevel::Normal, false, make_writer(&buf), None);

    tracing::subscriber::with_default(subscriber, || {
        info!("visible line");
        debug!("hidden line");
    });

    let contents = buf.contents();
    assert!(contents.contains("visible line"), "contents={contents}");
    assert!(!contents.contains("hidden line"), "contents={contents}");
}

#[test]
fn quiet_level_keeps_only_errors() {
    let buf = BufferWriter::default();
    let subscriber = build_subscriber(&LogLevel::Quiet, false, make_writer(&buf), None);

    tracing::subscriber::with_default(subscriber, || {
        info!("chatter");
        error!(src = "/in/a", dest = "/out/a", "file move failed!");
    });

    let contents = buf.contents();
    assert!(!contents.contains("chatter"));
    assert!(contents.contains("file move failed!"));
    assert!(contents.contains("/in/a"));
}

#[test]
fn json_output_is_one_object_per_line() {
    let buf = BufferWriter::default();
    let subscriber = build_subscriber(&LogLevel::Normal, true, make_writer(&buf), None);

    tracing::subscriber::with_default(subscriber, || {
        info!(received = 3u64, moved = 2u64, "mover finished.");
    });

    let contents = buf.contents();
    let line = contents.lines().next().expect("one log line");
    let value: serde_json::Value = serde_json::from_str(line).expect("valid json");
    assert_eq!(value["fields"]["message"], "mover finished.");
    assert_eq!(value["fields"]["moved"], 2);
    assert_eq!(value["level"], "INFO");
}

#[test]
fn file_layer_receives_the_same_events() {
    let td = tempdir().expect("tempdir");
    let log_path = td.path().join("logs").join("file_mover.log");
    let file = open_log_file_append(&log_path).expect("open log file");
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let buf = BufferWriter::default();
    let subscriber = build_subscriber(&LogLevel::Normal, false, make_writer(&buf), Some(file_writer));

    tracing::subscriber::with_default(subscriber, || {
        info!("written to both sinks");
    });
    // Dropping the guard flushes the background writer.
    drop(guard);

    let on_disk = std::fs::read_to_string(&log_path).expect("read log");
    assert!(on_disk.contains("written to both sinks"), "file={on_disk}");
    assert!(buf.contents().contains("written to both sinks"));
}
