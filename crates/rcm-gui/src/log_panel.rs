//! Shared text buffer behind the form's log panel.
//!
//! A tracing `fmt` layer writes formatted events into the buffer; the form
//! renders its contents every frame.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
pub struct LogPanelBuffer {
    text: Arc<Mutex<String>>,
}

impl LogPanelBuffer {
    pub fn contents(&self) -> String {
        self.text
            .lock()
            .map(|text| text.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut text) = self.text.lock() {
            text.clear();
        }
    }
}

pub struct LogPanelWriter {
    text: Arc<Mutex<String>>,
}

impl Write for LogPanelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut text = self
            .text
            .lock()
            .map_err(|_| io::Error::other("log panel lock poisoned"))?;
        text.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogPanelBuffer {
    type Writer = LogPanelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogPanelWriter {
            text: Arc::clone(&self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_written_lines() {
        let buffer = LogPanelBuffer::default();
        buffer.make_writer().write_all(b"first line\n").unwrap();
        buffer.make_writer().write_all(b"second line\n").unwrap();
        assert_eq!(buffer.contents(), "first line\nsecond line\n");
        buffer.clear();
        assert!(buffer.contents().is_empty());
    }
}
