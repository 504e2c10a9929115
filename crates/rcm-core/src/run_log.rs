//! Per-run log file destination.
//!
//! A `RunLogWriter` is installed once into the tracing subscriber as a
//! `MakeWriter`; its file slot stays empty between runs, so writes are
//! discarded. `attach` opens (truncating) the run's log file and returns a
//! guard; dropping the guard flushes and detaches the file on every exit
//! path, so the subscriber never retains a file across calls.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// Swappable file destination shared with the tracing subscriber.
#[derive(Clone, Default)]
pub struct RunLogWriter {
    slot: Arc<Mutex<Option<File>>>,
}

impl RunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `path` (truncated, UTF-8) and route log writes into it until the
    /// returned guard drops.
    pub fn attach(&self, path: &Path) -> io::Result<RunLogGuard> {
        let file = File::create(path)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| io::Error::other("run log lock poisoned"))?;
        *slot = Some(file);
        Ok(RunLogGuard {
            slot: Arc::clone(&self.slot),
        })
    }
}

/// Detaches the run log file when dropped.
pub struct RunLogGuard {
    slot: Arc<Mutex<Option<File>>>,
}

impl Drop for RunLogGuard {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.slot.lock()
            && let Some(mut file) = slot.take()
        {
            let _ = file.flush();
        }
    }
}

pub struct RunLogHandle {
    slot: Arc<Mutex<Option<File>>>,
}

impl Write for RunLogHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| io::Error::other("run log lock poisoned"))?;
        match slot.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| io::Error::other("run log lock poisoned"))?;
        match slot.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for RunLogWriter {
    type Writer = RunLogHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RunLogHandle {
            slot: Arc::clone(&self.slot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_only_while_attached() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        let writer = RunLogWriter::new();

        writer.make_writer().write_all(b"before\n").unwrap();
        {
            let _guard = writer.attach(&path).unwrap();
            writer.make_writer().write_all(b"during\n").unwrap();
        }
        writer.make_writer().write_all(b"after\n").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "during\n");
    }

    #[test]
    fn reattach_truncates_previous_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        let writer = RunLogWriter::new();

        {
            let _guard = writer.attach(&path).unwrap();
            writer.make_writer().write_all(b"first run\n").unwrap();
        }
        {
            let _guard = writer.attach(&path).unwrap();
            writer.make_writer().write_all(b"second run\n").unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "second run\n");
    }
}
