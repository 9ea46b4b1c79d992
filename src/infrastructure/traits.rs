//! I/O boundary traits for testability
//!
//! These traits abstract the timer and the input source, allowing the
//! session and commands to be tested without sleeping or touching stdin.

use std::io::{self, Read};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Source of replay ticks.
pub trait Ticker: Send + Sync {
    /// Block until the next tick is due.
    fn wait(&self, interval: Duration);
}

/// Ticker backed by `thread::sleep`.
#[derive(Debug, Default)]
pub struct SleepTicker;

impl Ticker for SleepTicker {
    fn wait(&self, interval: Duration) {
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
}

/// Ticker that returns immediately and counts how often it was asked to wait.
#[derive(Debug, Default)]
pub struct CountingTicker {
    waits: AtomicUsize,
}

impl CountingTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> usize {
        self.waits.load(Ordering::SeqCst)
    }
}

impl Ticker for CountingTicker {
    fn wait(&self, _interval: Duration) {
        self.waits.fetch_add(1, Ordering::SeqCst);
    }
}

/// Where raw tree text comes from.
pub trait InputSource: Send + Sync {
    /// Read file contents to string.
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Read all of standard input.
    fn read_stdin(&self) -> io::Result<String>;
}

/// Real filesystem and stdin.
#[derive(Debug, Default)]
pub struct RealInputSource;

impl InputSource for RealInputSource {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read_stdin(&self) -> io::Result<String> {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

/// Fixed stdin content, files served from the real filesystem.
#[derive(Debug, Default)]
pub struct StaticInputSource {
    stdin: Mutex<Option<String>>,
}

impl StaticInputSource {
    pub fn new(stdin: impl Into<String>) -> Self {
        Self {
            stdin: Mutex::new(Some(stdin.into())),
        }
    }
}

impl InputSource for StaticInputSource {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    /// Like a real stream, stdin can be read once.
    fn read_stdin(&self) -> io::Result<String> {
        let mut guard = self
            .stdin
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "stdin lock poisoned"))?;
        Ok(guard.take().unwrap_or_default())
    }
}
