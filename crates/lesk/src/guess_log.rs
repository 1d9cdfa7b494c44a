use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Destination for "target word not found in its own sentence" events
pub trait GuessSink: Send + Sync {
    /// Append one line. Implementations must write the line atomically.
    fn append(&self, line: &str) -> io::Result<()>;
}

/// Line recorded when the fallback sense is returned
pub fn guess_line(lemma: &str, tokens: &[String]) -> String {
    format!("word: {lemma} in sentence: {}", tokens.join(" "))
}

/// Appends to a file, opening and closing it for every event
#[derive(Debug, Clone)]
pub struct FileGuessSink {
    path: PathBuf,
}

impl FileGuessSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GuessSink for FileGuessSink {
    fn append(&self, line: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // One write per event so concurrent appends never interleave.
        let mut record = String::with_capacity(line.len() + 1);
        record.push_str(line);
        record.push('\n');
        file.write_all(record.as_bytes())
    }
}

/// Keeps events in memory
#[derive(Debug, Default)]
pub struct MemoryGuessSink {
    lines: Mutex<Vec<String>>,
}

impl MemoryGuessSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded lines
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl GuessSink for MemoryGuessSink {
    fn append(&self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}
