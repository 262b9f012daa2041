use std::sync::Mutex;

use crate::ports::Logger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Info(String),
    Error(String, Option<String>),
}

#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<LogEntry> {
        self.entries().into_iter().filter(|e| matches!(e, LogEntry::Error(..))).collect()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.entries.lock().unwrap().push(LogEntry::Info(message.to_string()));
    }

    fn error(&self, message: &str, detail: Option<&str>) {
        self.entries
            .lock()
            .unwrap()
            .push(LogEntry::Error(message.to_string(), detail.map(str::to_string)));
    }
}
