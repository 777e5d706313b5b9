use crate::domain::logging::{LogEntry, LogLevel, Logger};

/// Console (stderr) logger implementation for native hosts
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_entry(entry: &LogEntry) -> String {
        format!("[{:06}] {} {} | {}", entry.sequence, entry.level, entry.component, entry.message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.min_level {
            eprintln!("{}", Self::format_entry(&entry));
        }
    }
}

/// Collecting logger for tests: captures entries instead of printing them
#[derive(Default)]
pub struct MemoryLogger {
    entries: std::sync::Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().expect("logger mutex poisoned").clone()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, entry: LogEntry) {
        self.entries.lock().expect("logger mutex poisoned").push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogComponent;

    #[test]
    fn memory_logger_captures_entries_in_order() {
        let logger = MemoryLogger::new();
        logger.warn(LogComponent::Domain("Test"), "first");
        logger.error(LogComponent::Domain("Test"), "second");
        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, LogLevel::Error);
        assert!(entries[0].sequence < entries[1].sequence);
    }

    #[test]
    fn entry_format_carries_level_and_component() {
        let entry = LogEntry::new(LogLevel::Warn, LogComponent::Infrastructure("Pane"), "msg");
        let line = ConsoleLogger::format_entry(&entry);
        assert!(line.contains("WARN"));
        assert!(line.contains("INF:Pane"));
        assert!(line.ends_with("| msg"));
    }
}
