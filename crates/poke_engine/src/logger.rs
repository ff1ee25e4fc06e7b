//! Logging capability (C12, §4.13/§6): a write-only sink with no
//! back-channel, safe to call from the engine's single thread.
//!
//! Grounded on `milan090-pokemonlegends-backend`'s `tracing`/
//! `tracing-subscriber` pairing (its `Cargo.toml` pulls both for structured
//! server logging); `poke_engine` itself has no injectable logger, so this
//! trait is new, shaped directly by SPEC_FULL §4.13's two-operation
//! interface rather than adapted from teacher code.

pub trait Logger: Send + Sync {
    fn log(&self, line: &str);

    /// Convenience: a leading blank line before the message, §6.
    fn log_blank_then(&self, line: &str) {
        self.log("");
        self.log(line);
    }
}

/// Default sink, emitting through `tracing::info!`.
#[derive(Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, line: &str) {
        tracing::info!("{line}");
    }
}

/// Test-only recording logger: captures every line in call order behind a
/// `Mutex` so single-threaded tests can assert on the exact log-line
/// sequence, which §8 treats as part of the engine's observable contract.
#[derive(Default)]
pub struct RecordingLogger {
    lines: std::sync::Mutex<Vec<String>>,
}

impl Logger for RecordingLogger {
    fn log(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

impl RecordingLogger {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_blank_then_prefixes_an_empty_line() {
        let logger = RecordingLogger::default();
        logger.log_blank_then("hello");
        assert_eq!(logger.lines(), vec!["".to_string(), "hello".to_string()]);
    }

    #[test]
    fn recording_logger_preserves_call_order() {
        let logger = RecordingLogger::default();
        logger.log("one");
        logger.log("two");
        assert_eq!(logger.lines(), vec!["one", "two"]);
    }
}
