/// Warning sink for best-effort operations. Callers that have nowhere to
/// send warnings pass `NullLogger` instead of special-casing "no logger".
pub trait Logger {
    fn warn(&self, message: &str);
}

/// Reports to stderr, leaving stdout for the command echo and tool output.
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn warn(&self, message: &str) {
        eprintln!("warning: {message}");
    }
}

pub struct NullLogger;

impl Logger for NullLogger {
    fn warn(&self, _message: &str) {}
}
