use std::io::Write;

use crate::ports::Logger;

/// [`Logger`] writing info lines to stdout and errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        let _ = match detail {
            Some(detail) => writeln!(stderr, "{} {}", message, detail),
            None => writeln!(stderr, "{}", message),
        };
    }
}
