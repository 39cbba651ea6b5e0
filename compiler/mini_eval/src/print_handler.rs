//! Print handler for configurable output.
//!
//! `print` output goes to one of two destinations:
//! - `Stdout`: streamed directly (the CLI `run` path)
//! - `Buffer`: captured for return to the caller (the `analyze` path
//!   and tests)
//!
//! Enum dispatch rather than a trait object; the destination set is
//! closed.

use parking_lot::Mutex;

/// Print handler that captures output to a buffer.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Append a line (with newline).
    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Get all captured output.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }
}

/// Output destination for `print` statements.
pub enum PrintHandler {
    /// Writes to stdout.
    Stdout,
    /// Captures to a buffer.
    Buffer(BufferPrintHandler),
}

impl PrintHandler {
    /// Create a capturing handler.
    pub fn buffer() -> Self {
        PrintHandler::Buffer(BufferPrintHandler::new())
    }

    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(h) => h.println(msg),
        }
    }

    /// Get captured output. Empty for `Stdout`, which doesn't capture.
    pub fn output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(h) => h.output(),
        }
    }
}
