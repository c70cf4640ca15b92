//! Where `print` and `trace` output goes.
//!
//! - `Stdout`: the `tala` binary
//! - `Buffer`: tests and embedders that want the output as a string
//! - `Silent`: `--quiet`
//!
//! Enum dispatch rather than a trait object: the set of destinations is
//! closed and the call sits on the evaluator's hot path.

use parking_lot::Mutex;

pub enum PrintHandlerImpl {
    Stdout,
    /// Captured lines, each terminated by `\n`.
    Buffer(Mutex<String>),
    Silent,
}

impl PrintHandlerImpl {
    /// Emit one line of program output.
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(line);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Everything captured so far; empty unless this is a buffer.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

/// Print handler shared by every interpreter of one run, across threads.
#[expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedPrintHandler shared across threads"
)]
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

#[expect(clippy::disallowed_types, reason = "Arc required for SharedPrintHandler")]
pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout)
}

#[expect(clippy::disallowed_types, reason = "Arc required for SharedPrintHandler")]
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

#[expect(clippy::disallowed_types, reason = "Arc required for SharedPrintHandler")]
pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}
