use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

/// Workflow-facing log sink handed to the labeler by its host.
pub trait Logger: Send + Sync {
    /// Emit an informational line into the job log.
    fn info(&self, message: &str);

    /// Report an error and mark the step as failed.
    /// Does not stop execution; the caller decides when to return.
    fn set_failed(&self, message: &str);
}

/// Logger speaking GitHub Actions workflow commands on stdout.
#[derive(Debug, Default)]
pub struct ActionsCore {
    failed: AtomicBool,
}

impl ActionsCore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `set_failed` has been called. The host maps this to exit code 1.
    pub fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl Logger for ActionsCore {
    fn info(&self, message: &str) {
        write_line(message);
    }

    fn set_failed(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        write_line(&error_command(message));
    }
}

fn write_line(line: &str) {
    let mut stdout = std::io::stdout().lock();
    // A closed stdout leaves nowhere to report to.
    let _ = writeln!(stdout, "{}", line);
}

/// Format an `::error::` workflow command.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Escape command data so the runner does not split or misparse it.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
