pub mod severity;
pub mod time;

pub use severity::LogSeverity;

use std::sync::atomic::{AtomicU8, Ordering};

// Messages below this severity are dropped. Defaults to Info so library
// debug output stays quiet unless explicitly enabled.
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(LogSeverity::Info as u8);

/// Sets the minimum severity that will be printed.
pub fn set_min_severity(severity: LogSeverity) {
    MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
}

/// Returns the current minimum severity.
pub fn min_severity() -> LogSeverity {
    LogSeverity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
}

/// Prints a timestamped log line, unless `severity` is below the minimum.
pub fn log(msg: String, severity: LogSeverity) {
    if severity < min_severity() {
        return;
    }
    println!("[{}] {} {}", severity, time::now(), msg);
}
