// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in sysbridge return `error::Result<T>`.  Recoverable
// failures (save-dir fallback, shell launch) are logged and substituted by the
// adapter itself and never reach this type.

/// Every error that sysbridge can produce.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// A Win32 API call returned a failure code.
    #[error("{function} failed (error {code:#010x})")]
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },

    /// The monotonic counter reported a frequency of zero ticks per second.
    /// Every time-difference computation divides by it.
    #[error("monotonic counter frequency is zero")]
    ZeroCounterFrequency,

    /// A standard I/O error (config file read, process spawn, …).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(windows)]
impl PlatformError {
    /// Attach the failing function name to a windows-crate error.
    pub(crate) fn win32(function: &'static str, e: windows::core::Error) -> Self {
        Self::Win32 {
            function,
            code: e.code().0 as u32,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlatformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win32_display_includes_function_and_hex_code() {
        let e = PlatformError::Win32 {
            function: "CreateWaitableTimerW",
            code: 0x8007_0005,
        };
        assert_eq!(e.to_string(), "CreateWaitableTimerW failed (error 0x80070005)");
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error as _;
        let e = PlatformError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(e.source().is_some());
    }

    #[cfg(windows)]
    #[test]
    fn win32_helper_names_the_failing_call() {
        let hresult = windows::core::HRESULT(0x8007_0005_u32 as i32);
        let e = PlatformError::win32("SetWaitableTimer", windows::core::Error::from(hresult));
        assert!(matches!(
            e,
            PlatformError::Win32 { function: "SetWaitableTimer", code: 0x8007_0005 }
        ));
    }
}
