// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is the only module tree in the crate where `unsafe` code is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

use std::path::PathBuf;

use windows::Win32::Foundation::GetLastError;

use crate::env::{EnvSource, EnvVar};
use crate::error::PlatformError;

// ── Sub-modules ───────────────────────────────────────────────────────────────

mod clock; // QueryPerformanceCounter
mod dialogs; // MessageBoxW
mod shell; // explorer / rundll32 command lines
mod timer; // waitable-timer sleep

pub use clock::{counter, PerformanceCounter};
pub use dialogs::{dialog_presenter, MessageBoxPresenter};
pub use shell::{open_path_command, open_website_command};
pub use timer::sleep_micros;

// ── Save directory ────────────────────────────────────────────────────────────

/// `%USERPROFILE%\<app_dir_name>`, or `None` when the profile is unknown.
pub fn profile_save_dir(env: &dyn EnvSource, app_dir_name: &str) -> Option<PathBuf> {
    let profile = EnvVar::from_native(env.var("USERPROFILE")).into_string();
    if profile.is_empty() {
        return None;
    }
    Some(PathBuf::from(format!("{profile}\\{app_dir_name}")))
}

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code and wrap it in a `PlatformError`.
///
/// Call immediately after a Win32 function that signals failure; `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
pub(crate) fn last_error(function: &'static str) -> PlatformError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    PlatformError::Win32 {
        function,
        code: code.0,
    }
}
