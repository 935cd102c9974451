#![allow(unsafe_code)]

use windows::{
    core::PCWSTR,
    Win32::{
        Foundation::{CloseHandle, BOOL, HANDLE, WAIT_OBJECT_0},
        System::Threading::{
            CreateWaitableTimerW, SetWaitableTimer, WaitForSingleObject, INFINITE,
        },
    },
};

use crate::error::{PlatformError, Result};

/// Owned waitable-timer handle, closed on drop.
struct TimerHandle(HANDLE);

impl Drop for TimerHandle {
    fn drop(&mut self) {
        // SAFETY: the handle came from CreateWaitableTimerW and is closed
        // exactly once, here.
        if let Err(e) = unsafe { CloseHandle(self.0) } {
            log::warn!("CloseHandle on waitable timer failed: {e}");
        }
    }
}

/// Due time in 100 ns units; negative means relative to now.
fn relative_due_time(usec: u64) -> i64 {
    let hundred_ns = i64::try_from(usec).unwrap_or(i64::MAX).saturating_mul(10);
    -hundred_ns
}

/// Block the calling thread for about `usec` microseconds on a manual-reset
/// waitable timer.
pub fn sleep_micros(usec: u64) -> Result<()> {
    let due = relative_due_time(usec);

    // SAFETY: null security attributes and null name are both documented as
    // valid; the returned handle is owned by the guard below.
    let timer = unsafe { CreateWaitableTimerW(None, BOOL::from(true), PCWSTR::null()) }
        .map_err(|e| PlatformError::win32("CreateWaitableTimerW", e))?;
    let timer = TimerHandle(timer);

    // SAFETY: `timer.0` is a live timer handle; `due` outlives the call; no
    // completion routine is registered.
    unsafe { SetWaitableTimer(timer.0, &due, 0, None, None, BOOL::from(false)) }
        .map_err(|e| PlatformError::win32("SetWaitableTimer", e))?;

    // SAFETY: `timer.0` stays valid until the guard drops after this call.
    let waited = unsafe { WaitForSingleObject(timer.0, INFINITE) };
    if waited != WAIT_OBJECT_0 {
        return Err(super::last_error("WaitForSingleObject"));
    }
    Ok(())
}
