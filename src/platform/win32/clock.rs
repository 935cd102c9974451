#![allow(unsafe_code)]

use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::error::{PlatformError, Result};
use crate::time::CounterSource;

/// The Win32 performance counter.
#[derive(Debug, Default, Clone, Copy)]
pub struct PerformanceCounter;

impl CounterSource for PerformanceCounter {
    fn frequency(&self) -> Result<u64> {
        let mut freq = 0i64;
        // SAFETY: `freq` is a live, writable i64 for the duration of the call.
        unsafe { QueryPerformanceFrequency(&mut freq) }
            .map_err(|e| PlatformError::win32("QueryPerformanceFrequency", e))?;
        // A negative reading is as useless as zero.
        Ok(u64::try_from(freq).unwrap_or(0))
    }

    fn read(&self) -> i64 {
        let mut value = 0i64;
        // SAFETY: `value` is a live, writable i64.  QueryPerformanceCounter
        // cannot fail on Windows XP and later, so the result is ignored.
        let _ = unsafe { QueryPerformanceCounter(&mut value) };
        value
    }
}

pub fn counter() -> Box<dyn CounterSource> {
    Box::new(PerformanceCounter)
}
