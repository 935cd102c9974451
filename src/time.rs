// ── Monotonic timing ──────────────────────────────────────────────────────────
//
// Time stamps are raw counter readings.  The counter frequency is sampled once
// into a `Clock`, which the adapter owns; all tick math goes through it.

use std::num::NonZeroU64;

use crate::error::{PlatformError, Result};

/// An opaque reading of the monotonic counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeStamp {
    counter: i64,
}

impl TimeStamp {
    pub const fn from_ticks(counter: i64) -> Self {
        Self { counter }
    }

    pub const fn ticks(self) -> i64 {
        self.counter
    }
}

/// Ticks per second of the monotonic counter.  Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFrequency(NonZeroU64);

impl CounterFrequency {
    /// Validate a raw frequency reading.
    pub fn new(ticks_per_second: u64) -> Result<Self> {
        NonZeroU64::new(ticks_per_second)
            .map(Self)
            .ok_or(PlatformError::ZeroCounterFrequency)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// Unit for `Clock::diff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    fn per_second(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Milliseconds => 1e3,
            Self::Microseconds => 1e6,
            Self::Nanoseconds => 1e9,
        }
    }
}

/// A native monotonic counter.
pub trait CounterSource: Send + Sync {
    /// Ticks per second, as reported by the OS.  May be zero on broken
    /// hardware; `Clock::calibrate` rejects that.
    fn frequency(&self) -> Result<u64>;

    /// Current counter value.
    fn read(&self) -> i64;
}

/// Counter sampling plus the calibration needed to turn ticks into time.
pub struct Clock {
    source: Box<dyn CounterSource>,
    frequency: CounterFrequency,
}

impl Clock {
    /// Query the counter frequency once and keep it for the clock's lifetime.
    pub fn calibrate(source: Box<dyn CounterSource>) -> Result<Self> {
        let frequency = CounterFrequency::new(source.frequency()?)?;
        log::debug!("monotonic counter runs at {} ticks/s", frequency.get());
        Ok(Self { source, frequency })
    }

    pub fn frequency(&self) -> CounterFrequency {
        self.frequency
    }

    /// Sample the counter.
    pub fn now(&self) -> TimeStamp {
        TimeStamp::from_ticks(self.source.read())
    }

    /// `a + (b - a) * fraction`, truncated to whole ticks.  `fraction` is not
    /// clamped, so values outside `[0, 1]` extrapolate; results saturate at
    /// the `i64` range.
    ///
    /// The product is exact for any span, so `0.0` and `1.0` return `a` and
    /// `b` bit for bit.
    pub fn interpolate(a: TimeStamp, b: TimeStamp, fraction: f64) -> TimeStamp {
        let span = i128::from(b.counter) - i128::from(a.counter);
        let ticks = i128::from(a.counter).saturating_add(scale_ticks(span, fraction));
        let ticks = ticks.clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        TimeStamp::from_ticks(ticks as i64)
    }

    /// Nanoseconds from `before` to `after`.  Negative when `after` is the
    /// earlier stamp.
    pub fn exact_diff(&self, before: TimeStamp, after: TimeStamp) -> i64 {
        let ticks = after.counter.wrapping_sub(before.counter) as f64;
        (ticks * (1e9 / self.frequency.get() as f64)) as i64
    }

    /// Difference from `before` to `after` in the requested unit.
    pub fn diff(&self, before: TimeStamp, after: TimeStamp, unit: TimeUnit) -> f64 {
        let ticks = after.counter.wrapping_sub(before.counter) as f64;
        ticks * unit.per_second() / self.frequency.get() as f64
    }
}

/// `span * fraction` truncated toward zero, without rounding `span` to `f64`.
///
/// A finite `f64` is exactly `mantissa * 2^exp`; `|span| < 2^65` and
/// `mantissa < 2^53`, so their product fits in an `i128`.
fn scale_ticks(span: i128, fraction: f64) -> i128 {
    if span == 0 || fraction == 0.0 {
        return 0;
    }
    if !fraction.is_finite() {
        // NaN casts to 0, infinities saturate.
        return (span as f64 * fraction) as i128;
    }

    let bits = fraction.to_bits();
    let biased_exp = ((bits >> 52) & 0x7ff) as i32;
    let fraction_bits = (bits & ((1 << 52) - 1)) as i128;
    let (mantissa, exp) = if biased_exp == 0 {
        (fraction_bits, -1074) // subnormal
    } else {
        (fraction_bits | (1 << 52), biased_exp - 1075)
    };
    let product = if bits >> 63 == 1 {
        -(span * mantissa)
    } else {
        span * mantissa
    };

    if exp >= 0 {
        // |fraction| >= 2^52: far outside any real extrapolation.
        return (span as f64 * fraction) as i128;
    }
    let shift = -exp;
    if shift >= 127 {
        0
    } else {
        // Integer division truncates toward zero, like the float cast.
        product / (1_i128 << shift)
    }
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock").field("frequency", &self.frequency).finish()
    }
}
