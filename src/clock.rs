//! Millisecond timestamps from the free-running system counter.
//!
//! The counter is 32 bits wide and wraps after ~49.7 days of uptime.
//! Every ordering comparison in the firmware goes through the helpers
//! here, which compare the signed difference of a wrapping subtraction.
//! Two timestamps compare correctly as long as they are less than
//! `i32::MAX` ms (~24.8 days) apart.

/// Milliseconds since boot, wrapping at `u32::MAX`.
pub type Millis = u32;

/// Largest span (ms) over which two timestamps still order correctly.
pub const MAX_COMPARABLE_SPAN_MS: Millis = i32::MAX as Millis;

/// `true` if `a` is strictly later than `b`.
#[inline]
pub const fn is_after(a: Millis, b: Millis) -> bool {
    (a.wrapping_sub(b) as i32) > 0
}

/// `true` if `a` is earlier than or equal to `b`.
#[inline]
pub const fn is_at_or_before(a: Millis, b: Millis) -> bool {
    !is_after(a, b)
}

/// `now + span`, wrapping.
#[inline]
pub const fn deadline(now: Millis, span: Millis) -> Millis {
    now.wrapping_add(span)
}
