// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable elapsed time since a timestamp ("just now", "3 days ago").

use crate::clock::{Clock, SystemClock};
use crate::message::{Elapsed, Translator};
use crate::timezone::Zone;
use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

impl Elapsed {
    /// Bucket a non-negative difference in whole seconds.
    ///
    /// Minute and hour counts truncate; week, month and year counts round up.
    /// Negative input is treated as a timestamp in the future.
    pub fn from_seconds(s: i64) -> Self {
        if s < 0 {
            return Elapsed::NotYet;
        }
        let d = s / DAY;
        if s < MINUTE {
            Elapsed::JustNow
        } else if s < 2 * MINUTE {
            Elapsed::LastMinute
        } else if s < HOUR {
            Elapsed::Minutes((s / MINUTE) as u64)
        } else if s < 2 * HOUR {
            Elapsed::LastHour
        } else if s < DAY {
            Elapsed::Hours((s / HOUR) as u64)
        } else if d == 1 {
            Elapsed::Yesterday
        } else if d < 7 {
            Elapsed::Days(d as u64)
        } else if d < 31 {
            Elapsed::Weeks(ceil_div(d, 7))
        } else if d < 365 {
            Elapsed::Months(ceil_div(d, 30))
        } else {
            Elapsed::Years(ceil_div(d, 365))
        }
    }
}

fn ceil_div(n: i64, by: i64) -> u64 {
    ((n + by - 1) / by) as u64
}

/// Describes how long ago a timestamp occurred, relative to a clock.
#[derive(Debug, Clone, Default)]
pub struct ElapsedTimeFormatter<C: Clock = SystemClock> {
    clock: C,
}

impl ElapsedTimeFormatter<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> ElapsedTimeFormatter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The clock "now" is read from.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Pick the bucket for `timestamp` as seen by a viewer in `timezone`.
    ///
    /// `None` means the event hasn't happened yet. An unresolvable timezone
    /// falls back to the local one; it never fails the call.
    pub fn classify(&self, timezone: &str, timestamp: Option<DateTime<Utc>>) -> Elapsed {
        let Some(timestamp) = timestamp else {
            return Elapsed::NotYet;
        };

        let zone = Zone::resolve_or_local(timezone);
        let now = zone.now(&self.clock);
        let then = zone.reinterpret(timestamp);

        if now < then {
            tracing::debug!(%zone, %now, %then, "timestamp is in the future");
            return Elapsed::NotYet;
        }

        let seconds = (now - then).num_seconds();
        let elapsed = Elapsed::from_seconds(seconds);
        tracing::debug!(%zone, seconds, ?elapsed, "bucketed elapsed time");
        elapsed
    }

    /// Render the elapsed time through `translator`.
    pub fn format<T: Translator + ?Sized>(
        &self,
        translator: &T,
        timezone: &str,
        timestamp: Option<DateTime<Utc>>,
    ) -> String {
        self.classify(timezone, timestamp).translate(translator)
    }
}

/// Elapsed time since `timestamp` against the system clock.
pub fn elapsed_time<T: Translator + ?Sized>(
    translator: &T,
    timezone: &str,
    timestamp: Option<DateTime<Utc>>,
) -> String {
    ElapsedTimeFormatter::new().format(translator, timezone, timestamp)
}

#[cfg(test)]
#[path = "elapsed_tests.rs"]
mod tests;
