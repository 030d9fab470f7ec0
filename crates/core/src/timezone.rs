// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Viewer timezone resolution and field reinterpretation.
//!
//! Timestamps reaching the formatter were already shifted into the viewer's
//! timezone upstream, but they arrive tagged as UTC. Their wall-clock fields
//! are therefore copied into the viewer's zone rather than converted.

use crate::clock::Clock;
use chrono::{
    DateTime, Duration, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::fmt;
use thiserror::Error;

/// Identifier naming the process local timezone.
pub const LOCAL: &str = "Local";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimezoneError {
    #[error("unknown timezone '{identifier}': {reason}")]
    Unknown { identifier: String, reason: String },
}

/// Resolve an IANA identifier. The empty identifier means UTC.
pub fn resolve(identifier: &str) -> Result<Tz, TimezoneError> {
    if identifier.is_empty() {
        return Ok(Tz::UTC);
    }
    identifier
        .parse::<Tz>()
        .map_err(|e| TimezoneError::Unknown {
            identifier: identifier.to_string(),
            reason: e.to_string(),
        })
}

/// The timezone "now" is computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Named(Tz),
    /// Process local timezone, asked for by name.
    Local,
    /// Process local timezone, used when the viewer's zone can't be resolved.
    /// Timestamps keep their instant.
    Fallback,
}

impl Zone {
    /// Resolve `identifier`, degrading to the local timezone on failure.
    pub fn resolve_or_local(identifier: &str) -> Self {
        if identifier == LOCAL {
            return Zone::Local;
        }
        match resolve(identifier) {
            Ok(tz) => Zone::Named(tz),
            Err(e) => {
                tracing::warn!(error = %e, "falling back to local timezone");
                Zone::Fallback
            }
        }
    }

    pub fn now(&self, clock: &impl Clock) -> DateTime<FixedOffset> {
        let now = clock.now();
        match self {
            Zone::Named(tz) => now.with_timezone(tz).fixed_offset(),
            Zone::Local | Zone::Fallback => now.with_timezone(&Local).fixed_offset(),
        }
    }

    /// Copy the timestamp's calendar fields into this zone.
    ///
    /// The instant is not converted: `2024-03-01T09:30:00Z` viewed in
    /// `Europe/Paris` becomes `2024-03-01T09:30:00+01:00`. A timestamp whose
    /// zone could not be resolved ([`Zone::Fallback`]) keeps its instant.
    pub fn reinterpret(&self, timestamp: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::Named(tz) => place_fields(tz, timestamp.naive_utc()),
            Zone::Local => place_fields(&Local, timestamp.naive_utc()),
            Zone::Fallback => timestamp.with_timezone(&Local).fixed_offset(),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Local => f.write_str(LOCAL),
            Zone::Fallback => write!(f, "{} (fallback)", LOCAL),
        }
    }
}

/// Place wall-clock `fields` in `tz`.
///
/// Repeated wall-clock times (DST fold) take the earlier instant. Skipped
/// ones (DST gap) use the offset in force before the transition. Fields
/// whose instant falls outside the representable range clamp to it.
fn place_fields<Z: TimeZone>(tz: &Z, fields: NaiveDateTime) -> DateTime<FixedOffset> {
    match tz.from_local_datetime(&fields) {
        LocalResult::Single(dt) => dt.fixed_offset(),
        LocalResult::Ambiguous(earliest, _) => earliest.fixed_offset(),
        LocalResult::None => {
            let day_before = fields.checked_sub_signed(Duration::days(1)).unwrap_or(fields);
            let before = tz.offset_from_utc_datetime(&day_before).fix();
            let shift = i64::from(before.local_minus_utc());
            match fields.checked_sub_signed(Duration::seconds(shift)) {
                Some(instant) => Utc.from_utc_datetime(&instant).with_timezone(&before),
                None if shift > 0 => DateTime::<Utc>::MIN_UTC.fixed_offset(),
                None => DateTime::<Utc>::MAX_UTC.fixed_offset(),
            }
        }
    }
}

#[cfg(test)]
#[path = "timezone_tests.rs"]
mod tests;
