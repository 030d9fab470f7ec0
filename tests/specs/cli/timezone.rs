//! Viewer timezone specs
//!
//! Timestamps carry wall-clock fields already in the viewer's zone.

use crate::prelude::*;

#[test]
fn fields_are_read_in_viewer_zone() {
    // NOW is 11:00 in Paris; the fields say 10:55.
    ago(-55 * MINUTE)
        .args(&["--tz", "Europe/Paris"])
        .passes()
        .stdout_eq("5 minutes ago\n");
}

#[test]
fn same_fields_in_utc_are_in_the_future() {
    ago(-55 * MINUTE)
        .args(&["--tz", "UTC"])
        .passes()
        .stdout_eq("not yet\n");
}

#[test]
fn timezone_from_environment() {
    ago(-55 * MINUTE)
        .env("AGO_TZ", "Europe/Paris")
        .passes()
        .stdout_eq("5 minutes ago\n");
}

#[test]
fn flag_overrides_environment() {
    ago(-55 * MINUTE)
        .env("AGO_TZ", "Europe/Paris")
        .args(&["--tz", "UTC"])
        .passes()
        .stdout_eq("not yet\n");
}

#[test]
fn unknown_zone_falls_back_with_warning() {
    ago(3 * HOUR)
        .args(&["--tz", "Not/AZone"])
        .passes()
        .stdout_eq("3 hours ago\n")
        .stderr_has("falling back to local timezone")
        .stderr_has("Not/AZone");
}

#[test]
fn unknown_zone_warning_can_be_silenced() {
    ago(3 * HOUR)
        .args(&["--tz", "Not/AZone"])
        .env("AGO_LOG", "error")
        .passes()
        .stdout_eq("3 hours ago\n")
        .stderr_empty();
}

#[test]
fn unset_timestamp_ignores_bad_zone() {
    cli()
        .args(&["-", "--tz", "Not/AZone"])
        .passes()
        .stdout_eq("not yet\n")
        .stderr_empty();
}

#[test]
fn max_epoch_in_negative_offset_zone_is_not_yet() {
    let now = NOW.to_string();
    cli()
        .args(&["8210266876799", "--tz", "America/New_York", "--now", now.as_str()])
        .passes()
        .stdout_eq("not yet\n");
}

#[test]
fn debug_log_names_the_viewer_zone() {
    ago(HOUR)
        .args(&["--tz", "Europe/Paris"])
        .env("AGO_LOG", "debug")
        .passes()
        .stderr_has("formatting elapsed time")
        .stderr_has("Europe/Paris");
}
