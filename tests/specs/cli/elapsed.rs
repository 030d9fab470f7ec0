//! Elapsed-time phrase specs
//!
//! "Now" is frozen with --now so every bucket boundary is exact.

use crate::prelude::*;

#[test]
fn no_timestamp_is_not_yet() {
    cli().passes().stdout_eq("not yet\n");
}

#[test]
fn dash_timestamp_is_not_yet() {
    cli().args(&["-"]).passes().stdout_eq("not yet\n");
}

#[test]
fn future_timestamp_is_not_yet() {
    ago(-1).passes().stdout_eq("not yet\n");
}

#[test]
fn epoch_zero_is_years_ago() {
    let now = NOW.to_string();
    cli()
        .args(&["0", "--now", now.as_str()])
        .passes()
        .stdout_eq("55 years ago\n");
}

#[test]
fn bucket_boundaries() {
    let cases = [
        (59, "just now"),
        (MINUTE, "1 minute ago"),
        (2 * MINUTE - 1, "1 minute ago"),
        (2 * MINUTE, "2 minutes ago"),
        (HOUR - 1, "59 minutes ago"),
        (HOUR, "1 hour ago"),
        (2 * HOUR - 1, "1 hour ago"),
        (2 * HOUR, "2 hours ago"),
        (DAY, "yesterday"),
        (6 * DAY, "6 days ago"),
        (7 * DAY, "1 weeks ago"),
        (30 * DAY, "5 weeks ago"),
        (31 * DAY, "2 months ago"),
        (364 * DAY, "13 months ago"),
        (365 * DAY, "1 years ago"),
    ];
    for (secs, expected) in cases {
        ago(secs).passes().stdout_eq(&format!("{}\n", expected));
    }
}

#[test]
fn json_output_reports_key_and_count() {
    let out = ago(3 * DAY).args(&["-o", "json"]).passes().stdout();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"key": "days", "count": 3, "text": "3 days ago"})
    );
}

#[test]
fn template_overrides_phrase() {
    ago(3 * DAY)
        .args(&["--template", "days=il y a %d jours"])
        .passes()
        .stdout_eq("il y a 3 jours\n");
}

#[test]
fn repeated_runs_with_frozen_clock_agree() {
    let first = ago(45 * DAY).passes().stdout();
    let second = ago(45 * DAY).passes().stdout();
    assert_eq!(first, second);
    assert_eq!(first, "2 months ago\n");
}
