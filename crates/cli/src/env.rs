// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

/// Viewer timezone when `--tz` isn't given.
pub fn timezone() -> Option<String> {
    std::env::var("AGO_TZ").ok().filter(|s| !s.is_empty())
}

/// Log filter directives (`tracing_subscriber::EnvFilter` syntax).
pub fn log_filter() -> Option<String> {
    std::env::var("AGO_LOG").ok().filter(|s| !s.is_empty())
}
