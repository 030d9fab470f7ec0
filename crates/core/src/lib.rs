// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ago-core: relative "time ago" phrases for timestamps

pub mod clock;
pub mod elapsed;
pub mod message;
pub mod timezone;

pub use clock::{Clock, FakeClock, SystemClock};
pub use elapsed::{elapsed_time, ElapsedTimeFormatter};
pub use message::{
    fill_template, Elapsed, English, Templates, TranslationKey, Translator, UnknownKey,
};
pub use timezone::{resolve, TimezoneError, Zone};
