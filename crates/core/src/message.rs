// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phrase keys and the translation capability.
//!
//! The formatter never builds display text itself. It picks one of a fixed
//! set of [`TranslationKey`]s (plus a count for the keys that take one) and
//! hands them to a [`Translator`] supplied by the caller.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Placeholder replaced by the count in a phrase template.
pub const COUNT_PLACEHOLDER: &str = "%d";

/// One of the phrase templates the formatter can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationKey {
    NotYet,
    JustNow,
    LastMinute,
    Minutes,
    LastHour,
    Hours,
    Yesterday,
    Days,
    Weeks,
    Months,
    Years,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 11] = [
        TranslationKey::NotYet,
        TranslationKey::JustNow,
        TranslationKey::LastMinute,
        TranslationKey::Minutes,
        TranslationKey::LastHour,
        TranslationKey::Hours,
        TranslationKey::Yesterday,
        TranslationKey::Days,
        TranslationKey::Weeks,
        TranslationKey::Months,
        TranslationKey::Years,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationKey::NotYet => "not_yet",
            TranslationKey::JustNow => "just_now",
            TranslationKey::LastMinute => "last_minute",
            TranslationKey::Minutes => "minutes",
            TranslationKey::LastHour => "last_hour",
            TranslationKey::Hours => "hours",
            TranslationKey::Yesterday => "yesterday",
            TranslationKey::Days => "days",
            TranslationKey::Weeks => "weeks",
            TranslationKey::Months => "months",
            TranslationKey::Years => "years",
        }
    }

    /// Whether the phrase is parameterized by a count.
    pub fn takes_count(&self) -> bool {
        matches!(
            self,
            TranslationKey::Minutes
                | TranslationKey::Hours
                | TranslationKey::Days
                | TranslationKey::Weeks
                | TranslationKey::Months
                | TranslationKey::Years
        )
    }

    /// Built-in English template for this key.
    pub fn default_template(&self) -> &'static str {
        match self {
            TranslationKey::NotYet => "not yet",
            TranslationKey::JustNow => "just now",
            TranslationKey::LastMinute => "1 minute ago",
            TranslationKey::Minutes => "%d minutes ago",
            TranslationKey::LastHour => "1 hour ago",
            TranslationKey::Hours => "%d hours ago",
            TranslationKey::Yesterday => "yesterday",
            TranslationKey::Days => "%d days ago",
            TranslationKey::Weeks => "%d weeks ago",
            TranslationKey::Months => "%d months ago",
            TranslationKey::Years => "%d years ago",
        }
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown translation key '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for TranslationKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TranslationKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

/// Result of bucketing an elapsed duration: a key together with its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "count", rename_all = "snake_case")]
pub enum Elapsed {
    NotYet,
    JustNow,
    LastMinute,
    Minutes(u64),
    LastHour,
    Hours(u64),
    Yesterday,
    Days(u64),
    Weeks(u64),
    Months(u64),
    Years(u64),
}

impl Elapsed {
    pub fn key(&self) -> TranslationKey {
        match self {
            Elapsed::NotYet => TranslationKey::NotYet,
            Elapsed::JustNow => TranslationKey::JustNow,
            Elapsed::LastMinute => TranslationKey::LastMinute,
            Elapsed::Minutes(_) => TranslationKey::Minutes,
            Elapsed::LastHour => TranslationKey::LastHour,
            Elapsed::Hours(_) => TranslationKey::Hours,
            Elapsed::Yesterday => TranslationKey::Yesterday,
            Elapsed::Days(_) => TranslationKey::Days,
            Elapsed::Weeks(_) => TranslationKey::Weeks,
            Elapsed::Months(_) => TranslationKey::Months,
            Elapsed::Years(_) => TranslationKey::Years,
        }
    }

    pub fn count(&self) -> Option<u64> {
        match *self {
            Elapsed::Minutes(n)
            | Elapsed::Hours(n)
            | Elapsed::Days(n)
            | Elapsed::Weeks(n)
            | Elapsed::Months(n)
            | Elapsed::Years(n) => Some(n),
            _ => None,
        }
    }

    /// Render through a translator.
    pub fn translate<T: Translator + ?Sized>(&self, translator: &T) -> String {
        translator.translate(self.key(), self.count())
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.translate(&English))
    }
}

/// Maps a phrase key (and its count, for keys that take one) to display text.
///
/// Implementations are expected to be total: every key yields a string.
pub trait Translator {
    fn translate(&self, key: TranslationKey, count: Option<u64>) -> String;
}

impl<F> Translator for F
where
    F: Fn(TranslationKey, Option<u64>) -> String,
{
    fn translate(&self, key: TranslationKey, count: Option<u64>) -> String {
        self(key, count)
    }
}

/// Substitute `count` into every `%d` of `template`.
///
/// Templates without a placeholder are returned as-is, as is any template
/// when no count is given.
pub fn fill_template(template: &str, count: Option<u64>) -> String {
    match count {
        Some(n) => template.replace(COUNT_PLACEHOLDER, &n.to_string()),
        None => template.to_string(),
    }
}

/// The built-in English phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Translator for English {
    fn translate(&self, key: TranslationKey, count: Option<u64>) -> String {
        fill_template(key.default_template(), count)
    }
}

/// Caller-supplied phrase templates, keyed by [`TranslationKey`].
///
/// Keys without a template fall back to [`English`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Templates {
    templates: HashMap<TranslationKey, String>,
}

impl Templates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template for `key`, returning the updated table.
    pub fn with(mut self, key: TranslationKey, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    pub fn insert(&mut self, key: TranslationKey, template: impl Into<String>) {
        self.templates.insert(key, template.into());
    }

    pub fn get(&self, key: TranslationKey) -> Option<&str> {
        self.templates.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Translator for Templates {
    fn translate(&self, key: TranslationKey, count: Option<u64>) -> String {
        match self.get(key) {
            Some(template) => fill_template(template, count),
            None => English.translate(key, count),
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
