// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use ago_core::{Elapsed, TranslationKey, Translator};
use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Report {
    key: TranslationKey,
    count: Option<u64>,
    text: String,
}

/// Render an elapsed-time result in the requested format.
pub fn render<T: Translator + ?Sized>(
    elapsed: Elapsed,
    translator: &T,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let text = elapsed.translate(translator);
    match format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => {
            let report = Report {
                key: elapsed.key(),
                count: elapsed.count(),
                text,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
