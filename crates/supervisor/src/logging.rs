// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging (SPEC_FULL.md §4.10): a structured `tracing` stack configured
//! with a custom formatter that renders every event in the exact
//! `<program> <LEVEL>:  <tokens joined by single spaces>\n` format the
//! host's log tailing tooling expects. `DEBUG` events are filtered out
//! unless debug mode is active; `INFO`/`ERROR`/`FATAL` always print.
//!
//! `FATAL` is not a real tracing level — the underlying crate has none —
//! so it is modeled as an `ERROR`-severity event carrying a `fatal = true`
//! field, which this formatter checks for and renders as `FATAL` instead.

use std::fmt;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::Event;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Emit a `FATAL`-rendered log line. The message still reaches the
/// subscriber at `ERROR` severity; only the rendered level differs.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        tracing::error!(fatal = true, $($arg)*)
    };
}

/// Install the global `tracing` subscriber for the rest of the process's
/// lifetime. `debug` controls whether `DEBUG`-level events pass the
/// filter; `program` is the prefix every rendered line carries.
pub fn init(program: &str, debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .event_format(LineFormatter::new(program))
        .with_writer(std::io::stderr)
        .init();
}

/// Renders events as `<program> <LEVEL>:  <tokens>`.
pub struct LineFormatter {
    program: String,
}

impl LineFormatter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn render(&self, fields: &EventFields, level: &tracing::Level) -> String {
        let rendered_level = if fields.fatal {
            "FATAL"
        } else {
            match *level {
                tracing::Level::ERROR | tracing::Level::WARN => "ERROR",
                tracing::Level::INFO => "INFO",
                tracing::Level::DEBUG | tracing::Level::TRACE => "DEBUG",
            }
        };

        let mut tokens: Vec<String> = Vec::new();
        if let Some(message) = &fields.message {
            tokens.push(message.clone());
        }
        for (key, value) in &fields.extra {
            tokens.push(format!("{key}={value}"));
        }

        format!("{} {}:  {}", self.program, rendered_level, tokens.join(" "))
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = EventFields::default();
        event.record(&mut fields);
        writeln!(writer, "{}", self.render(&fields, event.metadata().level()))
    }
}

#[derive(Default)]
struct EventFields {
    message: Option<String>,
    fatal: bool,
    extra: Vec<(String, String)>,
}

impl Visit for EventFields {
    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "fatal" {
            self.fatal = value;
        } else {
            self.extra.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.extra.push((field.name().to_string(), value.to_string()));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.extra.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.extra.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.extra.push((field.name().to_string(), format!("{value:?}")));
        }
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
