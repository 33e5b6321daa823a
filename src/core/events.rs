//! # Diagnostic Events
//!
//! Every successful mutation produces one `TodoEvent`, handed to an
//! `EventSink`. The list never talks to a logger directly, so tests can swap
//! in a sink that just collects events.

use std::fmt;

use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoEvent {
    Added {
        description: String,
    },
    Updated {
        number: i64,
        old: String,
        new: String,
    },
    Deleted {
        number: i64,
        description: String,
    },
    Completed {
        number: i64,
    },
}

impl TodoEvent {
    /// Short operation name, for structured log targets.
    pub fn operation(&self) -> &'static str {
        match self {
            TodoEvent::Added { .. } => "add",
            TodoEvent::Updated { .. } => "update",
            TodoEvent::Deleted { .. } => "delete",
            TodoEvent::Completed { .. } => "complete",
        }
    }
}

impl fmt::Display for TodoEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoEvent::Added { description } => write!(f, "Todo added: {description}"),
            TodoEvent::Updated { number, old, new } => {
                write!(f, "Todo {number} updated: {old} -> {new}")
            }
            TodoEvent::Deleted {
                number,
                description,
            } => write!(f, "Todo {number} deleted: {description}"),
            TodoEvent::Completed { number } => write!(f, "Todo {number} marked complete"),
        }
    }
}

/// Receives diagnostic events. Must not fail, and the list does not care
/// what happens to the event.
pub trait EventSink {
    fn record(&self, event: &TodoEvent);
}

/// Forwards events to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &TodoEvent) {
        info!(target: "todos::events", "[{}] {}", event.operation(), event);
    }
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &TodoEvent) {}
}
