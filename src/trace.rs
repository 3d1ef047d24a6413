// Lifecycle trace recorder.
//
// Every event is printed as it happens and retained in a thread-local log,
// so tests can assert the exact order and count of acquisitions, uses, and
// releases without scraping stdout.

use std::cell::RefCell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Acquire,
    Use,
    Release,
}

impl TraceKind {
    fn label(self) -> &'static str {
        match self {
            TraceKind::Acquire => "Acquire",
            TraceKind::Use => "Use",
            TraceKind::Release => "Release",
        }
    }
}

/// One printed lifecycle event: what happened, to which resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEvent {
    pub kind: TraceKind,
    pub name: String,
    pub marker: u64,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Resource: {} #{}", self.kind.label(), self.name, self.marker)
    }
}

thread_local! {
    static EVENTS: RefCell<Vec<TraceEvent>> = RefCell::new(Vec::new());
}

/// Prints the trace line and appends the event to this thread's log.
pub(crate) fn record(kind: TraceKind, name: &str, marker: u64) {
    let event = TraceEvent {
        kind,
        name: name.to_string(),
        marker,
    };
    println!("{}", event);
    EVENTS.with(|log| log.borrow_mut().push(event));
}

/// Drains and returns every event recorded on this thread so far.
pub fn take_events() -> Vec<TraceEvent> {
    EVENTS.with(|log| log.borrow_mut().split_off(0))
}
