//! Domain event stream shared by the pages.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Oldest events are dropped past this many.
pub const MAX_EVENTS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventLevel {
    Info,
    Warning,
    Critical,
}

impl EventLevel {
    pub const ALL: [Self; 3] = [Self::Info, Self::Warning, Self::Critical];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }

    pub const fn is_alert(self) -> bool {
        !matches!(self, Self::Info)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub id: u64,
    pub level: EventLevel,
    pub source: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl DomainEvent {
    /// New event stamped now. The id is assigned when it is recorded.
    pub fn new(level: EventLevel, source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            source: source.into(),
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Bounded, ordered event history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    entries: VecDeque<DomainEvent>,
    next_id: u64,
}

impl EventLog {
    /// Appends `event` with a fresh id and returns that id.
    pub fn push(&mut self, mut event: DomainEvent) -> u64 {
        self.next_id += 1;
        event.id = self.next_id;
        self.entries.push_back(event);

        while self.entries.len() > MAX_EVENTS {
            self.entries.pop_front();
        }
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest first.
    pub fn newest(&self) -> impl Iterator<Item = &DomainEvent> {
        self.entries.iter().rev()
    }

    pub fn count(&self, level: EventLevel) -> usize {
        self.entries.iter().filter(|e| e.level == level).count()
    }

    pub fn count_by_source(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for event in &self.entries {
            *counts.entry(event.source.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Domain-event scope.
#[derive(Clone, Copy)]
pub struct EventFeed {
    pub log: Signal<EventLog>,
}

impl EventFeed {
    pub fn record(&mut self, event: DomainEvent) -> u64 {
        self.log.write().push(event)
    }

    /// Newest-first copy, optionally filtered.
    pub fn snapshot(&self, filter: impl Fn(&DomainEvent) -> bool) -> Vec<DomainEvent> {
        self.log.read().newest().filter(|e| filter(e)).cloned().collect()
    }

    pub fn count(&self, level: EventLevel) -> usize {
        self.log.read().count(level)
    }

    pub fn clear(&mut self) {
        self.log.write().clear();
    }
}

/// Provides [`EventFeed`] to everything below it.
#[component]
pub fn EventScope(children: Element) -> Element {
    use_context_provider(|| EventFeed {
        log: Signal::new(EventLog::default()),
    });
    children
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_and_newest_comes_first() {
        let mut log = EventLog::default();
        let first = log.push(DomainEvent::new(EventLevel::Info, "api", "deploy started"));
        let second = log.push(DomainEvent::new(EventLevel::Critical, "api", "deploy failed"));

        assert!(second > first);
        let ids: Vec<u64> = log.newest().map(|e| e.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn history_is_capped() {
        let mut log = EventLog::default();
        for i in 0..MAX_EVENTS + 25 {
            log.push(DomainEvent::new(EventLevel::Info, "load", format!("event {i}")));
        }

        assert_eq!(log.len(), MAX_EVENTS);
        assert_eq!(log.newest().last().map(|e| e.id), Some(26));
    }

    #[test]
    fn counts_by_level_and_source() {
        let mut log = EventLog::default();
        log.push(DomainEvent::new(EventLevel::Warning, "billing", "slow"));
        log.push(DomainEvent::new(EventLevel::Warning, "search", "slow"));
        log.push(DomainEvent::new(EventLevel::Info, "search", "ok"));

        assert_eq!(log.count(EventLevel::Warning), 2);
        assert_eq!(log.count(EventLevel::Critical), 0);
        assert_eq!(log.count_by_source().get("search"), Some(&2));

        log.clear();
        assert!(log.is_empty());
    }
}
